//! Property-based tests for the automaton model and its algorithms.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and input words.

use mealy::{compose, sim, Automaton, MergeMode, Snapshot};
use proptest::prelude::*;

/// A small pool of state names so generated machines collide on purpose.
fn arbitrary_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["A", "B", "C", "D", "E"]).prop_map(str::to_string)
}

fn arbitrary_symbol() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["0", "1", "a", "b"]).prop_map(str::to_string)
}

prop_compose! {
    fn arbitrary_machine()(
        names in prop::collection::vec(arbitrary_name(), 1..5),
        edges in prop::collection::vec(
            (arbitrary_name(), arbitrary_name(), arbitrary_symbol(), arbitrary_symbol()),
            0..8,
        ),
    ) -> Automaton {
        let mut machine = Automaton::new();
        for (i, name) in names.iter().enumerate() {
            machine.add_state(name.clone(), i as f64 * 50.0, 0.0);
        }
        for (source, target, input, output) in edges {
            machine.add_transition(source, target, input, output);
        }
        machine
    }
}

proptest! {
    #[test]
    fn state_names_are_unique(machine in arbitrary_machine()) {
        let names: Vec<&str> = machine.states().iter().map(|s| s.name.as_str()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn repeated_add_state_keeps_the_original(
        machine in arbitrary_machine(),
        x in -500.0..500.0f64,
        y in -500.0..500.0f64,
    ) {
        let mut machine = machine;
        let original = machine.states()[0].clone();
        let count = machine.states().len();

        prop_assert!(!machine.add_state(original.name.clone(), x, y));
        prop_assert_eq!(machine.states().len(), count);
        prop_assert_eq!(machine.state(&original.name).unwrap(), &original);
    }

    #[test]
    fn dangling_transitions_never_land(
        machine in arbitrary_machine(),
        input in arbitrary_symbol(),
        output in arbitrary_symbol(),
    ) {
        let mut machine = machine;
        let count = machine.transitions().len();

        prop_assert!(!machine.add_transition("NotAState", "AlsoNot", input, output));
        prop_assert_eq!(machine.transitions().len(), count);
    }

    #[test]
    fn transition_endpoints_always_exist(machine in arbitrary_machine()) {
        for transition in machine.transitions() {
            prop_assert!(machine.contains_state(&transition.source));
            prop_assert!(machine.contains_state(&transition.target));
        }
    }

    #[test]
    fn simulation_is_deterministic_and_pure(
        machine in arbitrary_machine(),
        word in "[01ab]{0,6}",
    ) {
        let start = machine.states()[0].name.clone();
        let before = machine.clone();

        let first = sim::run(&machine, &start, &word);
        let second = sim::run(&machine, &start, &word);

        prop_assert_eq!(first, second);
        prop_assert_eq!(machine, before);
    }

    #[test]
    fn empty_word_is_identity(machine in arbitrary_machine()) {
        let start = machine.states()[0].name.clone();
        prop_assert_eq!(sim::run(&machine, &start, "").unwrap(), String::new());
    }

    #[test]
    fn trace_output_matches_run(
        machine in arbitrary_machine(),
        word in "[01ab]{0,6}",
    ) {
        let start = machine.states()[0].name.clone();
        let run = sim::run(&machine, &start, &word);
        let trace = sim::trace(&machine, &start, &word);

        match (run, trace) {
            (Ok(output), Ok(trace)) => {
                prop_assert_eq!(output, trace.output());
                prop_assert_eq!(trace.steps().len(), word.chars().count());
            }
            (Err(run_err), Err(trace_err)) => prop_assert_eq!(run_err, trace_err),
            (run, trace) => prop_assert!(false, "run {:?} disagrees with trace {:?}", run, trace),
        }
    }

    #[test]
    fn parallel_merge_counts_add_up(
        primary in arbitrary_machine(),
        secondary in arbitrary_machine(),
    ) {
        let merged = compose::merge(&primary, &secondary, MergeMode::Parallel).unwrap();

        prop_assert_eq!(
            merged.states().len(),
            primary.states().len() + secondary.states().len()
        );
        prop_assert_eq!(
            merged.transitions().len(),
            primary.transitions().len() + secondary.transitions().len()
        );

        // Renaming guarantees the two halves share no state names.
        let names: Vec<&str> = merged.states().iter().map(|s| s.name.as_str()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn sequential_merge_preserves_primary_start(
        primary in arbitrary_machine(),
        secondary in arbitrary_machine(),
    ) {
        let mut primary = primary;
        let start = primary.states()[0].name.clone();
        primary.set_current_state(&start).unwrap();

        let merged = compose::merge(&primary, &secondary, MergeMode::Sequential).unwrap();
        prop_assert_eq!(merged.current_state(), Some(start.as_str()));
    }

    #[test]
    fn snapshot_roundtrip_reproduces_the_machine(machine in arbitrary_machine()) {
        let mut machine = machine;
        let start = machine.states()[0].name.clone();
        machine.set_current_state(&start).unwrap();

        let restored = Snapshot::capture(&machine).restore().unwrap();
        prop_assert_eq!(&restored, &machine);

        let json = Snapshot::capture(&machine).to_json().unwrap();
        let from_json = Snapshot::from_json(&json).unwrap().restore().unwrap();
        prop_assert_eq!(&from_json, &machine);

        let bytes = Snapshot::capture(&machine).to_bytes().unwrap();
        let from_bytes = Snapshot::from_bytes(&bytes).unwrap().restore().unwrap();
        prop_assert_eq!(from_bytes, machine);
    }
}
