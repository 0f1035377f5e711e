//! Sequential and parallel machine composition.
//!
//! Both modes start the same way: every state of the secondary machine is
//! copied into a union with the primary under a disambiguated name, shifted
//! right so the two halves do not visually overlap, and every secondary
//! transition is copied across the rename. Parallel composition stops there
//! — a disjoint union. Sequential composition additionally bridges each
//! immediate successor of the primary's start state to the secondary's
//! entry state with a `λ/λ` transition.
//!
//! `merge` is a pure function: it never mutates either input, and the
//! primary's designated start state carries over to the result unchanged.

mod error;

pub use error::ComposeError;

use crate::core::Automaton;
use serde::{Deserialize, Serialize};

/// The sentinel signal pair used for bridges inserted by sequential
/// composition: consumed and emitted without meaning.
pub const EPSILON: &str = "λ";

/// Horizontal shift applied to every copied secondary state, so the second
/// machine lands beside the first rather than on top of it. Positions carry
/// no simulation semantics.
pub const SECONDARY_OFFSET_X: f64 = 200.0;

const RENAME_SUFFIX: &str = "_2";

/// How two machines are folded together.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MergeMode {
    /// Chain the machines: bridge the primary start state's immediate
    /// successors to the secondary's entry state.
    Sequential,
    /// Place the machines side by side with no interaction.
    Parallel,
}

/// Merge `secondary` into `primary`, returning the combined machine.
///
/// Secondary state names are suffixed with `_2` (repeatedly, if the
/// candidate is already taken) so no collision with the union is possible,
/// even when the two machines use identical names. The rename is
/// deterministic given the same inputs.
///
/// Sequential mode requires `primary` to have a start state and attaches
/// the secondary at its first-inserted state — only the start state's
/// *immediate* successors are bridged, not the full reachable set. A start
/// state with no outgoing transitions yields a union whose second half is
/// unreachable; that is accepted, not an error.
///
/// # Example
///
/// ```rust
/// use mealy::{compose, Automaton, MergeMode};
///
/// let mut primary = Automaton::new();
/// primary.add_state("A", 0.0, 0.0);
/// primary.add_state("B", 100.0, 0.0);
/// primary.add_transition("A", "B", "1", "x");
/// primary.set_current_state("A").unwrap();
///
/// let mut secondary = Automaton::new();
/// secondary.add_state("C", 0.0, 0.0);
///
/// let merged = compose::merge(&primary, &secondary, MergeMode::Sequential).unwrap();
/// assert!(merged.contains_state("C_2"));
/// assert_eq!(merged.current_state(), Some("A"));
/// ```
pub fn merge(
    primary: &Automaton,
    secondary: &Automaton,
    mode: MergeMode,
) -> Result<Automaton, ComposeError> {
    let mut merged = primary.clone();

    // Copy the secondary's states under collision-free names, keeping a
    // rename map for its transitions and for the bridge target.
    let mut renames: Vec<(String, String)> = Vec::new();
    for state in secondary.states() {
        let new_name = disambiguate(&merged, &state.name);
        merged.add_state(
            new_name.clone(),
            state.position.x + SECONDARY_OFFSET_X,
            state.position.y,
        );
        renames.push((state.name.clone(), new_name));
    }

    for transition in secondary.transitions() {
        merged.add_transition(
            renamed(&renames, &transition.source),
            renamed(&renames, &transition.target),
            transition.input.clone(),
            transition.output.clone(),
        );
    }

    if mode == MergeMode::Sequential {
        let start = primary
            .current_state()
            .ok_or(ComposeError::NoStartState)?
            .to_string();

        // The entry point is the secondary's first-inserted state. An empty
        // secondary has no entry; the union is kept as-is.
        if let Some((_, entry)) = renames.first() {
            let entry = entry.clone();
            let mut successors: Vec<String> = Vec::new();
            for transition in merged.transitions_from(&start) {
                if !successors.contains(&transition.target) {
                    successors.push(transition.target.clone());
                }
            }
            for successor in successors {
                merged.add_transition(successor, entry.clone(), EPSILON, EPSILON);
            }
        }
    }

    Ok(merged)
}

/// Derive a name for a copied secondary state that cannot collide with
/// anything already in the union.
fn disambiguate(taken: &Automaton, name: &str) -> String {
    let mut candidate = format!("{name}{RENAME_SUFFIX}");
    while taken.contains_state(&candidate) {
        candidate.push_str(RENAME_SUFFIX);
    }
    candidate
}

fn renamed(renames: &[(String, String)], original: &str) -> String {
    renames
        .iter()
        .find(|(old, _)| old == original)
        .map(|(_, new)| new.clone())
        // Unreachable for transitions the secondary validated at creation
        // time; fall back to the original name, which add_transition will
        // then drop as unknown.
        .unwrap_or_else(|| original.to_string())
}
