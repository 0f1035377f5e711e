//! Macros for ergonomic machine construction.

/// Declare a whole machine in one expression.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain, so validation is the builder's: duplicate states, unknown
/// endpoints, and an unknown start state are build errors.
///
/// # Example
///
/// ```
/// use mealy::automaton;
///
/// let machine = automaton! {
///     states: [
///         "A" => (0.0, 0.0),
///         "B" => (120.0, 0.0),
///     ],
///     transitions: [
///         "A" - "1" / "x" -> "B",
///         "B" - "0" / "y" -> "A",
///     ],
///     start: "A",
/// }
/// .unwrap();
///
/// assert_eq!(mealy::sim::run(&machine, "A", "10").unwrap(), "xy");
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [ $( $name:literal => ($x:expr, $y:expr) ),* $(,)? ],
        transitions: [ $( $src:literal - $input:literal / $output:literal -> $dst:literal ),* $(,)? ]
        $(, start: $start:literal )? $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new()
            $( .state($name, $x, $y) )*
            $( .transition($src, $dst, $input, $output) )*;
        $( let builder = builder.start($start); )?
        builder.build()
    }};
}
