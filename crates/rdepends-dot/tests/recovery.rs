//! Recovery from malformed lines is local.
//!
//! Whatever garbage surrounds a valid statement, the statement is extracted
//! exactly as if the garbage were not there.

use proptest::prelude::*;
use rdepends_dot::Dependencies;

/// Lines the scanner must skip without side effects on their neighbours.
fn garbage_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("garbage input".to_string()),
        Just("\"nope\"".to_string()),
        Just("digraph depends {".to_string()),
        Just("}".to_string()),
        Just("\"a\" -".to_string()),
        Just("\"a\" ->".to_string()),
        Just("\"unterminated".to_string()),
        Just("// \"x\" -> \"y\"".to_string()),
        Just("\"node\" [label=\"x -> y\"]".to_string()),
        "[ -~]{0,24}".prop_filter("no quotes", |line| !line.contains('"')
            && !line.contains("->")),
    ]
}

fn edge_line() -> impl Strategy<Value = (String, String)> {
    ("[a-z][a-z0-9.-]{0,6}", "[a-z][a-z0-9.-]{0,6}")
        .prop_filter("distinct operands", |(left, right)| left != right)
}

proptest! {
    #[test]
    fn garbage_between_edges_changes_nothing(
        items in prop::collection::vec((edge_line(), garbage_line()), 1..16)
    ) {
        let clean: String = items
            .iter()
            .map(|((left, right), _)| format!("\"{left}\" -> \"{right}\"\n"))
            .collect();
        let noisy: String = items
            .iter()
            .map(|((left, right), garbage)| format!("{garbage}\n\"{left}\" -> \"{right}\"\n{garbage}\n"))
            .collect();

        let expected = Dependencies::from_dot(&clean);
        let actual = Dependencies::from_dot(&noisy);

        let expected_names: Vec<_> = expected.registry().names().collect();
        let actual_names: Vec<_> = actual.registry().names().collect();
        prop_assert_eq!(expected_names, actual_names);
        prop_assert_eq!(expected.edges(), actual.edges());
    }
}
