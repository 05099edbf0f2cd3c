use beacon_metadata::{longest_common_substring, parse, strip_markers};
use proptest::prelude::*;

proptest! {
    /// The derived label is a substring of every marker-stripped input.
    #[test]
    fn lcs_is_substring_of_every_input(
        strings in proptest::collection::vec("[a-z ]{1,30}", 1..6)
    ) {
        let refs: Vec<&str> = strings.iter().map(String::as_str).collect();
        let label = longest_common_substring(&refs);
        if refs.len() > 1 && !label.is_empty() {
            for s in &refs {
                prop_assert!(s.contains(&label), "{:?} should contain {:?}", s, label);
            }
        }
    }

    /// Cluster labels derived during parsing are substrings of each
    /// member's stripped description.
    #[test]
    fn cluster_label_is_substring_of_each_member(
        core in "[A-Za-z ]{1,20}",
        prefix_a in "[A-Za-z ]{0,10}",
        prefix_b in "[A-Za-z ]{0,10}",
    ) {
        let me = format!("Table 2.3.1. {core} (A)");
        let sib_one = format!("Table 2.3.2. {prefix_a}{core} (Q)");
        let sib_two = format!("Table 2.3.3. {prefix_b}{core}");
        let siblings = [sib_one.as_str(), sib_two.as_str()];

        if let Some(meta) = parse(&me, &siblings) {
            let label = meta.subsection_label;
            if !label.is_empty() {
                for member in [me.as_str(), sib_one.as_str(), sib_two.as_str()] {
                    prop_assert!(
                        strip_markers(member).contains(&label),
                        "{:?} should contain {:?}", strip_markers(member), label
                    );
                }
            }
        }
    }

    /// Any input either parses or yields None; never a panic.
    #[test]
    fn parse_never_panics(s in ".{0,80}") {
        let _ = parse(&s, &[]);
    }

    /// Frequency flags come only from literal marker tokens.
    #[test]
    fn frequency_flags_match_literal_markers(body in "[a-z ]{0,30}") {
        let name = format!("Table 1.1.1. {body} (Q)");
        let meta = parse(&name, &[]).unwrap();
        prop_assert!(meta.is_quarterly);
        prop_assert!(!meta.is_annual);
        prop_assert!(!meta.is_monthly);
    }
}
