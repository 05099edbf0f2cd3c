use beacon_core::extract::{first_integer, first_json_object};
use proptest::prelude::*;

proptest! {
    #[test]
    fn json_snippet_is_brace_delimited(s in ".{0,200}") {
        if let Some(snippet) = first_json_object(&s) {
            prop_assert!(snippet.starts_with('{'), "snippet must start with an opening brace");
            prop_assert!(snippet.ends_with('}'), "snippet must end with a closing brace");
            prop_assert!(snippet.len() >= 2);
        }
    }

    #[test]
    fn integer_extraction_never_panics_and_is_bounded(s in ".{0,200}") {
        if let Some(n) = first_integer(&s) {
            prop_assert!((0..1000).contains(&n), "three digits max: {}", n);
        }
    }

    #[test]
    fn embedded_integer_is_found(prefix in "[^0-9]{0,40}", n in 0u16..1000) {
        let text = format!("{}{}", prefix, n);
        prop_assert_eq!(first_integer(&text), Some(i64::from(n)));
    }
}
