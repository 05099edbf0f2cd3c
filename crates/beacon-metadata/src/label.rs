//! Canonical label derivation via longest common substring.

/// The longest contiguous substring common to every input string.
///
/// The first string is the reference; substrings are tried by increasing
/// length, leftmost start first, and the first substring of the longest
/// length contained in every other string wins. With zero or one inputs
/// the result is the (trimmed) input itself or empty.
///
/// Quadratic in the reference length, which is fine: sibling clusters stay
/// in the double digits.
pub fn longest_common_substring(strings: &[&str]) -> String {
    match strings {
        [] => String::new(),
        [only] => only.trim().to_string(),
        [reference, rest @ ..] => {
            let chars: Vec<char> = reference.chars().collect();
            let mut best = String::new();

            for len in 1..=chars.len() {
                let mut found = None;
                for start in 0..=(chars.len() - len) {
                    let candidate: String = chars[start..start + len].iter().collect();
                    if rest.iter().all(|s| s.contains(&candidate)) {
                        found = Some(candidate);
                        break;
                    }
                }
                match found {
                    Some(candidate) => best = candidate,
                    // Common substrings are downward closed in length.
                    None => break,
                }
            }

            best.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_inputs() {
        assert_eq!(longest_common_substring(&[]), "");
        assert_eq!(longest_common_substring(&["  Real GDP  "]), "Real GDP");
    }

    #[test]
    fn common_core_of_sibling_labels() {
        let label = longest_common_substring(&[
            "Percent Change in Real Gross Domestic Product",
            "Contributions to Percent Change in Real Gross Domestic Product",
            "Real Gross Domestic Product, Quantity Indexes",
        ]);
        assert_eq!(label, "Real Gross Domestic Product");
    }

    #[test]
    fn disjoint_strings_yield_empty_label() {
        assert_eq!(longest_common_substring(&["abc", "xyz"]), "");
    }

    #[test]
    fn leftmost_wins_among_equal_lengths() {
        // Both "ab" and "cd" are common length-2 substrings; "ab" is
        // leftmost in the reference.
        assert_eq!(longest_common_substring(&["ab_cd", "xxabycdz"]), "ab");
    }
}
