const MAX_SLUG_LENGTH: usize = 80;

/// Turn a topic title into a URL-safe slug.
///
/// Lowercases, replaces every non-alphanumeric run with a single
/// hyphen, and bounds the length. Uniqueness is the caller's problem.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let mut slug = replaced
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    slug.truncate(MAX_SLUG_LENGTH);

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("What's new -- in Rust?!"), "what-s-new-in-rust");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(slugify("Cafés & Crème"), "caf-s-cr-me");
    }

    #[test]
    fn truncates_long_titles() {
        let slug = slugify(&"word ".repeat(50));

        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn symbol_only_title_becomes_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
