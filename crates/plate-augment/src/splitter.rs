/// Split a raw attribute value into its comma-separated phrases.
///
/// Each segment is trimmed; segments that are empty after trimming are dropped.
/// Surviving phrases keep their left-to-right order.
pub fn split_phrases(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            split_phrases(" red top ,white middle,  blue bottom"),
            vec!["red top", "white middle", "blue bottom"]
        );
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(split_phrases("a,, ,b,"), vec!["a", "b"]);
        assert!(split_phrases(" , ,").is_empty());
        assert!(split_phrases("").is_empty());
    }

    #[test]
    fn keeps_inner_spacing() {
        assert_eq!(split_phrases("red  top"), vec!["red  top"]);
    }
}
