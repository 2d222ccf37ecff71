//! Substring filtering for the dropdown.

use std::ops::Range;

use pokepick_api::NamedResource;

/// Result of a filter pass over the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched option in the original list.
    pub index: usize,
    /// Byte range of the first occurrence of the query in the option name.
    /// `None` when the query is empty.
    pub span: Option<Range<usize>>,
}

/// Case-insensitive substring filter.
///
/// An option survives when its name contains the query anywhere, ignoring
/// case. The original list order is preserved. An empty query matches every
/// option and carries no span.
///
/// # Example
///
/// ```ignore
/// let matches = substring_filter("saur", &options);
/// // bulbasaur, ivysaur, venusaur - in list order, each with the
/// // byte range of "saur" in its name
/// ```
pub fn substring_filter(query: &str, options: &[NamedResource]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return options
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, span: None })
            .collect();
    }

    options
        .iter()
        .enumerate()
        .filter_map(|(index, option)| {
            find_ignore_case(&option.name, query).map(|span| FilterMatch {
                index,
                span: Some(span),
            })
        })
        .collect()
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`,
/// returning its byte range in `haystack`.
///
/// Comparison is per character, so the returned range always falls on char
/// boundaries of the original string.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        if let Some(end) = match_at(haystack, start, needle) {
            return Some(start..end);
        }
    }

    None
}

/// Checks whether `needle` matches `haystack` at byte offset `start`,
/// returning the end offset of the match.
fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut end = start;
    let mut haystack_chars = haystack[start..].chars();

    for needle_char in needle.chars() {
        let haystack_char = haystack_chars.next()?;
        if !chars_eq_ignore_case(haystack_char, needle_char) {
            return None;
        }
        end += haystack_char.len_utf8();
    }

    Some(end)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<NamedResource> {
        names
            .iter()
            .map(|name| NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{name}/"),
            })
            .collect()
    }

    #[test]
    fn test_empty_query_matches_all_without_spans() {
        let options = options(&["bulbasaur", "charmander", "squirtle"]);
        let matches = substring_filter("", &options);

        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.span.is_none()));
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[2].index, 2);
    }

    #[test]
    fn test_substring_match_anywhere() {
        let options = options(&["bulbasaur", "charmander", "squirtle"]);
        let matches = substring_filter("ar", &options);

        // "ar" occurs in bulbasaur and charmander, not squirtle
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let options = options(&["Pikachu"]);

        let matches = substring_filter("PIKA", &options);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].span, Some(0..4));

        let matches = substring_filter("chu", &options);
        assert_eq!(matches[0].span, Some(4..7));
    }

    #[test]
    fn test_preserves_source_order() {
        let options = options(&["venusaur", "ivysaur", "bulbasaur"]);
        let matches = substring_filter("saur", &options);

        let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_no_match() {
        let options = options(&["bulbasaur"]);
        assert!(substring_filter("zzz", &options).is_empty());
    }

    #[test]
    fn test_span_is_first_occurrence() {
        let options = options(&["rattata"]);
        let matches = substring_filter("ta", &options);

        assert_eq!(matches[0].span, Some(3..5));
    }

    #[test]
    fn test_find_ignore_case_multibyte() {
        // span boundaries must stay valid around multi-byte characters
        let range = find_ignore_case("flabébé", "bé").unwrap();
        assert_eq!(range, 3..6);
        assert_eq!(&"flabébé"[range], "bé");
    }

    #[test]
    fn test_find_ignore_case_empty_needle() {
        assert_eq!(find_ignore_case("bulbasaur", ""), None);
    }

    #[test]
    fn test_query_longer_than_name() {
        let options = options(&["mew"]);
        assert!(substring_filter("mewtwo", &options).is_empty());
    }
}
