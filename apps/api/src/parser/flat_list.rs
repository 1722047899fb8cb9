//! Flat list parser for the skills and certifications fields.

/// Parses a flat list field into trimmed, non-empty items.
///
/// Delimiter selection: if the text contains `|`, the pipe is the SOLE
/// delimiter and newlines are ordinary characters inside items. Otherwise one
/// item per non-blank line. There is no escaping; a literal `|` inside an
/// item is indistinguishable from a delimiter.
///
/// Empty or whitespace-only input yields an empty list, never an error.
/// Duplicates are allowed and input order is preserved.
pub fn parse_flat_list(raw: &str) -> Vec<String> {
    let pieces: Vec<&str> = if raw.contains('|') {
        raw.split('|').collect()
    } else {
        raw.trim().split('\n').collect()
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_mode_one_item_per_line() {
        let items = parse_flat_list("Rust\nPython\nSQL");
        assert_eq!(items, vec!["Rust", "Python", "SQL"]);
    }

    #[test]
    fn test_newline_mode_drops_blank_lines() {
        let items = parse_flat_list("Rust\n\n  \nSQL\n");
        assert_eq!(items, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_pipe_mode_splits_on_pipe_only() {
        let items = parse_flat_list("AWS SAA | CKA | Security+");
        assert_eq!(items, vec!["AWS SAA", "CKA", "Security+"]);
    }

    #[test]
    fn test_pipe_mode_ignores_newlines() {
        // One pipe anywhere switches the whole field to pipe mode: the
        // embedded newline stays inside the first item.
        let items = parse_flat_list("A\nB|C");
        assert_eq!(items, vec!["A\nB", "C"]);
    }

    #[test]
    fn test_pipe_mode_drops_empty_segments() {
        let items = parse_flat_list("|A||B|");
        assert_eq!(items, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let items = parse_flat_list("Rust\nRust\nGo");
        assert_eq!(items, vec!["Rust", "Rust", "Go"]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(parse_flat_list("").is_empty());
        assert!(parse_flat_list("  \n \t ").is_empty());
    }
}
