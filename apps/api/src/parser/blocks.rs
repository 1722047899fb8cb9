//! Blank-line block splitting, shared by the experience and education parsers.

/// Splits raw text into blocks separated by blank lines, then each block into
/// trimmed non-empty lines.
///
/// The separator is a literal empty line (`\n\n`). A line containing only
/// whitespace does NOT separate blocks; it is dropped at the line stage, so
/// the text around it stays in one block.
pub fn split_blocks(raw: &str) -> Vec<Vec<String>> {
    raw.trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_blocks_split_on_blank_line() {
        let blocks = split_blocks("a\nb\n\nc\nd");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec!["a", "b"]);
        assert_eq!(blocks[1], vec!["c", "d"]);
    }

    #[test]
    fn test_multiple_blank_lines_do_not_produce_empty_blocks() {
        let blocks = split_blocks("a\n\n\n\nb");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec!["a"]);
        assert_eq!(blocks[1], vec!["b"]);
    }

    #[test]
    fn test_whitespace_only_line_is_not_a_separator() {
        // "a\n \nb" has no empty line, only a line holding a space.
        // The two sides stay in one block and the space line is dropped.
        let blocks = split_blocks("a\n \nb");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], vec!["a", "b"]);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let blocks = split_blocks("  a  \n\tb\t");
        assert_eq!(blocks[0], vec!["a", "b"]);
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n  \n ").is_empty());
    }
}
