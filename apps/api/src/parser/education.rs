//! Education block parser: first line university, second line degree.

use crate::models::resume::EducationEntry;
use crate::parser::blocks::split_blocks;

/// Parses zero or more education entries from raw text.
///
/// Same blank-line block splitting as the experience parser. Blocks with
/// fewer than 2 non-empty lines are dropped silently; lines beyond the second
/// are ignored.
pub fn parse_education(raw: &str) -> Vec<EducationEntry> {
    split_blocks(raw)
        .into_iter()
        .filter(|lines| lines.len() >= 2)
        .map(|lines| EducationEntry {
            university: lines[0].clone(),
            degree: lines[1].clone(),
        })
        .collect()
}
