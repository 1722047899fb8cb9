//! Experience block parser: free text in, `ExperienceEntry` records out.
//!
//! One job per blank-line-separated block. Lenient by contract: malformed
//! blocks are dropped, never surfaced as errors.

use crate::models::resume::ExperienceEntry;
use crate::parser::blocks::split_blocks;

/// Parses zero or more job entries from raw experience text.
///
/// Block shape: line 1 is the company/location/years header, line 2 is the
/// job title, every further line is one bullet. Blocks with fewer than 3
/// non-empty lines are discarded silently.
pub fn parse_experience(raw: &str) -> Vec<ExperienceEntry> {
    split_blocks(raw).into_iter().filter_map(parse_block).collect()
}

fn parse_block(lines: Vec<String>) -> Option<ExperienceEntry> {
    if lines.len() < 3 {
        return None;
    }

    let (company, city, state, years) = split_header(&lines[0]);
    Some(ExperienceEntry {
        company,
        city,
        state,
        years,
        title: lines[1].clone(),
        bullets: lines[2..].to_vec(),
    })
}

/// Splits a header line of the form `"<company>, <city> <state> <years>"`.
///
/// The line is split on single spaces into at most 4 pieces from the right:
/// the rightmost three become the city, state, and years candidates, and
/// everything remaining (internal spaces included) is the company. Trailing
/// commas are stripped from the city candidate. Fewer than 4 pieces means the
/// whole line is the company and the other fields are empty strings.
///
/// Known limitation, kept intentionally: a multi-word trailing phrase shifts
/// the boundaries. `"Acme Corp, Springfield IL 2019 to Present"` yields
/// company `"Acme Corp, Springfield IL"`, city `"2019"`, state `"to"`, years
/// `"Present"`. Existing documents were produced with exactly this split, so
/// it must not be replaced with a smarter grouping.
fn split_header(header: &str) -> (String, String, String, String) {
    let mut parts: Vec<&str> = header.rsplitn(4, ' ').collect();
    parts.reverse();

    if parts.len() == 4 {
        (
            parts[0].to_string(),
            parts[1].trim_end_matches(',').to_string(),
            parts[2].to_string(),
            parts[3].to_string(),
        )
    } else {
        (
            header.to_string(),
            String::new(),
            String::new(),
            String::new(),
        )
    }
}
