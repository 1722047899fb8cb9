// Free-text parsing: the section parsers that turn raw form fields into
// structured records, plus the structured-record (JSON) decode path.

pub mod blocks;
pub mod education;
pub mod experience;
pub mod flat_list;
pub mod records;

pub use education::parse_education;
pub use experience::parse_experience;
pub use flat_list::parse_flat_list;
pub use records::{decode_education, decode_experience};
