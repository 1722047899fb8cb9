//! Word-document composer built on docx-rs.
//!
//! Layout per document: optional header (logo + brand bar), centered name,
//! then one section per non-empty content field, each introduced by a colored
//! heading with a horizontal rule under it.

use std::io::{Read, Seek, SeekFrom};

use docx_rs::{
    AlignmentType, BorderType, Docx, Header, PageMargin, Paragraph, ParagraphBorder,
    ParagraphBorderPosition, ParagraphBorders, Pic, Run, RunFonts,
};

use crate::compose::theme::normalize_hex;
use crate::compose::{Composer, Theme};
use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeContent};

const TWIPS_PER_INCH: f32 = 1440.0;
const EMU_PER_INCH: f32 = 914_400.0;

// Border widths in eighths of a point.
const SECTION_RULE_SZ: usize = 12;
const HEADER_BAR_SZ: usize = 40;

// Display sizes relative to the theme body size, in points.
const NAME_DELTA_PT: u8 = 7;
const HEADING_DELTA_PT: u8 = 2;

/// Composes `.docx` artifacts. Stateless; all styling comes from the `Theme`.
pub struct DocxComposer;

impl Composer for DocxComposer {
    fn compose(
        &self,
        content: &ResumeContent,
        theme: &Theme,
        logo: Option<&[u8]>,
    ) -> Result<Vec<u8>, AppError> {
        // Theme colors are validated at startup; fall back to black rather
        // than emit a corrupt color attribute if one slips through.
        let heading_hex = normalize_hex(&theme.heading_hex).unwrap_or_else(|| "000000".to_string());
        let accent_hex = normalize_hex(&theme.accent_hex).unwrap_or_else(|| "000000".to_string());

        let margin = (theme.margin_in * TWIPS_PER_INCH) as i32;
        let mut docx = Docx::new().page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        );

        // Header block: logo plus brand bar. Skipped entirely when the theme
        // disables it or no logo bytes were loaded.
        if theme.header_logo {
            if let Some(bytes) = logo {
                docx = docx.header(build_header(bytes, theme, &accent_hex));
            }
        }

        docx = docx.add_paragraph(name_paragraph(&content.name, theme, &heading_hex));

        if !content.summary.trim().is_empty() {
            docx = add_section(docx, "SUMMARY", theme, &heading_hex, &accent_hex);
            docx = docx.add_paragraph(
                Paragraph::new().add_run(body_run(content.summary.trim(), theme)),
            );
        }

        if !content.certifications.is_empty() {
            docx = add_section(docx, "CERTIFICATIONS", theme, &heading_hex, &accent_hex);
            for item in &content.certifications {
                docx = docx.add_paragraph(bullet_paragraph(item, theme));
            }
        }

        if !content.skills.is_empty() {
            docx = add_section(docx, "SKILLS", theme, &heading_hex, &accent_hex);
            for item in &content.skills {
                docx = docx.add_paragraph(bullet_paragraph(item, theme));
            }
        }

        if !content.experience.is_empty() {
            docx = add_section(docx, "EXPERIENCE", theme, &heading_hex, &accent_hex);
            for entry in &content.experience {
                docx = add_experience(docx, entry, theme);
            }
        }

        if !content.education.is_empty() {
            docx = add_section(docx, "EDUCATION", theme, &heading_hex, &accent_hex);
            for entry in &content.education {
                docx = add_education(docx, entry, theme, &accent_hex);
            }
        }

        pack(docx)
    }
}

/// Packs the document into a transient anonymous temp file and reads the
/// bytes back. The file is unlinked on drop, so nothing survives the call.
fn pack(docx: Docx) -> Result<Vec<u8>, AppError> {
    let mut file = tempfile::tempfile()
        .map_err(|e| AppError::Compose(format!("failed to open a scratch file: {e}")))?;

    docx.build()
        .pack(&mut file)
        .map_err(|e| AppError::Compose(format!("failed to pack the document archive: {e}")))?;

    file.seek(SeekFrom::Start(0))
        .map_err(|e| AppError::Compose(format!("failed to rewind the scratch file: {e}")))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| AppError::Compose(format!("failed to read the packed document: {e}")))?;
    Ok(buf)
}

fn build_header(logo: &[u8], theme: &Theme, accent_hex: &str) -> Header {
    let width = (theme.logo_width_in * EMU_PER_INCH) as u32;
    // Fixed 2:1 box; the expected asset is a wide wordmark.
    let pic = Pic::new(logo).size(width, width / 2);

    Header::new()
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(Run::new().add_image(pic)),
        )
        .add_paragraph(rule_paragraph(accent_hex, HEADER_BAR_SZ))
}

/// An empty paragraph carrying only a bottom border: the horizontal rule.
fn rule_paragraph(hex: &str, size: usize) -> Paragraph {
    Paragraph::new().set_borders(
        ParagraphBorders::with_empty().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(size)
                .color(hex.to_string()),
        ),
    )
}

fn name_paragraph(name: &str, theme: &Theme, heading_hex: &str) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(name)
            .bold()
            .size(half_points(theme.body_size_pt + NAME_DELTA_PT))
            .color(heading_hex)
            .fonts(RunFonts::new().ascii(theme.heading_font.as_str())),
    )
}

fn add_section(docx: Docx, title: &str, theme: &Theme, heading_hex: &str, accent_hex: &str) -> Docx {
    let mut docx = docx.add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(title)
                .bold()
                .size(half_points(theme.body_size_pt + HEADING_DELTA_PT))
                .color(heading_hex)
                .fonts(RunFonts::new().ascii(theme.heading_font.as_str())),
        ),
    );
    if theme.section_rules {
        docx = docx.add_paragraph(rule_paragraph(accent_hex, SECTION_RULE_SZ));
    }
    docx
}

fn add_experience(docx: Docx, entry: &ExperienceEntry, theme: &Theme) -> Docx {
    let mut header = Paragraph::new().add_run(
        Run::new()
            .add_text(entry.company.as_str())
            .bold()
            .size(half_points(theme.body_size_pt))
            .fonts(RunFonts::new().ascii(theme.body_font.as_str())),
    );

    let tail = location_tail(entry);
    if !tail.is_empty() {
        header = header.add_run(body_run(&format!("  {tail}"), theme));
    }

    let mut docx = docx.add_paragraph(header);
    docx = docx.add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(entry.title.as_str())
                .italic()
                .size(half_points(theme.body_size_pt))
                .fonts(RunFonts::new().ascii(theme.body_font.as_str())),
        ),
    );
    for bullet in &entry.bullets {
        docx = docx.add_paragraph(bullet_paragraph(bullet, theme));
    }
    docx
}

/// Builds the `"City, ST  years"` tail of an experience heading from the
/// fields that are actually present. Empty fields leave no stray separators.
fn location_tail(entry: &ExperienceEntry) -> String {
    let mut tail = String::new();
    if !entry.city.is_empty() {
        tail.push_str(&entry.city);
    }
    if !entry.state.is_empty() {
        if !tail.is_empty() {
            tail.push_str(", ");
        }
        tail.push_str(&entry.state);
    }
    if !entry.years.is_empty() {
        if !tail.is_empty() {
            tail.push_str("  ");
        }
        tail.push_str(&entry.years);
    }
    tail
}

fn add_education(docx: Docx, entry: &EducationEntry, theme: &Theme, accent_hex: &str) -> Docx {
    docx.add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(entry.university.as_str())
                .bold()
                .size(half_points(theme.body_size_pt))
                .fonts(RunFonts::new().ascii(theme.body_font.as_str())),
        ),
    )
    .add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(entry.degree.as_str())
                .italic()
                .size(half_points(theme.body_size_pt))
                .color(accent_hex)
                .fonts(RunFonts::new().ascii(theme.body_font.as_str())),
        ),
    )
}

fn bullet_paragraph(text: &str, theme: &Theme) -> Paragraph {
    Paragraph::new().add_run(body_run(&format!("{} {}", theme.bullet_glyph, text), theme))
}

fn body_run(text: &str, theme: &Theme) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(theme.body_size_pt))
        .fonts(RunFonts::new().ascii(theme.body_font.as_str()))
}

/// Word run sizes are expressed in half-points.
fn half_points(pt: u8) -> usize {
    pt as usize * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::theme;

    fn sample_content() -> ResumeContent {
        ResumeContent {
            name: "Jordan Avery".to_string(),
            summary: "Engineer with a decade of platform work.".to_string(),
            certifications: vec!["AWS SAA".to_string()],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: vec![ExperienceEntry {
                company: "Initech".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                years: "2020".to_string(),
                title: "Developer".to_string(),
                bullets: vec!["Shipped the TPS pipeline".to_string()],
            }],
            education: vec![EducationEntry {
                university: "State University".to_string(),
                degree: "BS Computer Science".to_string(),
            }],
        }
    }

    #[test]
    fn test_compose_produces_zip_archive() {
        let bytes = DocxComposer
            .compose(&sample_content(), &theme::classic(), None)
            .unwrap();
        assert!(bytes.len() > 500, "artifact should be a real archive");
        assert_eq!(&bytes[..2], b"PK", "docx artifacts are zip containers");
    }

    #[test]
    fn test_compose_with_empty_sections_still_succeeds() {
        let content = ResumeContent {
            name: "Jordan Avery".to_string(),
            ..ResumeContent::default()
        };
        let bytes = DocxComposer
            .compose(&content, &theme::classic(), None)
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    /// A header-enabled theme with no logo bytes must skip the header step,
    /// not fail.
    #[test]
    fn test_missing_logo_skips_header() {
        let t = theme::classic();
        assert!(t.header_logo, "classic theme renders a header when possible");
        let bytes = DocxComposer.compose(&sample_content(), &t, None).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_location_tail_omits_empty_fields() {
        let mut entry = sample_content().experience[0].clone();
        assert_eq!(location_tail(&entry), "Springfield, IL  2020");

        entry.city = String::new();
        entry.state = String::new();
        entry.years = String::new();
        assert_eq!(location_tail(&entry), "");

        entry.years = "2020".to_string();
        assert_eq!(location_tail(&entry), "2020");
    }

    #[test]
    fn test_slate_theme_composes_without_header() {
        let bytes = DocxComposer
            .compose(&sample_content(), &theme::slate(), None)
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
