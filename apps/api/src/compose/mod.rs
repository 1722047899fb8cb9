// Document composition: theme configuration plus the docx backend behind the
// `Composer` trait. All styling flows through `Theme`; the composer itself is
// stateless.

pub mod docx;
pub mod theme;

pub use docx::DocxComposer;
pub use theme::{theme_by_name, Theme};

use crate::errors::AppError;
use crate::models::resume::ResumeContent;

/// The composer seam. Implementations take parsed records plus a theme and
/// return an opaque document artifact as bytes.
///
/// Carried in `AppState` as `Arc<dyn Composer>` so a different document
/// backend can be swapped in without touching handlers or the pipeline.
pub trait Composer: Send + Sync {
    fn compose(
        &self,
        content: &ResumeContent,
        theme: &Theme,
        logo: Option<&[u8]>,
    ) -> Result<Vec<u8>, AppError>;
}
