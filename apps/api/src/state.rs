use std::sync::Arc;

use bytes::Bytes;

use crate::compose::{Composer, Theme};
use crate::extract::SourceExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup. Requests never mutate shared
/// state, so cloning cheap handles is all the coordination required.
#[derive(Clone)]
pub struct AppState {
    /// Styling knobs for the composer, resolved from `THEME` at startup.
    pub theme: Theme,
    /// Brand logo bytes. `None` when `LOGO_PATH` is unset or unreadable; the
    /// composer then skips the header block entirely.
    pub logo: Option<Bytes>,
    /// Pluggable document backend. Default: `DocxComposer`.
    pub composer: Arc<dyn Composer>,
    /// Pluggable uploaded-document extractor. The shipped backend is the
    /// fixture placeholder, `extract::FixtureExtractor`.
    pub extractor: Arc<dyn SourceExtractor>,
}
