use thiserror::Error;

/// Errors that can occur during order construction or page composition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BestellungError {
    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Low-level PDF generation failed.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// The laid-out content would run past the bottom margin of the page.
    ///
    /// Font-size degradation keeps realistic row counts on one page; this
    /// error rejects inputs the density heuristic cannot fit instead of
    /// silently producing an overflowing document.
    #[error("page overflow: {rows} line items do not fit on a single A4 page")]
    PageOverflow { rows: usize },
}
