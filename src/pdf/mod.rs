//! One-page A4 purchase-order composition.
//!
//! The composer turns `(OrderMeta, OrderLines)` into a single fixed-layout
//! PDF page: title block, boxed meta block, item table, totals, disclaimer,
//! and footer. Fonts are the standard Type1 Helvetica faces, text density
//! adapts to the row count, and identical inputs produce byte-identical
//! output — the composer never touches a clock or performs I/O.

mod article;
mod compose;
mod layout;
mod money;
mod writer;

pub use article::article_description;
pub use compose::{RenderedDocument, compose};
pub use layout::{
    ColumnSpec, FontSizes, ITEM_COLUMNS, MARGIN_BOTTOM_MM, MARGIN_LEFT_MM, MARGIN_RIGHT_MM,
    MARGIN_TOP_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PRINTABLE_WIDTH_MM, font_sizes_for_rows,
    mm_to_pt, scale_widths,
};
pub use money::{format_eur, format_eur_lossy};
