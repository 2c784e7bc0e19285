//! Page geometry, column scaling, and the row-density font policy.

/// A4 portrait, in millimeters.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const MARGIN_LEFT_MM: f32 = 15.0;
pub const MARGIN_RIGHT_MM: f32 = 15.0;
pub const MARGIN_TOP_MM: f32 = 12.0;
pub const MARGIN_BOTTOM_MM: f32 = 12.0;

/// Page width minus left/right margins — the target for column scaling.
pub const PRINTABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Convert millimeters to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// One item-table column: header label and relative width.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub weight: f32,
}

/// Item-table columns in display order. Absolute widths are derived once per
/// render by scaling the weights to the printable width.
pub const ITEM_COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec { label: "Pos.", weight: 10.0 },
    ColumnSpec { label: "Quantity", weight: 18.0 },
    ColumnSpec { label: "Article", weight: 85.0 },
    ColumnSpec { label: "Note", weight: 35.0 },
    ColumnSpec { label: "VAT %", weight: 12.0 },
    ColumnSpec { label: "Net price (EUR)", weight: 30.0 },
    ColumnSpec { label: "Total (EUR)", weight: 30.0 },
];

/// Scale relative weights so they sum to `target`, preserving proportions.
///
/// A non-positive weight sum returns the input unchanged instead of
/// dividing by zero.
pub fn scale_widths(weights: &[f32], target: f32) -> Vec<f32> {
    let sum: f32 = weights.iter().sum();
    if sum <= 0.0 {
        return weights.to_vec();
    }
    let factor = target / sum;
    weights.iter().map(|w| w * factor).collect()
}

/// Body and small font sizes chosen for a given row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub body: f32,
    pub small: f32,
}

/// Density heuristic keeping arbitrary row counts visually within one page:
/// up to 18 rows render at 8 pt, up to 24 at 7 pt, beyond that at 6 pt.
/// This gives no overflow guarantee — the composer checks that separately.
pub fn font_sizes_for_rows(rows: usize) -> FontSizes {
    let body = if rows <= 18 {
        8.0
    } else if rows <= 24 {
        7.0
    } else {
        6.0
    };
    let small = if body >= 7.0 { 7.0 } else { 6.0 };
    FontSizes { body, small }
}
