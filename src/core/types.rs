use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order metadata — everything on the page except the line items.
///
/// Immutable for the duration of one render. Constructed through
/// [`OrderMetaBuilder`](super::OrderMetaBuilder), which normalizes blank
/// optional fields to `None` at the ingestion boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderMeta {
    /// Ordering company name.
    pub company: String,
    /// Contact person printed in the meta block.
    pub contact_person: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Internal order number ("Our Order No.").
    pub order_number: String,
    /// External order reference ("Your order ref."), printed only when present.
    pub order_reference: Option<String>,
    /// Order date.
    pub date: NaiveDate,
    /// Shipping address, newline-delimited free text.
    pub ship_to: Option<String>,
    /// Billing address, newline-delimited free text.
    pub bill_to: Option<String>,
    /// VAT identifier printed in the title block and footer.
    pub vat_id: String,
    /// VAT rate as a fraction in `[0, 1]` (e.g. `0.21` for 21 %).
    pub vat_rate: Decimal,
    /// Footer free-text block, left column.
    pub footer_left: String,
    /// Footer free-text block, right column (printed below the VAT ID line).
    pub footer_right: String,
}

/// Product groups offered on the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductGroup {
    Bins,
    Lids,
    Buggies,
    Pallets,
}

impl ProductGroup {
    /// Display label as printed in the article column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bins => "Bins",
            Self::Lids => "Lids",
            Self::Buggies => "Buggies",
            Self::Pallets => "Pallets",
        }
    }
}

/// Color preset, with a free-text escape for anything off the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    NaturalWhite,
    Blue,
    Red,
    Green,
    Yellow,
    Gray,
    Black,
    Orange,
    /// Free-text color outside the preset list.
    Other(String),
}

impl Color {
    /// Display label as printed in the article column.
    pub fn label(&self) -> &str {
        match self {
            Self::NaturalWhite => "Natural/White",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Gray => "Gray",
            Self::Black => "Black",
            Self::Orange => "Orange",
            Self::Other(s) => s,
        }
    }
}

/// Insulation wall build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallBuild {
    Epe,
    Pur,
}

impl WallBuild {
    /// Display label as printed in the article column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Epe => "EPE",
            Self::Pur => "PUR",
        }
    }
}

/// Drain plug option, Bins only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drain {
    /// No drain — rendered as absent in the article column.
    None,
    OneInch,
    OneAndHalfInch,
    TwoInch,
    /// Free-text drain outside the preset list.
    Other(String),
}

impl Drain {
    /// Display label as printed in the article column.
    pub fn label(&self) -> &str {
        match self {
            Self::None => "None",
            Self::OneInch => "1\" drain",
            Self::OneAndHalfInch => "1\u{00bd}\" drain",
            Self::TwoInch => "2\" drain",
            Self::Other(s) => s,
        }
    }
}

/// Group-specific article attributes, one variant per product group.
///
/// Rendering dispatches by pattern match; absent optional attributes simply
/// drop out of the display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Article {
    Bins {
        model: Option<String>,
        color: Option<Color>,
        wall_build: Option<WallBuild>,
        drain: Option<Drain>,
    },
    Lids {
        model: Option<String>,
        color: Option<Color>,
        wall_build: Option<WallBuild>,
    },
    Buggies {
        model: Option<String>,
        color: Option<Color>,
    },
    Pallets {
        model: Option<String>,
        color: Option<Color>,
    },
}

impl Article {
    /// The product group this article belongs to.
    pub fn group(&self) -> ProductGroup {
        match self {
            Self::Bins { .. } => ProductGroup::Bins,
            Self::Lids { .. } => ProductGroup::Lids,
            Self::Buggies { .. } => ProductGroup::Buggies,
            Self::Pallets { .. } => ProductGroup::Pallets,
        }
    }
}

/// One order position.
///
/// Invariant: `total == quantity × unit_price`. The builder computes `total`,
/// so the invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Ordered quantity (≥ 1).
    pub quantity: u32,
    /// Group-specific article attributes.
    pub article: Article,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Net unit price in EUR (≥ 0).
    pub unit_price: Decimal,
    /// Line total = quantity × unit price, full precision.
    pub total: Decimal,
}

/// Caller-owned, ordered collection of line items.
///
/// Appendable and clearable between renders; passed by reference into the
/// composer. There is no global session state inside the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLines {
    items: Vec<LineItem>,
}

impl OrderLines {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position at the end.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove all positions.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a OrderLines {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<LineItem> for OrderLines {
    fn from_iter<T: IntoIterator<Item = LineItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
