use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::OrderLines;

/// Net, VAT, and gross sums for one order.
///
/// All arithmetic is full-precision [`Decimal`]; rounding happens only at
/// display time in the money formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of all line totals.
    pub net_sum: Decimal,
    /// `net_sum × vat_rate`.
    pub vat_amount: Decimal,
    /// `net_sum + vat_amount`.
    pub gross_sum: Decimal,
}

impl OrderTotals {
    /// Compute totals from a sequence of precomputed line totals.
    pub fn from_line_totals<I>(line_totals: I, vat_rate: Decimal) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let net_sum: Decimal = line_totals.into_iter().sum();
        let vat_amount = net_sum * vat_rate;
        Self {
            net_sum,
            vat_amount,
            gross_sum: net_sum + vat_amount,
        }
    }

    /// Compute totals for a line-item collection.
    pub fn for_lines(lines: &OrderLines, vat_rate: Decimal) -> Self {
        Self::from_line_totals(lines.iter().map(|item| item.total), vat_rate)
    }
}
