use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BestellungError;
use super::normalize::clean;
use super::types::*;

/// Builder for [`OrderMeta`].
///
/// Optional free-text fields are normalized at build time: blank or
/// placeholder values ("nan", "none", "null") become `None`.
///
/// ```
/// use bestellung::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let meta = OrderMetaBuilder::new("B-2026-001", NaiveDate::from_ymd_opt(2026, 8, 20).unwrap())
///     .company("Rotogal GmbH")
///     .contact_person("Maurice Vennegerts")
///     .phone("015221870004")
///     .email("vennegerts@rotogal.de")
///     .bill_to("Rotogal GmbH\nDorfstr. 77\n49848 Wilsum\nGermany")
///     .vat("ESN0300033H", dec!(0.21))
///     .build()
///     .unwrap();
///
/// assert_eq!(meta.vat_rate, dec!(0.21));
/// ```
pub struct OrderMetaBuilder {
    company: String,
    contact_person: String,
    phone: String,
    email: String,
    order_number: String,
    order_reference: Option<String>,
    date: NaiveDate,
    ship_to: Option<String>,
    bill_to: Option<String>,
    vat_id: String,
    vat_rate: Decimal,
    footer_left: String,
    footer_right: String,
}

impl OrderMetaBuilder {
    pub fn new(order_number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            company: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            order_number: order_number.into(),
            order_reference: None,
            date,
            ship_to: None,
            bill_to: None,
            vat_id: String::new(),
            vat_rate: Decimal::ZERO,
            footer_left: String::new(),
            footer_right: String::new(),
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn contact_person(mut self, name: impl Into<String>) -> Self {
        self.contact_person = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn order_reference(mut self, reference: impl Into<String>) -> Self {
        self.order_reference = Some(reference.into());
        self
    }

    pub fn ship_to(mut self, address: impl Into<String>) -> Self {
        self.ship_to = Some(address.into());
        self
    }

    pub fn bill_to(mut self, address: impl Into<String>) -> Self {
        self.bill_to = Some(address.into());
        self
    }

    /// Set the VAT identifier and the rate as a fraction (0.21 = 21 %).
    pub fn vat(mut self, vat_id: impl Into<String>, rate: Decimal) -> Self {
        self.vat_id = vat_id.into();
        self.vat_rate = rate;
        self
    }

    pub fn footer(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.footer_left = left.into();
        self.footer_right = right.into();
        self
    }

    /// Build the metadata, normalizing optional fields and checking the
    /// VAT rate range.
    pub fn build(self) -> Result<OrderMeta, BestellungError> {
        if self.vat_rate < Decimal::ZERO || self.vat_rate > Decimal::ONE {
            return Err(BestellungError::Builder(format!(
                "VAT rate must be a fraction in [0, 1], got {}",
                self.vat_rate
            )));
        }

        Ok(OrderMeta {
            company: self.company,
            contact_person: self.contact_person,
            phone: self.phone,
            email: self.email,
            order_number: self.order_number,
            order_reference: self.order_reference.as_deref().and_then(clean),
            date: self.date,
            ship_to: self.ship_to.as_deref().and_then(clean),
            bill_to: self.bill_to.as_deref().and_then(clean),
            vat_id: self.vat_id,
            vat_rate: self.vat_rate,
            footer_left: self.footer_left,
            footer_right: self.footer_right,
        })
    }
}

/// Builder for [`LineItem`], one constructor per product group.
///
/// Free-text attributes are cleaned at build time; the line total is
/// computed here so `total == quantity × unit_price` always holds.
pub struct LineItemBuilder {
    group: ProductGroup,
    quantity: u32,
    unit_price: Decimal,
    model: Option<String>,
    color: Option<Color>,
    wall_build: Option<WallBuild>,
    drain: Option<Drain>,
    note: Option<String>,
}

impl LineItemBuilder {
    fn new(group: ProductGroup, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            group,
            quantity,
            unit_price,
            model: None,
            color: None,
            wall_build: None,
            drain: None,
            note: None,
        }
    }

    pub fn bins(quantity: u32, unit_price: Decimal) -> Self {
        Self::new(ProductGroup::Bins, quantity, unit_price)
    }

    pub fn lids(quantity: u32, unit_price: Decimal) -> Self {
        Self::new(ProductGroup::Lids, quantity, unit_price)
    }

    pub fn buggies(quantity: u32, unit_price: Decimal) -> Self {
        Self::new(ProductGroup::Buggies, quantity, unit_price)
    }

    pub fn pallets(quantity: u32, unit_price: Decimal) -> Self {
        Self::new(ProductGroup::Pallets, quantity, unit_price)
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn wall_build(mut self, wall_build: WallBuild) -> Self {
        self.wall_build = Some(wall_build);
        self
    }

    /// Drain plug option. Only meaningful for Bins; ignored for other groups.
    pub fn drain(mut self, drain: Drain) -> Self {
        self.drain = Some(drain);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn build(self) -> Result<LineItem, BestellungError> {
        if self.quantity == 0 {
            return Err(BestellungError::Builder(
                "quantity must be at least 1".into(),
            ));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(BestellungError::Builder(format!(
                "net unit price must not be negative, got {}",
                self.unit_price
            )));
        }

        let model = self.model.as_deref().and_then(clean);
        let color = self.color.map(clean_color).and_then(|c| c);
        let article = match self.group {
            ProductGroup::Bins => Article::Bins {
                model,
                color,
                wall_build: self.wall_build,
                drain: self.drain.map(clean_drain).and_then(|d| d),
            },
            ProductGroup::Lids => Article::Lids {
                model,
                color,
                wall_build: self.wall_build,
            },
            ProductGroup::Buggies => Article::Buggies { model, color },
            ProductGroup::Pallets => Article::Pallets { model, color },
        };

        let total = Decimal::from(self.quantity) * self.unit_price;
        Ok(LineItem {
            quantity: self.quantity,
            article,
            note: self.note.as_deref().and_then(clean),
            unit_price: self.unit_price,
            total,
        })
    }
}

/// A free-text color that cleans to nothing is no color at all.
fn clean_color(color: Color) -> Option<Color> {
    match color {
        Color::Other(s) => clean(&s).map(Color::Other),
        preset => Some(preset),
    }
}

/// Same for free-text drains.
fn clean_drain(drain: Drain) -> Option<Drain> {
    match drain {
        Drain::Other(s) => clean(&s).map(Drain::Other),
        preset => Some(preset),
    }
}
