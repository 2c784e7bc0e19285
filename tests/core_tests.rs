use bestellung::core::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn meta() -> OrderMeta {
    OrderMetaBuilder::new("B-2026-042", date(2026, 8, 20))
        .company("Rotogal GmbH")
        .contact_person("Maurice Vennegerts")
        .phone("015221870004")
        .email("vennegerts@rotogal.de")
        .bill_to("Rotogal GmbH\nDorfstr. 77\n49848 Wilsum\nGermany")
        .vat("ESN0300033H", dec!(0.21))
        .footer("Rotogal GmbH\nDorfstr. 77", "Tax-No: 55/208/12604")
        .build()
        .unwrap()
}

// --- LineItem construction ---

#[test]
fn line_total_is_quantity_times_price() {
    let item = LineItemBuilder::bins(3, dec!(385.50))
        .model("BI-565")
        .color(Color::Blue)
        .build()
        .unwrap();
    assert_eq!(item.total, dec!(1156.50));
    assert_eq!(item.total, Decimal::from(item.quantity) * item.unit_price);
}

#[test]
fn zero_quantity_is_rejected() {
    let err = LineItemBuilder::lids(0, dec!(10)).build().unwrap_err();
    assert!(matches!(err, BestellungError::Builder(_)));
}

#[test]
fn negative_price_is_rejected() {
    let err = LineItemBuilder::pallets(1, dec!(-0.01)).build().unwrap_err();
    assert!(matches!(err, BestellungError::Builder(_)));
}

#[test]
fn zero_price_is_allowed() {
    let item = LineItemBuilder::buggies(2, Decimal::ZERO).build().unwrap();
    assert_eq!(item.total, Decimal::ZERO);
}

#[test]
fn free_text_attributes_are_cleaned() {
    let item = LineItemBuilder::bins(1, dec!(100))
        .model("  nan ")
        .color(Color::Other("   ".into()))
        .drain(Drain::Other("null".into()))
        .note("none")
        .build()
        .unwrap();
    match &item.article {
        Article::Bins {
            model,
            color,
            drain,
            ..
        } => {
            assert!(model.is_none());
            assert!(color.is_none());
            assert!(drain.is_none());
        }
        other => panic!("expected Bins, got {other:?}"),
    }
    assert!(item.note.is_none());
}

#[test]
fn drain_setter_is_ignored_for_non_bins() {
    let item = LineItemBuilder::lids(1, dec!(5))
        .drain(Drain::TwoInch)
        .build()
        .unwrap();
    assert!(matches!(item.article, Article::Lids { .. }));
}

#[test]
fn article_group_accessor() {
    let item = LineItemBuilder::pallets(1, dec!(60))
        .model("Hygiene pallet 1200x800")
        .build()
        .unwrap();
    assert_eq!(item.article.group(), ProductGroup::Pallets);
    assert_eq!(item.article.group().label(), "Pallets");
}

// --- OrderMeta construction ---

#[test]
fn meta_builder_normalizes_blanks() {
    let meta = OrderMetaBuilder::new("B-1", date(2026, 1, 5))
        .order_reference("  nan ")
        .ship_to("   ")
        .bill_to("Rotogal GmbH\nWilsum")
        .build()
        .unwrap();
    assert!(meta.order_reference.is_none());
    assert!(meta.ship_to.is_none());
    assert_eq!(meta.bill_to.as_deref(), Some("Rotogal GmbH\nWilsum"));
}

#[test]
fn vat_rate_must_be_a_fraction() {
    let err = OrderMetaBuilder::new("B-1", date(2026, 1, 5))
        .vat("ESN0300033H", dec!(21))
        .build()
        .unwrap_err();
    assert!(matches!(err, BestellungError::Builder(_)));

    let err = OrderMetaBuilder::new("B-1", date(2026, 1, 5))
        .vat("DE294750940", dec!(-0.01))
        .build()
        .unwrap_err();
    assert!(matches!(err, BestellungError::Builder(_)));
}

#[test]
fn default_vat_is_zero() {
    let meta = OrderMetaBuilder::new("B-1", date(2026, 1, 5)).build().unwrap();
    assert_eq!(meta.vat_rate, Decimal::ZERO);
}

// --- OrderLines collection ---

#[test]
fn lines_are_appendable_and_clearable() {
    let mut lines = OrderLines::new();
    assert!(lines.is_empty());

    lines.push(LineItemBuilder::bins(1, dec!(10)).build().unwrap());
    lines.push(LineItemBuilder::lids(2, dec!(5)).build().unwrap());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines.as_slice()[0].quantity, 1);

    lines.clear();
    assert!(lines.is_empty());
}

#[test]
fn lines_collect_from_iterator() {
    let lines: OrderLines = (1..=3)
        .map(|q| LineItemBuilder::buggies(q, dec!(2)).build().unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    let quantities: Vec<u32> = lines.iter().map(|i| i.quantity).collect();
    assert_eq!(quantities, vec![1, 2, 3]);
}

// --- Totals ---

#[test]
fn totals_for_lines_sum_line_totals() {
    let mut lines = OrderLines::new();
    lines.push(LineItemBuilder::bins(2, dec!(385.00)).build().unwrap());
    lines.push(LineItemBuilder::lids(5, dec!(24.95)).build().unwrap());

    let totals = OrderTotals::for_lines(&lines, meta().vat_rate);
    assert_eq!(totals.net_sum, dec!(894.75));
    assert_eq!(totals.vat_amount, dec!(187.8975));
    assert_eq!(totals.gross_sum, dec!(1082.6475));
}

// --- Filename derivation ---

#[test]
fn filename_from_order_number() {
    assert_eq!(sanitize_filename(&meta().order_number), "B-2026-042.pdf");
    assert_eq!(sanitize_filename(""), "supplier_order.pdf");
}
