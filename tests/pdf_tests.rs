#![cfg(feature = "pdf")]

use bestellung::core::*;
use bestellung::pdf::{RenderedDocument, compose, format_eur};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()
}

fn meta() -> OrderMeta {
    OrderMetaBuilder::new("B-2026-042", date())
        .company("Rotogal GmbH")
        .contact_person("Maurice Vennegerts")
        .phone("015221870004")
        .email("vennegerts@rotogal.de")
        .order_reference("PO-7781")
        .ship_to("Rotogal GmbH\nDorfstr. 77\n49848 Wilsum\nGermany")
        .bill_to("Rotogal GmbH\nDorfstr. 77\n49848 Wilsum\nGermany")
        .vat("ESN0300033H", dec!(0.21))
        .footer(
            "Rotogal GmbH\nDorfstr. 77\n49848 Wilsum",
            "Tax-No: 55/208/12604\nAmtsgericht Osnabrueck HRB 217038",
        )
        .build()
        .unwrap()
}

fn bins_item() -> LineItem {
    LineItemBuilder::bins(4, dec!(1234.50))
        .model("BI-565")
        .color(Color::Blue)
        .wall_build(WallBuild::Epe)
        .drain(Drain::OneInch)
        .note("Pallet stacking")
        .build()
        .unwrap()
}

fn order_lines(count: usize) -> OrderLines {
    (0..count).map(|_| bins_item()).collect()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn output_is_a_pdf() {
    let doc = compose(&meta(), &order_lines(3)).unwrap();
    assert!(doc.as_bytes().starts_with(b"%PDF-1.5"));
    assert!(!doc.is_empty());
}

#[test]
fn output_is_deterministic() {
    let meta = meta();
    let lines = order_lines(5);
    let first = compose(&meta, &lines).unwrap();
    let second = compose(&meta, &lines).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn single_page_document() {
    let doc = compose(&meta(), &order_lines(10)).unwrap();
    let parsed = lopdf::Document::load_mem(doc.as_bytes()).unwrap();
    assert_eq!(parsed.get_pages().len(), 1);
}

#[test]
fn empty_order_renders_header_only_table() {
    let doc = compose(&meta(), &OrderLines::new()).unwrap();
    let bytes = doc.as_bytes();
    // Column header and zero totals are still present.
    assert!(contains(bytes, b"Article"));
    assert!(contains(bytes, b"Net price:"));
    assert!(contains(bytes, b"0,00"));
}

#[test]
fn line_item_values_appear_in_content() {
    let doc = compose(&meta(), &order_lines(1)).unwrap();
    let bytes = doc.as_bytes();
    assert!(contains(bytes, b"BI-565"));
    assert!(contains(bytes, b"1.234,50"));
    assert!(contains(bytes, b"Pallet stacking"));
    assert!(contains(bytes, b"21%"));
    assert!(contains(bytes, b"EUR"));
}

#[test]
fn totals_match_formatter() {
    let lines = order_lines(2);
    let totals = OrderTotals::for_lines(&lines, dec!(0.21));
    let doc = compose(&meta(), &lines).unwrap();
    let bytes = doc.as_bytes();
    assert!(contains(bytes, format_eur(totals.net_sum).as_bytes()));
    assert!(contains(bytes, format_eur(totals.gross_sum).as_bytes()));
}

#[test]
fn order_reference_line_is_optional() {
    let with_reference = compose(&meta(), &order_lines(1)).unwrap();
    assert!(contains(with_reference.as_bytes(), b"Your order ref.: PO-7781"));

    let mut bare = meta();
    bare.order_reference = None;
    let without = compose(&bare, &order_lines(1)).unwrap();
    assert!(!contains(without.as_bytes(), b"Your order ref."));
}

#[test]
fn header_fields_appear() {
    let doc = compose(&meta(), &order_lines(1)).unwrap();
    let bytes = doc.as_bytes();
    assert!(contains(bytes, b"Our Order No.: B-2026-042"));
    assert!(contains(bytes, b"Date: 20.08.2026"));
    assert!(contains(bytes, b"Contact person: Maurice Vennegerts"));
    assert!(contains(bytes, b"VAT ID: ESN0300033H"));
}

#[test]
fn missing_addresses_render_fine() {
    let mut meta = meta();
    meta.ship_to = None;
    meta.bill_to = None;
    let doc = compose(&meta, &order_lines(1)).unwrap();
    assert!(contains(doc.as_bytes(), b"Shipping address:"));
}

#[test]
fn too_many_rows_overflow() {
    let err = compose(&meta(), &order_lines(200)).unwrap_err();
    match err {
        BestellungError::PageOverflow { rows } => assert_eq!(rows, 200),
        other => panic!("expected PageOverflow, got {other:?}"),
    }
}

#[test]
fn realistic_row_counts_fit() {
    for count in [1, 18, 24, 30, 40] {
        let doc = compose(&meta(), &order_lines(count)).unwrap();
        assert!(doc.len() > 1024, "suspiciously small output for {count} rows");
    }
}

#[test]
fn rendered_document_accessors() {
    let doc = compose(&meta(), &order_lines(1)).unwrap();
    let len = doc.len();
    assert_eq!(doc.as_ref().len(), len);
    assert_eq!(format!("{doc:?}"), format!("RenderedDocument {{ len: {len} }}"));

    let bytes = doc.clone().into_bytes();
    assert_eq!(bytes.len(), len);
    let _: &RenderedDocument = &doc;
}
