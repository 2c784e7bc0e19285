use lopdf::content::Content;
use lopdf::{Document, Object, Stream, dictionary};
use rust_decimal::Decimal;

use crate::core::{BestellungError, OrderLines, OrderMeta, OrderTotals};

use super::article::article_description;
use super::layout::{
    ITEM_COLUMNS, MARGIN_BOTTOM_MM, MARGIN_LEFT_MM, MARGIN_TOP_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    PRINTABLE_WIDTH_MM, font_sizes_for_rows, mm_to_pt, scale_widths,
};
use super::money::format_eur;
use super::writer::{Font, PageWriter, wrap_text};

/// One rendered page — an opaque immutable byte sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedDocument(Vec<u8>);

impl RenderedDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for RenderedDocument {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for RenderedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedDocument")
            .field("len", &self.0.len())
            .finish()
    }
}

/// Fixed sender address in the title block.
const SENDER_LINES: [&str; 4] = [
    "ROTOGAL, S.L.U.",
    "POL. IND. ESPI\u{d1}ERIA, PARC.36B",
    "15930 Boiro, A Coru\u{f1}a",
    "Spain",
];

const DISCLAIMER: &str = "Customer protection, neutrality and on-time delivery are taken \
     for granted. Please make sure to give Rotogal reference numbers with any query \
     (invoice, delivery note). We kindly ask for a written confirmation of order.";

/// Thin stroke used for all table rules.
const RULE_WIDTH: f32 = 0.25;
/// Fill level for shaded header and meta rows.
const SHADE_GRAY: f32 = 0.96;

/// Lay out one purchase order as a single A4 page and return the PDF bytes.
///
/// The composition order is fixed: title block, meta block, item table,
/// totals, disclaimer, footer. An empty line-item list renders a
/// header-only table with zero totals. The function performs no I/O and is
/// deterministic: identical inputs give byte-identical output.
///
/// # Errors
///
/// [`BestellungError::PageOverflow`] when the laid-out content would cross
/// the bottom margin, [`BestellungError::Pdf`] when the PDF serializer
/// fails.
pub fn compose(meta: &OrderMeta, lines: &OrderLines) -> Result<RenderedDocument, BestellungError> {
    let sizes = font_sizes_for_rows(lines.len().max(1));
    let totals = OrderTotals::for_lines(lines, meta.vat_rate);

    let mut page = PageWriter::new();
    let mut y = mm_to_pt(MARGIN_TOP_MM);
    y = title_block(&mut page, meta, y);
    y = meta_block(&mut page, meta, y);
    y = item_table(&mut page, meta, lines, sizes.body, y);
    y = totals_block(&mut page, meta, &totals, sizes.body, y);
    y = disclaimer_block(&mut page, sizes.small, y);
    y = footer_block(&mut page, meta, sizes.small, y);

    if y > page_height() - mm_to_pt(MARGIN_BOTTOM_MM) {
        return Err(BestellungError::PageOverflow { rows: lines.len() });
    }

    write_document(meta, page)
}

fn page_height() -> f32 {
    mm_to_pt(PAGE_HEIGHT_MM)
}

fn left_margin() -> f32 {
    mm_to_pt(MARGIN_LEFT_MM)
}

/// PDF y coordinate for a baseline `y` points below the top edge.
fn baseline(y_from_top: f32) -> f32 {
    page_height() - y_from_top
}

/// Integer-truncated percentage for the VAT cells, e.g. `0.21` → `"21%"`.
fn vat_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).trunc())
}

/// Sender address on the left, order number / reference / VAT id on the
/// right. Returns the cursor below the block.
fn title_block(page: &mut PageWriter, meta: &OrderMeta, y: f32) -> f32 {
    const SIZE: f32 = 8.0;
    const LEADING: f32 = 10.0;
    let x_left = left_margin();
    let x_right = left_margin() + mm_to_pt(100.0);

    let mut right_lines: Vec<(Font, String)> = vec![
        (Font::Bold, "Order".to_string()),
        (
            Font::Regular,
            format!("Our Order No.: {}", meta.order_number),
        ),
    ];
    if let Some(reference) = &meta.order_reference {
        right_lines.push((Font::Regular, format!("Your order ref.: {reference}")));
    }
    right_lines.push((Font::Regular, format!("VAT ID: {}", meta.vat_id)));

    for (i, line) in SENDER_LINES.iter().enumerate() {
        let font = if i == 0 { Font::Bold } else { Font::Regular };
        page.text(font, SIZE, x_left, baseline(y + SIZE + i as f32 * LEADING), line);
    }
    for (i, (font, line)) in right_lines.iter().enumerate() {
        page.text(*font, SIZE, x_right, baseline(y + SIZE + i as f32 * LEADING), line);
    }

    let rows = SENDER_LINES.len().max(right_lines.len());
    y + rows as f32 * LEADING + 3.0
}

/// Boxed three-column block: shipping address, billing address, and the
/// page/date/contact column.
fn meta_block(page: &mut PageWriter, meta: &OrderMeta, y: f32) -> f32 {
    const SIZE: f32 = 8.0;
    const LEADING: f32 = 10.0;
    const PAD: f32 = 2.0;

    let widths = [mm_to_pt(65.0), mm_to_pt(65.0), mm_to_pt(40.0)];
    let x0 = left_margin();
    let block_width: f32 = widths.iter().sum();

    let address_lines = |address: &Option<String>| -> Vec<String> {
        address
            .as_deref()
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    };

    let columns: [Vec<(Font, String)>; 3] = [
        std::iter::once((Font::Bold, "Shipping address:".to_string()))
            .chain(
                address_lines(&meta.ship_to)
                    .into_iter()
                    .map(|l| (Font::Regular, l)),
            )
            .collect(),
        std::iter::once((Font::Bold, "Billing address:".to_string()))
            .chain(
                address_lines(&meta.bill_to)
                    .into_iter()
                    .map(|l| (Font::Regular, l)),
            )
            .collect(),
        vec![
            (Font::Regular, "Page: 1".to_string()),
            (
                Font::Regular,
                format!("Date: {}", meta.date.format("%d.%m.%Y")),
            ),
            (
                Font::Regular,
                format!("Contact person: {}", meta.contact_person),
            ),
        ],
    ];

    let rows = columns.iter().map(Vec::len).max().unwrap_or(1);
    let height = rows as f32 * LEADING + 2.0 * PAD;

    page.fill_rect(x0, baseline(y + height), block_width, height, SHADE_GRAY);

    let mut x = x0;
    for (column, width) in columns.iter().zip(widths) {
        for (i, (font, line)) in column.iter().enumerate() {
            page.text(
                *font,
                SIZE,
                x + PAD,
                baseline(y + PAD + SIZE + i as f32 * LEADING),
                line,
            );
        }
        x += width;
    }

    // Box and inner column rules.
    page.line(x0, baseline(y), x0 + block_width, baseline(y), RULE_WIDTH);
    page.line(
        x0,
        baseline(y + height),
        x0 + block_width,
        baseline(y + height),
        RULE_WIDTH,
    );
    let mut edge = x0;
    for width in widths {
        page.line(edge, baseline(y), edge, baseline(y + height), RULE_WIDTH);
        edge += width;
    }
    page.line(edge, baseline(y), edge, baseline(y + height), RULE_WIDTH);

    y + height + 4.0
}

/// Header row plus one row per line item, with a full grid, shaded header,
/// wrapped article/note cells, and right-aligned numeric columns.
fn item_table(
    page: &mut PageWriter,
    meta: &OrderMeta,
    lines: &OrderLines,
    body: f32,
    y: f32,
) -> f32 {
    const PAD: f32 = 2.0;
    const VPAD: f32 = 1.0;
    let leading = body + 1.0;

    let weights: Vec<f32> = ITEM_COLUMNS.iter().map(|c| c.weight).collect();
    let widths = scale_widths(&weights, mm_to_pt(PRINTABLE_WIDTH_MM));
    let mut edges = vec![left_margin()];
    for width in &widths {
        edges.push(edges.last().copied().unwrap_or_default() + width);
    }

    let table_top = y;
    let header_height = leading + 2.0 * VPAD;

    page.fill_rect(
        edges[0],
        baseline(y + header_height),
        mm_to_pt(PRINTABLE_WIDTH_MM),
        header_height,
        SHADE_GRAY,
    );
    for (i, column) in ITEM_COLUMNS.iter().enumerate() {
        page.text_centered(
            Font::Bold,
            body,
            edges[i] + PAD,
            edges[i + 1] - PAD,
            baseline(y + VPAD + body),
            column.label,
        );
    }
    let mut y = y + header_height;
    page.line(edges[0], baseline(y), edges[7], baseline(y), RULE_WIDTH);

    let vat_cell = vat_percent(meta.vat_rate);
    for (index, item) in lines.iter().enumerate() {
        let article = article_description(&item.article);
        let article_lines = wrap_text(&article, body, widths[2] - 2.0 * PAD);
        let note_lines = item
            .note
            .as_deref()
            .map(|note| wrap_text(note, body, widths[3] - 2.0 * PAD))
            .unwrap_or_default();

        let rows = article_lines.len().max(note_lines.len()).max(1);
        let row_height = rows as f32 * leading + 2.0 * VPAD;
        let first_baseline = baseline(y + VPAD + body);

        page.text(
            Font::Regular,
            body,
            edges[0] + PAD,
            first_baseline,
            &(index + 1).to_string(),
        );
        page.text_right(
            Font::Regular,
            body,
            edges[2] - PAD,
            first_baseline,
            &item.quantity.to_string(),
        );
        for (i, line) in article_lines.iter().enumerate() {
            page.text(
                Font::Regular,
                body,
                edges[2] + PAD,
                baseline(y + VPAD + body + i as f32 * leading),
                line,
            );
        }
        for (i, line) in note_lines.iter().enumerate() {
            page.text(
                Font::Regular,
                body,
                edges[3] + PAD,
                baseline(y + VPAD + body + i as f32 * leading),
                line,
            );
        }
        page.text(Font::Regular, body, edges[4] + PAD, first_baseline, &vat_cell);
        page.text_right(
            Font::Regular,
            body,
            edges[6] - PAD,
            first_baseline,
            &format_eur(item.unit_price),
        );
        page.text_right(
            Font::Regular,
            body,
            edges[7] - PAD,
            first_baseline,
            &format_eur(item.total),
        );

        y += row_height;
        page.line(edges[0], baseline(y), edges[7], baseline(y), RULE_WIDTH);
    }

    for edge in &edges {
        page.line(*edge, baseline(table_top), *edge, baseline(y), RULE_WIDTH);
    }
    page.line(
        edges[0],
        baseline(table_top),
        edges[7],
        baseline(table_top),
        RULE_WIDTH,
    );

    y + 4.0
}

/// Net / VAT / gross rows, centered as a 120 mm block with right-aligned
/// cells.
fn totals_block(
    page: &mut PageWriter,
    meta: &OrderMeta,
    totals: &OrderTotals,
    body: f32,
    y: f32,
) -> f32 {
    const PAD: f32 = 2.0;
    let leading = body + 2.0;

    let block_width = mm_to_pt(120.0);
    let x0 = (mm_to_pt(PAGE_WIDTH_MM) - block_width) / 2.0;
    let label_right = x0 + mm_to_pt(60.0) - PAD;
    let amount_right = x0 + mm_to_pt(90.0) - PAD;
    let currency_right = x0 + block_width - PAD;

    let rows = [
        ("Net price:".to_string(), totals.net_sum),
        (
            format!("VAT ({}):", vat_percent(meta.vat_rate)),
            totals.vat_amount,
        ),
        ("Gross price:".to_string(), totals.gross_sum),
    ];

    for (i, (label, amount)) in rows.iter().enumerate() {
        let line_baseline = baseline(y + body + i as f32 * leading);
        page.text_right(Font::Regular, body, label_right, line_baseline, label);
        page.text_right(
            Font::Regular,
            body,
            amount_right,
            line_baseline,
            &format_eur(*amount),
        );
        page.text_right(Font::Regular, body, currency_right, line_baseline, "EUR");
    }

    y + rows.len() as f32 * leading + 4.0
}

fn disclaimer_block(page: &mut PageWriter, small: f32, y: f32) -> f32 {
    let leading = small + 1.0;
    let lines = wrap_text(DISCLAIMER, small, mm_to_pt(PRINTABLE_WIDTH_MM));
    for (i, line) in lines.iter().enumerate() {
        page.text(
            Font::Regular,
            small,
            left_margin(),
            baseline(y + small + i as f32 * leading),
            line,
        );
    }
    y + lines.len() as f32 * leading + 4.0
}

/// Two 90 mm columns: the free-text left block, and the VAT ID line
/// followed by the right block.
fn footer_block(page: &mut PageWriter, meta: &OrderMeta, small: f32, y: f32) -> f32 {
    let leading = small + 1.0;
    let x_left = left_margin();
    let x_right = left_margin() + mm_to_pt(90.0);

    let left_lines: Vec<&str> = meta.footer_left.lines().collect();
    let vat_line = format!("VAT ID: {}", meta.vat_id);
    let right_lines: Vec<&str> = std::iter::once(vat_line.as_str())
        .chain(meta.footer_right.lines())
        .collect();

    for (i, line) in left_lines.iter().enumerate() {
        page.text(
            Font::Regular,
            small,
            x_left,
            baseline(y + small + i as f32 * leading),
            line,
        );
    }
    for (i, line) in right_lines.iter().enumerate() {
        page.text(
            Font::Regular,
            small,
            x_right,
            baseline(y + small + i as f32 * leading),
            line,
        );
    }

    let rows = left_lines.len().max(right_lines.len());
    y + rows as f32 * leading
}

/// Wire the finished content stream into a one-page document and serialize.
fn write_document(
    meta: &OrderMeta,
    page: PageWriter,
) -> Result<RenderedDocument, BestellungError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::Regular.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => Font::Bold.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => font_regular,
            Font::Bold.resource() => font_bold,
        },
    });

    let content = Content {
        operations: page.into_operations(),
    };
    let encoded = content
        .encode()
        .map_err(|e| BestellungError::Pdf(format!("failed to encode content stream: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(mm_to_pt(PAGE_WIDTH_MM)),
            Object::Real(mm_to_pt(PAGE_HEIGHT_MM)),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    // Static info only: no timestamps, so identical inputs stay
    // byte-identical.
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal("bestellung"),
        "Title" => Object::string_literal(format!("Order {}", meta.order_number)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| BestellungError::Pdf(format!("failed to save PDF: {e}")))?;
    Ok(RenderedDocument(bytes))
}
