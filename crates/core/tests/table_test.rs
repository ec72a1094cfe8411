//! End-to-end reconstruction tests over whole pages.

use gridrow_core::layout::{PageElement, PageLayout, RowStrategy, TableParams, TextFragment};
use gridrow_core::table::{extract_document_rows, extract_page_rows, serialize_rows};

fn text(s: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> PageElement {
    PageElement::Text(TextFragment::new(s, x0, y0, x1, y1))
}

/// Three-column ranking table, one header row and two data rows.
fn ranking_page() -> PageLayout {
    let mut page = PageLayout::new(1, 800.0);
    // Header at y0 = 700
    page.add(text("Rank", 50.0, 700.0, 80.0, 712.0));
    page.add(text("Name", 150.0, 700.0, 185.0, 712.0));
    page.add(text("Net worth", 300.0, 700.0, 360.0, 712.0));
    // Data rows at y0 = 680 and 660
    page.add(text("1", 52.0, 680.0, 60.0, 692.0));
    page.add(text("Elon", 148.0, 680.0, 175.0, 692.0));
    page.add(text("Musk", 178.0, 680.0, 205.0, 692.0));
    page.add(text("$219 B", 302.0, 680.0, 345.0, 692.0));
    page.add(text("2", 52.0, 660.0, 60.0, 672.0));
    page.add(text("Jeff Bezos", 148.0, 660.0, 210.0, 672.0));
    page.add(text("$171 B", 302.0, 660.0, 345.0, 672.0));
    page
}

#[test]
fn basic_mode_emits_one_cell_per_fragment() {
    let page = ranking_page();
    let rows = extract_page_rows(&page, &TableParams::default());
    assert_eq!(
        rows,
        vec![
            vec!["Rank".to_string(), "Name".to_string(), "Net worth".to_string()],
            vec![
                "1".to_string(),
                "Elon".to_string(),
                "Musk".to_string(),
                "$219 B".to_string()
            ],
            vec!["2".to_string(), "Jeff Bezos".to_string(), "$171 B".to_string()],
        ]
    );
}

#[test]
fn column_exact_mode_merges_fragments_within_one_column() {
    let page = ranking_page();
    let params = TableParams::with_strategy(RowStrategy::ColumnExact);
    let rows = extract_page_rows(&page, &params);
    // "Elon" and "Musk" share the Name column and collapse into one cell.
    assert_eq!(
        rows,
        vec![
            vec!["Rank".to_string(), "Name".to_string(), "Net worth".to_string()],
            vec!["1".to_string(), "Elon Musk".to_string(), "$219 B".to_string()],
            vec!["2".to_string(), "Jeff Bezos".to_string(), "$171 B".to_string()],
        ]
    );
}

#[test]
fn multiline_fragment_text_is_collapsed() {
    let mut page = PageLayout::new(1, 800.0);
    page.add(text("Total:\n  42 ", 10.0, 100.0, 60.0, 112.0));
    let rows = extract_page_rows(&page, &TableParams::default());
    assert_eq!(rows, vec![vec!["Total: 42".to_string()]]);
}

#[test]
fn serialized_table_uses_exact_tab_layout() {
    let page = ranking_page();
    let rows = extract_page_rows(&page, &TableParams::with_strategy(RowStrategy::ColumnExact));
    let serialized = serialize_rows(&rows);
    let lines: Vec<&str> = serialized.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "\t Rank \t Name \t Net worth \t");
    assert_eq!(lines[1], "\t 1 \t Elon Musk \t $219 B \t");
    assert_eq!(lines[2], "\t 2 \t Jeff Bezos \t $171 B \t");
}

#[test]
fn serialized_rows_round_trip_through_tab_split() {
    let page = ranking_page();
    let rows = extract_page_rows(&page, &TableParams::default());
    let serialized = serialize_rows(&rows);
    for (line, cells) in serialized.split('\n').zip(&rows) {
        let recovered: Vec<String> = line
            .split('\t')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        assert_eq!(&recovered, cells);
    }
}

#[test]
fn empty_document_serializes_to_empty_string() {
    let pages = [PageLayout::new(1, 800.0), PageLayout::new(2, 800.0)];
    let rows = extract_document_rows(&pages, &TableParams::default());
    assert!(rows.is_empty());
    assert_eq!(serialize_rows(&rows), "");
}

#[test]
fn multi_page_rows_concatenate_in_page_order() {
    let mut first = PageLayout::new(1, 800.0);
    first.add(text("page one", 10.0, 700.0, 80.0, 712.0));
    let mut second = PageLayout::new(2, 800.0);
    second.add(text("page two", 10.0, 700.0, 80.0, 712.0));

    let rows = extract_document_rows(&[first, second], &TableParams::default());
    assert_eq!(
        rows,
        vec![vec!["page one".to_string()], vec!["page two".to_string()]]
    );
}

#[test]
fn columns_are_inferred_per_page() {
    // Different column geometry on each page must not leak across pages.
    let mut first = PageLayout::new(1, 800.0);
    first.add(text("a", 10.0, 700.0, 30.0, 712.0));
    first.add(text("b", 200.0, 700.0, 230.0, 712.0));
    let mut second = PageLayout::new(2, 800.0);
    second.add(text("c", 400.0, 700.0, 430.0, 712.0));

    let params = TableParams::with_strategy(RowStrategy::ColumnExact);
    let rows = extract_document_rows(&[first, second], &params);
    // Page 2's lone fragment matches page 2's own single column; if page 1's
    // intervals leaked it would be dropped.
    assert_eq!(
        rows,
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()]
        ]
    );
}
