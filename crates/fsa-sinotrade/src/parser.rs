//! HTML parsing for statement pages.
//!
//! A statement page is either a "no data" notice or a document whose third
//! `<table>` holds one row per line item: a label cell followed by one cell per
//! fiscal period, most recent first. Rows under `<thead>` and leading rows of
//! `<th>` cells are column headers and carry no figures.

use fsa_core::{FsaError, LineItems, Result, Statement};
use scraper::{ElementRef, Html, Selector};

/// Substring present in a page that reports no data for the company.
pub const NO_DATA_MARKER: &str = "查無";

/// CSS selector of the element carrying the "no data" message.
pub const NO_DATA_MESSAGE_SELECTOR: &str = ".t3n0";

/// Label of the category row that precedes the figures.
pub const CATEGORY_HEADER: &str = "種類";

/// Zero-based position of the statement table among the page's tables.
pub const STATEMENT_TABLE_INDEX: usize = 2;

/// Maximum number of period cells read per row.
pub const PERIOD_COLUMNS: usize = 6;

/// Cell texts read as a missing value, in addition to an empty cell.
pub const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parses a fetched page into a statement.
///
/// A page containing [`NO_DATA_MARKER`] becomes [`Statement::Unavailable`] with
/// the page's own message; anything else must contain a readable statement
/// table.
pub fn parse_document(html: &str) -> Result<Statement> {
    let document = Html::parse_document(html);
    if html.contains(NO_DATA_MARKER) {
        return no_data_message(&document).map(Statement::Unavailable);
    }
    parse_statement_table(&document).map(Statement::Available)
}

/// Parses the statement table of a page into line items.
pub fn parse_statement(html: &str) -> Result<LineItems> {
    parse_statement_table(&Html::parse_document(html))
}

/// Extracts the human-readable message of a "no data" page.
fn no_data_message(document: &Html) -> Result<String> {
    let selector = selector(NO_DATA_MESSAGE_SELECTOR)?;
    document
        .select(&selector)
        .next()
        .map(|element| normalize_text(&element.text().collect::<String>()))
        .ok_or_else(|| {
            FsaError::Parse(format!(
                "no-data page without a {NO_DATA_MESSAGE_SELECTOR} message"
            ))
        })
}

/// Locates the statement table. The source addresses it by position only.
fn select_statement_table(document: &Html) -> Result<ElementRef<'_>> {
    let tables = selector("table")?;
    let found = document.select(&tables).count();
    document
        .select(&tables)
        .nth(STATEMENT_TABLE_INDEX)
        .ok_or_else(|| {
            FsaError::Parse(format!(
                "expected at least {} tables, found {found}",
                STATEMENT_TABLE_INDEX + 1
            ))
        })
}

fn parse_statement_table(document: &Html) -> Result<LineItems> {
    let table = select_statement_table(document)?;
    let row_selector = selector("tr")?;

    let mut rows = Vec::new();
    let mut in_header = true;
    for row in table.select(&row_selector) {
        if is_in_thead(row) {
            continue;
        }
        let cells: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "td" | "th"))
            .collect();

        if cells.is_empty() {
            continue;
        }
        // Leading rows made only of <th> cells are column headers.
        let all_th = cells.iter().all(|cell| cell.value().name() == "th");
        if in_header && all_th {
            continue;
        }
        in_header = false;

        let mut cells = cells
            .iter()
            .map(|cell| normalize_text(&cell.text().collect::<String>()));

        let Some(label) = cells.next() else {
            continue;
        };
        if label == CATEGORY_HEADER {
            continue;
        }
        let values = cells.take(PERIOD_COLUMNS).collect::<Vec<_>>();
        rows.push((label, values));
    }

    // Short rows are padded so every series covers the table's full width.
    let width = rows.iter().map(|(_, values)| values.len()).max().unwrap_or(0);

    let mut items = LineItems::new();
    for (label, values) in rows {
        let mut series = values
            .iter()
            .map(|text| parse_value(&label, text))
            .collect::<Result<Vec<_>>>()?;
        series.resize(width, f64::NAN);
        items.insert(label, series);
    }
    Ok(items)
}

fn is_in_thead(row: ElementRef<'_>) -> bool {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .take_while(|element| element.value().name() != "table")
        .any(|element| element.value().name() == "thead")
}

/// Converts one period cell. Empty cells and [`MISSING_VALUE_TOKENS`] are
/// missing values.
fn parse_value(label: &str, text: &str) -> Result<f64> {
    let cleaned = text.replace(',', "");
    if cleaned.is_empty() || MISSING_VALUE_TOKENS.contains(&cleaned.as_str()) {
        return Ok(f64::NAN);
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| FsaError::Parse(format!("non-numeric value {text:?} in row {label:?}")))
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| FsaError::Parse(format!("invalid selector {css:?}: {e}")))
}

/// Collapse whitespace & trim
fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(statement_rows: &str) -> String {
        format!(
            "<html><body>\
             <table><tr><td>nav</td></tr></table>\
             <table><tr><td>menu</td></tr></table>\
             <table>{statement_rows}</table>\
             </body></html>"
        )
    }

    const ROWS: &str = "\
        <tr><td>種類</td><td>合併</td><td>合併</td><td>合併</td><td>合併</td><td>合併</td><td>合併</td></tr>\
        <tr><td>流動資產</td><td>1,200</td><td>110</td><td>100</td><td>90</td><td>80</td><td>70</td></tr>\
        <tr><td> 流動負債 </td><td>60</td><td>55</td><td>50</td><td>45</td><td>40</td><td>35</td></tr>\
        <tr><td>存貨</td><td>-1.5</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td><td>99</td></tr>";

    #[test]
    fn test_parses_third_table() {
        let items = parse_statement(&page(ROWS)).unwrap();

        assert_eq!(items.len(), 3);
        assert!(items.get(CATEGORY_HEADER).is_none());
        assert_eq!(
            items.get("流動資產"),
            Some(&[1200.0, 110.0, 100.0, 90.0, 80.0, 70.0][..])
        );
        assert_eq!(
            items.get("流動負債"),
            Some(&[60.0, 55.0, 50.0, 45.0, 40.0, 35.0][..])
        );
        // cells beyond the sixth period are ignored
        assert_eq!(
            items.get("存貨"),
            Some(&[-1.5, 2.0, 3.0, 4.0, 5.0, 6.0][..])
        );
        assert_eq!(items.period_count(), Some(PERIOD_COLUMNS));
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let html = page(ROWS);
        assert_eq!(parse_statement(&html).unwrap(), parse_statement(&html).unwrap());
    }

    #[test]
    fn test_duplicate_label_last_write_wins() {
        let rows = "\
            <tr><td>存貨</td><td>1</td><td>2</td></tr>\
            <tr><td>存貨</td><td>3</td><td>4</td></tr>";
        let items = parse_statement(&page(rows)).unwrap();
        assert_eq!(items.get("存貨"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = "\
            <tr><td>流動資產</td><td>1</td><td>2</td><td>3</td></tr>\
            <tr><td>存貨</td><td>4</td><td></td></tr>";
        let items = parse_statement(&page(rows)).unwrap();
        let inventory = items.get("存貨").unwrap();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory[0], 4.0);
        assert!(inventory[1].is_nan());
        assert!(inventory[2].is_nan());
        assert_eq!(items.period_count(), Some(3));
    }

    #[test]
    fn test_non_numeric_cell_is_fatal() {
        let rows = "<tr><td>流動資產</td><td>1</td><td>--</td></tr>";
        let err = parse_statement(&page(rows)).unwrap_err();
        assert!(matches!(err, FsaError::Parse(msg) if msg.contains("流動資產")));
    }

    #[test]
    fn test_missing_value_tokens() {
        let rows = "<tr><td>存貨</td><td>N/A</td><td>1</td><td>nan</td><td>NULL</td><td>-</td></tr>";
        let err = parse_statement(&page(rows)).unwrap_err();
        assert!(matches!(err, FsaError::Parse(msg) if msg.contains("\"-\"")));

        let rows = "<tr><td>存貨</td><td>N/A</td><td>1,000</td><td>nan</td><td>NULL</td></tr>";
        let inventory = parse_statement(&page(rows)).unwrap().get("存貨").unwrap().to_vec();
        assert!(inventory[0].is_nan());
        assert_eq!(inventory[1], 1000.0);
        assert!(inventory[2].is_nan());
        assert!(inventory[3].is_nan());
    }

    #[test]
    fn test_leading_th_row_is_a_header() {
        let rows = "\
            <tr><th>期別</th><th>2020.3Q</th><th>2019.4Q</th></tr>\
            <tr><td>流動資產</td><td>1</td><td>2</td></tr>";
        let items = parse_statement(&page(rows)).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items.get("期別").is_none());
        assert_eq!(items.get("流動資產"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_thead_rows_are_skipped() {
        let rows = "\
            <thead><tr><td>期別</td><td>2020.3Q</td><td>2019.4Q</td></tr></thead>\
            <tbody><tr><td>流動資產</td><td>1</td><td>2</td></tr></tbody>";
        let items = parse_statement(&page(rows)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.get("流動資產"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_th_row_after_data_is_not_a_header() {
        let rows = "\
            <tr><td>流動資產</td><td>1</td><td>2</td></tr>\
            <tr><th>流動負債</th><th>3</th><th>4</th></tr>";
        let items = parse_statement(&page(rows)).unwrap();
        assert_eq!(items.get("流動負債"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_missing_statement_table() {
        let html = "<html><body><table><tr><td>only</td></tr></table></body></html>";
        let err = parse_statement(html).unwrap_err();
        assert!(matches!(err, FsaError::Parse(msg) if msg.contains("found 1")));
    }

    #[test]
    fn test_no_data_page() {
        let html = "<html><body><div class=\"t3n0\">\n  查無相關資料 </div></body></html>";
        let statement = parse_document(html).unwrap();
        assert_eq!(statement, Statement::unavailable("查無相關資料"));
    }

    #[test]
    fn test_no_data_page_without_message() {
        let html = "<html><body><p>查無</p></body></html>";
        assert!(matches!(parse_document(html), Err(FsaError::Parse(_))));
    }

    #[test]
    fn test_data_page_is_available() {
        let statement = parse_document(&page(ROWS)).unwrap();
        assert!(statement.is_available());
    }
}
