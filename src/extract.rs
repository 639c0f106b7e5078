use log::info;
use scraper::{ElementRef, Html, Selector};

use crate::error::EtlError;

/// Index of the GDP table's `<tbody>` among all `<tbody>` elements of the
/// page, fixed by prior inspection of the archived snapshot.
const GDP_TBODY_INDEX: usize = 2;

/// Source-table token meaning no estimate is available.
const MISSING_VALUE_MARKER: &str = "—";

/// One row as it appears on the page.  The GDP value is kept as raw text,
/// thousands separators and all; `transform` turns it into a number.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGdpRecord {
    pub country: String,
    pub gdp_usd_millions: String,
}

/// Fetch the page and extract the GDP table.
pub fn extract(url: &str) -> Result<Vec<RawGdpRecord>, EtlError> {
    let html = fetch_page(url)?;
    extract_table(&html)
}

/// One unauthenticated GET.  No retries; a failed request aborts the run.
pub fn fetch_page(url: &str) -> Result<String, EtlError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.text()?)
}

/// Scan the document for the GDP table and collect its rows in document
/// order.  A row qualifies when it has at least three cells, the first cell
/// contains a hyperlink (the country name), and the estimate cell is not the
/// missing-value marker.  Duplicates are not filtered.
///
/// Fails loudly when the page has fewer `<tbody>` elements than expected,
/// rather than silently extracting the wrong table.
pub fn extract_table(html: &str) -> Result<Vec<RawGdpRecord>, EtlError> {
    let tbody_selector = Selector::parse("tbody").unwrap();
    let tr_selector = Selector::parse("tr").unwrap();
    let td_selector = Selector::parse("td").unwrap();
    let a_selector = Selector::parse("a").unwrap();

    let document = Html::parse_document(html);
    let bodies: Vec<ElementRef> = document.select(&tbody_selector).collect();
    if bodies.len() <= GDP_TBODY_INDEX {
        return Err(EtlError::Parse(format!(
            "expected at least {} <tbody> elements in the page, found {}",
            GDP_TBODY_INDEX + 1,
            bodies.len()
        )));
    }

    let mut records: Vec<RawGdpRecord> = Vec::new();
    for row in bodies[GDP_TBODY_INDEX].select(&tr_selector) {
        let cells: Vec<ElementRef> = row.select(&td_selector).collect();
        if cells.len() < 3 {
            continue;
        }
        let country_cell = cells[0];
        let estimate = cell_text(&cells[2]);
        if country_cell.select(&a_selector).next().is_none()
            || estimate == MISSING_VALUE_MARKER
        {
            continue;
        }
        records.push(RawGdpRecord {
            country: cell_text(&country_cell),
            gdp_usd_millions: estimate,
        });
    }
    info!("extracted {} rows from the GDP table", records.len());

    Ok(records)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three sibling tbody elements; the GDP data sits in the third one.
    fn fixture_html(rows: &str) -> String {
        format!(
            "<html><body><table><tbody><tr><td>other</td></tr></tbody>\
             <tbody><tr><td>other</td></tr></tbody>\
             <tbody>{}</tbody></table></body></html>",
            rows
        )
    }

    #[test]
    fn test_extract_rows() {
        let html = fixture_html(
            "<tr><td><a>United States</a></td><td>x</td><td>26,854,599</td></tr>\
             <tr><td><a>China</a></td><td>x</td><td>19,373,586</td></tr>",
        );
        let records = extract_table(&html).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "United States");
        assert_eq!(records[0].gdp_usd_millions, "26,854,599");
        assert_eq!(records[1].country, "China");
    }

    #[test]
    fn test_skip_missing_estimate_and_unlinked_country() {
        let html = fixture_html(
            "<tr><td><a>A</a></td><td>x</td><td>1,234</td></tr>\
             <tr><td><a>B</a></td><td>x</td><td>—</td></tr>\
             <tr><td>World</td><td>x</td><td>105,568,776</td></tr>",
        );
        let records = extract_table(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            RawGdpRecord {
                country: "A".to_string(),
                gdp_usd_millions: "1,234".to_string(),
            }
        );
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let html = fixture_html(
            "<tr><td><a>Header-ish</a></td></tr>\
             <tr><td><a>A</a></td><td>x</td><td>500</td></tr>",
        );
        let records = extract_table(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "A");
    }

    #[test]
    fn test_missing_table_fails_loudly() {
        let html = "<html><body><table><tbody><tr><td>only one</td></tr></tbody></table></body></html>";
        let err = extract_table(html).unwrap_err();
        assert!(err.to_string().contains("expected at least 3 <tbody>"));
    }

    #[test]
    fn test_duplicates_pass_through() {
        let html = fixture_html(
            "<tr><td><a>A</a></td><td>x</td><td>10</td></tr>\
             <tr><td><a>A</a></td><td>x</td><td>10</td></tr>",
        );
        let records = extract_table(&html).unwrap();
        assert_eq!(records.len(), 2);
    }
}
