//! HTML → [`DataTable`] for the FanGraphs legacy leaderboard page.
//!
//! The page renders a Telerik RadGrid: `table.rgMasterTable` with a two-row
//! `thead` (pager on top, leaf column names underneath) and one `tbody` row per
//! player. Only direct children of the master table are read so the pager's
//! nested layout table never leaks into the data.

use crate::DataTable;
use crate::client::{ApiError, ApiResult};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static MASTER_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.rgMasterTable").expect("static selector"));

/// RadGrid's placeholder row when a query matches nothing.
const NO_RECORDS_CLASS: &str = "rgNoRecords";

pub fn parse_table(html: &str) -> ApiResult<DataTable> {
    let document = Html::parse_document(html);
    let table = document
        .select(&MASTER_TABLE)
        .next()
        .ok_or_else(|| ApiError::Parse("no table.rgMasterTable in document".into()))?;

    let headers: Vec<String> = child_elements(table, "thead")
        .flat_map(|thead| child_elements(thead, "tr"))
        .last()
        .map(|row| child_elements(row, "th").map(cell_text).collect())
        .unwrap_or_default();

    let rows = child_elements(table, "tbody")
        .flat_map(|tbody| child_elements(tbody, "tr"))
        .filter(|row| !row.value().classes().any(|c| c == NO_RECORDS_CLASS))
        .map(|row| {
            let mut cells = vec![String::new(); headers.len()];
            for (slot, td) in cells.iter_mut().zip(child_elements(row, "td")) {
                *slot = cell_text(td);
            }
            cells
        })
        .collect();

    Ok(DataTable { headers, rows })
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(thead: &str, tbody: &str) -> String {
        format!(
            r#"<html><body>
            <div id="LeaderBoard1_dg1">
              <table class="rgMasterTable" id="LeaderBoard1_dg1_ctl00">
                <thead>{thead}</thead>
                <tbody>{tbody}</tbody>
              </table>
            </div>
            </body></html>"#
        )
    }

    const PAGER_AND_HEADERS: &str = r##"
        <tr class="rgPager"><td colspan="5">
          <table><tbody><tr><td>Page size:</td><td>Page 1 of 1</td></tr></tbody></table>
        </td></tr>
        <tr>
          <th class="rgHeader">#</th>
          <th class="rgHeader"><a href="#">Name</a></th>
          <th class="rgHeader"><a href="#">G</a></th>
          <th class="rgHeader"> <a href="#">PA</a> </th>
          <th class="rgHeader"><a href="#">HR</a></th>
        </tr>"##;

    #[test]
    fn header_comes_from_last_thead_row() {
        let html = page(PAGER_AND_HEADERS, "");
        let table = parse_table(&html).unwrap();
        assert_eq!(table.headers, vec!["#", "Name", "G", "PA", "HR"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn rows_are_trimmed_and_positioned_by_column() {
        let html = page(
            PAGER_AND_HEADERS,
            r#"<tr class="rgRow"><td>1</td><td><a href="/p">Riley Greene</a></td><td> 99 </td><td>416</td><td>11</td></tr>
               <tr class="rgAltRow"><td>2</td><td>Kerry Carpenter</td><td>118</td><td>459</td><td>20</td></tr>"#,
        );
        let table = parse_table(&html).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "Riley Greene", "99", "416", "11"]);
        assert_eq!(table.rows[1][1], "Kerry Carpenter");
    }

    #[test]
    fn short_rows_pad_and_long_rows_truncate() {
        let html = page(
            PAGER_AND_HEADERS,
            r#"<tr><td>1</td><td>Short</td></tr>
               <tr><td>2</td><td>Long</td><td>1</td><td>2</td><td>3</td><td>extra</td><td>more</td></tr>"#,
        );
        let table = parse_table(&html).unwrap();
        assert_eq!(table.rows[0], vec!["1", "Short", "", "", ""]);
        assert_eq!(table.rows[1], vec!["2", "Long", "1", "2", "3"]);
        assert!(table.rows.iter().all(|r| r.len() == table.headers.len()));
    }

    #[test]
    fn nbsp_cells_become_empty() {
        let html = page(PAGER_AND_HEADERS, "<tr><td>1</td><td>Name</td><td>&nbsp;</td><td>3</td><td></td></tr>");
        let table = parse_table(&html).unwrap();
        assert_eq!(table.rows[0][2], "");
        assert_eq!(table.rows[0][4], "");
    }

    #[test]
    fn no_records_placeholder_is_skipped() {
        let html = page(
            PAGER_AND_HEADERS,
            r#"<tr class="rgNoRecords"><td colspan="5"><div>No records to display.</div></td></tr>"#,
        );
        let table = parse_table(&html).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert!(table.is_empty());
    }

    #[test]
    fn missing_master_table_is_a_parse_error() {
        let err = parse_table("<html><body><table><tr><td>x</td></tr></table></body></html>")
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn table_without_thead_has_no_headers_and_empty_rows() {
        let html = r#"<table class="rgMasterTable"><tbody><tr><td>1</td><td>X</td></tr></tbody></table>"#;
        let table = parse_table(html).unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![Vec::<String>::new()]);
    }
}
