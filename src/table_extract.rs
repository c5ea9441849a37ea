use std::collections::HashSet;

use crate::dom::HtmlElement;
use crate::model::Table;

const ROW_SELECTOR: &str = "tr";
const HEADER_CELL_SELECTOR: &str = "th";
const CELL_SELECTOR: &str = "td, th";
const LINK_SELECTOR: &str = "a";

/// Trimmed `th` texts of the first row, or nothing when there is no row.
pub(crate) fn header_row<E: HtmlElement>(rows: &[E]) -> Vec<String> {
    rows.first().map_or_else(Vec::new, |first| {
        first
            .find_all(HEADER_CELL_SELECTOR)
            .iter()
            .map(|cell| cell.text_content().trim().to_string())
            .collect()
    })
}

/// The element directly following each row, deduplicated in first-seen order.
///
/// Rows split across `thead`/`tbody` are not flat siblings, so the first row
/// of each later group has no predecessor and is not visited.
pub(crate) fn data_row_elements<E: HtmlElement>(rows: &[E]) -> Vec<E> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(E::next_element)
        .filter(|next| seen.insert(next.node_key()))
        .collect()
}

pub(crate) fn resolve_cell<E: HtmlElement>(cell: &E) -> String {
    let text = cell.text_content();
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    let links = cell.find_all(LINK_SELECTOR);
    let link_text = links.iter().map(E::text_content).collect::<String>();
    if !link_text.is_empty() {
        return link_text;
    }

    links
        .first()
        .and_then(|link| link.attribute("title"))
        .unwrap_or_default()
}

pub(crate) fn data_row<E: HtmlElement>(row: &E) -> Vec<String> {
    row.find_all(CELL_SELECTOR).iter().map(resolve_cell).collect()
}

pub(crate) fn extract_table<E: HtmlElement>(table: &E) -> Table {
    let rows = table.find_all(ROW_SELECTOR);
    Table {
        header: header_row(&rows),
        rows: data_row_elements(&rows).iter().map(data_row).collect(),
    }
}
