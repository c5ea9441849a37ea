mod csv_out;
mod dom;
mod error;
mod model;
mod options;
mod table_extract;
mod warning;

use std::io::{Read, Write};
use std::path::PathBuf;

use dom_query::Document;

use crate::table_extract::extract_table;
use crate::warning::WarningCode;

pub use csv_out::{tables_to_csv_string, write_csv, write_table_files};
pub use dom::{HtmlElement, select_elements};
pub use error::GrabError;
pub use model::Table;
pub use options::{
    DEFAULT_SELECTOR, GrabOptions, OutputTarget, TableSelection, indexed_file_path,
    single_file_path,
};
pub use warning::{GrabWarning, WarningCode as GrabWarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrabReport {
    /// Tables matched by the selector.
    pub matched_count: usize,
    /// Tables left after applying the table selection.
    pub emitted_count: usize,
    /// Records emitted, header rows included.
    pub row_count: usize,
    pub written_files: Vec<PathBuf>,
    pub warnings: Vec<GrabWarning>,
}

/// Reads the whole input and decodes it as UTF-8, honouring a BOM.
pub fn read_html<R: Read>(
    mut reader: R,
    warnings: &mut Vec<GrabWarning>,
) -> Result<String, GrabError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(GrabError::InputRead)?;

    let (html, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
    if had_errors {
        warnings.push(GrabWarning::new(
            WarningCode::LossyInput,
            "input contained invalid UTF-8; replaced with U+FFFD",
        ));
    }
    tracing::debug!(bytes = bytes.len(), "read HTML input");
    Ok(html.into_owned())
}

/// Parses `html` and extracts one table per element matching `selector`.
pub fn extract_tables(html: &str, selector: &str) -> Result<Vec<Table>, GrabError> {
    let doc = Document::from(html);
    let elements = select_elements(&doc, selector)?;
    tracing::debug!(selector, matched = elements.len(), "selected table elements");
    Ok(elements.iter().map(extract_table).collect())
}

/// Reduces `tables` to the selected one, or keeps them all.
pub fn apply_table_selection(
    mut tables: Vec<Table>,
    selection: TableSelection,
) -> Result<Vec<Table>, GrabError> {
    match selection {
        TableSelection::All => Ok(tables),
        TableSelection::Index(index) if index < tables.len() => {
            Ok(vec![tables.swap_remove(index)])
        }
        TableSelection::Index(index) => Err(GrabError::IndexOutOfRange {
            index,
            count: tables.len(),
        }),
    }
}

fn table_warnings(tables: &[Table], warnings: &mut Vec<GrabWarning>) {
    if tables.is_empty() {
        warnings.push(GrabWarning::new(
            WarningCode::NoTablesMatched,
            "selector matched no tables",
        ));
    }

    for (index, table) in tables.iter().enumerate() {
        if table.header.is_empty() {
            warnings.push(
                GrabWarning::new(
                    WarningCode::MissingHeader,
                    "first row has no header cells; header row is empty",
                )
                .with_table_index(index),
            );
        }
        if table.is_ragged() {
            warnings.push(
                GrabWarning::new(WarningCode::RaggedRows, "rows have differing cell counts")
                    .with_table_index(index),
            );
        }
    }
}

/// Runs the whole pipeline: read `input`, extract, select, then emit CSV to
/// `stdout` or to files according to `options`.
pub fn grab_tables<R: Read, W: Write>(
    input: R,
    stdout: W,
    options: &GrabOptions,
) -> Result<GrabReport, GrabError> {
    let mut warnings = Vec::new();
    let html = read_html(input, &mut warnings)?;
    let tables = extract_tables(&html, &options.selector)?;
    let matched_count = tables.len();
    table_warnings(&tables, &mut warnings);

    let tables = apply_table_selection(tables, options.table)?;
    let row_count = tables.iter().map(Table::record_count).sum();

    let written_files = match &options.output {
        OutputTarget::Stdout => {
            write_csv(stdout, &tables)?;
            Vec::new()
        }
        OutputTarget::Files(base) => write_table_files(base, &tables)?,
    };

    for warning in &warnings {
        tracing::debug!(code = ?warning.code, table = ?warning.table_index, "{}", warning.message);
    }

    Ok(GrabReport {
        matched_count,
        emitted_count: tables.len(),
        row_count,
        written_files,
        warnings,
    })
}
