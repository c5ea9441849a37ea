use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::error::GrabError;
use crate::model::Table;
use crate::options::{indexed_file_path, single_file_path};

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    // Rows keep the width they had in the markup.
    WriterBuilder::new().flexible(true).from_writer(writer)
}

/// Writes every table's records back to back through one CSV writer.
pub fn write_csv<W: Write>(writer: W, tables: &[Table]) -> Result<(), GrabError> {
    let mut writer = csv_writer(writer);
    for table in tables {
        for record in table.records() {
            if record.is_empty() {
                // `write_record` would emit `""`; an empty row is a bare terminator.
                let mut inner = writer.into_inner().map_err(|error| error.into_error())?;
                inner.write_all(b"\n")?;
                writer = csv_writer(inner);
            } else {
                writer.write_record(record)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn tables_to_csv_string(tables: &[Table]) -> Result<String, GrabError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, tables)?;
    String::from_utf8(buffer)
        .map_err(|error| GrabError::Io(io::Error::new(io::ErrorKind::InvalidData, error)))
}

fn write_table_file(path: &Path, table: &Table) -> Result<(), GrabError> {
    let file = File::create(path).map_err(|source| GrabError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(file, std::slice::from_ref(table))
}

/// Writes `<base>.csv` for a single table, otherwise `<base>_<i>.csv` per table.
///
/// Stops at the first failure; files already written are left in place.
pub fn write_table_files(base: &Path, tables: &[Table]) -> Result<Vec<PathBuf>, GrabError> {
    if let [table] = tables {
        let path = single_file_path(base);
        write_table_file(&path, table)?;
        tracing::debug!(path = %path.display(), "wrote table");
        return Ok(vec![path]);
    }

    let mut written = Vec::with_capacity(tables.len());
    for (index, table) in tables.iter().enumerate() {
        let path = indexed_file_path(base, index);
        write_table_file(&path, table)?;
        tracing::debug!(path = %path.display(), index, "wrote table");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::tables_to_csv_string;
    use crate::model::Table;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn quotes_only_fields_that_need_it() {
        let table = Table {
            header: cells(&["name", "note"]),
            rows: vec![cells(&["a,b", "say \"hi\""]), cells(&["multi\nline", "plain"])],
        };
        let csv = tables_to_csv_string(&[table]).expect("CSV should serialize");
        assert_eq!(
            csv,
            "name,note\n\"a,b\",\"say \"\"hi\"\"\"\n\"multi\nline\",plain\n"
        );
    }

    #[test]
    fn concatenates_tables_without_separator() {
        let first = Table {
            header: cells(&["a", "b"]),
            rows: vec![cells(&["1", "2"])],
        };
        let second = Table {
            header: cells(&["c"]),
            rows: vec![cells(&["3"])],
        };
        let csv = tables_to_csv_string(&[first, second]).expect("CSV should serialize");
        assert_eq!(csv, "a,b\n1,2\nc\n3\n");
    }

    #[test]
    fn round_trips_through_csv_reader() {
        let table = Table {
            header: cells(&["a", "b"]),
            rows: vec![cells(&["c", "d"])],
        };
        let csv = tables_to_csv_string(std::slice::from_ref(&table)).expect("CSV should serialize");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv.as_bytes());
        let parsed = reader
            .records()
            .map(|record| {
                record
                    .expect("record should parse")
                    .iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        assert_eq!(parsed, table.into_records());
    }

    #[test]
    fn empty_header_is_a_bare_line() {
        let headerless = Table {
            header: Vec::new(),
            rows: vec![cells(&["c"])],
        };
        let csv = tables_to_csv_string(&[headerless, Table::default()])
            .expect("CSV should serialize");
        assert_eq!(csv, "\nc\n\n");
    }

    #[test]
    fn empty_header_round_trips_as_a_blank_line() {
        let table = Table {
            header: Vec::new(),
            rows: vec![cells(&["a", "b"]), cells(&["c"])],
        };
        let csv =
            tables_to_csv_string(std::slice::from_ref(&table)).expect("CSV should serialize");
        assert_eq!(csv, "\na,b\nc\n");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv.as_bytes());
        let parsed = reader
            .records()
            .map(|record| {
                record
                    .expect("record should parse")
                    .iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        // Blank lines carry no fields, so only the data rows come back.
        assert_eq!(parsed, table.rows);
    }

    #[test]
    fn no_tables_write_nothing() {
        let csv = tables_to_csv_string(&[]).expect("CSV should serialize");
        assert!(csv.is_empty());
    }
}
