/// One extracted table. The header is always emitted as the first record,
/// even when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Header followed by the data rows, in output order.
    pub fn records(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.len() + 1
    }

    #[must_use]
    pub fn is_ragged(&self) -> bool {
        let mut widths = self.records().map(Vec::len);
        let first = widths.next().unwrap_or(0);
        widths.any(|width| width != first)
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Vec<String>> {
        let mut records = Vec::with_capacity(self.record_count());
        records.push(self.header);
        records.extend(self.rows);
        records
    }
}
