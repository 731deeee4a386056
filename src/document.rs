/// One parsed row: an ordered sequence of owned field strings.
pub type Row = Vec<String>;

/// The immutable result of one successful parse: an optional header row plus
/// the data rows, in input order.
///
/// Rows may have differing field counts; the model does not enforce a
/// uniform column count. A new configuration requires a brand-new document,
/// there is no incremental mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    header: Option<Row>,
    rows: Vec<Row>,
}

impl ParsedDocument {
    pub(crate) fn new(header: Option<Row>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Column labels, present iff the dialect read headers and the input had
    /// at least one row.
    pub fn header(&self) -> Option<&Row> {
        self.header.as_ref()
    }

    /// All data rows (the header, if any, is not among them).
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `min(k, row_count)` rows, for preview windows.
    ///
    /// Pure windowed access over the materialized rows: repeated calls at
    /// any `k` return the same prefix of the same full parse.
    pub fn first(&self, k: usize) -> &[Row] {
        &self.rows[..k.min(self.rows.len())]
    }
}
