use crate::document::{ParsedDocument, Row};

/// Application-level record table built from one parsed document: the
/// hand-off shape for the import pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    /// Column labels: the parsed header where present, spreadsheet-style
    /// generated labels (`A`..`Z`, `AA`, ...) for the rest.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Build a sheet from a successful parse. Labels cover the widest row,
    /// so ragged documents still get a label for every cell.
    pub fn from_document(name: impl Into<String>, doc: &ParsedDocument) -> Self {
        let width = doc
            .rows()
            .iter()
            .map(Row::len)
            .max()
            .unwrap_or(0)
            .max(doc.header().map_or(0, Row::len));

        let mut columns = doc.header().cloned().unwrap_or_default();
        for index in columns.len()..width {
            columns.push(column_label(index));
        }

        Sheet {
            name: name.into(),
            columns,
            rows: doc.rows().to_vec(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Spreadsheet column label for a zero-based index: A..Z, then AA, AB, ...
fn column_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    label
}
