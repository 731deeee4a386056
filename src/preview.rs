use crate::dialect::Dialect;
use crate::document::{ParsedDocument, Row};
use crate::parser::parse;
use crate::XsvResult;

/// Dialect-keyed preview over one input text.
///
/// Holds the most recent `(Dialect, ParsedDocument)` pair so that repeated
/// "first K rows" requests while a dialect is being edited only re-parse
/// when the dialect actually changed. The cache lives here, on the consumer
/// side; the parser itself stays stateless. Last writer wins: the returned
/// document always reflects exactly the dialect passed to the latest call,
/// never a mix of configurations.
pub struct Preview<'a> {
    text: &'a str,
    cached: Option<(Dialect, ParsedDocument)>,
}

impl<'a> Preview<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cached: None }
    }

    /// The full document for `dialect`, re-parsing only on dialect change.
    pub fn document(&mut self, dialect: &Dialect) -> XsvResult<&ParsedDocument> {
        let stale = self.cached.as_ref().map_or(true, |(d, _)| d != dialect);
        if stale {
            let doc = parse(self.text, dialect)?;
            self.cached = Some((dialect.clone(), doc));
        }
        match &self.cached {
            Some((_, doc)) => Ok(doc),
            None => unreachable!(),
        }
    }

    /// The first `min(k, row_count)` data rows under `dialect`.
    pub fn first(&mut self, dialect: &Dialect, k: usize) -> XsvResult<&[Row]> {
        Ok(self.document(dialect)?.first(k))
    }

    /// Total data row count under `dialect`.
    pub fn row_count(&mut self, dialect: &Dialect) -> XsvResult<usize> {
        Ok(self.document(dialect)?.row_count())
    }
}
