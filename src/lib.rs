//! Delimited-text (XSV) parsing with a fully configurable dialect.
//!
//! - Dialect: delimiter and quote strings (multi-character allowed), a
//!   quote-escape convention (`Repeat` or `Backslash`), header extraction,
//!   and per-field whitespace trimming.
//! - `parse` materializes a whole `ParsedDocument` in one pass; `Preview`
//!   gives cheap "first K rows" views while a dialect is being edited.
//!
//! Data shape:
//! - `ParsedDocument { header: Option<Row>, rows: Vec<Row> }`
//! - `Row` is `Vec<String>`; all field content is copied out of the input
//!   (unescaping and trimming mean fields are not verbatim slices).
//
mod dialect;
mod document;
mod io;
mod parser;
mod preview;
mod sheet;

pub use crate::dialect::{Dialect, DialectOptions, QuoteEscape};
pub use crate::document::{ParsedDocument, Row};
pub use crate::io::{decode_text, import_bytes, import_path, text_from_path, SourceMeta};
pub use crate::parser::parse;
pub use crate::preview::Preview;
pub use crate::sheet::Sheet;

use thiserror::Error;

/// Error type returned by this crate when not using `anyhow`.
#[derive(Debug, Error)]
pub enum XsvError {
    /// The dialect failed validation; raised before any input is read.
    #[error("invalid dialect: {0}")]
    InvalidDialect(&'static str),
    /// The input ended while a quoted field was still open.
    #[error("unterminated quoted field starting at byte {at}")]
    UnterminatedQuote { at: usize },
    /// Content appeared after a field's closing quote, before the next
    /// delimiter or row terminator.
    #[error("unexpected content after closing quote at byte {at}")]
    MalformedQuoting { at: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type XsvResult<T> = std::result::Result<T, XsvError>;
