use crate::{XsvError, XsvResult};

/// How a literal quote marker is encoded inside a quoted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteEscape {
    /// Two consecutive quote markers stand for one literal marker.
    #[default]
    Repeat,
    /// A backslash immediately before the marker makes it literal.
    Backslash,
}

/// What a quote-marker occurrence inside a quoted field means.
///
/// `raw_end` is where the raw content to keep ends (for `Backslash` this
/// excludes the escaping backslash); `resume` is where scanning continues.
#[derive(Debug, Clone, Copy)]
pub(crate) enum QuoteAction {
    LiteralQuote { raw_end: usize, resume: usize },
    CloseField { raw_end: usize, resume: usize },
}

impl QuoteEscape {
    /// Classify the quote marker found at byte offset `at` of `text`.
    ///
    /// Each convention decides literal-vs-close here once, so the scanner's
    /// quoted-field loop stays convention-agnostic.
    pub(crate) fn action_at(self, text: &str, at: usize, quote: &str) -> QuoteAction {
        let after = at + quote.len();
        match self {
            QuoteEscape::Repeat => {
                if text[after..].starts_with(quote) {
                    QuoteAction::LiteralQuote {
                        raw_end: at,
                        resume: after + quote.len(),
                    }
                } else {
                    QuoteAction::CloseField {
                        raw_end: at,
                        resume: after,
                    }
                }
            }
            QuoteEscape::Backslash => {
                if at > 0 && text.as_bytes()[at - 1] == b'\\' {
                    QuoteAction::LiteralQuote {
                        raw_end: at - 1,
                        resume: after,
                    }
                } else {
                    QuoteAction::CloseField {
                        raw_end: at,
                        resume: after,
                    }
                }
            }
        }
    }
}

/// The recognized dialect options, before validation.
///
/// Defaults match the common case: commas, double quotes with repeat
/// escaping, no headers, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectOptions {
    /// Separates fields within a row. Need not be a single character.
    pub delimiter: String,
    /// Opens and closes a quoted field. Need not be a single character.
    pub quote: String,
    pub quote_escape: QuoteEscape,
    /// Treat the first parsed row as column labels instead of data.
    pub read_headers: bool,
    /// Strip leading whitespace from each field's raw (unquoted) content.
    pub trim_leading: bool,
    /// Strip trailing whitespace from each field's raw (unquoted) content.
    pub trim_trailing: bool,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            quote: "\"".to_string(),
            quote_escape: QuoteEscape::Repeat,
            read_headers: false,
            trim_leading: false,
            trim_trailing: false,
        }
    }
}

/// A validated, immutable parsing configuration.
///
/// Construction is the only place configuration can fail; a `Dialect` in
/// hand is always safe to parse with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    opts: DialectOptions,
}

impl Dialect {
    /// Validate `opts` and freeze them.
    ///
    /// Rejects an empty delimiter or quote, and a delimiter/quote pair where
    /// either is a prefix of the other (including equal strings): such pairs
    /// make quote recognition at a field boundary ambiguous.
    pub fn new(opts: DialectOptions) -> XsvResult<Self> {
        if opts.delimiter.is_empty() {
            return Err(XsvError::InvalidDialect("delimiter must not be empty"));
        }
        if opts.quote.is_empty() {
            return Err(XsvError::InvalidDialect("quote must not be empty"));
        }
        if opts.delimiter.starts_with(&opts.quote) || opts.quote.starts_with(&opts.delimiter) {
            return Err(XsvError::InvalidDialect(
                "delimiter and quote must be distinct, with neither a prefix of the other",
            ));
        }
        Ok(Self { opts })
    }

    /// Plain RFC-style CSV: comma, double quote, repeat escaping.
    pub fn csv() -> Self {
        // Default options always pass validation.
        Self {
            opts: DialectOptions::default(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.opts.delimiter
    }

    pub fn quote(&self) -> &str {
        &self.opts.quote
    }

    pub fn quote_escape(&self) -> QuoteEscape {
        self.opts.quote_escape
    }

    pub fn read_headers(&self) -> bool {
        self.opts.read_headers
    }

    pub fn trim_leading(&self) -> bool {
        self.opts.trim_leading
    }

    pub fn trim_trailing(&self) -> bool {
        self.opts.trim_trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XsvError;

    #[test]
    fn default_options_are_valid() {
        let dialect = Dialect::new(DialectOptions::default()).unwrap();
        assert_eq!(dialect.delimiter(), ",");
        assert_eq!(dialect.quote(), "\"");
        assert_eq!(dialect.quote_escape(), QuoteEscape::Repeat);
        assert!(!dialect.read_headers());
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        let err = Dialect::new(DialectOptions {
            delimiter: String::new(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, XsvError::InvalidDialect(_)));
    }

    #[test]
    fn empty_quote_is_rejected() {
        let err = Dialect::new(DialectOptions {
            quote: String::new(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, XsvError::InvalidDialect(_)));
    }

    #[test]
    fn prefix_overlap_between_delimiter_and_quote_is_rejected() {
        // ",," vs "," is exactly the ambiguity called out for quoted-field
        // recognition; equal strings are a special case of the same rule.
        for (delimiter, quote) in [(",,", ","), (",", ",,"), (";", ";")] {
            let err = Dialect::new(DialectOptions {
                delimiter: delimiter.to_string(),
                quote: quote.to_string(),
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, XsvError::InvalidDialect(_)), "{delimiter:?}/{quote:?}");
        }
    }

    #[test]
    fn multi_character_markers_are_accepted() {
        let dialect = Dialect::new(DialectOptions {
            delimiter: "::".to_string(),
            quote: "''".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(dialect.delimiter(), "::");
        assert_eq!(dialect.quote(), "''");
    }
}
