use crate::dialect::{Dialect, QuoteAction};
use crate::document::{ParsedDocument, Row};
use crate::{XsvError, XsvResult};
use memchr::{memchr2_iter, memmem};

/// Parse `text` under `dialect` into an owned `ParsedDocument`.
///
/// Single pass over the input; the document borrows nothing from `text`.
/// Zero rows is a success (and yields no header). Any quoting error aborts
/// the whole call, no partial document is returned.
pub fn parse(text: &str, dialect: &Dialect) -> XsvResult<ParsedDocument> {
    let mut scanner = Scanner::new(text, dialect);
    let mut rows: Vec<Row> = Vec::new();
    while !scanner.at_end() {
        rows.push(scanner.read_row()?);
    }

    let header = if dialect.read_headers() && !rows.is_empty() {
        Some(rows.remove(0))
    } else {
        None
    };

    Ok(ParsedDocument::new(header, rows))
}

/// Cursor over the input with substring finders for the dialect's markers.
///
/// Multi-byte delimiters and quotes are matched as literal byte sequences,
/// which is UTF-8 safe: a match can only start on a boundary that the
/// needle itself starts on.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    dialect: &'a Dialect,
    delim_finder: memmem::Finder<'a>,
    quote_finder: memmem::Finder<'a>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, dialect: &'a Dialect) -> Self {
        Self {
            input,
            pos: 0,
            dialect,
            delim_finder: memmem::Finder::new(dialect.delimiter()),
            quote_finder: memmem::Finder::new(dialect.quote()),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn at_delimiter(&self) -> bool {
        self.rest().starts_with(self.dialect.delimiter())
    }

    fn at_quote(&self) -> bool {
        self.rest().starts_with(self.dialect.quote())
    }

    /// Row terminators are `\n` and `\r\n`; a lone `\r` is field content.
    fn at_terminator(&self) -> bool {
        let rest = self.rest().as_bytes();
        match rest.first() {
            Some(b'\n') => true,
            Some(b'\r') => rest.get(1) == Some(&b'\n'),
            _ => false,
        }
    }

    fn consume_delimiter(&mut self) -> bool {
        if self.at_delimiter() {
            self.pos += self.dialect.delimiter().len();
            true
        } else {
            false
        }
    }

    fn consume_terminator(&mut self) {
        let rest = self.rest().as_bytes();
        if rest.starts_with(b"\r\n") {
            self.pos += 2;
        } else if rest.starts_with(b"\n") {
            self.pos += 1;
        }
    }

    fn next_delimiter(&self, from: usize) -> Option<usize> {
        self.delim_finder
            .find(self.input[from..].as_bytes())
            .map(|i| from + i)
    }

    fn next_terminator(&self, from: usize) -> Option<usize> {
        let bytes = self.input.as_bytes();
        for i in memchr2_iter(b'\n', b'\r', &bytes[from..]) {
            let at = from + i;
            if bytes[at] == b'\n' || bytes.get(at + 1) == Some(&b'\n') {
                return Some(at);
            }
        }
        None
    }

    fn read_row(&mut self) -> XsvResult<Row> {
        let mut fields = Row::new();
        loop {
            fields.push(self.read_field()?);
            if self.consume_delimiter() {
                continue;
            }
            self.consume_terminator();
            break;
        }
        Ok(fields)
    }

    fn read_field(&mut self) -> XsvResult<String> {
        let field_start = self.pos;
        if self.dialect.trim_leading() {
            self.skip_field_whitespace();
        }
        if self.at_quote() {
            self.read_quoted_field(field_start)
        } else {
            Ok(self.read_unquoted_field())
        }
    }

    /// Skip whitespace that belongs to the raw outside of a field, stopping
    /// at anything structural so trimming never eats a marker.
    fn skip_field_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() || self.at_delimiter() || self.at_terminator() || self.at_quote()
            {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn read_unquoted_field(&mut self) -> String {
        let start = self.pos;
        let end = match (self.next_delimiter(start), self.next_terminator(start)) {
            (Some(d), Some(t)) => d.min(t),
            (Some(d), None) => d,
            (None, Some(t)) => t,
            (None, None) => self.input.len(),
        };
        self.pos = end;

        let mut raw = &self.input[start..end];
        if self.dialect.trim_trailing() {
            raw = raw.trim_end();
        }
        raw.to_string()
    }

    /// The cursor sits on the opening quote. Accumulate until the escape
    /// convention declares a quote occurrence to be the closing one.
    fn read_quoted_field(&mut self, field_start: usize) -> XsvResult<String> {
        let quote = self.dialect.quote();
        let escape = self.dialect.quote_escape();
        let mut value = String::new();
        let mut cur = self.pos + quote.len();

        loop {
            let Some(found) = self.quote_finder.find(self.input[cur..].as_bytes()) else {
                return Err(XsvError::UnterminatedQuote { at: field_start });
            };
            let at = cur + found;
            match escape.action_at(self.input, at, quote) {
                QuoteAction::LiteralQuote { raw_end, resume } => {
                    value.push_str(&self.input[cur..raw_end]);
                    value.push_str(quote);
                    cur = resume;
                }
                QuoteAction::CloseField { raw_end, resume } => {
                    value.push_str(&self.input[cur..raw_end]);
                    cur = resume;
                    break;
                }
            }
        }
        self.pos = cur;

        if self.dialect.trim_trailing() {
            self.skip_field_whitespace();
        }
        if !self.at_end() && !self.at_delimiter() && !self.at_terminator() {
            return Err(XsvError::MalformedQuoting { at: self.pos });
        }
        Ok(value)
    }
}
