use crate::dialect::Dialect;
use crate::parser::parse;
use crate::sheet::Sheet;
use crate::XsvResult;
use std::path::Path;

/// What we know about an input source before decoding it.
#[derive(Debug, Clone)]
pub struct SourceMeta {
    /// Just the file stem (used to name the resulting sheet)
    pub name_hint: String,
    /// Which character encoding to expect (defaults to UTF-8)
    pub charset: &'static encoding_rs::Encoding,
}

impl Default for SourceMeta {
    fn default() -> Self {
        Self {
            name_hint: String::new(),
            charset: encoding_rs::UTF_8,
        }
    }
}

/// Decode raw bytes to text with the given charset. A byte-order mark in the
/// input overrides `charset`.
pub fn decode_text(bytes: &[u8], charset: &'static encoding_rs::Encoding) -> String {
    let (text, _encoding, _had_errors) = charset.decode(bytes);
    text.into_owned()
}

/// Read a local file and decode it (lightweight meta from the path).
pub fn text_from_path(path: &Path) -> XsvResult<(String, SourceMeta)> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let meta = SourceMeta {
        name_hint: name,
        ..Default::default()
    };

    Ok((decode_text(&bytes, meta.charset), meta))
}

/// Import boundary over in-memory bytes: decode, parse once, build a sheet.
///
/// A parse failure aborts the import; no partial sheet is produced and no
/// alternative dialect is guessed.
pub fn import_bytes(bytes: &[u8], meta: &SourceMeta, dialect: &Dialect) -> XsvResult<Sheet> {
    let text = decode_text(bytes, meta.charset);
    let doc = parse(&text, dialect)?;
    let name = if meta.name_hint.is_empty() {
        "Sheet 1".to_string()
    } else {
        meta.name_hint.clone()
    };
    Ok(Sheet::from_document(name, &doc))
}

/// Import boundary over a local file path.
pub fn import_path(path: &Path, dialect: &Dialect) -> XsvResult<Sheet> {
    let bytes = std::fs::read(path)?;
    let meta = SourceMeta {
        name_hint: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
        ..Default::default()
    };
    import_bytes(&bytes, &meta, dialect)
}
