use std::{borrow::Cow, fs, path::Path};

use encoding_rs::{Encoding, UTF_8};
use route_count_shared_kernel::{InfraResult, InfrastructureError};

/// How far into a document the XML declaration is looked for.
const DECLARATION_WINDOW: usize = 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        fs::read(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read a document and decode it to UTF-8.
    ///
    /// A byte-order mark wins; otherwise the `encoding` of a leading XML
    /// declaration is used, and UTF-8 when there is none. The mark itself is
    /// dropped.
    pub fn read_document(path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path)?;
        let invalid = |details: String| InfrastructureError::InvalidEncoding { path: path.to_path_buf(), details };

        let (encoding, bom_len) = match Encoding::for_bom(&bytes) {
            Some(found) => found,
            None => match declared_encoding(&bytes) {
                Some(label) => {
                    let encoding = Encoding::for_label(label).ok_or_else(|| {
                        invalid(format!("unknown encoding `{}`", String::from_utf8_lossy(label)))
                    })?;
                    // The declaration was read as ASCII, so a UTF-16 label cannot be right.
                    (encoding.output_encoding(), 0)
                }
                None => (UTF_8, 0),
            },
        };

        match encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..]) {
            Some(Cow::Borrowed(text)) => Ok(text.to_owned()),
            Some(Cow::Owned(text)) => Ok(text),
            None => Err(invalid(format!("malformed {} data", encoding.name()))),
        }
    }
}

/// The `encoding` pseudo-attribute of an `<?xml ... ?>` declaration at the very
/// start of `bytes`, if any.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let head = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    let decl = head.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = &decl[..end];

    let at = decl.windows(8).position(|w| w == b"encoding")?;
    let rest = decl[at + 8..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let close = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..close])
}
