//! Reading a local scan or PDF into a [`DocumentUpload`]

use std::path::{Path, PathBuf};

use mzalendo_lens_sdk::{DocumentKind, DocumentUpload};
use thiserror::Error;

/// Largest document accepted for inline upload (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} is {size} bytes; the limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("{name} is not a PDF, JPG or PNG")]
    Unsupported { name: String },

    #[error("{name} is empty")]
    Empty { name: String },
}

/// Load and type-check a document. Size is checked before the file is read.
pub fn load_document(path: &Path, max_bytes: u64) -> Result<DocumentUpload, UploadError> {
    let name = display_name(path);
    let io_err = |source| UploadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(UploadError::TooLarge {
            name,
            size,
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    if bytes.is_empty() {
        return Err(UploadError::Empty { name });
    }

    let kind = sniff_kind(&bytes)
        .or_else(|| kind_from_extension(path))
        .ok_or_else(|| UploadError::Unsupported { name: name.clone() })?;

    tracing::info!(file = %name, kind = %kind, size, "document attached");
    Ok(DocumentUpload::new(name, kind, bytes))
}

/// Detect the format from magic bytes
pub fn sniff_kind(bytes: &[u8]) -> Option<DocumentKind> {
    if bytes.starts_with(b"%PDF-") {
        Some(DocumentKind::Pdf)
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(DocumentKind::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(DocumentKind::Jpeg)
    } else {
        None
    }
}

pub fn kind_from_extension(path: &Path) -> Option<DocumentKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(DocumentKind::Pdf),
        "jpg" | "jpeg" => Some(DocumentKind::Jpeg),
        "png" => Some(DocumentKind::Png),
        _ => None,
    }
}

/// Whether the file browser should offer this path
pub fn is_supported_path(path: &Path) -> bool {
    kind_from_extension(path).is_some()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
