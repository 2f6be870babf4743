#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// File extensions accepted by the upload control. Advisory only, the
/// backend remains the authority on what it can ingest.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "xlsx", "xls", "csv"];

/// A unit of uploaded or URL-derived content tracked by the backend. The
/// status tag is owned by the backend and treated as opaque display text,
/// and is only trustworthy immediately after a listing refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub status: String,
}

/// Receipt returned by upload and URL analyze calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReceipt {
    pub document_id: String,
    pub status: String,
    pub message: String,
}

pub fn has_supported_extension(filename: &str) -> bool {
    if let Some((_, extension)) = filename.rsplit_once('.') {
        let extension = extension.to_lowercase();
        return SUPPORTED_EXTENSIONS.contains(&extension.as_str());
    }

    return false;
}
