use async_trait::async_trait;
use thiserror::Error;

use super::Analysis;
use super::Answer;
use super::Document;
use super::DocumentReceipt;

/// Classified failure for a single transport attempt. No retries happen at
/// this layer, every call is one attempt against the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request never reached the server: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Server { status: u16 },

    #[error("{0}")]
    Validation(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// A question captured at send time together with the session scope it was
/// sent under. Changing the scope afterwards does not alter the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub document_id: Option<String>,
}

#[async_trait]
pub trait Transport {
    /// Uploads a document by filename and raw contents.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> TransportResult<DocumentReceipt>;

    /// Submits a web page URL for ingestion and analysis.
    async fn analyze_url(&self, url: &str) -> TransportResult<DocumentReceipt>;

    /// Runs analysis for a document, producing a summary with insights.
    async fn analyze_document(&self, document_id: &str) -> TransportResult<Analysis>;

    /// Fetches the stored summary for a document without re-analyzing.
    async fn get_summary(&self, document_id: &str) -> TransportResult<Analysis>;

    /// Asks a question, optionally scoped to a single document. A `None`
    /// document id means the whole corpus.
    async fn ask(&self, question: &str, document_id: Option<&str>) -> TransportResult<Answer>;

    /// Lists all documents known to the backend, in backend order.
    async fn list_documents(&self) -> TransportResult<Vec<Document>>;

    /// Deletes a document by id.
    async fn delete_document(&self, document_id: &str) -> TransportResult<()>;
}

pub type TransportBox = Box<dyn Transport + Send + Sync>;
