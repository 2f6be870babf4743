use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Backend-side summarization output for one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub document_id: String,
    pub summary: String,
    pub insights: Vec<String>,
}

/// Answer to a question, optionally scoped to one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub sources: Vec<String>,
}
