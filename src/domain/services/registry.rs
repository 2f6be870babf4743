#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use crate::domain::models::Document;
use crate::domain::models::TransportBox;
use crate::domain::models::TransportResult;

/// In-memory view of the backend's document listing. Contents are always a
/// direct function of the most recent successful refresh, a refresh is a
/// full snapshot replace and never a merge. Uploads are absorbed the same
/// way: rather than synthesizing a local entry, callers trigger a refresh
/// so the displayed status is server truth.
#[derive(Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
}

impl DocumentRegistry {
    pub fn documents(&self) -> &[Document] {
        return &self.documents;
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        return self.documents.iter().find(|document| {
            return document.id == id;
        });
    }

    pub async fn refresh(&mut self, transport: &TransportBox) -> TransportResult<()> {
        let listing = transport.list_documents().await?;
        self.documents = listing;

        return Ok(());
    }

    /// Deletes a document and refreshes the listing. When the delete fails
    /// the registry is left exactly as it was and the failure is returned
    /// to the caller.
    pub async fn remove(&mut self, transport: &TransportBox, id: &str) -> TransportResult<()> {
        if let Err(err) = transport.delete_document(id).await {
            tracing::error!(error = %err, id, "failed to delete document");
            return Err(err);
        }

        return self.refresh(transport).await;
    }
}
