use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::sync::mpsc;

use super::DocumentRegistry;
use crate::domain::models::Action;
use crate::domain::models::AskRequest;
use crate::domain::models::Event;
use crate::domain::models::TransportBox;
use crate::infrastructure::transports::TransportManager;

fn send_snapshot(registry: &DocumentRegistry, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::DocumentsRefreshed(registry.documents().to_vec()))?;
    return Ok(());
}

async fn refresh_documents(
    registry: &mut DocumentRegistry,
    transport: &TransportBox,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if let Err(err) = registry.refresh(transport).await {
        tracing::error!(error = %err, "failed to fetch document listing");
        return Ok(());
    }

    return send_snapshot(registry, tx);
}

fn submit_question(request: AskRequest, tx: &mpsc::UnboundedSender<Event>) {
    let worker_tx = tx.clone();
    let _ = tokio::spawn(async move {
        let transport = TransportManager::get()?;
        match transport
            .ask(&request.question, request.document_id.as_deref())
            .await
        {
            Ok(answer) => worker_tx.send(Event::AnswerReceived(answer))?,
            Err(err) => {
                tracing::error!(error = %err, "failed to get an answer from the backend");
                worker_tx.send(Event::AnswerFailed())?;
            }
        }

        return Ok::<(), anyhow::Error>(());
    });
}

fn analyze_document(document_id: String, tx: &mpsc::UnboundedSender<Event>) {
    let worker_tx = tx.clone();
    let _ = tokio::spawn(async move {
        let transport = TransportManager::get()?;
        match transport.analyze_document(&document_id).await {
            Ok(analysis) => worker_tx.send(Event::AnalysisReady(analysis))?,
            Err(err) => {
                tracing::error!(error = %err, document_id, "failed to analyze document");
                worker_tx.send(Event::AnalysisFailed())?;
            }
        }

        return Ok::<(), anyhow::Error>(());
    });
}

fn fetch_summary(document_id: String, tx: &mpsc::UnboundedSender<Event>) {
    let worker_tx = tx.clone();
    let _ = tokio::spawn(async move {
        let transport = TransportManager::get()?;
        match transport.get_summary(&document_id).await {
            Ok(analysis) => worker_tx.send(Event::AnalysisReady(analysis))?,
            Err(err) => {
                tracing::error!(error = %err, document_id, "failed to fetch summary");
                worker_tx.send(Event::AnalysisFailed())?;
            }
        }

        return Ok::<(), anyhow::Error>(());
    });
}

async fn upload_file(
    registry: &mut DocumentRegistry,
    transport: &TransportBox,
    tx: &mpsc::UnboundedSender<Event>,
    file_path: path::PathBuf,
) -> Result<()> {
    let filename = match file_path.file_name() {
        Some(filename) => filename.to_string_lossy().to_string(),
        None => {
            tracing::error!(path = %file_path.display(), "path has no file name");
            tx.send(Event::UploadFailed())?;
            return Ok(());
        }
    };

    let bytes = match fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, path = %file_path.display(), "failed to read file");
            tx.send(Event::UploadFailed())?;
            return Ok(());
        }
    };

    match transport.upload(&filename, bytes).await {
        Ok(receipt) => {
            // Server truth over a synthesized local entry.
            refresh_documents(registry, transport, tx).await?;
            tx.send(Event::DocumentUploaded(receipt))?;
        }
        Err(err) => {
            tracing::error!(error = %err, filename, "failed to upload document");
            tx.send(Event::UploadFailed())?;
        }
    }

    return Ok(());
}

async fn analyze_url(
    registry: &mut DocumentRegistry,
    transport: &TransportBox,
    tx: &mpsc::UnboundedSender<Event>,
    url: String,
) -> Result<()> {
    match transport.analyze_url(&url).await {
        Ok(receipt) => {
            refresh_documents(registry, transport, tx).await?;
            tx.send(Event::UrlAnalyzed(receipt))?;
        }
        Err(err) => {
            tracing::error!(error = %err, url, "failed to analyze URL");
            tx.send(Event::UrlAnalyzeFailed())?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Owns the transport and the document registry. Chat and analysis
    /// requests run on worker tasks so neither blocks the other; analysis
    /// workers are intentionally not deduplicated, overlapping requests all
    /// complete and the last response to arrive wins. Registry operations
    /// run inline on the service loop.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let transport = TransportManager::get()?;
        let mut registry = DocumentRegistry::default();

        refresh_documents(&mut registry, &transport, &tx).await?;

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            match action.unwrap() {
                Action::SubmitQuestion(request) => {
                    submit_question(request, &tx);
                }
                Action::AnalyzeDocument(document_id) => {
                    analyze_document(document_id, &tx);
                }
                Action::FetchSummary(document_id) => {
                    fetch_summary(document_id, &tx);
                }
                Action::UploadFile(file_path) => {
                    upload_file(&mut registry, &transport, &tx, file_path).await?;
                }
                Action::AnalyzeUrl(url) => {
                    analyze_url(&mut registry, &transport, &tx, url).await?;
                }
                Action::DeleteDocument(document_id) => {
                    match registry.remove(&transport, &document_id).await {
                        Ok(()) => send_snapshot(&registry, &tx)?,
                        Err(_) => {
                            tx.send(Event::DeleteFailed(document_id))?;
                        }
                    }
                }
                Action::RefreshDocuments() => {
                    refresh_documents(&mut registry, &transport, &tx).await?;
                }
            }
        }
    }
}
