use anyhow::Result;

use super::HttpTransport;
use super::ListDocumentsResponse;
use crate::domain::models::Analysis;
use crate::domain::models::Answer;
use crate::domain::models::Document;
use crate::domain::models::DocumentReceipt;
use crate::domain::models::Transport;
use crate::domain::models::TransportError;

fn with_url(url: String) -> HttpTransport {
    return HttpTransport::new(url, "2000".to_string());
}

#[tokio::test]
async fn it_uploads_documents() -> Result<()> {
    let body = serde_json::to_string(&DocumentReceipt {
        document_id: "d1".to_string(),
        status: "processing".to_string(),
        message: "Document uploaded successfully".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/upload")
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let receipt = transport.upload("report.pdf", b"%PDF-1.4".to_vec()).await?;

    assert_eq!(receipt.document_id, "d1");
    assert_eq!(receipt.status, "processing");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_analyzes_urls() -> Result<()> {
    let body = serde_json::to_string(&DocumentReceipt {
        document_id: "d2".to_string(),
        status: "processing".to_string(),
        message: "URL submitted".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/analyze/url")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "url": "https://example.com/article"
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let receipt = transport.analyze_url("https://example.com/article").await?;

    assert_eq!(receipt.document_id, "d2");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_rejects_empty_urls_before_any_network_call() {
    let transport = with_url("http://localhost:0".to_string());
    let res = transport.analyze_url("   ").await;

    assert!(matches!(res, Err(TransportError::Validation(_))));
}

#[tokio::test]
async fn it_analyzes_documents() -> Result<()> {
    let body = serde_json::to_string(&Analysis {
        document_id: "d1".to_string(),
        summary: "A quarterly report.".to_string(),
        insights: vec!["Revenue is up".to_string()],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/analyze/d1")
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let analysis = transport.analyze_document("d1").await?;

    assert_eq!(analysis.document_id, "d1");
    assert_eq!(analysis.summary, "A quarterly report.");
    assert_eq!(analysis.insights, vec!["Revenue is up".to_string()]);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_gets_summaries() -> Result<()> {
    let body = serde_json::to_string(&Analysis {
        document_id: "d1".to_string(),
        summary: "A quarterly report.".to_string(),
        insights: vec![],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/summarize/d1")
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let analysis = transport.get_summary("d1").await?;

    assert_eq!(analysis.document_id, "d1");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_asks_scoped_questions() -> Result<()> {
    let body = serde_json::to_string(&Answer {
        question: "What is the revenue?".to_string(),
        answer: "Revenue was 10M.".to_string(),
        sources: vec!["report.pdf".to_string()],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "question": "What is the revenue?",
            "document_id": "d1"
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let answer = transport.ask("What is the revenue?", Some("d1")).await?;

    assert_eq!(answer.answer, "Revenue was 10M.");
    assert_eq!(answer.sources, vec!["report.pdf".to_string()]);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_omits_the_document_id_for_corpus_wide_questions() -> Result<()> {
    let body = serde_json::to_string(&Answer {
        question: "What do my documents say?".to_string(),
        answer: "Many things.".to_string(),
        sources: vec![],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "question": "What do my documents say?"
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    transport.ask("What do my documents say?", None).await?;

    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_rejects_empty_questions_before_any_network_call() {
    let transport = with_url("http://localhost:0".to_string());
    let res = transport.ask("", None).await;

    assert!(matches!(res, Err(TransportError::Validation(_))));
}

#[tokio::test]
async fn it_lists_documents() -> Result<()> {
    let body = serde_json::to_string(&ListDocumentsResponse {
        documents: vec![
            Document {
                id: "d1".to_string(),
                filename: "report.pdf".to_string(),
                status: "ready".to_string(),
            },
            Document {
                id: "d2".to_string(),
                filename: "rows.csv".to_string(),
                status: "processing".to_string(),
            },
        ],
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/documents")
        .with_status(200)
        .with_body(body)
        .create();

    let transport = with_url(server.url());
    let documents = transport.list_documents().await?;

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "d1");
    assert_eq!(documents[1].id, "d2");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_deletes_documents() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/documents/d1")
        .with_status(200)
        .create();

    let transport = with_url(server.url());
    transport.delete_document("d1").await?;

    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_classifies_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/documents").with_status(500).create();

    let transport = with_url(server.url());
    let res = transport.list_documents().await;

    assert!(matches!(res, Err(TransportError::Server { status: 500 })));
    mock.assert();
}

#[tokio::test]
async fn it_classifies_network_errors() {
    let transport = with_url("http://127.0.0.1:1".to_string());
    let res = transport.list_documents().await;

    assert!(matches!(res, Err(TransportError::Network(_))));
}
