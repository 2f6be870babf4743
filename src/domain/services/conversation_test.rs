use anyhow::Result;

use super::ConversationSession;
use super::FALLBACK_ANSWER;
use crate::domain::models::Answer;
use crate::domain::models::Author;
use crate::domain::models::MessageType;
use crate::domain::models::TransportBox;
use crate::infrastructure::transports::http::HttpTransport;

fn transport_for(url: String) -> TransportBox {
    return Box::new(HttpTransport::new(url, "2000".to_string()));
}

fn answer_body(question: &str, answer: &str, sources: Vec<&str>) -> String {
    return serde_json::to_string(&Answer {
        question: question.to_string(),
        answer: answer.to_string(),
        sources: sources
            .iter()
            .map(|source| {
                return source.to_string();
            })
            .collect(),
    })
    .unwrap();
}

#[tokio::test]
async fn it_rejects_blank_questions_without_calling_the_backend() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/ask").expect(0).create();

    let transport = transport_for(server.url());
    let mut session = ConversationSession::default();

    assert!(!session.ask(&transport, "").await);
    assert!(!session.ask(&transport, "   ").await);
    assert!(session.messages().is_empty());
    assert!(!session.is_in_flight());
    mock.assert();
}

#[test]
fn it_rejects_questions_while_in_flight() {
    let mut session = ConversationSession::default();

    let first = session.begin("What is the revenue?");
    assert!(first.is_some());
    assert!(session.is_in_flight());

    let second = session.begin("And the costs?");
    assert!(second.is_none());
    assert!(session.is_in_flight());
    assert_eq!(session.messages().len(), 1);
}

#[test]
fn it_appends_the_user_message_before_the_backend_confirms() {
    let mut session = ConversationSession::default();

    let request = session.begin("  What is the revenue?  ").unwrap();
    assert_eq!(request.question, "What is the revenue?");
    assert_eq!(request.document_id, None);

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].author, Author::User);
    assert_eq!(session.messages()[0].text, "What is the revenue?");
}

#[tokio::test]
async fn it_alternates_user_and_assistant_messages() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(answer_body("q", "An answer.", vec![]))
        .expect(3)
        .create();

    let transport = transport_for(server.url());
    let mut session = ConversationSession::default();

    for question in ["First?", "Second?", "Third?"] {
        assert!(session.ask(&transport, question).await);
    }

    assert_eq!(session.messages().len(), 6);
    for (idx, message) in session.messages().iter().enumerate() {
        if idx % 2 == 0 {
            assert_eq!(message.author, Author::User);
        } else {
            assert_eq!(message.author, Author::Assistant);
        }
    }
    assert!(!session.is_in_flight());
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_appends_answers_with_sources() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask")
        .with_status(200)
        .with_body(answer_body(
            "What is the revenue?",
            "Revenue was 10M.",
            vec!["report.pdf"],
        ))
        .create();

    let transport = transport_for(server.url());
    let mut session = ConversationSession::default();

    assert!(session.ask(&transport, "What is the revenue?").await);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].author, Author::Assistant);
    assert_eq!(messages[1].text, "Revenue was 10M.");
    assert_eq!(messages[1].sources, vec!["report.pdf".to_string()]);
    assert_eq!(messages[1].message_type(), MessageType::Normal);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_synthesizes_an_error_reply_on_transport_failure() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/ask").with_status(500).create();

    let transport = transport_for(server.url());
    let mut session = ConversationSession::default();
    session.set_scope(Some("d1".to_string()));

    assert!(session.ask(&transport, "What is the revenue?").await);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].author, Author::Assistant);
    assert_eq!(messages[1].text, FALLBACK_ANSWER);
    assert!(messages[1].sources.is_empty());
    assert_eq!(messages[1].message_type(), MessageType::Error);
    assert!(!session.is_in_flight());
    mock.assert();
}

#[tokio::test]
async fn it_scopes_questions_to_the_selected_document() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/ask")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "question": "What is the revenue?",
            "document_id": "d1"
        })))
        .with_status(200)
        .with_body(answer_body("What is the revenue?", "10M.", vec![]))
        .create();

    let transport = transport_for(server.url());
    let mut session = ConversationSession::default();
    session.set_scope(Some("d1".to_string()));

    assert!(session.ask(&transport, "What is the revenue?").await);
    mock.assert();

    return Ok(());
}

#[test]
fn it_assigns_monotonic_message_ids() {
    let mut session = ConversationSession::default();

    session.begin("First?").unwrap();
    session.complete(Answer {
        question: "First?".to_string(),
        answer: "One.".to_string(),
        sources: vec![],
    });
    session.begin("Second?").unwrap();
    session.fail();

    let ids = session
        .messages()
        .iter()
        .map(|message| {
            return message.id;
        })
        .collect::<Vec<u64>>();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn it_leaves_recorded_messages_alone_when_the_scope_changes() {
    let mut session = ConversationSession::default();
    session.set_scope(Some("d1".to_string()));

    let request = session.begin("What is the revenue?").unwrap();
    assert_eq!(request.document_id, Some("d1".to_string()));

    session.set_scope(None);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].text, "What is the revenue?");
    assert_eq!(request.document_id, Some("d1".to_string()));
}
