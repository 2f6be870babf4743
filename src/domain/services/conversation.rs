#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use crate::domain::models::Answer;
use crate::domain::models::AskRequest;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::TransportBox;

/// Shown in place of an answer when the backend fails to produce one.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I encountered an error processing your question. Please try again.";

/// An append-only transcript of question/answer turns, optionally scoped to
/// one document. At most one exchange may be in flight at a time, which
/// keeps transcript order identical to request order.
#[derive(Default)]
pub struct ConversationSession {
    messages: Vec<Message>,
    scope: Option<String>,
    in_flight: bool,
    next_message_id: u64,
}

impl ConversationSession {
    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn is_in_flight(&self) -> bool {
        return self.in_flight;
    }

    pub fn scope(&self) -> Option<&str> {
        return self.scope.as_deref();
    }

    /// Sets the scoping document for subsequent questions. Takes effect on
    /// the next ask, already recorded messages are left untouched.
    pub fn set_scope(&mut self, scope: Option<String>) {
        self.scope = scope;
    }

    /// First phase of an ask. Appends the user message so the transcript
    /// reflects the question before the backend confirms anything, flips the
    /// in-flight gate, and hands back the request to send. Returns None
    /// without touching any state when the question is blank or another
    /// exchange is still in flight.
    pub fn begin(&mut self, question: &str) -> Option<AskRequest> {
        let question = question.trim();
        if question.is_empty() || self.in_flight {
            return None;
        }

        let id = self.next_id();
        self.messages.push(Message::new(id, Author::User, question));
        self.in_flight = true;

        return Some(AskRequest {
            question: question.to_string(),
            document_id: self.scope.clone(),
        });
    }

    /// Finalizes the in-flight exchange with the backend's answer.
    pub fn complete(&mut self, answer: Answer) {
        let id = self.next_id();
        self.messages.push(
            Message::new(id, Author::Assistant, &answer.answer).with_sources(answer.sources),
        );
        self.in_flight = false;
    }

    /// Finalizes the in-flight exchange with a synthesized error reply so
    /// the user message is never left dangling. Always clears the gate.
    pub fn fail(&mut self) {
        let id = self.next_id();
        self.messages.push(Message::new_with_type(
            id,
            Author::Assistant,
            MessageType::Error,
            FALLBACK_ANSWER,
        ));
        self.in_flight = false;
    }

    /// Runs a full exchange against the transport. Returns false when the
    /// question was rejected before any network call.
    pub async fn ask(&mut self, transport: &TransportBox, question: &str) -> bool {
        let request = match self.begin(question) {
            Some(request) => request,
            None => return false,
        };

        match transport
            .ask(&request.question, request.document_id.as_deref())
            .await
        {
            Ok(answer) => self.complete(answer),
            Err(err) => {
                tracing::error!(error = %err, "failed to get an answer from the backend");
                self.fail();
            }
        }

        return true;
    }

    fn next_id(&mut self) -> u64 {
        self.next_message_id += 1;
        return self.next_message_id;
    }
}
