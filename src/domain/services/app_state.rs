#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use super::AnalysisCoordinator;
use super::ConversationSession;
use super::Scroll;
use crate::domain::models::Document;
use crate::domain::models::Event;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Chat,
    Summary,
}

impl Tab {
    pub fn next(&self) -> Tab {
        match self {
            Tab::Upload => return Tab::Chat,
            Tab::Chat => return Tab::Summary,
            Tab::Summary => return Tab::Upload,
        }
    }
}

pub struct Notice {
    pub text: String,
    pub error: bool,
}

/// Read model for the UI. Holds the latest registry snapshot alongside the
/// conversation session and analysis coordinator, and applies orchestrator
/// events to them. The UI never mutates core state through any other path.
pub struct AppState {
    pub active_tab: Tab,
    pub documents: Vec<Document>,
    pub selected: Option<usize>,
    pub session: ConversationSession,
    pub coordinator: AnalysisCoordinator,
    pub upload_notice: Option<Notice>,
    pub status_notice: Option<String>,
    pub scroll: Scroll,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            active_tab: Tab::Upload,
            documents: vec![],
            selected: None,
            session: ConversationSession::default(),
            coordinator: AnalysisCoordinator::default(),
            upload_notice: None,
            status_notice: None,
            scroll: Scroll::default(),
        };
    }
}

impl AppState {
    pub fn selected_document(&self) -> Option<&Document> {
        return self.selected.and_then(|idx| {
            return self.documents.get(idx);
        });
    }

    pub fn select_next(&mut self) {
        if self.documents.is_empty() {
            return;
        }

        let idx = match self.selected {
            Some(idx) => (idx + 1) % self.documents.len(),
            None => 0,
        };
        self.select_index(Some(idx));
    }

    pub fn select_previous(&mut self) {
        if self.documents.is_empty() {
            return;
        }

        let idx = match self.selected {
            Some(0) | None => self.documents.len() - 1,
            Some(idx) => idx - 1,
        };
        self.select_index(Some(idx));
    }

    pub fn select_by_id(&mut self, id: &str) {
        let idx = self.documents.iter().position(|document| {
            return document.id == id;
        });

        if idx.is_some() {
            self.select_index(idx);
        }
    }

    /// Applies an orchestrator event. Keyboard and terminal events are the
    /// UI loop's concern and are ignored here.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::DocumentsRefreshed(documents) => {
                let selected_id = self
                    .selected_document()
                    .map(|document| return document.id.to_string());
                self.documents = documents;

                let idx = selected_id.and_then(|id| {
                    return self.documents.iter().position(|document| {
                        return document.id == id;
                    });
                });
                self.select_index(idx);
            }
            Event::DocumentUploaded(receipt) => {
                self.upload_notice = Some(Notice {
                    text: receipt.message,
                    error: false,
                });
                self.select_by_id(&receipt.document_id);
            }
            Event::UrlAnalyzed(receipt) => {
                self.upload_notice = Some(Notice {
                    text: receipt.message,
                    error: false,
                });
                self.select_by_id(&receipt.document_id);
            }
            Event::UploadFailed() => {
                self.upload_notice = Some(Notice {
                    text: "Failed to upload document. Please try again.".to_string(),
                    error: true,
                });
            }
            Event::UrlAnalyzeFailed() => {
                self.upload_notice = Some(Notice {
                    text: "Failed to analyze URL. Please check the URL and try again.".to_string(),
                    error: true,
                });
            }
            Event::DeleteFailed(id) => {
                self.status_notice = Some(format!("Failed to delete document {id}."));
            }
            Event::AnalysisReady(analysis) => {
                self.coordinator.finish(analysis);
            }
            Event::AnalysisFailed() => {
                self.coordinator.fail();
            }
            Event::AnswerReceived(answer) => {
                self.session.complete(answer);
                self.scroll.last();
            }
            Event::AnswerFailed() => {
                self.session.fail();
                self.scroll.last();
            }
            _ => (),
        }
    }

    fn select_index(&mut self, idx: Option<usize>) {
        self.selected = idx;
        let scope = self
            .selected_document()
            .map(|document| return document.id.to_string());
        self.session.set_scope(scope);
    }
}
