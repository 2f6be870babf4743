#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;

use crate::domain::models::Analysis;
use crate::domain::models::TransportBox;

pub enum AnalysisState {
    Idle,
    Loading,
    Ready(Analysis),
    Error,
}

/// Drives the select-document, request-analysis, display-summary flow.
///
/// There is deliberately no cancellation or dedup of in-flight requests:
/// every issued analysis runs to completion and applies its outcome to the
/// single result slot, so when two requests overlap the last response to
/// arrive decides the displayed state, regardless of issue order.
pub struct AnalysisCoordinator {
    state: AnalysisState,
}

impl Default for AnalysisCoordinator {
    fn default() -> AnalysisCoordinator {
        return AnalysisCoordinator {
            state: AnalysisState::Idle,
        };
    }
}

impl AnalysisCoordinator {
    pub fn state(&self) -> &AnalysisState {
        return &self.state;
    }

    pub fn is_loading(&self) -> bool {
        return matches!(self.state, AnalysisState::Loading);
    }

    /// Any state to Loading. A previously displayed result is dropped
    /// rather than shown stale next to the spinner.
    pub fn begin(&mut self) {
        self.state = AnalysisState::Loading;
    }

    pub fn finish(&mut self, analysis: Analysis) {
        self.state = AnalysisState::Ready(analysis);
    }

    pub fn fail(&mut self) {
        self.state = AnalysisState::Error;
    }

    /// Requests analysis for a document and applies the outcome.
    pub async fn select_document(&mut self, transport: &TransportBox, document_id: &str) {
        self.begin();

        match transport.analyze_document(document_id).await {
            Ok(analysis) => self.finish(analysis),
            Err(err) => {
                tracing::error!(error = %err, document_id, "failed to analyze document");
                self.fail();
            }
        }
    }
}
