use std::path;

use super::AskRequest;

pub enum Action {
    AnalyzeDocument(String),
    AnalyzeUrl(String),
    DeleteDocument(String),
    FetchSummary(String),
    RefreshDocuments(),
    SubmitQuestion(AskRequest),
    UploadFile(path::PathBuf),
}
