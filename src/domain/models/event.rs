use tui_textarea::Input;

use super::Analysis;
use super::Answer;
use super::Document;
use super::DocumentReceipt;

/// Failure events carry no cause. The worker that hit the failure logs it,
/// the UI only needs to know which fixed notice to show.
pub enum Event {
    AnalysisFailed(),
    AnalysisReady(Analysis),
    AnswerFailed(),
    AnswerReceived(Answer),
    DeleteFailed(String),
    DocumentUploaded(DocumentReceipt),
    DocumentsRefreshed(Vec<Document>),
    UploadFailed(),
    UrlAnalyzeFailed(),
    UrlAnalyzed(DocumentReceipt),

    KeyboardCharInput(Input),
    KeyboardCTRLA(),
    KeyboardCTRLC(),
    KeyboardCTRLG(),
    KeyboardCTRLN(),
    KeyboardCTRLP(),
    KeyboardCTRLR(),
    KeyboardCTRLX(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}
