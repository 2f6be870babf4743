#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Analysis;
use crate::domain::models::Answer;
use crate::domain::models::Document;
use crate::domain::models::DocumentReceipt;
use crate::domain::models::Transport;
use crate::domain::models::TransportError;
use crate::domain::models::TransportResult;

fn convert_err(err: reqwest::Error) -> TransportError {
    return TransportError::Network(err.to_string());
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AnalyzeUrlRequest {
    url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AskRequestBody {
    question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ListDocumentsResponse {
    pub documents: Vec<Document>,
}

pub struct HttpTransport {
    url: String,
    timeout: String,
}

impl Default for HttpTransport {
    fn default() -> HttpTransport {
        return HttpTransport {
            url: Config::get(ConfigKey::BaseURL),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpTransport {
    pub fn new(url: String, timeout: String) -> HttpTransport {
        return HttpTransport { url, timeout };
    }

    fn timeout_duration(&self) -> Duration {
        let millis = self.timeout.parse::<u64>().unwrap_or(30000);
        return Duration::from_millis(millis);
    }

    fn check_status(res: reqwest::Response) -> TransportResult<reqwest::Response> {
        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "request failed");
            return Err(TransportError::Server {
                status: status.as_u16(),
            });
        }

        return Ok(res);
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[allow(clippy::implicit_return)]
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> TransportResult<DocumentReceipt> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let res = reqwest::Client::new()
            .post(format!("{url}/upload", url = self.url))
            .timeout(self.timeout_duration())
            .multipart(form)
            .send()
            .await
            .map_err(convert_err)?;

        let receipt = HttpTransport::check_status(res)?
            .json::<DocumentReceipt>()
            .await
            .map_err(convert_err)?;

        tracing::debug!(body = ?receipt, "upload response");
        return Ok(receipt);
    }

    #[allow(clippy::implicit_return)]
    async fn analyze_url(&self, url: &str) -> TransportResult<DocumentReceipt> {
        if url.trim().is_empty() {
            return Err(TransportError::Validation("URL must not be empty".to_string()));
        }

        let res = reqwest::Client::new()
            .post(format!("{base}/analyze/url", base = self.url))
            .timeout(self.timeout_duration())
            .json(&AnalyzeUrlRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(convert_err)?;

        let receipt = HttpTransport::check_status(res)?
            .json::<DocumentReceipt>()
            .await
            .map_err(convert_err)?;

        tracing::debug!(body = ?receipt, "analyze url response");
        return Ok(receipt);
    }

    #[allow(clippy::implicit_return)]
    async fn analyze_document(&self, document_id: &str) -> TransportResult<Analysis> {
        let res = reqwest::Client::new()
            .post(format!("{url}/analyze/{document_id}", url = self.url))
            .timeout(self.timeout_duration())
            .send()
            .await
            .map_err(convert_err)?;

        let analysis = HttpTransport::check_status(res)?
            .json::<Analysis>()
            .await
            .map_err(convert_err)?;

        tracing::debug!(body = ?analysis, "analyze response");
        return Ok(analysis);
    }

    #[allow(clippy::implicit_return)]
    async fn get_summary(&self, document_id: &str) -> TransportResult<Analysis> {
        let res = reqwest::Client::new()
            .get(format!("{url}/summarize/{document_id}", url = self.url))
            .timeout(self.timeout_duration())
            .send()
            .await
            .map_err(convert_err)?;

        let analysis = HttpTransport::check_status(res)?
            .json::<Analysis>()
            .await
            .map_err(convert_err)?;

        tracing::debug!(body = ?analysis, "summary response");
        return Ok(analysis);
    }

    #[allow(clippy::implicit_return)]
    async fn ask(&self, question: &str, document_id: Option<&str>) -> TransportResult<Answer> {
        if question.trim().is_empty() {
            return Err(TransportError::Validation(
                "question must not be empty".to_string(),
            ));
        }

        let res = reqwest::Client::new()
            .post(format!("{url}/ask", url = self.url))
            .timeout(self.timeout_duration())
            .json(&AskRequestBody {
                question: question.to_string(),
                document_id: document_id.map(|id| return id.to_string()),
            })
            .send()
            .await
            .map_err(convert_err)?;

        let answer = HttpTransport::check_status(res)?
            .json::<Answer>()
            .await
            .map_err(convert_err)?;

        tracing::debug!(body = ?answer, "ask response");
        return Ok(answer);
    }

    #[allow(clippy::implicit_return)]
    async fn list_documents(&self) -> TransportResult<Vec<Document>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/documents", url = self.url))
            .timeout(self.timeout_duration())
            .send()
            .await
            .map_err(convert_err)?;

        let listing = HttpTransport::check_status(res)?
            .json::<ListDocumentsResponse>()
            .await
            .map_err(convert_err)?;

        return Ok(listing.documents);
    }

    #[allow(clippy::implicit_return)]
    async fn delete_document(&self, document_id: &str) -> TransportResult<()> {
        let res = reqwest::Client::new()
            .delete(format!("{url}/documents/{document_id}", url = self.url))
            .timeout(self.timeout_duration())
            .send()
            .await
            .map_err(convert_err)?;

        HttpTransport::check_status(res)?;
        return Ok(());
    }
}
