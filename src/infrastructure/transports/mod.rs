pub mod http;

use anyhow::Result;

use crate::domain::models::TransportBox;

pub struct TransportManager {}

impl TransportManager {
    pub fn get() -> Result<TransportBox> {
        return Ok(Box::<http::HttpTransport>::default());
    }
}
