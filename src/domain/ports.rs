use crate::domain::model::Partner;
use crate::utils::error::{Result, SectionError};
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of `path` within this storage.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn max_partners(&self) -> usize;
    fn request_timeout(&self) -> Duration;
    fn headers(&self) -> Vec<(String, String)>;
}

/// The external "get partners" collaborator.
#[async_trait]
pub trait PartnerSource: Send + Sync {
    async fn get_partners(&self) -> Result<Vec<Partner>>;
}

/// Receives errors the section swallows instead of surfacing.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, context: &str, error: &SectionError);
}
