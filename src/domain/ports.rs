use crate::domain::location::{Coordinate, LocationTag};
use crate::domain::model::{SourceText, TextBlock, TrackerReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Fetches one entity's history page as plain text.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<TextBlock>;
}

/// Resolves a location tag to the coordinate it is drawn at.
pub trait LocationDirectory: Send + Sync {
    fn coordinate(&self, tag: LocationTag) -> Coordinate;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceText>>;
    async fn transform(&self, data: Vec<SourceText>) -> Result<TrackerReport>;
    async fn load(&self, report: TrackerReport) -> Result<String>;
}
