//! Status fetcher trait

use async_trait::async_trait;

use crate::homework::FetchResult;

/// Source of homework status snapshots
#[async_trait]
pub trait StatusFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch every status change since `from_date` (seconds since epoch).
    ///
    /// Transport failures, non-200 responses and undecodable bodies are all
    /// reported as [`crate::HomeworkBotError::Connectivity`].
    async fn fetch(&self, from_date: i64) -> crate::Result<FetchResult>;
}
