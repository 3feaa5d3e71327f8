use crate::{PageResponse, Record};
use async_trait::async_trait;
use infiniscroll_core::ScrollResult;

/// Source of pages, one request per page number.
///
/// Implementations collapse transport failures, non-success statuses and
/// undecodable bodies into a [`ScrollError`](infiniscroll_core::ScrollError).
#[cfg_attr(test, mockall::automock(type Item = crate::Quote;))]
#[async_trait]
pub trait PageFetcher: Send + Sync + 'static {
    type Item: Record;

    async fn fetch_page(&self, page: u32) -> ScrollResult<PageResponse<Self::Item>>;
}
