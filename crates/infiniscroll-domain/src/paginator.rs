use crate::adapter::{self, Row};
use crate::{
    Completion, CursorState, ListAccumulator, PageFetcher, PageResponse, PageTicket,
    PaginationCursor, ScrollTrigger,
};
use infiniscroll_core::{ScrollResult, VisibleWindow};
use std::sync::Arc;

/// Cursor, accumulated records and fetcher bundled for a list view.
///
/// The paginator never spawns anything itself. Callers either drive it
/// inline with [`Paginator::load_next`], or take a ticket, run the fetch
/// wherever they like, and hand the result back through [`Paginator::apply`].
pub struct Paginator<F: PageFetcher> {
    fetcher: Arc<F>,
    cursor: PaginationCursor,
    records: ListAccumulator<F::Item>,
    trigger: ScrollTrigger,
}

impl<F: PageFetcher> Paginator<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_trigger(fetcher, ScrollTrigger::default())
    }

    pub fn with_trigger(fetcher: F, trigger: ScrollTrigger) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            cursor: PaginationCursor::new(),
            records: ListAccumulator::new(),
            trigger,
        }
    }

    pub fn fetcher(&self) -> Arc<F> {
        Arc::clone(&self.fetcher)
    }

    pub fn state(&self) -> CursorState {
        self.cursor.state()
    }

    pub fn records(&self) -> &ListAccumulator<F::Item> {
        &self.records
    }

    pub fn rows(&self) -> Vec<Row<'_, F::Item>> {
        adapter::rows(&self.records, &self.cursor.state())
    }

    pub fn request_next_page_if_needed(&mut self, window: VisibleWindow) -> Option<PageTicket> {
        let loaded = self.records.len();
        self.cursor
            .request_next_page_if_needed(&self.trigger, window, loaded)
    }

    /// User-initiated load of the next page, ignoring scroll position.
    pub fn retry(&mut self) -> Option<PageTicket> {
        self.cursor.begin()
    }

    /// Drops everything loaded and starts over from page one.
    pub fn refresh(&mut self) -> Option<PageTicket> {
        self.cursor.reset();
        self.records.clear();
        tracing::info!("list refreshed");
        self.cursor.begin()
    }

    pub fn cancel(&mut self) -> Option<PageTicket> {
        let cancelled = self.cursor.cancel();
        if let Some(ticket) = cancelled {
            tracing::debug!(page = ticket.page(), "page load cancelled");
        }
        cancelled
    }

    /// Settles a ticket previously handed out by this paginator.
    pub fn apply(
        &mut self,
        ticket: PageTicket,
        result: ScrollResult<PageResponse<F::Item>>,
    ) -> Completion {
        let completion = match result {
            Ok(response) => self.cursor.complete(ticket, response, &mut self.records),
            Err(e) => {
                let completion = self.cursor.fail(ticket, &e);
                if completion != Completion::Stale {
                    tracing::warn!(page = ticket.page(), "page load failed: {}", e);
                }
                completion
            }
        };

        if let Completion::Appended {
            page,
            added,
            exhausted,
            duplicates,
        } = &completion
        {
            tracing::info!(
                page,
                added,
                exhausted,
                total = self.records.len(),
                "page loaded"
            );
            if !duplicates.is_empty() {
                tracing::warn!(
                    page,
                    count = duplicates.len(),
                    "page repeats already loaded records: {}",
                    duplicates.join(", ")
                );
            }
        }

        completion
    }

    /// Fetches the next page inline. Returns `Ok(None)` when loading is not
    /// possible (already loading or exhausted).
    pub async fn load_next(&mut self) -> ScrollResult<Option<Completion>> {
        let Some(ticket) = self.cursor.begin() else {
            return Ok(None);
        };
        match self.fetcher.fetch_page(ticket.page()).await {
            Ok(response) => Ok(Some(self.apply(ticket, Ok(response)))),
            Err(e) => {
                self.cursor.fail(ticket, &e);
                tracing::warn!(page = ticket.page(), "page load failed: {}", e);
                Err(e)
            }
        }
    }

    /// Loads pages until exhausted or `max_pages` were fetched.
    pub async fn load_pages(&mut self, max_pages: u32) -> ScrollResult<u32> {
        let mut loaded = 0;
        while loaded < max_pages {
            match self.load_next().await? {
                Some(Completion::Appended { .. }) => loaded += 1,
                _ => break,
            }
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::MockPageFetcher;
    use crate::{FooterState, Quote};
    use chrono::NaiveDate;
    use infiniscroll_core::ScrollError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn quote(id: String) -> Quote {
        let date = NaiveDate::from_ymd_opt(2023, 4, 14).unwrap();
        Quote {
            content: format!("content {}", id),
            id,
            author: "Author".to_string(),
            author_slug: "author".to_string(),
            date_added: date,
            date_modified: date,
            length: 9,
            tags: vec![],
        }
    }

    fn quote_page(page: u32, count: usize, total: u32) -> PageResponse<Quote> {
        let records = (0..count).map(|i| quote(format!("{}-{}", page, i))).collect();
        PageResponse::new(records, page, Some(total))
    }

    #[tokio::test]
    async fn test_load_pages_until_exhausted() {
        let mut fetcher = MockPageFetcher::new();
        let mut seq = Sequence::new();
        for (page, count) in [(1u32, 20usize), (2, 20), (3, 5)] {
            fetcher
                .expect_fetch_page()
                .with(eq(page))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |p| Ok(quote_page(p, count, 3)));
        }

        let mut paginator = Paginator::new(fetcher);
        let loaded = paginator.load_pages(10).await.unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(paginator.records().len(), 45);
        assert!(paginator.state().is_exhausted);
        assert_eq!(paginator.load_next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|p| Ok(quote_page(p, 0, 0)));

        let mut paginator = Paginator::new(fetcher);
        assert_eq!(paginator.load_pages(5).await.unwrap(), 1);
        assert!(paginator.records().is_empty());
        assert!(paginator.state().is_exhausted);

        let rows = paginator.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], Row::Footer(FooterState::End));
    }

    #[tokio::test]
    async fn test_failure_then_retry_same_page() {
        let mut fetcher = MockPageFetcher::new();
        let mut seq = Sequence::new();
        fetcher
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(ScrollError::Status {
                    status: 503,
                    url: "http://test/quotes?page=1".into(),
                })
            });
        fetcher
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|p| Ok(quote_page(p, 20, 2)));

        let mut paginator = Paginator::new(fetcher);
        let err = paginator.load_next().await.unwrap_err();
        assert!(matches!(err, ScrollError::Status { status: 503, .. }));

        let state = paginator.state();
        assert!(!state.is_loading);
        assert!(!state.is_exhausted);
        assert_eq!(state.last_error.as_deref(), Some("server returned 503"));
        assert_eq!(
            paginator.rows().last(),
            Some(&Row::Footer(FooterState::Error("server returned 503".into())))
        );

        // Scrolling does not retry by itself.
        assert!(paginator
            .request_next_page_if_needed(VisibleWindow::new(0, 10))
            .is_none());

        assert!(paginator.load_next().await.unwrap().is_some());
        assert_eq!(paginator.records().len(), 20);
        assert_eq!(paginator.state().next_page, 2);
    }

    #[test]
    fn test_ticket_flow_suppresses_second_trigger() {
        let mut paginator = Paginator::new(MockPageFetcher::new());

        let ticket = paginator
            .request_next_page_if_needed(VisibleWindow::new(0, 10))
            .unwrap();
        assert_eq!(ticket.page(), 1);
        assert!(paginator
            .request_next_page_if_needed(VisibleWindow::new(0, 10))
            .is_none());
        assert!(paginator.retry().is_none());
        assert_eq!(paginator.rows(), vec![Row::Footer(FooterState::Loading)]);

        let completion = paginator.apply(ticket, Ok(quote_page(1, 20, 3)));
        assert!(matches!(completion, Completion::Appended { added: 20, .. }));
        assert!(paginator
            .request_next_page_if_needed(VisibleWindow::new(0, 10))
            .is_none());
        assert_eq!(
            paginator
                .request_next_page_if_needed(VisibleWindow::new(11, 10))
                .map(|t| t.page()),
            Some(2)
        );
    }

    #[test]
    fn test_refresh_discards_late_result() {
        let mut paginator = Paginator::new(MockPageFetcher::new());

        let first = paginator.retry().unwrap();
        paginator.apply(first, Ok(quote_page(1, 20, 3)));
        let second = paginator
            .request_next_page_if_needed(VisibleWindow::new(19, 1))
            .unwrap();
        assert_eq!(second.page(), 2);

        let restart = paginator.refresh().unwrap();
        assert_eq!(restart.page(), 1);
        assert!(paginator.records().is_empty());

        assert_eq!(
            paginator.apply(second, Ok(quote_page(2, 20, 3))),
            Completion::Stale
        );
        assert!(paginator.records().is_empty());
        assert!(paginator.state().is_loading);

        paginator.apply(restart, Ok(quote_page(1, 20, 3)));
        assert_eq!(paginator.records().len(), 20);
        assert_eq!(paginator.state().next_page, 2);
    }

    #[test]
    fn test_cancel_clears_loading() {
        let mut paginator = Paginator::new(MockPageFetcher::new());
        let ticket = paginator.retry().unwrap();

        assert_eq!(paginator.cancel(), Some(ticket));
        assert!(!paginator.state().is_loading);
        assert_eq!(
            paginator.apply(ticket, Err(ScrollError::Cancelled)),
            Completion::Stale
        );
        assert!(paginator.state().last_error.is_none());
    }

    #[test]
    fn test_duplicates_are_reported_not_removed() {
        let mut paginator = Paginator::new(MockPageFetcher::new());

        let ticket = paginator.retry().unwrap();
        paginator.apply(ticket, Ok(quote_page(1, 3, 5)));

        let ticket = paginator.retry().unwrap();
        let repeat = PageResponse::new(vec![quote("1-2".into()), quote("2-0".into())], 2, Some(5));
        let completion = paginator.apply(ticket, Ok(repeat));

        assert_eq!(
            completion,
            Completion::Appended {
                page: 2,
                added: 2,
                exhausted: false,
                duplicates: vec!["1-2".to_string()],
            }
        );
        assert_eq!(paginator.records().len(), 5);
    }
}
