//! Pagination cursor.
//!
//! A small state machine: `begin` hands out a [`PageTicket`] for the next
//! page, and exactly one of `complete`/`fail` settles it. At most one ticket is
//! outstanding. `cancel` and `reset` bump a generation counter so a result that
//! arrives for an abandoned ticket is recognised and dropped.

use crate::{ListAccumulator, PageResponse, Record, ScrollTrigger};
use infiniscroll_core::{ScrollError, VisibleWindow};
use serde::Serialize;

/// Permission to fetch one page. Must be handed back to the cursor with the
/// fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: u32,
    generation: u64,
}

impl PageTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Snapshot of the cursor for presentation and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorState {
    pub next_page: u32,
    pub is_loading: bool,
    pub is_exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// What settling a ticket did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Appended {
        page: u32,
        added: usize,
        exhausted: bool,
        /// Identifiers in the page that were already loaded.
        duplicates: Vec<String>,
    },
    Failed {
        page: u32,
    },
    /// The ticket was cancelled or superseded; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PaginationCursor {
    next_page: u32,
    in_flight: Option<PageTicket>,
    exhausted: bool,
    last_error: Option<String>,
    generation: u64,
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self {
            next_page: 1,
            in_flight: None,
            exhausted: false,
            last_error: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> CursorState {
        CursorState {
            next_page: self.next_page,
            is_loading: self.is_loading(),
            is_exhausted: self.exhausted,
            last_error: self.last_error.clone(),
        }
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_load(&self) -> bool {
        self.in_flight.is_none() && !self.exhausted
    }

    /// Starts a load of the next page regardless of scroll position. Used for
    /// the first page and for user-initiated retries. Clears any shown error.
    pub fn begin(&mut self) -> Option<PageTicket> {
        if !self.can_load() {
            return None;
        }
        let ticket = PageTicket {
            page: self.next_page,
            generation: self.generation,
        };
        self.in_flight = Some(ticket);
        self.last_error = None;
        tracing::debug!(page = ticket.page, "page load started");
        Some(ticket)
    }

    /// Starts a load only when the visible rows have reached the end of loaded
    /// data. A displayed load error blocks this path until the user retries.
    pub fn request_next_page_if_needed(
        &mut self,
        trigger: &ScrollTrigger,
        window: VisibleWindow,
        loaded: usize,
    ) -> Option<PageTicket> {
        if self.last_error.is_some() || !self.can_load() {
            return None;
        }
        if !trigger.is_near_end(window, loaded) {
            return None;
        }
        self.begin()
    }

    /// Settles `ticket` with a successful response, appending its records.
    pub fn complete<R: Record>(
        &mut self,
        ticket: PageTicket,
        response: PageResponse<R>,
        records: &mut ListAccumulator<R>,
    ) -> Completion {
        if !self.take(ticket) {
            return Completion::Stale;
        }

        let exhausted = response.is_last();
        let duplicates = records.overlap(&response.records);
        let added = records.append(response.records);

        self.exhausted = exhausted;
        self.next_page = ticket.page + 1;
        self.last_error = None;

        Completion::Appended {
            page: ticket.page,
            added,
            exhausted,
            duplicates,
        }
    }

    /// Settles `ticket` with a failure. Exhaustion is untouched so the same
    /// page can be retried.
    pub fn fail(&mut self, ticket: PageTicket, error: &ScrollError) -> Completion {
        if !self.take(ticket) {
            return Completion::Stale;
        }
        self.last_error = Some(error.summary());
        Completion::Failed { page: ticket.page }
    }

    /// Abandons the in-flight load, if any. Its result will be reported as
    /// [`Completion::Stale`].
    pub fn cancel(&mut self) -> Option<PageTicket> {
        self.generation += 1;
        self.in_flight.take()
    }

    /// Back to page one, as on an explicit refresh.
    pub fn reset(&mut self) {
        self.cancel();
        self.next_page = 1;
        self.exhausted = false;
        self.last_error = None;
    }

    fn take(&mut self, ticket: PageTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            tracing::debug!(page = ticket.page, "dropping result for stale ticket");
            false
        }
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}
