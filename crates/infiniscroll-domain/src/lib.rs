pub mod accumulator;
pub mod adapter;
pub mod cursor;
pub mod fetcher;
pub mod page;
pub mod paginator;
pub mod patient;
pub mod quote;
pub mod record;
pub mod trigger;

pub use accumulator::ListAccumulator;
pub use adapter::{FooterState, Row, RowKey};
pub use cursor::{Completion, CursorState, PageTicket, PaginationCursor};
pub use fetcher::PageFetcher;
pub use page::PageResponse;
pub use paginator::Paginator;
pub use patient::{PageEvent, Patient, PatientPayload};
pub use quote::{Quote, QuotesPayload};
pub use record::Record;
pub use trigger::ScrollTrigger;
