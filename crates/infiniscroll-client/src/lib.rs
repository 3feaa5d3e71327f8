pub mod http;
pub mod patients;
pub mod quotes;
#[cfg(feature = "test-util")]
pub mod testing;

pub use http::build_client;
pub use patients::{PatientQuery, PatientsFetcher};
pub use quotes::QuotesFetcher;
