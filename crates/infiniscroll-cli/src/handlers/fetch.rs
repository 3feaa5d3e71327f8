use crate::cli::FetchArgs;
use crate::output;
use infiniscroll_client::{PatientsFetcher, QuotesFetcher};
use infiniscroll_core::{AppConfig, SourceKind};
use infiniscroll_domain::{CursorState, PageFetcher, Paginator};
use serde::Serialize;

#[derive(Serialize)]
pub struct FetchResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
    /// Identifiers that occur more than once in `items`.
    pub duplicates: Vec<String>,
    pub state: CursorState,
}

pub async fn handle(config: &AppConfig, args: &FetchArgs) -> anyhow::Result<()> {
    match config.source {
        SourceKind::Quotes => {
            let response = load(QuotesFetcher::from_config(config)?, args.pages).await?;
            output::output_success(response)
        }
        SourceKind::Patients => {
            let response = load(PatientsFetcher::from_config(config)?, args.pages).await?;
            output::output_success(response)
        }
    }
}

/// Loads up to `pages` pages. A failure after at least one record arrived
/// yields the partial list with the error recorded in the cursor state.
async fn load<F>(fetcher: F, pages: u32) -> anyhow::Result<FetchResponse<F::Item>>
where
    F: PageFetcher,
    F::Item: Serialize,
{
    let mut paginator = Paginator::new(fetcher);
    match paginator.load_pages(pages).await {
        Ok(loaded) => {
            tracing::debug!(loaded, records = paginator.records().len(), "fetch finished");
        }
        Err(e) if paginator.records().is_empty() => return Err(e.into()),
        Err(e) => {
            tracing::debug!(records = paginator.records().len(), "fetch stopped early: {}", e);
        }
    }

    let state = paginator.state();
    let duplicates = paginator.records().duplicate_ids();
    let items: Vec<F::Item> = paginator.records().iter().cloned().collect();
    Ok(FetchResponse {
        count: items.len(),
        items,
        duplicates,
        state,
    })
}
