use infiniscroll_client::{PatientsFetcher, QuotesFetcher};
use infiniscroll_core::{AppConfig, SourceKind};
use infiniscroll_domain::{PageFetcher, Paginator, ScrollTrigger};
use infiniscroll_tui::App;

pub async fn handle(config: &AppConfig) -> anyhow::Result<()> {
    let trigger = ScrollTrigger::new(config.effective_prefetch_distance());
    match config.source {
        SourceKind::Quotes => browse(QuotesFetcher::from_config(config)?, trigger, "Quotes").await,
        SourceKind::Patients => {
            browse(PatientsFetcher::from_config(config)?, trigger, "Patients").await
        }
    }
}

async fn browse<F: PageFetcher>(fetcher: F, trigger: ScrollTrigger, title: &str) -> anyhow::Result<()> {
    let mut app = App::new(Paginator::with_trigger(fetcher, trigger), title);
    app.run().await?;
    Ok(())
}
