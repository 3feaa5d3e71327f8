use crate::{
    events::{Action, Event, EventHandler},
    list_view::ListView,
    ui,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use infiniscroll_core::ScrollResult;
use infiniscroll_domain::{Completion, PageFetcher, PageResponse, PageTicket, Paginator};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::{sync::mpsc, task::JoinHandle};

/// Result of a spawned page fetch, delivered back to the event loop.
pub struct FetchDone<R> {
    pub ticket: PageTicket,
    pub result: ScrollResult<PageResponse<R>>,
}

pub struct App<F: PageFetcher> {
    pub should_quit: bool,
    pub show_detail: bool,
    pub title: String,
    pub paginator: Paginator<F>,
    pub list: ListView,
    ticks: usize,
    fetch_tx: mpsc::UnboundedSender<FetchDone<F::Item>>,
    fetch_rx: mpsc::UnboundedReceiver<FetchDone<F::Item>>,
    in_flight: Option<JoinHandle<()>>,
}

impl<F: PageFetcher> App<F> {
    pub fn new(paginator: Paginator<F>, title: impl Into<String>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            should_quit: false,
            show_detail: false,
            title: title.into(),
            paginator,
            list: ListView::new(),
            ticks: 0,
            fetch_tx,
            fetch_rx,
            in_flight: None,
        };
        app.sync_rows();
        app
    }

    pub fn spinner_frame(&self) -> usize {
        self.ticks / 6
    }

    pub fn has_fetch_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected_record(&self) -> Option<&F::Item> {
        self.list
            .selected()
            .and_then(|idx| self.paginator.records().get(idx))
    }

    pub fn quit(&mut self) {
        self.cancel_in_flight();
        self.should_quit = true;
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Up => self.list.select_prev(),
            Action::Down => self.list.select_next(),
            Action::PageUp => self.list.page_up(),
            Action::PageDown => self.list.page_down(),
            Action::Top => self.list.jump_to_first(),
            Action::Bottom => self.list.jump_to_last(),
            Action::ToggleDetail => self.show_detail = !self.show_detail,
            Action::Retry => {
                if let Some(ticket) = self.paginator.retry() {
                    tracing::info!(page = ticket.page(), "retrying page load");
                    self.spawn_fetch(ticket);
                }
                self.sync_rows();
                return;
            }
            Action::Refresh => {
                self.abort_task();
                self.list.reset();
                if let Some(ticket) = self.paginator.refresh() {
                    self.spawn_fetch(ticket);
                }
                self.sync_rows();
                return;
            }
            Action::Quit => {
                self.quit();
                return;
            }
        }
        self.maybe_load_more();
    }

    /// Starts the next page when the visible rows reach the end of the
    /// loaded ones.
    pub fn maybe_load_more(&mut self) {
        self.sync_rows();
        if let Some(ticket) = self.paginator.request_next_page_if_needed(self.list.window()) {
            self.spawn_fetch(ticket);
            self.sync_rows();
        }
    }

    pub fn on_fetch_done(&mut self, done: FetchDone<F::Item>) {
        let completion = self.paginator.apply(done.ticket, done.result);
        if completion != Completion::Stale {
            self.in_flight = None;
        }
        self.sync_rows();
        // A short page may leave the end of the list on screen.
        if matches!(completion, Completion::Appended { .. }) {
            self.maybe_load_more();
        }
    }

    /// Waits for the in-flight fetch to report back and applies it.
    pub async fn wait_for_fetch(&mut self) -> bool {
        match self.fetch_rx.recv().await {
            Some(done) => {
                self.on_fetch_done(done);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub async fn run(&mut self) -> ScrollResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        self.maybe_load_more();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            // Render may have changed the list height.
            self.maybe_load_more();

            tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => {
                        if let Some(action) = Action::from_key(&key) {
                            self.handle_action(action);
                        }
                    }
                    Some(Event::Resize) => self.maybe_load_more(),
                    Some(Event::Tick) => self.tick(),
                    None => self.quit(),
                },
                Some(done) = self.fetch_rx.recv() => {
                    self.on_fetch_done(done);
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn spawn_fetch(&mut self, ticket: PageTicket) {
        let fetcher = self.paginator.fetcher();
        let tx = self.fetch_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = fetcher.fetch_page(ticket.page()).await;
            let _ = tx.send(FetchDone { ticket, result });
        }));
    }

    fn cancel_in_flight(&mut self) {
        self.paginator.cancel();
        self.abort_task();
    }

    fn abort_task(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    fn sync_rows(&mut self) {
        self.list.set_total_rows(self.paginator.records().len() + 1);
    }
}

impl<F: PageFetcher> Drop for App<F> {
    fn drop(&mut self) {
        self.abort_task();
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
