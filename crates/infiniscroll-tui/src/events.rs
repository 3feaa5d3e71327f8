use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Polls crossterm on a background task and forwards input as [`Event`]s.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        let event = if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                                _ => None,
                            }
                        } else {
                            Some(Event::Tick)
                        };
                        if let Some(event) = event {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// What a key press asks the list to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Retry,
    Refresh,
    ToggleDetail,
    Quit,
}

impl Action {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                KeyCode::Char('d') => Some(Action::PageDown),
                KeyCode::Char('u') => Some(Action::PageUp),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
            KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Char('R') => Some(Action::Refresh),
            KeyCode::Enter | KeyCode::Tab => Some(Action::ToggleDetail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key(&key(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(Action::from_key(&key(KeyCode::Up)), Some(Action::Up));
        assert_eq!(Action::from_key(&key(KeyCode::Char('r'))), Some(Action::Retry));
        assert_eq!(Action::from_key(&key(KeyCode::Char('R'))), Some(Action::Refresh));
        assert_eq!(Action::from_key(&key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(Action::from_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_bindings() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Action::from_key(&ctrl_c), Some(Action::Quit));
        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(Action::from_key(&ctrl_j), None);
    }
}
