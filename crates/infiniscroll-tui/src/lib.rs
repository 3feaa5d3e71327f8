pub mod app;
pub mod components;
pub mod events;
pub mod list_view;
pub mod theme;
pub mod ui;

pub use app::App;
