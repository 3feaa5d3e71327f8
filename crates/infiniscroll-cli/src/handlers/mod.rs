pub mod browse;
pub mod fetch;
