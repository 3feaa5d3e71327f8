pub mod detail;
pub mod list;

pub use detail::*;
pub use list::*;
