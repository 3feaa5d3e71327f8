use std::fmt::Debug;

/// An immutable item shown as one row of the list.
pub trait Record: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Stable identifier, used for row identity when diffing.
    fn id(&self) -> &str;

    /// Primary line of the row.
    fn headline(&self) -> String;

    /// Secondary line of the row.
    fn detail(&self) -> String;

    /// Label/value pairs for the detail panel.
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id().to_string())]
    }
}
