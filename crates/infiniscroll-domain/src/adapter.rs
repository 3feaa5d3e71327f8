//! Maps loaded records plus cursor state to display rows.

use crate::{CursorState, ListAccumulator, Record};

/// The synthetic row that always trails the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterState {
    /// More pages may exist; nothing is happening.
    Idle,
    Loading,
    /// The last load failed; the user can retry.
    Error(String),
    /// Every page has been fetched.
    End,
}

impl FooterState {
    pub fn from_state(state: &CursorState) -> Self {
        if state.is_loading {
            FooterState::Loading
        } else if let Some(message) = &state.last_error {
            FooterState::Error(message.clone())
        } else if state.is_exhausted {
            FooterState::End
        } else {
            FooterState::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row<'a, R> {
    Item { index: usize, record: &'a R },
    Footer(FooterState),
}

/// Identity of a row across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey<'a> {
    Record(&'a str),
    Footer,
}

impl<'a, R: Record> Row<'a, R> {
    pub fn key(&self) -> RowKey<'a> {
        match self {
            Row::Item { record, .. } => RowKey::Record((*record).id()),
            Row::Footer(_) => RowKey::Footer,
        }
    }

    /// Both rows stand for the same item, possibly with different contents.
    pub fn same_item(&self, other: &Row<'_, R>) -> bool {
        match (self, other) {
            (Row::Item { record: a, .. }, Row::Item { record: b, .. }) => a.id() == b.id(),
            (Row::Footer(_), Row::Footer(_)) => true,
            _ => false,
        }
    }

    /// Both rows would render identically.
    pub fn same_contents(&self, other: &Row<'_, R>) -> bool {
        match (self, other) {
            (Row::Item { record: a, .. }, Row::Item { record: b, .. }) => a == b,
            (Row::Footer(a), Row::Footer(b)) => a == b,
            _ => false,
        }
    }

    pub fn record(&self) -> Option<&'a R> {
        match self {
            Row::Item { record, .. } => Some(*record),
            Row::Footer(_) => None,
        }
    }
}

/// All records in order followed by exactly one footer row.
pub fn rows<'a, R: Record>(records: &'a ListAccumulator<R>, state: &CursorState) -> Vec<Row<'a, R>> {
    let mut rows: Vec<Row<'a, R>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| Row::Item { index, record })
        .collect();
    rows.push(Row::Footer(FooterState::from_state(state)));
    rows
}
