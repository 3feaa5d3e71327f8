use crate::Record;
use std::collections::HashSet;

/// Ordered collection of every record fetched so far.
///
/// Pages are appended as they arrive. Identifiers are not deduplicated; use
/// [`ListAccumulator::overlap`] to find out whether an incoming page repeats
/// records that are already held.
#[derive(Debug, Clone)]
pub struct ListAccumulator<R> {
    records: Vec<R>,
}

impl<R> ListAccumulator<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends in order and returns how many records were added.
    pub fn append(&mut self, records: impl IntoIterator<Item = R>) -> usize {
        let before = self.records.len();
        self.records.extend(records);
        self.records.len() - before
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<R: Record> ListAccumulator<R> {
    /// Identifiers in `incoming` that are already held or that repeat
    /// earlier within `incoming` itself. Each repeat is reported once.
    pub fn overlap(&self, incoming: &[R]) -> Vec<String> {
        if incoming.is_empty() {
            return Vec::new();
        }
        let mut seen: HashSet<&str> = self.records.iter().map(|r| r.id()).collect();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in incoming {
            let id = record.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id.to_string());
            }
        }
        duplicates
    }

    /// Identifiers that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.records {
            let id = record.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id.to_string());
            }
        }
        duplicates
    }
}

impl<R> Default for ListAccumulator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a ListAccumulator<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Patient;

    fn patient(id: &str) -> Patient {
        Patient {
            patient_id: id.to_string(),
            first_name: Some(format!("Name {}", id)),
            last_name: None,
            mobile_no: None,
            email: None,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut acc = ListAccumulator::new();
        assert_eq!(acc.append(vec![patient("1"), patient("2")]), 2);
        assert_eq!(acc.append(vec![patient("3")]), 1);

        let ids: Vec<&str> = acc.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.get(2).map(|p| p.id()), Some("3"));
        assert!(acc.get(3).is_none());
    }

    #[test]
    fn test_append_empty_page() {
        let mut acc: ListAccumulator<Patient> = ListAccumulator::new();
        assert_eq!(acc.append(Vec::new()), 0);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let mut acc = ListAccumulator::new();
        acc.append(vec![patient("1"), patient("2")]);

        let incoming = vec![patient("2"), patient("3")];
        assert_eq!(acc.overlap(&incoming), vec!["2".to_string()]);

        acc.append(incoming);
        assert_eq!(acc.len(), 4);
        assert_eq!(acc.duplicate_ids(), vec!["2".to_string()]);
    }

    #[test]
    fn test_repeats_within_one_page_are_reported() {
        let mut acc = ListAccumulator::new();
        acc.append(vec![patient("1")]);

        let incoming = vec![patient("4"), patient("4"), patient("1"), patient("4")];
        assert_eq!(acc.overlap(&incoming), vec!["4".to_string(), "1".to_string()]);

        acc.append(incoming);
        assert_eq!(acc.len(), 5);
        assert_eq!(acc.duplicate_ids(), vec!["4".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut acc = ListAccumulator::new();
        acc.append(vec![patient("1")]);
        acc.clear();
        assert!(acc.is_empty());
    }
}
