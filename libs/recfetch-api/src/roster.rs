use std::collections::HashMap;

use crate::record::Record;

/// Outcome table for the simulator: an id present here fetches
/// successfully, an id absent from it takes the failure branch.
#[derive(Debug, Clone)]
pub struct Roster {
    names: HashMap<u64, String>,
}

impl Roster {
    /// Empty roster — every fetch against it fails.
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: u64, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn contains(&self, id: u64) -> bool {
        self.names.contains_key(&id)
    }

    /// Resolve an id into a record. `None` means the failure branch.
    pub fn resolve(&self, id: u64) -> Option<Record> {
        self.names.get(&id).map(|name| Record {
            id,
            name: name.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Roster {
    /// Built-in demo table.
    fn default() -> Self {
        [
            (1, "Bruce Wayne"),
            (2, "Clark Kent"),
            (3, "Diana Prince"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect()
    }
}

impl FromIterator<(u64, String)> for Roster {
    fn from_iter<I: IntoIterator<Item = (u64, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_echoes_requested_id() {
        let roster = Roster::default();
        for id in 1..=3 {
            let record = roster.resolve(id).expect("demo id must resolve");
            assert_eq!(record.id, id);
        }
    }

    #[test]
    fn missing_id_resolves_to_none() {
        let roster = Roster::default();
        assert!(roster.resolve(99).is_none());
        assert!(!roster.contains(99));
    }

    #[test]
    fn insert_overrides_default_entry() {
        let mut roster = Roster::default();
        roster.insert(1, "Alfred Pennyworth");
        assert_eq!(roster.resolve(1).unwrap().name, "Alfred Pennyworth");
    }

    #[test]
    fn empty_roster_has_no_entries() {
        let roster = Roster::empty();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }
}
