use crate::{Error, Result, RiderRecord};
use ahash::AHashMap;

/// The full rider dataset, in dataset order, indexed by name.
///
/// Built once and read-only afterwards; dataset position is the stable
/// identity used by every per-query table.
#[derive(Debug, Clone)]
pub struct Roster {
    riders: Vec<RiderRecord>,
    by_name: AHashMap<String, usize>,
}

impl Roster {
    /// Build a roster, rejecting empty datasets and duplicate names
    pub fn new(riders: Vec<RiderRecord>) -> Result<Self> {
        if riders.is_empty() {
            return Err(Error::EmptyRoster);
        }

        let mut by_name = AHashMap::with_capacity(riders.len());
        for (position, rider) in riders.iter().enumerate() {
            if by_name.insert(rider.name.clone(), position).is_some() {
                return Err(Error::DuplicateRider(rider.name.clone()));
            }
        }

        Ok(Self { riders, by_name })
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    /// Dataset position of a rider
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&RiderRecord> {
        self.position(name).map(|i| &self.riders[i])
    }

    pub fn get_at(&self, position: usize) -> Option<&RiderRecord> {
        self.riders.get(position)
    }

    pub fn riders(&self) -> &[RiderRecord] {
        &self.riders
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiderRecord> {
        self.riders.iter()
    }

    /// All rider names, sorted ascending
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.riders.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Names containing `query` (case-insensitive), sorted ascending.
    /// An empty query matches every rider.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        let mut names: Vec<&str> = self
            .riders
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect();
        names.sort_unstable();
        names
    }
}
