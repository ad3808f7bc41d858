//! Active tween set
//!
//! Records live in a slot map so retiring by id is O(1) and safe against
//! stale ids. A separate id list keeps insertion order, which is the order
//! properties are committed in each tick.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::record::TweenRecord;

new_key_type! {
    /// Handle to a submitted tween
    pub struct TweenId;
}

/// Ids captured at the start of a tick
pub type Snapshot = SmallVec<[TweenId; 8]>;

/// The set of records advanced every tick
pub struct ActiveSet<T> {
    records: SlotMap<TweenId, TweenRecord<T>>,
    order: Vec<TweenId>,
}

impl<T> ActiveSet<T> {
    pub fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Mark the record active and append it
    ///
    /// Returns the new id and whether the set was empty beforehand, in which
    /// case the caller owns starting the frame loop.
    pub fn submit(&mut self, mut record: TweenRecord<T>) -> (TweenId, bool) {
        let was_empty = self.order.is_empty();
        record.set_active(true);
        let id = self.records.insert(record);
        self.order.push(id);
        (id, was_empty)
    }

    /// Remove a record; a missing id is a no-op
    pub fn retire(&mut self, id: TweenId) -> Option<TweenRecord<T>> {
        let record = self.records.remove(id)?;
        if let Some(index) = self.order.iter().position(|other| *other == id) {
            self.order.remove(index);
        }
        Some(record)
    }

    /// Ids currently in the set, in insertion order
    pub fn snapshot(&self) -> Snapshot {
        self.order.iter().copied().collect()
    }

    pub fn get(&self, id: TweenId) -> Option<&TweenRecord<T>> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut TweenRecord<T>> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (TweenId, &TweenRecord<T>)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.records.get(*id).map(|record| (*id, record)))
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
        self.order.clear();
    }
}

impl<T> Default for ActiveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
