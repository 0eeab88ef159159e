//! Per-tile neighbour overrides (portals).

use indexmap::IndexMap;
use warpsight_core::{Direction, Location};

/// Explicit neighbours for one tile, one optional slot per direction.
///
/// A filled slot redirects a step in that world-frame direction to the
/// stored target, and reorients further travel by the stored rotation.
/// Empty slots fall back to the ordinary grid step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborOverride {
    slots: [Option<(Location, Direction)>; 8],
}

impl NeighborOverride {
    /// The slot for `direction`.
    pub fn get(&self, direction: Direction) -> Option<(Location, Direction)> {
        self.slots[direction.index() as usize]
    }

    /// Fill the slot for `direction`.
    pub fn set(&mut self, direction: Direction, target: Location, rotation: Direction) {
        self.slots[direction.index() as usize] = Some((target, rotation));
    }

    /// Empty the slot for `direction`, returning what was there.
    pub fn clear(&mut self, direction: Direction) -> Option<(Location, Direction)> {
        self.slots[direction.index() as usize].take()
    }

    /// `true` when every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots as `(direction, target, rotation)`.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Location, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(d, slot)| slot.map(|(target, rotation)| (d, target, rotation)))
    }
}

/// Override records keyed by tile index, in insertion order.
///
/// Records are dropped as soon as their last slot is cleared, so the
/// presence of a record is exactly "this tile is a portal mouth".
#[derive(Clone, Debug, Default)]
pub struct PortalTable {
    records: IndexMap<u32, NeighborOverride>,
}

impl PortalTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for the tile at `index`, if any.
    pub fn record(&self, index: u32) -> Option<&NeighborOverride> {
        self.records.get(&index)
    }

    /// Fill one slot, creating the record if needed.
    pub fn set(&mut self, index: u32, direction: Direction, target: Location, rotation: Direction) {
        self.records
            .entry(index)
            .or_default()
            .set(direction, target, rotation);
    }

    /// Clear one slot, dropping the record when it becomes empty.
    pub fn clear_slot(&mut self, index: u32, direction: Direction) -> Option<(Location, Direction)> {
        let record = self.records.get_mut(&index)?;
        let previous = record.clear(direction);
        if record.is_empty() {
            self.records.shift_remove(&index);
        }
        previous
    }

    /// Drop the whole record for `index`.
    pub fn clear(&mut self, index: u32) -> Option<NeighborOverride> {
        self.records.shift_remove(&index)
    }

    /// Number of portal-mouth tiles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no tile has an override.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &NeighborOverride)> + '_ {
        self.records.iter().map(|(&i, r)| (i, r))
    }
}
