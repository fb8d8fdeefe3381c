//! Physical frame slots.

use vmsim_common::{FrameId, PageId, Result, SimError};

/// Ordered, bounded collection of physical frame slots.
///
/// Each slot holds at most one resident page. Alongside the slot
/// array, the set tracks pages in load order: FIFO and Clock care
/// about that order, LRU/Optimal consumers treat it as a plain set.
#[derive(Debug)]
pub struct FrameSet {
    /// Slot occupancy, indexed by frame id.
    slots: Vec<Option<PageId>>,
    /// Resident pages in load order.
    order: Vec<PageId>,
}

impl FrameSet {
    /// Creates a frame set with `capacity` empty slots.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimError::InvalidConfig(
                "frame capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            slots: vec![None; capacity],
            order: Vec::with_capacity(capacity),
        })
    }

    /// Returns the total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.order.len() == self.slots.len()
    }

    /// Returns true if the page occupies some slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Loads a page into the first free slot.
    ///
    /// Returns the chosen frame. Callers must evict first when the
    /// set is full; a load against a full set is an engine defect.
    pub fn load(&mut self, page: PageId) -> Result<FrameId> {
        let free = self
            .slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(SimError::CapacityExceeded)?;
        self.slots[free] = Some(page);
        self.order.push(page);
        Ok(FrameId(free as u32))
    }

    /// Evicts a resident page, freeing its slot.
    ///
    /// Returns the freed frame. Evicting an absent page is an engine
    /// defect.
    pub fn evict(&mut self, page: PageId) -> Result<FrameId> {
        let slot = self
            .slots
            .iter()
            .position(|s| *s == Some(page))
            .ok_or(SimError::NotResident(page))?;
        self.slots[slot] = None;
        self.order.retain(|p| *p != page);
        Ok(FrameId(slot as u32))
    }

    /// Returns resident pages in load order.
    pub fn resident_pages(&self) -> &[PageId] {
        &self.order
    }

    /// Returns per-slot occupancy, indexed by frame id.
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Empties every slot.
    pub fn reset(&mut self) {
        self.slots.fill(None);
        self.order.clear();
    }
}
