// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detached render layer.
//!
//! A [`PortalLayer`] stands for the single mount point outside normal layout
//! containment (an overlay window, a top-level layer, or a z-ordered sibling
//! of the root). The host owns one and lends it to every overlay by `&mut`;
//! there is no global instance.
//!
//! Each mounted overlay holds a [`PortalSlot`]. Slots are independent; the
//! only coordination is stacking order, and the most recently acquired or
//! raised slot is on top.

use alloc::vec::Vec;

/// Generational handle to an entry in a [`PortalLayer`].
///
/// Stale handles (released, or whose slot was reused) never alias a live
/// entry because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PortalSlot(u32, u32);

impl PortalSlot {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    order: u64,
}

/// Shared stack of detached overlay entries.
#[derive(Clone, Debug, Default)]
pub struct PortalLayer {
    entries: Vec<Option<Entry>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    next_order: u64,
}

impl PortalLayer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new entry on top of the stack.
    pub fn acquire(&mut self) -> PortalSlot {
        let order = self.bump_order();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(Entry { generation, order });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Some(Entry { generation, order }));
            self.generations.push(generation);
            (self.entries.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "PortalSlot uses 32-bit indices by design."
        )]
        let slot = PortalSlot(idx as u32, generation);
        tracing::trace!(?slot, order, "portal entry mounted");
        slot
    }

    /// Move a live entry to the top. Returns false for stale slots.
    pub fn raise(&mut self, slot: PortalSlot) -> bool {
        if !self.contains(slot) {
            return false;
        }
        let order = self.bump_order();
        if let Some(Some(entry)) = self.entries.get_mut(slot.idx()) {
            entry.order = order;
        }
        true
    }

    /// Unmount an entry. Stale slots are ignored.
    pub fn release(&mut self, slot: PortalSlot) {
        if !self.contains(slot) {
            return;
        }
        self.entries[slot.idx()] = None;
        self.free_list.push(slot.idx());
        tracing::trace!(?slot, "portal entry unmounted");
    }

    /// True if `slot` refers to a live entry.
    pub fn contains(&self, slot: PortalSlot) -> bool {
        self.entries
            .get(slot.idx())
            .and_then(|e| e.as_ref())
            .is_some_and(|e| e.generation == slot.1)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live entries from bottom to top.
    pub fn stack(&self) -> Vec<PortalSlot> {
        let mut live: Vec<(u64, PortalSlot)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let e = e.as_ref()?;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "PortalSlot uses 32-bit indices by design."
                )]
                Some((e.order, PortalSlot(i as u32, e.generation)))
            })
            .collect();
        live.sort_unstable_by_key(|(order, _)| *order);
        live.into_iter().map(|(_, slot)| slot).collect()
    }

    /// The entry drawn on top, if any.
    pub fn topmost(&self) -> Option<PortalSlot> {
        self.stack().last().copied()
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}
