//! Directional decoration slots.
//!
//! A label has exactly four slots. `SlotMap` stores one value per slot,
//! keyed by `Slot` instead of a raw gravity index.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Side of the text a decoration is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Start,
    Top,
    End,
    Bottom,
}

impl Slot {
    /// Storage order. Matches the legacy integer gravity constants 0..=3.
    pub const ALL: [Slot; 4] = [Slot::Start, Slot::Top, Slot::End, Slot::Bottom];

    /// Order in which decorations are painted.
    pub const DRAW_ORDER: [Slot; 4] = [Slot::Start, Slot::End, Slot::Top, Slot::Bottom];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::Start => 0,
            Slot::Top => 1,
            Slot::End => 2,
            Slot::Bottom => 3,
        }
    }

    /// Map a legacy gravity index back to a slot.
    pub const fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::Start),
            1 => Some(Slot::Top),
            2 => Some(Slot::End),
            3 => Some(Slot::Bottom),
            _ => None,
        }
    }

    pub const fn opposite(self) -> Slot {
        match self {
            Slot::Start => Slot::End,
            Slot::Top => Slot::Bottom,
            Slot::End => Slot::Start,
            Slot::Bottom => Slot::Top,
        }
    }

    /// Start and End sit beside the text; Top and Bottom stack with it.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Slot::Start | Slot::End)
    }
}

/// One value per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotMap<T> {
    slots: [T; 4],
}

impl<T> SlotMap<T> {
    pub fn from_fn(f: impl FnMut(Slot) -> T) -> Self {
        Self {
            slots: Slot::ALL.map(f),
        }
    }

    #[inline]
    pub fn get(&self, slot: Slot) -> &T {
        &self.slots[slot.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.slots[slot.index()]
    }

    /// Replace a slot's value, returning the previous one.
    pub fn set(&mut self, slot: Slot, value: T) -> T {
        std::mem::replace(&mut self.slots[slot.index()], value)
    }

    /// Iterate in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Slot, &T) -> U) -> SlotMap<U> {
        SlotMap::from_fn(|slot| f(slot, self.get(slot)))
    }
}

impl<T> Index<Slot> for SlotMap<T> {
    type Output = T;
    fn index(&self, slot: Slot) -> &T {
        self.get(slot)
    }
}

impl<T> IndexMut<Slot> for SlotMap<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut T {
        self.get_mut(slot)
    }
}

/// A drawable attached to a slot, with its explicit size in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration<D> {
    pub drawable: D,
    pub width: i32,
    pub height: i32,
}

impl<D> Decoration<D> {
    pub fn new(drawable: D, width: i32, height: i32) -> Self {
        Self {
            drawable,
            width,
            height,
        }
    }
}

/// The four decorations of a label. Absent slots are `None`.
pub type DecorationSet<D> = SlotMap<Option<Decoration<D>>>;

impl<D> SlotMap<Option<Decoration<D>>> {
    /// An empty set (no decoration in any slot).
    pub fn empty() -> Self {
        Self::from_fn(|_| None)
    }

    #[inline]
    pub fn present(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// `(width, height)` of a present decoration.
    #[inline]
    pub fn size(&self, slot: Slot) -> Option<(i32, i32)> {
        self.get(slot).as_ref().map(|d| (d.width, d.height))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Sizes only; the drawable handles play no part in geometry.
    pub fn sizes(&self) -> SlotMap<Option<(i32, i32)>> {
        self.map(|_, d| d.as_ref().map(|d| (d.width, d.height)))
    }
}
