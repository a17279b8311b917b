//! Per-generation "already evaluated" set for candidate cells.
//!
//! Open-addressed linear-probing hash set over packed [`CellKey`]s. One is
//! built at the start of each generation, sized from the live count, and
//! dropped when the generation is committed.

use super::coord::CellKey;

const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;
const EMPTY: u64 = u64::MAX;

#[inline(always)]
fn key_hash(key: CellKey) -> u64 {
    // Fibonacci mix; the high word (y) must reach the low bits used by the mask.
    let h = key.raw().wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h ^ (h >> 29)
}

pub struct CoordSet {
    // `EMPTY` marks a free slot. It is the key of (u32::MAX, u32::MAX), which
    // cannot exist on a grid since coordinates stay below `u32::MAX`.
    slots: Vec<u64>,
    mask: usize,
    len: usize,
}

impl CoordSet {
    pub fn with_capacity(cap: usize) -> Self {
        let slots = cap
            .saturating_mul(LOAD_DEN)
            .div_ceil(LOAD_NUM)
            .next_power_of_two()
            .max(16);
        Self {
            slots: vec![EMPTY; slots],
            mask: slots - 1,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn needs_grow(&self) -> bool {
        self.len * LOAD_DEN >= self.slots.len() * LOAD_NUM
    }

    fn resize(&mut self, new_slots: usize) {
        debug_assert!(new_slots.is_power_of_two());
        let old_slots = std::mem::replace(&mut self.slots, vec![EMPTY; new_slots]);
        self.mask = new_slots - 1;
        for raw in old_slots.into_iter().filter(|&raw| raw != EMPTY) {
            let mut pos = key_hash(CellKey::from_raw(raw)) as usize & self.mask;
            while self.slots[pos] != EMPTY {
                pos = (pos + 1) & self.mask;
            }
            self.slots[pos] = raw;
        }
    }

    /// Insert a key.
    /// Returns `true` if newly inserted, `false` if it already existed.
    #[inline]
    pub fn insert(&mut self, key: CellKey) -> bool {
        debug_assert_ne!(key.raw(), EMPTY);
        if self.needs_grow() {
            self.resize((self.slots.len() * 2).max(16));
        }

        let raw = key.raw();
        let mut pos = key_hash(key) as usize & self.mask;
        loop {
            let slot = self.slots[pos];
            if slot == EMPTY {
                self.slots[pos] = raw;
                self.len += 1;
                return true;
            }
            if slot == raw {
                return false;
            }
            pos = (pos + 1) & self.mask;
        }
    }
}
