use bitvec::prelude::*;
use core::mem;
use std::collections::TryReserveError;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

#[derive(Clone, PartialEq, Eq)]
pub struct BitSet {
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self
            .iter_range(0, self.bit_vec.len())
            .map(|i| i.to_string())
            .collect();
        write!(f, "BitSet {{ bit_vec: [{}]}}", values.join(", "))
    }
}

const fn block_size() -> usize {
    mem::size_of::<usize>() * 8
}

impl BitSet {
    /// Reports a failed allocation of the backing blocks instead of aborting.
    /// Used for the `n * n` adjacency matrix and for visited marks.
    pub fn try_new(size: usize) -> Result<Self, TryReserveError> {
        let blocks = size / block_size() + usize::from(size % block_size() != 0);
        let mut words: Vec<usize> = Vec::new();
        words.try_reserve_exact(blocks)?;
        words.resize(blocks, 0);
        let mut bit_vec: BitVec = BitVec::from_vec(words);
        bit_vec.resize(size, false);
        Ok(Self { bit_vec })
    }

    /// Sets the bit at `idx`, returning whether it was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if !self.bit_vec[idx] {
            self.bit_vec.set(idx, true);
            false
        } else {
            true
        }
    }

    /// First set bit in `[idx, to)`. Never reads a block past the one
    /// holding `to - 1`.
    #[inline]
    pub fn get_next_set_below(&self, idx: usize, to: usize) -> Option<usize> {
        let to = to.min(self.bit_vec.len());
        if idx >= to {
            return None;
        }
        let blocks = self.bit_vec.as_slice();
        let last_block = (to - 1) / block_size();
        let mut block_idx = idx / block_size();
        let mut block = blocks[block_idx] & (usize::MAX << (idx % block_size()));
        while block == 0usize {
            block_idx += 1;
            if block_idx > last_block {
                return None;
            }
            block = blocks[block_idx];
        }
        let v = block_idx * block_size() + block.trailing_zeros() as usize;
        if v < to {
            Some(v)
        } else {
            None
        }
    }

    /// Set bits in `[from, to)`, ascending.
    #[inline]
    pub fn iter_range(&self, from: usize, to: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.get_next_set_below(from, to), move |&i| {
            self.get_next_set_below(i + 1, to)
        })
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.bit_vec.index(index)
    }
}

/// `Vec::push` that reports a failed reallocation instead of aborting.
#[inline]
pub(crate) fn try_push<T>(vec: &mut Vec<T>, value: T) -> Result<(), TryReserveError> {
    if vec.len() == vec.capacity() {
        vec.try_reserve(1)?;
    }
    vec.push(value);
    Ok(())
}
