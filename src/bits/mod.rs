// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-width sets of dense indices backed by machine words.
//!
//! An [`IndexSet`] holds indices from `0..width`, with bit i of the backing
//! word vector marking the presence of index i. The width is fixed at
//! construction: vertex sets are always `num_verts` wide and edge sets
//! `num_edges` wide, so the set algebra never allocates after construction
//! and a width mismatch between operands is a programmer error.
//!
//! All binary operations are in-place on the receiver, which is what the
//! search engines need: a frame mutates its sets on descent and restores
//! them exactly on backtrack.
//!
//! # Examples
//!
//! ```
//! use minhit::bits::IndexSet;
//!
//! let mut uncov = IndexSet::full(5);
//! let mut hit = IndexSet::new(5);
//! hit.insert(1);
//! hit.insert(3);
//!
//! uncov.difference_with(&hit);
//! assert_eq!(uncov.iter().collect::<Vec<_>>(), vec![0, 2, 4]);
//! assert_eq!(uncov.count(), 3);
//! ```

use itertools::Itertools;
use std::fmt;

const BITS_PER_WORD: usize = 64;

fn words_for(width: usize) -> usize {
    width.div_ceil(BITS_PER_WORD)
}

/// A fixed-width set of indices represented as a bitset.
///
/// Bits above `width` are kept clear by every operation, so the derived
/// equality and hashing compare set contents (widths being equal).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexSet {
    width: usize,
    words: Vec<u64>,
}

impl IndexSet {
    /// Create an empty set over `0..width`.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            words: vec![0; words_for(width)],
        }
    }

    /// Create a set containing every index in `0..width`.
    pub fn full(width: usize) -> Self {
        let mut set = Self::new(width);
        set.set_all();
        set
    }

    /// Create a set over `0..width` from a slice of member indices.
    pub fn from_indices(width: usize, indices: &[usize]) -> Self {
        let mut set = Self::new(width);
        for &i in indices {
            set.insert(i);
        }
        set
    }

    /// The fixed width, i.e. one past the largest representable index.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of members (population count).
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if the set has at least one member.
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// True if the set has no members.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Membership test.
    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < self.width, "index {} out of width {}", index, self.width);
        self.words[index / BITS_PER_WORD] & (1 << (index % BITS_PER_WORD)) != 0
    }

    /// Add `index` to the set.
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.width, "index {} out of width {}", index, self.width);
        self.words[index / BITS_PER_WORD] |= 1 << (index % BITS_PER_WORD);
    }

    /// Remove `index` from the set.
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.width, "index {} out of width {}", index, self.width);
        self.words[index / BITS_PER_WORD] &= !(1 << (index % BITS_PER_WORD));
    }

    /// Remove every member.
    pub fn clear_all(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    /// Add every index in `0..width`.
    pub fn set_all(&mut self) {
        for word in &mut self.words {
            *word = !0;
        }
        let tail = self.width % BITS_PER_WORD;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << tail) - 1;
            }
        }
    }

    /// The smallest member, if any.
    pub fn first(&self) -> Option<usize> {
        for (word_idx, &word) in self.words.iter().enumerate() {
            if word != 0 {
                return Some(word_idx * BITS_PER_WORD + word.trailing_zeros() as usize);
            }
        }
        None
    }

    /// The smallest member strictly greater than `index`, if any.
    pub fn next_after(&self, index: usize) -> Option<usize> {
        let start = index + 1;
        if start >= self.width {
            return None;
        }
        let mut word_idx = start / BITS_PER_WORD;
        let mut word = self.words[word_idx] & (!0u64 << (start % BITS_PER_WORD));
        loop {
            if word != 0 {
                return Some(word_idx * BITS_PER_WORD + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            if word_idx == self.words.len() {
                return None;
            }
            word = self.words[word_idx];
        }
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> Indices<'_> {
        Indices {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// In-place union: `self |= other`.
    pub fn union_with(&mut self, other: &IndexSet) {
        self.check_width(other);
        for (word, &w) in self.words.iter_mut().zip(&other.words) {
            *word |= w;
        }
    }

    /// In-place intersection: `self &= other`.
    pub fn intersect_with(&mut self, other: &IndexSet) {
        self.check_width(other);
        for (word, &w) in self.words.iter_mut().zip(&other.words) {
            *word &= w;
        }
    }

    /// In-place difference: `self -= other`.
    pub fn difference_with(&mut self, other: &IndexSet) {
        self.check_width(other);
        for (word, &w) in self.words.iter_mut().zip(&other.words) {
            *word &= !w;
        }
    }

    /// True if every member of `self` is also a member of `other`.
    pub fn is_subset_of(&self, other: &IndexSet) -> bool {
        self.check_width(other);
        self.words.iter().zip(&other.words).all(|(&a, &b)| a & !b == 0)
    }

    /// True if `self` and `other` share at least one member.
    pub fn intersects(&self, other: &IndexSet) -> bool {
        self.check_width(other);
        self.words.iter().zip(&other.words).any(|(&a, &b)| a & b != 0)
    }

    /// The size of the intersection, without materialising it.
    pub fn intersection_count(&self, other: &IndexSet) -> usize {
        self.check_width(other);
        self.words
            .iter()
            .zip(&other.words)
            .map(|(&a, &b)| (a & b).count_ones() as usize)
            .sum()
    }

    fn check_width(&self, other: &IndexSet) {
        assert_eq!(
            self.width, other.width,
            "width mismatch between set operands"
        );
    }
}

/// Ascending iterator over the members of an [`IndexSet`].
pub struct Indices<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * BITS_PER_WORD + bit);
            }
            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
    }
}

impl fmt::Display for IndexSet {
    /// Format the members in ascending order, space-separated.
    ///
    /// This is exactly one line of the hypergraph file format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = IndexSet::new(100);
        assert!(set.none());
        assert!(!set.any());
        assert_eq!(set.count(), 0);
        assert_eq!(set.width(), 100);
        assert_eq!(set.first(), None);
    }

    #[test]
    fn test_full_masks_tail() {
        let set = IndexSet::full(70);
        assert_eq!(set.count(), 70);
        assert_eq!(set.iter().last(), Some(69));
        assert!(set.contains(69));
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = IndexSet::new(130);
        set.insert(0);
        set.insert(64);
        set.insert(129);
        assert!(set.contains(0));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert!(!set.contains(1));
        assert_eq!(set.count(), 3);

        set.remove(64);
        assert!(!set.contains(64));
        set.remove(64); // idempotent
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_first_and_next_after() {
        let set = IndexSet::from_indices(200, &[3, 64, 65, 190]);
        assert_eq!(set.first(), Some(3));
        assert_eq!(set.next_after(3), Some(64));
        assert_eq!(set.next_after(64), Some(65));
        assert_eq!(set.next_after(65), Some(190));
        assert_eq!(set.next_after(190), None);
        assert_eq!(set.next_after(0), Some(3));
    }

    #[test]
    fn test_iter_ascending() {
        let set = IndexSet::from_indices(130, &[129, 5, 64, 10, 3]);
        let indices: Vec<_> = set.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 129]);
    }

    #[test]
    fn test_set_algebra() {
        let width = 10;
        let mut a = IndexSet::from_indices(width, &[1, 2, 3, 7]);
        let b = IndexSet::from_indices(width, &[2, 3, 4]);

        let mut union = a.clone();
        union.union_with(&b);
        assert_eq!(union.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 7]);

        let mut inter = a.clone();
        inter.intersect_with(&b);
        assert_eq!(inter.iter().collect::<Vec<_>>(), vec![2, 3]);

        a.difference_with(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 7]);
    }

    #[test]
    fn test_subset_and_intersects() {
        let width = 8;
        let small = IndexSet::from_indices(width, &[2, 5]);
        let big = IndexSet::from_indices(width, &[1, 2, 5, 6]);
        let other = IndexSet::from_indices(width, &[0, 7]);

        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
        assert!(IndexSet::new(width).is_subset_of(&other));

        assert!(small.intersects(&big));
        assert!(!small.intersects(&other));
    }

    #[test]
    fn test_intersection_count() {
        let a = IndexSet::from_indices(70, &[0, 1, 64, 69]);
        let b = IndexSet::from_indices(70, &[1, 64, 68]);
        assert_eq!(a.intersection_count(&b), 2);
        assert_eq!(a.intersection_count(&IndexSet::new(70)), 0);
    }

    #[test]
    fn test_clear_and_set_all() {
        let mut set = IndexSet::full(66);
        set.clear_all();
        assert!(set.none());
        set.set_all();
        assert_eq!(set.count(), 66);
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = IndexSet::full(66);
        a.clear_all();
        a.insert(65);
        let b = IndexSet::from_indices(66, &[65]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let set = IndexSet::from_indices(10, &[7, 0, 3]);
        assert_eq!(format!("{}", set), "0 3 7");
        assert_eq!(format!("{}", IndexSet::new(10)), "");
    }

    #[test]
    #[should_panic(expected = "width mismatch")]
    fn test_width_mismatch_panics() {
        let mut a = IndexSet::new(4);
        let b = IndexSet::new(5);
        a.union_with(&b);
    }

    #[test]
    fn test_zero_width() {
        let mut set = IndexSet::new(0);
        set.set_all();
        assert!(set.none());
        assert_eq!(set.first(), None);
        assert_eq!(set.iter().count(), 0);
    }
}
