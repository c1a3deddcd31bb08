use itertools::Itertools;

use crate::error::{Error, Result};

pub const SIDES: u8 = 6;
pub const HAND_SIZE: usize = 5;

/// Rejects faces outside 1..=6.
pub fn validate(dice: &[u8]) -> Result<()> {
    match dice.iter().find(|d| !(1..=SIDES).contains(*d)) {
        Some(&bad) => Err(Error::InvalidDie(bad)),
        None => Ok(()),
    }
}

/// Per-face counts of a multiset of dice.
///
/// The order in which faces first appear is kept, so "most common" ties go to
/// whichever face showed up first in the dice handed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts {
    counts: [u8; SIDES as usize + 1], // slot 0 unused
    order: Vec<u8>,
}

impl FaceCounts {
    pub fn new(dice: &[u8]) -> Self {
        Self::tally(dice.iter().copied())
    }

    /// Counts several dice groups as one multiset, in the order given.
    pub fn combined(first: &[u8], second: &[u8]) -> Self {
        Self::tally(first.iter().chain(second).copied())
    }

    fn tally(dice: impl Iterator<Item = u8> + Clone) -> Self {
        let mut counts = [0u8; SIDES as usize + 1];
        for d in dice.clone().filter(|d| (1..=SIDES).contains(d)) {
            counts[d as usize] = counts[d as usize].saturating_add(1);
        }
        let order = dice
            .filter(|d| (1..=SIDES).contains(d))
            .unique()
            .collect_vec();
        FaceCounts { counts, order }
    }

    /// Copies of `face`, saturating at `u8::MAX`.
    pub fn count(&self, face: u8) -> u8 {
        if (1..=SIDES).contains(&face) {
            self.counts[face as usize]
        } else {
            0
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn sum(&self) -> u32 {
        self.order
            .iter()
            .map(|&f| f as u32 * self.counts[f as usize] as u32)
            .sum()
    }

    /// (face, count) pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.order.iter().map(move |&f| (f, self.counts[f as usize]))
    }

    /// Face with the highest count, first appearance winning ties.
    pub fn most_common(&self) -> Option<(u8, u8)> {
        self.most_common_where(|_| true)
    }

    pub fn most_common_excluding(&self, face: u8) -> Option<(u8, u8)> {
        self.most_common_where(|f| f != face)
    }

    fn most_common_where(&self, keep: impl Fn(u8) -> bool) -> Option<(u8, u8)> {
        let mut best: Option<(u8, u8)> = None;
        for (face, count) in self.iter().filter(|(f, _)| keep(*f)) {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((face, count)),
            }
        }
        best
    }

    /// Counts sorted high to low, padded with zeros to at least `min_len`.
    pub fn sorted_desc(&self, min_len: usize) -> Vec<u8> {
        let mut sorted = self
            .iter()
            .map(|(_, c)| c)
            .sorted_by(|a, b| b.cmp(a))
            .collect_vec();
        if sorted.len() < min_len {
            sorted.resize(min_len, 0);
        }
        sorted
    }

    /// How many distinct values of `window` are present.
    pub fn distinct_in(&self, window: &[u8]) -> usize {
        window.iter().filter(|&&v| self.count(v) > 0).count()
    }

    pub fn max_face(&self) -> Option<u8> {
        self.order.iter().copied().max()
    }
}
