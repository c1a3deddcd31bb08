//! Chance of finishing a turn in a category, given the dice held so far.
//!
//! Every function takes the full set of dice that count toward the target (rolled
//! dice plus any set aside earlier) and the number of rerolls still allowed.

use serde::Serialize;

use super::cache::MatrixPowerCache;
use super::matrices::TransitionKind;
use crate::category::Category::{self, *};
use crate::dice::{FaceCounts, HAND_SIZE};
use crate::scoring::{ScoreView, LARGE_STRAIGHTS, SMALL_STRAIGHTS};

/// Copies needed in an upper box to stay on pace for the 63-point bonus.
pub const UPPER_PACE_COUNT: usize = 3;

/// Final-count distribution for one upper box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpperDistribution {
    pub expected_count: f64,
    /// P(count == i) for i in 0..=5
    pub distribution: [f64; HAND_SIZE + 1],
}

impl UpperDistribution {
    pub fn at_least(&self, count: usize) -> f64 {
        self.distribution.iter().skip(count).sum()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProbabilityEngine<'c> {
    cache: &'c MatrixPowerCache,
}

impl<'c> ProbabilityEngine<'c> {
    pub fn new(cache: &'c MatrixPowerCache) -> Self {
        ProbabilityEngine { cache }
    }

    pub fn upper_section_distribution(
        &self,
        dice: &[u8],
        face: u8,
        rolls: u32,
    ) -> UpperDistribution {
        let count = (FaceCounts::new(dice).count(face) as usize).min(HAND_SIZE);
        let column = self
            .cache
            .power(TransitionKind::UpperCount, rolls)
            .column(count);
        let mut distribution = [0.0; HAND_SIZE + 1];
        distribution.copy_from_slice(&column);
        let expected_count = distribution
            .iter()
            .enumerate()
            .map(|(i, p)| i as f64 * p)
            .sum();
        UpperDistribution {
            expected_count,
            distribution,
        }
    }

    /// P(at least three of `face` once the rolls run out).
    pub fn upper_section_probability(&self, dice: &[u8], face: u8, rolls: u32) -> f64 {
        self.upper_section_distribution(dice, face, rolls)
            .at_least(UPPER_PACE_COUNT)
            .min(1.0)
    }

    /// P(ending with at least `target_state + 1` copies of `face`), chasing that face alone.
    ///
    /// Holding no copy yet is treated like holding one.
    pub fn run_reach_probability(
        &self,
        dice: &[u8],
        face: u8,
        target_state: usize,
        rolls: u32,
    ) -> f64 {
        let count = FaceCounts::new(dice).count(face) as usize;
        let from = count.clamp(1, HAND_SIZE) - 1;
        let column = self.cache.power(TransitionKind::Run, rolls).column(from);
        column.iter().skip(target_state).sum::<f64>().min(1.0)
    }

    fn n_of_a_kind(&self, dice: &[u8], n: u8, rolls: u32) -> f64 {
        match FaceCounts::new(dice).most_common() {
            Some((_, count)) if count >= n => 1.0,
            Some((face, _)) => self.run_reach_probability(dice, face, n as usize - 1, rolls),
            None => 0.0,
        }
    }

    pub fn three_of_a_kind(&self, dice: &[u8], rolls: u32) -> f64 {
        self.n_of_a_kind(dice, 3, rolls)
    }

    pub fn four_of_a_kind(&self, dice: &[u8], rolls: u32) -> f64 {
        self.n_of_a_kind(dice, 4, rolls)
    }

    pub fn yahtzee(&self, dice: &[u8], rolls: u32) -> f64 {
        match FaceCounts::new(dice).most_common() {
            Some((face, _)) => self.run_reach_probability(dice, face, 4, rolls),
            None => 0.0,
        }
    }

    /// Full house by case split on the two largest face counts.
    ///
    /// With five distinct faces the answer is a flat `0.05` per remaining roll. That figure
    /// is a rough stand-in, not derived from a chain, and is only clamped to 1.
    pub fn full_house(&self, dice: &[u8], rolls: u32) -> f64 {
        let counts = FaceCounts::new(dice);
        let sorted = counts.sorted_desc(2);
        let r = rolls as i32;
        let p = match (sorted[0], sorted[1]) {
            (a, b) if a >= 3 && b >= 2 => 1.0,
            (a, _) if a >= 3 => 1.0 - (5.0f64 / 6.0).powi(r),
            (a, b) if a >= 2 && b >= 2 => 1.0 - (4.0f64 / 6.0).powi(r),
            (a, _) if a >= 2 => {
                let pair_face = counts.most_common().map_or(0, |(f, _)| f);
                let triple = self.run_reach_probability(dice, pair_face, 2, rolls);
                triple * (1.0 - (120.0f64 / 216.0).powi(r))
            }
            _ => 0.05 * rolls as f64,
        };
        p.clamp(0.0, 1.0)
    }

    pub fn small_straight(&self, dice: &[u8], rolls: u32) -> f64 {
        self.straight(dice, &SMALL_STRAIGHTS[..], TransitionKind::SmallStraight, rolls)
    }

    pub fn large_straight(&self, dice: &[u8], rolls: u32) -> f64 {
        self.straight(dice, &LARGE_STRAIGHTS[..], TransitionKind::LargeStraight, rolls)
    }

    // A straight already on the table counts outright. Otherwise the first window sharing
    // any value with the dice is the one chased, even when a later window overlaps more.
    fn straight<const N: usize>(
        &self,
        dice: &[u8],
        windows: &[[u8; N]],
        kind: TransitionKind,
        rolls: u32,
    ) -> f64 {
        let counts = FaceCounts::new(dice);
        if windows.iter().any(|w| counts.distinct_in(w) == N) {
            return 1.0;
        }
        let Some(covered) = windows
            .iter()
            .map(|w| counts.distinct_in(w))
            .find(|&c| c >= 1)
        else {
            return 0.0;
        };
        let column = self.cache.power(kind, rolls).column(covered - 1);
        column[N - 1].clamp(0.0, 1.0)
    }

    /// Scorecard-free probability for any box. Upper boxes report P(count >= 3).
    pub fn category_probability(&self, category: Category, dice: &[u8], rolls: u32) -> f64 {
        match category {
            Aces | Twos | Threes | Fours | Fives | Sixes => {
                let face = category.face().unwrap_or_default();
                self.upper_section_probability(dice, face, rolls)
            }
            ThreeOfAKind => self.three_of_a_kind(dice, rolls),
            FourOfAKind => self.four_of_a_kind(dice, rolls),
            FullHouse => self.full_house(dice, rolls),
            SmallStraight => self.small_straight(dice, rolls),
            LargeStraight => self.large_straight(dice, rolls),
            Yahtzee => self.yahtzee(dice, rolls),
            Chance => 1.0,
        }
    }

    /// Upper-box probability, 0 once the box is marked or for a lower box.
    pub fn upper_section_probability_for(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        category: Category,
        rolls: u32,
    ) -> f64 {
        match category.face() {
            Some(face) if !card.is_marked(category) => {
                self.upper_section_probability(dice, face, rolls)
            }
            _ => 0.0,
        }
    }

    /// Lower-box probability, 0 once the box is marked. A marked Yahtzee that has been
    /// rolled before stays live for the bonus.
    pub fn lower_section_probability(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        category: Category,
        rolls: u32,
    ) -> f64 {
        if category.is_upper() {
            return 0.0;
        }
        if card.is_marked(category) && !yahtzee_bonus_live(card, category) {
            return 0.0;
        }
        self.category_probability(category, dice, rolls)
    }
}

pub(crate) fn yahtzee_bonus_live(card: &impl ScoreView, category: Category) -> bool {
    category == Yahtzee && card.is_marked(Yahtzee) && card.times_achieved(Yahtzee) >= 1
}
