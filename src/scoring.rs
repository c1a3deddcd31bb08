use serde::{Deserialize, Serialize};

use crate::category::Category::{self, *};
use crate::dice::{self, FaceCounts};
use crate::error::Result;

pub const UPPER_BONUS_THRESHOLD: u32 = 63;
pub const UPPER_BONUS: u32 = 35;
pub const YAHTZEE_BONUS: u32 = 100;

pub const SMALL_STRAIGHTS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
pub const LARGE_STRAIGHTS: [[u8; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

const SCORE_FNS: [fn(&FaceCounts) -> u32; 13] = [
    score_aces,
    score_twos,
    score_threes,
    score_fours,
    score_fives,
    score_sixes,
    score_3ofakind,
    score_4ofakind,
    score_fullhouse,
    score_sm_str8,
    score_lg_str8,
    score_yahtzee,
    score_chance,
];

fn score_upperbox(face: u8, counts: &FaceCounts) -> u32 {
    face as u32 * counts.count(face) as u32
}

fn score_n_of_a_kind(n: u8, counts: &FaceCounts) -> u32 {
    let best = counts.most_common().map_or(0, |(_, c)| c);
    if best >= n { counts.sum() } else { 0 }
}

fn has_straight(windows: &[impl AsRef<[u8]>], counts: &FaceCounts) -> bool {
    windows.iter().any(|w| counts.distinct_in(w.as_ref()) == w.as_ref().len())
}

fn score_aces(counts: &FaceCounts) -> u32 {
    score_upperbox(1, counts)
}
fn score_twos(counts: &FaceCounts) -> u32 {
    score_upperbox(2, counts)
}
fn score_threes(counts: &FaceCounts) -> u32 {
    score_upperbox(3, counts)
}
fn score_fours(counts: &FaceCounts) -> u32 {
    score_upperbox(4, counts)
}
fn score_fives(counts: &FaceCounts) -> u32 {
    score_upperbox(5, counts)
}
fn score_sixes(counts: &FaceCounts) -> u32 {
    score_upperbox(6, counts)
}

fn score_3ofakind(counts: &FaceCounts) -> u32 {
    score_n_of_a_kind(3, counts)
}
fn score_4ofakind(counts: &FaceCounts) -> u32 {
    score_n_of_a_kind(4, counts)
}
fn score_sm_str8(counts: &FaceCounts) -> u32 {
    if has_straight(&SMALL_STRAIGHTS[..], counts) {
        30
    } else {
        0
    }
}
fn score_lg_str8(counts: &FaceCounts) -> u32 {
    if has_straight(&LARGE_STRAIGHTS[..], counts) {
        40
    } else {
        0
    }
}

// The official rule is that a Full House is "three of one number and two of another"
fn score_fullhouse(counts: &FaceCounts) -> u32 {
    let sorted = counts.sorted_desc(2);
    if sorted.len() == 2 && sorted[0] == 3 && sorted[1] == 2 {
        25
    } else {
        0
    }
}

fn score_yahtzee(counts: &FaceCounts) -> u32 {
    if counts.total() == dice::HAND_SIZE && counts.sorted_desc(1)[0] == 5 {
        50
    } else {
        0
    }
}

fn score_chance(counts: &FaceCounts) -> u32 {
    counts.sum()
}

/// Raw score of `dice` in `category`, without bonuses or wildcard rules.
pub fn score(category: Category, dice: &[u8]) -> Result<u32> {
    dice::validate(dice)?;
    Ok(SCORE_FNS[category as usize](&FaceCounts::new(dice)))
}

/// Read-only view of a scorecard, as consumed by the probability and feature engines.
pub trait ScoreView {
    fn is_marked(&self, category: Category) -> bool;
    fn times_achieved(&self, category: Category) -> u32;
    /// Upper total including the bonus once earned.
    fn upper_score(&self) -> u32;
    fn final_score(&self) -> u32;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBox {
    pub marked: bool,
    pub score: u32,
    pub times_achieved: u32,
}

/// What `Scorecard::mark` did with a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked(u32),
    YahtzeeBonus,
    AlreadyMarked,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    boxes: [ScoreBox; 13],
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn entry(&self, category: Category) -> &ScoreBox {
        &self.boxes[category as usize]
    }

    /// Records `dice` in `category`. A box is scored once; a further Yahtzee rolled after
    /// the Yahtzee box holds 50 only bumps the achievement count.
    pub fn mark(&mut self, category: Category, dice: &[u8]) -> Result<MarkOutcome> {
        let points = score(category, dice)?;
        let entry = &mut self.boxes[category as usize];
        if entry.marked {
            if category == Yahtzee && entry.score > 0 && points > 0 {
                entry.times_achieved += 1;
                return Ok(MarkOutcome::YahtzeeBonus);
            }
            return Ok(MarkOutcome::AlreadyMarked);
        }
        entry.marked = true;
        entry.score = points;
        if points > 0 {
            entry.times_achieved += 1;
        }
        Ok(MarkOutcome::Marked(points))
    }

    pub fn lower_score(&self) -> u32 {
        let raw: u32 = Category::LOWER.iter().map(|&c| self.entry(c).score).sum();
        let extra_yahtzees = self.entry(Yahtzee).times_achieved.saturating_sub(1);
        raw + extra_yahtzees * YAHTZEE_BONUS
    }

    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(|b| b.marked)
    }
}

impl ScoreView for Scorecard {
    fn is_marked(&self, category: Category) -> bool {
        self.entry(category).marked
    }

    fn times_achieved(&self, category: Category) -> u32 {
        self.entry(category).times_achieved
    }

    fn upper_score(&self) -> u32 {
        let raw: u32 = Category::UPPER.iter().map(|&c| self.entry(c).score).sum();
        if raw >= UPPER_BONUS_THRESHOLD {
            raw + UPPER_BONUS
        } else {
            raw
        }
    }

    fn final_score(&self) -> u32 {
        self.upper_score() + self.lower_score()
    }
}
