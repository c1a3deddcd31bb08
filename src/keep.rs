//! Greedy keep/reroll choice toward a single target box.
//!
//! The target is picked by looking at every die in play (withheld plus rolled), but only
//! rolled dice are ever kept or released. Scan orders below decide ties and are fixed.

use serde::Serialize;
use tracing::trace;

use crate::category::Category::{self, *};
use crate::dice::{self, FaceCounts};
use crate::error::Result;
use crate::scoring::{LARGE_STRAIGHTS, SMALL_STRAIGHTS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeepDecision {
    /// Earlier withheld dice followed by the dice kept from this roll.
    pub withheld: Vec<u8>,
    /// Rolled dice to throw again, in roll order.
    pub reroll: Vec<u8>,
}

/// Splits `rolled` into dice to keep and dice to reroll while chasing `target`.
pub fn decide(rolled: &[u8], withheld: &[u8], target: Category) -> Result<KeepDecision> {
    dice::validate(rolled)?;
    dice::validate(withheld)?;
    let combined = FaceCounts::combined(rolled, withheld);
    let keep = match target {
        Aces | Twos | Threes | Fours | Fives | Sixes => {
            let face = target.face().unwrap_or_default();
            mask_matching(rolled, |d| d == face)
        }
        ThreeOfAKind | FourOfAKind | Yahtzee => match combined.most_common() {
            Some((face, _)) => mask_matching(rolled, |d| d == face),
            None => vec![false; rolled.len()],
        },
        FullHouse => {
            let first = combined.most_common().map(|(f, _)| f);
            let second = first.and_then(|f| combined.most_common_excluding(f)).map(|(f, _)| f);
            mask_matching(rolled, |d| Some(d) == first || Some(d) == second)
        }
        SmallStraight => straight_mask(rolled, withheld, &combined, &SMALL_STRAIGHTS[..]),
        LargeStraight => straight_mask(rolled, withheld, &combined, &LARGE_STRAIGHTS[..]),
        Chance => {
            let top = combined.max_face().unwrap_or(dice::SIDES);
            mask_matching(rolled, |d| d >= top)
        }
    };

    let mut decision = KeepDecision {
        withheld: withheld.to_vec(),
        reroll: Vec::with_capacity(rolled.len()),
    };
    for (&d, kept) in rolled.iter().zip(keep) {
        if kept {
            decision.withheld.push(d)
        } else {
            decision.reroll.push(d)
        }
    }
    trace!(
        %target,
        ?rolled,
        ?withheld,
        kept = ?decision.withheld,
        reroll = ?decision.reroll,
        "keep decision"
    );
    Ok(decision)
}

/// Same as [`decide`] for a category given by name, e.g. `"full_house"`.
pub fn decide_named(rolled: &[u8], withheld: &[u8], target: &str) -> Result<KeepDecision> {
    decide(rolled, withheld, target.parse()?)
}

fn mask_matching(rolled: &[u8], keep: impl Fn(u8) -> bool) -> Vec<bool> {
    rolled.iter().map(|&d| keep(d)).collect()
}

// Picks the window with the best coverage (earliest on ties), then keeps, in roll order,
// one rolled die for each window value the withheld dice don't already supply.
fn straight_mask<const N: usize>(
    rolled: &[u8],
    withheld: &[u8],
    combined: &FaceCounts,
    windows: &[[u8; N]],
) -> Vec<bool> {
    let mut best: Option<(&[u8; N], usize)> = None;
    for window in windows {
        let coverage = combined.distinct_in(window);
        if best.map_or(true, |(_, c)| coverage > c) {
            best = Some((window, coverage));
        }
    }
    let Some((window, _)) = best else {
        return vec![false; rolled.len()];
    };
    let mut missing: Vec<u8> = window
        .iter()
        .copied()
        .filter(|v| !withheld.contains(v))
        .collect();
    rolled
        .iter()
        .map(|d| match missing.iter().position(|m| m == d) {
            Some(i) => {
                missing.remove(i);
                true
            }
            None => false,
        })
        .collect()
}
