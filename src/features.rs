//! Normalised expected-score features, laid out as fixed-order observation vectors.

use serde::{Deserialize, Serialize};

use crate::category::Category::{self, *};
use crate::markov::probability::{yahtzee_bonus_live, ProbabilityEngine};
use crate::scoring::ScoreView;

/// Normalisation constants for the feature vectors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Score the remaining-points denominator is measured against.
    pub reference_score: f64,
    pub upper_bonus_threshold: f64,
    /// Weight added to upper boxes when the whole bonus is still outstanding.
    pub urgency_scale: f64,
    pub yahtzee_bonus: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            reference_score: 375.0,
            upper_bonus_threshold: 63.0,
            urgency_scale: 0.2,
            yahtzee_bonus: 100.0,
        }
    }
}

fn fixed_score(category: Category) -> Option<f64> {
    match category {
        FullHouse => Some(25.0),
        SmallStraight => Some(30.0),
        LargeStraight => Some(40.0),
        Yahtzee => Some(50.0),
        _ => None,
    }
}

/// All four observation vectors for one decision point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub upper_probabilities: [f32; 6],
    pub upper_expected_scores: [f32; 6],
    pub lower_probabilities: [f32; 7],
    pub lower_expected_scores: [f32; 7],
}

#[derive(Clone, Debug)]
pub struct ExpectedScoreEngine<'c> {
    probs: ProbabilityEngine<'c>,
    config: FeatureConfig,
}

impl<'c> ExpectedScoreEngine<'c> {
    pub fn new(probs: ProbabilityEngine<'c>, config: FeatureConfig) -> Self {
        ExpectedScoreEngine { probs, config }
    }

    /// Points still to be earned toward the reference score, or the reference
    /// score itself once that is met or passed.
    pub fn denominator(&self, card: &impl ScoreView) -> f64 {
        let remaining = self.config.reference_score - card.final_score() as f64;
        if remaining > 0.0 {
            remaining
        } else {
            self.config.reference_score
        }
    }

    /// Extra weight on upper boxes, shrinking as the upper total nears the bonus threshold.
    /// Goes negative once the upper total passes the threshold.
    pub fn urgency_weight(&self, card: &impl ScoreView) -> f64 {
        let threshold = self.config.upper_bonus_threshold;
        let to_bonus = threshold - card.upper_score() as f64;
        self.config.urgency_scale * (to_bonus / threshold)
    }

    pub fn upper_expected_score(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        category: Category,
        rolls: u32,
    ) -> f64 {
        let face = match category.face() {
            Some(face) if !card.is_marked(category) => face,
            _ => return 0.0,
        };
        let expected = self
            .probs
            .upper_section_distribution(dice, face, rolls)
            .expected_count;
        face as f64 * expected * (1.0 + self.urgency_weight(card)) / self.denominator(card)
    }

    /// Three/four of a kind and chance use the current dice sum, a lower bound on
    /// what the box would pay.
    pub fn lower_expected_score(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        category: Category,
        rolls: u32,
    ) -> f64 {
        if category.is_upper() {
            return 0.0;
        }
        let denominator = self.denominator(card);
        if category == Yahtzee {
            let p = self.probs.yahtzee(dice, rolls);
            return match (card.is_marked(Yahtzee), yahtzee_bonus_live(card, Yahtzee)) {
                (false, _) => p * 50.0 / denominator,
                (true, true) => p * self.config.yahtzee_bonus / denominator,
                (true, false) => 0.0,
            };
        }
        let p = self.probs.lower_section_probability(dice, card, category, rolls);
        match fixed_score(category) {
            Some(points) => p * points / denominator,
            None => {
                let sum: u32 = dice.iter().map(|&d| d as u32).sum();
                p * sum as f64 / denominator
            }
        }
    }

    pub fn upper_probability_vector(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        rolls: u32,
    ) -> [f32; 6] {
        Category::UPPER.map(|c| {
            self.probs
                .upper_section_probability_for(dice, card, c, rolls) as f32
        })
    }

    pub fn upper_expected_score_vector(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        rolls: u32,
    ) -> [f32; 6] {
        Category::UPPER.map(|c| self.upper_expected_score(dice, card, c, rolls) as f32)
    }

    pub fn lower_probability_vector(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        rolls: u32,
    ) -> [f32; 7] {
        Category::LOWER.map(|c| self.probs.lower_section_probability(dice, card, c, rolls) as f32)
    }

    pub fn lower_expected_score_vector(
        &self,
        dice: &[u8],
        card: &impl ScoreView,
        rolls: u32,
    ) -> [f32; 7] {
        Category::LOWER.map(|c| self.lower_expected_score(dice, card, c, rolls) as f32)
    }

    pub fn observe(&self, dice: &[u8], card: &impl ScoreView, rolls: u32) -> Observation {
        Observation {
            upper_probabilities: self.upper_probability_vector(dice, card, rolls),
            upper_expected_scores: self.upper_expected_score_vector(dice, card, rolls),
            lower_probabilities: self.lower_probability_vector(dice, card, rolls),
            lower_expected_scores: self.lower_expected_score_vector(dice, card, rolls),
        }
    }
}
