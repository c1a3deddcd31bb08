use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The 13 scorecard boxes, in canonical scorecard order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

use Category::*;

impl Category {
    pub const ALL: [Category; 13] = [
        Aces,
        Twos,
        Threes,
        Fours,
        Fives,
        Sixes,
        ThreeOfAKind,
        FourOfAKind,
        FullHouse,
        SmallStraight,
        LargeStraight,
        Yahtzee,
        Chance,
    ];
    pub const UPPER: [Category; 6] = [Aces, Twos, Threes, Fours, Fives, Sixes];
    pub const LOWER: [Category; 7] = [
        ThreeOfAKind,
        FourOfAKind,
        FullHouse,
        SmallStraight,
        LargeStraight,
        Yahtzee,
        Chance,
    ];

    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// The die face an upper box scores, `None` for the lower section.
    pub fn face(self) -> Option<u8> {
        match self {
            Aces => Some(1),
            Twos => Some(2),
            Threes => Some(3),
            Fours => Some(4),
            Fives => Some(5),
            Sixes => Some(6),
            _ => None,
        }
    }

    /// Upper box for a face in 1..=6.
    pub fn from_face(face: u8) -> Option<Category> {
        match face {
            1..=6 => Some(Self::UPPER[face as usize - 1]),
            _ => None,
        }
    }

    /// Position of the box inside its own section's vector.
    pub fn section_index(self) -> usize {
        let i = self as usize;
        if self.is_upper() {
            i
        } else {
            i - Self::UPPER.len()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Aces => "aces",
            Twos => "twos",
            Threes => "threes",
            Fours => "fours",
            Fives => "fives",
            Sixes => "sixes",
            ThreeOfAKind => "three_of_a_kind",
            FourOfAKind => "four_of_a_kind",
            FullHouse => "full_house",
            SmallStraight => "small_straight",
            LargeStraight => "large_straight",
            Yahtzee => "yahtzee",
            Chance => "chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}
