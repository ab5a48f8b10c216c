//! Difficulty levels and their note pools.
//!
//! `L1..L4` are static subsets of the chromatic taxonomy. `L5` and `L6`
//! reuse the full chromatic pool but require an exact semitone spacing at
//! selection time instead of filtering the pool itself.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::{note_by_token, ScaleDegreeNote};

const L1_TOKENS: [&str; 3] = ["1", "3", "5"];
const L2_TOKENS: [&str; 5] = ["1", "2", "3", "5", "6"];
const L3_TOKENS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];
const CHROMA_TOKENS: [&str; 12] = [
    "1", "#1", "2", "#2", "3", "4", "#4", "5", "#5", "6", "#6", "7",
];

/// Named difficulty level selecting a note pool for a module instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
}

impl DifficultyLevel {
    /// Stable catalog id for this level.
    pub fn id(&self) -> &'static str {
        match self {
            DifficultyLevel::L1 => "L1_TRIAD",
            DifficultyLevel::L2 => "L2_PENTA",
            DifficultyLevel::L3 => "L3_HEPTA",
            DifficultyLevel::L4 => "L4_CHROMA",
            DifficultyLevel::L5 => "L5_WHOLE_TONE",
            DifficultyLevel::L6 => "L6_SEMITONE",
        }
    }

    /// Display label for catalogs.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::L1 => "Triad Notes",
            DifficultyLevel::L2 => "Pentatonic Expansion",
            DifficultyLevel::L3 => "Heptatonic",
            DifficultyLevel::L4 => "Chromatic",
            DifficultyLevel::L5 => "Whole-Tone Proximity",
            DifficultyLevel::L6 => "Semitone Proximity",
        }
    }

    /// Human-readable description of the pool or drill.
    pub fn display_notes(&self) -> &'static str {
        match self {
            DifficultyLevel::L1 => "1,3,5",
            DifficultyLevel::L2 => "1,2,3,5,6",
            DifficultyLevel::L3 => "1,2,3,4,5,6,7",
            DifficultyLevel::L4 => "1,#1/b2,2,#2/b3,3,4,#4/b5,5,#5/b6,6,#6/b7,7",
            DifficultyLevel::L5 => "L5 uses close-note drills (1 whole tone / 2 semitones)",
            DifficultyLevel::L6 => "L6 uses closest-note drills (1 semitone)",
        }
    }

    /// Tokens eligible for selection at this level.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            DifficultyLevel::L1 => &L1_TOKENS,
            DifficultyLevel::L2 => &L2_TOKENS,
            DifficultyLevel::L3 => &L3_TOKENS,
            DifficultyLevel::L4 | DifficultyLevel::L5 | DifficultyLevel::L6 => &CHROMA_TOKENS,
        }
    }

    /// Exact semitone spacing required between selected notes, if any.
    ///
    /// Only the proximity levels constrain spacing; the constraint applies
    /// at selection time and degrades to unconstrained sampling when the
    /// pool holds no exact-spacing combination.
    pub fn required_spacing(&self) -> Option<u8> {
        match self {
            DifficultyLevel::L5 => Some(2),
            DifficultyLevel::L6 => Some(1),
            _ => None,
        }
    }

    /// Resolves this level's note pool from the chromatic taxonomy.
    pub fn note_pool(&self) -> Vec<&'static ScaleDegreeNote> {
        self.tokens()
            .iter()
            .map(|token| note_by_token(token).expect("level token missing from taxonomy"))
            .collect()
    }

    /// Returns all levels in ascending difficulty order.
    pub fn all() -> &'static [DifficultyLevel] {
        &[
            DifficultyLevel::L1,
            DifficultyLevel::L2,
            DifficultyLevel::L3,
            DifficultyLevel::L4,
            DifficultyLevel::L5,
            DifficultyLevel::L6,
        ]
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DifficultyLevel::L1 => "L1",
            DifficultyLevel::L2 => "L2",
            DifficultyLevel::L3 => "L3",
            DifficultyLevel::L4 => "L4",
            DifficultyLevel::L5 => "L5",
            DifficultyLevel::L6 => "L6",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(DifficultyLevel::L1),
            "L2" => Ok(DifficultyLevel::L2),
            "L3" => Ok(DifficultyLevel::L3),
            "L4" => Ok(DifficultyLevel::L4),
            "L5" => Ok(DifficultyLevel::L5),
            "L6" => Ok(DifficultyLevel::L6),
            other => Err(TheoryError::UnknownLevel(other.to_string())),
        }
    }
}
