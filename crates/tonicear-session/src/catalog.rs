//! The static module catalog.
//!
//! Every trainable module is a fixed (question type, difficulty level)
//! pair. The catalog is fully enumerable, constructed once at first use,
//! and immutable afterwards; lookups hand out shared references only.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tonicear_theory::level::DifficultyLevel;

use crate::error::SessionError;

/// Number of questions in every generated session.
pub const QUESTION_COUNT: usize = 20;

/// Kind of quiz item a module produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Two notes; which one is higher.
    CompareTwo,
    /// Three notes; sort ascending.
    SortThree,
    /// Four notes; sort ascending.
    SortFour,
    /// Two notes; distance in scale degrees.
    IntervalScale,
    /// One note; name its movable-do spelling.
    SingleNote,
}

impl QuestionType {
    /// Returns the question type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::CompareTwo => "compare_two",
            QuestionType::SortThree => "sort_three",
            QuestionType::SortFour => "sort_four",
            QuestionType::IntervalScale => "interval_scale",
            QuestionType::SingleNote => "single_note",
        }
    }

    /// How many notes a question of this type plays.
    pub fn note_count(&self) -> usize {
        match self {
            QuestionType::CompareTwo | QuestionType::IntervalScale => 2,
            QuestionType::SortThree => 3,
            QuestionType::SortFour => 4,
            QuestionType::SingleNote => 1,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the module catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    /// Stable module id (e.g. `"M2-L4"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Kind of quiz item this module produces.
    pub question_type: QuestionType,
    /// Nominal difficulty level.
    pub level: DifficultyLevel,
    /// Position in the recommended training progression (1-based).
    pub recommended_order: u32,
}

fn build_modules() -> Vec<ModuleConfig> {
    let mut modules = Vec::new();
    let mut order = 1u32;

    let mut push = |prefix: &str, title: &str, question_type: QuestionType, level: DifficultyLevel| {
        modules.push(ModuleConfig {
            id: format!("{}-{}", prefix, level),
            title: format!("{} ({})", title, level),
            question_type,
            level,
            recommended_order: order,
        });
        order += 1;
    };

    for level in DifficultyLevel::all() {
        push("M2", "Two Notes: Higher or Lower", QuestionType::CompareTwo, *level);
    }
    for level in DifficultyLevel::all() {
        push("M3", "Three Notes: Sort Low to High", QuestionType::SortThree, *level);
    }
    for level in DifficultyLevel::all() {
        push("M4", "Four Notes: Sort Low to High", QuestionType::SortFour, *level);
    }
    // Scale-step distance stops at the heptatonic level.
    for level in &[DifficultyLevel::L1, DifficultyLevel::L2, DifficultyLevel::L3] {
        push("MI", "Two Notes: Scale-Step Distance", QuestionType::IntervalScale, *level);
    }
    // Single-note guessing has no proximity variant.
    for level in &[
        DifficultyLevel::L1,
        DifficultyLevel::L2,
        DifficultyLevel::L3,
        DifficultyLevel::L4,
    ] {
        push("MS", "Single Note Guess", QuestionType::SingleNote, *level);
    }

    modules
}

/// Returns the full module catalog in recommended order.
pub fn modules() -> &'static [ModuleConfig] {
    static CATALOG: OnceLock<Vec<ModuleConfig>> = OnceLock::new();
    CATALOG.get_or_init(build_modules)
}

/// Looks up a module by id.
pub fn module_by_id(module_id: &str) -> Result<&'static ModuleConfig, SessionError> {
    modules()
        .iter()
        .find(|module| module.id == module_id)
        .ok_or_else(|| SessionError::UnknownModule(module_id.to_string()))
}
