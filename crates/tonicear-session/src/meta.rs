//! Catalog metadata for client configuration.
//!
//! One read-only snapshot of every selectable option plus the defaults a
//! fresh client should start from. Everything here is derived from the
//! static catalogs; nothing is stateful.

use serde::Serialize;
use tonicear_samples::Instrument;
use tonicear_theory::key::KEY_OPTIONS;
use tonicear_theory::level::DifficultyLevel;
use tonicear_theory::pitch::{Gender, Temperament};

use crate::catalog::{modules, QuestionType, QUESTION_COUNT};

/// A gender option with its base register.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderMeta {
    pub id: String,
    pub label: String,
    pub base_do_at_c: f64,
}

/// A plain id/label option (keys, temperaments, instruments).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionMeta {
    pub id: String,
    pub label: String,
}

/// One difficulty level with its pool description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyMeta {
    pub level: DifficultyLevel,
    pub id: String,
    pub label: String,
    pub display_notes: String,
    pub tokens: Vec<String>,
}

/// One module catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMeta {
    pub id: String,
    pub title: String,
    pub question_type: QuestionType,
    pub level: DifficultyLevel,
    pub recommended_order: u32,
}

/// Client defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsMeta {
    pub gender: String,
    pub key: String,
    pub temperament: String,
    pub instrument: String,
    pub show_visual_hints: bool,
    pub question_count: u32,
}

/// Full metadata payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub genders: Vec<GenderMeta>,
    pub keys: Vec<OptionMeta>,
    pub temperaments: Vec<OptionMeta>,
    pub instruments: Vec<OptionMeta>,
    pub difficulties: Vec<DifficultyMeta>,
    pub modules: Vec<ModuleMeta>,
    pub defaults: DefaultsMeta,
}

/// Builds the metadata snapshot.
pub fn meta() -> Meta {
    let label = |gender: Gender| match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    };

    Meta {
        genders: Gender::all()
            .iter()
            .map(|gender| GenderMeta {
                id: gender.as_str().to_string(),
                label: label(*gender).to_string(),
                base_do_at_c: gender.base_do_at_c(),
            })
            .collect(),
        keys: KEY_OPTIONS
            .iter()
            .map(|key| OptionMeta {
                id: key.id.to_string(),
                label: key.label.to_string(),
            })
            .collect(),
        temperaments: Temperament::all()
            .iter()
            .map(|temperament| OptionMeta {
                id: temperament.as_str().to_string(),
                label: temperament.label().to_string(),
            })
            .collect(),
        instruments: Instrument::all()
            .iter()
            .map(|instrument| OptionMeta {
                id: instrument.as_str().to_string(),
                label: instrument.label().to_string(),
            })
            .collect(),
        difficulties: DifficultyLevel::all()
            .iter()
            .map(|level| DifficultyMeta {
                level: *level,
                id: level.id().to_string(),
                label: level.label().to_string(),
                display_notes: level.display_notes().to_string(),
                tokens: level.tokens().iter().map(|t| t.to_string()).collect(),
            })
            .collect(),
        modules: modules()
            .iter()
            .map(|module| ModuleMeta {
                id: module.id.clone(),
                title: module.title.clone(),
                question_type: module.question_type,
                level: module.level,
                recommended_order: module.recommended_order,
            })
            .collect(),
        defaults: DefaultsMeta {
            gender: Gender::Male.as_str().to_string(),
            key: "C".to_string(),
            temperament: Temperament::EqualTemperament.as_str().to_string(),
            instrument: Instrument::Piano.as_str().to_string(),
            show_visual_hints: false,
            question_count: QUESTION_COUNT as u32,
        },
    }
}
