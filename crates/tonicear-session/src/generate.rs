//! Session generation.
//!
//! One call builds one immutable session: request validation, note-pool
//! resolution, 20 questions drawn on independent seeded RNG streams, and
//! optional sample mapping attached to every note payload.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use tonicear_samples::manifest::SampleManifest;
use tonicear_samples::mapper::{map_frequency_checked, DEFAULT_MAX_CENTS_ERROR};
use tonicear_samples::Instrument;
use tonicear_theory::level::DifficultyLevel;
use tonicear_theory::note::{Accidental, ScaleDegreeNote};
use tonicear_theory::pitch::{do_frequency, note_frequency, round_hz, Gender, Temperament};

use crate::catalog::{module_by_id, ModuleConfig, QuestionType, QUESTION_COUNT};
use crate::error::SessionError;
use crate::pick::{pick_spaced_pair, pick_spaced_run, sample_distinct};
use crate::question::{
    ChoiceOption, CorrectAnswer, DegreeSpelling, EnharmonicSpelling, NotePayload, Question,
    QuestionChoices, SingleNoteAnswer, SingleNoteChoices, SortChoices, VisualHint,
};
use crate::rng::{create_question_rng, derive_session_id, entropy_seed};

/// A session generation request, as received over the wire.
///
/// Every field is checked against its static catalog before any question
/// is built; an unknown id fails the whole request with no partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionRequest {
    /// Module id from the catalog (e.g. `"M2-L1"`).
    pub module_id: String,
    /// Voice gender id (`"male"` or `"female"`).
    pub gender: String,
    /// Key id (e.g. `"C"`, `"F#/Gb"`).
    pub key: String,
    /// Temperament id; only `"equal_temperament"` is accepted.
    pub temperament: String,
    /// Instrument id; defaults to piano.
    #[serde(default = "default_instrument")]
    pub instrument: String,
    /// Explicit base seed; omitted in production, fixed in tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

fn default_instrument() -> String {
    Instrument::Piano.as_str().to_string()
}

impl SessionRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Sample-mapping configuration for generation-time attachment.
#[derive(Debug, Clone)]
pub struct MappingConfig<'a> {
    /// Manifest to resolve against.
    pub manifest: &'a SampleManifest,
    /// Cents budget enforced on every resolved note.
    pub max_cents_error: f64,
}

impl<'a> MappingConfig<'a> {
    /// Creates a config with the default cents budget.
    pub fn new(manifest: &'a SampleManifest) -> Self {
        Self {
            manifest,
            max_cents_error: DEFAULT_MAX_CENTS_ERROR,
        }
    }

    /// Overrides the cents budget.
    pub fn with_max_cents(mut self, max_cents_error: f64) -> Self {
        self.max_cents_error = max_cents_error;
        self
    }
}

/// Settings snapshot stored with a generated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSettings {
    /// Requested module id.
    pub module_id: String,
    /// Module display title.
    pub module_title: String,
    /// The module's nominal level.
    pub level: DifficultyLevel,
    /// The level whose pool was actually drawn from.
    pub effective_note_pool_level: DifficultyLevel,
    /// Question kind of the module.
    pub question_type: QuestionType,
    /// Resolved voice gender.
    pub gender: Gender,
    /// Requested key id.
    pub key: String,
    /// Resolved temperament.
    pub temperament: Temperament,
    /// Requested instrument id.
    pub instrument: String,
    /// Number of questions, always 20.
    pub question_count: u32,
    /// Resolved do frequency, rounded to 4 decimals.
    pub do_frequency: f64,
    /// Base seed the session was drawn with.
    pub seed: u32,
}

/// One generated training session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque id, unique per generation call.
    pub session_id: String,
    /// Snapshot of the resolved request.
    pub settings: SessionSettings,
    /// Exactly 20 questions.
    pub questions: Vec<Question>,
}

impl Session {
    /// Serializes the session to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the session to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Generates one training session of 20 questions.
///
/// With a [`MappingConfig`], every note payload gets its `sampleId` and
/// `midi` attached at generation time; a tolerance failure aborts the
/// whole call. Without one, a downstream layer maps before playback.
///
/// # Example
///
/// ```
/// use tonicear_session::generate::{generate_session, SessionRequest};
///
/// let request = SessionRequest {
///     module_id: "M2-L1".to_string(),
///     gender: "male".to_string(),
///     key: "C".to_string(),
///     temperament: "equal_temperament".to_string(),
///     instrument: "piano".to_string(),
///     seed: Some(42),
/// };
/// let session = generate_session(&request, None).unwrap();
/// assert_eq!(session.questions.len(), 20);
/// assert_eq!(session.settings.do_frequency, 130.8);
/// ```
pub fn generate_session(
    request: &SessionRequest,
    mapping: Option<&MappingConfig<'_>>,
) -> Result<Session, SessionError> {
    let module = module_by_id(&request.module_id)?;
    let gender: Gender = request.gender.parse()?;
    let temperament: Temperament = request.temperament.parse()?;
    let _instrument: Instrument = request.instrument.parse()?;

    let effective_level = resolve_note_pool_level(module);
    let pool = effective_level.note_pool();
    let do_hz = do_frequency(gender, &request.key)?;
    let seed = request.seed.unwrap_or_else(entropy_seed);

    let mut questions = Vec::with_capacity(QUESTION_COUNT);
    for number in 1..=QUESTION_COUNT as u32 {
        let mut rng = create_question_rng(seed, number);
        questions.push(build_question(
            module,
            number,
            &pool,
            do_hz,
            temperament,
            mapping,
            &mut rng,
        )?);
    }

    Ok(Session {
        session_id: derive_session_id(seed, &module.id),
        settings: SessionSettings {
            module_id: module.id.clone(),
            module_title: module.title.clone(),
            level: module.level,
            effective_note_pool_level: effective_level,
            question_type: module.question_type,
            gender,
            key: request.key.clone(),
            temperament,
            instrument: request.instrument.clone(),
            question_count: QUESTION_COUNT as u32,
            do_frequency: round_hz(do_hz),
            seed,
        },
        questions,
    })
}

/// Resolves the level whose pool a module actually draws from.
///
/// The triad level has only 3 unique notes, but a 4-note sort needs 4
/// distinct pitches; only that combination is lifted to the pentatonic
/// pool. The lift is reported in the settings so clients can display it.
pub fn resolve_note_pool_level(module: &ModuleConfig) -> DifficultyLevel {
    if module.question_type == QuestionType::SortFour && module.level == DifficultyLevel::L1 {
        return DifficultyLevel::L2;
    }
    module.level
}

fn build_question(
    module: &ModuleConfig,
    number: u32,
    pool: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
    rng: &mut Pcg32,
) -> Result<Question, SessionError> {
    match module.question_type {
        QuestionType::CompareTwo => {
            build_compare_two(module, number, pool, do_hz, temperament, mapping, rng)
        }
        QuestionType::SortThree => {
            build_sort(module, number, pool, do_hz, temperament, mapping, rng, 3)
        }
        QuestionType::SortFour => {
            build_sort(module, number, pool, do_hz, temperament, mapping, rng, 4)
        }
        QuestionType::IntervalScale => {
            build_interval(module, number, pool, do_hz, temperament, mapping, rng)
        }
        QuestionType::SingleNote => {
            build_single_note(module, number, pool, do_hz, temperament, mapping, rng)
        }
    }
}

fn question_id(module: &ModuleConfig, number: u32) -> String {
    format!("{}-Q{}", module.id, number)
}

#[allow(clippy::too_many_arguments)]
fn build_compare_two(
    module: &ModuleConfig,
    number: u32,
    pool: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
    rng: &mut Pcg32,
) -> Result<Question, SessionError> {
    let picked = match module.level.required_spacing() {
        Some(spacing) => pick_spaced_pair(rng, pool, spacing)?,
        None => sample_distinct(rng, pool, 2)?,
    };
    let notes = build_note_payloads(&picked, do_hz, temperament, mapping)?;

    let correct = if picked[0].semitone > picked[1].semitone {
        "first_higher"
    } else {
        "second_higher"
    };

    Ok(Question {
        id: question_id(module, number),
        question_type: module.question_type,
        notes,
        visual_hints: build_visual_hints(&picked),
        choices: QuestionChoices::Options(vec![
            ChoiceOption {
                id: "first_higher".to_string(),
                label: "First note is higher".to_string(),
            },
            ChoiceOption {
                id: "second_higher".to_string(),
                label: "Second note is higher".to_string(),
            },
        ]),
        correct_answer: CorrectAnswer::Text(correct.to_string()),
        prompt_text: "Listen to two notes. Which one is higher?".to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn build_sort(
    module: &ModuleConfig,
    number: u32,
    pool: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
    rng: &mut Pcg32,
    note_count: usize,
) -> Result<Question, SessionError> {
    let picked = match module.level.required_spacing() {
        Some(spacing) => pick_spaced_run(rng, pool, note_count, spacing)?,
        None => sample_distinct(rng, pool, note_count)?,
    };
    let notes = build_note_payloads(&picked, do_hz, temperament, mapping)?;

    let mut order: Vec<usize> = (0..note_count).collect();
    order.sort_by_key(|&index| picked[index].semitone);
    let answer = order
        .iter()
        .map(|index| (index + 1).to_string())
        .collect::<Vec<_>>()
        .join("-");

    Ok(Question {
        id: question_id(module, number),
        question_type: module.question_type,
        notes,
        visual_hints: build_visual_hints(&picked),
        choices: QuestionChoices::Sort(SortChoices {
            positions: (1..=note_count).map(|p| p.to_string()).collect(),
            format: "index_sequence".to_string(),
        }),
        correct_answer: CorrectAnswer::Text(answer),
        prompt_text: format!("Listen to {} notes. Sort from low to high.", note_count),
    })
}

#[allow(clippy::too_many_arguments)]
fn build_interval(
    module: &ModuleConfig,
    number: u32,
    pool: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
    rng: &mut Pcg32,
) -> Result<Question, SessionError> {
    // Scale-step distance never constrains spacing, whatever the level.
    let picked = sample_distinct(rng, pool, 2)?;
    let notes = build_note_payloads(&picked, do_hz, temperament, mapping)?;
    let distance = picked[0].degree.abs_diff(picked[1].degree);

    let mut distances: Vec<u8> = Vec::new();
    for (index, left) in pool.iter().enumerate() {
        for right in &pool[index + 1..] {
            let d = left.degree.abs_diff(right.degree);
            if d > 0 && !distances.contains(&d) {
                distances.push(d);
            }
        }
    }
    distances.sort_unstable();

    Ok(Question {
        id: question_id(module, number),
        question_type: module.question_type,
        notes,
        visual_hints: build_visual_hints(&picked),
        choices: QuestionChoices::Distances(
            distances.iter().map(|d| d.to_string()).collect(),
        ),
        correct_answer: CorrectAnswer::Text(distance.to_string()),
        prompt_text: "How many scale steps apart are these two notes?".to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn build_single_note(
    module: &ModuleConfig,
    number: u32,
    pool: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
    rng: &mut Pcg32,
) -> Result<Question, SessionError> {
    let picked = sample_distinct(rng, pool, 1)?;
    let note = picked[0];
    let notes = build_note_payloads(&picked, do_hz, temperament, mapping)?;

    let accepted = note.enharmonic.map(|enh| {
        vec![DegreeSpelling {
            degree: enh.degree.to_string(),
            accidental: enh.accidental,
        }]
    });

    let chromatic = module.level == DifficultyLevel::L4;
    let accidentals = if chromatic {
        vec![Accidental::Flat, Accidental::Natural, Accidental::Sharp]
    } else {
        vec![Accidental::Natural]
    };

    Ok(Question {
        id: question_id(module, number),
        question_type: module.question_type,
        notes,
        // Single-note guessing is played blind; no hint geometry.
        visual_hints: Vec::new(),
        choices: QuestionChoices::SingleNote(SingleNoteChoices {
            degrees: (1..=7).map(|d| d.to_string()).collect(),
            accidentals,
            requires_accidental: chromatic,
        }),
        correct_answer: CorrectAnswer::Spelling(SingleNoteAnswer {
            degree: note.degree.to_string(),
            accidental: note.accidental,
            accepted,
        }),
        prompt_text: "Listen to one note. Choose the movable-do number.".to_string(),
    })
}

fn build_note_payloads(
    picked: &[&'static ScaleDegreeNote],
    do_hz: f64,
    temperament: Temperament,
    mapping: Option<&MappingConfig<'_>>,
) -> Result<Vec<NotePayload>, SessionError> {
    let mut payloads = Vec::with_capacity(picked.len());
    for note in picked {
        let hz = note_frequency(temperament, note.semitone, do_hz);
        let mut payload = NotePayload {
            token: note.token.to_string(),
            label: note.display.to_string(),
            degree: note.degree,
            accidental: note.accidental,
            semitone: note.semitone,
            frequency: round_hz(hz),
            enharmonic: note.enharmonic.map(|enh| EnharmonicSpelling {
                degree: enh.degree,
                accidental: enh.accidental,
            }),
            sample_id: None,
            midi: None,
        };
        if let Some(config) = mapping {
            let resolved = map_frequency_checked(config.manifest, hz, config.max_cents_error)?;
            payload.sample_id = Some(resolved.sample_id);
            payload.midi = resolved.midi;
        }
        payloads.push(payload);
    }
    Ok(payloads)
}

/// Maps each note's semitone into the 10-90 band, rounded to 2 decimals.
///
/// A degenerate single-pitch set collapses to the midpoint constant. The
/// geometry is presentation data, never judged, but must be deterministic
/// for a given note set.
fn build_visual_hints(picked: &[&'static ScaleDegreeNote]) -> Vec<VisualHint> {
    let min = picked.iter().map(|n| n.semitone).min().unwrap_or(0);
    let max = picked.iter().map(|n| n.semitone).max().unwrap_or(0);

    if min == max {
        return picked
            .iter()
            .enumerate()
            .map(|(index, _)| VisualHint {
                index: index as u32 + 1,
                height: 50.0,
            })
            .collect();
    }

    picked
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let normalized = (note.semitone - min) as f64 / (max - min) as f64;
            VisualHint {
                index: index as u32 + 1,
                height: round2(10.0 + normalized * 80.0),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
