//! Question wire types.
//!
//! Everything a consuming layer needs to play, render, and judge one quiz
//! item. Questions are created once per slot, are immutable afterwards,
//! and carry no back-reference to the module that produced them.

use serde::Serialize;
use tonicear_theory::note::Accidental;

use crate::catalog::QuestionType;

/// Alternate movable-do spelling attached to a note payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnharmonicSpelling {
    /// Scale degree of the alternate spelling (1-7).
    pub degree: u8,
    /// Accidental of the alternate spelling.
    pub accidental: Accidental,
}

/// One playable note inside a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    /// Symbolic taxonomy token (e.g. `"#4"`).
    pub token: String,
    /// Display label (e.g. `"#4/b5"`).
    pub label: String,
    /// Movable-do degree (1-7).
    pub degree: u8,
    /// Accidental of the primary spelling.
    pub accidental: Accidental,
    /// Semitone offset from the tonic (0-11).
    pub semitone: u8,
    /// Concrete frequency in Hz, rounded to 4 decimals.
    pub frequency: f64,
    /// Alternate spelling for the 5 chromatic tones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enharmonic: Option<EnharmonicSpelling>,
    /// Resolved sample id, attached when the generator maps at build time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
    /// MIDI note of the resolved sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi: Option<u8>,
}

/// Normalized vertical position of one note in the visual hint strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualHint {
    /// 1-based note index in presentation order.
    pub index: u32,
    /// Height percentage inside the 10-90 band, rounded to 2 decimals.
    pub height: f64,
}

/// One selectable answer button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    /// Answer id submitted back by the client.
    pub id: String,
    /// Button label.
    pub label: String,
}

/// Choice layout for sort questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortChoices {
    /// Selectable position digits, `"1"..="N"`.
    pub positions: Vec<String>,
    /// Answer encoding marker, always `"index_sequence"`.
    pub format: String,
}

/// Choice layout for single-note questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleNoteChoices {
    /// Selectable degrees, `"1"..="7"`.
    pub degrees: Vec<String>,
    /// Selectable accidentals; only the chromatic level offers all three.
    pub accidentals: Vec<Accidental>,
    /// Whether the client must submit an accidental with the degree.
    pub requires_accidental: bool,
}

/// Answer choices; shape depends on the question type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionChoices {
    /// compare_two: labeled options.
    Options(Vec<ChoiceOption>),
    /// interval_scale: achievable degree distances, ascending.
    Distances(Vec<String>),
    /// sort_three / sort_four: position sequence entry.
    Sort(SortChoices),
    /// single_note: degree plus optional accidental.
    SingleNote(SingleNoteChoices),
}

/// One accepted `(degree, accidental)` spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeSpelling {
    /// Degree as a string, matching the choice ids.
    pub degree: String,
    /// Accidental of the spelling.
    pub accidental: Accidental,
}

/// Expected answer for a single-note question.
///
/// The primary spelling is always accepted; a note with an enharmonic
/// alternative also accepts that spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleNoteAnswer {
    /// Degree of the primary spelling.
    pub degree: String,
    /// Accidental of the primary spelling.
    pub accidental: Accidental,
    /// Additional accepted spellings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Vec<DegreeSpelling>>,
}

/// Correct answer; shape depends on the question type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// compare_two (`"first_higher"`), sort (`"3-1-2"`), interval (`"2"`).
    Text(String),
    /// single_note spelling with enharmonic acceptance.
    Spelling(SingleNoteAnswer),
}

/// One generated quiz item, fully self-contained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique id within the session (e.g. `"M2-L1-Q7"`).
    pub id: String,
    /// Question kind.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Notes in presentation order.
    pub notes: Vec<NotePayload>,
    /// Visual hint geometry; empty for single-note questions.
    pub visual_hints: Vec<VisualHint>,
    /// Answer choices offered to the user.
    pub choices: QuestionChoices,
    /// The judged answer.
    pub correct_answer: CorrectAnswer,
    /// Prompt shown and read to the user.
    pub prompt_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_payload_omits_empty_options() {
        let payload = NotePayload {
            token: "1".to_string(),
            label: "1".to_string(),
            degree: 1,
            accidental: Accidental::Natural,
            semitone: 0,
            frequency: 130.8,
            enharmonic: None,
            sample_id: None,
            midi: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("enharmonic").is_none());
        assert!(json.get("sampleId").is_none());
        assert_eq!(json["frequency"], 130.8);
    }

    #[test]
    fn test_enharmonic_payload_shape() {
        let payload = NotePayload {
            token: "#4".to_string(),
            label: "#4/b5".to_string(),
            degree: 4,
            accidental: Accidental::Sharp,
            semitone: 6,
            frequency: 184.9972,
            enharmonic: Some(EnharmonicSpelling {
                degree: 5,
                accidental: Accidental::Flat,
            }),
            sample_id: Some("m054".to_string()),
            midi: Some(54),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["enharmonic"]["degree"], 5);
        assert_eq!(json["enharmonic"]["accidental"], "flat");
        assert_eq!(json["sampleId"], "m054");
        assert_eq!(json["midi"], 54);
    }

    #[test]
    fn test_correct_answer_untagged_forms() {
        let text = CorrectAnswer::Text("3-1-2".to_string());
        assert_eq!(serde_json::to_value(&text).unwrap(), "3-1-2");

        let spelling = CorrectAnswer::Spelling(SingleNoteAnswer {
            degree: "4".to_string(),
            accidental: Accidental::Sharp,
            accepted: Some(vec![DegreeSpelling {
                degree: "5".to_string(),
                accidental: Accidental::Flat,
            }]),
        });
        let json = serde_json::to_value(&spelling).unwrap();
        assert_eq!(json["degree"], "4");
        assert_eq!(json["accepted"][0]["degree"], "5");
    }

    #[test]
    fn test_question_serializes_type_key() {
        let question = Question {
            id: "MS-L1-Q1".to_string(),
            question_type: QuestionType::SingleNote,
            notes: vec![],
            visual_hints: vec![],
            choices: QuestionChoices::SingleNote(SingleNoteChoices {
                degrees: vec!["1".to_string()],
                accidentals: vec![Accidental::Natural],
                requires_accidental: false,
            }),
            correct_answer: CorrectAnswer::Text("x".to_string()),
            prompt_text: "p".to_string(),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "single_note");
        assert_eq!(json["choices"]["requiresAccidental"], false);
        assert!(json.get("visualHints").is_some());
        assert!(json.get("promptText").is_some());
    }
}
