//! The fixed 12-tone movable-do note taxonomy.
//!
//! Every pitch the trainer can ask about is one of twelve chromatic tones
//! anchored to a 7-degree movable-do scale. The table is immutable and
//! process-wide; callers only ever get shared references into it.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Accidental of a scale-degree spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    /// Lowered by one semitone.
    Flat,
    /// No alteration.
    Natural,
    /// Raised by one semitone.
    Sharp,
}

impl Accidental {
    /// Returns the accidental as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Flat => "flat",
            Accidental::Natural => "natural",
            Accidental::Sharp => "sharp",
        }
    }
}

impl std::fmt::Display for Accidental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alternate spelling of a chromatic tone (e.g. `#4` may be written `b5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enharmonic {
    /// Scale degree of the alternate spelling (1-7).
    pub degree: u8,
    /// Accidental of the alternate spelling.
    pub accidental: Accidental,
}

/// One immutable entry in the chromatic movable-do taxonomy.
///
/// Invariants of the table as a whole:
/// - exactly 12 entries, one per semitone value 0..=11
/// - only the 5 sharp-spelled tones carry an enharmonic alternative, and
///   that alternative is the flat spelling of `degree + 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDegreeNote {
    /// Unique symbolic id (e.g. `"#4"`).
    pub token: &'static str,
    /// Display label shown to the user (e.g. `"#4/b5"`).
    pub display: &'static str,
    /// Movable-do scale degree (1-7).
    pub degree: u8,
    /// Accidental of the primary spelling.
    pub accidental: Accidental,
    /// Semitone offset from the tonic (0-11).
    pub semitone: u8,
    /// Alternate spelling, present only for the 5 chromatic non-natural tones.
    pub enharmonic: Option<Enharmonic>,
}

const fn natural(token: &'static str, degree: u8, semitone: u8) -> ScaleDegreeNote {
    ScaleDegreeNote {
        token,
        display: token,
        degree,
        accidental: Accidental::Natural,
        semitone,
        enharmonic: None,
    }
}

const fn sharp(
    token: &'static str,
    display: &'static str,
    degree: u8,
    semitone: u8,
) -> ScaleDegreeNote {
    ScaleDegreeNote {
        token,
        display,
        degree,
        accidental: Accidental::Sharp,
        semitone,
        enharmonic: Some(Enharmonic {
            degree: degree + 1,
            accidental: Accidental::Flat,
        }),
    }
}

/// The full chromatic taxonomy, ordered by semitone.
pub static CHROMATIC_NOTES: [ScaleDegreeNote; 12] = [
    natural("1", 1, 0),
    sharp("#1", "#1/b2", 1, 1),
    natural("2", 2, 2),
    sharp("#2", "#2/b3", 2, 3),
    natural("3", 3, 4),
    natural("4", 4, 5),
    sharp("#4", "#4/b5", 4, 6),
    natural("5", 5, 7),
    sharp("#5", "#5/b6", 5, 8),
    natural("6", 6, 9),
    sharp("#6", "#6/b7", 6, 10),
    natural("7", 7, 11),
];

/// Looks up a note by its symbolic token.
pub fn note_by_token(token: &str) -> Result<&'static ScaleDegreeNote, TheoryError> {
    CHROMATIC_NOTES
        .iter()
        .find(|note| note.token == token)
        .ok_or_else(|| TheoryError::UnknownToken(token.to_string()))
}

/// Looks up a note by its semitone offset from the tonic.
///
/// Returns `None` for semitones outside 0..=11.
pub fn note_by_semitone(semitone: u8) -> Option<&'static ScaleDegreeNote> {
    CHROMATIC_NOTES.iter().find(|note| note.semitone == semitone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_entries_unique_semitones() {
        let mut seen = [false; 12];
        for note in &CHROMATIC_NOTES {
            assert!(note.semitone < 12);
            assert!(!seen[note.semitone as usize], "duplicate semitone {}", note.semitone);
            seen[note.semitone as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_degrees_in_range() {
        for note in &CHROMATIC_NOTES {
            assert!((1..=7).contains(&note.degree), "degree {} out of range", note.degree);
        }
    }

    #[test]
    fn test_enharmonic_only_on_sharps() {
        for note in &CHROMATIC_NOTES {
            match note.accidental {
                Accidental::Sharp => {
                    let enh = note.enharmonic.expect("sharp tone missing enharmonic");
                    assert_eq!(enh.degree, note.degree + 1);
                    assert_eq!(enh.accidental, Accidental::Flat);
                }
                _ => assert!(note.enharmonic.is_none()),
            }
        }
        let sharps = CHROMATIC_NOTES.iter().filter(|n| n.enharmonic.is_some()).count();
        assert_eq!(sharps, 5);
    }

    #[test]
    fn test_note_by_token() {
        let note = note_by_token("#4").unwrap();
        assert_eq!(note.semitone, 6);
        assert_eq!(note.display, "#4/b5");
        assert!(note_by_token("b5").is_err());
    }

    #[test]
    fn test_note_by_semitone() {
        assert_eq!(note_by_semitone(7).unwrap().token, "5");
        assert!(note_by_semitone(12).is_none());
    }

    #[test]
    fn test_accidental_serde_tokens() {
        let json = serde_json::to_string(&Accidental::Sharp).unwrap();
        assert_eq!(json, "\"sharp\"");
        let back: Accidental = serde_json::from_str("\"flat\"").unwrap();
        assert_eq!(back, Accidental::Flat);
    }
}
