//! The twelve fixed movable-do keys.
//!
//! Keys are ordered chromatically from C; a key's offset is its 0-based
//! index in that order and doubles as the semitone shift applied to the
//! voice's base do frequency.

use crate::error::TheoryError;

/// One selectable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOption {
    /// Key id as requested over the wire (e.g. `"C#/Db"`).
    pub id: &'static str,
    /// Display label (e.g. `"1=C#/Db"`).
    pub label: &'static str,
}

/// All keys, ordered chromatically from C.
pub static KEY_OPTIONS: [KeyOption; 12] = [
    KeyOption { id: "C", label: "1=C" },
    KeyOption { id: "C#/Db", label: "1=C#/Db" },
    KeyOption { id: "D", label: "1=D" },
    KeyOption { id: "D#/Eb", label: "1=D#/Eb" },
    KeyOption { id: "E", label: "1=E" },
    KeyOption { id: "F", label: "1=F" },
    KeyOption { id: "F#/Gb", label: "1=F#/Gb" },
    KeyOption { id: "G", label: "1=G" },
    KeyOption { id: "G#/Ab", label: "1=G#/Ab" },
    KeyOption { id: "A", label: "1=A" },
    KeyOption { id: "A#/Bb", label: "1=A#/Bb" },
    KeyOption { id: "B", label: "1=B" },
];

/// Returns the semitone offset of a key from C.
pub fn key_offset(key_id: &str) -> Result<u8, TheoryError> {
    KEY_OPTIONS
        .iter()
        .position(|key| key.id == key_id)
        .map(|index| index as u8)
        .ok_or_else(|| TheoryError::UnknownKey(key_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_offsets() {
        assert_eq!(key_offset("C").unwrap(), 0);
        assert_eq!(key_offset("F#/Gb").unwrap(), 6);
        assert_eq!(key_offset("B").unwrap(), 11);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            key_offset("H"),
            Err(TheoryError::UnknownKey("H".to_string()))
        );
        // Partial spellings of the paired ids are not valid keys.
        assert!(key_offset("Db").is_err());
    }
}
