//! Builtin instrument manifests.
//!
//! The asset pipeline records one sample per equal-tempered MIDI note
//! inside the representable band. These tables reproduce that layout so
//! the trainer can run without an external manifest file; a deployment
//! with its own pipeline output loads a JSON manifest instead.

use crate::error::SampleError;
use crate::manifest::{SampleEntry, SampleManifest};

/// Lowest recorded sample pitch kept by the pipeline, in Hz.
pub const SAMPLE_MIN_HZ: f64 = 70.0;

/// Highest recorded sample pitch kept by the pipeline, in Hz.
pub const SAMPLE_MAX_HZ: f64 = 1000.0;

/// MIDI range scanned for candidate samples (piano compass, A0..C8).
const MIDI_SCAN_LOW: u8 = 21;
const MIDI_SCAN_HIGH: u8 = 108;

const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Instruments with builtin sample sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Piano,
    Guitar,
}

impl Instrument {
    /// Returns the instrument as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::Piano => "piano",
            Instrument::Guitar => "guitar",
        }
    }

    /// Display label for catalogs.
    pub fn label(&self) -> &'static str {
        match self {
            Instrument::Piano => "Piano",
            Instrument::Guitar => "Guitar",
        }
    }

    /// Returns all instruments.
    pub fn all() -> &'static [Instrument] {
        &[Instrument::Piano, Instrument::Guitar]
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Instrument {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "piano" => Ok(Instrument::Piano),
            "guitar" => Ok(Instrument::Guitar),
            other => Err(SampleError::UnknownInstrument(other.to_string())),
        }
    }
}

/// Converts a MIDI note number to its equal-tempered frequency (A4 = 440).
pub fn midi_to_hz(midi: u8) -> f64 {
    440.0 * 2f64.powf((midi as f64 - 69.0) / 12.0)
}

/// Note label in flat spelling, for example `Db4`.
pub fn midi_to_note_name(midi: u8) -> String {
    let name = NOTE_NAMES_FLAT[(midi % 12) as usize];
    let octave = (midi / 12) as i32 - 1;
    format!("{}{}", name, octave)
}

/// Builds the builtin manifest for an instrument.
///
/// One entry per MIDI note in the scan range whose pitch lies inside
/// `[SAMPLE_MIN_HZ, SAMPLE_MAX_HZ]`; ids are `m{midi:03}` and entries are
/// ascending in pitch, so tie-breaks in the mapper resolve to the lower
/// sample.
pub fn builtin_manifest(instrument: Instrument) -> SampleManifest {
    let samples = (MIDI_SCAN_LOW..=MIDI_SCAN_HIGH)
        .filter_map(|midi| {
            let hz = midi_to_hz(midi);
            if !(SAMPLE_MIN_HZ..=SAMPLE_MAX_HZ).contains(&hz) {
                return None;
            }
            let id = format!("m{:03}", midi);
            Some(SampleEntry {
                file: format!("{}/{}.m4a", instrument.as_str(), id),
                id,
                hz,
                midi: Some(midi),
            })
        })
        .collect();
    SampleManifest::new(samples)
}
