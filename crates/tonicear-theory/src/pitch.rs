//! Tuning math: voice genders, temperament, and do-frequency derivation.
//!
//! The tuning context is derived, never stored: `(gender, key)` resolves to
//! a do frequency on every request via
//! `base_do_at_c(gender) * 2^(key_offset / 12)`.

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::key::key_offset;

/// Base do frequency at key C for a male voice, in Hz.
pub const MALE_DO_C: f64 = 130.8;

/// Base do frequency at key C for a female voice, exactly one octave up.
pub const FEMALE_DO_C: f64 = 261.6;

/// Voice gender selecting the base do register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the gender as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Base do frequency at key C for this voice register.
    pub fn base_do_at_c(&self) -> f64 {
        match self {
            Gender::Male => MALE_DO_C,
            Gender::Female => FEMALE_DO_C,
        }
    }

    /// Returns all genders.
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(TheoryError::UnknownGender(other.to_string())),
        }
    }
}

/// Tuning system used to derive note frequencies.
///
/// The generator only supports equal temperament; every other id is
/// rejected at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    /// 12-tone equal temperament.
    EqualTemperament,
}

impl Temperament {
    /// Returns the temperament as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperament::EqualTemperament => "equal_temperament",
        }
    }

    /// Display label for catalogs.
    pub fn label(&self) -> &'static str {
        match self {
            Temperament::EqualTemperament => "12-Tone Equal Temperament",
        }
    }

    /// Returns all supported temperaments.
    pub fn all() -> &'static [Temperament] {
        &[Temperament::EqualTemperament]
    }
}

impl std::fmt::Display for Temperament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Temperament {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal_temperament" => Ok(Temperament::EqualTemperament),
            other => Err(TheoryError::UnknownTemperament(other.to_string())),
        }
    }
}

/// Calculates the do frequency for a gender and key.
///
/// # Examples
///
/// ```
/// use tonicear_theory::pitch::{do_frequency, Gender};
///
/// let hz = do_frequency(Gender::Male, "C").unwrap();
/// assert!((hz - 130.8).abs() < 1e-9);
///
/// let hz = do_frequency(Gender::Female, "C").unwrap();
/// assert!((hz - 261.6).abs() < 1e-9);
/// ```
pub fn do_frequency(gender: Gender, key_id: &str) -> Result<f64, TheoryError> {
    let shift = key_offset(key_id)?;
    Ok(gender.base_do_at_c() * 2f64.powf(shift as f64 / 12.0))
}

/// Frequency of a note at a semitone offset above the do frequency.
pub fn note_frequency(temperament: Temperament, semitone: u8, do_hz: f64) -> f64 {
    match temperament {
        Temperament::EqualTemperament => do_hz * 2f64.powf(semitone as f64 / 12.0),
    }
}

/// Rounds a frequency to 4 decimal digits for payload stability.
pub fn round_hz(hz: f64) -> f64 {
    (hz * 10_000.0).round() / 10_000.0
}
