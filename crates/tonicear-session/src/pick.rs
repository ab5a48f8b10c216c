//! Constrained note selection.
//!
//! The proximity levels require an exact semitone spacing between the
//! notes of a question. Selection is an explicit two-step algorithm:
//! enumerate every exact-spacing candidate and choose one uniformly, then
//! branch to unconstrained sampling when no candidate exists. The fallback
//! is a normal code path; generation must never fail just because the pool
//! holds no exact-spacing combination for the requested shape.

use rand::seq::SliceRandom;
use rand::Rng;
use tonicear_theory::note::ScaleDegreeNote;

use crate::error::SessionError;

/// Draws `count` distinct notes uniformly, in random order.
///
/// Fisher-Yates over the index set; every unordered subset and every
/// ordering of it is equally likely. Requesting more notes than the pool
/// holds is a caller bug and fails loudly.
pub fn sample_distinct<'a, R: Rng>(
    rng: &mut R,
    pool: &[&'a ScaleDegreeNote],
    count: usize,
) -> Result<Vec<&'a ScaleDegreeNote>, SessionError> {
    if count > pool.len() {
        return Err(SessionError::PoolTooSmall {
            requested: count,
            available: pool.len(),
        });
    }
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    indices.shuffle(rng);
    Ok(indices[..count].iter().map(|&i| pool[i]).collect())
}

/// All unordered pairs whose semitone distance equals `spacing`.
fn spaced_pairs<'a>(
    pool: &[&'a ScaleDegreeNote],
    spacing: u8,
) -> Vec<(&'a ScaleDegreeNote, &'a ScaleDegreeNote)> {
    let mut pairs = Vec::new();
    for (index, left) in pool.iter().enumerate() {
        for right in &pool[index + 1..] {
            if left.semitone.abs_diff(right.semitone) == spacing {
                pairs.push((*left, *right));
            }
        }
    }
    pairs
}

/// All ascending semitone progressions of `count` pool members with a
/// fixed step of `spacing`, one candidate per viable starting semitone.
fn spaced_runs<'a>(
    pool: &[&'a ScaleDegreeNote],
    count: usize,
    spacing: u8,
) -> Vec<Vec<&'a ScaleDegreeNote>> {
    let mut by_semitone: [Option<&'a ScaleDegreeNote>; 12] = [None; 12];
    for &note in pool {
        by_semitone[note.semitone as usize] = Some(note);
    }

    let mut runs = Vec::new();
    for start in pool.iter().map(|note| note.semitone) {
        let members: Option<Vec<&'a ScaleDegreeNote>> = (0..count)
            .map(|step| {
                let semitone = start as usize + step * spacing as usize;
                by_semitone.get(semitone).copied().flatten()
            })
            .collect();
        if let Some(run) = members {
            runs.push(run);
        }
    }
    runs
}

/// Picks two notes with the exact spacing, in random presentation order.
///
/// Falls back to unconstrained sampling when the pool holds no such pair.
pub fn pick_spaced_pair<'a, R: Rng>(
    rng: &mut R,
    pool: &[&'a ScaleDegreeNote],
    spacing: u8,
) -> Result<Vec<&'a ScaleDegreeNote>, SessionError> {
    let candidates = spaced_pairs(pool, spacing);
    match candidates.choose(rng) {
        Some((left, right)) => {
            let mut picked = vec![*left, *right];
            picked.shuffle(rng);
            Ok(picked)
        }
        None => sample_distinct(rng, pool, 2),
    }
}

/// Picks `count` notes forming an exact-spacing progression, shuffled for
/// presentation.
///
/// Falls back to unconstrained sampling when no full progression exists.
pub fn pick_spaced_run<'a, R: Rng>(
    rng: &mut R,
    pool: &[&'a ScaleDegreeNote],
    count: usize,
    spacing: u8,
) -> Result<Vec<&'a ScaleDegreeNote>, SessionError> {
    let candidates = spaced_runs(pool, count, spacing);
    match candidates.choose(rng) {
        Some(run) => {
            let mut picked = run.clone();
            picked.shuffle(rng);
            Ok(picked)
        }
        None => sample_distinct(rng, pool, count),
    }
}
