//! End-to-end properties of generated sessions across the module catalog:
//! question counts and ids, adjacency constraints, sort answers, enharmonic
//! acceptance, and generation-time sample mapping.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use tonicear_samples::builtin::{builtin_manifest, Instrument};
use tonicear_session::catalog::modules;
use tonicear_session::generate::{generate_session, MappingConfig, SessionRequest};
use tonicear_session::question::{CorrectAnswer, QuestionChoices};

fn request(module_id: &str, seed: u32) -> SessionRequest {
    SessionRequest {
        module_id: module_id.to_string(),
        gender: "male".to_string(),
        key: "C".to_string(),
        temperament: "equal_temperament".to_string(),
        instrument: "piano".to_string(),
        seed: Some(seed),
    }
}

#[test]
fn test_every_module_yields_twenty_unique_questions() {
    for module in modules() {
        let session = generate_session(&request(&module.id, 11), None).unwrap();
        assert_eq!(session.questions.len(), 20, "module {}", module.id);

        let ids: HashSet<&str> = session
            .questions
            .iter()
            .map(|question| question.id.as_str())
            .collect();
        assert_eq!(ids.len(), 20, "duplicate question ids in {}", module.id);

        for question in &session.questions {
            assert_eq!(question.question_type, module.question_type);
            assert_eq!(
                question.notes.len(),
                module.question_type.note_count(),
                "wrong note count in {}",
                module.id
            );
        }
    }
}

#[test]
fn test_compare_proximity_levels_honor_spacing() {
    for (module_id, spacing) in [("M2-L5", 2u8), ("M2-L6", 1u8)] {
        for seed in 0..20 {
            let session = generate_session(&request(module_id, seed), None).unwrap();
            for question in &session.questions {
                let a = question.notes[0].semitone;
                let b = question.notes[1].semitone;
                // The chromatic pool always holds exact-spacing pairs, so
                // the fallback never fires here.
                assert_eq!(a.abs_diff(b), spacing, "module {} seed {}", module_id, seed);
            }
        }
    }
}

#[test]
fn test_sort_proximity_levels_form_runs() {
    for (module_id, count, spacing) in [("M3-L5", 3usize, 2u8), ("M4-L6", 4, 1)] {
        let session = generate_session(&request(module_id, 23), None).unwrap();
        for question in &session.questions {
            let mut semitones: Vec<u8> =
                question.notes.iter().map(|note| note.semitone).collect();
            semitones.sort_unstable();
            assert_eq!(semitones.len(), count);
            for pair in semitones.windows(2) {
                assert_eq!(pair[1] - pair[0], spacing, "module {}", module_id);
            }
        }
    }
}

#[test]
fn test_sort_answer_permutation_sorts_ascending() {
    for module_id in ["M3-L1", "M3-L4", "M4-L2", "M4-L6"] {
        for seed in 0..10 {
            let session = generate_session(&request(module_id, seed), None).unwrap();
            for question in &session.questions {
                let answer = match &question.correct_answer {
                    CorrectAnswer::Text(text) => text,
                    other => panic!("sort answer should be text, got {:?}", other),
                };
                let order: Vec<usize> = answer
                    .split('-')
                    .map(|position| position.parse::<usize>().unwrap() - 1)
                    .collect();

                // The answer must be a permutation of 0..N.
                let mut check: Vec<usize> = order.clone();
                check.sort_unstable();
                assert_eq!(check, (0..question.notes.len()).collect::<Vec<_>>());

                // Applying it to the presentation order sorts the pitches.
                let sorted: Vec<u8> = order
                    .iter()
                    .map(|&index| question.notes[index].semitone)
                    .collect();
                for pair in sorted.windows(2) {
                    assert!(pair[0] < pair[1], "answer {} does not sort", answer);
                }
            }
        }
    }
}

#[test]
fn test_compare_answer_matches_semitones() {
    let session = generate_session(&request("M2-L3", 31), None).unwrap();
    for question in &session.questions {
        let expected = if question.notes[0].semitone > question.notes[1].semitone {
            "first_higher"
        } else {
            "second_higher"
        };
        assert_eq!(
            question.correct_answer,
            CorrectAnswer::Text(expected.to_string())
        );
        match &question.choices {
            QuestionChoices::Options(options) => {
                let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
                assert_eq!(ids, vec!["first_higher", "second_higher"]);
            }
            other => panic!("unexpected choices {:?}", other),
        }
    }
}

#[test]
fn test_interval_answer_is_degree_distance() {
    let session = generate_session(&request("MI-L2", 5), None).unwrap();
    for question in &session.questions {
        let distance = question.notes[0].degree.abs_diff(question.notes[1].degree);
        assert_eq!(
            question.correct_answer,
            CorrectAnswer::Text(distance.to_string())
        );

        match &question.choices {
            QuestionChoices::Distances(choices) => {
                // Pentatonic degrees {1,2,3,5,6} admit distances 1..=5.
                let offered: Vec<&str> = choices.iter().map(String::as_str).collect();
                assert_eq!(offered, vec!["1", "2", "3", "4", "5"]);
                assert!(choices.contains(&distance.to_string()));
            }
            other => panic!("unexpected choices {:?}", other),
        }
    }
}

#[test]
fn test_single_note_enharmonic_acceptance() {
    let session = generate_session(&request("MS-L4", 13), None).unwrap();
    let mut saw_enharmonic = false;
    let mut saw_plain = false;

    for question in &session.questions {
        let note = &question.notes[0];
        let answer = match &question.correct_answer {
            CorrectAnswer::Spelling(answer) => answer,
            other => panic!("single-note answer should be a spelling, got {:?}", other),
        };
        assert_eq!(answer.degree, note.degree.to_string());
        assert_eq!(answer.accidental, note.accidental);

        match &note.enharmonic {
            Some(enharmonic) => {
                saw_enharmonic = true;
                let accepted = answer.accepted.as_ref().expect("enharmonic not accepted");
                assert_eq!(accepted.len(), 1);
                assert_eq!(accepted[0].degree, enharmonic.degree.to_string());
                assert_eq!(accepted[0].accidental, enharmonic.accidental);
            }
            None => {
                saw_plain = true;
                assert!(answer.accepted.is_none());
            }
        }
    }

    // 20 draws from the chromatic pool hit both spellings in practice;
    // the fixed seed makes this assertion stable.
    assert!(saw_enharmonic && saw_plain);
}

#[test]
fn test_single_note_accidental_choices_by_level() {
    let chromatic = generate_session(&request("MS-L4", 3), None).unwrap();
    for question in &chromatic.questions {
        match &question.choices {
            QuestionChoices::SingleNote(choices) => {
                let tokens: Vec<&str> =
                    choices.accidentals.iter().map(|a| a.as_str()).collect();
                assert_eq!(tokens, vec!["flat", "natural", "sharp"]);
                assert!(choices.requires_accidental);
                assert_eq!(choices.degrees.len(), 7);
            }
            other => panic!("unexpected choices {:?}", other),
        }
    }

    let diatonic = generate_session(&request("MS-L3", 3), None).unwrap();
    for question in &diatonic.questions {
        match &question.choices {
            QuestionChoices::SingleNote(choices) => {
                let tokens: Vec<&str> =
                    choices.accidentals.iter().map(|a| a.as_str()).collect();
                assert_eq!(tokens, vec!["natural"]);
                assert!(!choices.requires_accidental);
            }
            other => panic!("unexpected choices {:?}", other),
        }
    }
}

#[test]
fn test_triad_module_end_to_end() {
    let session = generate_session(&request("M2-L1", 17), None).unwrap();
    assert_eq!(session.settings.do_frequency, 130.8);

    let allowed: HashSet<&str> = ["1", "3", "5"].into_iter().collect();
    for question in &session.questions {
        for note in &question.notes {
            assert!(allowed.contains(note.token.as_str()), "token {}", note.token);
            let expected = match note.token.as_str() {
                "1" => 130.8,
                "3" => 164.7977,
                "5" => 195.9786,
                other => panic!("unexpected token {}", other),
            };
            assert!((note.frequency - expected).abs() < 5e-4);
        }
    }
}

#[test]
fn test_female_sessions_run_an_octave_up() {
    let mut req = request("M2-L1", 21);
    req.gender = "female".to_string();
    let female = generate_session(&req, None).unwrap();
    let male = generate_session(&request("M2-L1", 21), None).unwrap();
    assert!((female.settings.do_frequency - 2.0 * male.settings.do_frequency).abs() < 1e-9);
}

#[test]
fn test_generation_time_mapping_attaches_samples() {
    let manifest = builtin_manifest(Instrument::Piano);
    let mapping = MappingConfig::new(&manifest);
    let session = generate_session(&request("M4-L4", 29), Some(&mapping)).unwrap();

    for question in &session.questions {
        for note in &question.notes {
            let sample_id = note.sample_id.as_ref().expect("sample not attached");
            let entry = manifest.by_id(sample_id).unwrap();
            assert_eq!(note.midi, entry.midi);
            // The builtin grid is dense enough that the mapped sample is
            // within a cent of the requested pitch.
            let cents = 1200.0 * (note.frequency / entry.hz).log2();
            assert!(cents.abs() < 1.0);
        }
    }
}

#[test]
fn test_unmapped_sessions_leave_samples_to_playback() {
    let session = generate_session(&request("M2-L1", 29), None).unwrap();
    for question in &session.questions {
        for note in &question.notes {
            assert!(note.sample_id.is_none());
            assert!(note.midi.is_none());
        }
    }
}

#[test]
fn test_session_wire_format() {
    let session = generate_session(&request("M3-L1", 1), None).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&session.to_json().unwrap()).unwrap();

    assert!(json["sessionId"].is_string());
    assert_eq!(json["settings"]["moduleId"], "M3-L1");
    assert_eq!(json["settings"]["effectiveNotePoolLevel"], "L1");
    assert_eq!(json["settings"]["questionType"], "sort_three");
    assert_eq!(json["settings"]["temperament"], "equal_temperament");
    assert_eq!(json["settings"]["questionCount"], 20);
    assert_eq!(json["questions"].as_array().unwrap().len(), 20);

    let first = &json["questions"][0];
    assert_eq!(first["id"], "M3-L1-Q1");
    assert_eq!(first["type"], "sort_three");
    assert_eq!(first["choices"]["format"], "index_sequence");
    assert_eq!(first["visualHints"].as_array().unwrap().len(), 3);
    for hint in first["visualHints"].as_array().unwrap() {
        let height = hint["height"].as_f64().unwrap();
        assert!((10.0..=90.0).contains(&height));
    }
}

#[test]
fn test_visual_hints_follow_pitch_order() {
    let session = generate_session(&request("M4-L3", 37), None).unwrap();
    for question in &session.questions {
        assert_eq!(question.visual_hints.len(), question.notes.len());
        let mut indexed: Vec<(u8, f64)> = question
            .notes
            .iter()
            .zip(&question.visual_hints)
            .map(|(note, hint)| (note.semitone, hint.height))
            .collect();
        indexed.sort_by_key(|(semitone, _)| *semitone);
        for pair in indexed.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
    }
}

#[test]
fn test_single_note_has_no_visual_hints() {
    let session = generate_session(&request("MS-L1", 2), None).unwrap();
    for question in &session.questions {
        assert!(question.visual_hints.is_empty());
    }
}
