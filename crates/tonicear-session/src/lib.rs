//! Tonic Ear session generation library.
//!
//! Builds deterministic, constrained ear-training quiz sessions. A session
//! is 20 self-contained questions drawn from a difficulty level's note
//! pool under the module's rules: two-note comparison, three/four-note
//! sorting, scale-step distance, or single-note naming, with the proximity
//! levels constraining the semitone spacing of what gets drawn.
//!
//! Generation is a pure function of the request plus one `u32` seed; all
//! randomness flows through [`rng`] so tests reproduce exact sessions.
//!
//! # Example
//!
//! ```
//! use tonicear_session::generate::{generate_session, SessionRequest};
//!
//! let request = SessionRequest {
//!     module_id: "MS-L4".to_string(),
//!     gender: "male".to_string(),
//!     key: "C".to_string(),
//!     temperament: "equal_temperament".to_string(),
//!     instrument: "piano".to_string(),
//!     seed: Some(7),
//! };
//! let session = generate_session(&request, None).unwrap();
//! assert_eq!(session.questions.len(), 20);
//! for question in &session.questions {
//!     assert_eq!(question.notes.len(), 1);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod generate;
pub mod meta;
pub mod pick;
pub mod question;
pub mod rng;

// Re-export commonly used types at the crate root
pub use catalog::{module_by_id, modules, ModuleConfig, QuestionType, QUESTION_COUNT};
pub use error::{SessionError, SessionResult};
pub use generate::{
    generate_session, resolve_note_pool_level, MappingConfig, Session, SessionRequest,
    SessionSettings,
};
pub use meta::{meta, Meta};
pub use question::{
    CorrectAnswer, NotePayload, Question, QuestionChoices, SingleNoteAnswer, VisualHint,
};
