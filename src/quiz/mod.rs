//! The quiz side of a drill session.
//!
//! # Components
//!
//! - `question`: questions and the seeded question generator
//! - `console`: prompts, feedback and answer reading
//! - `worker`: the blocking loop feeding scored answers to the session

pub mod console;
pub mod question;
pub mod worker;

pub use console::Console;
pub use question::{Question, QuestionGenerator};
pub use worker::{run_quiz, QuizStop};
