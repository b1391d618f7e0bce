//! # professor_assistant
//!
//! Build randomised exams from a plain-text question bank.
//!
//! A bank is a UTF-8 file where every two consecutive lines form one
//! question/answer pair. An exam is a random selection of those pairs, drawn
//! without replacement and written back out in the same format, so every exam
//! is itself a valid bank.
//!
//! ## How it works
//!
//! 1. [`try_load`] (or the forgiving [`load_question_bank`]) reads a bank.
//! 2. [`select_random_pairs`] draws the requested number of unique pairs
//!    using whatever [`rand::Rng`] the caller passes in.
//! 3. [`save_exam`] writes the selection to disk.
//! 4. [`Session`] ties the three together behind the interactive prompts used
//!    by the `professor_assistant` binary.
//!
//! ## Quick start
//!
//! ```rust
//! use professor_assistant::{select_random_pairs, QuestionBank};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bank = QuestionBank::parse("Q1\nA1\nQ2\nA2\nQ3\nA3\n");
//! let mut rng = StdRng::seed_from_u64(42);
//! let exam = select_random_pairs(&bank.pairs, 2, &mut rng).unwrap();
//!
//! assert_eq!(exam.len(), 2);
//! print!("{}", exam.to_bank_text());
//! ```

pub mod config;
pub mod exam_engine;
pub mod logger;
pub mod session;

pub use config::Config;
pub use exam_engine::{
    load_question_bank, load_question_bank_with, save_exam, select_random_pairs, try_load, Exam,
    ExamError, QaPair, QuestionBank, Result,
};
pub use session::{Session, SessionOutcome, SessionReport};
