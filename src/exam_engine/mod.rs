//! Exam engine: bank loading, random selection, and exam output.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | `QaPair`, `QuestionBank`, `Exam` |
//! | `bank`    | Read a bank file and pair consecutive lines |
//! | `sampler` | Draw unique pairs with an injected RNG |
//! | `writer`  | Write an exam back out in the bank format |
//! | `error`   | `ExamError` shared by all of the above |

pub mod bank;
pub mod error;
pub mod models;
pub mod sampler;
pub mod writer;

pub use bank::{load_question_bank, load_question_bank_with, try_load};
pub use error::{ExamError, Result};
pub use models::{Exam, QaPair, QuestionBank};
pub use sampler::select_random_pairs;
pub use writer::save_exam;
