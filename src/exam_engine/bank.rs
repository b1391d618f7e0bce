use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::exam_engine::{
    error::{ExamError, Result},
    models::QuestionBank,
};

/// Read and pair the bank at `path`.
///
/// A missing file maps to [`ExamError::BankNotFound`]; every other I/O or UTF-8
/// failure maps to [`ExamError::BankUnreadable`].
pub fn try_load(path: impl AsRef<Path>) -> Result<QuestionBank> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading question bank");

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExamError::BankNotFound {
            path: path.to_path_buf(),
        },
        _ => ExamError::BankUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let bank = QuestionBank::parse(&text);
    info!(path = %path.display(), pairs = bank.len(), "question bank loaded");
    Ok(bank)
}

/// Soft variant of [`try_load`]: failures are logged and yield an empty bank.
///
/// Callers treat an empty bank as unusable.
pub fn load_question_bank(path: impl AsRef<Path>) -> QuestionBank {
    load_question_bank_with(path, |_| {})
}

/// Like [`load_question_bank`], but hands the failure to `on_error` first so
/// the caller can tell the user what went wrong.
pub fn load_question_bank_with(
    path: impl AsRef<Path>,
    on_error: impl FnOnce(&ExamError),
) -> QuestionBank {
    match try_load(path) {
        Ok(bank) => bank,
        Err(err) => {
            warn!(error = %err, "question bank unavailable");
            on_error(&err);
            QuestionBank::default()
        }
    }
}
