use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::exam_engine::{
    error::{ExamError, Result},
    models::Exam,
};

/// Write `exam` to `path` in the bank format, replacing any existing file.
///
/// The file is flushed before returning so that a late write error is still
/// reported as [`ExamError::ExamWrite`].
pub fn save_exam(path: impl AsRef<Path>, exam: &Exam) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ExamError::ExamWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for pair in &exam.pairs {
        writeln!(out, "{}", pair.question).map_err(write_err)?;
        writeln!(out, "{}", pair.answer).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    info!(path = %path.display(), pairs = exam.len(), "exam saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam_engine::{bank, models::QaPair, sampler::select_random_pairs};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn writes_question_then_answer_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam.txt");
        let exam = Exam {
            pairs: vec![QaPair::new("Q3", "A3"), QaPair::new("Q1", "A1")],
        };
        save_exam(&path, &exam).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Q3\nA3\nQ1\nA1\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam.txt");
        std::fs::write(&path, "old\ncontent\nmore\nlines\n").unwrap();
        let exam = Exam {
            pairs: vec![QaPair::new("Q", "A")],
        };
        save_exam(&path, &exam).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Q\nA\n");
    }

    #[test]
    fn sampled_exam_reloads_identically() {
        let dir = tempfile::tempdir().unwrap();
        let bank_path = dir.path().join("bank.txt");
        let exam_path = dir.path().join("exam.txt");
        std::fs::write(&bank_path, "Q1\nA1\nQ2\nA2\nQ3\nA3\n").unwrap();

        let bank = bank::try_load(&bank_path).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let exam = select_random_pairs(&bank.pairs, 2, &mut rng).unwrap();
        save_exam(&exam_path, &exam).unwrap();

        let reloaded = bank::try_load(&exam_path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.pairs, exam.pairs);
        assert!(reloaded.pairs.iter().all(|p| bank.pairs.contains(p)));
    }

    #[test]
    fn stray_carriage_returns_reload_identically() {
        let dir = tempfile::tempdir().unwrap();
        let bank_path = dir.path().join("bank.txt");
        let exam_path = dir.path().join("exam.txt");
        std::fs::write(&bank_path, "Q1\r\r\nA1\r\nQ2\rA2\r").unwrap();

        let bank = bank::try_load(&bank_path).unwrap();
        let exam = Exam { pairs: bank.pairs.clone() };
        save_exam(&exam_path, &exam).unwrap();

        assert_eq!(bank::try_load(&exam_path).unwrap(), bank);
    }

    #[test]
    fn unwritable_path_is_exam_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("exam.txt");
        let exam = Exam {
            pairs: vec![QaPair::new("Q", "A")],
        };
        match save_exam(&path, &exam) {
            Err(ExamError::ExamWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected ExamWrite, got {other:?}"),
        }
    }
}
