use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExamError {
    #[error("question bank not found: {}", path.display())]
    BankNotFound { path: PathBuf },
    #[error("could not read question bank {}", path.display())]
    BankUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot select {requested} pairs from a bank of {available}")]
    InvalidCount { requested: usize, available: usize },
    #[error("could not write exam to {}", path.display())]
    ExamWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("console I/O failed")]
    Console(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExamError>;
