use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question / answer primitives
// ---------------------------------------------------------------------------

/// One question and its answer, taken from two consecutive lines of a bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl fmt::Display for QaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q: {} / A: {}", self.question, self.answer)
    }
}

// ---------------------------------------------------------------------------
// Bank / exam collections
// ---------------------------------------------------------------------------

/// Ordered pairs loaded from a bank file. Position in the file is the only identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub pairs: Vec<QaPair>,
}

impl QuestionBank {
    /// Pair up consecutive lines of `text`; a trailing unpaired line is dropped.
    ///
    /// `\r\n`, a lone `\r` and `\n` all end a line, so no `\r` survives in
    /// pair text.
    pub fn parse(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split_terminator('\n').collect();
        let pairs = lines
            .chunks_exact(2)
            .map(|chunk| QaPair::new(chunk[0], chunk[1]))
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Vec<QaPair>> for QuestionBank {
    fn from(pairs: Vec<QaPair>) -> Self {
        Self { pairs }
    }
}

/// Pairs drawn from a bank without replacement, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub pairs: Vec<QaPair>,
}

impl Exam {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render in the bank file format: question line, answer line, repeated.
    pub fn to_bank_text(&self) -> String {
        let mut out = String::new();
        for pair in &self.pairs {
            out.push_str(&pair.question);
            out.push('\n');
            out.push_str(&pair.answer);
            out.push('\n');
        }
        out
    }
}
