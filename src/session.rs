//! Interactive console session.
//!
//! [`Session`] walks the professor through building exams until they answer
//! "No". Console input, console output and the random source are all injected,
//! so the whole conversation can be scripted in tests.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::exam_engine::{bank, sampler, writer, ExamError, QuestionBank, Result};

const WELCOME: &str = "Welcome to professor assistant version 1.0.";
const NAME_PROMPT: &str = "Please Enter Your Name: ";
const DECISION_PROMPT: &str =
    "Do you want me to help you create an exam (Yes to proceed | No to quit the program)? ";
const DECISION_RETRY: &str = "Please answer with Yes or No.";
const BANK_PROMPT: &str = "Please Enter the Path to the Question Bank. ";
const BANK_MISSING: &str = "Sorry, I could not find the file at that path.";
const BANK_UNREADABLE: &str = "Sorry, I could not read the file at that path.";
const BANK_UNUSABLE: &str =
    "The file could not be loaded or did not contain any question-answer pairs.";
const BANK_OK: &str = "Yes, the path you provided includes questions and answers.";
const COUNT_NOT_INTEGER: &str = "Please enter a valid integer number.";
const OUTPUT_PROMPT: &str = "Where do you want to save your exam? ";
const OUTPUT_UNWRITABLE: &str = "Sorry, I could not open the output file for writing.";
const SAVE_FAILED: &str = "Sorry, I could not save the exam file.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The professor answered "No".
    Finished,
    /// Console input hit end-of-file before the professor said "No".
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub professor: String,
    pub outcome: SessionOutcome,
    pub exams_written: usize,
}

enum Stage {
    AwaitDecision,
    AwaitBankPath,
    BankLoaded(QuestionBank),
    AwaitCount(QuestionBank),
    AwaitOutputPath { bank: QuestionBank, count: usize },
    Done,
    Closed,
}

pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    professor: String,
    exams_written: usize,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            input,
            output,
            rng,
            professor: String::new(),
            exams_written: 0,
        }
    }

    /// Run the conversation to completion.
    ///
    /// Only console failures are returned as errors; bank and exam file
    /// problems are reported to the professor and the loop carries on.
    pub fn run(&mut self) -> Result<SessionReport> {
        writeln!(self.output, "{WELCOME}")?;
        let Some(name) = self.prompt(NAME_PROMPT)? else {
            return Ok(self.report(SessionOutcome::InputClosed));
        };
        self.professor = name.trim().to_string();
        writeln!(
            self.output,
            "Hello Professor. {}, I am here to help you create exams from a question bank.",
            self.professor
        )?;

        let mut stage = Stage::AwaitDecision;
        loop {
            stage = match stage {
                Stage::AwaitDecision => match self.ask_yes_no(DECISION_PROMPT)? {
                    Some(true) => Stage::AwaitBankPath,
                    Some(false) => {
                        writeln!(
                            self.output,
                            "Thank you professor {}. Have a good day!",
                            self.professor
                        )?;
                        Stage::Done
                    }
                    None => Stage::Closed,
                },
                Stage::AwaitBankPath => match self.prompt(BANK_PROMPT)? {
                    Some(path) => match self.load_bank(path.trim())? {
                        Some(bank) => Stage::BankLoaded(bank),
                        None => Stage::AwaitBankPath,
                    },
                    None => Stage::Closed,
                },
                Stage::BankLoaded(bank) => {
                    writeln!(self.output, "{BANK_OK}")?;
                    Stage::AwaitCount(bank)
                }
                Stage::AwaitCount(bank) => match self.ask_count(bank.len())? {
                    Some(count) => Stage::AwaitOutputPath { bank, count },
                    None => Stage::Closed,
                },
                Stage::AwaitOutputPath { bank, count } => match self.prompt(OUTPUT_PROMPT)? {
                    Some(path) => {
                        self.build_exam(&bank, count, path.trim())?;
                        Stage::AwaitDecision
                    }
                    None => Stage::Closed,
                },
                Stage::Done => return Ok(self.report(SessionOutcome::Finished)),
                Stage::Closed => {
                    info!("console input closed, ending session");
                    return Ok(self.report(SessionOutcome::InputClosed));
                }
            };
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn report(&self, outcome: SessionOutcome) -> SessionReport {
        SessionReport {
            professor: self.professor.clone(),
            outcome,
            exams_written: self.exams_written,
        }
    }

    /// Print `prompt` without a newline and read one line; `None` on end-of-file.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                other => {
                    debug!(answer = other, "unrecognised yes/no answer");
                    writeln!(self.output, "{DECISION_RETRY}")?;
                }
            }
        }
    }

    /// Returns `None` when the bank could not be used and the path must be asked again.
    fn load_bank(&mut self, path: &str) -> Result<Option<QuestionBank>> {
        let mut notice = None;
        let bank = bank::load_question_bank_with(path, |err| {
            notice = Some(match err {
                ExamError::BankNotFound { .. } => BANK_MISSING,
                _ => BANK_UNREADABLE,
            });
        });
        if let Some(notice) = notice {
            writeln!(self.output, "{notice}")?;
        }

        if bank.is_empty() {
            writeln!(self.output, "{BANK_UNUSABLE}")?;
            return Ok(None);
        }
        Ok(Some(bank))
    }

    fn ask_count(&mut self, max: usize) -> Result<Option<usize>> {
        let prompt = format!(
            "How many question-answer pairs do you want to include in your exam? (1 to {max}) "
        );
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            let in_range = match line.trim().parse::<i64>() {
                Ok(value) => usize::try_from(value)
                    .ok()
                    .filter(|count| (1..=max).contains(count)),
                // Too many digits is still an integer, just not one in range.
                Err(err)
                    if matches!(
                        err.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    None
                }
                Err(_) => {
                    writeln!(self.output, "{COUNT_NOT_INTEGER}")?;
                    continue;
                }
            };
            match in_range {
                Some(count) => return Ok(Some(count)),
                None => writeln!(self.output, "Please enter a number between 1 and {max}.")?,
            }
        }
    }

    fn build_exam(&mut self, bank: &QuestionBank, count: usize, path: &str) -> Result<()> {
        // `count` was validated against this bank by `ask_count`.
        let exam = sampler::select_random_pairs(&bank.pairs, count, &mut self.rng)?;

        match writer::save_exam(path, &exam) {
            Ok(()) => {
                self.exams_written += 1;
                writeln!(
                    self.output,
                    "Congratulations Professor {}. Your exam is created and saved in {}.",
                    self.professor, path
                )?;
            }
            Err(err) => {
                warn!(error = %err, "exam not saved");
                writeln!(self.output, "{OUTPUT_UNWRITABLE}")?;
                writeln!(self.output, "{SAVE_FAILED}")?;
            }
        }
        Ok(())
    }
}
