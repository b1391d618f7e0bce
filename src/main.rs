use std::io;

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use professor_assistant::{logger, Config, Session};

fn main() -> Result<()> {
    let config = Config::from_env();
    logger::init(&config);

    let rng = match config.rng_seed {
        Some(seed) => {
            info!(seed, "using fixed seed for exam selection");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), rng);
    let report = session.run().context("console session failed")?;

    info!(
        professor = %report.professor,
        outcome = ?report.outcome,
        exams_written = report.exams_written,
        "session ended"
    );
    Ok(())
}
