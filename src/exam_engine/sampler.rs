use rand::Rng;
use tracing::debug;

use crate::exam_engine::{
    error::{ExamError, Result},
    models::{Exam, QaPair},
};

/// Draw `count` distinct pairs from `pairs` using `rng`.
///
/// Keeps a shrinking pool of unused indices and removes one uniformly random
/// position per draw, so no pair is picked twice.
pub fn select_random_pairs<R: Rng + ?Sized>(
    pairs: &[QaPair],
    count: usize,
    rng: &mut R,
) -> Result<Exam> {
    if count == 0 || count > pairs.len() {
        return Err(ExamError::InvalidCount {
            requested: count,
            available: pairs.len(),
        });
    }

    let mut available: Vec<usize> = (0..pairs.len()).collect();
    let mut selected = Vec::with_capacity(count);

    for _ in 0..count {
        let position = rng.gen_range(0..available.len());
        let index = available.remove(position);
        selected.push(pairs[index].clone());
    }

    debug!(requested = count, available = pairs.len(), "pairs selected");
    Ok(Exam { pairs: selected })
}
