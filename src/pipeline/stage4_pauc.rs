use std::cmp::Ordering;

use thiserror::Error;

use crate::model::pairs::{Direction, PairRecord, Totals};

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error(
        "score undefined: {total_true} positive and {total_false} negative non-paralog pairs (both must be > 0)"
    )]
    Degenerate { total_true: u64, total_false: u64 },
}

#[derive(Debug, Clone, Copy)]
pub struct Stage4Params {
    /// False-positive-rate bound in (0, 1].
    pub fpr: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaucResult {
    /// pAUC / fpr^2.
    pub normalized_score: f64,
    pub pauc: f64,
    /// Value of the record at which the walk crossed the bound; 0 if it never did.
    pub coex_threshold: f64,
    pub threshold_fp: f64,
    pub crossed: bool,
    /// Number of ranked records visited, excluded ones included.
    pub stop_rank: usize,
    pub x_at_stop: f64,
    pub y_at_stop: f64,
}

/// Stable rank order: by value in the requested direction, ties by sequence id.
pub fn rank_records(records: &[PairRecord], direction: Direction) -> Vec<PairRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| {
        let by_value = match direction {
            Direction::LargerIsBetter => b.value.total_cmp(&a.value),
            Direction::SmallerIsBetter => a.value.total_cmp(&b.value),
        };
        match by_value {
            Ordering::Equal => a.sequence_id.cmp(&b.sequence_id),
            other => other,
        }
    });
    ranked
}

pub fn run_stage4(
    records: &[PairRecord],
    totals: Totals,
    params: &Stage4Params,
) -> Result<PaucResult, ScoreError> {
    if totals.total_true == 0 || totals.total_false == 0 {
        return Err(ScoreError::Degenerate {
            total_true: totals.total_true,
            total_false: totals.total_false,
        });
    }

    let ranked = rank_records(records, params.direction);
    let threshold_fp = params.fpr * totals.total_false as f64;

    let (mut px, mut py) = (0.0f64, 0.0f64);
    let (mut x, mut y) = (0.0f64, 0.0f64);
    let mut area = 0.0f64;
    let mut coex_threshold = 0.0f64;
    let mut crossed = false;
    let mut stop_rank = ranked.len();

    for (rank, record) in ranked.iter().enumerate() {
        if record.excluded {
            continue;
        }
        if record.is_positive {
            y += 1.0;
        } else {
            x += 1.0;
        }

        if x < threshold_fp {
            area += trapezoid(px, py, x, y);
            px = x;
            py = y;
            continue;
        }

        // threshold_fp > 0, so the crossing step always moved x.
        let frac = (threshold_fp - px) / (x - px);
        let xi = px + frac * (x - px);
        let yi = py + frac * (y - py);
        area += trapezoid(px, py, xi, yi);
        x = xi;
        y = yi;
        coex_threshold = record.value;
        crossed = true;
        stop_rank = rank + 1;
        break;
    }

    let pauc = area / (totals.total_true as f64 * totals.total_false as f64);
    let normalized_score = pauc / (params.fpr * params.fpr);

    tracing::debug!(
        threshold_fp,
        stop_rank,
        crossed,
        area,
        "partial AUC integration"
    );

    Ok(PaucResult {
        normalized_score,
        pauc,
        coex_threshold,
        threshold_fp,
        crossed,
        stop_rank,
        x_at_stop: x,
        y_at_stop: y,
    })
}

fn trapezoid(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x1 - x0) * (y1 + y0) / 2.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_pauc.rs"]
mod tests;
