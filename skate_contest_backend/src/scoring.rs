use itertools::Itertools;
use ordered_float::NotNan;
use skate_contest_entities::prelude::JudgeScore;
use thiserror::Error;

/// With fewer judges nothing would remain after trimming.
pub const MIN_JUDGE_COUNT: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum ScoringError {
    #[error("At least {MIN_JUDGE_COUNT} judge scores are required, got {0}")]
    InvalidScoreCount(usize),
    #[error("Judge score {0} is not a finite number")]
    InvalidScore(f64),
    #[error("Scores are too far apart to average")]
    NonFiniteResult,
}

/// Mean of `scores` after dropping one lowest and one highest value.
pub fn trimmed_mean(scores: &[f64]) -> Result<f64, ScoringError> {
    if scores.len() < MIN_JUDGE_COUNT {
        return Err(ScoringError::InvalidScoreCount(scores.len()));
    }

    let sorted = scores
        .iter()
        .map(|s| {
            NotNan::new(*s)
                .ok()
                .filter(|v| v.is_finite())
                .ok_or(ScoringError::InvalidScore(*s))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    // running mean, a plain sum overflows for scores near f64::MAX
    let mean = sorted[1..sorted.len() - 1]
        .iter()
        .enumerate()
        .fold(0.0, |acc, (idx, s)| acc + (s.into_inner() - acc) / (idx + 1) as f64);

    if mean.is_finite() {
        Ok(mean)
    } else {
        Err(ScoringError::NonFiniteResult)
    }
}

pub fn final_score(judge_scores: &[JudgeScore]) -> Result<f64, ScoringError> {
    trimmed_mean(&judge_scores.iter().map(|s| s.score).collect_vec())
}
