use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeScore {
    pub judge_id: String,
    pub score: f64,
}

/// One scored run. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRun {
    pub run_id: Uuid,
    pub participant_id: Uuid,
    pub judge_scores: Vec<JudgeScore>,
    pub final_score: f64,
    pub timestamp: NaiveDateTime,
}
