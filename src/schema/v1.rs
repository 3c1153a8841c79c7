use serde::{Deserialize, Serialize};

/// One instruction-tuning example. Field order is part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub instruction: String,
    pub integer: Vec<i64>,
    pub output: String,
}
