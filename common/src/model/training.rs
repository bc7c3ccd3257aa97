use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pipeline::Named;

/// A catalog training course. Courses with a renewal frequency lapse and
/// show up again on the training dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCourse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub renewal_frequency_years: Option<u32>,
}

/// One volunteer's training record for a single course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAssignment {
    pub name: String,
    #[serde(default)]
    pub completed_on: Option<NaiveDate>,
    #[serde(default)]
    pub needs_retraining: bool,
}

impl Named for TrainingCourse {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for TrainingAssignment {
    fn name(&self) -> &str {
        &self.name
    }
}
