use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pipeline::Named;

/// A catalog award (e.g. "5 Year Service"), used to build filter options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub required_service_years: Option<u32>,
}

/// One volunteer's linkage to an award: achieved when the service length
/// qualifies, given once the physical award has been handed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardAssignment {
    pub name: String,
    #[serde(default)]
    pub achieved_date: Option<NaiveDate>,
    #[serde(default)]
    pub given_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_given: bool,
}

impl Named for Award {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for AwardAssignment {
    fn name(&self) -> &str {
        &self.name
    }
}
