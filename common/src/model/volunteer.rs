use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A volunteer as delivered by the REST collaborator.
///
/// Archived volunteers stay on the books for record keeping but are
/// excluded from the upcoming/outstanding dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub is_archived: bool,
}
