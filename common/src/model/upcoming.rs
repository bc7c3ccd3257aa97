//! Wire shapes for the upcoming/outstanding dashboard endpoints.
//!
//! Each endpoint groups items under the volunteer they belong to; the
//! pipeline flattens these groups into one row per (volunteer, item) pair.
//! Deserialization is deliberately tolerant: a missing sub-list decodes as
//! empty, and a missing volunteer marks the element as malformed so the
//! flattener can skip it instead of blanking the whole dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::award::AwardAssignment;
use crate::model::document::DocumentAssignment;
use crate::model::training::TrainingAssignment;
use crate::model::volunteer::Volunteer;
use crate::pipeline::RowSource;

/// Response element of `GET /api/volunteers/awards/upcoming/{days}`:
/// awards achieved but not yet given, plus awards achievable within the
/// horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsByVolunteer {
    #[serde(default)]
    pub volunteer: Option<Volunteer>,
    #[serde(default)]
    pub not_given: Vec<AwardAssignment>,
    #[serde(default)]
    pub upcoming: Vec<AwardAssignment>,
}

/// Response element of `GET /api/training/upcoming/{days}`: courses never
/// completed, plus courses lapsing within the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingByVolunteer {
    #[serde(default)]
    pub volunteer: Option<Volunteer>,
    #[serde(default)]
    pub missing: Vec<TrainingAssignment>,
    #[serde(default)]
    pub due: Vec<TrainingAssignment>,
}

/// Response element of `GET /api/outstanding-documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsByVolunteer {
    #[serde(default)]
    pub volunteer: Option<Volunteer>,
    #[serde(default)]
    pub missing: Vec<DocumentAssignment>,
}

/// Response element of `GET /api/volunteers/birthdays/upcoming/{days}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdaysByVolunteer {
    #[serde(default)]
    pub volunteer: Option<Volunteer>,
    #[serde(default)]
    pub upcoming: Vec<BirthdayItem>,
}

/// A birthday falling inside the horizon and the age being reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayItem {
    pub date: NaiveDate,
    #[serde(default)]
    pub turns: Option<u32>,
}

impl RowSource for AwardsByVolunteer {
    type Item = AwardAssignment;

    fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    fn item_lists(&self) -> Vec<&[AwardAssignment]> {
        vec![&self.not_given, &self.upcoming]
    }
}

impl RowSource for TrainingByVolunteer {
    type Item = TrainingAssignment;

    fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    fn item_lists(&self) -> Vec<&[TrainingAssignment]> {
        vec![&self.missing, &self.due]
    }
}

impl RowSource for DocumentsByVolunteer {
    type Item = DocumentAssignment;

    fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    fn item_lists(&self) -> Vec<&[DocumentAssignment]> {
        vec![&self.missing]
    }
}

impl RowSource for BirthdaysByVolunteer {
    type Item = BirthdayItem;

    fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    fn item_lists(&self) -> Vec<&[BirthdayItem]> {
        vec![&self.upcoming]
    }
}
