//! Per-view configuration for the generic dashboard card.
//!
//! The original console had one hand-written card per view, each repeating
//! the same fetch/filter/sort/paginate plumbing. Here a view is just a
//! `Dashboard` impl: the wire types it consumes, its typed sort columns,
//! its endpoints, and how a row renders into cells. `DashboardCard<D>`
//! supplies everything else.

use serde::de::DeserializeOwned;

use common::model::award::{Award, AwardAssignment};
use common::model::document::{DocumentAssignment, RequiredDocument};
use common::model::training::{TrainingAssignment, TrainingCourse};
use common::model::upcoming::{AwardsByVolunteer, DocumentsByVolunteer, TrainingByVolunteer};
use common::pipeline::{Named, Row, RowSource, SortColumn, SortValue};

use super::helpers::{format_date, format_flag};

/// Static description of one upcoming/outstanding view.
pub trait Dashboard: 'static {
    /// The association item paired with a volunteer in each row.
    type Item: Named + Clone + PartialEq + 'static;
    /// The grouped per-volunteer response element.
    type Source: RowSource<Item = Self::Item> + Clone + PartialEq + DeserializeOwned + 'static;
    /// The catalog entry the filter options are built from.
    type Catalog: Named + Clone + PartialEq + DeserializeOwned + 'static;
    /// The view's sortable columns.
    type Column: SortColumn<Self::Item> + Copy + PartialEq + 'static;

    const TITLE: &'static str;
    const COLUMNS: &'static [Self::Column];

    fn data_url(days: u32) -> String;
    fn catalog_url() -> &'static str;
    fn column_label(column: Self::Column) -> &'static str;
    fn cell(row: &Row<Self::Item>, column: Self::Column) -> String;
}

/// Awards achieved but not yet handed over, plus awards reachable within
/// the horizon.
pub enum AwardsDashboard {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardColumn {
    Volunteer,
    Award,
    Achieved,
    Given,
    Handed,
}

impl SortColumn<AwardAssignment> for AwardColumn {
    fn key<'r>(&self, row: &'r Row<AwardAssignment>) -> Option<SortValue<'r>> {
        match self {
            AwardColumn::Volunteer => Some(SortValue::Text(&row.volunteer.name)),
            AwardColumn::Award => Some(SortValue::Text(&row.item.name)),
            AwardColumn::Achieved => row.item.achieved_date.map(SortValue::Date),
            AwardColumn::Given => row.item.given_date.map(SortValue::Date),
            AwardColumn::Handed => Some(SortValue::Flag(row.item.is_given)),
        }
    }
}

impl Dashboard for AwardsDashboard {
    type Item = AwardAssignment;
    type Source = AwardsByVolunteer;
    type Catalog = Award;
    type Column = AwardColumn;

    const TITLE: &'static str = "Upcoming awards";
    const COLUMNS: &'static [AwardColumn] = &[
        AwardColumn::Volunteer,
        AwardColumn::Award,
        AwardColumn::Achieved,
        AwardColumn::Given,
        AwardColumn::Handed,
    ];

    fn data_url(days: u32) -> String {
        format!("/api/volunteers/awards/upcoming/{days}")
    }

    fn catalog_url() -> &'static str {
        "/api/awards"
    }

    fn column_label(column: AwardColumn) -> &'static str {
        match column {
            AwardColumn::Volunteer => "Volunteer",
            AwardColumn::Award => "Award",
            AwardColumn::Achieved => "Achieved",
            AwardColumn::Given => "Given on",
            AwardColumn::Handed => "Handed over",
        }
    }

    fn cell(row: &Row<AwardAssignment>, column: AwardColumn) -> String {
        match column {
            AwardColumn::Volunteer => row.volunteer.name.clone(),
            AwardColumn::Award => row.item.name.clone(),
            AwardColumn::Achieved => format_date(row.item.achieved_date),
            AwardColumn::Given => format_date(row.item.given_date),
            AwardColumn::Handed => format_flag(row.item.is_given).to_string(),
        }
    }
}

/// Courses never completed plus courses lapsing within the horizon.
pub enum TrainingDashboard {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingColumn {
    Volunteer,
    Course,
    CompletedOn,
    NeedsRetraining,
}

impl SortColumn<TrainingAssignment> for TrainingColumn {
    fn key<'r>(&self, row: &'r Row<TrainingAssignment>) -> Option<SortValue<'r>> {
        match self {
            TrainingColumn::Volunteer => Some(SortValue::Text(&row.volunteer.name)),
            TrainingColumn::Course => Some(SortValue::Text(&row.item.name)),
            TrainingColumn::CompletedOn => row.item.completed_on.map(SortValue::Date),
            TrainingColumn::NeedsRetraining => Some(SortValue::Flag(row.item.needs_retraining)),
        }
    }
}

impl Dashboard for TrainingDashboard {
    type Item = TrainingAssignment;
    type Source = TrainingByVolunteer;
    type Catalog = TrainingCourse;
    type Column = TrainingColumn;

    const TITLE: &'static str = "Training due";
    const COLUMNS: &'static [TrainingColumn] = &[
        TrainingColumn::Volunteer,
        TrainingColumn::Course,
        TrainingColumn::CompletedOn,
        TrainingColumn::NeedsRetraining,
    ];

    fn data_url(days: u32) -> String {
        format!("/api/training/upcoming/{days}")
    }

    fn catalog_url() -> &'static str {
        "/api/training"
    }

    fn column_label(column: TrainingColumn) -> &'static str {
        match column {
            TrainingColumn::Volunteer => "Volunteer",
            TrainingColumn::Course => "Course",
            TrainingColumn::CompletedOn => "Last completed",
            TrainingColumn::NeedsRetraining => "Retraining",
        }
    }

    fn cell(row: &Row<TrainingAssignment>, column: TrainingColumn) -> String {
        match column {
            TrainingColumn::Volunteer => row.volunteer.name.clone(),
            TrainingColumn::Course => row.item.name.clone(),
            TrainingColumn::CompletedOn => format_date(row.item.completed_on),
            TrainingColumn::NeedsRetraining => format_flag(row.item.needs_retraining).to_string(),
        }
    }
}

/// Required documents volunteers have not provided. The endpoint takes no
/// horizon: a document is either on file or it is not.
pub enum DocumentsDashboard {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentColumn {
    Volunteer,
    Document,
    Provided,
}

impl SortColumn<DocumentAssignment> for DocumentColumn {
    fn key<'r>(&self, row: &'r Row<DocumentAssignment>) -> Option<SortValue<'r>> {
        match self {
            DocumentColumn::Volunteer => Some(SortValue::Text(&row.volunteer.name)),
            DocumentColumn::Document => Some(SortValue::Text(&row.item.name)),
            DocumentColumn::Provided => Some(SortValue::Flag(row.item.is_provided)),
        }
    }
}

impl Dashboard for DocumentsDashboard {
    type Item = DocumentAssignment;
    type Source = DocumentsByVolunteer;
    type Catalog = RequiredDocument;
    type Column = DocumentColumn;

    const TITLE: &'static str = "Outstanding documents";
    const COLUMNS: &'static [DocumentColumn] = &[
        DocumentColumn::Volunteer,
        DocumentColumn::Document,
        DocumentColumn::Provided,
    ];

    fn data_url(_days: u32) -> String {
        "/api/outstanding-documents".to_string()
    }

    fn catalog_url() -> &'static str {
        "/api/documents"
    }

    fn column_label(column: DocumentColumn) -> &'static str {
        match column {
            DocumentColumn::Volunteer => "Volunteer",
            DocumentColumn::Document => "Document",
            DocumentColumn::Provided => "Provided",
        }
    }

    fn cell(row: &Row<DocumentAssignment>, column: DocumentColumn) -> String {
        match column {
            DocumentColumn::Volunteer => row.volunteer.name.clone(),
            DocumentColumn::Document => row.item.name.clone(),
            DocumentColumn::Provided => format_flag(row.item.is_provided).to_string(),
        }
    }
}
