//! Interactive table state: the one mutable piece of the pipeline.
//!
//! A [`TableQuery`] holds what the user has chosen (sort column and
//! direction, selected filter names, page position) and derives the
//! displayed table from the base flattened rows on demand. The base rows
//! themselves live with the caller and are never mutated here.

use std::collections::HashSet;

use crate::pipeline::filter::{Named, filter_rows};
use crate::pipeline::flatten::Row;
use crate::pipeline::paginate::{paginate, trailing_blank_rows};
use crate::pipeline::sort::{SortColumn, SortDirection, sort_rows};

/// Page sizes offered by the pagination controls.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// The displayed slice of one dashboard table plus the numbers the
/// pagination controls need.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<Row<T>>,
    /// Post-filter, pre-paginate row count.
    pub total_rows: usize,
    /// Blank placeholder rows to render after `rows`.
    pub blank_rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery<C> {
    pub sort: Option<SortSpec<C>>,
    pub selected_names: HashSet<String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl<C: Copy + PartialEq> TableQuery<C> {
    /// No sort, no filter, first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            selected_names: HashSet::new(),
            page_index: 0,
            page_size,
        }
    }

    /// Clicking the active column flips its direction; clicking another
    /// column switches to it ascending. Either way the view changes shape,
    /// so the page position resets.
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some(spec) if spec.column == column => Some(SortSpec {
                column,
                direction: spec.direction.flipped(),
            }),
            _ => Some(SortSpec {
                column,
                direction: SortDirection::Asc,
            }),
        };
        self.page_index = 0;
    }

    /// Adds `name` to the selection, or removes it if already selected.
    pub fn toggle_name(&mut self, name: String) {
        if !self.selected_names.remove(&name) {
            self.selected_names.insert(name);
        }
        self.page_index = 0;
    }

    /// Back to the "All" state.
    pub fn clear_names(&mut self) {
        self.selected_names.clear();
        self.page_index = 0;
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_index = 0;
    }

    /// Called when fresh base rows arrive.
    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }

    /// Runs filter, sort, and paginate over `base` and returns the
    /// displayed view. Pure: `base` is left untouched and every call
    /// starts from it, not from a previously displayed slice.
    pub fn apply<T>(&self, base: &[Row<T>]) -> TableView<T>
    where
        T: Named + Clone,
        C: SortColumn<T>,
    {
        let filtered = filter_rows(base, &self.selected_names);
        let sorted = match &self.sort {
            Some(spec) => sort_rows(&filtered, &spec.column, spec.direction),
            None => filtered,
        };
        let total_rows = sorted.len();
        let rows = paginate(&sorted, self.page_index, self.page_size);
        let blank_rows = trailing_blank_rows(total_rows, self.page_index, self.page_size);
        TableView {
            rows,
            total_rows,
            blank_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::award::AwardAssignment;
    use crate::model::upcoming::AwardsByVolunteer;
    use crate::model::volunteer::Volunteer;
    use crate::pipeline::flatten::flatten;
    use crate::pipeline::sort::SortValue;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Column {
        VolunteerName,
    }

    impl SortColumn<AwardAssignment> for Column {
        fn key<'r>(&self, row: &'r Row<AwardAssignment>) -> Option<SortValue<'r>> {
            match self {
                Column::VolunteerName => Some(SortValue::Text(&row.volunteer.name)),
            }
        }
    }

    fn volunteer(id: &str, name: &str, archived: bool) -> Volunteer {
        Volunteer {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            birthday: None,
            is_archived: archived,
        }
    }

    fn award(name: &str) -> AwardAssignment {
        AwardAssignment {
            name: name.to_string(),
            achieved_date: None,
            given_date: None,
            is_given: false,
        }
    }

    #[test]
    fn toggle_same_column_flips_direction() {
        let mut query: TableQuery<Column> = TableQuery::new(10);
        query.toggle_sort(Column::VolunteerName);
        assert_eq!(
            query.sort.unwrap().direction,
            SortDirection::Asc
        );
        query.toggle_sort(Column::VolunteerName);
        assert_eq!(
            query.sort.unwrap().direction,
            SortDirection::Desc
        );
    }

    #[test]
    fn interactions_reset_the_page_position() {
        let mut query: TableQuery<Column> = TableQuery::new(10);
        query.set_page(3);
        query.toggle_sort(Column::VolunteerName);
        assert_eq!(query.page_index, 0);

        query.set_page(3);
        query.toggle_name("5yr".to_string());
        assert_eq!(query.page_index, 0);

        query.set_page(3);
        query.set_page_size(25);
        assert_eq!(query.page_index, 0);

        query.set_page(3);
        query.reset_page();
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn toggle_name_is_an_involution() {
        let mut query: TableQuery<Column> = TableQuery::new(10);
        query.toggle_name("5yr".to_string());
        assert!(query.selected_names.contains("5yr"));
        query.toggle_name("5yr".to_string());
        assert!(query.selected_names.is_empty());
    }

    // The worked example: Amy active with a missing "5yr" award, Bo
    // archived with the same award. Flatten, sort by volunteer name,
    // filter to {"5yr"}, first page of five.
    #[test]
    fn end_to_end_example() {
        let sources = vec![
            AwardsByVolunteer {
                volunteer: Some(volunteer("1", "Amy", false)),
                not_given: vec![award("5yr")],
                upcoming: vec![],
            },
            AwardsByVolunteer {
                volunteer: Some(volunteer("2", "Bo", true)),
                not_given: vec![award("5yr")],
                upcoming: vec![],
            },
        ];
        let base = flatten(&sources);

        let mut query: TableQuery<Column> = TableQuery::new(5);
        query.toggle_sort(Column::VolunteerName);
        query.toggle_name("5yr".to_string());

        let view = query.apply(&base);
        assert_eq!(view.total_rows, 1);
        assert_eq!(view.blank_rows, 0);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].volunteer.name, "Amy");
        assert_eq!(view.rows[0].item.name, "5yr");
    }

    #[test]
    fn apply_reports_post_filter_totals_and_padding() {
        let sources: Vec<AwardsByVolunteer> = (0..12)
            .map(|i| AwardsByVolunteer {
                volunteer: Some(volunteer(&format!("{i}"), &format!("V{i:02}"), false)),
                not_given: vec![award("5yr")],
                upcoming: vec![],
            })
            .collect();
        let base = flatten(&sources);

        let mut query: TableQuery<Column> = TableQuery::new(5);
        query.set_page(2);
        let view = query.apply(&base);
        assert_eq!(view.total_rows, 12);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.blank_rows, 3);
    }

    #[test]
    fn apply_never_mutates_the_base_rows() {
        let sources = vec![AwardsByVolunteer {
            volunteer: Some(volunteer("1", "Amy", false)),
            not_given: vec![award("b"), award("a")],
            upcoming: vec![],
        }];
        let base = flatten(&sources);
        let before = base.clone();

        let mut query: TableQuery<Column> = TableQuery::new(5);
        query.toggle_sort(Column::VolunteerName);
        let _ = query.apply(&base);
        assert_eq!(base, before);
    }
}
