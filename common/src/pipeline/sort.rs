//! Stable row ordering by a typed sort column.
//!
//! The original console addressed sort keys with dotted path strings like
//! `"award.achievedDate"`. Here each view declares an enum of sortable
//! columns instead; a column resolves a row to an optional [`SortValue`],
//! and `None` means the underlying field is unknown for that row.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::pipeline::flatten::Row;

/// A resolved sort key. Within one column every row resolves to the same
/// variant, so cross-variant ordering never decides a real comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    Date(NaiveDate),
    Number(i64),
    Text(&'a str),
    Flag(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A sortable column of one dashboard view.
pub trait SortColumn<T> {
    fn key<'r>(&self, row: &'r Row<T>) -> Option<SortValue<'r>>;
}

/// Returns `rows` reordered by `column`.
///
/// The sort is stable, so rows with equal keys keep their flattening
/// order (which groups a volunteer's rows together). Rows whose key is
/// unknown sort before every defined value in *both* directions;
/// `Desc` only reverses the defined-vs-defined comparisons.
pub fn sort_rows<T, C>(rows: &[Row<T>], column: &C, direction: SortDirection) -> Vec<Row<T>>
where
    T: Clone,
    C: SortColumn<T>,
{
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare(column.key(a), column.key(b), direction));
    sorted
}

fn compare<'a>(
    a: Option<SortValue<'a>>,
    b: Option<SortValue<'a>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => match direction {
            SortDirection::Asc => x.cmp(&y),
            SortDirection::Desc => y.cmp(&x),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::award::AwardAssignment;
    use crate::model::volunteer::Volunteer;

    #[derive(Clone, Copy, PartialEq)]
    enum Column {
        VolunteerName,
        AchievedDate,
        IsGiven,
    }

    impl SortColumn<AwardAssignment> for Column {
        fn key<'r>(&self, row: &'r Row<AwardAssignment>) -> Option<SortValue<'r>> {
            match self {
                Column::VolunteerName => Some(SortValue::Text(&row.volunteer.name)),
                Column::AchievedDate => row.item.achieved_date.map(SortValue::Date),
                Column::IsGiven => Some(SortValue::Flag(row.item.is_given)),
            }
        }
    }

    fn row(volunteer_name: &str, award_name: &str, achieved: Option<&str>) -> Row<AwardAssignment> {
        Row {
            volunteer: Volunteer {
                id: volunteer_name.to_lowercase(),
                name: volunteer_name.to_string(),
                email: None,
                birthday: None,
                is_archived: false,
            },
            item: AwardAssignment {
                name: award_name.to_string(),
                achieved_date: achieved.map(|d| d.parse().unwrap()),
                given_date: None,
                is_given: false,
            },
        }
    }

    #[test]
    fn orders_text_ascending_by_code_point() {
        let rows = vec![row("Cal", "5yr", None), row("Amy", "5yr", None), row("Bo", "5yr", None)];
        let sorted = sort_rows(&rows, &Column::VolunteerName, SortDirection::Asc);
        let order: Vec<&str> = sorted.iter().map(|r| r.volunteer.name.as_str()).collect();
        assert_eq!(order, ["Amy", "Bo", "Cal"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let rows = vec![
            row("Amy", "first", None),
            row("Bo", "second", None),
            row("Amy", "third", None),
            row("Amy", "fourth", None),
        ];
        let sorted = sort_rows(&rows, &Column::VolunteerName, SortDirection::Asc);
        let amy_awards: Vec<&str> = sorted
            .iter()
            .filter(|r| r.volunteer.name == "Amy")
            .map(|r| r.item.name.as_str())
            .collect();
        assert_eq!(amy_awards, ["first", "third", "fourth"]);
    }

    #[test]
    fn desc_reverses_asc_when_keys_are_distinct() {
        let rows = vec![
            row("Amy", "a", Some("2025-06-01")),
            row("Bo", "b", Some("2025-01-15")),
            row("Cal", "c", Some("2025-03-20")),
        ];
        let asc = sort_rows(&rows, &Column::AchievedDate, SortDirection::Asc);
        let mut reversed = sort_rows(&rows, &Column::AchievedDate, SortDirection::Desc);
        reversed.reverse();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn unknown_keys_sort_first_in_both_directions() {
        let rows = vec![
            row("Amy", "a", Some("2025-06-01")),
            row("Bo", "b", None),
            row("Cal", "c", Some("2025-01-15")),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_rows(&rows, &Column::AchievedDate, direction);
            assert_eq!(sorted[0].volunteer.name, "Bo");
            assert!(sorted[1..].iter().all(|r| r.item.achieved_date.is_some()));
        }
    }

    #[test]
    fn flags_order_false_before_true() {
        let mut given = row("Amy", "a", None);
        given.item.is_given = true;
        let rows = vec![given, row("Bo", "b", None)];
        let sorted = sort_rows(&rows, &Column::IsGiven, SortDirection::Asc);
        assert_eq!(sorted[0].volunteer.name, "Bo");
    }

    #[test]
    fn dates_order_chronologically() {
        let rows = vec![
            row("Amy", "a", Some("2025-12-01")),
            row("Bo", "b", Some("2024-02-29")),
            row("Cal", "c", Some("2025-03-20")),
        ];
        let sorted = sort_rows(&rows, &Column::AchievedDate, SortDirection::Asc);
        let order: Vec<&str> = sorted.iter().map(|r| r.volunteer.name.as_str()).collect();
        assert_eq!(order, ["Bo", "Cal", "Amy"]);
    }
}
