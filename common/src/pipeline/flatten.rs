//! Row flattening: expand grouped per-volunteer responses into one row per
//! (volunteer, item) pair.

use crate::model::volunteer::Volunteer;

/// The pipeline's working unit. Rows are rebuilt from scratch on every
/// successful fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub volunteer: Volunteer,
    pub item: T,
}

/// A grouped response element that can be expanded into rows: one
/// volunteer paired with one or more classified item sub-lists.
pub trait RowSource {
    type Item;

    /// `None` marks a malformed element (record without a volunteer); the
    /// flattener skips it.
    fn volunteer(&self) -> Option<&Volunteer>;

    /// The classified sub-lists, in display order. Their order, and the
    /// item order within each, is the implicit secondary sort key for the
    /// whole pipeline.
    fn item_lists(&self) -> Vec<&[Self::Item]>;
}

/// Expands `sources` into flat rows.
///
/// Malformed elements and archived volunteers are skipped; everything else
/// is emitted in input order with no deduplication. An empty input yields
/// an empty output.
pub fn flatten<S>(sources: &[S]) -> Vec<Row<S::Item>>
where
    S: RowSource,
    S::Item: Clone,
{
    let mut rows = Vec::new();
    for source in sources {
        let Some(volunteer) = source.volunteer() else {
            continue;
        };
        if volunteer.is_archived {
            continue;
        }
        for list in source.item_lists() {
            for item in list {
                rows.push(Row {
                    volunteer: volunteer.clone(),
                    item: item.clone(),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::award::AwardAssignment;
    use crate::model::upcoming::AwardsByVolunteer;

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

    fn source(
        volunteer: Option<Volunteer>,
        not_given: Vec<AwardAssignment>,
        upcoming: Vec<AwardAssignment>,
    ) -> AwardsByVolunteer {
        AwardsByVolunteer {
            volunteer,
            not_given,
            upcoming,
        }
    }

    #[test]
    fn excludes_archived_volunteers() {
        let sources = vec![
            source(Some(volunteer("1", "Amy", false)), vec![award("5yr")], vec![]),
            source(Some(volunteer("2", "Bo", true)), vec![award("5yr")], vec![]),
        ];
        let rows = flatten(&sources);
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|r| !r.volunteer.is_archived));
        assert_eq!(rows[0].volunteer.name, "Amy");
    }

    #[test]
    fn row_count_matches_sub_list_totals() {
        let sources = vec![
            source(
                Some(volunteer("1", "Amy", false)),
                vec![award("5yr"), award("10yr")],
                vec![award("15yr")],
            ),
            source(Some(volunteer("2", "Bo", false)), vec![], vec![award("5yr")]),
        ];
        assert_eq!(flatten(&sources).len(), 4);
    }

    #[test]
    fn preserves_sub_list_then_item_order() {
        let sources = vec![source(
            Some(volunteer("1", "Amy", false)),
            vec![award("b"), award("a")],
            vec![award("c")],
        )];
        let rows = flatten(&sources);
        let names: Vec<&str> = rows.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_names_across_sub_lists_are_kept() {
        let sources = vec![source(
            Some(volunteer("1", "Amy", false)),
            vec![award("5yr")],
            vec![award("5yr")],
        )];
        assert_eq!(flatten(&sources).len(), 2);
    }

    #[test]
    fn skips_elements_without_a_volunteer() {
        let sources = vec![
            source(None, vec![award("5yr")], vec![]),
            source(Some(volunteer("1", "Amy", false)), vec![award("5yr")], vec![]),
        ];
        let rows = flatten(&sources);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].volunteer.id, "1");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let sources: Vec<AwardsByVolunteer> = Vec::new();
        assert!(flatten(&sources).is_empty());
    }
}
