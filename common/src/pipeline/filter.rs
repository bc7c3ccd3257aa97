//! Multi-select name filter over flattened rows.

use std::collections::HashSet;

use crate::pipeline::flatten::Row;

/// Anything carrying a catalog name: assignments (for filtering rows) and
/// catalog entries (for building the filter's option list).
pub trait Named {
    fn name(&self) -> &str;
}

/// Restricts `rows` to those whose item name is in `selected`.
///
/// An empty selection is the "All" state and returns the rows unchanged.
/// Matching is exact and case-sensitive: names come from a controlled
/// catalog, not free text. Selected names with no matching row are ignored,
/// which happens transiently while the catalog query is still loading.
pub fn filter_rows<T>(rows: &[Row<T>], selected: &HashSet<String>) -> Vec<Row<T>>
where
    T: Named + Clone,
{
    if selected.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| selected.contains(row.item.name()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::DocumentAssignment;
    use crate::model::volunteer::Volunteer;

    fn row(volunteer_name: &str, document_name: &str) -> Row<DocumentAssignment> {
        Row {
            volunteer: Volunteer {
                id: volunteer_name.to_lowercase(),
                name: volunteer_name.to_string(),
                email: None,
                birthday: None,
                is_archived: false,
            },
            item: DocumentAssignment {
                name: document_name.to_string(),
                is_provided: false,
            },
        }
    }

    fn names(selected: &[&str]) -> HashSet<String> {
        selected.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let rows = vec![row("Amy", "ID Check"), row("Bo", "Photo Consent")];
        assert_eq!(filter_rows(&rows, &HashSet::new()), rows);
    }

    #[test]
    fn keeps_exactly_the_selected_names() {
        let rows = vec![
            row("Amy", "ID Check"),
            row("Bo", "Photo Consent"),
            row("Cal", "ID Check"),
        ];
        let filtered = filter_rows(&rows, &names(&["ID Check"]));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.item.name == "ID Check"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let rows = vec![row("Amy", "ID Check")];
        assert!(filter_rows(&rows, &names(&["id check"])).is_empty());
    }

    #[test]
    fn unknown_names_are_ignored() {
        let rows = vec![row("Amy", "ID Check")];
        let filtered = filter_rows(&rows, &names(&["ID Check", "Not In Catalog"]));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn preserves_input_order() {
        let rows = vec![
            row("Cal", "ID Check"),
            row("Amy", "Photo Consent"),
            row("Bo", "ID Check"),
        ];
        let filtered = filter_rows(&rows, &names(&["ID Check"]));
        let order: Vec<&str> = filtered.iter().map(|r| r.volunteer.name.as_str()).collect();
        assert_eq!(order, ["Cal", "Bo"]);
    }
}
