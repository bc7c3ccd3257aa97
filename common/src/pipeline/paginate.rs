//! Page slicing for the dashboard tables.

use crate::pipeline::flatten::Row;

/// Returns the page `[page_index * page_size, page_index * page_size + page_size)`
/// of `rows`, clipped to the slice bounds. An out-of-range `page_index`
/// yields an empty page, never an error.
pub fn paginate<T: Clone>(rows: &[Row<T>], page_index: usize, page_size: usize) -> Vec<Row<T>> {
    let start = page_index.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Number of blank placeholder rows needed to keep a partially filled page
/// at full visual height.
///
/// The first page is never padded while later pages are; the original
/// console behaves this way and the asymmetry is kept as observed.
pub fn trailing_blank_rows(total: usize, page_index: usize, page_size: usize) -> usize {
    if page_index == 0 {
        return 0;
    }
    (page_index + 1).saturating_mul(page_size).saturating_sub(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::DocumentAssignment;
    use crate::model::volunteer::Volunteer;

    fn rows(count: usize) -> Vec<Row<DocumentAssignment>> {
        (0..count)
            .map(|i| Row {
                volunteer: Volunteer {
                    id: format!("v{i}"),
                    name: format!("Volunteer {i}"),
                    email: None,
                    birthday: None,
                    is_archived: false,
                },
                item: DocumentAssignment {
                    name: format!("Document {i}"),
                    is_provided: false,
                },
            })
            .collect()
    }

    #[test]
    fn consecutive_pages_reconstruct_the_input() {
        let all = rows(23);
        let mut rebuilt = Vec::new();
        let mut page_index = 0;
        loop {
            let page = paginate(&all, page_index, 5);
            if page.is_empty() {
                break;
            }
            rebuilt.extend(page);
            page_index += 1;
        }
        assert_eq!(rebuilt, all);
        assert_eq!(page_index, 5);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let all = rows(3);
        assert!(paginate(&all, 7, 5).is_empty());
    }

    #[test]
    fn last_page_is_clipped() {
        let all = rows(12);
        assert_eq!(paginate(&all, 2, 5).len(), 2);
    }

    #[test]
    fn first_page_is_never_padded() {
        assert_eq!(trailing_blank_rows(3, 0, 5), 0);
    }

    #[test]
    fn short_later_page_is_padded_to_full_height() {
        // 12 rows at page size 5: page 2 shows 2 rows and pads 3.
        assert_eq!(trailing_blank_rows(12, 2, 5), 3);
    }

    #[test]
    fn full_later_page_needs_no_padding() {
        assert_eq!(trailing_blank_rows(12, 1, 5), 0);
    }
}
