//! The upcoming/outstanding aggregation pipeline.
//!
//! Every dashboard card derives its table the same way: the grouped
//! per-volunteer response is flattened into rows, restricted by the
//! multi-select name filter, ordered by the active sort column, and cut
//! into pages. All four stages are pure functions over in-memory slices;
//! the only state involved is the [`table::TableQuery`] owned by the UI.

pub mod filter;
pub mod flatten;
pub mod paginate;
pub mod sort;
pub mod table;

pub use filter::{Named, filter_rows};
pub use flatten::{Row, RowSource, flatten};
pub use paginate::{paginate, trailing_blank_rows};
pub use sort::{SortColumn, SortDirection, SortValue, sort_rows};
pub use table::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SortSpec, TableQuery, TableView,
};
