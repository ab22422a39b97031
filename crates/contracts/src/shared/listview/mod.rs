//! List-view logic shared by every management screen.
//!
//! Each screen composes the same four pieces:
//! - `filter`: serializable view state + predicate over one record
//! - `aggregate`: scalar summary statistics for the stat cards
//! - `selection`: the single record open in a detail/edit dialog
//! - `form`: validation gate between form state and the submit callback

pub mod aggregate;
pub mod filter;
pub mod form;
pub mod selection;

// Re-exports
pub use aggregate::{average, count_where, percentage, sum_where, MetricScope};
pub use filter::{filter_records, Facet, ListFilter, Searchable, ALL};
pub use form::{try_submit, FormError, FormModel};
pub use selection::Selection;
