//! Search criteria state and the pure filter engine over the catalog.

mod criteria;
mod filter;

pub use criteria::{CriteriaUpdate, SearchCriteria};
pub use filter::{filter_turfs, FilterSummary};
