pub mod criteria;
pub mod engine;

pub use criteria::{Criteria, CriteriaForm, SortOrder};
pub use engine::query;
