pub mod query;
pub mod ranked;

pub use query::is_cleared;
pub use ranked::{RankedResult, ResultSet};
