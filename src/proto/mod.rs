pub mod structured_query;
pub use structured_query::*;
