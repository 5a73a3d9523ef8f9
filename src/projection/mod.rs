pub mod outcome;
pub use outcome::*;

pub mod filters;
pub use filters::*;

pub mod group_by;
pub use group_by::*;
