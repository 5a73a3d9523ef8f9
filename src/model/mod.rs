pub mod validity;
pub use validity::*;

pub mod column_info;
pub use column_info::*;

pub mod filter;
pub use filter::*;

pub mod group_by;
pub use group_by::*;

pub mod operator_attrs;
pub use operator_attrs::*;
