pub mod node;
pub use node::*;

pub mod operator;
pub use operator::*;
