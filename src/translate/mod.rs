//! Row-to-message translators. They only accept rows that already passed
//! validation, so they cannot fail.

pub mod filter_to_proto;

pub mod aggregation_to_proto;
