//! Configuration validation
//!
//! Validates typed records for value correctness before a run is accepted.

mod rules;
mod validator;

#[cfg(test)]
mod proptests;

pub use rules::active_rule_flags;
pub use validator::validate_spec;
