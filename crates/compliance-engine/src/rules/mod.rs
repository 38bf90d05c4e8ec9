//! Rule groups, one module per part of the form.
//!
//! Every `check_*` function is pure: it reads the record and returns the
//! findings for its group, possibly none. The engine calls them in a fixed
//! order for deterministic output.

pub mod age_eligibility;
pub mod identification;
pub mod prohibited;
pub mod recertification;
pub mod seller;
pub mod structural;
pub mod visa;
