//! Database access layer
//!
//! One module per entity group; every function is a single
//! parameterized statement (or an update followed by its read-back in
//! one transaction).

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod leave;
