//! View Projector
//!
//! Read-only projections over a store snapshot: the sorted and searchable
//! table, and the date-bounded report. None of these mutate their input.

pub mod reports;
pub mod search;
pub mod sorting;
