//! Promodesk application layer: the remote promotions gateway, the dashboard
//! controller that drives the core state machines against it, and the
//! configuration and logging shared by the command line front end.

pub mod config;
pub mod dashboard;
pub mod gateway;
pub mod observability;

#[cfg(test)]
mod test;
