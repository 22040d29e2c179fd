//! Assessment domain: plugin runs, their findings, and the rules that roll
//! them up into a single overall status.

pub mod domain;
pub mod policies;
pub mod services;
