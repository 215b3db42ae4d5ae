//! DTO modules that bridge services with the presentation layer.

pub mod calendar;
pub mod client;
pub mod schedule;
