//! Client and appointment book for an independent service provider.
//!
//! The [`repository::InMemoryRepository`] owns clients and appointments; the
//! [`services`] turn its queries into the data behind each screen (daily
//! schedule, month calendar, client roster, client details).

pub mod clock;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod fixtures;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
