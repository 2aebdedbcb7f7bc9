//! Core library for condeck.
//!
//! This crate provides everything the CLI builds on:
//! - `Contest` and `Participant` records with deadline arithmetic
//! - `store` for the JSON contest list on disk
//! - `calendar` for the month-grid layout engine (lane-stacked event bars)

pub mod calendar;
pub mod config;
pub mod contest;
pub mod error;
pub mod store;

pub use contest::{Contest, Participant};
pub use error::{CondeckError, CondeckResult};
