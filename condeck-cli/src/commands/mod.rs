pub mod add;
pub mod calendar;
pub mod config;
pub mod edit;
pub mod list;
pub mod participant;
pub mod remove;
