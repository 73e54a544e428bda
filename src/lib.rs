//! Udupi Guide Library
//!
//! Core library for the Udupi Guide desktop application: a trip planner and a
//! keyword-routed travel assistant.

pub mod app;
pub mod assistant;
pub mod planner;
pub mod storage;
pub mod types;
pub mod ui;
