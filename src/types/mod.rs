//! Shared type definitions
//!
//! This module contains the data types shared between the assistant, the planner and the UI.

pub mod config;
pub mod message;
