//! Meal Tracker - a single-page calorie tracker
//!
//! Core modules:
//! - `ids`: id sequence for meal entries
//! - `storage`: LocalStorage persistence for the meal list
//! - `registry`: canonical in-memory meal list and edit selection
//! - `ui`: DOM rendering of the list, the total, and the entry form
//!
//! The binary entry point wires DOM events to the registry and renderer.

pub mod ids;
pub mod registry;
pub mod storage;
pub mod ui;

pub use registry::{Meal, MealRegistry, Snapshot};
