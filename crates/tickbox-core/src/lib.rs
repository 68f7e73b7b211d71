//! Core types and trait definitions for the Tickbox habit and list tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the API layer both depend on it.

pub mod model;
pub mod seed;
pub mod store;

pub use model::{
  Color, Day, Entry, Habit, List, NewColor, NewDay, NewEntry, NewHabit, NewList,
};
pub use store::TrackerStore;
