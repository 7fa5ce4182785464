//! Core business logic module - framework-agnostic operations over the entities.
//!
//! Each submodule owns one resource (food, meal, intake, folder, article, user)
//! plus the pure aggregation helpers (`exchange`) and report assembly (`report`).
//! All database functions are async, scoped by the owning user id, and return
//! crate [`Result`](crate::errors::Result) types.

/// Article operations and blob-backed content handling
pub mod article;
/// Pure nutrient aggregation: exchanges, goals-and-sums, ratio bands
pub mod exchange;
/// Folder operations
pub mod folder;
/// Food catalogue operations
pub mod food;
/// Daily intake logging and day-view assembly
pub mod intake;
/// Meal definitions with per-macro goals
pub mod meal;
/// Daily and weekly progress reports
pub mod report;
/// User lookup and startup seeding
pub mod user;
