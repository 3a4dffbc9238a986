//! TUI module for the ChurchAfrica dashboard.
//!
//! Provides a terminal user interface built on ratatui and crossterm:
//! the KPI card grid, the customizer side panel, and the drag-reorder
//! gesture pipeline.

pub mod app;
pub mod event;
pub mod test_utils;
pub mod ui;
