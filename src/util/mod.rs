//! Utility functions.
//!
//! This module provides terminal color mappings and layout configuration.

pub mod colors;
mod layout_config;

pub use layout_config::{CellsLayoutConfig, FigureLayoutConfig, LayoutConfig, PaneLayoutConfig};
