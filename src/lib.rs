//! Cellplot - compose charts from cells in the terminal.
//!
//! Each cell describes one drawing call: a line plot, a scatter, bars, a
//! histogram or a pie. Rendering draws every cell, in creation order, onto a
//! single [`figure::Figure`] and stops at the first cell whose inputs are
//! rejected.
//!
//! # Features
//!
//! - Comma separated value lists with numeric and text entries
//! - At most five cells; a pie never shares the figure with other cells
//! - First-failure attribution with the failing cell highlighted
//! - Title, axis labels, legend and grid options
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use cellplot::cells::{CellKind, FieldId};
//! use cellplot::figure::FigureOptions;
//! use cellplot::manager::CellManager;
//!
//! let mut manager = CellManager::new();
//! let id = manager.create_cell(CellKind::Plot)?;
//! manager.get_mut(id).unwrap().set_field(FieldId::Y, "1, 4, 9")?;
//!
//! let outcome = manager.render(&FigureOptions::default());
//! assert_eq!(outcome.to_string(), "Successfully plotted!");
//! # Ok::<(), cellplot::CellplotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod cells;
pub mod error;
pub mod figure;
pub mod form;
pub mod logging;
pub mod manager;
pub mod status;
pub mod ui;
pub mod util;

pub use cells::{parse_list, Value};
pub use error::{CellplotError, Result};
pub use manager::{CellManager, RenderOutcome, MAX_CELL_NUMBER};
