//! Cell lifecycle: creation limits, kind exclusion, deletion and rendering.

use std::collections::BTreeMap;
use std::fmt;

use crate::cells::{Cell, CellId, CellKind};
use crate::error::{CellplotError, Result};
use crate::figure::{Figure, FigureOptions};

/// Maximum number of cells alive at once.
pub const MAX_CELL_NUMBER: usize = 5;

/// Result of rendering every cell.
#[derive(Debug)]
pub enum RenderOutcome {
    /// There were no cells.
    Nothing,
    /// Every cell was drawn.
    Rendered(Figure),
    /// Drawing stopped at the first failing cell; the partial figure is gone.
    Failed {
        /// The failing cell.
        id: CellId,
        /// Why it failed.
        error: CellplotError,
    },
}

impl RenderOutcome {
    /// Check if a figure was produced.
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    /// Take the figure, if any.
    pub fn into_figure(self) -> Option<Figure> {
        match self {
            RenderOutcome::Rendered(figure) => Some(figure),
            _ => None,
        }
    }
}

impl fmt::Display for RenderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderOutcome::Nothing => f.write_str("No cells to plot!"),
            RenderOutcome::Rendered(_) => f.write_str("Successfully plotted!"),
            RenderOutcome::Failed { id, error } => write!(f, "Error in red cell {}: {}", id, error),
        }
    }
}

/// Ordered collection of cells.
///
/// Cells iterate in creation order. A pie cell never shares the collection
/// with any other cell, and at most [`MAX_CELL_NUMBER`] cells exist.
#[derive(Debug, Default)]
pub struct CellManager {
    cells: BTreeMap<CellId, Cell>,
    next_id: u64,
}

impl CellManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a cell of `kind` may be created next to the current cells.
    pub fn is_kind_enabled(&self, kind: CellKind) -> bool {
        if self.cells.is_empty() {
            return true;
        }
        if self.contains_kind(CellKind::Pie) {
            return false;
        }
        kind != CellKind::Pie
    }

    /// Kinds that can currently be created, in menu order.
    pub fn enabled_kinds(&self) -> Vec<CellKind> {
        CellKind::ALL
            .into_iter()
            .filter(|k| self.is_kind_enabled(*k))
            .collect()
    }

    /// Check if the collection is full.
    pub fn is_full(&self) -> bool {
        self.cells.len() >= MAX_CELL_NUMBER
    }

    /// Create a cell of `kind` with default fields.
    pub fn create_cell(&mut self, kind: CellKind) -> Result<CellId> {
        if self.is_full() {
            tracing::debug!("Rejected {} cell: collection full", kind);
            return Err(CellplotError::CapacityReached);
        }
        if !self.is_kind_enabled(kind) {
            tracing::debug!("Rejected {} cell: kind disabled", kind);
            return Err(CellplotError::kind_disabled(kind));
        }

        self.next_id += 1;
        let id = CellId::new(self.next_id);
        self.cells.insert(id, Cell::new(id, kind));
        tracing::info!("Created {} cell {}", kind, id);
        Ok(id)
    }

    /// Remove a cell.
    pub fn delete_cell(&mut self, id: CellId) -> Result<Cell> {
        let cell = self
            .cells
            .remove(&id)
            .ok_or_else(|| CellplotError::cell_not_found(id))?;
        tracing::info!("Deleted {} cell {}", cell.kind(), id);
        Ok(cell)
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Get a cell.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Get a cell mutably.
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(&id)
    }

    /// Iterate over cells in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Get cell ids in creation order.
    pub fn ids(&self) -> Vec<CellId> {
        self.cells.keys().copied().collect()
    }

    /// Get the position of a cell in creation order.
    pub fn position(&self, id: CellId) -> Option<usize> {
        self.cells.keys().position(|k| *k == id)
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if there are no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draw every cell onto a fresh figure.
    ///
    /// Highlights from the previous attempt are cleared first. The first cell
    /// that fails is highlighted and ends the attempt; nothing drawn so far
    /// is kept.
    pub fn render(&mut self, options: &FigureOptions) -> RenderOutcome {
        if self.cells.is_empty() {
            return RenderOutcome::Nothing;
        }

        for cell in self.cells.values_mut() {
            cell.set_failed(false);
        }

        tracing::debug!("Rendering {} cells", self.cells.len());
        let mut figure = Figure::new();
        for cell in self.cells.values_mut() {
            if let Err(error) = cell.draw(&mut figure) {
                cell.set_failed(true);
                if error.is_input_error() {
                    tracing::warn!("Cell {} failed to draw: {}", cell.id(), error);
                } else {
                    tracing::error!("Cell {} failed to draw: {}", cell.id(), error);
                }
                return RenderOutcome::Failed {
                    id: cell.id(),
                    error,
                };
            }
        }

        figure.apply_options(options.clone());
        if options.legend && figure.legend_entries().is_empty() {
            tracing::warn!("Legend requested but no series has a label");
        }
        RenderOutcome::Rendered(figure)
    }

    fn contains_kind(&self, kind: CellKind) -> bool {
        self.cells.values().any(|c| c.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::FieldId;

    #[test]
    fn ids_are_never_reused() {
        let mut manager = CellManager::new();
        let a = manager.create_cell(CellKind::Bar).unwrap();
        manager.delete_cell(a).unwrap();
        let b = manager.create_cell(CellKind::Bar).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn deleting_unknown_cell_fails() {
        let mut manager = CellManager::new();
        let id = manager.create_cell(CellKind::Plot).unwrap();
        manager.delete_cell(id).unwrap();
        assert!(matches!(
            manager.delete_cell(id),
            Err(CellplotError::CellNotFound { .. })
        ));
    }

    #[test]
    fn capacity_is_checked_before_exclusion() {
        let mut manager = CellManager::new();
        for _ in 0..MAX_CELL_NUMBER {
            manager.create_cell(CellKind::Scatter).unwrap();
        }
        assert!(matches!(
            manager.create_cell(CellKind::Pie),
            Err(CellplotError::CapacityReached)
        ));
    }

    #[test]
    fn failure_stops_later_cells() {
        let mut manager = CellManager::new();
        let bad = manager.create_cell(CellKind::Plot).unwrap();
        let later = manager.create_cell(CellKind::Plot).unwrap();
        manager
            .get_mut(bad)
            .unwrap()
            .set_field(FieldId::Y, "a")
            .unwrap();
        manager
            .get_mut(later)
            .unwrap()
            .set_field(FieldId::Y, "b")
            .unwrap();

        let outcome = manager.render(&FigureOptions::default());
        assert!(matches!(outcome, RenderOutcome::Failed { id, .. } if id == bad));
        assert!(manager.get(bad).unwrap().failed());
        assert!(!manager.get(later).unwrap().failed());
    }
}
