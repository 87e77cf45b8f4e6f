//! Layout configuration constants for the main screen and figure overlay.

/// Configuration for the cell cards row.
#[derive(Debug, Clone)]
pub struct CellsLayoutConfig {
    /// Width of each card in characters, borders included.
    pub card_width: u16,
    /// Height of one field row (caption line + value line).
    pub field_height: u16,
}

impl Default for CellsLayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 26,
            field_height: 2,
        }
    }
}

/// Configuration for the fixed-height panes around the cells.
#[derive(Debug, Clone)]
pub struct PaneLayoutConfig {
    /// Height of the graph type bar.
    pub kinds_height: u16,
    /// Height of the plotting options row.
    pub options_height: u16,
    /// Height of the status pane, borders included.
    pub status_height: u16,
}

impl Default for PaneLayoutConfig {
    fn default() -> Self {
        Self {
            kinds_height: 3,
            options_height: 4,
            status_height: 6,
        }
    }
}

/// Configuration for the figure overlay.
#[derive(Debug, Clone)]
pub struct FigureLayoutConfig {
    /// Overlay size as a percentage of the screen in both directions.
    pub overlay_percent: u16,
    /// Padding factor for the Y axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Number of grid lines per axis when the grid is on.
    pub grid_lines: usize,
    /// Width of the pie legend column.
    pub pie_legend_width: u16,
}

impl Default for FigureLayoutConfig {
    fn default() -> Self {
        Self {
            overlay_percent: 90,
            y_axis_padding_factor: 0.1,
            grid_lines: 4,
            pie_legend_width: 28,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Cell cards.
    pub cells: CellsLayoutConfig,
    /// Fixed panes.
    pub panes: PaneLayoutConfig,
    /// Figure overlay.
    pub figure: FigureLayoutConfig,
}
