//! Application state and logic.

use crate::cells::{CellId, CellKind, FieldId, FieldInput};
use crate::figure::{Figure, FigureOptions};
use crate::form::{FormState, OptionField, Pane};
use crate::manager::{CellManager, RenderOutcome};
use crate::status::{StatusLog, WELCOME};
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Cells.
    pub manager: CellManager,
    /// Title, labels, legend and grid.
    pub options: FigureOptions,
    /// Status log.
    pub status: StatusLog,
    /// Focus and text editing.
    pub form: FormState,
    /// Kind created by the next create action.
    pub selected_kind: CellKind,
    /// Last rendered figure; the overlay is open while this is set.
    pub figure: Option<Figure>,
    /// Current theme.
    pub theme: Theme,
    /// Layout sizes.
    pub layout: LayoutConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl App {
    /// Create a new application instance.
    pub fn new(theme: Theme) -> Self {
        let mut status = StatusLog::new();
        status.push(WELCOME);
        Self {
            manager: CellManager::new(),
            options: FigureOptions::default(),
            status,
            form: FormState::new(),
            selected_kind: CellKind::Plot,
            figure: None,
            theme,
            layout: LayoutConfig::default(),
        }
    }

    /// Create a cell of the selected kind and focus it.
    pub fn create_cell(&mut self) {
        match self.manager.create_cell(self.selected_kind) {
            Ok(id) => {
                self.form.cell = self.manager.position(id).unwrap_or(0);
                self.form.field = 0;
                self.form.pane = Pane::Cells;
                self.status
                    .push(format!("Created {} cell {}", self.selected_kind, id));
            },
            Err(e) => self.status.push(e.to_string()),
        }
    }

    /// Delete the focused cell.
    pub fn delete_focused_cell(&mut self) {
        let Some(id) = self.focused_cell_id() else {
            self.status.push("No cell selected");
            return;
        };
        match self.manager.delete_cell(id) {
            Ok(cell) => {
                self.status.push(format!("Removed {} cell {}", cell.kind(), id));
                self.clamp_focus();
            },
            Err(e) => self.status.push(e.to_string()),
        }
    }

    /// Delete every cell.
    pub fn clear_cells(&mut self) {
        if self.manager.is_empty() {
            self.status.push("No cells to remove");
            return;
        }
        let count = self.manager.len();
        self.manager.clear();
        self.clamp_focus();
        self.status.push(format!("Removed {} cells", count));
    }

    /// Render every cell and open the figure overlay on success.
    pub fn render(&mut self) {
        self.form.editor.cancel();
        let outcome = self.manager.render(&self.options);
        self.status.push(outcome.to_string());
        match outcome {
            RenderOutcome::Rendered(figure) => {
                tracing::info!("Rendered figure with {} series", figure.series().len());
                self.figure = Some(figure);
            },
            RenderOutcome::Failed { id, .. } => {
                self.figure = None;
                if let Some(pos) = self.manager.position(id) {
                    self.form.cell = pos;
                    self.form.pane = Pane::Cells;
                    self.clamp_focus();
                }
            },
            RenderOutcome::Nothing => self.figure = None,
        }
    }

    /// Close the figure overlay.
    pub fn close_figure(&mut self) {
        self.figure = None;
    }

    /// Check if the figure overlay is open.
    pub fn figure_visible(&self) -> bool {
        self.figure.is_some()
    }

    /// Get the focused cell id.
    pub fn focused_cell_id(&self) -> Option<CellId> {
        self.manager.ids().get(self.form.cell).copied()
    }

    /// Get the focused field of the focused cell.
    pub fn focused_field(&self) -> Option<FieldId> {
        let id = self.focused_cell_id()?;
        let cell = self.manager.get(id)?;
        cell.fields().get(self.form.field).copied()
    }

    /// Move focus to the next pane.
    pub fn next_pane(&mut self) {
        self.form.pane = self.form.pane.next();
    }

    /// Move focus to the previous pane.
    pub fn prev_pane(&mut self) {
        self.form.pane = self.form.pane.prev();
    }

    /// Move left: previous kind, cell or option.
    pub fn move_left(&mut self) {
        match self.form.pane {
            Pane::Kinds => self.selected_kind = self.selected_kind.prev(),
            Pane::Cells => {
                self.form.cell = self.form.cell.saturating_sub(1);
                self.clamp_focus();
            },
            Pane::Options => self.form.option = self.form.option.saturating_sub(1),
        }
    }

    /// Move right: next kind, cell or option.
    pub fn move_right(&mut self) {
        match self.form.pane {
            Pane::Kinds => self.selected_kind = self.selected_kind.next(),
            Pane::Cells => {
                self.form.cell += 1;
                self.clamp_focus();
            },
            Pane::Options => {
                self.form.option = (self.form.option + 1).min(OptionField::ALL.len() - 1)
            },
        }
    }

    /// Move to the previous field of the focused cell.
    pub fn move_up(&mut self) {
        match self.form.pane {
            Pane::Cells => self.form.field = self.form.field.saturating_sub(1),
            Pane::Options => self.move_left(),
            Pane::Kinds => {},
        }
    }

    /// Move to the next field of the focused cell.
    pub fn move_down(&mut self) {
        match self.form.pane {
            Pane::Cells => {
                self.form.field += 1;
                self.clamp_focus();
            },
            Pane::Options => self.move_right(),
            Pane::Kinds => {},
        }
    }

    /// Act on the focused item: create from the selector, edit text,
    /// cycle a choice or toggle a checkbox.
    pub fn activate(&mut self) {
        match self.form.pane {
            Pane::Kinds => self.create_cell(),
            Pane::Cells => {
                let Some(field) = self.focused_field() else {
                    return;
                };
                match field.input() {
                    FieldInput::Choice(_) => self.step_focused(true),
                    FieldInput::Text | FieldInput::Spin { .. } => {
                        let current = self
                            .focused_cell_id()
                            .and_then(|id| self.manager.get(id))
                            .and_then(|c| c.field(field))
                            .unwrap_or_default()
                            .to_string();
                        self.form.editor.start(&current);
                    },
                }
            },
            Pane::Options => {
                let field = self.form.option_field();
                match field {
                    OptionField::Legend => self.options.legend = !self.options.legend,
                    OptionField::Grid => self.options.grid = !self.options.grid,
                    _ => {
                        let current = self.option_text(field).to_string();
                        self.form.editor.start(&current);
                    },
                }
            },
        }
    }

    /// Step the focused choice or spin field.
    pub fn step_focused(&mut self, forward: bool) {
        match self.form.pane {
            Pane::Kinds => {
                self.selected_kind = if forward {
                    self.selected_kind.next()
                } else {
                    self.selected_kind.prev()
                };
            },
            Pane::Cells => {
                let (Some(id), Some(field)) = (self.focused_cell_id(), self.focused_field()) else {
                    return;
                };
                if let Some(cell) = self.manager.get_mut(id) {
                    if let Err(e) = cell.cycle_field(field, forward) {
                        self.status.push(e.to_string());
                    }
                }
            },
            Pane::Options => {
                let field = self.form.option_field();
                if field.is_toggle() {
                    self.activate();
                }
            },
        }
    }

    /// Store the edited text into the focused field.
    pub fn commit_edit(&mut self) {
        let Some(text) = self.form.editor.submit() else {
            return;
        };
        match self.form.pane {
            Pane::Cells => {
                let (Some(id), Some(field)) = (self.focused_cell_id(), self.focused_field()) else {
                    return;
                };
                if let Some(cell) = self.manager.get_mut(id) {
                    if let Err(e) = cell.set_field(field, text) {
                        self.status.push(e.to_string());
                    }
                }
            },
            Pane::Options => match self.form.option_field() {
                OptionField::Title => self.options.title = text,
                OptionField::XLabel => self.options.x_label = text,
                OptionField::YLabel => self.options.y_label = text,
                OptionField::Legend | OptionField::Grid => {},
            },
            Pane::Kinds => {},
        }
    }

    /// Abandon the current edit.
    pub fn cancel_edit(&mut self) {
        self.form.editor.cancel();
    }

    /// Get the text of a plotting option.
    pub fn option_text(&self, field: OptionField) -> &str {
        match field {
            OptionField::Title => &self.options.title,
            OptionField::XLabel => &self.options.x_label,
            OptionField::YLabel => &self.options.y_label,
            OptionField::Legend | OptionField::Grid => "",
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status.push(format!("Theme: {}", self.theme.name()));
    }

    fn clamp_focus(&mut self) {
        let ids = self.manager.ids();
        let manager = &self.manager;
        self.form.clamp(ids.len(), |i| {
            ids.get(i)
                .and_then(|id| manager.get(*id))
                .map(|c| c.fields().len())
                .unwrap_or(0)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_welcome() {
        let app = App::default();
        assert!(app.status.ends_with(WELCOME));
        assert!(!app.figure_visible());
    }

    #[test]
    fn editing_a_field_through_the_form() {
        let mut app = App::default();
        app.create_cell();
        assert_eq!(app.form.pane, Pane::Cells);

        app.move_down();
        assert_eq!(app.focused_field(), Some(FieldId::X));
        app.activate();
        for c in "1, 2".chars() {
            app.form.editor.input(c);
        }
        app.commit_edit();

        let id = app.focused_cell_id().unwrap();
        assert_eq!(app.manager.get(id).unwrap().field(FieldId::X), Some("1, 2"));
    }

    #[test]
    fn enter_on_choice_cycles_it() {
        let mut app = App::default();
        app.create_cell();
        for _ in 0..3 {
            app.move_down();
        }
        assert_eq!(app.focused_field(), Some(FieldId::Color));
        app.activate();
        let id = app.focused_cell_id().unwrap();
        assert_eq!(
            app.manager.get(id).unwrap().field(FieldId::Color),
            Some("blue")
        );
        assert!(!app.form.editor.is_active());
    }

    #[test]
    fn options_toggle_and_edit() {
        let mut app = App::default();
        app.form.pane = Pane::Options;
        app.activate();
        app.form.editor.input('T');
        app.commit_edit();
        assert_eq!(app.options.title, "T");

        app.form.option = 3;
        app.activate();
        assert!(app.options.legend);
        app.step_focused(true);
        assert!(!app.options.legend);
    }

    #[test]
    fn failed_render_focuses_failing_cell() {
        let mut app = App::default();
        app.create_cell();
        app.create_cell();
        let second = app.manager.ids()[1];
        app.manager
            .get_mut(second)
            .unwrap()
            .set_field(FieldId::Y, "oops")
            .unwrap();
        app.form.cell = 0;
        app.render();
        assert_eq!(app.form.cell, 1);
        assert!(app.status.ends_with("could not convert string to float: 'oops'"));
        assert!(!app.figure_visible());
    }

    #[test]
    fn clearing_re_enables_pie() {
        let mut app = App::default();
        app.create_cell();
        app.create_cell();
        assert!(!app.manager.is_kind_enabled(CellKind::Pie));
        app.clear_cells();
        assert!(app.manager.is_empty());
        assert!(app.manager.is_kind_enabled(CellKind::Pie));
        assert!(app.status.ends_with("Removed 2 cells"));
    }

    #[test]
    fn deleting_last_cell_resets_focus() {
        let mut app = App::default();
        app.create_cell();
        app.delete_focused_cell();
        assert!(app.manager.is_empty());
        assert_eq!(app.form.cell, 0);
        app.delete_focused_cell();
        assert!(app.status.ends_with("No cell selected"));
    }
}
