//! Form focus and single-line text editing.

/// Screen region that receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Graph type selector.
    #[default]
    Kinds,
    /// Cell cards.
    Cells,
    /// Figure options.
    Options,
}

impl Pane {
    /// Get the next pane in Tab order.
    pub fn next(self) -> Self {
        match self {
            Pane::Kinds => Pane::Cells,
            Pane::Cells => Pane::Options,
            Pane::Options => Pane::Kinds,
        }
    }

    /// Get the previous pane in Tab order.
    pub fn prev(self) -> Self {
        match self {
            Pane::Kinds => Pane::Options,
            Pane::Cells => Pane::Kinds,
            Pane::Options => Pane::Cells,
        }
    }
}

/// A field of the plotting options row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    /// Figure title.
    Title,
    /// X axis label.
    XLabel,
    /// Y axis label.
    YLabel,
    /// Legend checkbox.
    Legend,
    /// Grid checkbox.
    Grid,
}

impl OptionField {
    /// All option fields, left to right.
    pub const ALL: [OptionField; 5] = [
        OptionField::Title,
        OptionField::XLabel,
        OptionField::YLabel,
        OptionField::Legend,
        OptionField::Grid,
    ];

    /// Get the caption.
    pub fn caption(self) -> &'static str {
        match self {
            OptionField::Title => "Title",
            OptionField::XLabel => "Xlabel",
            OptionField::YLabel => "Ylabel",
            OptionField::Legend => "Show legend",
            OptionField::Grid => "Show grid",
        }
    }

    /// Check if this is a checkbox.
    pub fn is_toggle(self) -> bool {
        matches!(self, OptionField::Legend | OptionField::Grid)
    }
}

/// Single-line text editor.
#[derive(Debug, Default)]
pub struct LineEditor {
    is_active: bool,
    buffer: String,
}

impl LineEditor {
    /// Create an inactive editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if editing is in progress.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start editing with `initial` text.
    pub fn start(&mut self, initial: &str) {
        self.is_active = true;
        self.buffer = initial.to_string();
    }

    /// Add a character.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Finish editing and hand out the text.
    pub fn submit(&mut self) -> Option<String> {
        if !self.is_active {
            return None;
        }
        self.is_active = false;
        Some(std::mem::take(&mut self.buffer))
    }

    /// Abandon the edit.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
    }

    /// Get the text being edited.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Which pane, cell, field and option have focus.
#[derive(Debug, Default)]
pub struct FormState {
    /// Focused pane.
    pub pane: Pane,
    /// Focused cell position in creation order.
    pub cell: usize,
    /// Focused field within the cell.
    pub field: usize,
    /// Focused option field.
    pub option: usize,
    /// Text editor for the focused field.
    pub editor: LineEditor,
}

impl FormState {
    /// Create a form focused on the graph type selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cell and field indices inside `cells` cells of which the
    /// focused one has `fields` fields.
    pub fn clamp(&mut self, cells: usize, fields: impl Fn(usize) -> usize) {
        if cells == 0 {
            self.cell = 0;
            self.field = 0;
            return;
        }
        self.cell = self.cell.min(cells - 1);
        let count = fields(self.cell);
        self.field = if count == 0 { 0 } else { self.field.min(count - 1) };
    }

    /// Get the focused option field.
    pub fn option_field(&self) -> OptionField {
        OptionField::ALL[self.option.min(OptionField::ALL.len() - 1)]
    }
}
