use cellplot::app::App;
use cellplot::cells::{CellKind, FieldId};
use cellplot::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn render(app: &App) -> Buffer {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn set(app: &mut App, field: FieldId, value: &str) {
    let id = app.focused_cell_id().unwrap();
    app.manager
        .get_mut(id)
        .unwrap()
        .set_field(field, value)
        .unwrap();
}

#[test]
fn empty_screen_shows_selector_and_welcome() {
    let app = App::default();
    let text = screen_text(&render(&app));
    assert!(text.contains("Choose graph type"));
    assert!(text.contains("histogram"));
    assert!(text.contains("Max number of cells: 5"));
    assert!(text.contains("Welcome to the plotting app!"));
}

#[test]
fn cell_cards_show_their_fields() {
    let mut app = App::default();
    app.selected_kind = CellKind::Bar;
    app.create_cell();
    set(&mut app, FieldId::Y, "3, 5");
    let text = screen_text(&render(&app));
    assert!(text.contains("bar #1"));
    assert!(text.contains("3, 5"));
    assert!(text.contains("‹ red ›"));
}

#[test]
fn line_plot_overlay_draws() {
    let mut app = App::default();
    app.create_cell();
    set(&mut app, FieldId::Y, "1, 4, 9");
    set(&mut app, FieldId::Label, "squares");
    app.options.title = "Squares".to_string();
    app.options.legend = true;
    app.options.grid = true;
    app.render();
    assert!(app.figure_visible());

    let text = screen_text(&render(&app));
    assert!(text.contains("Squares"));
    assert!(text.contains("squares"));
}

#[test]
fn categorical_bars_label_the_axis() {
    let mut app = App::default();
    app.selected_kind = CellKind::Bar;
    app.create_cell();
    set(&mut app, FieldId::X, "apples, pears");
    set(&mut app, FieldId::Y, "3, 5");
    app.render();

    let text = screen_text(&render(&app));
    assert!(text.contains("apples"));
    assert!(text.contains("pears"));
}

#[test]
fn pie_overlay_lists_wedges() {
    let mut app = App::default();
    app.selected_kind = CellKind::Pie;
    app.create_cell();
    set(&mut app, FieldId::Data, "50, 30, 20");
    set(&mut app, FieldId::Label, "a, b, c");
    app.options.legend = true;
    app.render();
    assert!(app.figure_visible());

    let text = screen_text(&render(&app));
    assert!(text.contains("Legend"));
    assert!(text.contains("50.0%"));
}

#[test]
fn failed_render_keeps_main_screen() {
    let mut app = App::default();
    app.create_cell();
    set(&mut app, FieldId::X, "1, 2, 3");
    set(&mut app, FieldId::Y, "1, 2");
    app.render();
    assert!(!app.figure_visible());

    let text = screen_text(&render(&app));
    assert!(text.contains("Error in red cell 1"));
}

#[test]
fn light_theme_renders() {
    let mut app = App::default();
    app.cycle_theme();
    let text = screen_text(&render(&app));
    assert!(text.contains("Theme: Gruvbox Light"));
}

#[test]
fn empty_figure_overlay_says_no_data() {
    let mut app = App::default();
    app.figure = Some(cellplot::figure::Figure::new());
    let text = screen_text(&render(&app));
    assert!(text.contains("No data to display"));
}
