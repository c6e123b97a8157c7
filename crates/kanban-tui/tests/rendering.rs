use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban_core::AppConfig;
use kanban_domain::BoardStore;
use kanban_tui::{ui, App};
use ratatui::{backend::TestBackend, Terminal};

fn key(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn submit(app: &mut App, trigger: char, text: &str) {
    key(app, KeyCode::Char(trigger));
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
    key(app, KeyCode::Enter);
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| {
            app.relayout(frame.area());
            ui::render(app, frame);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn board_with_cards() -> App {
    let mut app = App::new(BoardStore::in_memory(), &AppConfig::default());
    submit(&mut app, 'n', "Roadmap");
    key(&mut app, KeyCode::Enter);
    submit(&mut app, 'a', "Backlog");
    submit(&mut app, 'a', "Shipped");
    key(&mut app, KeyCode::Left);
    submit(&mut app, 'n', "Search");
    submit(&mut app, 'n', "Export");
    app
}

#[test]
fn test_boards_view_lists_counts() {
    let mut app = board_with_cards();
    key(&mut app, KeyCode::Esc);

    let text = screen(&mut app);
    assert!(text.contains("Roadmap"));
    assert!(text.contains("Lists"));
    assert!(text.contains("Created"));
}

#[test]
fn test_board_view_shows_lists_and_cards() {
    let mut app = board_with_cards();
    let text = screen(&mut app);

    assert!(text.contains("Backlog (2)"));
    assert!(text.contains("Shipped (0)"));
    assert!(text.contains("Search"));
    assert!(text.contains("Export"));
    assert!(!text.contains("DRAGGING"));
}

#[test]
fn test_drag_marker_and_placeholder() {
    let mut app = board_with_cards();
    key(&mut app, KeyCode::Char(' '));
    key(&mut app, KeyCode::Right);

    let text = screen(&mut app);
    assert!(text.contains("DRAGGING card"));
    assert!(text.contains('\u{2501}'));

    key(&mut app, KeyCode::Esc);
    let text = screen(&mut app);
    assert!(!text.contains("DRAGGING"));
    assert!(!text.contains('\u{2501}'));
}

#[test]
fn test_overview_table() {
    let mut app = board_with_cards();
    key(&mut app, KeyCode::Char('t'));

    let text = screen(&mut app);
    assert!(text.contains("Lists"));
    assert!(text.contains("Cards"));
}
