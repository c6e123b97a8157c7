use crate::app::{App, AppMode, View};
use crate::components::{render_confirm_popup, render_input_popup, PanelConfig};
use crate::drag::{DragItem, Hover};
use crate::layout::ListRegion;
use crate::theme::*;
use kanban_domain::{Board, Card, List};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const OVERVIEW_HEIGHT: u16 = 8;

struct Chunks {
    header: Rect,
    main: Rect,
    overview: Option<Rect>,
    footer: Rect,
}

fn chunks(area: Rect, show_overview: bool) -> Chunks {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let (main, overview) = if show_overview {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(OVERVIEW_HEIGHT)])
            .split(outer[1]);
        (split[0], Some(split[1]))
    } else {
        (outer[1], None)
    };

    Chunks {
        header: outer[0],
        main,
        overview,
        footer: outer[2],
    }
}

/// Area the board columns occupy in a frame of `area`.
pub fn board_area(area: Rect, show_overview: bool) -> Rect {
    chunks(area, show_overview).main
}

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = chunks(frame.area(), app.view == View::Board && app.show_overview);

    match app.view {
        View::Boards => {
            render_header(frame, chunks.header, "Boards", &format!("{} board(s)", app.store.boards().len()));
            render_boards_table(app, frame, chunks.main);
        }
        View::Board => {
            if let Some(board) = app.current_board() {
                render_header(
                    frame,
                    chunks.header,
                    &board.title,
                    &format!("{} list(s), {} card(s)", board.lists.len(), board.card_count()),
                );
                render_board(app, board, frame);
                if let Some(area) = chunks.overview {
                    render_overview(board, frame, area);
                }
            }
        }
    }

    render_footer(app, frame, chunks.footer);
    render_dialog(app, frame);
}

fn render_header(frame: &mut Frame, area: Rect, title: &str, summary: &str) {
    let line = Line::from(vec![
        Span::styled(title.to_string(), bold_highlight()),
        Span::raw("  "),
        Span::styled(summary.to_string(), label_text()),
    ]);
    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Kanban"));
    frame.render_widget(header, area);
}

fn render_boards_table(app: &App, frame: &mut Frame, area: Rect) {
    let boards = app.store.boards();
    if boards.is_empty() {
        let empty = Paragraph::new("No boards yet. Press 'n' to create one.")
            .style(label_text())
            .block(PanelConfig::new("Boards").focused(true).block());
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Title", "Lists", "Cards", "Created"]).style(bold_highlight());
    let rows = boards.iter().map(|board| {
        Row::new([
            Cell::from(board.title.clone()),
            Cell::from(board.lists.len().to_string()),
            Cell::from(board.card_count().to_string()),
            Cell::from(board.created_at.format("%Y-%m-%d").to_string()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(PanelConfig::new("Boards").focused(true).block())
    .row_highlight_style(selected_item(true));

    let mut state = TableState::default().with_selected(app.board_selection.get());
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_board(app: &App, board: &Board, frame: &mut Frame) {
    if board.lists.is_empty() {
        let area = board_area(frame.area(), app.show_overview);
        let empty = Paragraph::new("This board has no lists. Press 'a' to add one.")
            .style(label_text())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let active = app.drag.active();
    let hover = app.drag.hover();

    for region in &app.layout.lists {
        let Some(list) = board.lists.get(region.index) else {
            continue;
        };
        let dragging_this_list = matches!(active.map(|d| d.item), Some(DragItem::List { id }) if id == list.id);
        let is_list_drop_target = matches!(
            (active.map(|d| d.item), hover.and_then(Hover::placeholder)),
            (Some(DragItem::List { .. }), Some(slot)) if slot == region.index
        );

        let title = format!(" {} ({}) ", list.title, list.card_count());
        let panel = PanelConfig::new(&title)
            .focused(app.list_selection.is_selected(region.index))
            .drop_target(is_list_drop_target)
            .style(dragging_this_list.then(drag_source));
        frame.render_widget(panel.block(), region.area);

        render_cards(app, list, region, frame);

        let card_hover = match active.map(|d| d.item) {
            Some(DragItem::Card { .. }) => hover.filter(|h| h.list_id == list.id),
            _ => None,
        };
        if let Some(slot) = card_hover.and_then(Hover::placeholder) {
            render_drop_marker(frame, region, slot);
        }
    }
}

fn render_cards(app: &App, list: &List, region: &ListRegion, frame: &mut Frame) {
    let list_selected = app.list_selection.is_selected(region.index);
    let dragged_card = match app.drag.active().map(|d| d.item) {
        Some(DragItem::Card { id, .. }) => Some(id),
        _ => None,
    };

    for card_region in &region.cards {
        let Some(card) = list.cards.get(card_region.index) else {
            continue;
        };
        let selected = list_selected && app.card_selection.is_selected(card_region.index);
        let style = if dragged_card == Some(card.id) {
            drag_source()
        } else if selected {
            selected_item(true)
        } else {
            normal_text()
        };
        let border = if selected { focused_border() } else { unfocused_border() };

        let widget = Paragraph::new(card_line(card))
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(widget, card_region.area);
    }
}

fn card_line(card: &Card) -> Line<'_> {
    let mut spans = vec![Span::raw(card.title.as_str())];
    if card.description.is_some() {
        spans.push(Span::styled(" \u{2261}", label_text()));
    }
    Line::from(spans)
}

fn render_drop_marker(frame: &mut Frame, region: &ListRegion, slot: usize) {
    let row = region.slot_row(slot);
    let width = region.body.width as usize;
    let marker = Paragraph::new("\u{2501}".repeat(width)).style(drop_marker());
    frame.render_widget(marker, Rect::new(region.body.x, row, region.body.width, 1));
}

fn render_overview(board: &Board, frame: &mut Frame, area: Rect) {
    let header = Row::new(["#", "Id", "Title", "Cards"]).style(bold_highlight());
    let rows = board.lists.iter().enumerate().map(|(index, list)| {
        let id = list.id.to_string();
        Row::new([
            Cell::from((index + 1).to_string()),
            Cell::from(id.chars().take(8).collect::<String>()),
            Cell::from(list.title.clone()),
            Cell::from(list.card_count().to_string()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Lists"));
    frame.render_widget(table, area);
}

fn footer_help(app: &App) -> &'static str {
    match (app.view, app.mode) {
        (_, AppMode::DeleteBoard | AppMode::DeleteList | AppMode::DeleteCard) => "y: confirm | n/ESC: cancel",
        (_, mode) if mode != AppMode::Normal => "ENTER: save | ESC: cancel",
        (View::Boards, _) => "n: new | r: rename | d: delete | ENTER: open | q: quit",
        (View::Board, _) if !app.drag.is_idle() => "arrows: move | SPACE/ENTER: drop | ESC: cancel",
        (View::Board, _) => {
            "a: add list | n: add card | r: rename list | D: delete list | e/E: edit card | d: delete card | SPACE: move card | m: move list | t: overview | ESC: back"
        }
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status = if app.drag.effects().drag_active() {
        let what = match app.drag.active().map(|d| d.item) {
            Some(DragItem::List { .. }) => "list",
            _ => "card",
        };
        Line::from(Span::styled(format!(" DRAGGING {what} "), drag_banner()))
    } else if let Some(message) = &app.status {
        Line::from(Span::styled(message.clone(), error_text()))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(status), rows[0]);

    let help = Paragraph::new(footer_help(app)).style(label_text().add_modifier(Modifier::ITALIC));
    frame.render_widget(help, rows[1]);
}

fn render_dialog(app: &App, frame: &mut Frame) {
    let cursor = app.input.cursor_column();
    let text = app.input.as_str();
    match app.mode {
        AppMode::Normal => {}
        AppMode::CreateBoard => render_input_popup(frame, "New Board", "Title:", text, cursor),
        AppMode::RenameBoard => render_input_popup(frame, "Rename Board", "Title:", text, cursor),
        AppMode::CreateList => render_input_popup(frame, "New List", "Title:", text, cursor),
        AppMode::RenameList => render_input_popup(frame, "Rename List", "Title:", text, cursor),
        AppMode::CreateCard => render_input_popup(frame, "New Card", "Title:", text, cursor),
        AppMode::EditCardTitle => render_input_popup(frame, "Edit Card", "Title:", text, cursor),
        AppMode::DeleteBoard => {
            let title = app.selected_board().map_or("", |b| b.title.as_str());
            render_confirm_popup(
                frame,
                "Delete Board",
                &format!("Delete board '{title}' with all its lists and cards?"),
            );
        }
        AppMode::DeleteList => {
            let title = app.selected_list().map_or("", |l| l.title.as_str());
            render_confirm_popup(
                frame,
                "Delete List",
                &format!("Delete list '{title}' and its cards?"),
            );
        }
        AppMode::DeleteCard => {
            let title = app.selected_card().map_or("", |c| c.title.as_str());
            render_confirm_popup(frame, "Delete Card", &format!("Delete card '{title}'?"));
        }
    }
}
