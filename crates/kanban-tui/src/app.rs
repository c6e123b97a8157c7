use crate::drag::{ActivationPolicy, DragCoordinator, DragEffects};
use crate::editor::edit_in_external_editor;
use crate::events::{Event, EventHandler};
use crate::layout::{BoardLayout, BoardScroll};
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kanban_core::{AppConfig, InputState, KanbanResult, SelectionState};
use kanban_domain::{Board, BoardStore, Card, CardUpdate, FieldUpdate, List};
use kanban_persistence::{FileStorage, KeyValueStorage, LocalStorage, SaveQueue, SaveWorker};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io;
use std::sync::Arc;

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub view: View,
    pub input: InputState,
    pub store: BoardStore,
    pub board_selection: SelectionState,
    pub list_selection: SelectionState,
    pub card_selection: SelectionState,
    pub drag: DragCoordinator,
    pub scroll: BoardScroll,
    pub layout: BoardLayout,
    pub show_overview: bool,
    pub status: Option<String>,
    pub(crate) follow_pending: bool,
    save_queue: Option<Arc<SaveQueue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Boards,
    Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    CreateBoard,
    RenameBoard,
    DeleteBoard,
    CreateList,
    RenameList,
    DeleteList,
    CreateCard,
    EditCardTitle,
    DeleteCard,
}

/// Work that needs the terminal and so runs in the event loop rather than
/// in a key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    EditDescription,
}

impl App {
    pub fn new(store: BoardStore, config: &AppConfig) -> Self {
        let mut board_selection = SelectionState::new();
        board_selection.clamp(store.boards().len());

        Self {
            should_quit: false,
            mode: AppMode::Normal,
            view: View::Boards,
            input: InputState::new(),
            store,
            board_selection,
            list_selection: SelectionState::new(),
            card_selection: SelectionState::new(),
            drag: DragCoordinator::new(ActivationPolicy::from(&config.drag), DragEffects::new()),
            scroll: BoardScroll::default(),
            layout: BoardLayout::default(),
            show_overview: false,
            status: None,
            follow_pending: true,
            save_queue: None,
        }
    }

    /// Open the boards saved in the configured data directory. Writes go
    /// through a background save worker; pass it to [`App::run`] so the last
    /// write lands before exit.
    pub fn open(config: &AppConfig) -> (Self, SaveWorker) {
        let data_dir = config.effective_data_dir();
        tracing::info!("Using data directory {}", data_dir.display());

        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(data_dir));
        let (queue, worker) = SaveQueue::spawn(storage);
        let store = BoardStore::load(
            LocalStorage::new(queue.clone()),
            config.effective_storage_key(),
        );

        let mut app = Self::new(store, config);
        app.save_queue = Some(queue);
        (app, worker)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.store.current_board()
    }

    pub fn selected_board(&self) -> Option<&Board> {
        self.board_selection
            .get()
            .and_then(|idx| self.store.boards().get(idx))
    }

    pub fn selected_list(&self) -> Option<&List> {
        let board = self.current_board()?;
        board.lists.get(self.list_selection.get()?)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        let list = self.selected_list()?;
        list.cards.get(self.card_selection.get()?)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Deferred> {
        self.status = None;
        let code = key.code;
        let deferred = match self.mode {
            AppMode::Normal => match self.view {
                View::Boards => {
                    self.handle_boards_view_key(code);
                    None
                }
                View::Board => self.handle_board_view_key(code),
            },
            AppMode::CreateBoard => {
                self.handle_create_board_dialog(code);
                None
            }
            AppMode::RenameBoard => {
                self.handle_rename_board_dialog(code);
                None
            }
            AppMode::DeleteBoard => {
                self.handle_delete_board_confirm(code);
                None
            }
            AppMode::CreateList => {
                self.handle_create_list_dialog(code);
                None
            }
            AppMode::RenameList => {
                self.handle_rename_list_dialog(code);
                None
            }
            AppMode::DeleteList => {
                self.handle_delete_list_confirm(code);
                None
            }
            AppMode::CreateCard => {
                self.handle_create_card_dialog(code);
                None
            }
            AppMode::EditCardTitle => {
                self.handle_edit_card_title_dialog(code);
                None
            }
            AppMode::DeleteCard => {
                self.handle_delete_card_confirm(code);
                None
            }
        };

        self.sync_selection();
        deferred
    }

    pub fn handle_tick(&mut self) {
        self.drag.tick(std::time::Instant::now());
    }

    /// Keep selections inside the current data and leave the board view if
    /// its board is gone.
    pub fn sync_selection(&mut self) {
        self.board_selection.clamp(self.store.boards().len());

        if self.view == View::Board && self.current_board().is_none() {
            self.view = View::Boards;
            self.drag.cancel();
        }

        let list_count = self.current_board().map_or(0, |b| b.lists.len());
        self.list_selection.clamp(list_count);
        let card_count = self.selected_list().map_or(0, List::card_count);
        self.card_selection.clamp(card_count);
        self.scroll.retain_lists(self.store.current_board());
        self.follow_pending = true;
    }

    /// Recompute scroll offsets and the hit-test geometry for a frame of
    /// `frame_area`.
    pub fn relayout(&mut self, frame_area: Rect) {
        if self.view != View::Board {
            self.layout = BoardLayout::default();
            return;
        }
        let area = ui::board_area(frame_area, self.show_overview);
        let Some(board) = self.store.current_board() else {
            self.layout = BoardLayout::default();
            return;
        };

        if self.follow_pending && !self.drag.effects().scroll_locked() {
            self.scroll.follow(
                area,
                board,
                self.list_selection.get(),
                self.card_selection.get(),
            );
            self.follow_pending = false;
        }
        let layout = BoardLayout::compute(area, board, &self.scroll);
        self.layout = layout;
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.relayout(frame.area());
        ui::render(self, frame);
    }

    fn edit_card_description(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) {
        let (Some(board), Some(list), Some(card)) = (
            self.current_board().map(|b| b.id),
            self.selected_list().map(|l| l.id),
            self.selected_card().cloned(),
        ) else {
            return;
        };

        let temp_file = std::env::temp_dir().join(format!("kanban-card-{}.md", card.id));
        let current = card.description.clone().unwrap_or_default();

        match edit_in_external_editor(terminal, events, temp_file, &current) {
            Ok(Some(content)) => {
                self.store.update_card(
                    board,
                    list,
                    card.id,
                    CardUpdate {
                        title: None,
                        description: FieldUpdate::from_text(&content),
                    },
                );
            }
            Ok(None) => tracing::debug!("Editor exited without saving"),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub async fn run(&mut self, worker: SaveWorker) -> KanbanResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        self.shutdown(worker).await;
        result
    }

    /// Stop background saving and wait until every queued write is on disk.
    pub async fn shutdown(&mut self, worker: SaveWorker) {
        self.drag.cancel();
        if let Some(queue) = self.save_queue.take() {
            queue.close();
        }
        worker.finish().await;
        tracing::debug!("Save worker drained");
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> KanbanResult<()> {
        while !self.should_quit {
            let mut events = EventHandler::new();

            loop {
                terminal.draw(|frame| self.draw(frame))?;

                match events.next().await {
                    Some(Event::Key(key)) => {
                        if let Some(Deferred::EditDescription) = self.handle_key_event(key) {
                            self.edit_card_description(terminal, &events);
                            break;
                        }
                    }
                    Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse),
                    Some(Event::Tick) => self.handle_tick(),
                    None => self.quit(),
                }

                if self.should_quit {
                    break;
                }
            }

            events.stop();
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
