use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "A terminal kanban board with drag-and-drop reordering", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Directory holding the saved boards (or set KANBAN_DATA_DIR)
    #[arg(long, value_name = "DIR", env = "KANBAN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        title: String,
    },
    /// List all boards
    List,
    /// Get a board with its lists and cards
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Rename a board
    Update {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a board with all its lists and cards
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a list to a board
    Add {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Update {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a list and its cards
    Delete {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Move a list to another position (0-based)
    Move {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        position: usize,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a card to a list
    Add(CardAddArgs),
    /// Change a card's title or description
    Update(CardUpdateArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Move a card within its list or to another list
    Move(CardMoveArgs),
}

#[derive(Args)]
pub struct CardAddArgs {
    #[arg(long)]
    pub board_id: Uuid,
    #[arg(long)]
    pub list_id: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub board_id: Uuid,
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    /// Remove the card's description
    #[arg(long)]
    pub clear_description: bool,
}

#[derive(Args)]
pub struct CardMoveArgs {
    #[arg(long)]
    pub board_id: Uuid,
    #[arg(long)]
    pub id: Uuid,
    /// Destination list (defaults to the card's current list)
    #[arg(long)]
    pub list_id: Option<Uuid>,
    /// Destination index (defaults to the end of the list)
    #[arg(long)]
    pub position: Option<usize>,
}
