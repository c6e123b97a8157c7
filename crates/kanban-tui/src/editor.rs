use crate::events::EventHandler;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

fn which_editor() -> String {
    let (finder, candidates, fallback) = if cfg!(target_os = "windows") {
        ("where", ["nvim", "vim", "nano", "notepad"], "notepad")
    } else {
        ("which", ["nvim", "vim", "nano", "vi"], "vi")
    };

    candidates
        .iter()
        .find(|editor| {
            Command::new(finder)
                .arg(editor)
                .output()
                .map(|output| output.status.success())
                .unwrap_or(false)
        })
        .unwrap_or(&fallback)
        .to_string()
}

fn resume_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;
    terminal.clear()
}

/// Suspend the TUI, open `initial_content` in `$EDITOR` and return what was
/// saved, or `None` if the editor exited unsuccessfully.
///
/// The event handler is stopped first so the editor owns the terminal; the
/// caller must start a new one afterwards.
pub fn edit_in_external_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    event_handler: &EventHandler,
    temp_file: PathBuf,
    initial_content: &str,
) -> io::Result<Option<String>> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| which_editor());

    std::fs::write(&temp_file, initial_content)?;

    event_handler.stop();

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    io::stdout().flush()?;

    let status = match Command::new(&editor).arg(&temp_file).status() {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("Failed to launch editor '{}': {}", editor, e);
            resume_terminal(terminal)?;
            let _ = std::fs::remove_file(&temp_file);
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Editor '{}' not found. Please set $EDITOR environment variable.", editor),
            ));
        }
    };

    while crossterm::event::poll(std::time::Duration::from_millis(0))? {
        let _ = crossterm::event::read()?;
    }

    resume_terminal(terminal)?;

    let result = if status.success() {
        Some(std::fs::read_to_string(&temp_file)?)
    } else {
        None
    };

    let _ = std::fs::remove_file(&temp_file);

    Ok(result)
}
