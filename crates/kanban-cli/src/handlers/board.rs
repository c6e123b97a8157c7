use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;

#[derive(Serialize)]
struct BoardSummary<'a> {
    id: uuid::Uuid,
    title: &'a str,
    lists: usize,
    cards: usize,
}

pub fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { title } => {
            let board = ctx.create_board(&title)?;
            output::output_success(&board)
        }
        BoardAction::List => {
            let summaries: Vec<BoardSummary> = ctx
                .boards()
                .iter()
                .map(|board| BoardSummary {
                    id: board.id,
                    title: &board.title,
                    lists: board.lists.len(),
                    cards: board.card_count(),
                })
                .collect();
            output::output_list(summaries)
        }
        BoardAction::Get { id } => output::output_success(ctx.board(id)?),
        BoardAction::Update { id, title } => {
            let board = ctx.update_board(id, &title)?;
            output::output_success(&board)
        }
        BoardAction::Delete { id } => {
            ctx.delete_board(id)?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}))
        }
    }
}
