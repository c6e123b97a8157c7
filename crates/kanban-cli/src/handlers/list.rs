use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &mut CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Add { board_id, title } => {
            let list = ctx.add_list(board_id, &title)?;
            output::output_success(&list)
        }
        ListAction::Update { board_id, id, title } => {
            let list = ctx.update_list(board_id, id, &title)?;
            output::output_success(&list)
        }
        ListAction::Delete { board_id, id } => {
            ctx.delete_list(board_id, id)?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}))
        }
        ListAction::Move {
            board_id,
            id,
            position,
        } => {
            let board = ctx.move_list(board_id, id, position)?;
            let order: Vec<_> = board.lists.iter().map(|l| l.id).collect();
            output::output_success(serde_json::json!({
                "id": id,
                "position": position,
                "order": order,
            }))
        }
    }
}
