use crate::cli::{CardAction, CardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use kanban_domain::{CardUpdate, FieldUpdate};

pub fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Add(args) => {
            let card = ctx.add_card(args.board_id, args.list_id, &args.title, args.description)?;
            output::output_success(&card)
        }
        CardAction::Update(args) => {
            let (board_id, id) = (args.board_id, args.id);
            let updates = build_card_update(args);
            if !updates.is_change() {
                anyhow::bail!("Nothing to update: pass --title, --description or --clear-description");
            }
            let card = ctx.update_card(board_id, id, updates)?;
            output::output_success(&card)
        }
        CardAction::Delete { board_id, id } => {
            ctx.delete_card(board_id, id)?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}))
        }
        CardAction::Move(args) => {
            let (location, card) = ctx.move_card(args.board_id, args.id, args.list_id, args.position)?;
            output::output_success(serde_json::json!({
                "card": card,
                "listId": location.list_id,
                "position": location.index,
            }))
        }
    }
}

fn build_card_update(args: CardUpdateArgs) -> CardUpdate {
    let description = if args.clear_description {
        FieldUpdate::Clear
    } else {
        args.description
            .as_deref()
            .map_or(FieldUpdate::NoChange, FieldUpdate::from_text)
    };
    CardUpdate {
        title: args.title.map(|t| t.trim().to_string()),
        description,
    }
}
