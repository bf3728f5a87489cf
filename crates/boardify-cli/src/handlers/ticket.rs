use crate::cli::{TicketAction, TicketCreateArgs, TicketUpdateArgs};
use crate::context::CliContext;
use crate::output;
use boardify_domain::{timestamp, BoardifyOperations, FieldUpdate, TicketCreate, TicketUpdate};
use chrono::{NaiveDate, NaiveDateTime};

pub async fn handle(ctx: &CliContext, action: TicketAction) -> anyhow::Result<()> {
    match action {
        TicketAction::List { board_id, stage } => {
            let board = ctx.service.get_board(&board_id).await?;
            let tickets: Vec<_> = match stage {
                Some(nr) => {
                    if board.stage(nr).is_none() {
                        return output::output_error(&format!(
                            "Stage {} does not exist on board {}",
                            nr, board.id
                        ));
                    }
                    board.tickets_in_stage(nr).cloned().collect()
                }
                None => board.tickets,
            };
            output::output_list(tickets)?;
        }
        TicketAction::Create(args) => {
            let board_id = args.board_id.clone();
            let create = build_ticket_create(args).map_err(|e| anyhow::anyhow!(e))?;
            let ticket = ctx.service.create_ticket(&board_id, &create).await?;
            output::output_success(&ticket)?;
        }
        TicketAction::Update(args) => {
            let update = build_ticket_update(&args).map_err(|e| anyhow::anyhow!(e))?;
            if update.is_empty() {
                return output::output_error("Nothing to update: pass at least one field");
            }
            let ticket = ctx.service.update_ticket(&args.id, &update).await?;
            output::output_success(&ticket)?;
        }
        TicketAction::Delete { id } => {
            ctx.service.delete_ticket(&id).await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
    }
    Ok(())
}

fn build_ticket_create(args: TicketCreateArgs) -> Result<TicketCreate, String> {
    let due_at = args.due_at.as_deref().map(parse_datetime).transpose()?;
    Ok(TicketCreate {
        due_at,
        tags: args.tags,
        ..TicketCreate::new(args.stage, args.title, args.description)
    })
}

fn build_ticket_update(args: &TicketUpdateArgs) -> Result<TicketUpdate, String> {
    Ok(TicketUpdate {
        stage_nr: args.stage,
        title: args.title.clone(),
        description: args.description.clone(),
        due_at: if args.clear_due_at {
            FieldUpdate::Clear
        } else {
            match &args.due_at {
                Some(d) => FieldUpdate::Set(parse_datetime(d)?),
                None => FieldUpdate::NoChange,
            }
        },
        tags: if args.clear_tags {
            Some(Vec::new())
        } else if args.tags.is_empty() {
            None
        } else {
            Some(args.tags.clone())
        },
    })
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    timestamp::parse(s)
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            format!(
                "Invalid date '{}'. Supported formats: YYYY-MM-DD or RFC 3339 (e.g., 2024-01-15T10:30:00Z)",
                s
            )
        })
}
