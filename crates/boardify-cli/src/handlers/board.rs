use crate::cli::{BoardAction, BoardCreateArgs};
use crate::context::CliContext;
use crate::output;
use boardify_domain::{BoardCreate, BoardOverview, BoardUpdate, BoardifyOperations, Stage, Tag};
use serde::Serialize;

#[derive(Serialize)]
struct BoardListItem {
    #[serde(flatten)]
    overview: BoardOverview,
    open_tickets_count: u64,
}

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::List => {
            let boards = ctx.service.list_boards().await?;
            let items = boards
                .into_iter()
                .map(|overview| BoardListItem {
                    open_tickets_count: overview.open_tickets_count(),
                    overview,
                })
                .collect();
            output::output_list(items)?;
        }
        BoardAction::Get { id } => {
            let board = ctx.service.get_board(&id).await?;
            output::output_success(&board)?;
        }
        BoardAction::Create(args) => {
            let create = build_board_create(args).map_err(|e| anyhow::anyhow!(e))?;
            let board = ctx.service.create_board(&create).await?;
            output::output_success(&board)?;
        }
        BoardAction::Update { id, name } => {
            let board = ctx.service.update_board(&id, &BoardUpdate { name }).await?;
            output::output_success(&board)?;
        }
        BoardAction::Delete { id } => {
            ctx.service.delete_board(&id).await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
    }
    Ok(())
}

fn build_board_create(args: BoardCreateArgs) -> Result<BoardCreate, String> {
    let stages = args
        .stages
        .iter()
        .map(|s| parse_numbered(s).map(|(nr, name)| Stage::new(nr, name)))
        .collect::<Result<Vec<_>, _>>()?;
    let tags = args
        .tags
        .iter()
        .map(|s| parse_numbered(s).map(|(nr, name)| Tag::new(nr, name)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoardCreate {
        name: args.name,
        stages,
        tags,
    })
}

/// Parses `NR:NAME`, e.g. `1:Todo`.
fn parse_numbered(s: &str) -> Result<(i64, String), String> {
    let invalid = || format!("Invalid value '{}'. Expected NR:NAME (e.g., 1:Todo)", s);
    let (nr, name) = s.split_once(':').ok_or_else(invalid)?;
    let nr = nr.trim().parse::<i64>().map_err(|_| invalid())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok((nr, name.to_string()))
}
