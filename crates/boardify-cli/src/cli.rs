use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boardify")]
#[command(about = "Command-line client for the Boardify board tracker", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Backend base URI (overrides the config file)
    #[arg(long, global = true, value_name = "URI", env = "BOARDIFY_BACKEND_URI")]
    pub backend_uri: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "FILE", env = "BOARDIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the credential file used by the file store
    #[arg(long, global = true, value_name = "FILE", env = "BOARDIFY_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login(CredentialArgs),
    /// Create a new account (does not log in)
    Register(CredentialArgs),
    /// Forget the stored session token
    Logout,
    /// Show whether a session token is stored
    Status,
    /// Show the logged-in user
    Whoami,
    /// Board operations
    Board(BoardCommand),
    /// Ticket operations
    Ticket(TicketCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long, env = "BOARDIFY_PASSWORD", hide_env_values = true)]
    pub password: String,
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// List boards with ticket counts
    List,
    /// Get a board with its stages, tags and tickets
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a new board
    Create(BoardCreateArgs),
    /// Rename a board
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a board
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct BoardCreateArgs {
    #[arg(long)]
    pub name: String,
    /// Stage as NR:NAME, repeatable (e.g. --stage 1:Todo --stage 2:Done)
    #[arg(long = "stage", value_name = "NR:NAME", required = true)]
    pub stages: Vec<String>,
    /// Tag as NR:NAME, repeatable
    #[arg(long = "tag", value_name = "NR:NAME")]
    pub tags: Vec<String>,
}

// Ticket commands
#[derive(Args)]
pub struct TicketCommand {
    #[command(subcommand)]
    pub action: TicketAction,
}

#[derive(Subcommand)]
pub enum TicketAction {
    /// List the tickets of a board
    List {
        #[arg(long)]
        board_id: String,
        /// Only tickets in this stage
        #[arg(long)]
        stage: Option<i64>,
    },
    /// Create a ticket on a board
    Create(TicketCreateArgs),
    /// Update a ticket; only the given fields change
    Update(TicketUpdateArgs),
    /// Delete a ticket
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct TicketCreateArgs {
    #[arg(long)]
    pub board_id: String,
    #[arg(long)]
    pub stage: i64,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Due date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub due_at: Option<String>,
    /// Tag nr, repeatable
    #[arg(long = "tag", value_name = "NR")]
    pub tags: Vec<i64>,
}

#[derive(Args)]
pub struct TicketUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub stage: Option<i64>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD or RFC 3339)
    #[arg(long, conflicts_with = "clear_due_at")]
    pub due_at: Option<String>,
    #[arg(long)]
    pub clear_due_at: bool,
    /// Replace the tag set with these tag nrs, repeatable
    #[arg(long = "tag", value_name = "NR", conflicts_with = "clear_tags")]
    pub tags: Vec<i64>,
    #[arg(long)]
    pub clear_tags: bool,
}
