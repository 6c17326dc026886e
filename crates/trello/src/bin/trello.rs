//! Trello CLI - inspect and manage boards from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trello::{ActionSource, Resource, TrelloClient, TrelloConfig};

/// Trello CLI - query and update Trello boards.
#[derive(Parser)]
#[command(name = "trello")]
#[command(about = "Query and update Trello boards, cards and lists")]
struct Cli {
    /// Trello API key (or set `TRELLO_API_KEY` env var).
    #[arg(long, env = "TRELLO_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Trello member token (or set `TRELLO_TOKEN` env var).
    #[arg(long, env = "TRELLO_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// API root.
    #[arg(long, env = "TRELLO_BASE_URL", default_value = trello::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the member owning the token.
    Me,

    /// List the current member's organizations.
    Orgs,

    /// Board operations.
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },

    /// Card operations.
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },

    /// List operations.
    List {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Show the activity feed of a board, card, list, member or organization.
    Actions {
        /// Kind of entity owning the feed.
        #[arg(value_enum)]
        target: ActionTarget,

        #[arg(long)]
        id: String,

        /// Action type filter, e.g. `commentCard`.
        #[arg(long)]
        filter: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionTarget {
    Board,
    Card,
    List,
    Member,
    Organization,
}

#[derive(Subcommand)]
enum BoardCommands {
    /// Show a board.
    Get {
        #[arg(long)]
        id: String,
    },

    /// Close (archive) a board.
    Close {
        #[arg(long)]
        id: String,

        /// Skip confirmation prompt.
        #[arg(long, short = 'y', default_value = "false")]
        yes: bool,
    },

    /// List every card on a board.
    Cards {
        #[arg(long)]
        id: String,
    },

    /// List every list on a board.
    Lists {
        #[arg(long)]
        id: String,
    },

    /// Enable a power-up (voting, cardAging, calendar, recap).
    PowerUpAdd {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,
    },

    /// Disable a power-up.
    PowerUpRemove {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// Show a card.
    Get {
        #[arg(long)]
        id: String,
    },

    /// Add a comment to a card.
    Comment {
        #[arg(long)]
        id: String,

        #[arg(long)]
        text: String,
    },

    /// Move a card to another list.
    Move {
        #[arg(long)]
        id: String,

        /// Destination list ID.
        #[arg(long)]
        list: String,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// List the cards in a list.
    Cards {
        #[arg(long)]
        id: String,
    },

    /// Create a list on a board.
    Create {
        /// Board ID.
        #[arg(long)]
        board: String,

        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let client = TrelloClient::new(&config).context("Failed to create Trello client")?;

    match cli.command {
        Commands::Me => print_json(&client.members().current_user().await?)?,

        Commands::Orgs => {
            print_json(&client.members().current_user_organizations().await?)?;
        }

        Commands::Board { command } => run_board(&client, command).await?,

        Commands::Card { command } => match command {
            CardCommands::Get { id } => print_json(&client.cards().get(&id).await?)?,
            CardCommands::Comment { id, text } => {
                print_json(&client.cards().add_comment(&id, &text).await?)?;
            }
            CardCommands::Move { id, list } => {
                print_json(&client.cards().move_to_list(&id, &list).await?)?;
            }
        },

        Commands::List { command } => match command {
            ListCommands::Cards { id } => print_json(&client.lists().cards(&id).await?)?,
            ListCommands::Create { board, name } => {
                print_json(&client.boards().add_list(&board, &name).await?)?;
            }
        },

        Commands::Actions { target, id, filter } => {
            let filter = filter.as_deref();
            let actions = match target {
                ActionTarget::Board => client.boards().actions(&id, filter).await?,
                ActionTarget::Card => client.cards().actions(&id, filter).await?,
                ActionTarget::List => client.lists().actions(&id, filter).await?,
                ActionTarget::Member => client.members().actions(&id, filter).await?,
                ActionTarget::Organization => client.organizations().actions(&id, filter).await?,
            };
            print_json(&actions)?;
        }
    }

    Ok(())
}

async fn run_board(client: &TrelloClient, command: BoardCommands) -> Result<()> {
    let boards = client.boards();

    match command {
        BoardCommands::Get { id } => print_json(&boards.get(&id).await?)?,

        BoardCommands::Close { id, yes } => {
            if !yes {
                println!("Are you sure you want to close board {id}?");
                println!("Use --yes to skip this prompt.");
                return Ok(());
            }
            let closed = boards.close(&id).await?;
            println!("closed: {closed}");
        }

        BoardCommands::Cards { id } => print_json(&boards.cards(&id).await?)?,

        BoardCommands::Lists { id } => print_json(&boards.lists(&id).await?)?,

        BoardCommands::PowerUpAdd { id, name } => {
            boards.add_power_up(&id, &name).await?;
            info!(board_id = %id, power_up = %name, "Power-up enabled");
        }

        BoardCommands::PowerUpRemove { id, name } => {
            boards.remove_power_up(&id, &name).await?;
            info!(board_id = %id, power_up = %name, "Power-up disabled");
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<TrelloConfig> {
    let api_key = cli.api_key.trim();
    let token = cli.token.trim();

    if api_key.is_empty() || token.is_empty() {
        anyhow::bail!("Trello credentials are missing. Provide --api-key/--token or set TRELLO_API_KEY/TRELLO_TOKEN.");
    }

    Ok(TrelloConfig::new(api_key, token).with_base_url(cli.base_url.trim()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{rendered}");
    Ok(())
}
