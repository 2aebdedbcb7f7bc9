mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use condeck_core::store::ContestStore;

#[derive(Parser)]
#[command(name = "condeck")]
#[command(about = "Track contest entries, deadlines and submissions from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new contest
    Add {
        /// Contest name (prompted if omitted)
        name: Option<String>,

        /// Submission window opens (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Submission deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,

        /// Winner announcement date (YYYY-MM-DD)
        #[arg(long)]
        announcement: Option<String>,

        /// Prize description
        #[arg(long)]
        prize: Option<String>,

        /// What gets submitted (e.g. "pitch deck, demo video")
        #[arg(long)]
        submission_type: Option<String>,

        /// Contest website
        #[arg(long)]
        link: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Edit an existing contest
    Edit {
        /// Contest id (see `condeck list`)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        deadline: Option<String>,

        #[arg(long)]
        announcement: Option<String>,

        /// Drop the announcement date
        #[arg(long)]
        clear_announcement: bool,

        #[arg(long)]
        prize: Option<String>,

        #[arg(long)]
        submission_type: Option<String>,

        #[arg(long)]
        link: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a contest
    Remove {
        /// Contest id (see `condeck list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show contests as cards, nearest deadline first
    List {
        /// Also show contests whose deadline has passed
        #[arg(short, long)]
        all: bool,
    },
    /// Render the month calendar
    Calendar {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show where condeck keeps its data, or move the contest store
    Config {
        /// Store contests in this directory from now on
        #[arg(long)]
        data_dir: Option<String>,
    },
    /// Manage contest participants
    Participant {
        #[command(subcommand)]
        command: ParticipantCommands,
    },
}

#[derive(Subcommand)]
enum ParticipantCommands {
    /// Add a participant to a contest
    Add { contest_id: String, name: String },
    /// Remove a participant from a contest
    Remove { contest_id: String, name: String },
    /// Toggle whether a participant has submitted
    Toggle { contest_id: String, name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = ContestStore::open_default()?;

    match cli.command {
        Commands::Add {
            name,
            start,
            deadline,
            announcement,
            prize,
            submission_type,
            link,
            notes,
        } => commands::add::run(
            &store,
            name,
            start,
            deadline,
            announcement,
            prize,
            submission_type,
            link,
            notes,
        ),
        Commands::Edit {
            id,
            name,
            start,
            deadline,
            announcement,
            clear_announcement,
            prize,
            submission_type,
            link,
            notes,
        } => commands::edit::run(
            &store,
            &id,
            name,
            start,
            deadline,
            announcement,
            clear_announcement,
            prize,
            submission_type,
            link,
            notes,
        ),
        Commands::Remove { id, yes } => commands::remove::run(&store, &id, yes),
        Commands::List { all } => commands::list::run(&store, all),
        Commands::Calendar { month } => commands::calendar::run(&store, month.as_deref()),
        Commands::Config { data_dir } => commands::config::run(data_dir),
        Commands::Participant { command } => match command {
            ParticipantCommands::Add { contest_id, name } => {
                commands::participant::add(&store, &contest_id, &name)
            }
            ParticipantCommands::Remove { contest_id, name } => {
                commands::participant::remove(&store, &contest_id, &name)
            }
            ParticipantCommands::Toggle { contest_id, name } => {
                commands::participant::toggle(&store, &contest_id, &name)
            }
        },
    }
}
