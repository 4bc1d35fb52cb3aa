use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BookArgs, SetFieldArgs};

/// Terminal front-end for the notarization intake wizard
///
/// Walks a customer through the five intake steps (documents, service
/// options, appointment, personal info, summary) one command at a time.
/// Progress is kept in a local state file, so the wizard can be left and
/// resumed at any point until the request is submitted.
#[derive(Parser)]
#[command(version, about, name = "intake")]
pub struct Args {
    /// Path to the SQLite state file. Defaults to
    /// $XDG_DATA_HOME/notary-intake/intake.db
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// JSON service catalog to price against instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory that receives submitted requests. Defaults to
    /// $XDG_DATA_HOME/notary-intake/outbox
    #[arg(long, global = true)]
    pub outbox: Option<PathBuf>,

    /// JSON file with the signed-in user's known details, used to pre-fill
    /// the personal info step
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    /// Only unlock a step once every step before it is complete
    #[arg(long, global = true)]
    pub strict_steps: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the intake CLI
///
/// Navigation commands move between steps through the access guard; the
/// remaining commands edit the form on behalf of the step views.
#[derive(Subcommand)]
pub enum Commands {
    /// Show progress through the wizard
    #[command(alias = "st")]
    Status,
    /// Navigate to a step route, e.g. /choose-option
    Goto {
        /// Route of the step to open
        route: String,
    },
    /// Complete the current step and continue (submits on the last step)
    #[command(alias = "n")]
    Next,
    /// Go back one step
    #[command(alias = "b")]
    Back,
    /// Jump to a step by number
    Jump {
        /// Step number (1-based)
        step: u32,
    },
    /// Add a document to the request
    AddDocument {
        /// Path of the file to attach
        path: PathBuf,
    },
    /// Remove a document by its position in the list
    RemoveDocument {
        /// Position as shown by `show` (1-based)
        index: usize,
    },
    /// Select a service type or add-on
    Select {
        /// Service option id, see `catalog`
        id: String,
    },
    /// Deselect a service type or add-on
    Deselect {
        /// Service option id
        id: String,
    },
    /// Set or clear the appointment
    Book(BookArgs),
    /// Set a personal info field
    Set(SetFieldArgs),
    /// Replace the free-text notes
    Notes {
        /// Notes for the notary
        text: String,
    },
    /// Show everything entered so far
    Show,
    /// Show the itemized price of the request
    Quote,
    /// List the available services and fees
    Catalog,
    /// Discard all progress and start over
    Reset,
}
