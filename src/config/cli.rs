use crate::core::{AgeGroup, MemberRow};
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

#[derive(Debug, Clone, Parser)]
#[command(name = "vplanit-rsvp")]
#[command(about = "RSVP drafts and app-demo navigation for VPlanit invitations")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the store file from the configuration
    #[arg(long)]
    pub store: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the stored draft
    Show,
    /// Validate the form and store it as a draft
    Save(FormArgs),
    /// Validate the form, store it and reset the form
    Submit(FormArgs),
    /// Delete the stored draft
    Clear,
    /// Walk the app-demo screens
    Navigate {
        /// Screen ids to show, in order
        screens: Vec<String>,

        /// Press back this many times afterwards
        #[arg(long, default_value = "0")]
        back: usize,
    },
    /// Print or switch the landing-page theme
    Theme {
        #[arg(long)]
        toggle: bool,

        /// System colour scheme, used when no theme is stored
        #[arg(long, default_value = "dark")]
        prefer: String,
    },
}

/// Edits applied to the form before saving or submitting.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub family_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Event to attend; repeat for several. Replaces the restored selection.
    #[arg(long = "event")]
    pub events: Vec<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub transport: Option<String>,

    /// NAME[:adult|child][:stay]; repeat for several. Replaces the restored guests.
    #[arg(long = "guest")]
    pub guests: Vec<GuestSpec>,
}

/// A guest row given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSpec(pub MemberRow);

impl FromStr for GuestSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default().to_string();
        let mut row = MemberRow {
            name,
            ..MemberRow::blank()
        };

        for part in parts {
            match part.trim() {
                "stay" => row.accommodation = true,
                other => row.age = other.parse::<AgeGroup>()?,
            }
        }

        Ok(GuestSpec(row))
    }
}
