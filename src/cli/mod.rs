pub mod add;
pub mod alerts;
pub mod backup;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::{CommitmentTerm, Frequency};

#[derive(Parser)]
#[command(name = "renew", about = "Subscription tracking CLI for personal recurring expenses.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up renew: choose a data directory and initialize the database.
    Init {
        /// Path for renew data (default: ~/Documents/renew)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Add a subscription.
    Add {
        /// Subscription name, e.g. 'Netflix'
        name: String,
        /// Price per billing period
        #[arg(long)]
        price: f64,
        /// Billing frequency
        #[arg(long, value_enum)]
        frequency: Frequency,
        /// Start date: YYYY-MM-DD (may be omitted; the subscription shows as Incomplete)
        #[arg(long = "start-date")]
        start_date: Option<String>,
        /// Free-form category label
        #[arg(long, default_value = "Other")]
        category: String,
        /// Commitment term
        #[arg(long, value_enum, default_value = "none")]
        commitment: CommitmentTerm,
    },
    /// List subscriptions with derived schedule and status columns.
    List {
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by commitment term
        #[arg(long, value_enum)]
        commitment: Option<CommitmentTerm>,
        /// Sort column
        #[arg(long, value_enum, default_value = "name")]
        sort: SortKey,
    },
    /// Remove a subscription by id (shown in `renew list`).
    Remove {
        id: i64,
    },
    /// Show subscriptions due within the next 7 days.
    Alerts,
    /// Generate reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Import subscriptions from a CSV file.
    Import {
        /// Path to CSV file (Name,Price,Frequency,Start Date,Category,Commitment)
        file: String,
    },
    /// Export subscriptions to a CSV file.
    Export {
        /// Output path (default: <data_dir>/exports/subscriptions-YYYYMMDD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load sample subscriptions to explore renew.
    Demo,
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/renew-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly and annual cost totals.
    Summary,
    /// Monthly-equivalent spend per category.
    Categories,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Name,
    Price,
    Frequency,
    Category,
    Commitment,
}
