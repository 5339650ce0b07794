use crate::core::grouping::GroupMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for erfassungsbogen
#[derive(Parser)]
#[command(
    name = "erfassungsbogen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile time-tracking entries against staff-plan data and render printable timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Import time-tracking entries from a CSV file
    Import {
        /// CSV file with headers: employee,day,project,project_id,
        /// project_short,customer,customer_po,internal_po,task,minutes
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Import staff-plan override rows from a CSV file
    Staffplan {
        /// CSV file with headers: employee,day,project,project_id,
        /// project_short,customer,customer_po,internal_po
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List reconciled entries
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                   → entire year (e.g. "2025")
        /// - YYYY-MM                → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD             → specific day (e.g. "2025-06-18")
        /// - start:end ranges in the same format
        /// - all                    → the entire archive
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range"
        )]
        period: Option<String>,

        /// Skip the staff-plan override pass and show raw entries
        #[arg(long = "raw", help = "Show raw entries without staffplan overrides")]
        raw: bool,
    },

    /// Export reconciled entries or render the printable timesheet
    Export {
        /// Export format: csv, json, xlsx or pdf
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `list --period`)
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Grouping dimension for the PDF sheet
        #[arg(long = "group-by", value_enum, value_name = "MODE")]
        group_by: Option<GroupMode>,

        /// Sheet title (PDF only; defaults from config)
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Optional JPEG logo for the sheet header (skipped when unreadable)
        #[arg(long, value_name = "FILE")]
        logo: Option<String>,

        /// Skip the staff-plan override pass
        #[arg(long = "raw")]
        raw: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
