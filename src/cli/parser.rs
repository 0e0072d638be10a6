use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Command-line interface definition for heartline
/// CLI journal for relationship events with satisfaction scores
#[derive(Parser)]
#[command(
    name = "heartline",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple journaling CLI: log relationship events and chart satisfaction over time",
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

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add an event to the timeline
    Add {
        /// Date of the event (YYYY-MM-DD, or YYYY-MM with --month-only)
        date: String,

        /// What happened
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        description: String,

        /// Satisfaction score, -8 (worst) to +8 (best)
        #[arg(
            long,
            short = 's',
            allow_negative_numbers = true,
            default_value_t = 0,
            value_parser = clap::value_parser!(i32).range(-8..=8)
        )]
        score: i32,

        /// Record at month granularity (day hidden in display)
        #[arg(long = "month-only")]
        month_only: bool,
    },

    /// Edit an event by its list index
    Edit {
        /// 1-based index as shown by `list`
        index: usize,

        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        description: Option<String>,

        #[arg(
            long,
            short = 's',
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(-8..=8)
        )]
        score: Option<i32>,

        /// New date (YYYY-MM-DD, or YYYY-MM with --month-only)
        #[arg(long)]
        date: Option<String>,

        /// Switch the event to month granularity
        #[arg(long = "month-only", conflicts_with = "no_month_only")]
        month_only: bool,

        /// Switch the event back to day granularity
        #[arg(long = "no-month-only")]
        no_month_only: bool,
    },

    /// Delete an event by its list index (asks for confirmation)
    Del {
        /// 1-based index as shown by `list`
        index: usize,
    },

    /// List events in chronological order
    List,

    /// Draw the satisfaction timeline as an ASCII chart
    Chart,

    /// Export the journal as pretty-printed JSON
    Export {
        /// Output file (default: relationship-timeline-<today>.json)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace the journal with events from a JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the journal JSON to stdout (pipe to a clipboard tool to copy)
    Json,

    /// Show or set the interface language (en, hu)
    Lang {
        /// Language code to set; omit to show the current one
        code: Option<String>,
    },
}
