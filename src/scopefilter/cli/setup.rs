use clap::{Parser, Subcommand, ValueEnum};

const ENV_LOG: &str = "SCOPEFILTER_LOG";

#[derive(Parser, Debug)]
#[command(name = "scopefilter", bin_name = "scopefilter", version)]
#[command(about = "Inspect and drive search filter state", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global scope
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Write sample filter definitions
    Init,

    /// Show every filter and its current selection
    #[command(alias = "ls")]
    List,

    /// Activate an option of a selector, radio or rating filter
    Select { filter: String, option: String },

    /// Deactivate an option of a selector, radio or rating filter
    Deselect { filter: String, option: String },

    /// Turn a switch filter on or off
    Switch {
        filter: String,
        #[arg(value_enum)]
        state: SwitchState,
    },

    /// Set a range filter; an omitted bound is left open
    Range {
        filter: String,
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,
    },

    /// Set a value slider
    Slider {
        filter: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Clear one filter's selection, or all of them
    Reset { filter: Option<String> },

    /// Print the filter descriptions and the state as JSON
    Emit {
        /// Indent the output (overrides the pretty-json setting)
        #[arg(long)]
        pretty: bool,
    },

    /// Show or set configuration
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn is_on(self) -> bool {
        self == SwitchState::On
    }
}

/// Diagnostics go to stderr so `emit` output stays clean.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string())
    };

    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(filter)
        .try_init();
}
