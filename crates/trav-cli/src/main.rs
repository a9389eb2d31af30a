//! CLI frontend for the Traveller dice pool and data tools.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "trav",
    about = "Traveller toolkit: seeded d6 pools and extended-hex digits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool of d6 and apply modifiers in the order given
    Roll {
        /// Number of dice to roll
        #[arg(allow_negative_numbers = true)]
        count: i32,

        /// Modifiers, applied left to right: `+2`, `-1`, `-1,+2` or `FROM=TO`.
        /// Everything after COUNT is read as a modifier, so pass options first.
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        modifiers: Vec<String>,

        /// RNG seed for a reproducible roll (default: system clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also print the total as an extended-hex digit
        #[arg(long)]
        ehex: bool,

        /// Print the roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between numbers and extended-hex digits
    Ehex {
        /// A number (0-33) or a single digit (0-9, A-Z without I and O)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,

        /// Print every digit with its value
        #[arg(short, long)]
        table: bool,
    },

    /// Absolute difference between two extended-hex digits
    EhexDiff {
        /// First digit
        a: String,
        /// Second digit
        b: String,
    },

    /// Describe a star from its known attributes
    Star {
        /// Spectral type (e.g. G)
        #[arg(long = "type", default_value = "")]
        spectral_type: String,

        /// Spectral subtype (e.g. 2)
        #[arg(long, default_value = "")]
        subtype: String,

        /// Luminosity class (e.g. V)
        #[arg(long, default_value = "")]
        size: String,

        /// Orbit position code within the system
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        position: i32,

        /// Age in billions of years
        #[arg(long)]
        age: Option<f64>,

        /// Mark the star as charted
        #[arg(long)]
        mapped: bool,

        /// Free-form note
        #[arg(long)]
        comment: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let result = match cli.command {
        Commands::Roll {
            count,
            modifiers,
            seed,
            ehex,
            json,
        } => commands::roll::run(count, &modifiers, seed, ehex, json),
        Commands::Ehex { value, table } => commands::ehex::run(value.as_deref(), table),
        Commands::EhexDiff { a, b } => commands::ehex::diff(&a, &b),
        Commands::Star {
            spectral_type,
            subtype,
            size,
            position,
            age,
            mapped,
            comment,
            json,
        } => {
            let mut star = trav_core::Star::default()
                .with_spectral_type(spectral_type)
                .with_sub_type(subtype)
                .with_size(size)
                .with_position_code(position)
                .with_mapped(mapped);
            if let Some(age) = age {
                star = star.with_age_gyr(age);
            }
            if let Some(comment) = comment {
                star = star.with_comment(comment);
            }
            commands::star::run(&star, json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
