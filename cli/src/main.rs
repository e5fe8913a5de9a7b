use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use match_counter_cli::commands;
use match_counter_cli::host::{Host, SettingsStore};
use match_counter_cli::logging::init_logging;
use match_counter_cli::readline;
use match_counter_core::Trigger;
use match_counter_types::CounterLifecycle;

#[derive(Parser)]
#[command(version, about = "Win/loss match counter")]
struct Args {
    /// Settings file (defaults to the per-user config)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of display sources
    #[arg(short, long, default_value_t = 1)]
    sources: usize,
    /// Share one counter between all sources
    #[arg(long)]
    shared: bool,
}

fn main() -> Result<(), String> {
    init_logging();
    let args = Args::parse();

    let store = match args.config {
        Some(path) => SettingsStore::File(path),
        None => SettingsStore::UserConfig,
    };
    let mut settings = store.load()?;
    if args.shared {
        settings.lifecycle = CounterLifecycle::Shared;
    }

    let mut host = Host::new(settings, store, args.sources);
    print!("{}", commands::show(&host));

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut host) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    host.shutdown();
    Ok(())
}

#[derive(Parser)]
#[command(about = "match counter commands")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a win
    Win {
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Add a loss
    Loss {
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Remove a win
    UndoWin {
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Remove a loss
    UndoLoss {
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Zero wins and losses
    Reset {
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Set the win count (negative values become 0)
    SetWins {
        #[arg(allow_negative_numbers = true)]
        value: i32,
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Set the loss count (negative values become 0)
    SetLosses {
        #[arg(allow_negative_numbers = true)]
        value: i32,
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Press a bound hotkey
    Press {
        key: String,
        #[arg(short, long, default_value_t = 0)]
        source: usize,
    },
    /// Set the display format for every source
    Format {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Set the player name for every source
    Name {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// List format directives
    Directives,
    /// Show every source's text
    Show,
    /// Show counts and win rates
    Stats,
    /// Save settings and the current score (source 0's score when counters are per-source)
    Save,
    Exit,
}

fn respond(line: &str, host: &mut Host) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting\n")?;
    args.insert(0, "match-counter".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    let out = match &cli.command {
        Commands::Win { source } => commands::trigger(host, *source, Trigger::AddWin)?,
        Commands::Loss { source } => commands::trigger(host, *source, Trigger::AddLoss)?,
        Commands::UndoWin { source } => commands::trigger(host, *source, Trigger::SubtractWin)?,
        Commands::UndoLoss { source } => commands::trigger(host, *source, Trigger::SubtractLoss)?,
        Commands::Reset { source } => commands::trigger(host, *source, Trigger::Reset)?,
        Commands::SetWins { value, source } => commands::set_wins(host, *source, *value)?,
        Commands::SetLosses { value, source } => commands::set_losses(host, *source, *value)?,
        Commands::Press { key, source } => commands::press(host, *source, key)?,
        Commands::Format { text } => commands::set_format(host, text)?,
        Commands::Name { text } => commands::set_name(host, text)?,
        Commands::Directives => commands::directives(),
        Commands::Show => commands::show(host),
        Commands::Stats => commands::stats(host),
        Commands::Save => commands::save(host)?,
        Commands::Exit => {
            writeln!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
            std::io::stdout().flush().map_err(|e| e.to_string())?;
            return Ok(true);
        }
    };

    write!(std::io::stdout(), "{out}").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    Ok(false)
}
