use std::fs;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use spindle_core::journal::ActionJournal;
use spindle_core::router::Router;
use spindle_core::store::Store;
use spindle_core::Action;
use spindle_core::Config;
use spindle_core::PayloadError;
use spindle_core::StoreState;

#[derive(Parser, Debug)]
#[command(name = "spindle", version)]
#[command(about = "Route streaming-service UI actions through the spindle store", long_about = None)]
struct Args {
    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch newline-delimited JSON actions and print the resulting effects
    Replay {
        /// Store snapshot to start from (JSON)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Config file (defaults to <config dir>/spindle/config.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Append every dispatched action to this JSONL journal
        #[arg(long)]
        journal: Option<PathBuf>,

        /// Print the final store snapshot after all effects
        #[arg(long)]
        dump_state: bool,

        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Validate newline-delimited JSON actions without dispatching them
    Check {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Commands::Replay {
            state,
            config,
            journal,
            dump_state,
            input,
        } => {
            let config = load_config(config.as_deref())?;
            let state = load_state(state.as_deref())?;
            let mut store = Store::new(state, Router::new(config.router));
            if let Some(path) = journal.or(config.journal.path) {
                let journal = ActionJournal::open(&path)
                    .with_context(|| format!("opening journal {}", path.display()))?;
                log::info!("journaling to {}", journal.path().display());
                store = store.with_journal(journal);
            }
            let reader = open_input(input.as_deref())?;
            replay(&mut store, reader, &mut io::stdout().lock())?;
            if dump_state {
                let state = store.into_state();
                let mut stdout = io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, &state)?;
                writeln!(stdout)?;
            }
            Ok(())
        }
        Commands::Check { input } => {
            let reader = open_input(input.as_deref())?;
            let failures = check(reader, &mut io::stderr().lock())?;
            if failures > 0 {
                anyhow::bail!("{failures} malformed action(s)");
            }
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path).with_context(|| format!("loading {}", path.display()));
    }
    let Some(path) = dirs::config_dir().map(|dir| dir.join("spindle").join("config.toml")) else {
        return Ok(Config::default());
    };
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    Config::load(&path).with_context(|| format!("loading {}", path.display()))
}

fn load_state(path: Option<&Path>) -> Result<StoreState> {
    let Some(path) = path else {
        return Ok(StoreState::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing state {}", path.display()))
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn parse_line(line: &str) -> Result<Action, PayloadError> {
    let value = serde_json::from_str(line).map_err(PayloadError::NotJson)?;
    Action::from_value(value)
}

/// Non-blank lines with their 1-based line numbers.
fn numbered_lines(reader: impl BufRead) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|line| (idx + 1, line)))
        .filter(|entry| !matches!(entry, Ok((_, line)) if line.trim().is_empty()))
}

fn replay(store: &mut Store, reader: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut emitted = 0;
    for entry in numbered_lines(reader) {
        let (number, line) = entry?;
        let action = parse_line(&line).with_context(|| format!("line {number}"))?;
        log::debug!("line {number}: {}", action.kind());
        for effect in store.dispatch(action)? {
            serde_json::to_writer(&mut *out, &effect)?;
            writeln!(out)?;
            emitted += 1;
        }
    }
    Ok(emitted)
}

fn check(reader: impl BufRead, report: &mut impl Write) -> Result<usize> {
    let mut failures = 0;
    for entry in numbered_lines(reader) {
        let (number, line) = entry?;
        if let Err(err) = parse_line(&line) {
            writeln!(report, "line {number}: {err}")?;
            failures += 1;
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spindle_core::SessionState;

    fn authorized_store() -> Store {
        Store::new(
            StoreState::with_session(SessionState::authorized_as("u1")),
            Router::default(),
        )
    }

    #[test]
    fn replay_prints_one_effect_per_line() {
        let input = concat!(
            "{\"type\":\"SPOTIFY_CONNECT\"}\n",
            "\n",
            "{\"type\":\"SPOTIFY_DISCONNECTED\"}\n",
        );
        let mut store = authorized_store();
        let mut out = Vec::new();

        let emitted = replay(&mut store, input.as_bytes(), &mut out).expect("replay");

        assert_eq!(emitted, 2);
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json"))
            .collect();
        assert_eq!(lines[0]["type"], "SPOTIFY_GET_ME");
        assert_eq!(lines[1]["type"], "CREATE_NOTIFICATION");
        assert_eq!(lines[1]["message"], "Spotify disconnected");
    }

    #[test]
    fn replay_stops_at_malformed_line() {
        let input = "{\"type\":\"SPOTIFY_CONNECT\"}\n{\"type\":\"SPOTIFY_GET_TRACK\"}\n";
        let mut store = authorized_store();
        let err = replay(&mut store, input.as_bytes(), &mut Vec::new()).expect_err("malformed");
        assert!(format!("{err:#}").starts_with("line 2"));
    }

    #[test]
    fn check_counts_every_bad_line() {
        let input = "not json\n{\"type\":\"SPOTIFY_CONNECT\"}\n[1]\n{\"type\":\"ANYTHING\"}\n";
        let mut report = Vec::new();
        let failures = check(input.as_bytes(), &mut report).expect("check");
        assert_eq!(failures, 2);
        let report = String::from_utf8(report).expect("utf8");
        let numbers: Vec<&str> = report
            .lines()
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(numbers, vec!["line 1", "line 3"]);
    }

    #[test]
    fn missing_state_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tmpdir");
        assert!(load_state(Some(&dir.path().join("absent.json"))).is_err());
        assert_eq!(load_state(None).expect("default"), StoreState::default());
    }
}
