//! Counter operator CLI.
//!
//! Provides the `counter` binary for inspecting and adjusting the persisted
//! counter directly in its SQLite database, with the same semantics as the
//! HTTP server: every command initializes the row if it is missing, and
//! updates run in the same locked transaction.
//!
//! Prints `{"count": n}` to stdout on success. On failure prints the error
//! to stderr and exits with code 1.

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use counter_storage::{CounterStore, SqliteStore, StorageError};

/// Inspect and adjust the persisted counter.
#[derive(Parser)]
#[command(name = "counter", about = "Inspect and adjust the persisted counter")]
struct Cli {
    /// Path to the counter database file.
    #[arg(short, long, default_value = "counter.db")]
    db: String,

    /// How long to wait on another writer, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    busy_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Create the counter row if it does not exist.
    Init,
    /// Print the current value.
    Get,
    /// Add one and print the new value.
    Increment,
    /// Subtract one and print the new value.
    Decrement,
}

fn main() {
    let cli = Cli::parse();

    let result = run(&cli);
    match &result {
        Ok(count) => println!("{}", serde_json::json!({ "count": count })),
        Err(e) => eprintln!("Error: {} (database '{}')", e, cli.db),
    }
    process::exit(exit_code(&result));
}

/// Maps a command outcome to the process exit code: 0 = success,
/// 1 = failure.
fn exit_code(result: &Result<i64, StorageError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Executes the selected subcommand and returns the resulting value.
fn run(cli: &Cli) -> Result<i64, StorageError> {
    let store =
        SqliteStore::with_busy_timeout(&cli.db, Duration::from_millis(cli.busy_timeout_ms))?;
    store.ensure_initialized()?;

    match cli.command {
        Commands::Init | Commands::Get => store.read(),
        Commands::Increment => store.apply_delta(1),
        Commands::Decrement => store.apply_delta(-1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(db: &str, command: &str) -> Cli {
        Cli::try_parse_from(["counter", "--db", db, command]).unwrap()
    }

    fn temp_db_path() -> String {
        std::env::temp_dir()
            .join(format!("counter_cli_test_{}.db", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn parses_subcommands_and_defaults() {
        let cli = Cli::try_parse_from(["counter", "increment"]).unwrap();
        assert_eq!(cli.db, "counter.db");
        assert_eq!(cli.busy_timeout_ms, 5000);
        assert_eq!(cli.command, Commands::Increment);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["counter", "reset"]).is_err());
    }

    #[test]
    fn commands_share_one_counter() {
        let db = temp_db_path();
        assert_eq!(run(&cli_for(&db, "init")).unwrap(), 0);
        assert_eq!(run(&cli_for(&db, "increment")).unwrap(), 1);
        assert_eq!(run(&cli_for(&db, "increment")).unwrap(), 2);
        assert_eq!(run(&cli_for(&db, "decrement")).unwrap(), 1);
        assert_eq!(run(&cli_for(&db, "get")).unwrap(), 1);
    }

    #[test]
    fn success_exits_zero() {
        let db = temp_db_path();
        assert_eq!(exit_code(&run(&cli_for(&db, "get"))), 0);
    }

    #[test]
    fn unreachable_database_exits_one() {
        let db = std::env::temp_dir()
            .join(format!("counter_cli_missing_{}", uuid::Uuid::new_v4()))
            .join("counter.db")
            .to_string_lossy()
            .to_string();

        let result = run(&cli_for(&db, "increment"));
        assert!(matches!(result, Err(StorageError::Database(_))));
        assert_eq!(exit_code(&result), 1);
    }
}
