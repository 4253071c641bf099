// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Red Curtain automation
//!
//! - `cargo xtask ci` runs the lint, test and migration checks in order
//! - `cargo xtask check-migrations` round-trips the persistence migrations
//!   through an in-memory `SQLite` database

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context, eyre::eyre};
use diesel::sql_types::{Nullable, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.task.run() {
        tracing::error!("{err:?}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask")]
struct Args {
    #[command(subcommand)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Task {
    /// Lint, test and check migrations
    Ci,

    /// Clippy with warnings denied, then a rustfmt check
    #[command(visible_alias = "l")]
    Lint,

    /// Reformat the workspace
    Fmt,

    /// Run every test in the workspace
    #[command(visible_alias = "t")]
    Test,

    /// Apply, revert and reapply the persistence migrations
    #[command(visible_alias = "cm")]
    CheckMigrations,
}

impl Task {
    fn run(self) -> Result<()> {
        match self {
            Self::Ci => {
                lint()?;
                test()?;
                check_migrations()
            }
            Self::Lint => lint(),
            Self::Fmt => cargo(&["fmt", "--all"]),
            Self::Test => test(),
            Self::CheckMigrations => check_migrations(),
        }
    }
}

fn lint() -> Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["fmt", "--all", "--check"])
}

fn test() -> Result<()> {
    cargo(&["test", "--workspace", "--all-targets"])
}

/// Runs one cargo invocation, logging it first so a failure can be
/// traced back to the step that caused it.
fn cargo(args: &[&str]) -> Result<()> {
    tracing::info!("cargo {}", args.join(" "));
    cmd("cargo", args)
        .run()
        .wrap_err_with(|| format!("cargo {} failed", args.join(" ")))?;
    Ok(())
}

/// One `sqlite_master` entry: a table, index or trigger with its DDL.
#[derive(Debug, Clone, PartialEq, Eq, QueryableByName)]
struct SchemaObject {
    #[diesel(sql_type = Text)]
    kind: String,
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Nullable<Text>)]
    sql: Option<String>,
}

/// Lists every user-defined schema object, skipping `SQLite` internals
/// and diesel's migration bookkeeping.
fn schema_snapshot(conn: &mut SqliteConnection) -> Result<Vec<SchemaObject>> {
    let objects: Vec<SchemaObject> = diesel::sql_query(
        "SELECT type AS kind, name, sql FROM sqlite_master \
         WHERE name NOT LIKE 'sqlite%' AND name != '__diesel_schema_migrations' \
         ORDER BY type, name",
    )
    .load(conn)
    .wrap_err("Failed to read sqlite_master")?;

    Ok(objects
        .into_iter()
        .map(|object| SchemaObject {
            sql: object
                .sql
                .map(|sql| sql.split_whitespace().collect::<Vec<&str>>().join(" ")),
            ..object
        })
        .collect())
}

/// Round-trips the embedded migrations and compares schema snapshots.
///
/// # Errors
///
/// Returns an error if:
/// - A migration fails to apply or revert
/// - Anything survives a full revert
/// - The reapplied schema differs from the first one
fn check_migrations() -> Result<()> {
    let mut conn: SqliteConnection = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to open in-memory SQLite database")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;
    let applied: Vec<SchemaObject> = schema_snapshot(&mut conn)?;
    tracing::info!(objects = applied.len(), "Migrations applied");

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;
    let leftover: Vec<SchemaObject> = schema_snapshot(&mut conn)?;
    if !leftover.is_empty() {
        let names: Vec<&str> = leftover.iter().map(|o| o.name.as_str()).collect();
        return Err(eyre!("Objects left behind after revert: {names:?}"));
    }
    tracing::info!("Migrations reverted");

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to reapply migrations: {e}"))?;
    let reapplied: Vec<SchemaObject> = schema_snapshot(&mut conn)?;

    if applied != reapplied {
        return Err(eyre!(
            "Schema differs after revert and reapply:\n{applied:#?}\n{reapplied:#?}"
        ));
    }

    tracing::info!("Migration check passed");
    Ok(())
}
