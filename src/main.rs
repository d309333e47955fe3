// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use budget_terminal::{cli, commands, db};

fn init_tracing() {
    // stdout carries tables and JSON; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::resolve_path(matches.get_one::<String>("db").map(String::as_str))?;
    let mut conn = db::open_or_init(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            if db::seed_defaults_if_empty(&conn)? {
                println!("Added sample bills");
            }
            println!("Database initialized at {}", path.display());
        }
        Some(("bill", sub)) => commands::bills::handle(&conn, sub)?,
        Some(("check", sub)) => commands::check::handle_check(&conn, sub)?,
        Some(("cadence", sub)) => commands::check::handle_cadence(&conn, sub)?,
        Some(("calendar", sub)) => commands::calendar::handle(&conn, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
