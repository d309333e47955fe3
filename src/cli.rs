// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn money_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .allow_hyphen_values(true)
        .help(help)
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true).help("Bill id (see `bill list`)")
}

pub fn build_cli() -> Command {
    Command::new("budget-terminal")
        .version(crate_version!())
        .about("Track recurring bills and check whether a balance covers them")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env("BUDGET_TERMINAL_DB")
                .help("Path to the SQLite database (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database and seed sample bills"))
        .subcommand(
            Command::new("bill")
                .about("Add, edit and remove bills")
                .subcommand(
                    Command::new("add")
                        .about("Append a bill; omitted fields start blank")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("due").long("due").help("Day of month, e.g. 15"))
                        .arg(money_arg("amount", "Amount, e.g. 1,200.00"))
                        .arg(Arg::new("paid").long("paid").action(ArgAction::SetTrue)),
                )
                .subcommand(Command::new("list").about("List bills by due day").args(json_args()))
                .subcommand(
                    Command::new("edit")
                        .about("Change fields of one bill")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("due").long("due").help("Day of month; 0 or empty clears it"))
                        .arg(money_arg("amount", "New amount"))
                        .arg(Arg::new("paid").long("paid").help("true|false")),
                )
                .subcommand(Command::new("rm").about("Remove a bill").arg(id_arg()))
                .subcommand(
                    Command::new("reset-paid").about("Mark every bill unpaid for a new cycle"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Quick check: do unpaid bills and a purchase fit the balance?")
                .arg(money_arg("balance", "Current account balance").required(true))
                .arg(money_arg("purchase", "Prospective purchase").default_value("0"))
                .args(json_args()),
        )
        .subcommand(
            Command::new("cadence")
                .about("Unpaid bills grouped by pay period")
                .args(json_args()),
        )
        .subcommand(
            Command::new("calendar")
                .about("Month grid of due dates")
                .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to this month"))
                .args(json_args()),
        )
        .subcommand(
            Command::new("import").about("Replace bills from a JSON export").arg(
                Arg::new("path").long("path").required(true),
            ),
        )
        .subcommand(
            Command::new("export")
                .about("Write bills to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("json")
                        .help("json|csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("settings").about("Display settings").subcommand(
                Command::new("symbol")
                    .about("Show or set the currency symbol")
                    .arg(Arg::new("value")),
            ),
        )
        .subcommand(Command::new("doctor").about("Report bills that will not group cleanly"))
}
