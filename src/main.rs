use clap::Parser;
use env_logger::Env;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

use crate::config::Config;
use crate::ledger::LedgerCache;

mod config;
mod controller;
mod csv_reader;
mod graph;
mod ledger;
mod render;
mod transaction;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Transaction ledger csv file path
    ledger: String,

    /// Render settings file
    render_settings_file: Option<String>,

    /// Run a single query for this account and exit
    #[clap(short, long)]
    account: Option<String>,
}

static COMMAND_HISTORY_FILE: &str = ".spidermap_history";
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match &cli.render_settings_file {
        Some(f) => Config::load_from_file(f),
        None => Config::empty(),
    };

    let ledger_path = PathBuf::from(&cli.ledger);
    let mut cache = LedgerCache::new();

    if let Some(account) = &cli.account {
        if let Err(err) = controller::execute_query(&mut cache, &ledger_path, account, &config) {
            println!("{}", err);
        }
        return;
    }

    let mut rl = DefaultEditor::new().unwrap();
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline("account # ");
        match readline {
            Ok(line) => {
                let account = line.trim();
                if account.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(account);

                if let Err(err) = controller::execute_query(&mut cache, &ledger_path, account, &config) {
                    println!("{}", err);
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }
    rl.save_history(COMMAND_HISTORY_FILE).unwrap();
}
