use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::config::Config;
use crate::graph;
use crate::ledger::LedgerCache;
use crate::render;

/// Run one spider-map query: narrow the ledger to the focus account's direct
/// transactions, print them, then render the map. An account with no
/// transactions is reported as a warning instead of an empty graph.
pub(crate) fn execute_query(cache: &mut LedgerCache, ledger_path: &Path, focus_account: &str, config: &Config) -> anyhow::Result<()> {
    let ledger = cache.get_or_load(ledger_path)?;

    let transactions = ledger.filter_neighborhood(focus_account);
    if transactions.is_empty() {
        warn!("Account {} not found in the dataset", focus_account);
        return Ok(());
    }

    let spider = graph::build_graph(&transactions, focus_account);
    info!("Spider map for {}: {} accounts, {} transfers", focus_account, spider.node_count(), spider.edge_count());

    println!("{}", render::transactions_table(&transactions, focus_account));

    let dot = render::to_dot(&spider, config);
    match &config.dot_file {
        Some(path) => {
            fs::write(path, dot)?;
            println!("Spider map written to {}", path);
        },
        None => {
            println!("{}", dot);
        }
    }

    Ok(())
}
