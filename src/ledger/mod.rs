use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::info;

use crate::csv_reader::{self, CsvError};
use crate::transaction::Transaction;

/// In-memory transaction table. Loaded once per source file and shared by
/// every query against it; queries never mutate the table.
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub(crate) fn load(path: &Path) -> Result<Ledger, CsvError> {
        let transactions = csv_reader::read_ledger(path)?;
        Ok(Ledger { transactions })
    }

    #[cfg(test)]
    pub(crate) fn from_transactions(transactions: Vec<Transaction>) -> Ledger {
        Ledger { transactions }
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Select every transaction where the focus account is the sender or the
    /// receiver, keeping the original row order. An empty result means the
    /// account does not appear anywhere in the ledger.
    pub(crate) fn filter_neighborhood(&self, focus_account: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.involves(focus_account))
            .cloned()
            .collect()
    }
}

/// Session-scoped cache of loaded ledgers, keyed by file path. A path is
/// read from disk at most once; there is no invalidation within a session.
pub(crate) struct LedgerCache {
    ledgers: HashMap<PathBuf, Ledger>,
}

impl LedgerCache {
    pub(crate) fn new() -> LedgerCache {
        LedgerCache { ledgers: HashMap::new() }
    }

    pub(crate) fn get_or_load(&mut self, path: &Path) -> Result<&Ledger, CsvError> {
        if !self.ledgers.contains_key(path) {
            let ledger = Ledger::load(path)?;
            info!("Loaded {} transactions from {}", ledger.len(), path.display());
            self.ledgers.insert(path.to_path_buf(), ledger);
        }

        Ok(self.ledgers.get(path).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(from: &str, to: &str, amount: f32) -> Transaction {
        Transaction {
            from_account: from.to_string(),
            to_account: to.to_string(),
            amount,
            timestamp: "2023-04-01 09:15:00".to_string(),
            ip: "203.0.113.7".to_string(),
            email: "holder@example.com".to_string(),
            phone: "+61 400 111 222".to_string(),
            from_holder: "From Holder".to_string(),
            from_bank: "ANZ".to_string(),
            to_holder: "To Holder".to_string(),
            to_bank: "Westpac".to_string(),
        }
    }

    #[test]
    fn filter_keeps_only_rows_touching_the_focus_account() {
        let ledger = Ledger::from_transactions(vec![
            tx("A", "B", 100.0),
            tx("C", "D", 50.0),
            tx("B", "A", 75.0),
        ]);

        let filtered = ledger.filter_neighborhood("A");
        assert_eq!(filtered.len(), 2);
        for t in &filtered {
            assert!(t.from_account == "A" || t.to_account == "A");
        }
    }

    #[test]
    fn filter_preserves_original_order() {
        let ledger = Ledger::from_transactions(vec![
            tx("A", "B", 100.0),
            tx("X", "A", 20.0),
            tx("C", "D", 50.0),
            tx("A", "Y", 30.0),
        ]);

        let filtered = ledger.filter_neighborhood("A");
        let amounts: Vec<f32> = filtered.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, 20.0, 30.0]);
    }

    #[test]
    fn filter_matches_are_exact_and_case_sensitive() {
        let ledger = Ledger::from_transactions(vec![
            tx("acc1", "B", 100.0),
            tx("ACC1", "B", 200.0),
            tx("ACC10", "B", 300.0),
        ]);

        let filtered = ledger.filter_neighborhood("ACC1");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 200.0);
    }

    #[test]
    fn unknown_account_yields_empty_result() {
        let ledger = Ledger::from_transactions(vec![
            tx("A", "B", 100.0),
            tx("C", "D", 50.0),
        ]);

        assert!(ledger.filter_neighborhood("ZZZ").is_empty());
    }

    #[test]
    fn filter_is_deterministic() {
        let ledger = Ledger::from_transactions(vec![
            tx("A", "B", 100.0),
            tx("B", "A", 75.0),
        ]);

        assert_eq!(ledger.filter_neighborhood("A"), ledger.filter_neighborhood("A"));
    }
}
