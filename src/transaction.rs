/// A single transfer between two accounts, as recorded in the ledger.
/// The timestamp is kept verbatim from the source file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) from_account: String,
    pub(crate) to_account: String,
    pub(crate) amount: f32,
    pub(crate) timestamp: String,
    pub(crate) ip: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) from_holder: String,
    pub(crate) from_bank: String,
    pub(crate) to_holder: String,
    pub(crate) to_bank: String,
}

impl Transaction {
    /// True if the given account is the sender or the receiver. Exact,
    /// case-sensitive match.
    pub(crate) fn involves(&self, account: &str) -> bool {
        self.from_account == account || self.to_account == account
    }
}
