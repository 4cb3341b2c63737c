//! In-memory repository for transaction records.

use crate::entities::{CreateTransactionRequest, Transaction};
use crate::types::CommunityResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Repository holding the financial ledger of every condominium.
/// Entries are append-only and listed newest-first.
#[derive(Clone)]
pub struct TransactionRepository {
    transactions: Arc<RwLock<HashMap<i64, Transaction>>>,
    next_id: Arc<RwLock<i64>>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn create(
        &self,
        request: &CreateTransactionRequest,
    ) -> CommunityResult<Transaction> {
        let mut next_id = self.next_id.write().await;
        let transaction_id = *next_id;
        *next_id += 1;

        let mut transaction = Transaction::new(request);
        transaction.id = transaction_id;

        let mut transactions = self.transactions.write().await;
        transactions.insert(transaction_id, transaction.clone());

        Ok(transaction)
    }

    pub async fn find_by_public_id(
        &self,
        public_id: &str,
    ) -> CommunityResult<Option<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions
            .values()
            .find(|t| t.public_id == public_id)
            .cloned())
    }

    /// List transactions of a condominium, newest-first.
    pub async fn list_by_condo(&self, condo_id: &str) -> CommunityResult<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        let mut results: Vec<Transaction> = transactions
            .values()
            .filter(|t| t.condo_id == condo_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(results)
    }
}
