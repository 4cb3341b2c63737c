//! Transaction service for the financial ledger.

use crate::entities::{CreateTransactionRequest, Transaction};
use crate::repositories::TransactionRepository;
use crate::types::{CommunityError, CommunityResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Derived totals over a condominium's ledger.
/// Recomputed on every read; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of all income entries
    pub income_total: f64,
    /// Sum of all expense entries
    pub expense_total: f64,
    /// Income minus expenses
    pub balance: f64,
    /// Expense totals keyed by budget category
    pub expenses_by_category: HashMap<String, f64>,
}

/// Service for managing transaction operations
pub struct TransactionService {
    repository: Arc<TransactionRepository>,
}

impl TransactionService {
    /// Create a new transaction service instance
    pub fn new(repository: Arc<TransactionRepository>) -> Self {
        Self { repository }
    }

    /// Record a new transaction
    pub async fn record(&self, request: CreateTransactionRequest) -> CommunityResult<Transaction> {
        if let Err(e) = request.validate() {
            return Err(CommunityError::validation(e));
        }

        let transaction = self.repository.create(&request).await?;

        info!(
            transaction = %transaction.public_id,
            condo = %transaction.condo_id,
            kind = %String::from(transaction.kind),
            amount = transaction.amount,
            "recorded transaction"
        );

        Ok(transaction)
    }

    /// List transactions of a condominium, newest-first
    pub async fn list(&self, condo_id: &str) -> CommunityResult<Vec<Transaction>> {
        self.repository.list_by_condo(condo_id).await
    }

    /// Compute the financial summary of a condominium
    pub async fn summary(&self, condo_id: &str) -> CommunityResult<FinancialSummary> {
        let transactions = self.repository.list_by_condo(condo_id).await?;

        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        let mut expenses_by_category: HashMap<String, f64> = HashMap::new();

        for transaction in &transactions {
            if transaction.is_income() {
                income_total += transaction.amount;
            } else {
                expense_total += transaction.amount;
                *expenses_by_category
                    .entry(transaction.category.clone())
                    .or_default() += transaction.amount;
            }
        }

        Ok(FinancialSummary {
            income_total,
            expense_total,
            balance: income_total - expense_total,
            expenses_by_category,
        })
    }
}
