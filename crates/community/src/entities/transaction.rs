use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a financial entry of a condominium.
/// Transactions are append-only; the ledger is never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// In-memory row id
    pub id: i64,
    /// Publicly accessible UUID
    pub public_id: String,
    /// Public id of the condominium
    pub condo_id: String,
    /// Income or expense
    pub kind: TransactionKind,
    /// Amount in the condominium's currency
    pub amount: f64,
    /// Budget category, e.g. cleaning or maintenance
    pub category: String,
    /// Date the transaction occurred (ISO string)
    pub date: String,
    /// Free-form description
    pub description: String,
    /// Supplier name, for expenses
    pub supplier: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

/// Transaction direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl From<&str> for TransactionKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "income" => TransactionKind::Income,
            _ => TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => "income".to_string(),
            TransactionKind::Expense => "expense".to_string(),
        }
    }
}

/// Request to record a new transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Public id of the condominium
    pub condo_id: String,
    /// Income or expense
    pub kind: TransactionKind,
    /// Amount
    pub amount: f64,
    /// Budget category
    pub category: String,
    /// Date the transaction occurred (ISO string)
    pub date: String,
    /// Free-form description
    pub description: String,
    /// Supplier name, for expenses
    pub supplier: Option<String>,
}

impl Transaction {
    /// Create a new transaction instance
    pub fn new(request: &CreateTransactionRequest) -> Self {
        Self {
            id: 0, // Assigned by the repository
            public_id: Uuid::new_v4().to_string(),
            condo_id: request.condo_id.clone(),
            kind: request.kind,
            amount: request.amount,
            category: request.category.clone(),
            date: request.date.clone(),
            description: request.description.clone(),
            supplier: request.supplier.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Check if this entry is income
    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    /// Check if this entry is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

impl CreateTransactionRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        if self.condo_id.trim().is_empty() {
            return Err("Transaction must belong to a condominium".to_string());
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err("Transaction amount must be positive".to_string());
        }

        if self.category.trim().is_empty() {
            return Err("Transaction category cannot be empty".to_string());
        }

        if self.date.trim().is_empty() {
            return Err("Transaction date cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateTransactionRequest {
        CreateTransactionRequest {
            condo_id: "condo-1".to_string(),
            kind: TransactionKind::Expense,
            amount: 1200.0,
            category: "Limpeza".to_string(),
            date: "2024-05-10".to_string(),
            description: "Serviço mensal de limpeza".to_string(),
            supplier: Some("Clean Service".to_string()),
        }
    }

    #[test]
    fn test_transaction_creation() {
        let transaction = Transaction::new(&request());

        assert!(transaction.is_expense());
        assert!(!transaction.is_income());
        assert_eq!(transaction.amount, 1200.0);
        assert_eq!(transaction.supplier.as_deref(), Some("Clean Service"));
    }

    #[test]
    fn test_kind_conversion() {
        assert_eq!(TransactionKind::from("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("expense"), TransactionKind::Expense);
        assert_eq!(TransactionKind::from("unknown"), TransactionKind::Expense);

        assert_eq!(String::from(TransactionKind::Income), "income");
        assert_eq!(String::from(TransactionKind::Expense), "expense");
    }

    #[test]
    fn test_create_request_validation() {
        assert!(request().validate().is_ok());

        let mut negative = request();
        negative.amount = -10.0;
        assert!(negative.validate().is_err());

        let mut zero = request();
        zero.amount = 0.0;
        assert!(zero.validate().is_err());

        let mut no_category = request();
        no_category.category = " ".to_string();
        assert!(no_category.validate().is_err());
    }
}
