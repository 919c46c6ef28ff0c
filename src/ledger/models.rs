//! Ledger row types
//!
//! Balances and amounts are signed integers in the smallest currency
//! unit. Entries and transfers are append-only; only `Account.balance`
//! is ever mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A ledger identity with a running balance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

/// Immutable signed balance adjustment tied to one account
///
/// Negative amount is a debit, positive a credit. The balance of an
/// account is the running sum of its entries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Immutable record of moving a positive amount between two accounts
///
/// Each transfer is backed by exactly two entries created in the same
/// transaction: a debit on the source and a credit on the destination.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transfer {
    pub id: i64,
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}
