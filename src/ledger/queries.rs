//! Ledger primitives: single-row, single-statement operations
//!
//! Every function is generic over [`sqlx::PgExecutor`] so the same
//! query runs against the pool directly or against an open transaction
//! (`&mut **tx`), participating in whatever atomic scope the caller
//! has established.

use sqlx::PgExecutor;

use super::error::LedgerError;
use super::models::{Account, Entry, Transfer};

/// Create a new account with an initial balance
pub async fn create_account<'e, E>(
    executor: E,
    owner: &str,
    balance: i64,
) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    let account = sqlx::query_as::<_, Account>(
        r#"INSERT INTO accounts (owner, balance)
           VALUES ($1, $2)
           RETURNING id, owner, balance, created_at"#,
    )
    .bind(owner)
    .bind(balance)
    .fetch_one(executor)
    .await?;

    Ok(account)
}

/// Get account by ID
pub async fn get_account<'e, E>(executor: E, id: i64) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    let account = sqlx::query_as::<_, Account>(
        r#"SELECT id, owner, balance, created_at FROM accounts WHERE id = $1"#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(account)
}

/// Get account by ID, taking a row lock until the transaction ends
///
/// Only meaningful inside an open transaction.
pub async fn get_account_for_update<'e, E>(executor: E, id: i64) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    let account = sqlx::query_as::<_, Account>(
        r#"SELECT id, owner, balance, created_at FROM accounts WHERE id = $1 FOR UPDATE"#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(account)
}

/// Apply a signed delta to an account balance and return the updated row
///
/// Atomic read-modify-write on a single row; acquires the row lock.
pub async fn add_account_balance<'e, E>(
    executor: E,
    id: i64,
    delta: i64,
) -> Result<Account, LedgerError>
where
    E: PgExecutor<'e>,
{
    let account = sqlx::query_as::<_, Account>(
        r#"UPDATE accounts SET balance = balance + $1
           WHERE id = $2
           RETURNING id, owner, balance, created_at"#,
    )
    .bind(delta)
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(account)
}

/// Record a signed balance adjustment against one account
pub async fn create_entry<'e, E>(
    executor: E,
    account_id: i64,
    amount: i64,
) -> Result<Entry, LedgerError>
where
    E: PgExecutor<'e>,
{
    let entry = sqlx::query_as::<_, Entry>(
        r#"INSERT INTO entries (account_id, amount)
           VALUES ($1, $2)
           RETURNING id, account_id, amount, created_at"#,
    )
    .bind(account_id)
    .bind(amount)
    .fetch_one(executor)
    .await?;

    Ok(entry)
}

/// Get entry by ID
pub async fn get_entry<'e, E>(executor: E, id: i64) -> Result<Entry, LedgerError>
where
    E: PgExecutor<'e>,
{
    let entry = sqlx::query_as::<_, Entry>(
        r#"SELECT id, account_id, amount, created_at FROM entries WHERE id = $1"#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(entry)
}

/// List entries for one account, newest first
pub async fn list_entries<'e, E>(
    executor: E,
    account_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Entry>, LedgerError>
where
    E: PgExecutor<'e>,
{
    let entries = sqlx::query_as::<_, Entry>(
        r#"SELECT id, account_id, amount, created_at FROM entries
           WHERE account_id = $1
           ORDER BY id DESC
           LIMIT $2 OFFSET $3"#,
    )
    .bind(account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;

    Ok(entries)
}

/// Record a transfer event between two accounts
pub async fn create_transfer<'e, E>(
    executor: E,
    from_account_id: i64,
    to_account_id: i64,
    amount: i64,
) -> Result<Transfer, LedgerError>
where
    E: PgExecutor<'e>,
{
    let transfer = sqlx::query_as::<_, Transfer>(
        r#"INSERT INTO transfers (from_account_id, to_account_id, amount)
           VALUES ($1, $2, $3)
           RETURNING id, from_account_id, to_account_id, amount, created_at"#,
    )
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(amount)
    .fetch_one(executor)
    .await?;

    Ok(transfer)
}

/// Get transfer by ID
pub async fn get_transfer<'e, E>(executor: E, id: i64) -> Result<Transfer, LedgerError>
where
    E: PgExecutor<'e>,
{
    let transfer = sqlx::query_as::<_, Transfer>(
        r#"SELECT id, from_account_id, to_account_id, amount, created_at
           FROM transfers WHERE id = $1"#,
    )
    .bind(id)
    .fetch_one(executor)
    .await?;

    Ok(transfer)
}

/// List transfers between a pair of accounts, newest first
pub async fn list_transfers<'e, E>(
    executor: E,
    from_account_id: i64,
    to_account_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Transfer>, LedgerError>
where
    E: PgExecutor<'e>,
{
    let transfers = sqlx::query_as::<_, Transfer>(
        r#"SELECT id, from_account_id, to_account_id, amount, created_at
           FROM transfers
           WHERE from_account_id = $1 AND to_account_id = $2
           ORDER BY id DESC
           LIMIT $3 OFFSET $4"#,
    )
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;

    Ok(transfers)
}
