use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future returned by closures passed to [`with_txn`].
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'a>>;

/// A shared transaction wrapper that can be injected into request extensions
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Begin a transaction on `db` to be shared across several operations.
    pub async fn open(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self(Arc::new(db.begin().await?)))
    }

    /// Get a reference to the underlying database transaction
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Roll back the shared transaction. Every other clone must be dropped first.
    pub async fn rollback(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.0) {
            Ok(txn) => txn.rollback().await,
            Err(_) => Err(DbErr::Custom(
                "SharedTxn still has outstanding clones".to_string(),
            )),
        }
    }
}

/// Execute a function within a database transaction
///
/// 1) If a SharedTxn is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin txn, run closure, apply policy on Ok / rollback on Err
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    // Clone out of the extensions before awaiting; the RefCell borrow must not live across it.
    let shared_txn: Option<SharedTxn> =
        req.and_then(|r| r.extensions().get::<SharedTxn>().cloned());

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
