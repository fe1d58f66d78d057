use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure returned `Ok`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Persist the work (production)
    CommitOnOk,
    /// Discard the work even on success; lets a test binary share one store
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Process-wide policy, `CommitOnOk` until [`set_txn_policy`] is called.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Fix the policy for the rest of the process. Later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    if POLICY.set(policy).is_err() {
        tracing::debug!(requested = ?policy, active = ?current(), "txn policy already set");
    }
}
