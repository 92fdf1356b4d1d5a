//! Nonce acquisition service.

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::error::Result;
use crate::ethereum::EthereumClient;

/// Source of the confirmed transaction count for an account.
#[async_trait]
pub trait TransactionCountSource: Send + Sync {
    /// Transaction count for `account` at the latest confirmed state.
    async fn transaction_count(&self, account: Address) -> Result<u64>;
}

#[async_trait]
impl TransactionCountSource for EthereumClient {
    async fn transaction_count(&self, account: Address) -> Result<u64> {
        EthereumClient::transaction_count(self, account).await
    }
}

/// Provides the next unused nonce for an account.
///
/// Every call issues a fresh query. Results must not be cached across
/// submissions: an out-of-band transaction from the same account would make
/// a cached value stale and lead to nonce reuse.
pub struct NonceTracker<S> {
    source: Arc<S>,
}

impl<S: TransactionCountSource> NonceTracker<S> {
    /// Create a new nonce tracker over a transaction-count source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Next nonce for `account`.
    ///
    /// The node-reported transaction count *is* the next nonce to use, so
    /// the count is returned directly. A transport failure here is fatal to
    /// the caller's submission attempt; retrying locally could mask a stale
    /// read and reuse a nonce.
    pub async fn next_nonce(&self, account: Address) -> Result<u64> {
        let nonce = self.source.transaction_count(account).await?;
        tracing::debug!(account = %account, nonce, "fetched next nonce");
        Ok(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Count source backed by a counter that the test advances to simulate
    /// mined submissions.
    struct FakeChain {
        count: AtomicU64,
    }

    impl FakeChain {
        fn new(initial: u64) -> Self {
            Self { count: AtomicU64::new(initial) }
        }

        /// A confirmed submission bumps the account's transaction count.
        fn confirm_submission(&self) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl TransactionCountSource for FakeChain {
        async fn transaction_count(&self, _account: Address) -> Result<u64> {
            Ok(self.count.load(Ordering::SeqCst))
        }
    }

    struct FailingChain;

    #[async_trait]
    impl TransactionCountSource for FailingChain {
        async fn transaction_count(&self, _account: Address) -> Result<u64> {
            Err(AppError::Transport("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_nonce_is_node_reported_count() {
        let chain = Arc::new(FakeChain::new(5));
        let tracker = NonceTracker::new(chain);

        let nonce = tracker.next_nonce(Address::ZERO).await.unwrap();
        assert_eq!(nonce, 5);
    }

    #[tokio::test]
    async fn test_nonce_monotonic_across_submissions() {
        let chain = Arc::new(FakeChain::new(0));
        let tracker = NonceTracker::new(chain.clone());

        let first = tracker.next_nonce(Address::ZERO).await.unwrap();
        chain.confirm_submission();
        let second = tracker.next_nonce(Address::ZERO).await.unwrap();

        assert!(second > first, "nonce must strictly increase after a submission");
    }

    #[tokio::test]
    async fn test_nonce_not_cached_between_calls() {
        let chain = Arc::new(FakeChain::new(3));
        let tracker = NonceTracker::new(chain.clone());

        assert_eq!(tracker.next_nonce(Address::ZERO).await.unwrap(), 3);

        // An out-of-band transaction lands between two orchestration calls.
        chain.confirm_submission();
        chain.confirm_submission();

        assert_eq!(tracker.next_nonce(Address::ZERO).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_transport_failure_is_fatal() {
        let tracker = NonceTracker::new(Arc::new(FailingChain));
        let result = tracker.next_nonce(Address::ZERO).await;
        assert!(matches!(result, Err(AppError::Transport(_))));
    }
}
