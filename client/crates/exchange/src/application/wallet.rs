//! Wallet Use Cases

use crate::application::cached;
use crate::domain::repository::WalletGateway;
use crate::domain::transaction::Transaction;
use crate::domain::withdrawal::{Withdrawal, WithdrawalRequest};
use crate::error::ExchangeError;
use cache::{FetchCache, QueryKey};
use kernel::error::app_error::AppResult;
use session::store::SessionStore;
use std::sync::Arc;

fn transactions_key() -> QueryKey {
    QueryKey::new("/api/transactions")
}

/// Transaction History Use Case
pub struct TransactionHistoryUseCase<G>
where
    G: WalletGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
}

impl<G> TransactionHistoryUseCase<G>
where
    G: WalletGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>) -> Self {
        Self { gateway, cache }
    }

    pub async fn transactions(&self) -> AppResult<Vec<Transaction>> {
        cached(&self.cache, &transactions_key(), || async {
            self.gateway.transactions().await
        })
        .await
    }
}

/// Request Withdrawal Use Case
///
/// On success the balance is debited optimistically and the
/// transaction list invalidated, matching what the server will report
/// on the next read.
pub struct RequestWithdrawalUseCase<G>
where
    G: WalletGateway,
{
    gateway: Arc<G>,
    cache: Arc<FetchCache>,
    session: Arc<SessionStore>,
}

impl<G> RequestWithdrawalUseCase<G>
where
    G: WalletGateway,
{
    pub fn new(gateway: Arc<G>, cache: Arc<FetchCache>, session: Arc<SessionStore>) -> Self {
        Self {
            gateway,
            cache,
            session,
        }
    }

    pub async fn execute(&self, request: WithdrawalRequest) -> AppResult<Withdrawal> {
        let user = self
            .session
            .current_user()
            .await
            .ok_or(ExchangeError::Unauthenticated)?;

        request
            .validate(user.balance)
            .map_err(ExchangeError::Validation)?;

        let withdrawal = self.gateway.request_withdrawal(&request).await?;

        self.session
            .debit_balance(request.amount)
            .await
            .map_err(|_| ExchangeError::Unauthenticated)?;
        self.cache.invalidate_prefix("/api/transactions").await;

        tracing::info!(
            withdrawal_id = %withdrawal.id,
            amount = %request.amount,
            method = ?request.method,
            "Withdrawal requested"
        );
        Ok(withdrawal)
    }
}
