//! Per-request deadline applied to every store call

use super::error::{OrderError, StoreError};
use super::order::Order;
use super::store::OrderCursor;
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

/// Default time budget for one request's store work
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline fixed when a request reaches its handler, before the body is read
///
/// All store calls made while serving the request share it, so a refetch
/// after an update only gets whatever budget the update left over.
#[derive(Debug, Clone, Copy)]
pub struct RequestDeadline {
    at: Instant,
}

impl RequestDeadline {
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// Run a store call, turning expiry into [`StoreError::Timeout`]
    pub async fn run<F, T>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        timeout_at(self.at, call)
            .await
            .map_err(|_| StoreError::Timeout)?
    }

    /// Read every record from `cursor`
    ///
    /// Stops at the first failing item. Records decoded before it are kept in
    /// [`OrderError::PartialRead`]. The cursor is consumed, so it is released
    /// on every path out of this function.
    pub async fn drain(&self, mut cursor: OrderCursor) -> Result<Vec<Order>, OrderError> {
        let mut orders = Vec::new();

        loop {
            let next = match timeout_at(self.at, cursor.next()).await {
                Ok(next) => next,
                Err(_) => return Err(partial_read(StoreError::Timeout, orders)),
            };

            match next {
                Some(Ok(order)) => orders.push(order),
                Some(Err(e)) => return Err(partial_read(e, orders)),
                None => return Ok(orders),
            }
        }
    }
}

fn partial_read(source: StoreError, partial: Vec<Order>) -> OrderError {
    if partial.is_empty() {
        OrderError::Store(source)
    } else {
        OrderError::PartialRead { source, partial }
    }
}
