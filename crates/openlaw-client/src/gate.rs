//! The login gate.
//!
//! The gate tracks the most recently started login as a shared future that
//! settles once that login completes, fails or is dropped. Every call awaits
//! the gate before it is dispatched.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use std::task::{Context, Poll};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use openlaw_core::error::AuthError;
use openlaw_core::{ApiResponse, Result};

/// A handle on the latest login attempt, resolving once it settles.
///
/// Resolves immediately when no login was ever started. Settling says
/// nothing about whether the login succeeded.
#[derive(Clone)]
pub struct ReadyHandle(Shared<BoxFuture<'static, ()>>);

impl ReadyHandle {
    fn settled() -> Self {
        Self(futures_util::future::ready(()).boxed().shared())
    }

    /// Returns true if the tracked login has already settled.
    pub fn is_settled(&self) -> bool {
        self.0.clone().now_or_never().is_some()
    }
}

impl Future for ReadyHandle {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl std::fmt::Debug for ReadyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadyHandle")
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Settles its gate when dropped.
pub(crate) struct GateGuard {
    _settle: oneshot::Sender<()>,
}

#[derive(Debug)]
pub(crate) struct LoginGate {
    current: Mutex<ReadyHandle>,
}

impl LoginGate {
    pub(crate) fn new() -> Self {
        Self {
            current: Mutex::new(ReadyHandle::settled()),
        }
    }

    /// Returns the handle of the most recently started login.
    pub(crate) fn ready(&self) -> ReadyHandle {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install a pending gate for a new login.
    ///
    /// Returns the previously tracked handle, which the new login awaits
    /// before dispatching, and the guard that settles the new gate.
    pub(crate) fn begin(&self) -> (ReadyHandle, GateGuard) {
        let (tx, rx) = oneshot::channel::<()>();
        let pending = ReadyHandle(
            async move {
                // Err means the guard was dropped, which is the settle signal.
                let _ = rx.await;
            }
            .boxed()
            .shared(),
        );

        let previous = {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, pending)
        };

        (previous, GateGuard { _settle: tx })
    }
}

/// The in-flight login started by [`ApiClient::login`](crate::ApiClient::login).
///
/// The login runs as a spawned task and makes progress whether or not the
/// handle is awaited. Awaiting yields the login response.
#[derive(Debug)]
pub struct LoginHandle {
    task: JoinHandle<Result<ApiResponse>>,
}

impl LoginHandle {
    pub(crate) fn new(task: JoinHandle<Result<ApiResponse>>) -> Self {
        Self { task }
    }
}

impl Future for LoginHandle {
    type Output = Result<ApiResponse>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(AuthError::LoginInterrupted {
                reason: e.to_string(),
            }
            .into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_gate_is_settled() {
        let gate = LoginGate::new();
        let ready = gate.ready();
        assert!(ready.is_settled());
        ready.await;
    }

    #[tokio::test]
    async fn gate_settles_when_guard_drops() {
        let gate = LoginGate::new();
        let (previous, guard) = gate.begin();
        assert!(previous.is_settled());

        let ready = gate.ready();
        assert!(!ready.is_settled());

        let waiter = tokio::spawn(ready.clone());
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.unwrap();
        assert!(ready.is_settled());
    }

    #[tokio::test]
    async fn begin_returns_previous_login() {
        let gate = LoginGate::new();
        let (_, first) = gate.begin();
        let (previous, second) = gate.begin();

        assert!(!previous.is_settled());
        drop(first);
        previous.await;

        assert!(!gate.ready().is_settled());
        drop(second);
        gate.ready().await;
    }
}
