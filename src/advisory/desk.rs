//! Asynchronous advisory requests and stale-reply filtering.
//!
//! Requests run on the ambient tokio runtime and never block the game.
//! Every reply carries the [`Generation`] of the hand it was asked about;
//! only a reply for the current generation is ever shown.

use alloc::sync::Arc;
use core::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::AdvisoryError;
use crate::game::Generation;

use super::{Advisor, Advisory, AdvisoryTicket};

#[derive(Debug)]
struct Reply {
    generation: Generation,
    result: Result<Advisory, AdvisoryError>,
}

/// Sends the reply when the request task ends, including when the advisor
/// panics or the task is cancelled before it produced a result.
struct ReplyGuard {
    generation: Generation,
    replies: mpsc::UnboundedSender<Reply>,
    result: Option<Result<Advisory, AdvisoryError>>,
}

impl Drop for ReplyGuard {
    fn drop(&mut self) {
        let result = self.result.take().unwrap_or_else(|| {
            Err(AdvisoryError::Unavailable(
                "advisor task ended without a reply".into(),
            ))
        });
        // The desk may be gone by now; the reply is simply dropped then.
        let _ = self.replies.send(Reply {
            generation: self.generation,
            result,
        });
    }
}

/// Issues advisory requests and keeps the latest advisory that still matches
/// the hand.
#[derive(Debug)]
pub struct AdvisoryDesk<A> {
    advisor: Arc<A>,
    timeout: Option<Duration>,
    replies_tx: mpsc::UnboundedSender<Reply>,
    replies_rx: mpsc::UnboundedReceiver<Reply>,
    in_flight: usize,
    current: Option<(Generation, Advisory)>,
}

impl<A> AdvisoryDesk<A>
where
    A: Advisor + Send + Sync + 'static,
{
    /// Creates a desk around `advisor`, with no timeout.
    #[must_use]
    pub fn new(advisor: A) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Self {
            advisor: Arc::new(advisor),
            timeout: None,
            replies_tx,
            replies_rx,
            in_flight: 0,
            current: None,
        }
    }

    /// Gives up on any request that takes longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the number of requests whose replies have not been collected.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sends a request in the background.
    ///
    /// Outside a tokio runtime the request is skipped and no advisory will
    /// appear for this hand.
    pub fn submit(&mut self, ticket: AdvisoryTicket) {
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(
                generation = ticket.generation.get(),
                "no async runtime, advisory skipped"
            );
            return;
        };

        let advisor = Arc::clone(&self.advisor);
        let mut guard = ReplyGuard {
            generation: ticket.generation,
            replies: self.replies_tx.clone(),
            result: None,
        };
        let timeout = self.timeout;
        self.in_flight += 1;

        handle.spawn(async move {
            let pending = advisor.advise(ticket.request);
            guard.result = Some(match timeout {
                Some(limit) => tokio::time::timeout(limit, pending)
                    .await
                    .unwrap_or(Err(AdvisoryError::TimedOut)),
                None => pending.await,
            });
        });
    }

    /// Applies every reply that has already arrived, without waiting.
    ///
    /// Returns the advisory for `current`, if there is one.
    pub fn collect(&mut self, current: Generation) -> Option<&Advisory> {
        while let Ok(reply) = self.replies_rx.try_recv() {
            self.apply(reply, current);
        }
        self.forget_stale(current);
        self.advisory(current)
    }

    /// Waits until the advisory for `current` arrives or nothing is left in
    /// flight.
    pub async fn settle(&mut self, current: Generation) -> Option<&Advisory> {
        self.collect(current);

        while self.in_flight > 0 && self.advisory(current).is_none() {
            let Some(reply) = self.replies_rx.recv().await else {
                break;
            };
            self.apply(reply, current);
        }

        self.advisory(current)
    }

    /// Returns the advisory if it was computed for `current`.
    #[must_use]
    pub fn advisory(&self, current: Generation) -> Option<&Advisory> {
        self.current
            .as_ref()
            .filter(|(generation, _)| *generation == current)
            .map(|(_, advisory)| advisory)
    }

    /// Drops the held advisory.
    pub fn clear(&mut self) {
        self.current = None;
    }

    fn apply(&mut self, reply: Reply, current: Generation) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if reply.generation != current {
            tracing::debug!(
                generation = reply.generation.get(),
                current = current.get(),
                "discarding stale advisory"
            );
            return;
        }

        match reply.result {
            Ok(advisory) => {
                tracing::debug!(
                    generation = current.get(),
                    mixed = %advisory.mixed.recommendation,
                    normal = %advisory.normal.recommendation,
                    "advisory received"
                );
                self.current = Some((current, advisory));
            }
            Err(err) => {
                tracing::warn!(generation = current.get(), error = %err, "advisory unavailable");
                self.current = None;
            }
        }
    }

    fn forget_stale(&mut self, current: Generation) {
        if self
            .current
            .as_ref()
            .is_some_and(|(generation, _)| *generation != current)
        {
            self.current = None;
        }
    }
}
