use super::sink::SinkError;
use crate::event;
use std::future::Future;
use tokio::task::JoinSet;

/// Bounded set of fire-and-forget HTTP dispatches.
///
/// Pushing never waits: finished dispatches are reaped first, and once `capacity`
/// dispatches are still running, new ones are refused with [`SinkError::Backlog`].
pub(crate) struct DispatchQueue {
    name: &'static str,
    tasks: JoinSet<Result<(), SinkError>>,
    capacity: usize,
    failed: usize,
}

impl DispatchQueue {
    pub(crate) fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            tasks: JoinSet::new(),
            capacity,
            failed: 0,
        }
    }

    pub(crate) fn in_flight(&self) -> usize { self.tasks.len() }

    /// Spawns `dispatch` onto the runtime unless the queue is saturated.
    pub(crate) fn push<F>(&mut self, dispatch: F) -> Result<(), SinkError>
    where
        F: Future<Output = Result<(), SinkError>> + Send + 'static,
    {
        self.reap();
        if self.tasks.len() >= self.capacity {
            return Err(SinkError::Backlog);
        }
        self.tasks.spawn(dispatch);
        Ok(())
    }

    /// Waits for every outstanding dispatch and returns the number of failures seen
    /// since the last drain.
    pub(crate) async fn drain(&mut self) -> usize {
        if self.in_flight() > 0 {
            event!("Waiting for {} {} dispatches", self.in_flight(), self.name);
        }
        while let Some(res) = self.tasks.join_next().await {
            self.count(res);
        }
        std::mem::take(&mut self.failed)
    }

    fn reap(&mut self) {
        while let Some(res) = self.tasks.try_join_next() {
            self.count(res);
        }
    }

    fn count(&mut self, res: Result<Result<(), SinkError>, tokio::task::JoinError>) {
        match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.failed += 1;
                event!("{} dispatch failed: {e:?}", self.name);
            }
            Err(e) => {
                self.failed += 1;
                event!("{} dispatch aborted: {e}", self.name);
            }
        }
    }
}
