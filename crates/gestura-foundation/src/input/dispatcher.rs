//! Pointer batch queue.
//!
//! Native pointer stacks coalesce intermediate moves into batches. A batch
//! is accepted or rejected as a whole so a corrupt batch can be dropped at
//! the shim boundary without leaving half of it in the classifiers.

use super::types::{PointerEvent, PointerId};
use crate::error::GestureError;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<(PointerId, PointerEvent)>,
    last_time_ms: Option<u64>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) -> Result<(), GestureError> {
        self.push_batch(std::iter::once(event)).map(|_| ())
    }

    /// Validates and enqueues a batch. Returns the number of queued events.
    ///
    /// Samples must have finite coordinates and non-decreasing timestamps
    /// relative to everything accepted before.
    pub fn push_batch(
        &mut self,
        batch: impl IntoIterator<Item = PointerEvent>,
    ) -> Result<usize, GestureError> {
        let batch: Vec<PointerEvent> = batch.into_iter().collect();
        if batch.is_empty() {
            return Err(GestureError::EmptyBatch);
        }

        let mut previous = self.last_time_ms;
        for event in &batch {
            event.validate()?;
            if let Some(previous_ms) = previous {
                if event.time_ms < previous_ms {
                    return Err(GestureError::OutOfOrderSample {
                        time_ms: event.time_ms,
                        previous_ms,
                    });
                }
            }
            previous = Some(event.time_ms);
        }

        self.last_time_ms = previous;
        let count = batch.len();
        self.queue
            .extend(batch.into_iter().map(|event| (event.id, event)));
        Ok(count)
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Forgets ordering history, e.g. when the gesture ends.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.last_time_ms = None;
    }
}
