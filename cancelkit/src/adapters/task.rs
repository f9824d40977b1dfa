//! Tokio task handles as cancellable work.

use crate::cancellable::Cancellable;
use tokio::task::JoinHandle;

impl<T> Cancellable for JoinHandle<T> {
    /// Aborts the task. A task that already finished is unaffected.
    fn cancel(&mut self) {
        self.abort();
    }
}
