//! Abortable futures and streams as cancellable work.

use crate::cancellable::Cancellable;
use futures::future::AbortHandle;

impl Cancellable for AbortHandle {
    /// Aborts the future or stream registered with this handle.
    fn cancel(&mut self) {
        self.abort();
    }
}
