//! The cancellable capability and its closure-backed form.

use crate::token::CancelToken;

/// An activity or action that supports cancellation.
///
/// Implementors free any allocated resources and stop side effects such as
/// timers, network access, or disk I/O. Cancellation is best-effort and has
/// no failure outcome: an implementor whose cleanup fails internally must
/// absorb (or log) the failure rather than surface it through this trait.
///
/// Calling [`cancel`](Cancellable::cancel) more than once directly on an
/// implementor has implementor-defined semantics — it is NOT guaranteed
/// idempotent. The at-most-once guarantee is layered on by [`CancelToken`],
/// not by this trait.
pub trait Cancellable {
    /// Stops the activity and releases its resources.
    fn cancel(&mut self);
}

/// A cancellable backed by a single zero-argument action.
///
/// This is the bridge that lets ad-hoc code participate in erasure: any
/// closure becomes "a thing implementing the capability" before it is
/// wrapped into a token, keeping the erasure step generic over all
/// implementors instead of special-casing closures.
///
/// The action runs every time [`cancel`](Cancellable::cancel) is called
/// directly; wrap the result in a [`CancelToken`] for at-most-once
/// semantics.
pub struct ActionCancellable<F: FnMut()> {
    /// The stored stop-action.
    action: F,
}

impl<F: FnMut()> ActionCancellable<F> {
    /// Creates a cancellable from a zero-argument action.
    #[must_use]
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<F: FnMut()> Cancellable for ActionCancellable<F> {
    fn cancel(&mut self) {
        (self.action)();
    }
}

/// The erasure step, usable at the end of a fluent chain.
///
/// Blanket-implemented for every `Cancellable + Send + 'static`, so a
/// producer of ongoing work can go straight from a concrete handle to a
/// stored token:
///
/// ```rust,ignore
/// tokio::spawn(poll_quotes())
///     .into_token()
///     .store_in(&mut subscriptions);
/// ```
pub trait IntoCancelToken {
    /// Wraps this cancellable into a type-erased [`CancelToken`].
    fn into_token(self) -> CancelToken;
}

impl<C> IntoCancelToken for C
where
    C: Cancellable + Send + 'static,
{
    fn into_token(self) -> CancelToken {
        CancelToken::new(self)
    }
}
