//! The type-erased, drop-aware cancellation token.

use crate::cancellable::{ActionCancellable, Cancellable};
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;
use uuid::Uuid;

/// Identity of a token instance.
///
/// Two tokens wrapping semantically identical actions are still different
/// pieces of ongoing work, so identity is minted per instance and never
/// derived from the wrapped action. Using a newtype avoids accidental
/// mixing with unrelated UUIDs and keeps conversions explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(Uuid);

impl TokenId {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A type-erasing cancellation token.
///
/// Wraps any [`Cancellable`] behind one concrete handle type, hiding every
/// implementation-specific operation beyond cancellation itself. The wrapped
/// stop-action fires **at most once**, whether triggered by an explicit
/// [`cancel`](CancelToken::cancel) call or by the token being dropped.
///
/// Ownership of a token is ownership of the guarantee that the wrapped work
/// stops: a token that is never stored anywhere — even a temporary discarded
/// on the spot — still cancels on its way out. No action is required from
/// the holder beyond letting the token's lifetime end.
///
/// Tokens compare and hash by instance identity ([`TokenId`]), which is what
/// permits set storage and removal of one token without touching the others.
#[must_use = "dropping a CancelToken cancels the work it wraps; store it to keep the work alive"]
pub struct CancelToken {
    /// Instance identity; drives `Eq`/`Hash` for set storage.
    id: TokenId,
    /// The one-shot flag. Exactly one trigger wins the flip.
    cancelled: AtomicBool,
    /// The wrapped cancellable, taken by the winning trigger.
    inner: Mutex<Option<Box<dyn Cancellable + Send>>>,
}

impl CancelToken {
    /// Wraps a cancellable into a type-erased token.
    ///
    /// The token takes exclusive ownership of the cancellable; on the first
    /// cancellation it delegates to the cancellable's
    /// [`cancel`](Cancellable::cancel).
    pub fn new<C>(cancellable: C) -> Self
    where
        C: Cancellable + Send + 'static,
    {
        Self {
            id: TokenId::mint(),
            cancelled: AtomicBool::new(false),
            inner: Mutex::new(Some(Box::new(cancellable))),
        }
    }

    /// Wraps a zero-argument action into a type-erased token.
    ///
    /// Shortcut for `CancelToken::new(ActionCancellable::new(action))`.
    pub fn from_fn<F>(action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::new(ActionCancellable::new(action))
    }

    /// Returns the identity of this token.
    ///
    /// The id is the removal key for set storage; see
    /// [`store_in_set`](CancelToken::store_in_set).
    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Returns whether cancellation has already been triggered.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Cancels the wrapped activity.
    ///
    /// Idempotent: the first trigger — explicit call or drop — invokes the
    /// wrapped cancellable; every later trigger is a silent no-op. Racing
    /// triggers resolve on the one-shot flag, and losers return immediately
    /// without waiting for the winner's action to finish.
    ///
    /// A panic in the wrapped action is logged and suppressed; the token
    /// still counts as cancelled.
    pub fn cancel(&self) {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            // Release the lock before invoking the action.
            let inner = self.inner.lock().take();
            if let Some(mut inner) = inner {
                if let Err(panic) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    inner.cancel();
                })) {
                    warn!(token = %self.id, "Cancel action panicked: {:?}", panic);
                }
            }
        }
    }
}

impl Drop for CancelToken {
    fn drop(&mut self) {
        // Same at-most-once path as an explicit call.
        self.cancel();
    }
}

/// Tokens are themselves cancellable, so an erased token can be re-erased
/// or handed to anything that accepts a capability implementor.
impl Cancellable for CancelToken {
    fn cancel(&mut self) {
        CancelToken::cancel(self);
    }
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CancelToken {}

impl Hash for CancelToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Lets `HashSet<CancelToken>` look tokens up by [`TokenId`] alone.
impl Borrow<TokenId> for CancelToken {
    fn borrow(&self) -> &TokenId {
        &self.id
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
