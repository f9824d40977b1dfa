//! # Cancelkit
//!
//! Type-erased, drop-aware cancellation tokens for event-driven systems.
//!
//! Cancelkit provides a uniform handle over "work that can be stopped" —
//! subscriptions, timers, spawned tasks, network requests — with support for:
//!
//! - **One capability**: anything implementing [`Cancellable`] can be stopped
//! - **Type erasure**: heterogeneous cancellables collapse into one concrete
//!   [`CancelToken`] handle
//! - **At-most-once firing**: the wrapped stop-action runs exactly once, no
//!   matter how many explicit or implicit triggers race
//! - **Automatic release**: dropping a token cancels it, so dropping a
//!   collection of tokens cancels everything still resident
//! - **Aggregate storage**: ordered append-only storage, or set storage with
//!   efficient removal of a single token by identity
//!
//! ## Quick Start
//!
//! ```rust
//! use cancelkit::prelude::*;
//!
//! let mut subscriptions = Vec::new();
//!
//! // Erase any stop-action into a token and store it with its owner.
//! CancelToken::from_fn(|| println!("timer stopped"))
//!     .store_in(&mut subscriptions);
//!
//! // Dropping the collection stops everything still resident.
//! drop(subscriptions);
//! ```
//!
//! [`Cancellable`]: crate::cancellable::Cancellable
//! [`CancelToken`]: crate::token::CancelToken

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cancellable;
pub mod token;

mod store;

#[cfg(feature = "runtime")]
pub mod adapters;


/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cancellable::{ActionCancellable, Cancellable, IntoCancelToken};
    pub use crate::token::{CancelToken, TokenId};
}
