//! Integrations with runtime cancellation primitives.
//!
//! Producers of ongoing work in the async ecosystem already expose an
//! abort-style control. These impls let them erase straight into tokens:
//!
//! ```rust,ignore
//! use cancelkit::prelude::*;
//!
//! let mut subscriptions = Vec::new();
//! tokio::spawn(poll_quotes())
//!     .into_token()
//!     .store_in(&mut subscriptions);
//! ```

mod abort;
mod task;
