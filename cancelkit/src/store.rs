//! Collection storage for cancellation tokens.
//!
//! Two deliberately separate operations:
//! - [`CancelToken::store_in`] appends into any ordered, extendable
//!   collection. Insertion order is preserved, duplicates of equal
//!   underlying actions are permitted, and there is no removal contract.
//! - [`CancelToken::store_in_set`] inserts into a `HashSet` keyed by
//!   instance identity, which supports removing one token by
//!   [`TokenId`](crate::token::TokenId) in expected constant time while
//!   leaving every other token alone.
//!
//! The split is part of the contract: a single polymorphic operation would
//! silently degrade the set's removal complexity for sequence callers.
//!
//! Clearing or dropping either collection cancels every token still
//! resident, each under its own at-most-once guarantee.

use crate::token::CancelToken;
use std::collections::HashSet;

impl CancelToken {
    /// Appends this token to an ordered collection, consuming it.
    ///
    /// After storing, the collection's lifetime bounds the work; the caller
    /// keeps no direct handle. The method is designed to terminate a fluent
    /// chain that produced the token:
    ///
    /// ```rust
    /// use cancelkit::prelude::*;
    ///
    /// let mut subscriptions = Vec::new();
    /// CancelToken::from_fn(|| {}).store_in(&mut subscriptions);
    /// ```
    pub fn store_in<C>(self, collection: &mut C)
    where
        C: Extend<Self>,
    {
        collection.extend(std::iter::once(self));
    }

    /// Inserts this token into a set keyed by instance identity, consuming it.
    ///
    /// Prefer set storage when the collection may grow large and single
    /// tokens are frequently released early: `HashSet::remove` and
    /// `HashSet::take` accept the token's [`id`](CancelToken::id) and run in
    /// expected constant time, leaving the remaining tokens untouched and
    /// uncancelled.
    ///
    /// ```rust
    /// use cancelkit::prelude::*;
    /// use std::collections::HashSet;
    ///
    /// let mut subscriptions = HashSet::new();
    ///
    /// let token = CancelToken::from_fn(|| {});
    /// let id = token.id();
    /// token.store_in_set(&mut subscriptions);
    ///
    /// // Later: release this one subscription without cancelling the rest.
    /// let _token = subscriptions.take(&id);
    /// ```
    pub fn store_in_set(self, set: &mut HashSet<Self>) {
        set.insert(self);
    }
}
