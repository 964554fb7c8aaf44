//! Stale-response guard for view-scoped requests.
//!
//! A `ViewScope` lives as long as the view that created it. Every load takes a
//! `Ticket`; when the response arrives it is applied only if the view is
//! still mounted and no newer load was issued since. The request itself is
//! not cancelled, its result is just dropped.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug)]
struct ScopeInner {
    alive: AtomicBool,
    seq: AtomicU64,
}

/// Liveness and load sequencing for one mounted view.
#[derive(Clone, Debug)]
pub struct ViewScope {
    inner: Arc<ScopeInner>,
}

/// Proof of which load a response belongs to.
#[derive(Clone, Debug)]
pub struct Ticket {
    inner: Arc<ScopeInner>,
    seq: u64,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                alive: AtomicBool::new(true),
                seq: AtomicU64::new(0),
            }),
        }
    }

    /// Start a load, superseding any earlier ticket.
    pub fn begin(&self) -> Ticket {
        let seq = self.inner.seq.fetch_add(1, Ordering::Relaxed) + 1;
        Ticket {
            inner: Arc::clone(&self.inner),
            seq,
        }
    }

    /// Ticket for a save or delete. It does not supersede pending loads and
    /// only ever checks liveness.
    pub fn begin_mutation(&self) -> Ticket {
        Ticket {
            inner: Arc::clone(&self.inner),
            seq: self.inner.seq.load(Ordering::Relaxed),
        }
    }

    /// Mark the view unmounted; every outstanding ticket goes stale.
    pub fn retire(&self) {
        self.inner.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::Relaxed)
    }

    /// Retire this scope when the current reactive owner is cleaned up.
    pub fn retire_on_cleanup(&self) {
        let scope = self.clone();
        leptos::prelude::on_cleanup(move || scope.retire());
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticket {
    /// Whether a response for this ticket may still be applied.
    pub fn is_current(&self) -> bool {
        self.inner.alive.load(Ordering::Relaxed) && self.inner.seq.load(Ordering::Relaxed) == self.seq
    }

    /// Whether the owning view is still mounted, regardless of newer loads.
    /// Used for mutations, where every response matters.
    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::Relaxed)
    }
}
