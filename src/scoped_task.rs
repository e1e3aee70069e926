//! Scoped Tasks
//!
//! Async work owned by a view. Closing the scope aborts every task still
//! running, so a late response can never touch state of a closed view.

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{abortable, AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Default)]
struct ScopeInner {
    closed: bool,
    next_id: u64,
    /// Handles of tasks still running, keyed by task id
    handles: Vec<(u64, AbortHandle)>,
}

/// Set of abortable tasks tied to one view
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Arc<Mutex<ScopeInner>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that closes when the current reactive owner is cleaned up
    pub fn bound_to_owner() -> Self {
        let scope = Self::new();
        let on_close = scope.clone();
        on_cleanup(move || on_close.close());
        scope
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut ScopeInner) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    fn register<F: Future>(&self, fut: F) -> Option<(u64, Abortable<F>)> {
        self.with_inner(|inner| {
            if inner.closed {
                return None;
            }
            let (task, handle) = abortable(fut);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handles.push((id, handle));
            Some((id, task))
        })
    }

    fn release(&self, id: u64) {
        self.with_inner(|inner| inner.handles.retain(|(task_id, _)| *task_id != id));
    }

    /// Make `fut` abortable by this scope. `None` once the scope is closed.
    /// The handle is held until the scope closes or aborts.
    pub fn wrap<F: Future>(&self, fut: F) -> Option<Abortable<F>> {
        self.register(fut).map(|(_, task)| task)
    }

    /// `fut` bound to this scope; its handle is dropped once it finishes
    fn scoped<F: Future<Output = ()>>(&self, fut: F) -> Option<impl Future<Output = ()>> {
        let (id, task) = self.register(fut)?;
        let scope = self.clone();
        Some(async move {
            if task.await.is_err() {
                log::debug!("[TASK] aborted");
            }
            scope.release(id);
        })
    }

    /// Spawn on the local executor; silently dropped if the scope is closed.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        match self.scoped(fut) {
            Some(task) => spawn_local(task),
            None => log::debug!("[TASK] scope closed, not spawning"),
        }
    }

    /// Abort every running task but keep accepting new ones
    pub fn abort_all(&self) {
        self.with_inner(|inner| {
            for (_, handle) in inner.handles.drain(..) {
                handle.abort();
            }
        });
    }

    pub fn close(&self) {
        self.with_inner(|inner| inner.closed = true);
        self.abort_all();
    }
}
