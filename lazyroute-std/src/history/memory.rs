//! In-memory session history.

use futures::{
    channel::mpsc::{self, UnboundedSender},
    stream::{BoxStream, StreamExt},
};
use lazyroute_core::History;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct State {
    entries: Vec<String>,
    index: usize,
    listeners: Vec<UnboundedSender<String>>,
}

impl State {
    fn current(&self) -> String {
        self.entries[self.index].clone()
    }

    fn notify(&mut self) {
        let location = self.current();
        self.listeners
            .retain(|listener| listener.unbounded_send(location.clone()).is_ok());
    }
}

/// A history stack held in memory.
///
/// `push` and `replace` are silent, as they come from the router.
/// [`back`](Self::back), [`forward`](Self::forward), [`go`](Self::go) and
/// [`visit`](Self::visit) model changes made outside the router and are
/// reported on [`changes`](History::changes).
pub struct MemoryHistory {
    state: Mutex<State>,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(State {
                entries: vec![initial.into()],
                index: 0,
                listeners: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move `delta` entries through the stack.
    ///
    /// Returns false, leaving the history unchanged, if the target is out of
    /// range or `delta` is zero.
    pub fn go(&self, delta: isize) -> bool {
        let mut state = self.lock();
        let target = match state.index.checked_add_signed(delta) {
            Some(target) if delta != 0 && target < state.entries.len() => target,
            _ => return false,
        };
        state.index = target;
        state.notify();
        true
    }

    /// Go one entry back.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Go one entry forward.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Enter `location` as if the user typed it: push it and report the change.
    pub fn visit(&self, location: impl Into<String>) {
        let mut state = self.lock();
        push_entry(&mut state, location.into());
        state.notify();
    }

    /// End every change stream.
    pub fn close(&self) {
        self.lock().listeners.clear();
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.lock().index
    }
}

fn push_entry(state: &mut State, location: String) {
    let next = state.index + 1;
    state.entries.truncate(next);
    state.entries.push(location);
    state.index = next;
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.lock().current()
    }

    fn push(&self, location: &str) {
        push_entry(&mut self.lock(), location.to_string());
    }

    fn replace(&self, location: &str) {
        let mut state = self.lock();
        let index = state.index;
        state.entries[index] = location.to_string();
    }

    fn changes(&self) -> BoxStream<'static, String> {
        let (tx, rx) = mpsc::unbounded();
        self.lock().listeners.push(tx);
        rx.boxed()
    }
}
