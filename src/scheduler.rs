//! Cancellable repeating tasks that drive the engines.
//!
//! - [`FrameLoop`] runs a callback once per display refresh, re-registering
//!   itself with `requestAnimationFrame` after every frame.
//! - [`Ticker`] runs a callback on a fixed period via `gloo_timers`.
//! - [`TaskSlot`] owns at most one running task.
//!
//! Cancelling is idempotent everywhere and dropping a task cancels it, so a
//! component that tears down never receives a late callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ClockError;

/// A periodic task with a stable handle.
pub trait RepeatingTask {
    /// Stop the task. Calling this more than once is a no-op.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Holds the single task currently driving an engine.
#[derive(Debug)]
pub struct TaskSlot<T: RepeatingTask> {
    task: Option<T>,
}

impl<T: RepeatingTask> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { task: None }
    }
}

impl<T: RepeatingTask> TaskSlot<T> {
    /// Install `task`, cancelling whatever ran before.
    pub fn replace(&mut self, task: T) {
        self.cancel();
        self.task = Some(task);
    }

    pub fn cancel(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| t.is_active())
    }
}

impl<T: RepeatingTask> Drop for TaskSlot<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Frame loop

struct FrameState {
    active: Cell<bool>,
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameState {
    fn request(&self) -> Result<(), ClockError> {
        let window =
            web_sys::window().ok_or_else(|| ClockError::Scheduler("no window".to_string()))?;
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(ClockError::scheduler)?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        self.active.set(false);
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Calls `on_frame` with the frame timestamp on every display refresh.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, ClockError>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(FrameState {
            active: Cell::new(true),
            request_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        // The closure only holds a weak handle so the loop can be dropped.
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request_id.set(None);
            if !state.active.get() {
                return;
            }
            on_frame(timestamp);
            if state.active.get() {
                if let Err(err) = state.request() {
                    warn!("Frame loop stopped: {}", err);
                    state.active.set(false);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.request()?;
        Ok(Self { state })
    }
}

impl RepeatingTask for FrameLoop {
    fn cancel(&mut self) {
        self.state.cancel();
    }

    fn is_active(&self) -> bool {
        self.state.active.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Fixed-period ticker

/// Calls `on_tick` every `period_ms` milliseconds until cancelled.
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn start<F>(period_ms: u32, on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            interval: Some(Interval::new(period_ms, on_tick)),
        }
    }
}

impl RepeatingTask for Ticker {
    fn cancel(&mut self) {
        // Dropping the interval clears it on the JS side.
        self.interval.take();
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}
