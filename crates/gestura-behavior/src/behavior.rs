//! The per-view gesture behavior.

use crate::adapter::PlatformAdapter;
use crate::config::GestureConfig;
use crate::engine::GestureEngine;
use crate::propagation::ancestor_behaviors;
use crate::view_tree::{BehaviorHost, ViewId, ViewTree};
use gestura_core::{EventChannel, UiScheduler};
use gestura_foundation::{GestureError, LongPressEvent, PanEvent, SwipeEvent, TapEvent};
use gestura_graphics::Rect;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

struct Attachment<A: PlatformAdapter> {
    view: ViewId,
    host: Weak<dyn BehaviorHost<A>>,
}

/// Adapter hooks requested while the adapter was busy ingesting, e.g. by a
/// subscriber that detached the behavior. Applied once `ingest` returns.
#[derive(Clone, Copy, Default)]
struct DeferredHooks {
    reset: bool,
    attach: bool,
}

struct BehaviorState<A: PlatformAdapter> {
    engine: Rc<GestureEngine>,
    adapter: RefCell<A>,
    attachment: RefCell<Option<Attachment<A>>>,
    deferred: Cell<DeferredHooks>,
}

/// Gesture recognition for one view, driven by a platform adapter.
///
/// Cloning yields another handle to the same behavior. All state lives as
/// long as the last handle; timers die with it.
pub struct GestureBehavior<A: PlatformAdapter> {
    state: Rc<BehaviorState<A>>,
}

impl<A: PlatformAdapter> Clone for GestureBehavior<A> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: PlatformAdapter> fmt::Debug for GestureBehavior<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureBehavior")
            .field("view", &self.view())
            .field("config", &self.config())
            .finish()
    }
}

impl<A: PlatformAdapter> GestureBehavior<A> {
    pub fn new(adapter: A, scheduler: UiScheduler, config: GestureConfig) -> Self {
        Self {
            state: Rc::new(BehaviorState {
                engine: GestureEngine::new(scheduler, config),
                adapter: RefCell::new(adapter),
                attachment: RefCell::new(None),
                deferred: Cell::new(DeferredHooks::default()),
            }),
        }
    }

    pub fn engine(&self) -> &Rc<GestureEngine> {
        &self.state.engine
    }

    pub fn taps(&self) -> &EventChannel<TapEvent> {
        self.state.engine.taps()
    }

    pub fn double_taps(&self) -> &EventChannel<TapEvent> {
        self.state.engine.double_taps()
    }

    pub fn long_presses(&self) -> &EventChannel<LongPressEvent> {
        self.state.engine.long_presses()
    }

    pub fn pans(&self) -> &EventChannel<PanEvent> {
        self.state.engine.pans()
    }

    pub fn swipes(&self) -> &EventChannel<SwipeEvent> {
        self.state.engine.swipes()
    }

    pub fn config(&self) -> GestureConfig {
        self.state.engine.config()
    }

    pub fn set_config(&self, config: GestureConfig) {
        self.state.engine.set_config(config);
    }

    /// Runs `f` against the adapter, e.g. to inspect or retune it.
    ///
    /// Returns `None` when called from a subscriber while the adapter is
    /// still ingesting the event that triggered it.
    pub fn with_adapter<R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R> {
        match self.state.adapter.try_borrow_mut() {
            Ok(mut adapter) => Some(f(&mut adapter)),
            Err(_) => {
                log::warn!("adapter is busy ingesting; access skipped");
                None
            }
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn is_attached(&self) -> bool {
        self.state.attachment.borrow().is_some()
    }

    pub fn view(&self) -> Option<ViewId> {
        self.state
            .attachment
            .borrow()
            .as_ref()
            .map(|attachment| attachment.view)
    }

    pub fn view_rect(&self) -> Rect {
        self.state.engine.view_rect()
    }

    /// Binds the behavior to `view` inside `host`. A behavior that is
    /// already attached is detached first.
    pub fn attach<H>(&self, view: ViewId, host: &Rc<H>)
    where
        H: BehaviorHost<A> + 'static,
    {
        if self.is_attached() {
            self.detach();
        }

        let weak: Weak<H> = Rc::downgrade(host);
        let tree: Weak<dyn ViewTree> = weak.clone();
        let behaviors: Weak<dyn BehaviorHost<A>> = weak;
        self.state.engine.bind(view, tree);
        *self.state.attachment.borrow_mut() = Some(Attachment {
            view,
            host: behaviors,
        });
        match self.state.adapter.try_borrow_mut() {
            Ok(mut adapter) => adapter.on_attach(&self.state.engine),
            Err(_) => self.defer(|hooks| hooks.attach = true),
        }
        log::debug!("gesture behavior attached to {view:?}");
    }

    /// Cancels pending timers, resets the adapter and releases the view.
    pub fn detach(&self) {
        let previous = self.state.attachment.borrow_mut().take();
        self.state.engine.unbind();
        match self.state.adapter.try_borrow_mut() {
            Ok(mut adapter) => adapter.reset(),
            Err(_) => self.defer(|hooks| {
                hooks.reset = true;
                hooks.attach = false;
            }),
        }
        if let Some(attachment) = previous {
            log::debug!("gesture behavior detached from {:?}", attachment.view);
        }
    }

    /// Feeds a native callback to this behavior and, when configured, to
    /// the behaviors on every ancestor view.
    pub fn ingest(&self, event: &A::RawEvent) {
        debug_assert!(
            self.is_attached(),
            "gesture behavior must be attached before ingesting events"
        );
        if !self.is_attached() {
            log::warn!("dropping {event:?}: {}", GestureError::Detached);
            return;
        }

        self.ingest_local(event);
        if self.config().propagate_to_ancestors {
            self.propagate(event);
        }
    }

    /// Feeds a native callback to this behavior only.
    pub fn ingest_local(&self, event: &A::RawEvent) {
        let Ok(mut adapter) = self.state.adapter.try_borrow_mut() else {
            log::warn!("dropping re-entrant {event:?}");
            return;
        };
        log::trace!("ingest {event:?}");
        adapter.ingest(event, &self.state.engine);

        let hooks = self.state.deferred.take();
        if hooks.reset {
            adapter.reset();
            if !self.is_attached() {
                // Drop whatever the rest of this event started after detach.
                self.state.engine.reset();
            }
        }
        if hooks.attach {
            adapter.on_attach(&self.state.engine);
        }
    }

    fn defer(&self, update: impl FnOnce(&mut DeferredHooks)) {
        let mut hooks = self.state.deferred.get();
        update(&mut hooks);
        self.state.deferred.set(hooks);
        log::debug!("adapter busy; lifecycle hook deferred until ingest returns");
    }

    /// Forwards `event` to the behaviors on ancestor views, nearest first.
    pub fn propagate(&self, event: &A::RawEvent) {
        let (view, host) = match &*self.state.attachment.borrow() {
            Some(attachment) => (attachment.view, attachment.host.upgrade()),
            None => return,
        };
        let Some(host) = host else {
            return;
        };

        for ancestor in ancestor_behaviors(&*host, view, self) {
            ancestor.ingest_local(event);
        }
    }
}

#[cfg(test)]
#[path = "tests/behavior_tests.rs"]
mod tests;
