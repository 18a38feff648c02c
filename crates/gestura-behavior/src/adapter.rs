use crate::engine::GestureEngine;
use gestura_foundation::TapConfirmation;
use std::fmt;
use std::rc::Rc;

/// Translates one toolkit's native gesture callbacks into engine calls.
///
/// An adapter owns whatever per-gesture bookkeeping its toolkit needs
/// (previous samples, "did this release succeed" flags, density). The
/// engine owns the shared classifiers and the outbound channels.
pub trait PlatformAdapter: 'static {
    /// A native callback, already reduced to plain values.
    type RawEvent: fmt::Debug;

    fn ingest(&mut self, event: &Self::RawEvent, engine: &Rc<GestureEngine>);

    /// How this toolkit reports single taps.
    fn tap_confirmation(&self) -> TapConfirmation;

    /// Called when the owning behavior is attached to a view.
    fn on_attach(&mut self, _engine: &Rc<GestureEngine>) {}

    /// Drops per-gesture state and timers. Called on detach.
    fn reset(&mut self) {}
}
