//! Records everything a behavior publishes, in delivery order.

use gestura_behavior::{GestureBehavior, GestureEngine, PlatformAdapter};
use gestura_core::{EventChannel, SubscriptionId};
use gestura_foundation::{GestureStatus, LongPressEvent, PanEvent, SwipeEvent, TapEvent};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    Tap(TapEvent),
    DoubleTap(TapEvent),
    LongPress(LongPressEvent),
    Pan(PanEvent),
    Swipe(SwipeEvent),
}

/// Subscribes to a behavior's channels and keeps what they deliver.
///
/// Subscribing to the swipe channel turns swipe detection on, so
/// [`EventRecorder::without_swipes`] exists for tests that need it off.
/// Dropping the recorder unsubscribes.
pub struct EventRecorder {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
    unsubscribe: Vec<Box<dyn Fn()>>,
}

impl EventRecorder {
    pub fn attach<A: PlatformAdapter>(behavior: &GestureBehavior<A>) -> Self {
        let mut recorder = Self::without_swipes(behavior);
        recorder.listen(behavior.engine().clone(), |engine| engine.swipes(), RecordedEvent::Swipe);
        recorder
    }

    pub fn without_swipes<A: PlatformAdapter>(behavior: &GestureBehavior<A>) -> Self {
        let mut recorder = Self {
            events: Rc::new(RefCell::new(Vec::new())),
            unsubscribe: Vec::new(),
        };
        let engine = behavior.engine().clone();
        recorder.listen(engine.clone(), |engine| engine.taps(), RecordedEvent::Tap);
        recorder.listen(engine.clone(), |engine| engine.double_taps(), RecordedEvent::DoubleTap);
        recorder.listen(engine.clone(), |engine| engine.long_presses(), RecordedEvent::LongPress);
        recorder.listen(engine, |engine| engine.pans(), RecordedEvent::Pan);
        recorder
    }

    fn listen<E, C, W>(&mut self, engine: Rc<GestureEngine>, channel: C, wrap: W)
    where
        E: Clone + 'static,
        C: Fn(&GestureEngine) -> &EventChannel<E> + 'static,
        W: Fn(E) -> RecordedEvent + 'static,
    {
        let sink = Rc::clone(&self.events);
        let id: SubscriptionId = channel(&engine).subscribe(move |event: &E| {
            sink.borrow_mut().push(wrap(event.clone()));
        });
        let weak = Rc::downgrade(&engine);
        self.unsubscribe.push(Box::new(move || {
            if let Some(engine) = weak.upgrade() {
                channel(&engine).unsubscribe(id);
            }
        }));
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn taps(&self) -> Vec<TapEvent> {
        self.collect(|event| match event {
            RecordedEvent::Tap(tap) => Some(*tap),
            _ => None,
        })
    }

    pub fn double_taps(&self) -> Vec<TapEvent> {
        self.collect(|event| match event {
            RecordedEvent::DoubleTap(tap) => Some(*tap),
            _ => None,
        })
    }

    pub fn long_presses(&self) -> Vec<LongPressEvent> {
        self.collect(|event| match event {
            RecordedEvent::LongPress(press) => Some(*press),
            _ => None,
        })
    }

    pub fn pans(&self) -> Vec<PanEvent> {
        self.collect(|event| match event {
            RecordedEvent::Pan(pan) => Some(pan.clone()),
            _ => None,
        })
    }

    pub fn pan_statuses(&self) -> Vec<GestureStatus> {
        self.pans().iter().map(|pan| pan.status).collect()
    }

    pub fn swipes(&self) -> Vec<SwipeEvent> {
        self.collect(|event| match event {
            RecordedEvent::Swipe(swipe) => Some(swipe.clone()),
            _ => None,
        })
    }

    fn collect<T>(&self, pick: impl Fn(&RecordedEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }
}

impl Drop for EventRecorder {
    fn drop(&mut self) {
        for unsubscribe in self.unsubscribe.drain(..) {
            unsubscribe();
        }
    }
}
