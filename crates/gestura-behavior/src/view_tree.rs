//! The view hierarchy as seen by gesture behaviors.
//!
//! Behaviors never own views. They keep a view's identity plus a weak
//! reference to the tree and resolve geometry and parents on demand, so a
//! view that moves between gestures reports its current rectangle and a
//! view that left the tree simply stops resolving.

use crate::adapter::PlatformAdapter;
use crate::behavior::GestureBehavior;
use gestura_graphics::Rect;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

pub type Behaviors<A> = SmallVec<[GestureBehavior<A>; 2]>;

/// Parent lookup and geometry, supplied by the host.
pub trait ViewTree {
    /// Parent of `view`, or `None` for a root or an unknown view.
    fn parent(&self, view: ViewId) -> Option<ViewId>;

    /// Rectangle of `view` in logical window coordinates, or `None` when the
    /// view is unknown.
    fn bounds(&self, view: ViewId) -> Option<Rect>;
}

/// A view tree that also knows which behaviors sit on each view.
pub trait BehaviorHost<A: PlatformAdapter>: ViewTree {
    fn behaviors_on(&self, view: ViewId) -> Behaviors<A>;
}

struct ViewEntry<A: PlatformAdapter> {
    parent: Option<ViewId>,
    bounds: Rect,
    behaviors: Behaviors<A>,
}

/// In-memory view tree for hosts without one of their own, and for tests.
pub struct ViewRegistry<A: PlatformAdapter> {
    views: RefCell<FxHashMap<ViewId, ViewEntry<A>>>,
    next_id: Cell<u64>,
}

impl<A: PlatformAdapter> ViewRegistry<A> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            views: RefCell::new(FxHashMap::default()),
            next_id: Cell::new(1),
        })
    }

    pub fn add_root(&self, bounds: Rect) -> ViewId {
        self.insert(None, bounds)
    }

    /// Adds a child of `parent`. Returns `None` if `parent` is unknown.
    pub fn add_child(&self, parent: ViewId, bounds: Rect) -> Option<ViewId> {
        if !self.contains(parent) {
            return None;
        }
        Some(self.insert(Some(parent), bounds))
    }

    fn insert(&self, parent: Option<ViewId>, bounds: Rect) -> ViewId {
        let id = ViewId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.views.borrow_mut().insert(
            id,
            ViewEntry {
                parent,
                bounds,
                behaviors: SmallVec::new(),
            },
        );
        id
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.borrow().contains_key(&view)
    }

    pub fn len(&self) -> usize {
        self.views.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.borrow().is_empty()
    }

    pub fn set_bounds(&self, view: ViewId, bounds: Rect) -> bool {
        match self.views.borrow_mut().get_mut(&view) {
            Some(entry) => {
                entry.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Moves `view` under `parent`, or makes it a root.
    pub fn reparent(&self, view: ViewId, parent: Option<ViewId>) -> bool {
        if parent.is_some_and(|parent| parent == view || !self.contains(parent)) {
            return false;
        }
        match self.views.borrow_mut().get_mut(&view) {
            Some(entry) => {
                entry.parent = parent;
                true
            }
            None => false,
        }
    }

    /// Removes `view` and detaches its behaviors. Children keep pointing at
    /// the removed view, which makes them orphans until reparented.
    pub fn remove(&self, view: ViewId) -> bool {
        let removed = self.views.borrow_mut().remove(&view);
        match removed {
            Some(entry) => {
                for behavior in entry.behaviors {
                    behavior.detach();
                }
                true
            }
            None => false,
        }
    }

    /// Attaches `behavior` to `view`, moving it off any view it sat on.
    pub fn attach(self: &Rc<Self>, view: ViewId, behavior: &GestureBehavior<A>) -> bool {
        {
            let mut views = self.views.borrow_mut();
            if !views.contains_key(&view) {
                log::warn!("cannot attach gesture behavior to unknown view {view:?}");
                return false;
            }
            for entry in views.values_mut() {
                entry.behaviors.retain(|existing| !existing.ptr_eq(behavior));
            }
            if let Some(entry) = views.get_mut(&view) {
                entry.behaviors.push(behavior.clone());
            }
        }
        behavior.attach(view, self);
        true
    }

    pub fn detach(&self, view: ViewId, behavior: &GestureBehavior<A>) -> bool {
        let found = {
            let mut views = self.views.borrow_mut();
            match views.get_mut(&view) {
                Some(entry) => {
                    let before = entry.behaviors.len();
                    entry.behaviors.retain(|existing| !existing.ptr_eq(behavior));
                    entry.behaviors.len() != before
                }
                None => false,
            }
        };
        if found {
            behavior.detach();
        }
        found
    }
}

impl<A: PlatformAdapter> ViewTree for ViewRegistry<A> {
    fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.views.borrow().get(&view).and_then(|entry| entry.parent)
    }

    fn bounds(&self, view: ViewId) -> Option<Rect> {
        self.views.borrow().get(&view).map(|entry| entry.bounds)
    }
}

impl<A: PlatformAdapter> BehaviorHost<A> for ViewRegistry<A> {
    fn behaviors_on(&self, view: ViewId) -> Behaviors<A> {
        self.views
            .borrow()
            .get(&view)
            .map(|entry| entry.behaviors.clone())
            .unwrap_or_default()
    }
}
