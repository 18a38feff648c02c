//! Upward walk used to forward raw events to ancestor behaviors.

use crate::adapter::PlatformAdapter;
use crate::behavior::GestureBehavior;
use crate::view_tree::{BehaviorHost, ViewId};
use rustc_hash::FxHashSet;

/// Behaviors on the ancestors of `view`, nearest ancestor first.
///
/// `origin` is never included. The walk ends at a root, at a view the host
/// no longer knows, or if the parent chain loops back on itself.
pub(crate) fn ancestor_behaviors<A: PlatformAdapter>(
    host: &dyn BehaviorHost<A>,
    view: ViewId,
    origin: &GestureBehavior<A>,
) -> Vec<GestureBehavior<A>> {
    let mut found = Vec::new();
    let mut visited = FxHashSet::default();
    visited.insert(view);

    let mut current = host.parent(view);
    while let Some(ancestor) = current {
        if !visited.insert(ancestor) {
            log::warn!("view hierarchy loops at {ancestor:?}; stopping propagation");
            break;
        }
        found.extend(
            host.behaviors_on(ancestor)
                .into_iter()
                .filter(|behavior| !behavior.ptr_eq(origin)),
        );
        current = host.parent(ancestor);
    }

    log::trace!("{} ancestor behaviors above {view:?}", found.len());
    found
}
