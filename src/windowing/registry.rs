use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use parking_lot::{Mutex, MutexGuard, RwLock};

use crate::widgets::Control;

/// Stable identity of a registered control. Focus and click state hold ids,
/// never the controls themselves, so a stale id just stops matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(0);

impl ControlId {
    fn next() -> Self {
        Self(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct ControlEntry<R: ?Sized = ()> {
    id: ControlId,
    control: Mutex<Box<dyn Control<R>>>,
    focused: AtomicBool,
}

impl<R: ?Sized> ControlEntry<R> {
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Mirror of the window's focus relation for this control.
    pub fn has_focus(&self) -> bool {
        self.focused.load(Ordering::Acquire)
    }

    /// Exclusive access to the control. Callers must drop the guard before
    /// touching another entry of the same pass.
    pub fn lock(&self) -> MutexGuard<'_, Box<dyn Control<R>>> {
        self.control.lock()
    }

    /// Returns the previous value.
    pub(crate) fn set_focused(&self, focused: bool) -> bool {
        self.focused.swap(focused, Ordering::AcqRel)
    }
}

pub type Snapshot<R> = Arc<Vec<Arc<ControlEntry<R>>>>;

/// Append-only set of controls attached to a window.
///
/// Clones share the same set, so a clone can be moved to another thread and
/// keep adding while the input thread dispatches. Writers copy the list when
/// a snapshot is still alive; readers only ever clone an `Arc`.
pub struct ControlRegistry<R: ?Sized = ()> {
    entries: Arc<RwLock<Snapshot<R>>>,
}

impl<R: ?Sized> Clone for ControlRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R: ?Sized> Default for ControlRegistry<R> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Arc::new(Vec::new()))),
        }
    }
}

impl<R: ?Sized> ControlRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, control: impl Control<R> + 'static) -> ControlId {
        self.add_boxed(Box::new(control))
    }

    pub fn add_boxed(&self, control: Box<dyn Control<R>>) -> ControlId {
        let entry = Arc::new(ControlEntry {
            id: ControlId::next(),
            control: Mutex::new(control),
            focused: AtomicBool::new(false),
        });
        let id = entry.id;

        let mut entries = self.entries.write();
        Arc::make_mut(&mut *entries).push(entry);
        log::trace!("registered control {id}, {} total", entries.len());
        id
    }

    /// Current membership, immune to later additions.
    pub fn snapshot(&self) -> Snapshot<R> {
        self.entries.read().clone()
    }

    pub fn get(&self, id: ControlId) -> Option<Arc<ControlEntry<R>>> {
        self.entries.read().iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windowing::events::{Outcome, PointerEvent};

    struct Plain;

    impl Control for Plain {
        fn pointer(&mut self, _event: &PointerEvent) -> Outcome {
            Outcome::Unhandled
        }

        fn paint(&mut self, _ctx: &mut ()) {}
    }

    #[test]
    fn ids_are_unique() {
        let reg: ControlRegistry = ControlRegistry::new();
        let a = reg.add(Plain);
        let b = reg.add(Plain);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(b).map(|e| e.id()), Some(b));
    }

    #[test]
    fn snapshot_is_isolated_from_later_adds() {
        let reg: ControlRegistry = ControlRegistry::new();
        reg.add(Plain);
        let snap = reg.snapshot();
        reg.add(Plain);

        assert_eq!(snap.len(), 1);
        assert_eq!(reg.snapshot().len(), 2);
    }

    #[test]
    fn clones_share_membership() {
        let reg: ControlRegistry = ControlRegistry::new();
        let other = reg.clone();
        let id = other.add(Plain);
        assert!(reg.get(id).is_some());
        assert!(!reg.is_empty());
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let reg: ControlRegistry = ControlRegistry::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reg = reg.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        reg.add(Plain);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = reg.snapshot();
        assert_eq!(snap.len(), 200);
        let mut ids: Vec<_> = snap.iter().map(|e| e.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }
}
