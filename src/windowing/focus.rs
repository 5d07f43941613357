use std::sync::Arc;

use crate::{
    error::RouterError,
    windowing::registry::{ControlEntry, ControlId},
};

/// Owns the single focused-control relation and the tab cursor.
///
/// The per-control `has_focus` flags are written here and nowhere else, so at
/// most one entry reports focus once [`FocusManager::set_focus`] returns.
#[derive(Debug)]
pub struct FocusManager {
    focused: Option<ControlId>,
    tab_cursor: i32,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(-1)
    }
}

impl FocusManager {
    pub fn new(tab_cursor: i32) -> Self {
        Self {
            focused: None,
            tab_cursor,
        }
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn tab_cursor(&self) -> i32 {
        self.tab_cursor
    }

    /// Moves focus to `target`, or blurs everything for `None`.
    ///
    /// An id that is not among `entries` blurs as well. No control lock may be
    /// held by the caller: controls whose state flips are told through
    /// `focus_changed`.
    pub fn set_focus<R: ?Sized>(
        &mut self,
        target: Option<ControlId>,
        entries: &[Arc<ControlEntry<R>>],
    ) {
        let target = target.filter(|id| entries.iter().any(|e| e.id() == *id));
        if target != self.focused {
            log::debug!(
                "focus {} -> {}",
                display(self.focused),
                display(target)
            );
        }
        self.focused = target;

        for entry in entries {
            let focused = Some(entry.id()) == target;
            if entry.set_focused(focused) != focused {
                entry.lock().focus_changed(focused);
            }
        }
    }

    /// Advances the tab cursor and resolves the tab stop it lands on.
    ///
    /// Returns `Ok(None)` with no controls registered. The cursor keeps its
    /// new value even when no stop matches it.
    pub fn advance_tab<R: ?Sized>(
        &mut self,
        entries: &[Arc<ControlEntry<R>>],
    ) -> Result<Option<ControlId>, RouterError> {
        let Ok(count) = i32::try_from(entries.len()) else {
            return Ok(None);
        };
        if count == 0 {
            return Ok(None);
        }

        self.tab_cursor = self.tab_cursor.wrapping_add(1).rem_euclid(count);
        let cursor = self.tab_cursor;

        entries
            .iter()
            .find(|e| {
                let c = e.lock();
                c.tab_stop() && c.tab_index() == cursor
            })
            .map(|e| Some(e.id()))
            .ok_or(RouterError::FocusTargetNotFound { tab_index: cursor })
    }
}

fn display(id: Option<ControlId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        widgets::Control,
        windowing::{
            events::{Outcome, PointerEvent},
            registry::ControlRegistry,
        },
    };

    struct Stop {
        index: i32,
        tab_stop: bool,
    }

    impl Control for Stop {
        fn tab_index(&self) -> i32 {
            self.index
        }

        fn tab_stop(&self) -> bool {
            self.tab_stop
        }

        fn pointer(&mut self, _event: &PointerEvent) -> Outcome {
            Outcome::Unhandled
        }

        fn paint(&mut self, _ctx: &mut ()) {}
    }

    fn stop(index: i32) -> Stop {
        Stop {
            index,
            tab_stop: true,
        }
    }

    #[test]
    fn set_focus_keeps_single_focus() {
        let reg: ControlRegistry = ControlRegistry::new();
        let a = reg.add(stop(0));
        let b = reg.add(stop(1));
        let snap = reg.snapshot();
        let mut focus = FocusManager::default();

        focus.set_focus(Some(a), &snap);
        assert_eq!(focus.focused(), Some(a));
        assert!(reg.get(a).unwrap().has_focus());

        focus.set_focus(Some(b), &snap);
        let flags: Vec<_> = snap.iter().map(|e| e.has_focus()).collect();
        assert_eq!(flags, vec![false, true]);

        focus.set_focus(None, &snap);
        assert!(snap.iter().all(|e| !e.has_focus()));
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn unknown_target_blurs() {
        let reg: ControlRegistry = ControlRegistry::new();
        let a = reg.add(stop(0));
        let snap = reg.snapshot();
        let mut focus = FocusManager::default();
        focus.set_focus(Some(a), &snap);

        let other: ControlRegistry = ControlRegistry::new();
        let stranger = other.add(stop(0));
        focus.set_focus(Some(stranger), &snap);

        assert_eq!(focus.focused(), None);
        assert!(!snap[0].has_focus());
    }

    #[test]
    fn tab_wraps_modulo_control_count() {
        let reg: ControlRegistry = ControlRegistry::new();
        let a = reg.add(stop(0));
        let b = reg.add(stop(1));
        let snap = reg.snapshot();
        let mut focus = FocusManager::default();

        assert_eq!(focus.advance_tab(&snap), Ok(Some(a)));
        assert_eq!(focus.advance_tab(&snap), Ok(Some(b)));
        assert_eq!(focus.advance_tab(&snap), Ok(Some(a)));
        assert_eq!(focus.tab_cursor(), 0);
    }

    #[test]
    fn tab_without_controls_is_a_no_op() {
        let reg: ControlRegistry = ControlRegistry::new();
        let mut focus = FocusManager::new(3);
        assert_eq!(focus.advance_tab(&reg.snapshot()), Ok(None));
        assert_eq!(focus.tab_cursor(), 3);
    }

    #[test]
    fn tab_gap_is_reported() {
        let reg: ControlRegistry = ControlRegistry::new();
        reg.add(stop(0));
        reg.add(Stop {
            index: 1,
            tab_stop: false,
        });
        let snap = reg.snapshot();
        let mut focus = FocusManager::new(0);

        assert_eq!(
            focus.advance_tab(&snap),
            Err(RouterError::FocusTargetNotFound { tab_index: 1 })
        );
        assert_eq!(focus.tab_cursor(), 1);
    }
}
