use std::{cmp::Reverse, sync::Arc};

use crate::{
    debug,
    error::RouterError,
    widgets::Control,
    windowing::{
        click::ClickDetector,
        events::{ClickEvent, InputEvent, KeyEvent, PointerEvent},
        focus::FocusManager,
        host::{Host, SystemHost},
        registry::{ControlEntry, ControlId, ControlRegistry},
    },
};

/// Input router for one host window.
///
/// Pointer events go to every control, topmost `z_index` first; the first
/// focusable control that handles one takes focus. Keyboard events go to the
/// focused control, with the tab character moving focus along the tab order.
/// Focus and click state are only touched from the thread calling
/// [`Window::dispatch`]; controls may be added from anywhere through
/// [`Window::registry`].
pub struct Window<R: ?Sized = ()> {
    registry: ControlRegistry<R>,
    focus: FocusManager,
    clicks: ClickDetector,
    host: Box<dyn Host>,
}

impl<R: ?Sized> Default for Window<R> {
    fn default() -> Self {
        WindowBuilder::new().build()
    }
}

impl<R: ?Sized> Window<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WindowBuilder {
        WindowBuilder::new()
    }

    pub fn add(&self, control: impl Control<R> + 'static) -> ControlId {
        self.registry.add(control)
    }

    /// Shared handle for registering controls from other threads.
    pub fn registry(&self) -> ControlRegistry<R> {
        self.registry.clone()
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focus.focused()
    }

    pub fn has_focus(&self, id: ControlId) -> bool {
        self.registry.get(id).is_some_and(|e| e.has_focus())
    }

    pub fn tab_cursor(&self) -> i32 {
        self.focus.tab_cursor()
    }

    pub fn dispatch(&mut self, event: impl Into<InputEvent>) -> Result<(), RouterError> {
        let event = event.into();
        log::trace!("dispatch {}", debug::event_name(&event));
        match &event {
            InputEvent::Pointer(ev) => {
                self.pointer(ev);
                Ok(())
            }
            InputEvent::Key(ev) => self.key(ev),
        }
    }

    pub fn pointer(&mut self, event: &PointerEvent) {
        let snapshot = self.registry.snapshot();
        let focus_at_start = self.focus.focused();

        let mut order: Vec<(i32, &Arc<ControlEntry<R>>)> =
            snapshot.iter().map(|e| (e.lock().z_index(), e)).collect();
        order.sort_by_key(|&(z, _)| Reverse(z));

        let mut claimed = false;
        for (_, entry) in order {
            let (outcome, can_focus) = {
                let mut control = entry.lock();
                (control.pointer(event), control.can_focus())
            };
            if !claimed && can_focus && outcome.is_handled() {
                claimed = true;
                self.focus.set_focus(Some(entry.id()), &snapshot);
            }
        }

        if event.is_button() && !claimed {
            self.focus.set_focus(None, &snapshot);
        }

        if let PointerEvent::Up { button, pos } = *event {
            let Some(target) = self.focus.focused() else {
                return;
            };
            if focus_at_start != Some(target) {
                log::debug!("release moved focus to {target}, no click");
                return;
            }

            let interval = self.host.double_click_interval();
            let is_double = self.clicks.resolve(target, self.host.now(), interval);
            log::debug!(
                "{} click on {target}",
                if is_double { "double" } else { "single" }
            );

            if let Some(entry) = snapshot.iter().find(|e| e.id() == target) {
                entry.lock().click(&ClickEvent {
                    button,
                    pos,
                    is_double,
                });
            }
        }
    }

    /// Forwards a key event to the focused control, moving focus first when
    /// it is the tab character. A tab order gap is reported after the event
    /// has still been delivered.
    pub fn key(&mut self, event: &KeyEvent) -> Result<(), RouterError> {
        let snapshot = self.registry.snapshot();
        let mut result = Ok(());

        if event.is_tab() && self.can_tab_out(&snapshot) {
            match self.focus.advance_tab(&snapshot) {
                Ok(Some(target)) => {
                    log::debug!("tab {} -> {target}", self.focus.tab_cursor());
                    self.focus.set_focus(Some(target), &snapshot);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("tab traversal failed: {e}");
                    result = Err(e);
                }
            }
        }

        if let Some(entry) = focused_entry(self.focus.focused(), &snapshot) {
            entry.lock().key(event);
        }
        result
    }

    /// Hands the context to every control. Order is not z-order; controls
    /// stack themselves.
    pub fn paint(&self, ctx: &mut R) {
        for entry in self.registry.snapshot().iter() {
            entry.lock().paint(ctx);
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.registry
            .snapshot()
            .iter()
            .any(|e| e.lock().is_invalid())
    }

    fn can_tab_out(&self, snapshot: &[Arc<ControlEntry<R>>]) -> bool {
        focused_entry(self.focus.focused(), snapshot).is_none_or(|e| e.lock().can_tab_out())
    }
}

fn focused_entry<R: ?Sized>(
    focused: Option<ControlId>,
    snapshot: &[Arc<ControlEntry<R>>],
) -> Option<&Arc<ControlEntry<R>>> {
    let id = focused?;
    snapshot.iter().find(|e| e.id() == id)
}

/// Configures a [`Window`]: the host collaborator and the initial tab cursor.
pub struct WindowBuilder {
    host: Option<Box<dyn Host>>,
    tab_cursor: i32,
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self {
            host: None,
            tab_cursor: -1,
        }
    }
}

impl WindowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Host + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Starting cursor; the first tab lands on index `tab_cursor + 1`.
    pub fn tab_cursor(mut self, tab_cursor: i32) -> Self {
        self.tab_cursor = tab_cursor;
        self
    }

    pub fn build<R: ?Sized>(self) -> Window<R> {
        Window {
            registry: ControlRegistry::new(),
            focus: FocusManager::new(self.tab_cursor),
            clicks: ClickDetector::new(),
            host: self
                .host
                .unwrap_or_else(|| Box::new(SystemHost::default()) as Box<dyn Host>),
        }
    }
}
