use crate::windowing::events::{ClickEvent, KeyEvent, Outcome, PointerEvent};

/// Capability surface every control exposes to the router.
///
/// `R` is the rendering context handed through by [`crate::Window::paint`];
/// the router never looks inside it. Focus is owned by the window: a control
/// learns about it through [`Control::focus_changed`] and never sets it.
pub trait Control<R: ?Sized = ()>: Send {
    /// Hit-test and paint order key, higher is tested first.
    fn z_index(&self) -> i32 {
        0
    }

    /// Position in the tab cycle. Indices need not be contiguous.
    fn tab_index(&self) -> i32 {
        0
    }

    /// Eligible to receive focus through tab traversal.
    fn tab_stop(&self) -> bool {
        false
    }

    /// Eligible to receive focus through pointer interaction.
    fn can_focus(&self) -> bool {
        false
    }

    /// Whether the tab key may move focus away while this control holds it.
    fn can_tab_out(&self) -> bool {
        true
    }

    fn is_invalid(&self) -> bool {
        false
    }

    fn pointer(&mut self, event: &PointerEvent) -> Outcome;

    fn key(&mut self, _event: &KeyEvent) {}

    fn click(&mut self, _event: &ClickEvent) {}

    fn focus_changed(&mut self, _focused: bool) {}

    fn paint(&mut self, ctx: &mut R);
}
