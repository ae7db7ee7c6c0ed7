use crate::types::TagView;

/// Gate deciding whether candidate text may become a tag.
///
/// The guard sees the untrimmed candidate. Any `Fn(&str) -> bool` is a guard.
pub trait AddGuard {
    fn allows(&self, text: &str) -> bool;
}

impl<F> AddGuard for F
where
    F: Fn(&str) -> bool,
{
    fn allows(&self, text: &str) -> bool {
        self(text)
    }
}

/// The default guard: accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AddGuard for AcceptAll {
    fn allows(&self, _text: &str) -> bool {
        true
    }
}

/// Rendering strategy for a single tag.
///
/// The field never draws anything itself; it composes one [`TagView`] per tag
/// and hands it here.
pub trait TagRenderer {
    type Output;

    fn render(&self, view: &TagView<'_>) -> Self::Output;
}

/// The host's raw single-line text widget.
///
/// The field pushes derived state into it after every transition; the widget
/// reports changes back as [`crate::InputEvent`]s.
pub trait TextEditSurface {
    fn set_text(&mut self, text: &str);
    fn set_placeholder(&mut self, placeholder: Option<&str>);
    fn set_visible(&mut self, visible: bool);
}
