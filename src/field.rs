use crate::config::TagFieldConfig;
use crate::dispatch::Handlers;
use crate::engine::Engine;
use crate::key::{InputEvent, KeyEvent};
use crate::render::{self, ChipRenderer, FieldView};
use crate::traits::{AcceptAll, AddGuard, TagRenderer, TextEditSurface};
use crate::types::{Interaction, TagState};

/// A mounted tag field: state machine, observers, add-guard and renderer.
///
/// Each method runs one transition to completion and then delivers its
/// notifications to the bound handlers.
pub struct TagField<R: TagRenderer = ChipRenderer> {
    engine: Engine,
    handlers: Handlers,
    guard: Box<dyn AddGuard>,
    renderer: R,
}

pub struct TagFieldBuilder<R: TagRenderer = ChipRenderer> {
    config: TagFieldConfig,
    handlers: Handlers,
    guard: Box<dyn AddGuard>,
    renderer: R,
}

impl Default for TagFieldBuilder {
    fn default() -> Self {
        Self {
            config: TagFieldConfig::default(),
            handlers: Handlers::default(),
            guard: Box::new(AcceptAll),
            renderer: ChipRenderer,
        }
    }
}

impl<R: TagRenderer> TagFieldBuilder<R> {
    pub fn config(mut self, config: TagFieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn add_guard(mut self, guard: impl AddGuard + 'static) -> Self {
        self.guard = Box::new(guard);
        self
    }

    pub fn renderer<R2: TagRenderer>(self, renderer: R2) -> TagFieldBuilder<R2> {
        TagFieldBuilder {
            config: self.config,
            handlers: self.handlers,
            guard: self.guard,
            renderer,
        }
    }

    pub fn build(self) -> TagField<R> {
        TagField {
            engine: Engine::new(self.config),
            handlers: self.handlers,
            guard: self.guard,
            renderer: self.renderer,
        }
    }
}

impl Default for TagField {
    fn default() -> Self {
        TagFieldBuilder::default().build()
    }
}

impl TagField {
    pub fn new(config: TagFieldConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> TagFieldBuilder {
        TagFieldBuilder::default()
    }
}

impl<R: TagRenderer> TagField<R> {
    pub fn tags(&self) -> &[String] {
        self.engine.tags()
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    pub fn config(&self) -> &TagFieldConfig {
        self.engine.config()
    }

    pub fn snapshot(&self) -> TagState {
        self.engine.snapshot()
    }

    pub fn handle_event(&mut self, input: InputEvent) {
        let notifications = self.engine.handle_event(&*self.guard, input);
        self.handlers.dispatch(notifications);
    }

    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        let notifications = self.engine.on_text_changed(&*self.guard, text.into());
        self.handlers.dispatch(notifications);
    }

    pub fn add_tag(&mut self, text: &str) {
        let notifications = self.engine.add_tag(&*self.guard, text);
        self.handlers.dispatch(notifications);
    }

    pub fn on_key_press(&mut self, key: KeyEvent) {
        let notifications = self.engine.on_key_press(key);
        self.handlers.dispatch(notifications);
    }

    pub fn on_submit(&mut self) {
        let notifications = self.engine.submit(&*self.guard);
        self.handlers.dispatch(notifications);
    }

    pub fn interact(&mut self, index: usize, interaction: Interaction) {
        let notifications = self.engine.interact(index, interaction);
        self.handlers.dispatch(notifications);
    }

    pub fn remove_tag_at(&mut self, index: usize) {
        let notifications = self.engine.remove_tag_at(index);
        self.handlers.dispatch(notifications);
    }

    /// New props from the host: state is replaced, not merged.
    pub fn set_props(&mut self, config: TagFieldConfig) {
        self.engine.reset(config);
    }

    pub fn render(&self) -> FieldView<R::Output> {
        render::compose(self.engine.state(), self.engine.config(), &self.renderer)
    }

    /// Push buffer text, placeholder and visibility into the host widget.
    pub fn sync_surface<S: TextEditSurface + ?Sized>(&self, surface: &mut S) {
        match render::input_view(self.engine.state(), self.engine.config()) {
            Some(input) => {
                surface.set_visible(true);
                surface.set_text(&input.text);
                surface.set_placeholder(input.placeholder.as_deref());
            }
            None => surface.set_visible(false),
        }
    }
}
