pub mod config;
pub mod dispatch;
pub mod engine;
pub mod field;
pub mod key;
pub mod render;
pub mod traits;
pub mod types;

pub use crate::config::{CapPolicy, ConfigError, TagFieldConfig};
pub use crate::dispatch::Handlers;
pub use crate::engine::Engine;
pub use crate::field::{TagField, TagFieldBuilder};
pub use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
pub use crate::render::{Chip, ChipRenderer, FieldView, InputView};
pub use crate::traits::{AcceptAll, AddGuard, TagRenderer, TextEditSurface};
pub use crate::types::{Interaction, InteractionKind, Notification, TagState, TagView};
