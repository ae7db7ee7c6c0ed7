use std::cell::RefCell;
use std::rc::Rc;

use tag_field::{Handlers, Notification};

/// Captures every delivered notification, in delivery order.
#[derive(Default, Debug, Clone)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handlers(&self) -> Handlers {
        let tags = self.log.clone();
        let text = self.log.clone();
        let rejected = self.log.clone();
        let interact = self.log.clone();
        Handlers::new()
            .on_tags_changed(move |t| tags.borrow_mut().push(Notification::TagsChanged(t.to_vec())))
            .on_text_changed(move |t| text.borrow_mut().push(Notification::TextChanged(t.to_string())))
            .on_add_rejected(move |t| {
                rejected
                    .borrow_mut()
                    .push(Notification::AddRejected(t.to_string()))
            })
            .on_tag_interact(move |index, tag, interaction, deleted| {
                interact.borrow_mut().push(Notification::TagInteracted {
                    index,
                    tag: tag.to_string(),
                    interaction,
                    deleted,
                })
            })
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

pub fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
