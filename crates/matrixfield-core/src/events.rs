//! Change notification between the model and its collaborator.
//!
//! The host subscribes once and receives every stored-value transition. The
//! enabled flag lets a host mute the bus while it replays a document, the
//! same way it suspends its own undo recording.

use std::fmt;

pub type SubId = usize;

/// One stored-value transition, both sides in canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueChange {
    pub old: String,
    pub new: String,
}

pub struct ChangeBus {
    subs: Vec<Box<dyn Fn(&ValueChange)>>,
    enabled: bool,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self {
            subs: Vec::new(),
            enabled: true,
        }
    }

    pub fn subscribe(&mut self, f: impl Fn(&ValueChange) + 'static) -> SubId {
        self.subs.push(Box::new(f));
        self.subs.len() - 1
    }

    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn emit(&self, change: &ValueChange) {
        if !self.enabled {
            return;
        }
        for s in &self.subs {
            s(change);
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBus")
            .field("subs", &self.subs.len())
            .field("enabled", &self.enabled)
            .finish()
    }
}
