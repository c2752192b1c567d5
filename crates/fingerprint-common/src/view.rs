use std::fmt::Display;

/// Control whose echo carries a percent sign.
pub const SALT_SLIDER_ID: &str = "salt-level";

/// Text for a slider's companion display.
pub fn slider_display(control_id: &str, value: impl Display) -> String {
    if control_id == SALT_SLIDER_ID {
        format!("{}%", value)
    } else {
        value.to_string()
    }
}

/// A tab button and the pane it targets share `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: &'static str,
    pub label: &'static str,
}

/// Exactly one active tab out of a fixed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    tabs: &'static [Tab],
    active: usize,
}

impl TabSet {
    /// The first declared tab starts active.
    pub fn new(tabs: &'static [Tab]) -> Self {
        Self { tabs, active: 0 }
    }

    pub fn tabs(&self) -> &'static [Tab] {
        self.tabs
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.tabs.get(self.active).map(|t| t.id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Make `target` the only active tab. Unknown targets change nothing.
    pub fn activate(&mut self, target: &str) -> bool {
        match self.tabs.iter().position(|t| t.id == target) {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }
}
