//! Open/closed state for disclosure controls (accordion items, FAQ entries).

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Two-state disclosure. Only [`Disclosure::toggle`] changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Value for `data-state` on trigger and panel.
    pub fn data_state(self) -> &'static str {
        if self.open { "open" } else { "closed" }
    }

    /// Whether the panel carries the `hidden` attribute.
    pub fn panel_hidden(self) -> bool {
        !self.open
    }
}

/// Element ids linking a trigger to the panel it controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureIds {
    pub trigger: String,
    pub panel: String,
}

impl DisclosureIds {
    pub fn new(base: &str) -> Self {
        let base = base.trim();
        let base = if base.is_empty() { "disclosure" } else { base };
        Self {
            trigger: format!("{base}-trigger"),
            panel: format!("{base}-panel"),
        }
    }
}
