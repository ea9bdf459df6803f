use serde::Deserialize;
use std::fmt;

/// One of the four canonical dialog buttons. Its string form is the outcome handed to callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Ok,
    Yes,
    No,
    Cancel,
}

impl ButtonId {
    /// Footer order.
    pub const ALL: [ButtonId; 4] = [ButtonId::Ok, ButtonId::Yes, ButtonId::No, ButtonId::Cancel];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonId::Ok => "ok",
            ButtonId::Yes => "yes",
            ButtonId::No => "no",
            ButtonId::Cancel => "cancel",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ButtonId::Ok => 0,
            ButtonId::Yes => 1,
            ButtonId::No => 2,
            ButtonId::Cancel => 3,
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonLabel {
    /// Use the localized text from [`ButtonText`].
    Default,
    Custom(String),
}

/// Which buttons a request shows, and with which labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonSet {
    ok: Option<ButtonLabel>,
    yes: Option<ButtonLabel>,
    no: Option<ButtonLabel>,
    cancel: Option<ButtonLabel>,
}

impl ButtonSet {
    pub const OK: ButtonSet = ButtonSet {
        ok: Some(ButtonLabel::Default),
        yes: None,
        no: None,
        cancel: None,
    };
    pub const CANCEL: ButtonSet = ButtonSet {
        ok: None,
        yes: None,
        no: None,
        cancel: Some(ButtonLabel::Default),
    };
    pub const OK_CANCEL: ButtonSet = ButtonSet {
        ok: Some(ButtonLabel::Default),
        yes: None,
        no: None,
        cancel: Some(ButtonLabel::Default),
    };
    pub const YES_NO: ButtonSet = ButtonSet {
        ok: None,
        yes: Some(ButtonLabel::Default),
        no: Some(ButtonLabel::Default),
        cancel: None,
    };
    pub const YES_NO_CANCEL: ButtonSet = ButtonSet {
        ok: None,
        yes: Some(ButtonLabel::Default),
        no: Some(ButtonLabel::Default),
        cancel: Some(ButtonLabel::Default),
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ButtonId) -> Self {
        *self.slot_mut(id) = Some(ButtonLabel::Default);
        self
    }

    pub fn with_label(mut self, id: ButtonId, label: impl Into<String>) -> Self {
        *self.slot_mut(id) = Some(ButtonLabel::Custom(label.into()));
        self
    }

    pub fn contains(&self, id: ButtonId) -> bool {
        self.label(id).is_some()
    }

    pub fn label(&self, id: ButtonId) -> Option<&ButtonLabel> {
        match id {
            ButtonId::Ok => self.ok.as_ref(),
            ButtonId::Yes => self.yes.as_ref(),
            ButtonId::No => self.no.as_ref(),
            ButtonId::Cancel => self.cancel.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        ButtonId::ALL.iter().all(|id| !self.contains(*id))
    }

    /// Text shown on `id`, or `None` when the button is not part of the set.
    pub fn resolve_label<'a>(&'a self, id: ButtonId, text: &'a ButtonText) -> Option<&'a str> {
        self.label(id).map(|label| match label {
            ButtonLabel::Default => text.get(id),
            ButtonLabel::Custom(custom) => custom.as_str(),
        })
    }

    fn slot_mut(&mut self, id: ButtonId) -> &mut Option<ButtonLabel> {
        match id {
            ButtonId::Ok => &mut self.ok,
            ButtonId::Yes => &mut self.yes,
            ButtonId::No => &mut self.no,
            ButtonId::Cancel => &mut self.cancel,
        }
    }
}

/// Localizable default labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonText {
    pub ok: String,
    pub cancel: String,
    pub yes: String,
    pub no: String,
}

impl Default for ButtonText {
    fn default() -> Self {
        Self {
            ok: "OK".to_string(),
            cancel: "Cancel".to_string(),
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}

impl ButtonText {
    pub fn get(&self, id: ButtonId) -> &str {
        match id {
            ButtonId::Ok => &self.ok,
            ButtonId::Yes => &self.yes,
            ButtonId::No => &self.no,
            ButtonId::Cancel => &self.cancel,
        }
    }
}

/// Outcome of the title-bar close control (and Escape).
pub fn close_outcome(buttons: Option<&ButtonSet>) -> ButtonId {
    match buttons {
        Some(set) if set.contains(ButtonId::No) && !set.contains(ButtonId::Cancel) => ButtonId::No,
        _ => ButtonId::Cancel,
    }
}

/// Button pressed by Enter in a single-line or password field, if any.
pub fn enter_outcome(buttons: Option<&ButtonSet>) -> Option<ButtonId> {
    let set = buttons?;
    if set.contains(ButtonId::Ok) {
        Some(ButtonId::Ok)
    } else if set.contains(ButtonId::Yes) {
        Some(ButtonId::Yes)
    } else {
        None
    }
}
