use super::input::TextBuffer;
use super::theme::icon_glyph;
use crate::buttons::ButtonId;
use crate::host::{Element, InputKind, ProgressIndicator, ShellButton, TextInput};
use crate::icon::HIDDEN_CLASS;
use crate::text::{block_width, display_width};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Body,
    Icon,
    Message,
}

/// A classed piece of the dialog body.
#[derive(Debug, Clone)]
pub struct Node {
    role: NodeRole,
    classes: BTreeSet<String>,
    text: String,
}

impl Node {
    pub(crate) fn new(role: NodeRole) -> Self {
        Self {
            role,
            classes: BTreeSet::new(),
            text: String::new(),
        }
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Glyph drawn in the icon slot, if the slot is shown and carries a known icon class.
    pub fn glyph(&self) -> Option<(&str, &'static str)> {
        if self.role != NodeRole::Icon || self.classes.contains(HIDDEN_CLASS) {
            return None;
        }
        self.classes
            .iter()
            .find_map(|class| icon_glyph(class).map(|glyph| (class.as_str(), glyph)))
    }
}

impl Element for Node {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn width(&self) -> u16 {
        match self.role {
            NodeRole::Body => 0,
            NodeRole::Icon => self.glyph().map_or(0, |(_, glyph)| display_width(glyph)),
            NodeRole::Message => block_width(&self.text),
        }
    }

    fn horizontal_margins(&self) -> u16 {
        // one column between the icon and the message
        if self.role == NodeRole::Icon && self.width() > 0 {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalButton {
    id: ButtonId,
    label: String,
    visible: bool,
}

impl TerminalButton {
    pub(crate) fn new(id: ButtonId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            visible: true,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn caption(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

impl ShellButton for TerminalButton {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn width(&self) -> u16 {
        display_width(&self.label).saturating_add(4)
    }
}

#[derive(Debug, Clone)]
pub struct TextField {
    kind: InputKind,
    pub(crate) buffer: TextBuffer,
    visible: bool,
    width: u16,
    height: u16,
}

impl TextField {
    pub(crate) fn new(kind: InputKind) -> Self {
        Self {
            kind,
            buffer: TextBuffer::default(),
            visible: false,
            width: 0,
            height: 1,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows taken in the body.
    pub fn height(&self) -> u16 {
        match self.kind {
            InputKind::MultiLine => self.height.max(1),
            _ => 1,
        }
    }

    /// Text as drawn; passwords are masked.
    pub fn display_text(&self) -> String {
        match self.kind {
            InputKind::Password => self.buffer.masked('*'),
            _ => self.buffer.current(),
        }
    }
}

impl TextInput for TextField {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_value(&mut self, value: &str) {
        self.buffer.set_from(value);
    }

    fn value(&self) -> String {
        self.buffer.current()
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn set_height(&mut self, rows: u16) {
        self.height = rows;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressBar {
    visible: bool,
    width: u16,
    value: f64,
    text: Option<String>,
}

impl ProgressBar {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ProgressIndicator for ProgressBar {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn update(&mut self, value: f64, text: Option<&str>) {
        self.value = value.clamp(0.0, 1.0);
        if let Some(text) = text {
            self.text = Some(text.to_string());
        }
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn reset(&mut self) {
        self.value = 0.0;
        self.text = None;
    }
}
