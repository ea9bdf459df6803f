//! Capability interfaces the controller drives.
//!
//! A host builds one [`DialogShell`]: a modal window with an icon slot, a message, three
//! text controls, a progress indicator and a footer holding the four canonical buttons.
//! The controller never paints; it only toggles these pieces and reads measurements back.

use crate::buttons::ButtonId;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    SingleLine,
    MultiLine,
    Password,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [InputKind::SingleLine, InputKind::MultiLine, InputKind::Password];

    /// Enter in this control submits the dialog instead of editing the text.
    pub fn submits_on_enter(self) -> bool {
        !matches!(self, InputKind::MultiLine)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            InputKind::SingleLine => 0,
            InputKind::MultiLine => 1,
            InputKind::Password => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input(InputKind),
    Button(ButtonId),
}

/// What the window made of a user event. The controller turns these into dismissals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Ignored,
    Consumed,
    /// A visible button was pressed.
    Activate(ButtonId),
    /// Enter in a single-line or password control.
    Submit,
    /// Title-bar close control or Escape, only while the keymap is enabled.
    Close,
}

/// Construction parameters for the one shell a controller ever builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellBlueprint {
    pub title: String,
    /// Initial labels, in footer order.
    pub buttons: Vec<(ButtonId, String)>,
    pub width: u16,
}

pub trait Element {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn replace_class(&mut self, old: &str, new: &str) {
        if !old.is_empty() {
            self.remove_class(old);
        }
        if !new.is_empty() {
            self.add_class(new);
        }
    }

    fn set_text(&mut self, text: &str);
    fn width(&self) -> u16;
    fn horizontal_margins(&self) -> u16;
}

/// Footer button. Hidden buttons take no room in the footer and never take focus.
pub trait ShellButton {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
    fn set_label(&mut self, label: &str);
    fn label(&self) -> &str;
    fn width(&self) -> u16;
}

pub trait TextInput {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
    fn set_value(&mut self, value: &str);
    fn value(&self) -> String;
    fn set_width(&mut self, width: u16);
    fn set_height(&mut self, rows: u16);
}

pub trait ProgressIndicator {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
    fn set_width(&mut self, width: u16);
    /// `value` is a fraction in `[0, 1]`; `text` replaces the label when given.
    fn update(&mut self, value: f64, text: Option<&str>);
    fn value(&self) -> f64;
    /// Back to zero with no label.
    fn reset(&mut self);
}

pub trait DialogShell {
    type Button: ShellButton;
    type Input: TextInput;
    type Progress: ProgressIndicator;
    type Node: Element;

    fn set_title(&mut self, title: &str);
    fn set_close_tool_visible(&mut self, visible: bool);
    /// Escape handling; disabled while closing is not allowed.
    fn set_keymap_enabled(&mut self, enabled: bool);
    /// Modal windows block input behind a mask.
    fn set_modal(&mut self, modal: bool);
    /// Drag a lightweight proxy instead of the window. A hint; hosts without window
    /// dragging ignore it.
    fn set_proxy_drag(&mut self, enabled: bool);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_focus(&mut self, target: Option<FocusTarget>);
    fn set_footer_visible(&mut self, visible: bool);

    fn body(&self) -> &Self::Node;
    fn body_mut(&mut self) -> &mut Self::Node;
    fn icon(&self) -> &Self::Node;
    fn icon_mut(&mut self) -> &mut Self::Node;
    fn message(&self) -> &Self::Node;
    fn message_mut(&mut self) -> &mut Self::Node;
    fn button(&self, id: ButtonId) -> &Self::Button;
    fn button_mut(&mut self, id: ButtonId) -> &mut Self::Button;
    fn input(&self, kind: InputKind) -> &Self::Input;
    fn input_mut(&mut self, kind: InputKind) -> &mut Self::Input;
    fn progress(&self) -> &Self::Progress;
    fn progress_mut(&mut self) -> &mut Self::Progress;

    fn is_visible(&self) -> bool;
    /// Shows the window, growing out of `origin` when one is given.
    fn show(&mut self, origin: Option<Rect>);
    fn hide(&mut self);
    /// Height always follows content.
    fn set_width(&mut self, width: u16);
    fn center(&mut self);
    /// Left plus right border of the window.
    fn frame_width(&self) -> u16;
    /// Left plus right padding of the body.
    fn body_frame_width(&self) -> u16;

    fn handle_key(&mut self, key: KeyEvent) -> ShellEvent;
    fn handle_mouse(&mut self, event: MouseEvent) -> ShellEvent;

    /// Drives window animations.
    fn tick(&mut self, _now: Instant) {}
}

pub trait DialogHost {
    type Shell: DialogShell;

    fn create_shell(&mut self, blueprint: &ShellBlueprint) -> Self::Shell;
}
