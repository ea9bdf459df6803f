//! Terminal implementation of the dialog shell, drawn with ratatui.
//!
//! The shell is a bordered window centred in the viewport: title bar with a close
//! control, body (icon, message, one text control, progress gauge) and a footer row of
//! buttons. All measurements are in cells.

mod input;
mod render;
mod theme;
mod widgets;

pub use render::cursor_position;
pub use theme::{icon_glyph, Theme, ThemeName};
pub use widgets::{Node, NodeRole, ProgressBar, TerminalButton, TextField};

use crate::buttons::ButtonId;
use crate::host::{
    DialogHost, DialogShell, Element, FocusTarget, InputKind, ProgressIndicator, ShellBlueprint,
    ShellButton, ShellEvent, TextInput,
};
use crate::icon::HIDDEN_CLASS;
use crate::text::wrap_block;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

const FRAME_WIDTH: u16 = 2;
const BODY_PADDING: u16 = 2;
const ENTRANCE_DURATION: Duration = Duration::from_millis(150);

pub struct TerminalHost {
    viewport: Rect,
    theme: Theme,
}

impl TerminalHost {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }
}

impl DialogHost for TerminalHost {
    type Shell = TerminalShell;

    fn create_shell(&mut self, blueprint: &ShellBlueprint) -> TerminalShell {
        TerminalShell::new(blueprint, self.viewport, self.theme.clone())
    }
}

#[derive(Debug, Clone, Copy)]
struct Entrance {
    origin: Rect,
    started: Option<Instant>,
    ratio: f64,
}

/// Where everything lands for the current state. Shared by drawing and hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    pub outer: Rect,
    pub close_tool: Option<Rect>,
    pub icon: Option<Rect>,
    pub message: Rect,
    pub message_lines: Vec<String>,
    pub input: Option<(InputKind, Rect)>,
    pub progress: Option<Rect>,
    pub buttons: Vec<(ButtonId, Rect)>,
}

pub struct TerminalShell {
    title: String,
    classes: BTreeSet<String>,
    close_tool_visible: bool,
    keymap_enabled: bool,
    modal: bool,
    proxy_drag: bool,
    visible: bool,
    footer_visible: bool,
    width: u16,
    viewport: Rect,
    focus: Option<FocusTarget>,
    body: Node,
    icon: Node,
    message: Node,
    buttons: [TerminalButton; 4],
    inputs: [TextField; 3],
    progress: ProgressBar,
    entrance: Option<Entrance>,
    theme: Theme,
}

impl TerminalShell {
    pub fn new(blueprint: &ShellBlueprint, viewport: Rect, theme: Theme) -> Self {
        let label = |id: ButtonId| {
            blueprint
                .buttons
                .iter()
                .find(|(button, _)| *button == id)
                .map_or(id.as_str(), |(_, label)| label.as_str())
        };
        let mut icon = Node::new(NodeRole::Icon);
        icon.add_class(HIDDEN_CLASS);
        Self {
            title: blueprint.title.clone(),
            classes: BTreeSet::new(),
            close_tool_visible: true,
            keymap_enabled: true,
            modal: true,
            proxy_drag: false,
            visible: false,
            footer_visible: true,
            width: blueprint.width,
            viewport,
            focus: None,
            body: Node::new(NodeRole::Body),
            icon,
            message: Node::new(NodeRole::Message),
            buttons: ButtonId::ALL.map(|id| TerminalButton::new(id, label(id))),
            inputs: InputKind::ALL.map(TextField::new),
            progress: ProgressBar::default(),
            entrance: None,
            theme,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn close_tool_visible(&self) -> bool {
        self.close_tool_visible
    }

    pub fn keymap_enabled(&self) -> bool {
        self.keymap_enabled
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    /// Stored for hosts that drag a proxy frame; the terminal window never moves.
    pub fn proxy_drag(&self) -> bool {
        self.proxy_drag
    }

    pub fn footer_visible(&self) -> bool {
        self.footer_visible
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn is_animating(&self) -> bool {
        self.entrance.is_some()
    }

    fn active_input(&self) -> Option<&TextField> {
        self.inputs.iter().find(|field| field.is_visible())
    }

    fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = Vec::new();
        if let Some(field) = self.active_input() {
            order.push(FocusTarget::Input(field.kind()));
        }
        if self.footer_visible {
            order.extend(
                self.buttons
                    .iter()
                    .filter(|button| button.is_visible())
                    .map(|button| FocusTarget::Button(button.id())),
            );
        }
        order
    }

    fn is_focusable(&self, target: FocusTarget) -> bool {
        self.focus_order().contains(&target)
    }

    fn cycle_focus(&mut self, forward: bool, buttons_only: bool) {
        let order: Vec<FocusTarget> = self
            .focus_order()
            .into_iter()
            .filter(|target| !buttons_only || matches!(target, FocusTarget::Button(_)))
            .collect();
        if order.is_empty() {
            return;
        }
        let current = self
            .focus
            .and_then(|focus| order.iter().position(|target| *target == focus));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(index), true) => (index + 1) % order.len(),
            (Some(index), false) => (index + order.len() - 1) % order.len(),
        };
        self.focus = Some(order[next]);
    }

    /// Focus target if it is still something the user can reach.
    fn live_focus(&self) -> Option<FocusTarget> {
        self.focus.filter(|target| self.is_focusable(*target))
    }

    /// Everything lands inside `outer`, and `outer` inside the viewport. When the viewport
    /// is too short, message lines go first, then input rows, then the footer gap.
    pub fn layout(&self) -> ShellLayout {
        let width = self
            .width
            .max(FRAME_WIDTH + BODY_PADDING)
            .min(self.viewport.width);
        let inner_width = width.saturating_sub(FRAME_WIDTH + BODY_PADDING);

        let glyph_width = self.icon.width();
        let icon_span = glyph_width + self.icon.horizontal_margins();
        let content_width = inner_width.saturating_sub(icon_span).max(1);

        let mut available = self.viewport.height.saturating_sub(2);
        let mut take = |wanted: u16| {
            let granted = wanted.min(available);
            available -= granted;
            granted
        };
        let footer_height = take(if self.footer_visible { 2 } else { 0 });
        let progress_height = take(u16::from(self.progress.is_visible()));
        let input = self
            .active_input()
            .map(|field| (field.kind(), take(field.height())))
            .filter(|(_, rows)| *rows > 0);
        let input_height = input.map_or(0, |(_, rows)| rows);
        let mut message_lines = wrap_block(self.message.text(), content_width as usize);
        let message_height = take(message_lines.len() as u16);
        message_lines.truncate(message_height as usize);

        let height = (2 + message_height + input_height + progress_height + footer_height)
            .min(self.viewport.height);
        let x = self.viewport.x + self.viewport.width.saturating_sub(width) / 2;
        let y = self.viewport.y + self.viewport.height.saturating_sub(height) / 2;
        let outer = Rect::new(x, y, width, height);

        let body_x = x + FRAME_WIDTH / 2 + BODY_PADDING / 2;
        let content_x = body_x + icon_span;
        let mut row = y + 1;

        let icon = (glyph_width > 0 && message_height > 0)
            .then(|| Rect::new(body_x, row, glyph_width, 1));
        let message = Rect::new(content_x, row, content_width, message_height);
        row += message_height;

        let input = input.map(|(kind, rows)| {
            let rect = Rect::new(content_x, row, content_width, rows);
            row += rows;
            (kind, rect)
        });
        let progress = (progress_height > 0).then(|| {
            let rect = Rect::new(content_x, row, content_width, 1);
            row += 1;
            rect
        });

        let mut buttons = Vec::new();
        if footer_height > 0 {
            let button_row = row + footer_height - 1;
            let visible: Vec<&TerminalButton> =
                self.buttons.iter().filter(|button| button.is_visible()).collect();
            let total: u16 = visible.iter().map(|button| button.width()).sum::<u16>()
                + (visible.len().saturating_sub(1) as u16);
            let footer_width = width.saturating_sub(FRAME_WIDTH);
            let right = x + 1 + footer_width;
            let mut bx = x + 1 + footer_width.saturating_sub(total) / 2;
            for button in visible {
                let clipped = button.width().min(right.saturating_sub(bx));
                if clipped == 0 {
                    break;
                }
                buttons.push((button.id(), Rect::new(bx, button_row, clipped, 1)));
                bx += button.width() + 1;
            }
        }

        let close_tool = (self.close_tool_visible && width >= 6 && height > 0)
            .then(|| Rect::new(x + width - 4, y, 3, 1));

        ShellLayout {
            outer,
            close_tool,
            icon,
            message,
            message_lines,
            input,
            progress,
            buttons,
        }
    }

    fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}

impl DialogShell for TerminalShell {
    type Button = TerminalButton;
    type Input = TextField;
    type Progress = ProgressBar;
    type Node = Node;

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_close_tool_visible(&mut self, visible: bool) {
        self.close_tool_visible = visible;
    }

    fn set_keymap_enabled(&mut self, enabled: bool) {
        self.keymap_enabled = enabled;
    }

    fn set_modal(&mut self, modal: bool) {
        self.modal = modal;
    }

    fn set_proxy_drag(&mut self, enabled: bool) {
        self.proxy_drag = enabled;
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_focus(&mut self, target: Option<FocusTarget>) {
        self.focus = target;
    }

    fn set_footer_visible(&mut self, visible: bool) {
        self.footer_visible = visible;
    }

    fn body(&self) -> &Node {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Node {
        &mut self.body
    }

    fn icon(&self) -> &Node {
        &self.icon
    }

    fn icon_mut(&mut self) -> &mut Node {
        &mut self.icon
    }

    fn message(&self) -> &Node {
        &self.message
    }

    fn message_mut(&mut self) -> &mut Node {
        &mut self.message
    }

    fn button(&self, id: ButtonId) -> &TerminalButton {
        &self.buttons[id.index()]
    }

    fn button_mut(&mut self, id: ButtonId) -> &mut TerminalButton {
        &mut self.buttons[id.index()]
    }

    fn input(&self, kind: InputKind) -> &TextField {
        &self.inputs[kind.index()]
    }

    fn input_mut(&mut self, kind: InputKind) -> &mut TextField {
        &mut self.inputs[kind.index()]
    }

    fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    fn progress_mut(&mut self) -> &mut ProgressBar {
        &mut self.progress
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self, origin: Option<Rect>) {
        self.visible = true;
        self.entrance = origin.map(|origin| Entrance {
            origin,
            started: None,
            ratio: 0.0,
        });
    }

    fn hide(&mut self) {
        self.visible = false;
        self.entrance = None;
    }

    fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    fn center(&mut self) {
        // layout() always centres in the current viewport
    }

    fn frame_width(&self) -> u16 {
        FRAME_WIDTH
    }

    fn body_frame_width(&self) -> u16 {
        BODY_PADDING
    }

    fn handle_key(&mut self, key: KeyEvent) -> ShellEvent {
        if !self.visible || key.kind == KeyEventKind::Release {
            return ShellEvent::Ignored;
        }
        let focus = self.live_focus();
        match key.code {
            KeyCode::Esc => {
                if self.keymap_enabled {
                    ShellEvent::Close
                } else if self.modal {
                    ShellEvent::Consumed
                } else {
                    ShellEvent::Ignored
                }
            }
            KeyCode::Tab => {
                self.cycle_focus(true, false);
                ShellEvent::Consumed
            }
            KeyCode::BackTab => {
                self.cycle_focus(false, false);
                ShellEvent::Consumed
            }
            KeyCode::Enter | KeyCode::Char(' ') if matches!(focus, Some(FocusTarget::Button(_))) => {
                match focus {
                    Some(FocusTarget::Button(id)) => ShellEvent::Activate(id),
                    _ => ShellEvent::Ignored,
                }
            }
            KeyCode::Left | KeyCode::Right if matches!(focus, Some(FocusTarget::Button(_))) => {
                self.cycle_focus(key.code == KeyCode::Right, true);
                ShellEvent::Consumed
            }
            KeyCode::Enter => match focus {
                Some(FocusTarget::Input(kind)) if kind.submits_on_enter() => ShellEvent::Submit,
                Some(FocusTarget::Input(kind)) => {
                    self.inputs[kind.index()]
                        .buffer
                        .apply_key(key.code, key.modifiers, true);
                    ShellEvent::Consumed
                }
                _ => ShellEvent::Ignored,
            },
            code => match focus {
                Some(FocusTarget::Input(kind)) => {
                    let multiline = !kind.submits_on_enter();
                    let modifiers = key.modifiers & !KeyModifiers::SHIFT;
                    if self.inputs[kind.index()]
                        .buffer
                        .apply_key(code, modifiers, multiline)
                    {
                        ShellEvent::Consumed
                    } else if self.modal {
                        ShellEvent::Consumed
                    } else {
                        ShellEvent::Ignored
                    }
                }
                _ if self.modal => ShellEvent::Consumed,
                _ => ShellEvent::Ignored,
            },
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> ShellEvent {
        if !self.visible {
            return ShellEvent::Ignored;
        }
        let layout = self.layout();
        let (column, row) = (event.column, event.row);
        let inside = Self::contains(layout.outer, column, row);
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return if inside || self.modal {
                ShellEvent::Consumed
            } else {
                ShellEvent::Ignored
            };
        }
        if let Some(tool) = layout.close_tool {
            if Self::contains(tool, column, row) {
                return ShellEvent::Close;
            }
        }
        if let Some((id, _)) = layout
            .buttons
            .iter()
            .find(|(_, rect)| Self::contains(*rect, column, row))
        {
            self.focus = Some(FocusTarget::Button(*id));
            return ShellEvent::Activate(*id);
        }
        if let Some((kind, rect)) = layout.input {
            if Self::contains(rect, column, row) {
                self.focus = Some(FocusTarget::Input(kind));
                return ShellEvent::Consumed;
            }
        }
        if inside || self.modal {
            ShellEvent::Consumed
        } else {
            ShellEvent::Ignored
        }
    }

    fn tick(&mut self, now: Instant) {
        let Some(entrance) = self.entrance.as_mut() else {
            return;
        };
        let started = *entrance.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        entrance.ratio = (elapsed.as_secs_f64() / ENTRANCE_DURATION.as_secs_f64()).min(1.0);
        if entrance.ratio >= 1.0 {
            self.entrance = None;
        }
    }
}
