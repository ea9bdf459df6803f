use super::DialogController;
use crate::host::{DialogHost, DialogShell, Element, ProgressIndicator, TextInput};
use crate::text::BLANK;
use tracing::{trace, warn};

/// Measurements feeding one width solve. All values are cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizingInput {
    /// Caller-supplied width; skips content measurement when set.
    pub explicit_width: Option<u16>,
    /// Icon glyph plus its margins, zero without an icon.
    pub icon_width: u16,
    /// Natural message width plus its margins.
    pub message_width: u16,
    pub frame_width: u16,
    pub body_frame_width: u16,
    /// Footer row including the window frame, zero without buttons.
    pub button_width: u16,
    pub min_width: u16,
    pub max_width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    pub width: u16,
    /// Room left for a text control or the progress indicator.
    pub interior_width: u16,
}

/// Clamps the content width between the floor (minimum width or button row) and the
/// ceiling. The floor wins when the two disagree.
pub fn solve_width(input: SizingInput) -> Sizing {
    let frames = input.frame_width.saturating_add(input.body_frame_width);
    let candidate = input.explicit_width.unwrap_or_else(|| {
        input
            .icon_width
            .saturating_add(input.message_width)
            .saturating_add(frames)
    });
    let floor = input.min_width.max(input.button_width);
    let width = candidate.min(input.max_width).max(floor);
    Sizing {
        width,
        interior_width: width.saturating_sub(input.icon_width).saturating_sub(frames),
    }
}

impl<H: DialogHost> DialogController<H> {
    /// Replaces the message and re-solves the window width.
    pub fn update_text(&mut self, text: &str) -> &mut Self {
        let Some(request) = self.request.as_ref() else {
            warn!("update_text called with no active request");
            return self;
        };
        let Some(shell) = self.shell.as_mut() else {
            warn!("update_text called before the dialog shell exists");
            return self;
        };
        if !shell.is_visible() && request.width.is_none() {
            shell.set_width(self.config.max_width);
        }
        let text = if text.is_empty() { BLANK } else { text };
        shell.message_mut().set_text(text);

        let icon_width = if self.icon_cls.is_empty() {
            0
        } else {
            shell.icon().width() + shell.icon().horizontal_margins()
        };
        let input = SizingInput {
            explicit_width: request.width,
            icon_width,
            message_width: shell.message().width() + shell.message().horizontal_margins(),
            frame_width: shell.frame_width(),
            body_frame_width: shell.body_frame_width(),
            button_width: self.button_width,
            min_width: request.min_width.unwrap_or(self.config.min_width),
            max_width: self.config.max_width,
        };
        let sizing = solve_width(input);
        trace!(?input, width = sizing.width, interior = sizing.interior_width, "solved dialog width");

        if let Some(kind) = request.input.kind() {
            shell.input_mut(kind).set_width(sizing.interior_width);
        }
        if request.display.shows_progress() {
            shell.progress_mut().set_width(sizing.interior_width);
        }
        shell.set_width(sizing.width);
        shell.center();
        self
    }
}
