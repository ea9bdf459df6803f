use crate::buttons::{ButtonId, ButtonSet};
use crate::host::InputKind;
use ratatui::layout::Rect;
use std::fmt;
use std::time::Duration;

/// Completion handler: outcome, value of the active text control, and the request itself.
///
/// It runs inside the dismissing call while the controller is still mutably borrowed, so it
/// cannot open the next dialog directly. Queue the follow-up and show it once that call returns.
pub type Callback = Box<dyn FnOnce(ButtonId, &str, &RequestOptions)>;

pub fn callback<F>(f: F) -> Callback
where
    F: FnOnce(ButtonId, &str, &RequestOptions) + 'static,
{
    Box::new(f)
}

/// Which text control a request uses. Exactly one variant is active per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    None,
    SingleLine,
    /// `rows` falls back to the configured default text height.
    MultiLine { rows: Option<u16> },
    Password,
}

impl InputMode {
    /// Resolves loose prompt flags. Multi-line wins over password, and implies a prompt.
    pub fn from_flags(prompt: bool, multiline: bool, password: bool) -> Self {
        if multiline {
            InputMode::MultiLine { rows: None }
        } else if !prompt {
            InputMode::None
        } else if password {
            InputMode::Password
        } else {
            InputMode::SingleLine
        }
    }

    pub fn kind(self) -> Option<InputKind> {
        match self {
            InputMode::None => None,
            InputMode::SingleLine => Some(InputKind::SingleLine),
            InputMode::MultiLine { .. } => Some(InputKind::MultiLine),
            InputMode::Password => Some(InputKind::Password),
        }
    }

    pub fn is_prompt(self) -> bool {
        self != InputMode::None
    }
}

/// Indeterminate animation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitConfig {
    pub interval: Duration,
    /// Segments per sweep of the bar.
    pub increment: u32,
    /// Stop after this long and reset the bar.
    pub duration: Option<Duration>,
    pub text: Option<String>,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            increment: 10,
            duration: None,
            text: None,
        }
    }
}

impl WaitConfig {
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn increment(mut self, increment: u32) -> Self {
        self.increment = increment;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayMode {
    #[default]
    Interactive,
    Progress,
    Wait(WaitConfig),
}

impl DisplayMode {
    pub fn shows_progress(&self) -> bool {
        !matches!(self, DisplayMode::Interactive)
    }
}

/// One `show` request. Consumed by the controller and dropped when the dialog hides.
pub struct RequestOptions {
    pub title: Option<String>,
    pub msg: Option<String>,
    /// Semantic icon class, see [`crate::icon`].
    pub icon: Option<String>,
    /// Explicit icon class; takes precedence over `icon`.
    pub icon_cls: Option<String>,
    /// Extra class on the window for this request only.
    pub cls: Option<String>,
    /// `None` hides every button and collapses the footer.
    pub buttons: Option<ButtonSet>,
    pub input: InputMode,
    pub value: Option<String>,
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub display: DisplayMode,
    pub progress_text: Option<String>,
    pub closable: bool,
    pub modal: bool,
    pub proxy_drag: bool,
    /// Area the entrance animation grows from.
    pub anim_origin: Option<Rect>,
    callback: Option<Callback>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            title: None,
            msg: None,
            icon: None,
            icon_cls: None,
            cls: None,
            buttons: None,
            input: InputMode::None,
            value: None,
            width: None,
            min_width: None,
            display: DisplayMode::Interactive,
            progress_text: None,
            closable: true,
            modal: true,
            proxy_drag: false,
            anim_origin: None,
            callback: None,
        }
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("title", &self.title)
            .field("msg", &self.msg)
            .field("icon", &self.icon)
            .field("icon_cls", &self.icon_cls)
            .field("cls", &self.cls)
            .field("buttons", &self.buttons)
            .field("input", &self.input)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("display", &self.display)
            .field("closable", &self.closable)
            .field("modal", &self.modal)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_cls(mut self, class: impl Into<String>) -> Self {
        self.icon_cls = Some(class.into());
        self
    }

    pub fn cls(mut self, class: impl Into<String>) -> Self {
        self.cls = Some(class.into());
        self
    }

    pub fn buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = Some(buttons);
        self
    }

    pub fn input(mut self, input: InputMode) -> Self {
        self.input = input;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn progress_text(mut self, text: impl Into<String>) -> Self {
        self.progress_text = Some(text.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn proxy_drag(mut self, proxy_drag: bool) -> Self {
        self.proxy_drag = proxy_drag;
        self
    }

    pub fn anim_origin(mut self, origin: Rect) -> Self {
        self.anim_origin = Some(origin);
        self
    }

    pub fn callback<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ButtonId, &str, &RequestOptions) + 'static,
    {
        self.callback = Some(Box::new(f));
        self
    }

    pub(crate) fn set_callback(&mut self, callback: Callback) {
        self.callback = Some(callback);
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub(crate) fn take_callback(&mut self) -> Option<Callback> {
        self.callback.take()
    }

    /// The icon class actually applied: a non-empty explicit class, else the semantic icon.
    pub fn effective_icon(&self) -> Option<&str> {
        let non_empty = |class: &&str| !class.is_empty();
        self.icon_cls
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.icon.as_deref().filter(non_empty))
    }

    /// Close control and Escape are only honoured for interactive, closable requests.
    pub fn allows_close(&self) -> bool {
        self.closable && !self.display.shows_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayMode, InputMode, RequestOptions, WaitConfig};

    #[test]
    fn multiline_wins_over_password() {
        assert_eq!(
            InputMode::from_flags(true, true, true),
            InputMode::MultiLine { rows: None }
        );
        assert_eq!(InputMode::from_flags(true, false, true), InputMode::Password);
        assert_eq!(InputMode::from_flags(true, false, false), InputMode::SingleLine);
    }

    #[test]
    fn multiline_implies_prompt_and_password_alone_does_not() {
        assert_eq!(
            InputMode::from_flags(false, true, false),
            InputMode::MultiLine { rows: None }
        );
        assert_eq!(InputMode::from_flags(false, false, true), InputMode::None);
    }

    #[test]
    fn defaults_are_closable_and_modal() {
        let options = RequestOptions::new();
        assert!(options.closable);
        assert!(options.modal);
        assert!(options.allows_close());
        assert!(!options.has_callback());
    }

    #[test]
    fn progress_modes_disallow_close() {
        let progress = RequestOptions::new().display(DisplayMode::Progress);
        let wait = RequestOptions::new().display(DisplayMode::Wait(WaitConfig::default()));
        let locked = RequestOptions::new().closable(false);
        assert!(!progress.allows_close());
        assert!(!wait.allows_close());
        assert!(!locked.allows_close());
    }

    #[test]
    fn explicit_icon_class_overrides_semantic_icon() {
        let options = RequestOptions::new()
            .icon(crate::icon::INFO)
            .icon_cls("custom-icon");
        assert_eq!(options.effective_icon(), Some("custom-icon"));

        let cleared = RequestOptions::new().icon("");
        assert_eq!(cleared.effective_icon(), None);
    }

    #[test]
    fn empty_icon_class_falls_back_to_semantic_icon() {
        let options = RequestOptions::new().icon(crate::icon::INFO).icon_cls("");
        assert_eq!(options.effective_icon(), Some(crate::icon::INFO));

        let neither = RequestOptions::new().icon("").icon_cls("");
        assert_eq!(neither.effective_icon(), None);
    }
}
