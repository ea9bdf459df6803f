//! The dialog controller: one lazily built shell reconfigured per request.
//!
//! Every entry point funnels into [`DialogController::show`], which hides whatever was
//! showing (without calling back), picks the text control, buttons, icon and modality,
//! shows the window and then sizes it. Dismissal lives in `dispatch`, width solving in
//! `sizing`, the indeterminate animation in `wait`.

mod dispatch;
mod sizing;
mod wait;

#[cfg(test)]
mod tests;

pub use sizing::{solve_width, Sizing, SizingInput};

use crate::buttons::{ButtonId, ButtonSet};
use crate::config::MessageBoxConfig;
use crate::host::{
    DialogHost, DialogShell, Element, FocusTarget, InputKind, ProgressIndicator, ShellBlueprint,
    ShellButton, TextInput,
};
use crate::icon::{BODY_ICON_CLASS, HIDDEN_CLASS, QUESTION};
use crate::options::{Callback, DisplayMode, InputMode, RequestOptions, WaitConfig};
use crate::text::BLANK;
use std::time::Instant;
use tracing::{debug, info, warn};
use wait::{WaitStep, WaitTask};

pub struct DialogController<H: DialogHost> {
    host: H,
    config: MessageBoxConfig,
    shell: Option<H::Shell>,
    request: Option<RequestOptions>,
    /// Icon class currently applied to the icon slot, empty when none.
    icon_cls: String,
    /// Footer width from the last button update, frame included.
    button_width: u16,
    wait: Option<WaitTask>,
}

impl<H: DialogHost> DialogController<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, MessageBoxConfig::default())
    }

    pub fn with_config(host: H, config: MessageBoxConfig) -> Self {
        Self {
            host,
            config,
            shell: None,
            request: None,
            icon_cls: String::new(),
            button_width: 0,
            wait: None,
        }
    }

    pub fn config(&self) -> &MessageBoxConfig {
        &self.config
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The shell, if any request has built it yet.
    pub fn shell(&self) -> Option<&H::Shell> {
        self.shell.as_ref()
    }

    pub fn shell_mut(&mut self) -> Option<&mut H::Shell> {
        self.shell.as_mut()
    }

    /// Returns the shell, building it on first use.
    pub fn get_shell(&mut self, title: &str) -> &mut H::Shell {
        let Self {
            host,
            config,
            shell,
            ..
        } = self;
        shell.get_or_insert_with(|| {
            let blueprint = ShellBlueprint {
                title: title.to_string(),
                buttons: ButtonId::ALL
                    .iter()
                    .map(|id| (*id, config.button_text.get(*id).to_string()))
                    .collect(),
                width: config.max_width,
            };
            info!(width = blueprint.width, "building dialog shell");
            host.create_shell(&blueprint)
        })
    }

    pub fn is_visible(&self) -> bool {
        self.shell.as_ref().is_some_and(|shell| shell.is_visible())
    }

    /// The request currently on screen.
    pub fn request(&self) -> Option<&RequestOptions> {
        self.request.as_ref()
    }

    /// Hides the dialog without calling back.
    pub fn hide(&mut self) -> &mut Self {
        if self.is_visible() {
            debug!("dialog hidden");
            self.finish();
        }
        self
    }

    pub fn show(&mut self, options: RequestOptions) -> &mut Self {
        if self.is_visible() {
            debug!("replacing visible dialog");
            self.hide();
        }

        let title = options
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(BLANK)
            .to_string();
        let allow_close = options.allows_close();
        let active = options.input.kind();
        let default_rows = self.config.default_text_height;

        let shell = self.get_shell(&title);
        shell.set_title(&title);
        shell.set_close_tool_visible(allow_close);

        for kind in InputKind::ALL {
            let input = shell.input_mut(kind);
            if Some(kind) == active {
                input.show();
            } else {
                input.hide();
            }
        }
        if let InputMode::MultiLine { rows } = options.input {
            shell
                .input_mut(InputKind::MultiLine)
                .set_height(rows.unwrap_or(default_rows));
        }
        if let Some(kind) = active {
            shell
                .input_mut(kind)
                .set_value(options.value.as_deref().unwrap_or_default());
        }

        let focus = match active {
            Some(kind) => Some(FocusTarget::Input(kind)),
            None => options.buttons.as_ref().and_then(|set| {
                [ButtonId::Ok, ButtonId::Yes]
                    .into_iter()
                    .find(|id| set.contains(*id))
                    .map(FocusTarget::Button)
            }),
        };
        shell.set_focus(focus);

        if let Some(cls) = options.cls.as_deref().filter(|cls| !cls.is_empty()) {
            shell.add_class(cls);
        }
        shell.set_proxy_drag(options.proxy_drag);
        shell.set_modal(options.modal);

        let origin = options.anim_origin;
        let icon = options.effective_icon().map(str::to_string);
        debug!(title = %title, input = ?options.input, display = ?options.display, "showing dialog");
        self.request = Some(options);
        self.set_icon(icon.as_deref());

        if let Some(shell) = self.shell.as_mut() {
            if !shell.is_visible() {
                shell.show(origin);
            }
        }
        self.paint();
        self
    }

    /// Configuration applied once the window is on screen.
    fn paint(&mut self) {
        let Some(request) = self.request.as_ref() else {
            return;
        };
        let allow_close = request.allows_close();
        let shows_progress = request.display.shows_progress();
        let progress_text = request.progress_text.clone();
        let msg = request.msg.clone().unwrap_or_default();
        let wait = match &request.display {
            DisplayMode::Wait(config) => Some(config.clone()),
            _ => None,
        };
        let buttons = request.buttons.clone();

        if let Some(shell) = self.shell.as_mut() {
            shell.set_keymap_enabled(allow_close);
        }
        self.update_buttons(buttons.as_ref());
        if let Some(shell) = self.shell.as_mut() {
            let progress = shell.progress_mut();
            progress.set_visible(shows_progress);
            progress.reset();
        }
        self.update_progress(0.0, progress_text.as_deref(), None);
        self.update_text(&msg);

        if let Some(config) = wait {
            let task = WaitTask::new(config);
            if let (Some(text), Some(shell)) = (task.text(), self.shell.as_mut()) {
                shell.progress_mut().update(0.0, Some(text));
            }
            self.wait = Some(task);
        }
    }

    /// Shows the buttons in `buttons` with their resolved labels and hides the rest.
    /// No set, or an empty one, collapses the footer.
    fn update_buttons(&mut self, buttons: Option<&ButtonSet>) {
        let spacing = self.config.button_spacing;
        let text = &self.config.button_text;
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        let Some(set) = buttons.filter(|set| !set.is_empty()) else {
            for id in ButtonId::ALL {
                shell.button_mut(id).hide();
            }
            shell.set_footer_visible(false);
            self.button_width = 0;
            return;
        };

        shell.set_footer_visible(true);
        let mut width: u16 = 0;
        for id in ButtonId::ALL {
            let button = shell.button_mut(id);
            match set.resolve_label(id, text) {
                Some(label) => {
                    button.set_label(label);
                    button.show();
                    width = width.saturating_add(button.width() + spacing);
                }
                None => button.hide(),
            }
        }
        self.button_width = width.saturating_add(shell.frame_width());
    }

    /// Swaps the icon class. `None` or an empty class removes the icon entirely.
    pub fn set_icon(&mut self, icon: Option<&str>) -> &mut Self {
        let Some(shell) = self.shell.as_mut() else {
            warn!("set_icon called before the dialog shell exists");
            return self;
        };
        match icon.filter(|icon| !icon.is_empty()) {
            Some(icon) => {
                shell.icon_mut().remove_class(HIDDEN_CLASS);
                shell.icon_mut().replace_class(&self.icon_cls, icon);
                shell.body_mut().add_class(BODY_ICON_CLASS);
                self.icon_cls = icon.to_string();
            }
            None => {
                shell.icon_mut().replace_class(&self.icon_cls, HIDDEN_CLASS);
                shell.body_mut().remove_class(BODY_ICON_CLASS);
                self.icon_cls.clear();
            }
        }
        self
    }

    /// Moves the indicator of a progress or wait dialog. `value` is clamped to `[0, 1]`.
    pub fn update_progress(&mut self, value: f64, text: Option<&str>, msg: Option<&str>) -> &mut Self {
        let Some(shell) = self.shell.as_mut() else {
            warn!("update_progress called before the dialog shell exists");
            return self;
        };
        shell.progress_mut().update(value.clamp(0.0, 1.0), text);
        if let Some(msg) = msg.filter(|msg| !msg.is_empty()) {
            self.update_text(msg);
        }
        self
    }

    /// Advances the wait animation and the window's own animations.
    pub fn tick(&mut self, now: Instant) {
        if let Some(task) = self.wait.as_mut() {
            match task.poll(now) {
                WaitStep::Idle => {}
                WaitStep::Advance(value) => {
                    if let Some(shell) = self.shell.as_mut() {
                        shell.progress_mut().update(value, None);
                    }
                }
                WaitStep::Finished => {
                    debug!("wait animation finished");
                    self.wait = None;
                    if let Some(shell) = self.shell.as_mut() {
                        shell.progress_mut().reset();
                    }
                }
            }
        }
        if let Some(shell) = self.shell.as_mut() {
            shell.tick(now);
        }
    }

    /// Whether a wait animation is running.
    pub fn is_waiting(&self) -> bool {
        self.wait.is_some()
    }

    /// A single OK button.
    pub fn alert(&mut self, title: &str, msg: &str, callback: Option<Callback>) -> &mut Self {
        let options = RequestOptions::new().title(title).msg(msg).buttons(ButtonSet::OK);
        self.show(with_callback(options, callback))
    }

    /// Yes and No with the question icon.
    pub fn confirm(&mut self, title: &str, msg: &str, callback: Option<Callback>) -> &mut Self {
        let options = RequestOptions::new()
            .title(title)
            .msg(msg)
            .buttons(ButtonSet::YES_NO)
            .icon(QUESTION);
        self.show(with_callback(options, callback))
    }

    pub fn prompt(
        &mut self,
        title: &str,
        msg: &str,
        callback: Option<Callback>,
        multiline: bool,
        value: Option<&str>,
    ) -> &mut Self {
        let options = self.prompt_options(title, msg, multiline, false, value);
        self.show(with_callback(options, callback))
    }

    /// Masked single-line prompt. A multi-line request takes precedence over masking.
    pub fn password_prompt(
        &mut self,
        title: &str,
        msg: &str,
        callback: Option<Callback>,
        multiline: bool,
        value: Option<&str>,
    ) -> &mut Self {
        let options = self.prompt_options(title, msg, multiline, true, value);
        self.show(with_callback(options, callback))
    }

    fn prompt_options(
        &self,
        title: &str,
        msg: &str,
        multiline: bool,
        password: bool,
        value: Option<&str>,
    ) -> RequestOptions {
        let mut options = RequestOptions::new()
            .title(title)
            .msg(msg)
            .buttons(ButtonSet::OK_CANCEL)
            .min_width(self.config.min_prompt_width)
            .input(InputMode::from_flags(true, multiline, password));
        options.value = value.map(str::to_string);
        options
    }

    /// Determinate indicator, no buttons, cannot be closed by the user.
    pub fn progress(&mut self, title: &str, msg: &str, progress_text: Option<&str>) -> &mut Self {
        let mut options = RequestOptions::new()
            .title(title)
            .msg(msg)
            .display(DisplayMode::Progress)
            .closable(false)
            .min_width(self.config.min_progress_width);
        options.progress_text = progress_text.map(str::to_string);
        self.show(options)
    }

    /// Indeterminate indicator, modal, no buttons, cannot be closed by the user.
    pub fn wait(&mut self, msg: &str, title: Option<&str>, config: Option<WaitConfig>) -> &mut Self {
        let mut options = RequestOptions::new()
            .msg(msg)
            .display(DisplayMode::Wait(config.unwrap_or_default()))
            .closable(false)
            .modal(true)
            .min_width(self.config.min_progress_width);
        options.title = title.map(str::to_string);
        self.show(options)
    }
}

fn with_callback(mut options: RequestOptions, callback: Option<Callback>) -> RequestOptions {
    if let Some(callback) = callback {
        options.set_callback(callback);
    }
    options
}
