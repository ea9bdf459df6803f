use super::DialogController;
use crate::buttons::{close_outcome, enter_outcome, ButtonId};
use crate::host::{DialogHost, DialogShell, ProgressIndicator, ShellButton, ShellEvent, TextInput};
use crate::options::RequestOptions;
use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};
use tracing::debug;

impl<H: DialogHost> DialogController<H> {
    /// Presses a button. Hidden buttons and a hidden dialog do nothing.
    pub fn click(&mut self, id: ButtonId) -> Option<ButtonId> {
        let shell = self.shell.as_ref()?;
        if !shell.is_visible() || !shell.button(id).is_visible() {
            return None;
        }
        self.dismiss(id)
    }

    /// Title-bar close control. Ignored while closing is not allowed.
    pub fn close(&mut self) -> Option<ButtonId> {
        let request = self.request.as_ref()?;
        if !self.is_visible() || !request.allows_close() {
            return None;
        }
        let outcome = close_outcome(request.buttons.as_ref());
        self.dismiss(outcome)
    }

    /// Enter in a single-line or password control.
    pub fn submit(&mut self) -> Option<ButtonId> {
        let request = self.request.as_ref()?;
        if !self.is_visible() {
            return None;
        }
        let outcome = enter_outcome(request.buttons.as_ref())?;
        self.dismiss(outcome)
    }

    /// Routes a key press to the dialog. Returns whether the dialog consumed it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(shell) = self.shell.as_mut() else {
            return false;
        };
        let event = shell.handle_key(key);
        self.apply(event)
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        let Some(shell) = self.shell.as_mut() else {
            return false;
        };
        let event = shell.handle_mouse(event);
        self.apply(event)
    }

    fn apply(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::Ignored => false,
            ShellEvent::Consumed => true,
            ShellEvent::Activate(id) => {
                self.click(id);
                true
            }
            ShellEvent::Submit => {
                self.submit();
                true
            }
            ShellEvent::Close => {
                self.close();
                true
            }
        }
    }

    /// Hides the dialog and hands the outcome to the request's callback.
    fn dismiss(&mut self, outcome: ButtonId) -> Option<ButtonId> {
        let value = self.active_value();
        let mut request = self.finish()?;
        debug!(outcome = %outcome, "dialog dismissed");
        if let Some(callback) = request.take_callback() {
            callback(outcome, &value, &request);
        }
        Some(outcome)
    }

    fn active_value(&self) -> String {
        let kind = self.request.as_ref().and_then(|request| request.input.kind());
        match (self.shell.as_ref(), kind) {
            (Some(shell), Some(kind)) => shell.input(kind).value(),
            _ => String::new(),
        }
    }

    /// Every hide funnels through here: drops the request, its class and the wait task,
    /// and zeroes the indicator.
    pub(super) fn finish(&mut self) -> Option<RequestOptions> {
        self.wait = None;
        let request = self.request.take();
        if let Some(shell) = self.shell.as_mut() {
            shell.hide();
            if let Some(cls) = request.as_ref().and_then(|request| request.cls.as_deref()) {
                if !cls.is_empty() {
                    shell.remove_class(cls);
                }
            }
            shell.progress_mut().reset();
        }
        request
    }
}
