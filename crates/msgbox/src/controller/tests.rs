use super::DialogController;
use crate::buttons::{ButtonId, ButtonSet};
use crate::config::MessageBoxConfig;
use crate::host::{
    DialogShell, Element, FocusTarget, InputKind, ProgressIndicator, ShellButton, TextInput,
};
use crate::icon::{self, BODY_ICON_CLASS, HIDDEN_CLASS};
use crate::options::{callback, Callback, DisplayMode, InputMode, RequestOptions, WaitConfig};
use crate::terminal::{TerminalHost, TerminalShell};
use crate::text::BLANK;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Log = Rc<RefCell<Vec<(ButtonId, String)>>>;

fn controller() -> DialogController<TerminalHost> {
    DialogController::new(TerminalHost::new(Rect::new(0, 0, 120, 40)))
}

fn recorder() -> (Log, Callback) {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    let cb = callback(move |id, value, _options| {
        sink.borrow_mut().push((id, value.to_string()));
    });
    (log, cb)
}

fn shell(controller: &DialogController<TerminalHost>) -> &TerminalShell {
    controller.shell().expect("shell is built by the first request")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(controller: &mut DialogController<TerminalHost>, text: &str) {
    for ch in text.chars() {
        controller.handle_key(key(KeyCode::Char(ch)));
    }
}

fn visible_inputs(shell: &TerminalShell) -> Vec<InputKind> {
    InputKind::ALL
        .into_iter()
        .filter(|kind| shell.input(*kind).is_visible())
        .collect()
}

#[test]
fn confirm_shows_question_and_reports_yes() {
    let mut controller = controller();
    let seen: Rc<RefCell<Option<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let log: Log = Rc::default();
    let outcomes = Rc::clone(&log);
    controller.confirm(
        "Delete?",
        "Remove this item?",
        Some(callback(move |id, value, options| {
            outcomes.borrow_mut().push((id, value.to_string()));
            *sink.borrow_mut() = options.title.clone();
        })),
    );

    let shell = shell(&controller);
    assert!(shell.is_visible());
    assert!(shell.icon().has_class(icon::QUESTION));
    assert!(!shell.icon().has_class(HIDDEN_CLASS));
    assert!(shell.body().has_class(BODY_ICON_CLASS));
    assert!(shell.button(ButtonId::Yes).is_visible());
    assert!(shell.button(ButtonId::No).is_visible());
    assert!(!shell.button(ButtonId::Ok).is_visible());
    assert!(!shell.button(ButtonId::Cancel).is_visible());
    assert!(visible_inputs(shell).is_empty());
    assert_eq!(shell.focus(), Some(FocusTarget::Button(ButtonId::Yes)));
    assert_eq!(shell.button(ButtonId::Yes).label(), "Yes");

    assert_eq!(controller.click(ButtonId::Yes), Some(ButtonId::Yes));
    assert_eq!(*log.borrow(), vec![(ButtonId::Yes, String::new())]);
    assert_eq!(seen.borrow().as_deref(), Some("Delete?"));
    assert!(!controller.is_visible());
}

#[test]
fn prompt_returns_edited_text() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.prompt("Name", "Enter your name:", Some(cb), false, Some("Alice"));

    let shell = shell(&controller);
    assert_eq!(visible_inputs(shell), vec![InputKind::SingleLine]);
    assert_eq!(shell.input(InputKind::SingleLine).value(), "Alice");
    assert_eq!(shell.focus(), Some(FocusTarget::Input(InputKind::SingleLine)));

    for _ in 0..5 {
        controller.handle_key(key(KeyCode::Backspace));
    }
    type_text(&mut controller, "Bob");
    assert_eq!(controller.click(ButtonId::Ok), Some(ButtonId::Ok));
    assert_eq!(*log.borrow(), vec![(ButtonId::Ok, "Bob".to_string())]);
}

#[test]
fn enter_in_single_line_resolves_ok_with_text() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.prompt("Name", "Enter your name:", Some(cb), false, None);
    type_text(&mut controller, "Carol");
    assert!(controller.handle_key(key(KeyCode::Enter)));
    assert_eq!(*log.borrow(), vec![(ButtonId::Ok, "Carol".to_string())]);
    assert!(!controller.is_visible());
}

#[test]
fn enter_in_password_falls_back_to_yes() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.show(
        RequestOptions::new()
            .msg("Unlock?")
            .input(InputMode::Password)
            .buttons(ButtonSet::YES_NO)
            .callback(cb),
    );
    type_text(&mut controller, "pw");
    controller.handle_key(key(KeyCode::Enter));
    assert_eq!(*log.borrow(), vec![(ButtonId::Yes, "pw".to_string())]);
}

#[test]
fn enter_without_ok_or_yes_does_nothing() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.show(
        RequestOptions::new()
            .input(InputMode::SingleLine)
            .buttons(ButtonSet::CANCEL)
            .callback(cb),
    );
    assert!(controller.handle_key(key(KeyCode::Enter)));
    assert!(log.borrow().is_empty());
    assert!(controller.is_visible());
}

#[test]
fn enter_in_multiline_adds_a_line() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.prompt("Notes", "Anything else?", Some(cb), true, Some("a"));
    controller.handle_key(key(KeyCode::Enter));
    type_text(&mut controller, "b");
    assert!(log.borrow().is_empty());
    controller.click(ButtonId::Ok);
    assert_eq!(*log.borrow(), vec![(ButtonId::Ok, "a\nb".to_string())]);
}

#[test]
fn close_resolves_no_or_cancel() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.show(RequestOptions::new().buttons(ButtonSet::YES_NO).callback(cb));
    assert_eq!(controller.close(), Some(ButtonId::No));

    let (cb_log, cb) = recorder();
    controller.show(RequestOptions::new().buttons(ButtonSet::OK_CANCEL).callback(cb));
    assert_eq!(controller.close(), Some(ButtonId::Cancel));

    controller.show(RequestOptions::new().buttons(ButtonSet::YES_NO_CANCEL));
    assert_eq!(controller.close(), Some(ButtonId::Cancel));

    assert_eq!(*log.borrow(), vec![(ButtonId::No, String::new())]);
    assert_eq!(*cb_log.borrow(), vec![(ButtonId::Cancel, String::new())]);
}

#[test]
fn escape_and_close_tool_route_through_close() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.alert("Done", "All files copied.", Some(cb));
    assert!(controller.handle_key(key(KeyCode::Esc)));
    assert_eq!(*log.borrow(), vec![(ButtonId::Cancel, String::new())]);

    let (log, cb) = recorder();
    controller.confirm("Quit?", "Unsaved changes will be lost.", Some(cb));
    let tool = shell(&controller)
        .layout()
        .close_tool
        .expect("close tool is shown for closable dialogs");
    let press = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: tool.x + 1,
        row: tool.y,
        modifiers: KeyModifiers::NONE,
    };
    assert!(controller.handle_mouse(press));
    assert_eq!(*log.borrow(), vec![(ButtonId::No, String::new())]);
}

#[test]
fn mouse_press_on_button_dismisses() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.alert("Done", "Copied.", Some(cb));
    let (id, rect) = shell(&controller).layout().buttons[0];
    assert_eq!(id, ButtonId::Ok);
    let press = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    };
    controller.handle_mouse(press);
    assert_eq!(*log.borrow(), vec![(ButtonId::Ok, String::new())]);
}

#[test]
fn key_release_is_ignored() {
    let mut controller = controller();
    controller.alert("Done", "Copied.", None);
    let release = KeyEvent {
        code: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(!controller.handle_key(release));
    assert!(controller.is_visible());
}

#[test]
fn no_buttons_collapses_footer_without_focus() {
    let mut controller = controller();
    controller.show(RequestOptions::new().msg("Just so you know."));
    let shell = shell(&controller);
    assert!(!shell.footer_visible());
    assert!(ButtonId::ALL
        .iter()
        .all(|id| !shell.button(*id).is_visible()));
    assert_eq!(shell.focus(), None);

    controller.show(RequestOptions::new().buttons(ButtonSet::new()));
    let shell = self::shell(&controller);
    assert!(!shell.footer_visible());
    assert_eq!(shell.focus(), None);

    controller.alert("Back", "Buttons again.", None);
    assert!(self::shell(&controller).footer_visible());
}

#[test]
fn one_text_control_and_no_value_leak() {
    let mut controller = controller();
    controller.password_prompt("Login", "Password:", None, false, Some("secret"));
    assert_eq!(visible_inputs(shell(&controller)), vec![InputKind::Password]);
    controller.hide();

    controller.prompt("Notes", "Details:", None, true, None);
    let shell = self::shell(&controller);
    assert_eq!(visible_inputs(shell), vec![InputKind::MultiLine]);
    assert_eq!(shell.input(InputKind::MultiLine).value(), "");
    assert_eq!(shell.input(InputKind::MultiLine).height(), 4);

    controller.prompt("Name", "Name:", None, false, None);
    let shell = self::shell(&controller);
    assert_eq!(visible_inputs(shell), vec![InputKind::SingleLine]);
    assert_eq!(shell.input(InputKind::SingleLine).value(), "");

    controller.alert("Plain", "No input.", None);
    assert!(visible_inputs(self::shell(&controller)).is_empty());
}

#[test]
fn multiline_password_prompt_uses_multiline() {
    let mut controller = controller();
    controller.password_prompt("Key", "Paste key:", None, true, None);
    assert_eq!(visible_inputs(shell(&controller)), vec![InputKind::MultiLine]);
}

#[test]
fn multiline_rows_follow_request() {
    let mut controller = controller();
    controller.show(RequestOptions::new().input(InputMode::MultiLine { rows: Some(2) }));
    assert_eq!(shell(&controller).input(InputKind::MultiLine).height(), 2);
}

#[test]
fn value_without_input_reports_empty_text() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.show(
        RequestOptions::new()
            .value("ignored")
            .buttons(ButtonSet::OK)
            .callback(cb),
    );
    controller.click(ButtonId::Ok);
    assert_eq!(*log.borrow(), vec![(ButtonId::Ok, String::new())]);
}

#[test]
fn set_icon_is_idempotent_and_clears_fully() {
    let mut controller = controller();
    controller.alert("Heads up", "Disk almost full.", None);
    controller.set_icon(Some(icon::WARNING));
    let once = shell(&controller).icon().classes().clone();
    controller.set_icon(Some(icon::WARNING));
    assert_eq!(shell(&controller).icon().classes(), &once);

    controller.set_icon(Some(icon::ERROR));
    let shell_ref = shell(&controller);
    assert!(shell_ref.icon().has_class(icon::ERROR));
    assert!(!shell_ref.icon().has_class(icon::WARNING));

    controller.set_icon(None);
    let shell = shell(&controller);
    assert!(shell.icon().has_class(HIDDEN_CLASS));
    assert!(!shell.icon().has_class(icon::ERROR));
    assert!(!shell.body().has_class(BODY_ICON_CLASS));
    assert_eq!(shell.icon().width(), 0);
}

#[test]
fn icon_does_not_carry_into_next_request() {
    let mut controller = controller();
    controller.confirm("Sure?", "Really?", None);
    controller.alert("Done", "Finished.", None);
    let shell = shell(&controller);
    assert!(!shell.icon().has_class(icon::QUESTION));
    assert!(shell.icon().has_class(HIDDEN_CLASS));
}

#[test]
fn unknown_icon_shows_no_glyph() {
    let mut controller = controller();
    controller.show(RequestOptions::new().msg("Odd").icon("mystery-icon"));
    let shell = shell(&controller);
    assert!(shell.icon().has_class("mystery-icon"));
    assert_eq!(shell.icon().glyph(), None);
}

#[test]
fn explicit_icon_class_wins() {
    let mut controller = controller();
    controller.show(
        RequestOptions::new()
            .icon(icon::INFO)
            .icon_cls(icon::ERROR),
    );
    let shell = shell(&controller);
    assert!(shell.icon().has_class(icon::ERROR));
    assert!(!shell.icon().has_class(icon::INFO));
}

#[test]
fn new_request_preempts_without_callback() {
    let mut controller = controller();
    let (first, cb) = recorder();
    controller.alert("First", "One", Some(cb));
    let (second, cb) = recorder();
    controller.confirm("Second", "Two?", Some(cb));

    assert!(first.borrow().is_empty());
    let shell = shell(&controller);
    assert!(shell.is_visible());
    assert_eq!(shell.title(), "Second");
    assert!(shell.button(ButtonId::Yes).is_visible());

    controller.click(ButtonId::No);
    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![(ButtonId::No, String::new())]);
}

#[test]
fn programmatic_hide_skips_callback() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.alert("Bye", "Closing.", Some(cb));
    controller.hide();
    assert!(!controller.is_visible());
    assert!(log.borrow().is_empty());
    assert!(controller.request().is_none());
    assert_eq!(controller.click(ButtonId::Ok), None);
}

#[test]
fn hidden_button_cannot_be_clicked() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.alert("Info", "Only OK here.", Some(cb));
    assert_eq!(controller.click(ButtonId::Cancel), None);
    assert!(controller.is_visible());
    assert!(log.borrow().is_empty());
}

#[test]
fn width_fits_a_wide_single_button() {
    let mut controller = controller();
    controller.show(
        RequestOptions::new()
            .msg("Hi")
            .min_width(1)
            .buttons(ButtonSet::new().with_label(ButtonId::Ok, "Acknowledge and continue")),
    );
    let shell = shell(&controller);
    let button = shell.button(ButtonId::Ok).width();
    assert!(shell.width() >= button + shell.frame_width());
}

#[test]
fn minimum_width_is_honoured() {
    let mut controller = controller();
    controller.show(
        RequestOptions::new()
            .msg("Short")
            .min_width(250)
            .buttons(ButtonSet::OK),
    );
    assert!(shell(&controller).width() >= 250);
}

#[test]
fn long_message_is_capped_at_max_width() {
    let mut controller = controller();
    controller.alert("Log", &"word ".repeat(60), None);
    assert_eq!(shell(&controller).width(), controller.config().max_width);
}

#[test]
fn blank_title_falls_back_to_placeholder() {
    let mut controller = controller();
    controller.wait("Loading", None, None);
    assert_eq!(shell(&controller).title(), BLANK);
}

#[test]
fn prompt_control_fills_interior() {
    let mut controller = controller();
    controller.prompt("Name", "Enter your name:", None, false, None);
    let shell = shell(&controller);
    let field = shell.input(InputKind::SingleLine);
    assert_eq!(field.width(), shell.width() - 4);
    assert!(shell.width() >= controller.config().min_prompt_width);
}

#[test]
fn hide_drops_class_and_resets_progress() {
    let mut controller = controller();
    controller.show(
        RequestOptions::new()
            .msg("Copying")
            .cls("copy-dialog")
            .display(DisplayMode::Progress),
    );
    controller.update_progress(0.5, Some("half"), None);
    let shell_ref = shell(&controller);
    assert!(shell_ref.classes().contains("copy-dialog"));
    assert_eq!(shell_ref.progress().value(), 0.5);

    controller.hide();
    let shell = shell(&controller);
    assert!(!shell.classes().contains("copy-dialog"));
    assert_eq!(shell.progress().value(), 0.0);
    assert_eq!(shell.progress().text(), None);
}

#[test]
fn progress_dialog_cannot_be_closed() {
    let mut controller = controller();
    controller.progress("Saving", "Writing files", Some("0%"));
    let shell_ref = shell(&controller);
    assert!(!shell_ref.close_tool_visible());
    assert!(!shell_ref.keymap_enabled());
    assert!(!shell_ref.footer_visible());
    assert!(shell_ref.progress().is_visible());
    assert_eq!(shell_ref.progress().text(), Some("0%"));
    assert!(shell_ref.width() >= controller.config().min_progress_width);
    assert_eq!(
        shell_ref.progress().width(),
        shell_ref.width() - 4
    );

    assert_eq!(controller.close(), None);
    assert!(controller.handle_key(key(KeyCode::Esc)));
    assert!(controller.is_visible());

    controller.update_progress(2.0, Some("100%"), Some("Almost done"));
    let shell = shell(&controller);
    assert_eq!(shell.progress().value(), 1.0);
    assert_eq!(shell.progress().text(), Some("100%"));
    assert_eq!(shell.message().text(), "Almost done");
}

#[test]
fn not_closable_blocks_close() {
    let mut controller = controller();
    let (log, cb) = recorder();
    controller.show(
        RequestOptions::new()
            .buttons(ButtonSet::OK)
            .closable(false)
            .callback(cb),
    );
    assert_eq!(controller.close(), None);
    assert!(log.borrow().is_empty());
    assert_eq!(controller.click(ButtonId::Ok), Some(ButtonId::Ok));
}

#[test]
fn wait_animates_until_hidden() {
    let mut controller = controller();
    controller.wait(
        "Working",
        Some("Please wait"),
        Some(
            WaitConfig::default()
                .interval(Duration::from_millis(100))
                .increment(4)
                .text("busy"),
        ),
    );
    let shell_ref = shell(&controller);
    assert!(shell_ref.is_modal());
    assert!(!shell_ref.close_tool_visible());
    assert_eq!(shell_ref.progress().text(), Some("busy"));
    assert!(controller.is_waiting());

    let start = Instant::now();
    controller.tick(start);
    controller.tick(start + Duration::from_millis(100));
    assert_eq!(shell(&controller).progress().value(), 0.25);
    controller.tick(start + Duration::from_millis(200));
    assert_eq!(shell(&controller).progress().value(), 0.5);

    controller.hide();
    assert!(!controller.is_waiting());
    controller.tick(start + Duration::from_millis(300));
    assert_eq!(shell(&controller).progress().value(), 0.0);
}

#[test]
fn wait_stops_after_duration() {
    let mut controller = controller();
    controller.wait(
        "Working",
        None,
        Some(
            WaitConfig::default()
                .interval(Duration::from_millis(10))
                .duration(Duration::from_millis(50)),
        ),
    );
    let start = Instant::now();
    controller.tick(start);
    controller.tick(start + Duration::from_millis(20));
    assert!(shell(&controller).progress().value() > 0.0);
    controller.tick(start + Duration::from_millis(60));
    assert!(!controller.is_waiting());
    assert_eq!(shell(&controller).progress().value(), 0.0);
    assert!(controller.is_visible());
}

#[test]
fn updates_before_first_show_are_ignored() {
    let mut controller = controller();
    controller.update_progress(0.5, Some("half"), Some("msg"));
    controller.update_text("hello");
    controller.set_icon(Some(icon::INFO));
    assert!(controller.shell().is_none());
    assert!(!controller.is_visible());
}

#[test]
fn shell_is_built_once() {
    let mut controller = controller();
    controller.alert("One", "1", None);
    let first: *const TerminalShell = shell(&controller);
    controller.alert("Two", "2", None);
    let second: *const TerminalShell = shell(&controller);
    assert_eq!(first, second);
}

#[test]
fn configured_labels_are_used() {
    let mut config = MessageBoxConfig::default();
    config.button_text.ok = "Fine".to_string();
    let mut controller =
        DialogController::with_config(TerminalHost::new(Rect::new(0, 0, 120, 40)), config);
    controller.show(
        RequestOptions::new().buttons(ButtonSet::OK_CANCEL.with_label(ButtonId::Cancel, "Nope")),
    );
    let shell = shell(&controller);
    assert_eq!(shell.button(ButtonId::Ok).label(), "Fine");
    assert_eq!(shell.button(ButtonId::Cancel).label(), "Nope");
}

#[test]
fn modal_flag_and_proxy_drag_apply() {
    let mut controller = controller();
    controller.show(RequestOptions::new().modal(false).proxy_drag(true));
    let shell = shell(&controller);
    assert!(!shell.is_modal());
    assert!(shell.proxy_drag());
}

#[test]
fn animation_origin_starts_entrance() {
    let mut controller = controller();
    controller.show(
        RequestOptions::new()
            .buttons(ButtonSet::OK)
            .anim_origin(Rect::new(2, 2, 4, 1)),
    );
    assert!(shell(&controller).is_animating());
    let start = Instant::now();
    controller.tick(start);
    controller.tick(start + Duration::from_millis(500));
    assert!(!shell(&controller).is_animating());
}

fn assert_inside(inner: Rect, outer: Rect) {
    assert!(
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom(),
        "{inner:?} escapes {outer:?}"
    );
}

#[test]
fn small_terminal_keeps_dialog_on_screen() {
    let viewport = Rect::new(0, 0, 30, 8);
    let config = MessageBoxConfig {
        min_width: 250,
        max_width: 300,
        ..MessageBoxConfig::default()
    };
    let mut controller = DialogController::with_config(TerminalHost::new(viewport), config);
    controller.show(
        RequestOptions::new()
            .title("Report")
            .msg(&"a rather long status line ".repeat(20))
            .buttons(ButtonSet::YES_NO_CANCEL)
            .icon(icon::WARNING),
    );

    let shell = shell(&controller);
    let layout = shell.layout();
    assert_inside(layout.outer, viewport);
    assert!(!layout.buttons.is_empty());
    for (_, rect) in &layout.buttons {
        assert_inside(*rect, layout.outer);
    }
    if let Some(rect) = layout.icon {
        assert_inside(rect, layout.outer);
    }

    let mut buf = ratatui::buffer::Buffer::empty(viewport);
    ratatui::widgets::Widget::render(shell, viewport, &mut buf);
}

#[test]
fn short_terminal_prompt_keeps_input_and_footer() {
    let viewport = Rect::new(0, 0, 40, 6);
    let mut controller = DialogController::new(TerminalHost::new(viewport));
    controller.prompt("Name", "one\ntwo\nthree\nfour\nfive", None, false, None);

    let shell = shell(&controller);
    let layout = shell.layout();
    assert_inside(layout.outer, viewport);
    let (_, input) = layout.input.expect("prompt input fits");
    assert_inside(input, layout.outer);
    for (_, rect) in &layout.buttons {
        assert_inside(*rect, layout.outer);
        assert!(rect.y > input.y);
    }
    assert_eq!(layout.buttons.len(), 2);

    let mut buf = ratatui::buffer::Buffer::empty(viewport);
    ratatui::widgets::Widget::render(shell, viewport, &mut buf);
}

#[test]
fn callback_queues_follow_up_dialog() {
    let mut controller = controller();
    let queue: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&queue);
    controller.confirm(
        "Delete?",
        "Remove this item?",
        Some(callback(move |id, _value, _options| {
            if id == ButtonId::Yes {
                sink.borrow_mut().push("Item removed.".to_string());
            }
        })),
    );

    assert_eq!(controller.click(ButtonId::Yes), Some(ButtonId::Yes));
    assert!(!controller.is_visible());

    let (log, cb) = recorder();
    let follow_up = queue.borrow_mut().pop().expect("callback queued a follow-up");
    controller.alert("Done", &follow_up, Some(cb));
    assert!(controller.is_visible());
    assert_eq!(shell(&controller).message().text(), "Item removed.");
    assert!(shell(&controller).button(ButtonId::Ok).is_visible());

    controller.click(ButtonId::Ok);
    assert_eq!(log.borrow().as_slice(), &[(ButtonId::Ok, String::new())]);
}
