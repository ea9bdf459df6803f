mod tracing_setup;

use crossterm::cursor::Show;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use msgbox::icon;
use msgbox::terminal::{cursor_position, TerminalHost, Theme};
use msgbox::{
    callback, ButtonId, ButtonSet, Callback, ConfigError, InputMode, MessageBox,
    MessageBoxConfig, RequestOptions, WaitConfig,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;
use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const CONFIG_ENV: &str = "MSGBOX_CONFIG";
const TICK: Duration = Duration::from_millis(50);
const PROGRESS_STEP: Duration = Duration::from_millis(250);
const PROGRESS_STEPS: u32 = 12;
const WAIT_FOR: Duration = Duration::from_secs(4);
const MAX_RESULTS: usize = 200;
const WARNING_FRAME: &str = "demo-warning-frame";

const HELP: [&str; 9] = [
    "a  alert",
    "c  confirm",
    "p  prompt",
    "m  multi-line prompt",
    "s  password prompt",
    "g  progress",
    "w  wait",
    "x  custom request (icon, class, custom labels)",
    "q  quit",
];

fn parse_config_path_from_args(args: impl IntoIterator<Item = impl AsRef<str>>) -> Option<PathBuf> {
    let mut args = args
        .into_iter()
        .map(|arg| arg.as_ref().to_string())
        .peekable();
    let mut path = None;
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--config=") {
            path = Some(PathBuf::from(value));
            continue;
        }
        if arg == "--config" || arg == "-c" {
            if let Some(next) = args.peek() {
                if !next.starts_with('-') {
                    path = Some(PathBuf::from(next));
                    let _ = args.next();
                }
            }
        }
    }
    path
}

fn load_config() -> Result<MessageBoxConfig, ConfigError> {
    let path = parse_config_path_from_args(env::args().skip(1))
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let mut config = match path {
        Some(path) => MessageBoxConfig::load(&path)?,
        None => MessageBoxConfig::default(),
    };
    config.apply_env(|key| env::var(key).ok())?;
    Ok(config)
}

/// Outcome lines shared with dialog callbacks.
#[derive(Clone, Default)]
struct Results(Rc<RefCell<Vec<String>>>);

impl Results {
    fn push(&self, line: impl Into<String>) {
        let mut lines = self.0.borrow_mut();
        lines.push(line.into());
        if lines.len() > MAX_RESULTS {
            let overflow = lines.len() - MAX_RESULTS;
            lines.drain(..overflow);
        }
    }

    fn recorder(&self, what: &'static str) -> Callback {
        let results = self.clone();
        callback(move |id, value, _options| {
            if value.is_empty() {
                results.push(format!("{what}: {id}"));
            } else {
                results.push(format!("{what}: {id} {value:?}"));
            }
        })
    }

    fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Background jobs the demo pretends to run behind progress and wait dialogs.
enum Job {
    Copy { step: u32, next_at: Instant },
    Connect { until: Instant },
}

struct Demo {
    dialogs: MessageBox,
    results: Results,
    job: Option<Job>,
    should_exit: bool,
}

impl Demo {
    fn new(config: MessageBoxConfig, viewport: Rect) -> Self {
        let theme = Theme::named(config.theme)
            .with_class_style(WARNING_FRAME, Style::default().fg(Color::Yellow));
        let host = TerminalHost::new(viewport).with_theme(theme);
        Self {
            dialogs: MessageBox::with_config(host, config),
            results: Results::default(),
            job: None,
            should_exit: false,
        }
    }

    fn open(&mut self, code: KeyCode, now: Instant) {
        let results = self.results.clone();
        match code {
            KeyCode::Char('a') => {
                self.dialogs.alert(
                    "Status",
                    "Changes have been saved successfully.",
                    Some(results.recorder("alert")),
                );
            }
            KeyCode::Char('c') => {
                self.dialogs.confirm(
                    "Confirm",
                    "Are you sure you want to do that?",
                    Some(results.recorder("confirm")),
                );
            }
            KeyCode::Char('p') => {
                self.dialogs.prompt(
                    "Name",
                    "Please enter your name:",
                    Some(results.recorder("prompt")),
                    false,
                    Some("Alice"),
                );
            }
            KeyCode::Char('m') => {
                self.dialogs.prompt(
                    "Address",
                    "Please enter your address:",
                    Some(results.recorder("address")),
                    true,
                    None,
                );
            }
            KeyCode::Char('s') => {
                self.dialogs.password_prompt(
                    "Login",
                    "Password:",
                    Some(results.recorder("password")),
                    false,
                    None,
                );
            }
            KeyCode::Char('g') => {
                self.dialogs
                    .progress("Please wait", "Copying files...", Some("0%"));
                self.job = Some(Job::Copy {
                    step: 0,
                    next_at: now + PROGRESS_STEP,
                });
            }
            KeyCode::Char('w') => {
                self.dialogs.wait(
                    "Contacting the server, please wait...",
                    Some("Connecting"),
                    Some(
                        WaitConfig::default()
                            .interval(Duration::from_millis(150))
                            .text("connecting"),
                    ),
                );
                self.job = Some(Job::Connect {
                    until: now + WAIT_FOR,
                });
            }
            KeyCode::Char('x') => {
                self.dialogs.show(
                    RequestOptions::new()
                        .title("Save changes?")
                        .msg("You are closing a file with unsaved changes.\nSave them first?")
                        .icon(icon::WARNING)
                        .cls(WARNING_FRAME)
                        .buttons(
                            ButtonSet::YES_NO_CANCEL
                                .with_label(ButtonId::Yes, "Save")
                                .with_label(ButtonId::No, "Discard"),
                        )
                        .input(InputMode::None)
                        .callback(results.recorder("save")),
                );
            }
            KeyCode::Char('q') => self.should_exit = true,
            _ => {}
        }
    }

    /// Advances the pretend job. Returns whether anything changed on screen.
    fn run_job(&mut self, now: Instant) -> bool {
        match self.job.as_mut() {
            Some(Job::Copy { step, next_at }) if now >= *next_at => {
                *step += 1;
                *next_at = now + PROGRESS_STEP;
                let fraction = f64::from(*step) / f64::from(PROGRESS_STEPS);
                let label = format!("{:.0}%", fraction * 100.0);
                let done = *step >= PROGRESS_STEPS;
                self.dialogs.update_progress(fraction, Some(&label), None);
                if done {
                    self.job = None;
                    self.dialogs.hide();
                    self.results.push("progress: copied all files");
                }
                true
            }
            Some(Job::Connect { until }) if now >= *until => {
                self.job = None;
                self.dialogs.hide();
                self.results.push("wait: connected");
                true
            }
            _ => false,
        }
    }
}

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

fn background(results: &[String]) -> Paragraph<'static> {
    let mut lines: Vec<Line> = HELP.iter().map(|line| Line::from(*line)).collect();
    lines.push(Line::from(""));
    lines.extend(results.iter().rev().map(|line| Line::from(line.clone())));
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" msgbox demo "))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = tracing_setup::init()?;
    let config = load_config()?;
    info!(?log_path, ?config, "starting msgbox demo");

    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let size = terminal.size()?;
    let mut demo = Demo::new(config, Rect::new(0, 0, size.width, size.height));
    let mut needs_redraw = true;

    loop {
        let now = Instant::now();
        if demo.run_job(now) {
            needs_redraw = true;
        }
        demo.dialogs.tick(now);
        if demo.dialogs.is_visible() {
            // keeps the wait animation and entrance moving
            needs_redraw = true;
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        demo.should_exit = true;
                    } else if !demo.dialogs.handle_key(key) && !demo.dialogs.is_visible() {
                        demo.open(key.code, Instant::now());
                    }
                    needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    if demo.dialogs.handle_mouse(mouse) {
                        needs_redraw = true;
                    }
                }
                Event::Resize(width, height) => {
                    let viewport = Rect::new(0, 0, width, height);
                    demo.dialogs.host_mut().set_viewport(viewport);
                    if let Some(shell) = demo.dialogs.shell_mut() {
                        shell.set_viewport(viewport);
                    }
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        if demo.should_exit {
            break;
        }
        if !needs_redraw {
            continue;
        }
        let results = demo.results.lines();
        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(background(&results), area);
            if let Some(shell) = demo.dialogs.shell() {
                frame.render_widget(shell, area);
                if let Some(position) = cursor_position(shell) {
                    frame.set_cursor_position(position);
                }
            }
        })?;
        needs_redraw = false;
    }

    if demo.dialogs.is_visible() {
        warn!("exiting with a dialog still open");
        demo.dialogs.hide();
    }
    Ok(())
}
