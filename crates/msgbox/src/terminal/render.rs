use super::{ShellLayout, TerminalShell, TextField};
use crate::host::{DialogShell, FocusTarget, InputKind, ProgressIndicator};
use crate::text::{display_width, tail_to_width};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Widget};

const CLOSE_TOOL: &str = "[x]";

impl Widget for &TerminalShell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_visible() {
            return;
        }
        let layout = self.layout();
        let theme = self.theme();
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        if self.is_modal() {
            buf.set_style(area.intersection(self.viewport()), theme.mask);
        }

        if let Some(entrance) = self.entrance {
            let frame = interpolate(entrance.origin, layout.outer, entrance.ratio);
            let frame = frame.intersection(area);
            if frame.is_empty() {
                return;
            }
            Clear.render(frame, buf);
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_for(self.classes()))
                .render(frame, buf);
            return;
        }

        let outer = layout.outer.intersection(area);
        Clear.render(outer, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_for(self.classes()))
            .title(Span::styled(format!(" {} ", self.title()), theme.title))
            .render(outer, buf);

        if let Some(tool) = layout.close_tool {
            put(buf, tool.intersection(area), CLOSE_TOOL, theme.close_tool);
        }

        if let (Some(rect), Some((class, glyph))) = (layout.icon, self.icon().glyph()) {
            put(buf, rect.intersection(area), glyph, theme.icon_style(class));
        }

        let lines: Vec<Line> = layout
            .message_lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let message = layout.message.intersection(area);
        if !message.is_empty() {
            Paragraph::new(Text::from(lines))
                .style(theme.message)
                .render(message, buf);
        }

        if let Some((kind, rect)) = layout.input {
            render_field(self.input(kind), rect.intersection(area), theme.input, buf);
        }

        if let Some(rect) = layout
            .progress
            .map(|rect| rect.intersection(area))
            .filter(|rect| !rect.is_empty())
        {
            let progress = self.progress();
            let label = progress.text().unwrap_or_default().to_string();
            Gauge::default()
                .gauge_style(theme.gauge)
                .ratio(progress.value())
                .label(label)
                .render(rect, buf);
        }

        let focus = self.focus();
        for (id, rect) in &layout.buttons {
            let button = self.button(*id);
            let style = if focus == Some(FocusTarget::Button(*id)) {
                theme.focused_button
            } else {
                theme.button
            };
            put(buf, rect.intersection(area), &button.caption(), style);
        }
    }
}

/// Writes one line into `rect`, which must already lie inside the buffer.
fn put(buf: &mut Buffer, rect: Rect, value: &str, style: Style) {
    if rect.is_empty() {
        return;
    }
    buf.set_stringn(rect.x, rect.y, value, rect.width as usize, style);
}

fn interpolate(from: Rect, to: Rect, ratio: f64) -> Rect {
    let lerp = |a: u16, b: u16| {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * ratio;
        value.round().max(0.0) as u16
    };
    Rect::new(
        lerp(from.x, to.x),
        lerp(from.y, to.y),
        lerp(from.width, to.width).max(2),
        lerp(from.height, to.height).max(2),
    )
}

/// Visible rows of a field plus the caret position relative to the field origin.
fn field_view(field: &TextField, rect: Rect) -> (Vec<String>, (u16, u16)) {
    let width = rect.width.max(1) as usize;
    let text = field.display_text();
    let (row, column) = field.buffer.caret();
    if field.kind() != InputKind::MultiLine {
        let before: String = text.chars().take(column).collect();
        let after: String = text.chars().skip(column).collect();
        let head = tail_to_width(&before, width.saturating_sub(1));
        let caret_x = display_width(&head);
        let visible = format!("{head}{after}");
        return (vec![tail_fit(&visible, width)], (caret_x, 0));
    }
    let lines: Vec<&str> = if text.is_empty() {
        vec![""]
    } else {
        text.split('\n').collect()
    };
    let height = rect.height.max(1) as usize;
    let start = if row >= height { row + 1 - height } else { 0 };
    let visible = lines
        .iter()
        .skip(start)
        .take(height)
        .map(|line| tail_fit(line, width))
        .collect();
    let caret_line = lines.get(row).copied().unwrap_or_default();
    let before: String = caret_line.chars().take(column).collect();
    let caret_x = display_width(&before).min(rect.width.saturating_sub(1));
    (visible, (caret_x, (row - start) as u16))
}

/// Cuts `value` to `width` cells from the left.
fn tail_fit(value: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let ch_width = crate::text::char_width(ch);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

fn render_field(field: &TextField, rect: Rect, style: Style, buf: &mut Buffer) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let (rows, _) = field_view(field, rect);
    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    Paragraph::new(Text::from(lines)).style(style).render(rect, buf);
}

/// Where the terminal cursor belongs while a text control has focus.
pub fn cursor_position(shell: &TerminalShell) -> Option<Position> {
    if !shell.is_visible() || shell.is_animating() {
        return None;
    }
    let Some(FocusTarget::Input(focused)) = shell.focus() else {
        return None;
    };
    let layout: ShellLayout = shell.layout();
    let (kind, rect) = layout.input?;
    if kind != focused {
        return None;
    }
    let (_, (x, y)) = field_view(shell.input(kind), rect);
    Some(Position::new(rect.x + x, rect.y + y))
}
