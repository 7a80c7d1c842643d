//! Labeled text panel used for both the input and the output side.
//!
//! The panel is purely presentational: it shows a label, the value (or a
//! placeholder when empty), a live character count, and hints for the copy and
//! clear controls. Copying and clearing themselves are handled by the app.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::utils::sanitize_for_display;

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const MUTED: Color = Color::Rgb(113, 113, 122);
const READ_ONLY_BG: Color = Color::Rgb(24, 24, 27);
const CURSOR: &str = "▌";

/// Controls a panel exposes for its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    Copy { copied: bool },
    Clear,
}

pub struct TextPanel<'a> {
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    read_only: bool,
    clearable: bool,
    focused: bool,
    copied: bool,
    scroll: u16,
}

impl<'a> TextPanel<'a> {
    pub fn new(label: &'a str, placeholder: &'a str, value: &'a str) -> Self {
        Self {
            label,
            placeholder,
            value,
            read_only: false,
            clearable: false,
            focused: false,
            copied: false,
            scroll: 0,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Whether a clear action is wired up for this panel
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the transient "copied" acknowledgement
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    /// Rows scrolled past the top. Only read-only panels use it; editable
    /// panels always keep the end in view.
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Number of characters in the value
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Copy is offered for any non-empty value; clear only on editable panels
    /// that have a clear action.
    pub fn controls(&self) -> Vec<PanelControl> {
        let mut controls = vec![];
        if self.value.is_empty() {
            return controls;
        }
        controls.push(PanelControl::Copy { copied: self.copied });
        if !self.read_only && self.clearable {
            controls.push(PanelControl::Clear);
        }
        controls
    }

    fn controls_line(&self) -> Line<'static> {
        let spans: Vec<Span> = self
            .controls()
            .into_iter()
            .map(|control| match control {
                PanelControl::Copy { copied: true } => Span::styled(
                    " ✓ Copied ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                PanelControl::Copy { copied: false } => {
                    Span::styled(" ^Y copy ", Style::default().fg(MUTED))
                }
                PanelControl::Clear => Span::styled(" ^L clear ", Style::default().fg(MUTED)),
            })
            .collect();
        Line::from(spans).right_aligned()
    }

    fn block(&self) -> Block<'static> {
        let border_color = if self.focused { ACCENT } else { MUTED };
        let label_style = if self.focused {
            Style::default().fg(Color::Rgb(250, 250, 250)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(Span::styled(format!(" {} ", self.label), label_style)))
            .title_top(self.controls_line())
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {} chars ", self.char_count()),
                    Style::default().fg(MUTED),
                ))
                .right_aligned(),
            )
    }

    /// Displayed text. Escape sequences are stripped here so the stored value
    /// (what gets counted and copied) stays untouched.
    fn body(&self) -> Text<'a> {
        if self.value.is_empty() {
            let mut spans = vec![];
            if self.shows_cursor() {
                spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
            }
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ));
            return Text::from(Line::from(spans));
        }

        let display = sanitize_for_display(self.value);
        let mut lines: Vec<Line> =
            display.split('\n').map(|line| Line::from(line.to_string())).collect();
        if self.shows_cursor()
            && let Some(last) = lines.last_mut()
        {
            last.push_span(Span::styled(CURSOR, Style::default().fg(ACCENT)));
        }
        Text::from(lines)
    }

    fn shows_cursor(&self) -> bool {
        self.focused && !self.read_only
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.body()).wrap(Wrap { trim: false })
    }

    /// Largest useful scroll offset when drawn into `area`: wrapped rows
    /// (cursor included) minus the visible rows.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return 0;
        }
        let rows = self.paragraph().line_count(inner.width);
        rows.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16
    }
}

impl Widget for TextPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Editable panels follow the cursor, read-only ones honor the offset
        let max_scroll = self.max_scroll(area);
        let scroll = if self.read_only { self.scroll.min(max_scroll) } else { max_scroll };

        let mut paragraph = self.paragraph().block(self.block()).scroll((scroll, 0));
        if self.read_only {
            paragraph = paragraph.style(Style::default().bg(READ_ONLY_BG));
        }

        paragraph.render(area, buf);
    }
}
