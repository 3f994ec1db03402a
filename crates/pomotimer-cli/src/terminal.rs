//! Terminal window surface.
//!
//! The whole screen is repainted whenever the clock text changes or any
//! other element was updated since the last paint.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::warn;

use pomotimer_core::{Phase, ThemeMode, View};

/// User commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle,
    OpenSettings,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::OpenSettings),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }

    /// Hand the terminal back for line-oriented prompts.
    pub fn suspend(&self) -> io::Result<()> {
        execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen)?;
        disable_raw_mode()
    }

    pub fn resume(&self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

pub struct TerminalView {
    clock: String,
    phase: Phase,
    quote: String,
    label: String,
    accent: Color,
    theme: ThemeMode,
    dirty: bool,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            clock: String::new(),
            phase: Phase::Working,
            quote: String::new(),
            label: String::new(),
            accent: Color::Blue,
            theme: ThemeMode::System,
            dirty: true,
        }
    }
}

impl TerminalView {
    /// Force a full repaint on the next clock update.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn paint(&mut self) {
        if let Err(e) = self.draw(&mut io::stdout()) {
            warn!(error = %e, "terminal draw failed");
        }
        self.dirty = false;
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        let (cols, _) = terminal::size()?;
        let (fg, bg) = theme_colors(self.theme);
        let mut row = 1;

        queue!(
            out,
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Clear(ClearType::All),
        )?;

        let heading = self.phase.label().to_uppercase();
        queue!(
            out,
            MoveTo(centered(cols, &heading), row),
            SetAttribute(Attribute::Dim),
            Print(&heading),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
        )?;
        row += 2;

        queue!(
            out,
            MoveTo(centered(cols, &self.clock), row),
            SetAttribute(Attribute::Bold),
            Print(&self.clock),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
        )?;
        row += 2;

        for line in wrap(&self.quote, usize::from(cols.saturating_sub(4)).max(10)) {
            queue!(out, MoveTo(centered(cols, &line), row), Print(&line))?;
            row += 1;
        }
        row += 1;

        let toggle = format!(" {} ", self.label);
        let settings = " Settings ";
        let width = toggle.chars().count() + 2 + settings.len();
        let left = cols.saturating_sub(width as u16) / 2;
        queue!(
            out,
            MoveTo(left, row),
            SetForegroundColor(Color::White),
            SetBackgroundColor(self.accent),
            Print(&toggle),
            SetBackgroundColor(bg),
            Print("  "),
            SetBackgroundColor(self.accent),
            Print(settings),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
        )?;
        row += 2;

        let help = "enter/space start·pause   s settings   q quit";
        queue!(
            out,
            MoveTo(centered(cols, help), row),
            SetAttribute(Attribute::Dim),
            Print(help),
            SetAttribute(Attribute::Reset),
        )?;
        out.flush()
    }
}

impl View for TerminalView {
    fn show_clock(&mut self, clock: &str, phase: Phase) {
        if self.dirty || clock != self.clock || phase != self.phase {
            self.clock = clock.to_string();
            self.phase = phase;
            self.paint();
        }
    }

    fn show_quote(&mut self, quote: &str) {
        self.quote = quote.to_string();
        self.dirty = true;
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.label = label.to_string();
        self.dirty = true;
    }

    fn set_accent(&mut self, hex: &str) {
        self.accent = parse_hex(hex).unwrap_or(Color::Blue);
        self.dirty = true;
    }

    fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        self.dirty = true;
    }
}

/// Foreground and background for a theme. `System` keeps the terminal's own.
fn theme_colors(theme: ThemeMode) -> (Color, Color) {
    match theme {
        ThemeMode::System => (Color::Reset, Color::Reset),
        ThemeMode::Light => (Color::Black, Color::Rgb { r: 235, g: 235, b: 235 }),
        ThemeMode::Dark => (Color::Rgb { r: 220, g: 220, b: 220 }, Color::Rgb { r: 36, g: 36, b: 36 }),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn centered(cols: u16, text: &str) -> u16 {
    let width = u16::try_from(text.chars().count()).unwrap_or(cols);
    cols.saturating_sub(width) / 2
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
