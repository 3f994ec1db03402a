//! Modal settings view.
//!
//! Suspends the full-screen view and asks for each field on its own line.
//! A rejected form is reported and offered for editing again; the settings
//! only change when the whole form validates.

use std::io::{self, BufRead, Write};

use pomotimer_core::{AppController, Settings, ThemeMode};

use crate::terminal::{TerminalGuard, TerminalView};

pub fn open(
    controller: &mut AppController<TerminalView>,
    terminal: &TerminalGuard,
) -> io::Result<()> {
    terminal.suspend()?;
    let result = prompt(controller, &mut io::stdin().lock(), &mut io::stdout());
    terminal.resume()?;
    controller.view_mut().invalidate();
    result
}

fn prompt(
    controller: &mut AppController<TerminalView>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut form = controller.settings_form();
    loop {
        writeln!(out, "\nSettings (blank keeps the current value)\n")?;

        let Some(work) = ask(input, out, "Work time (minutes)", &form.work_minutes)? else {
            return Ok(());
        };
        form.work_minutes = work;

        let Some(brk) = ask(input, out, "Break time (minutes)", &form.break_minutes)? else {
            return Ok(());
        };
        form.break_minutes = brk;

        writeln!(out, "Button colors:")?;
        for (i, (name, hex)) in controller.settings().palette.iter().enumerate() {
            writeln!(out, "  {:>2}) {name:<12} {hex}", i + 1)?;
        }
        let Some(color) = ask(input, out, "Button color (name or number)", &form.color)? else {
            return Ok(());
        };
        form.color = resolve_color(controller.settings(), &color);

        let Some(custom) = ask(
            input,
            out,
            "Or a custom color as 'hex_code, name' ('-' for none)",
            &form.custom_color,
        )?
        else {
            return Ok(());
        };
        form.custom_color = if custom.trim() == "-" { String::new() } else { custom };

        let themes = ThemeMode::ALL.map(ThemeMode::as_str).join("/");
        let Some(theme) = ask(input, out, &format!("Theme ({themes})"), &form.theme)? else {
            return Ok(());
        };
        form.theme = theme;

        match controller.save_settings(&form) {
            Ok(()) => return Ok(()),
            Err(e) => {
                writeln!(out, "\nError: {e}")?;
                let again = ask(input, out, "Edit again? [Y/n]", "y")?.unwrap_or_default();
                if again.trim().eq_ignore_ascii_case("n") {
                    writeln!(out, "Settings unchanged.")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Read one answer. Blank input yields `current`; end of input yields `None`.
fn ask(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    if current.is_empty() {
        write!(out, "{label}: ")?;
    } else {
        write!(out, "{label} [{current}]: ")?;
    }
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    Ok(Some(if answer.is_empty() {
        current.to_string()
    } else {
        answer.to_string()
    }))
}

/// Map a 1-based palette number to its name; anything else passes through.
fn resolve_color(settings: &Settings, answer: &str) -> String {
    let answer = answer.trim();
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| settings.palette.get_index(i))
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomotimer_core::storage::SettingsStore;
    use pomotimer_core::{QuoteBoard, SharedTimer, TimerEngine};
    use std::io::Cursor;

    fn controller(dir: &std::path::Path) -> AppController<TerminalView> {
        let settings = Settings::default();
        AppController::new(
            SettingsStore::new(dir.join("config.json")),
            settings.clone(),
            SharedTimer::new(TimerEngine::from_settings(&settings)),
            QuoteBoard::default(),
            TerminalView::default(),
        )
    }

    fn run(controller: &mut AppController<TerminalView>, typed: &str) -> String {
        let mut out = Vec::new();
        prompt(controller, &mut Cursor::new(typed.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn resolves_palette_numbers() {
        let s = Settings::default();
        assert_eq!(resolve_color(&s, "2"), "Red");
        assert_eq!(resolve_color(&s, " Blue "), "Blue");
        assert_eq!(resolve_color(&s, "0"), "0");
        assert_eq!(resolve_color(&s, "99"), "99");
    }

    #[test]
    fn blank_answers_keep_current_values() {
        let mut input = Cursor::new(&b"\n"[..]);
        let mut out = Vec::new();
        let answer = ask(&mut input, &mut out, "Work time", "50").unwrap();
        assert_eq!(answer.as_deref(), Some("50"));
        assert_eq!(String::from_utf8(out).unwrap(), "Work time [50]: ");

        let mut empty = Cursor::new(&b""[..]);
        assert_eq!(ask(&mut empty, &mut Vec::new(), "Theme", "System").unwrap(), None);
    }

    #[test]
    fn valid_form_is_saved() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut c = controller(dir.path());
        run(&mut c, "25\n5\n4\n\ndark\n");

        let s = c.settings();
        assert_eq!(s.work_minutes, 25);
        assert_eq!(s.break_minutes, 5);
        assert_eq!(s.accent, "Green");
        assert_eq!(s.theme, ThemeMode::Dark);
    }

    #[test]
    fn rejected_form_can_be_abandoned() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut c = controller(dir.path());
        let output = run(&mut c, "25\n\n\n#ZZZZZZ,Bad\n\nn\n");

        assert!(output.contains("Error: '#ZZZZZZ' is not a hex color code"));
        assert!(output.contains("Settings unchanged."));
        assert_eq!(c.settings(), &Settings::default());
    }

    #[test]
    fn rejected_form_can_be_corrected() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut c = controller(dir.path());
        run(&mut c, "abc\n\n\n\n\n\n30\n\n\n\n\n");

        assert_eq!(c.settings().work_minutes, 30);
    }
}
