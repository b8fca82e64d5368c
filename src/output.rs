// Console output for the demonstration.
// Titled JSON sections on stdout, diagnostics on stderr.

use std::fmt::Display;

use crossterm::style::{Color, StyledContent, Stylize, style};
use serde::Serialize;

use crate::error::VerbsError;

/// Text roles and their colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Success,
    Error,
    Muted,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Title => Color::Cyan,
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Muted => Color::DarkGrey,
        }
    }

    pub fn paint<D: Display>(self, text: D) -> StyledContent<D> {
        style(text).with(self.color())
    }
}

/// Build a section: a title line followed by pretty-printed JSON.
pub fn render_section<T: Serialize + ?Sized>(title: &str, value: &T) -> serde_json::Result<String> {
    let body = serde_json::to_string_pretty(value)?;
    let heading = Tone::Title.paint(format!("=== {} ===", title)).bold();
    Ok(format!("\n{}\n{}", heading, body))
}

/// Print a section to stdout.
pub fn section<T: Serialize + ?Sized>(title: &str, value: &T) {
    match render_section(title, value) {
        Ok(text) => println!("{}", text),
        Err(e) => failure(title, &VerbsError::Json(e)),
    }
}

/// Print a failed operation to stderr.
pub fn failure(context: &str, error: &VerbsError) {
    eprintln!("{} {}: {}", Tone::Error.paint("Error").bold(), context, error);
}

/// Print a confirmation line.
pub fn status(message: &str) {
    println!("{}", Tone::Success.paint(message));
}

/// Print a low-key informational line.
pub fn note(message: &str) {
    println!("{}", Tone::Muted.paint(message));
}
