//! Core utilities and shared types
//!
//! This module contains the output side shared by every command: the
//! [`Printer`] capability the diff formatter writes through, and the color
//! handling behind it.

use clap::ValueEnum;
use colored::Color;
use derive_new::new;
use is_terminal::IsTerminal;
use std::io::{self, Write};

const RESET: &[u8] = b"\x1b[0m";

/// The independently colorable classes of diff output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    /// Hunk headers, range lines and file headers
    Header,
    Inserted,
    Deleted,
}

/// Line-oriented sink for formatted diff text.
///
/// Each call writes one complete line; the implementation appends the line
/// terminator.
pub trait Printer {
    fn emit(&mut self, text: &[u8], style: StyleClass) -> io::Result<()>;
    fn emit_raw(&mut self, text: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is an interactive terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Colors assigned to each style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Palette {
    header: Color,
    inserted: Color,
    deleted: Color,
}

impl Palette {
    pub fn color(&self, style: StyleClass) -> Color {
        match style {
            StyleClass::Header => self.header,
            StyleClass::Inserted => self.inserted,
            StyleClass::Deleted => self.deleted,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(Color::Cyan, Color::Green, Color::Red)
    }
}

/// [`Printer`] over any `Write`, wrapping styled lines in ANSI escapes when
/// color is enabled.
#[derive(new)]
pub struct WritePrinter<W: Write> {
    writer: W,
    colored: bool,
    #[new(default)]
    palette: Palette,
}

impl<W: Write> WritePrinter<W> {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Printer for WritePrinter<W> {
    fn emit(&mut self, text: &[u8], style: StyleClass) -> io::Result<()> {
        if !self.colored {
            return self.emit_raw(text);
        }

        let code = self.palette.color(style).to_fg_str();
        write!(self.writer, "\x1b[{code}m")?;
        self.writer.write_all(text)?;
        self.writer.write_all(RESET)?;
        self.writer.write_all(b"\n")
    }

    fn emit_raw(&mut self, text: &[u8]) -> io::Result<()> {
        self.writer.write_all(text)?;
        self.writer.write_all(b"\n")
    }
}
