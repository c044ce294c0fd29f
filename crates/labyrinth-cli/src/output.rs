//! Output formatting for maze rendering.
//!
//! Mazes can be printed in the plain text interchange format, as a block
//! drawing two terminal columns per cell, or as JSON summaries.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use labyrinth_lib::{Cell, Grid};

use crate::terminal::{supports_unicode, ColorPalette};

/// How mazes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The text format used for stored mazes.
    Text,
    /// Two-column block drawing.
    #[default]
    Blocks,
    /// Pretty-printed JSON summary.
    Json,
}

/// Rendering options resolved from CLI flags and the environment.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub palette: ColorPalette,
    pub unicode: bool,
}

impl OutputOptions {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        let palette = if no_color {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        };
        Self {
            format,
            palette,
            unicode: supports_unicode(),
        }
    }
}

/// Glyphs for a single cell, each two columns wide.
fn cell_glyph(cell: Cell, unicode: bool) -> &'static str {
    match (cell, unicode) {
        (Cell::Wall, true) => "██",
        (Cell::Wall, false) => "##",
        (Cell::Passage, _) => "  ",
        (Cell::Path, _) => "//",
    }
}

/// Draw the grid with block glyphs, one line per row.
///
/// Color codes are only emitted when the cell kind changes along a row.
pub fn render_blocks(grid: &Grid, palette: &ColorPalette, unicode: bool) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() * 4 + 1));
    for row in grid.rows() {
        let mut current: Option<Cell> = None;
        for &cell in row {
            if current != Some(cell) {
                if current.is_some_and(|c| c != Cell::Passage) {
                    out.push_str(palette.reset);
                }
                match cell {
                    Cell::Wall => out.push_str(palette.wall),
                    Cell::Path => out.push_str(palette.path),
                    Cell::Passage => {}
                }
                current = Some(cell);
            }
            out.push_str(cell_glyph(cell, unicode));
        }
        if current.is_some_and(|c| c != Cell::Passage) {
            out.push_str(palette.reset);
        }
        out.push('\n');
    }
    out
}

/// Print a grid in the requested non-JSON format.
pub fn print_grid(grid: &Grid, options: &OutputOptions) {
    match options.format {
        OutputFormat::Text | OutputFormat::Json => print!("{grid}"),
        OutputFormat::Blocks => print!("{}", render_blocks(grid, &options.palette, options.unicode)),
    }
}

/// Print a notice line, highlighted when color is enabled.
pub fn print_notice(message: &str, palette: &ColorPalette) {
    println!("{}{}{}", palette.notice, message, palette.reset);
}

/// Write a serialisable value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)
}
