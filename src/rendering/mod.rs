use crate::domain::Grid;
use std::io::{self, Write};

/// Glyph for an alive cell
pub const ALIVE_GLYPH: &str = "##";
/// Glyph for a dead cell
pub const DEAD_GLYPH: &str = "  ";
/// Closes every row
pub const ROW_BORDER: char = '|';
/// Repeated once per column under the grid
pub const RULE_SEGMENT: &str = "--";

/// ANSI erase display + cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Anything that can show a generation
pub trait DisplaySink {
    /// Show `grid`, replacing whatever was shown before
    fn render(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;
}

/// Format the grid as fixed-width text: two characters per cell,
/// a border at the end of each row, then a rule of width 2 * cols.
pub fn render_frame(grid: &Grid) -> String {
    let (cols, rows) = grid.dimensions();
    let mut out = String::with_capacity((cols * 2 + 2) * (rows + 1));

    for row in grid.rows() {
        for cell in row {
            out.push_str(if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH });
        }
        out.push(ROW_BORDER);
        out.push('\n');
    }
    out.push_str(&RULE_SEGMENT.repeat(cols));
    out.push('\n');
    out
}

/// Draws frames to a terminal, clearing it first
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn render(&mut self, grid: &Grid, _generation: u64) -> io::Result<()> {
        let frame = render_frame(grid);
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
