//! Terminal rendering of markdown output
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as
//! plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders core display output to the terminal.
///
/// Colour preference is passed in at construction rather than read from any
/// global state.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // keep the hashes visible so phase ids line up with plain output
                println!("\x1b[36m{line}\x1b[0m");
            } else if line.starts_with("Note:") {
                println!("\x1b[33m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}
