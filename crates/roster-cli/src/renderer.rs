//! Terminal rendering for summaries
//!
//! Replies come out of the core as markdown. On a capable terminal they are
//! styled through termimad; with `--no-color` the markdown is printed as-is
//! so output stays stable for scripts and tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Headers carry titles, bold carries task names, italics carry
        // footers like task ids, inline code carries raw ids
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::AnsiValue(245));
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
                // Print headers raw so the hash prefix stays visible
                print!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
            }
            println!();
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
