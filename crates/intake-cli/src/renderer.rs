//! Terminal rendering for the markdown produced by `intake_core::display`.
//!
//! Rich output styles headers and status lines and runs the rest through
//! termimad; plain output passes the markdown through untouched.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders wizard output either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{BLUE}{line}{RESET}")?;
            } else if let Some(rest) = line.strip_prefix("Success:") {
                writeln!(out, "{GREEN}✓{RESET}{rest}")?;
            } else if let Some(rest) = line.strip_prefix("Error:") {
                writeln!(out, "{RED}✗{RESET}{rest}")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: &TerminalRenderer, markdown: &str) -> String {
        let mut buffer = Vec::new();
        renderer
            .write_to(&mut buffer, markdown)
            .expect("writing to a buffer succeeds");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    #[test]
    fn test_plain_output_is_unchanged() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Title\n\n- **Total: 25.00 EUR**\n";
        assert_eq!(rendered(&renderer, markdown), markdown);
    }

    #[test]
    fn test_rich_output_marks_status_lines() {
        let renderer = TerminalRenderer::new(true);
        let output = rendered(&renderer, "Success: Added deed.pdf\nError: Unknown step\n");
        assert!(output.contains("✓"));
        assert!(output.contains(" Added deed.pdf"));
        assert!(output.contains("✗"));
        assert!(!output.contains("Success:"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
