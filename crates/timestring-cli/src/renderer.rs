//! Terminal rendering of markdown reports using termimad, with a plain text
//! fallback.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use timestring_core::{
    display::{FORMAT_FAILURE_LABEL, WARNING_LABEL},
    RunReport,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    warning_skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut warning_skin = skin.clone();
        warning_skin.paragraph.set_fg(Color::Yellow);

        Self {
            rich_enabled,
            skin,
            warning_skin,
        }
    }

    /// Render a run report, highlighting its failure lines when the output
    /// field was left unpopulated
    pub fn render_report(&self, report: &RunReport) -> Result<()> {
        self.render_markdown(&report.to_string(), !report.populated())
    }

    /// Render markdown text to the terminal
    fn render_markdown(&self, markdown: &str, highlight_warnings: bool) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if highlight_warnings && is_warning_line(line) {
                self.warning_skin.print_inline(line);
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

fn is_warning_line(line: &str) -> bool {
    line.starts_with(WARNING_LABEL) || line.starts_with(FORMAT_FAILURE_LABEL)
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_warning_lines_follow_report_wording() {
        let report = RunReport {
            table: "city.gpkg/permits".to_string(),
            input_field: "CreatedDT".to_string(),
            output_field: "CreatedDT_str".to_string(),
            field_created: true,
            rows_extracted: 1,
            write: Default::default(),
            format_error: Some(timestring_core::FormatError::at_row(1, "bad pattern")),
            timings: Vec::new(),
        };
        assert!(!report.populated());

        let text = report.to_string();
        let warnings: Vec<_> = text.lines().filter(|line| is_warning_line(line)).collect();
        assert_eq!(warnings.len(), 2);
        assert!(!is_warning_line("- **Table:** city.gpkg/permits"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
