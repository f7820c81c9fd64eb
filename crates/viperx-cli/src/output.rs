//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command payload (template content, config values, JSON).  Written
    /// even in quiet mode.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Boxed block of text under a title.
    pub fn panel(&self, title: &str, body: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&render_panel(title, body, !self.no_color))
    }

    /// Left-aligned columns with a header row.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in render_table(headers, rows, !self.no_color) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Pretty-printed JSON; written even in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.data(&text)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

fn render_panel(title: &str, body: &str, color: bool) -> String {
    let inner = body
        .lines()
        .map(measure_text_width)
        .chain([measure_text_width(title) + 2])
        .max()
        .unwrap_or(0);

    let title_fill = "─".repeat(inner.saturating_sub(measure_text_width(title) + 1));
    let title = if color {
        title.cyan().bold().to_string()
    } else {
        title.to_owned()
    };

    let mut out = format!("╭─ {title} {title_fill}╮\n");
    for line in body.lines() {
        out.push_str(&format!("│ {} │\n", pad_str(line, inner, Alignment::Left, None)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(inner + 2)));
    out
}

fn render_table(headers: &[&str], rows: &[Vec<String>], color: bool) -> Vec<String> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| measure_text_width(c))
                .chain([measure_text_width(h)])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let join = |cells: Vec<String>| cells.join("  ").trim_end().to_owned();

    let header = join(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_str(h, *w, Alignment::Left, None).into_owned())
            .collect(),
    );
    let rule = join(widths.iter().map(|w| "─".repeat(*w)).collect());

    let mut lines = vec![
        if color {
            header.bold().to_string()
        } else {
            header
        },
        rule,
    ];
    lines.extend(rows.iter().map(|row| {
        join(
            row.iter()
                .zip(&widths)
                .map(|(c, w)| pad_str(c, *w, Alignment::Left, None).into_owned())
                .collect(),
        )
    }));
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn color_only_for_human_format() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        assert!(!OutputManager::new(&args, &cfg).supports_color());
    }

    #[test]
    fn json_format_is_reported() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert!(out.is_json());
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn panel_boxes_every_line_to_same_width() {
        let panel = render_panel("src_layout", "short\na much longer line", false);
        let lines: Vec<_> = panel.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("src_layout"));
        let widths: Vec<_> = lines.iter().map(|l| measure_text_width(l)).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            vec!["LICENSE.j2".to_string(), "bundled".to_string()],
            vec!["README.md.j2".to_string(), "user".to_string()],
        ];
        let lines = render_table(&["Template", "Source"], &rows, false);
        assert_eq!(lines.len(), 4);
        let col = lines[2].find("bundled").unwrap();
        assert_eq!(lines[3].find("user").unwrap(), col);
        assert_eq!(lines[0].find("Source").unwrap(), col);
    }
}
