//! Output formatting and writing utilities
//!
//! This module implements the tabular-renderer and code-block-renderer
//! collaborator roles for the terminal: it consumes the table specs and
//! pre-serialized payload text produced by the core and writes them in
//! the selected output format.

use crate::cli::OutputFormat;
use crate::error::Result;
use apiref_core::{RenderedEndpoint, TableSpec};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write an informational message (suppressed in quiet mode)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", message.green())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", message.yellow())?;
        } else {
            writeln!(self.writer, "WARNING: {}", message)?;
        }
        Ok(())
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", message.red())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "\n{}", title.bold())?;
        } else {
            writeln!(self.writer, "\n{}", title)?;
        }
        Ok(())
    }

    /// Write a serializable value in the selected format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            // Human falls back to pretty JSON for raw data
            OutputFormat::JsonPretty | OutputFormat::Human => {
                serde_json::to_string_pretty(value)?
            }
        };
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write a rendered endpoint in the selected format
    pub fn rendered_endpoint(&mut self, rendered: &RenderedEndpoint) -> Result<()> {
        debug!(anchor = %rendered.anchor, format = ?self.format, "writing rendered endpoint");
        match self.format {
            OutputFormat::Human => self.rendered_endpoint_human(rendered),
            _ => self.data(rendered),
        }
    }

    /// Human layout, following the reference page's section order
    fn rendered_endpoint_human(&mut self, rendered: &RenderedEndpoint) -> Result<()> {
        // Heading block with the anchor id and authentication label
        if self.use_color {
            writeln!(
                self.writer,
                "{} {}",
                format!("#{}", rendered.anchor).dimmed(),
                rendered.authentication_label.yellow().bold()
            )?;
            writeln!(self.writer, "{}", rendered.title.bold())?;
        } else {
            writeln!(
                self.writer,
                "#{} {}",
                rendered.anchor, rendered.authentication_label
            )?;
            writeln!(self.writer, "{}", rendered.title)?;
        }
        writeln!(self.writer, "{}", rendered.subtitle)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", rendered.description)?;

        self.section("Example request")?;
        self.code_block(
            &rendered.request.language,
            &format!(
                "{} {}\n{}",
                rendered.request.method, rendered.request.url, rendered.request.body_text
            ),
        )?;

        self.section("HTTP Endpoint")?;
        writeln!(self.writer, "{}", rendered.http_endpoint)?;

        self.section("Parameters")?;
        self.table(&rendered.parameter_table)?;

        self.section("Example response")?;
        self.code_block("json", &rendered.response_text)?;

        self.section("Response")?;
        self.table(&rendered.response_table)?;

        self.section("Errors")?;
        self.table(&rendered.error_table)?;

        Ok(())
    }

    /// Write a code block: the language tag followed by the body, indented
    fn code_block(&mut self, language: &str, body: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", format!("({})", language).dimmed())?;
        } else {
            writeln!(self.writer, "({})", language)?;
        }
        for line in body.lines() {
            writeln!(self.writer, "    {}", line)?;
        }
        Ok(())
    }

    /// Write a table spec with padded columns
    fn table(&mut self, table: &TableSpec) -> Result<()> {
        if table.rows.is_empty() {
            writeln!(self.writer, "(none)")?;
            return Ok(());
        }

        let widths = column_widths(table);

        let header = format_row(table.header.iter().map(|h| h.to_string()), &widths);
        if self.use_color {
            writeln!(self.writer, "{}", header.bold())?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }

        for row in &table.rows {
            writeln!(self.writer, "{}", format_row(row.iter().cloned(), &widths))?;
        }
        Ok(())
    }
}

/// Widest cell per column, header included
fn column_widths(table: &TableSpec) -> Vec<usize> {
    let mut widths: Vec<usize> = table.header.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.len());
            }
        }
    }
    widths
}

/// Left-align cells into their column widths with a two-space gutter
fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    padded.join("  ").trim_end().to_string()
}
