//! Output formatting and display utilities

use crate::api::Overview;
use crate::config::OutputConfig;
use crate::error::Result;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Output writer that handles file vs stdout
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render a JSON value, pretty-printed when configured
    pub fn format_value(&self, value: &Value) -> Result<String> {
        if self.config.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }

    /// Render a value with a label, or just the value in JSON mode
    pub fn format_labeled(&self, label: &str, value: &Value) -> Result<String> {
        let rendered = self.format_value(value)?;
        if self.config.json {
            Ok(format!("{}\n", rendered))
        } else {
            Ok(format!("{}: {}\n", label, rendered))
        }
    }

    /// Line printed as soon as the CSRF token is known
    pub fn format_token(&self, token: Option<&str>) -> String {
        format!("CSRF token initial: {}\n", token.unwrap_or("None"))
    }

    /// Render the result of a full run as a single JSON document
    pub fn format_overview(&self, overview: &Overview) -> Result<String> {
        let document = serde_json::to_value(overview)?;
        Ok(format!("{}\n", self.format_value(&document)?))
    }

    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Truncate the output file, if any, before a run starts writing to it
    pub fn begin(&self) -> Result<()> {
        if let Some(file_path) = &self.config.file {
            File::create(file_path)?;
        }
        Ok(())
    }

    /// Write content to configured output; file output is appended
    pub fn write(&self, content: &str) -> Result<()> {
        if let Some(file_path) = &self.config.file {
            self.write_to_file(content, file_path)
        } else {
            self.write_to_stdout(content)
        }
    }

    fn write_to_file(&self, content: &str, file_path: &Path) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(file_path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_to_stdout(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
