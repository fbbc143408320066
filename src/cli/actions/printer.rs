//! Render command replies as plain text or one JSON object per line.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::{Directory, User};
use crate::cli::commands::output::OutputFormat;

pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Printer<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write an operation outcome. JSON adds the rendered text as `message`.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn outcome<T: Serialize + Display>(&mut self, outcome: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.line(outcome),
            OutputFormat::Json => {
                let mut value = serde_json::to_value(outcome).context("failed to encode outcome")?;
                if let Value::Object(map) = &mut value {
                    map.insert("message".to_string(), Value::String(outcome.to_string()));
                }
                self.json(&value)
            }
        }
    }

    /// Write a free-form reply such as help text or a parse error.
    ///
    /// # Errors
    /// Returns an error if the underlying write fails.
    pub fn note(&mut self, kind: &str, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.line(message),
            OutputFormat::Json => self.json(&json!({ "outcome": kind, "message": message })),
        }
    }

    /// Write every user in the directory.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn listing(&mut self, directory: &Directory) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.line(directory.list_users()),
            OutputFormat::Json => {
                let users: Vec<_> = directory.iter().map(User::view).collect();
                self.json(&json!({ "outcome": "listing", "users": users }))
            }
        }
    }

    /// Empty separator line, text output only.
    ///
    /// # Errors
    /// Returns an error if the underlying write fails.
    pub fn blank(&mut self) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out).context("failed to write output")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}").context("failed to write output")
    }

    fn json(&mut self, value: &Value) -> Result<()> {
        serde_json::to_writer(&mut self.out, value).context("failed to encode output")?;
        writeln!(self.out).context("failed to write output")
    }
}
