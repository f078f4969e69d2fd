//! Rendering of validation reports for the terminal.
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use maze_encoding::Report;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One `Wrong encoding for (column,row)` line per violation
    #[default]
    Text,
    /// A single JSON object with grid size and violations
    Json,
}

#[derive(Serialize)]
struct OutputResult<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

pub fn write_report<W: Write>(
    out: &mut W,
    file: &str,
    report: &Report,
    settings: &Settings,
) -> Result<()> {
    match settings.format {
        Format::Text => write!(out, "{report}")?,
        Format::Json => {
            let result = OutputResult { file, report };
            let json = if settings.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
