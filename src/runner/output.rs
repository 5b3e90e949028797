//! Stdout rendering helpers for command results.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

pub(super) fn write_json(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)
    } else {
        serde_json::to_writer(&mut *out, value)
    }
    .context("serialize command output")?;
    write_line(out, "")
}

pub(super) fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").context("write command output")?;
    out.flush().context("flush command output")
}
