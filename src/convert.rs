//! File-level conversion pipeline: read asset, render, write C source.

use std::fs;
use std::path::Path;

use crate::emit::{Mode, Rendered, render};
use crate::error::{Error, Result};

/// Convert one asset file to a C source file.
///
/// Reads `input` as UTF-8 text, renders it under `mode`, and writes the
/// generated source to `output`. Returns the rendered artifact so callers
/// can report the embedded content size.
///
/// No output file is created if reading or decoding fails. A failed write
/// may leave `output` partially written; there is no atomic rename step.
pub fn convert_file(input: &Path, output: &Path, mode: &Mode) -> Result<Rendered> {
    let bytes = fs::read(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| Error::Utf8 {
        path: input.to_path_buf(),
    })?;

    // The header comment names the asset, not wherever the build put it.
    let source_name = match input.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => input.display().to_string(),
    };

    let rendered = render(&text, mode, &source_name)?;

    fs::write(output, &rendered.source).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(rendered)
}
