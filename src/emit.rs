//! C source rendering for embedded assets.
//!
//! Builds the generated `.c` text: a header comment naming the source
//! asset, an `#include <stddef.h>`, a string-fragment array constant, and
//! a companion size constant. The two modes differ only in constant
//! naming and newline placement, so both share one renderer dispatched on
//! [`Mode`].

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::escape::escape;

/// Constant name used for markup assets.
const MARKUP_NAME: &str = "index_html";

/// How an asset is embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Markup content: fixed `index_html[]` constant, newline markers
    /// between lines only, so the embedded page has no trailing newline.
    Markup,
    /// PEM certificate content: caller-named constant, every line
    /// newline-terminated, so the embedded text ends with exactly one
    /// trailing newline.
    Certificate { var_name: String },
}

impl Mode {
    /// The C identifier the constant is declared under.
    pub fn const_name(&self) -> &str {
        match self {
            Mode::Markup => MARKUP_NAME,
            Mode::Certificate { var_name } => var_name,
        }
    }
}

/// A rendered C source fragment.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The generated C source text.
    pub source: String,
    /// Logical byte length of the embedded content. This is the value the
    /// generated `_len` constant evaluates to: the string-literal
    /// initializer appends exactly one NUL, which `sizeof(x) - 1` cancels.
    pub content_len: usize,
}

/// Render `text` as C source declaring a string constant.
///
/// `source_name` is the asset file name recorded in the generated header
/// comment. Certificate mode rejects a `var_name` that is not a valid C
/// identifier, since interpolating one would make the output uncompilable.
///
/// # Examples
///
/// ```
/// use asset2c::{render, Mode};
///
/// let rendered = render("<html></html>\n", &Mode::Markup, "index.html").unwrap();
/// assert!(rendered.source.contains("const char index_html[] = {"));
/// assert_eq!(rendered.content_len, 13);
/// ```
pub fn render(text: &str, mode: &Mode, source_name: &str) -> Result<Rendered> {
    if let Mode::Certificate { var_name } = mode {
        if !is_c_identifier(var_name) {
            return Err(Error::InvalidIdentifier(var_name.clone()));
        }
    }

    let name = mode.const_name();
    let mut source = String::with_capacity(text.len() + text.len() / 4 + 256);

    writeln!(source, "// Automatically generated from {source_name}").unwrap();
    source.push_str("// DO NOT EDIT DIRECTLY\n\n");
    source.push_str("#include <stddef.h>\n\n");
    writeln!(source, "const char {name}[] = {{").unwrap();

    let content_len = match mode {
        Mode::Markup => write_markup_fragments(&mut source, text),
        Mode::Certificate { .. } => write_certificate_fragments(&mut source, text.trim()),
    };

    source.push_str("};\n\n");
    writeln!(source, "const size_t {name}_len = sizeof({name}) - 1;").unwrap();

    Ok(Rendered {
        source,
        content_len,
    })
}

/// Emit markup-mode fragments: `"\n"` markers between lines, never after
/// the last. A final newline in the input is a line terminator, not a
/// separator, so the empty element it splits off is dropped.
///
/// Returns the logical byte length of the embedded content.
fn write_markup_fragments(source: &mut String, text: &str) -> usize {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }

    // An empty initializer list is not valid C; keep one empty fragment.
    if lines.len() == 1 && lines[0].is_empty() {
        source.push_str("    \"\"\n");
        return 0;
    }

    let mut content_len = 0;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            source.push_str("    \"\\n\"\n");
            content_len += 1;
        }
        if !line.is_empty() {
            writeln!(source, "    \"{}\"", escape(line)).unwrap();
            content_len += line.len();
        }
    }
    content_len
}

/// Emit certificate-mode fragments: every line carries its own trailing
/// `\n`, the last included. The caller trims the input first, so the
/// embedded content ends with exactly one newline.
///
/// Returns the logical byte length of the embedded content.
fn write_certificate_fragments(source: &mut String, text: &str) -> usize {
    let mut content_len = 0;
    for line in text.split('\n') {
        if line.is_empty() {
            source.push_str("    \"\\n\"\n");
        } else {
            writeln!(source, "    \"{}\\n\"", escape(line)).unwrap();
        }
        content_len += line.len() + 1;
    }
    content_len
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
