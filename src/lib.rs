//! # asset2c
//!
//! A small code generator that embeds static text assets (an HTML page, a
//! PEM certificate) as C string constants, for firmware images that serve
//! or consume the content at run time instead of loading it from a
//! filesystem.
//!
//! ## Features
//!
//! - Markup mode: embeds a page as `index_html[]` / `index_html_len`
//! - Certificate mode: embeds a PEM file under a caller-chosen name, with
//!   the trailing newline certificate parsers expect
//! - C string-literal escaping with a zero-copy fast path
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use asset2c::{convert_file, Mode};
//!
//! // Embed a landing page as index_html[]
//! convert_file(
//!     Path::new("index.html"),
//!     Path::new("index_html.c"),
//!     &Mode::Markup,
//! ).unwrap();
//!
//! // Embed a root certificate as aws_cert_ca[]
//! let mode = Mode::Certificate { var_name: "aws_cert_ca".into() };
//! convert_file(Path::new("root_ca.pem"), Path::new("aws_certs.c"), &mode).unwrap();
//! ```

pub mod convert;
pub mod emit;
pub mod error;
pub mod escape;

pub use convert::convert_file;
pub use emit::{Mode, Rendered, render};
pub use error::{Error, Result};
pub use escape::escape;
