//! asset2c - embed static assets as C string constants

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use asset2c::{Mode, convert_file};

#[derive(Parser)]
#[command(name = "asset2c")]
#[command(version, about = "Embed static assets as C string constants", long_about = None)]
#[command(after_help = "EXAMPLES:
    asset2c index.html index_html.c                Embed a page as index_html[]
    asset2c root_ca.pem aws_certs.c aws_cert_ca    Embed a certificate as aws_cert_ca[]")]
struct Cli {
    /// Input asset (HTML page, or PEM certificate when VAR_NAME is given)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output C source file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Constant name for certificate mode; omit for markup mode
    #[arg(value_name = "VAR_NAME")]
    var_name: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mode = match cli.var_name {
        Some(var_name) => Mode::Certificate { var_name },
        None => Mode::Markup,
    };

    match convert_file(&cli.input, &cli.output, &mode) {
        Ok(rendered) => {
            if !cli.quiet {
                println!(
                    "Converted {} -> {} ({} bytes)",
                    cli.input.display(),
                    cli.output.display(),
                    rendered.content_len
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
