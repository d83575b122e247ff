//! Command-line interface for noteblog
//! Converts one Markdown note into the HTML fragment a blog page embeds.
//!
//! Usage:
//!   noteblog `<input>` `<output>` [`<image-dir>`] [--config `<file>`] [--table-class `<class>`] [--verbose]
//!
//! An output of `-` writes the HTML to stdout. A `noteblog.toml` in the input's
//! directory is applied before `--config`. Logs go to stderr and follow
//! `RUST_LOG` when it is set.

use clap::{Arg, ArgAction, ArgMatches, Command};
use noteblog::ConvertOptions;
use noteblog_config::Loader;
use std::io::Write;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    let matches = Command::new("noteblog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown note into blog HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the Markdown note")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path of the HTML file to write, or '-' for stdout")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("image-dir")
                .help("Directory prefix for embedded images (overrides the config file)")
                .index(3),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("table-class")
                .long("table-class")
                .help("Class attribute for generated tables"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let options = load_options(&matches);
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");
    handle_convert_command(input, output, &options);
}

/// Log to stderr, filtered by `RUST_LOG` or by the `--verbose` flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

/// Defaults, then `noteblog.toml` beside the input, then `--config`, then the
/// command-line overrides.
fn load_options(matches: &ArgMatches) -> ConvertOptions {
    let mut loader = Loader::new();
    if let Some(input) = matches.get_one::<String>("input") {
        loader = loader.with_note_settings(input);
    }
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("convert.image_directory", matches.get_one::<String>("image-dir")),
        ("convert.table_class", matches.get_one::<String>("table-class")),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            loader = loader
                .set_override(key, value.as_str())
                .unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                });
        }
    }

    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    config.convert
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: &str, options: &ConvertOptions) {
    if output == "-" {
        let source = noteblog::read_source(input).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        let html = noteblog::convert_with(&source, options);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(html.as_bytes()).and_then(|_| stdout.flush()) {
            eprintln!("Error: unable to write to stdout: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let written = noteblog::convert_file(input, output, options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    info!("wrote {} bytes to {}", written, output);
}
