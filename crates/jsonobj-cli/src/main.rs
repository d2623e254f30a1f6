//! `jsonobj` CLI — inspect, reformat and query JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Dump a kind-labelled tree (stdin → stdout)
//! echo '{"name":"Alice","scores":[95,87.5]}' | jsonobj inspect
//!
//! # Normalize a file: sorted keys, compact or pretty
//! jsonobj fmt -i data.json -o data.min.json
//! jsonobj fmt --pretty -i data.json
//!
//! # Pull one member out by dot path (missing members print null)
//! jsonobj get events.0.title -i calendar.json
//!
//! # More logging on stderr (or set RUST_LOG)
//! jsonobj -vv fmt -i data.json
//! ```

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jsonobj_core::{decode, TypeCase, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsonobj",
    version,
    about = "Inspect, reformat and query JSON through the jsonobj value model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document as an indented tree labelled by kind
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode and re-encode the document with sorted keys
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the member at a dot-separated path such as `a.b.0`
    Get {
        /// Path of map keys and array indices
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { input, output } => {
            let doc = read_document(input.as_deref())?;
            let mut dump = String::new();
            show(&doc, 0, &mut dump);
            write_output(output.as_deref(), &dump)?;
        }
        Commands::Fmt {
            input,
            output,
            pretty,
        } => {
            let doc = read_document(input.as_deref())?;
            let text = encode_with(&doc, pretty)?;
            write_output(output.as_deref(), &format!("{text}\n"))?;
        }
        Commands::Get {
            path,
            input,
            pretty,
        } => {
            let doc = read_document(input.as_deref())?;
            let found = walk(&doc, &path);
            tracing::debug!(%path, kind = %found.kind(), "resolved path");
            println!("{}", encode_with(found, pretty)?);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one step
/// from `warn`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn encode_with(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        value.encode_pretty()
    } else {
        value.encode()
    };
    text.context("Failed to encode JSON")
}

/// Follow `path` through maps (by key) and arrays (by index). Anything that
/// does not resolve yields Undefined.
fn walk<'a>(root: &'a Value, path: &str) -> &'a Value {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .fold(root, |current, segment| {
            if let Some(map) = current.get_map() {
                map.lookup(segment)
            } else if let Some(items) = current.get_array() {
                segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get(i))
                    .unwrap_or(Value::undefined_ref())
            } else {
                Value::undefined_ref()
            }
        })
}

/// Append an indented, kind-labelled rendering of `value` to `out`.
/// Map members are listed in sorted key order.
fn show(value: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    let out = RefCell::new(out);
    value.type_case_fixed(
        &mut TypeCase::new()
            .on_int(|n| out.borrow_mut().push_str(&format!("{pad}INT {n}\n")))
            .on_float(|x| out.borrow_mut().push_str(&format!("{pad}FLOAT {x:?}\n")))
            .on_string(|s| out.borrow_mut().push_str(&format!("{pad}STRING {s}\n")))
            .on_bool(|b| out.borrow_mut().push_str(&format!("{pad}BOOL {b}\n")))
            .on_null(|| out.borrow_mut().push_str(&format!("{pad}NULL\n")))
            .on_array(|items| {
                let mut out = out.borrow_mut();
                out.push_str(&format!("{pad}[\n"));
                for item in items {
                    show(item, indent + 1, &mut out);
                }
                out.push_str(&format!("{pad}]\n"));
            })
            .on_map(|map| {
                let mut out = out.borrow_mut();
                out.push_str(&format!("{pad}{{\n"));
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                for key in keys {
                    out.push_str(&format!("{pad}  {key} ->\n"));
                    show(map.lookup(key), indent + 2, &mut out);
                }
                out.push_str(&format!("{pad}}}\n"));
            }),
    );
}

fn read_document(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    decode(&text).context("Failed to decode JSON input")
}

/// Whole input text from `path`, or from stdin when no path is given.
fn read_input(path: Option<&str>) -> Result<String> {
    let text = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?
        }
        None => io::read_to_string(io::stdin().lock()).context("Failed to read from stdin")?,
    };
    tracing::debug!(bytes = text.len(), source = path.unwrap_or("stdin"), "read input");
    Ok(text)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout"),
    }
}
