//! Interpol CLI
//!
//! Usage:
//!   interpol [OPTIONS] [TEMPLATE] [ARGS]...
//!
//! Options:
//!   -f, --file <FILE>    Read the template from a file
//!   -c, --config <FILE>  Settings file (TOML format)
//!   --raw                Pass every argument as a string
//!   --check              Validate the template and list its placeholders
//!   --reverse            Reverse the formatted output
//!   --syntax             Show template syntax reference
//!   -v, --verbose        Enable debug logging
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, info};

use interpol::{format_spanned, placeholders, reverse, Diagnostic, Settings, Value};

#[derive(Parser)]
#[command(name = "interpol")]
#[command(about = "Substitute {N} placeholders in a template with positional arguments")]
struct Cli {
    /// Template text (reads from --file or stdin if not provided)
    template: Option<String>,

    /// Arguments substituted for {1}, {2}, ...
    #[arg(allow_negative_numbers = true)]
    args: Vec<String>,

    /// Read the template from a file; all positionals become arguments
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pass every argument as a string instead of inferring its type
    #[arg(long)]
    raw: bool,

    /// Validate the template and list the placeholder indices it uses
    #[arg(long)]
    check: bool,

    /// Reverse the formatted output
    #[arg(long)]
    reverse: bool,

    /// Show template syntax reference
    #[arg(long)]
    syntax: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where the template text came from
enum TemplateSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if cli.syntax {
        print_syntax();
        return;
    }

    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => {
                debug!("loaded settings from {}", path.display());
                s
            }
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // With --file, the first positional is an argument rather than the template
    let (source, raw_args) = match (&cli.file, cli.template) {
        (Some(path), first) => {
            let mut args: Vec<String> = first.into_iter().collect();
            args.extend(cli.args);
            (TemplateSource::File(path.clone()), args)
        }
        (None, Some(template)) => (TemplateSource::Inline(template), cli.args),
        (None, None) => {
            if io::stdin().is_terminal() {
                print_intro();
                return;
            }
            (TemplateSource::Stdin, cli.args)
        }
    };

    let (template, source_name) = match read_template(source, &settings) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("Error {}", message);
            process::exit(1);
        }
    };

    if cli.check {
        match placeholders(&template) {
            Ok(indices) => {
                info!("template is valid with {} placeholder(s)", indices.len());
                let listed: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
                println!("{}", listed.join(" "));
            }
            Err(diag) => fail(&diag, &template, &source_name, &settings),
        }
        return;
    }

    let infer = settings.infer_types && !cli.raw;
    let args: Vec<Value> = raw_args
        .iter()
        .map(|raw| {
            let value = if infer {
                Value::infer(raw)
            } else {
                Value::from(raw)
            };
            debug!("argument {:?} -> {}", raw, value.kind());
            value
        })
        .collect();

    match format_spanned(&template, &args) {
        Ok(out) => {
            info!("formatted {} byte template", template.len());
            let out = if cli.reverse { reverse(&out) } else { out };
            println!("{}", out);
        }
        Err(diag) => fail(&diag, &template, &source_name, &settings),
    }
}

/// Load the template text and the name to show for it in diagnostics
fn read_template(
    source: TemplateSource,
    settings: &Settings,
) -> Result<(String, String), String> {
    match source {
        TemplateSource::Inline(template) => {
            debug!("template given on the command line");
            Ok((template, settings.source_name.clone()))
        }
        TemplateSource::File(path) => {
            debug!("reading template from {}", path.display());
            let content = fs::read_to_string(&path)
                .map_err(|e| format!("reading file '{}': {}", path.display(), e))?;
            Ok((strip_trailing_newline(content), path.display().to_string()))
        }
        TemplateSource::Stdin => {
            debug!("reading template from stdin");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("reading from stdin: {}", e))?;
            Ok((strip_trailing_newline(buffer), settings.source_name.clone()))
        }
    }
}

/// Files and pipes usually end in a newline that is not part of the template
fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

fn fail(diag: &Diagnostic, template: &str, source_name: &str, settings: &Settings) -> ! {
    debug!("template rejected: {}", diag);
    match diag.render(template, source_name, settings.color) {
        Ok(report) => eprint!("{}", report),
        Err(_) => eprintln!("Error: {}", diag.error),
    }
    process::exit(1);
}

fn print_intro() {
    println!(
        r#"Interpol - positional placeholder formatting

USAGE:
    interpol [OPTIONS] <TEMPLATE> [ARGS]...
    interpol --file <FILE> [ARGS]...
    echo '<template>' | interpol [ARGS]...

OPTIONS:
    -f, --file      Read the template from a file
    -c, --config    Settings file (TOML)
    --raw           Pass every argument as a string
    --check         Validate only, list placeholder indices
    --reverse       Reverse the formatted output
    --syntax        Show template syntax reference
    -v, --verbose   Enable debug logging
    -h, --help      Print help

QUICK START:
    interpol 'Hello {{1}}, you are {{2}}' Denis 3.0

prints "Hello Denis, you are 3". Run --syntax for the template rules."#
    );
}

fn print_syntax() {
    println!(
        r#"INTERPOL TEMPLATE SYNTAX
========================

PLACEHOLDERS
------------
{{N}}       Replaced by the N-th argument, counting from 1
          {{1}}{{2}} and repeated/reordered use ({{2}} {{1}} {{2}}) are fine

Everything outside braces is copied verbatim. There is no escape for
literal braces.

ARGUMENTS
---------
true, false     boolean          rendered as true / false
42, -7          integer          rendered in decimal
3.0, 2.50       float            shortest form: 3, 2.5
anything else   string           rendered unchanged
(use --raw to treat every argument as a string)

ERRORS
------
{{{{1}}}}       nested braces
}}          unmatched closing brace
{{}}         empty braces
{{1a}}       non-digit character in braces
{{0}}, {{9}}   invalid argument index (out of range)
{{1         unclosed brace

SETTINGS (--config FILE)
------------------------
[arguments]
infer_types = true

[diagnostics]
color = false
source_name = "template""#
    );
}
