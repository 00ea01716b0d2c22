//! CLI tool for field masking and validation.
//!
//! # Usage
//!
//! ```bash
//! # List the field kinds
//! tfield kinds
//!
//! # Filter and format raw input
//! tfield format credit-card 4111111111111111
//!
//! # Validate a finished value
//! tfield check expiration-date 01/26
//!
//! # Validate partial input as if the field still had focus
//! tfield check age:65-120 2 --live
//!
//! # Replay typing into a field, one keystroke at a time
//! tfield type date 02292024 --required
//! ```
//!
//! Set `RUST_LOG=tfield=debug` to see state transitions on stderr.

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tfield::{
    filter, network::detect_network, reconstruct, validate_live_in, validate_result_in, Field,
    FieldKind, YearWindow,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tfield")]
#[command(author, version, about = "Input masking and validation for structured text fields")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported field kinds
    Kinds,

    /// Filter raw text down to canonical data
    Filter {
        /// Field kind (e.g. credit-card, age:65-120, fixed:10)
        kind: FieldKind,

        /// Raw text
        text: String,
    },

    /// Filter and reconstruct raw text
    Format {
        /// Field kind
        kind: FieldKind,

        /// Raw text
        text: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate text after filtering and reconstruction
    Check {
        /// Field kind
        kind: FieldKind,

        /// Raw text
        text: String,

        /// Run live (partial input) validation instead of result validation
        #[arg(short, long)]
        live: bool,

        /// Year the expiration window is centred on (defaults to this year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Replay typing into a field: focus, one edit per character, blur
    Type {
        /// Field kind
        kind: FieldKind,

        /// Characters to type
        text: String,

        /// Treat the field as required
        #[arg(short, long)]
        required: bool,

        /// Label to show instead of the kind's default
        #[arg(long)]
        label: Option<String>,

        /// Year the expiration window is centred on (defaults to this year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds => cmd_kinds(),
        Commands::Filter { kind, text } => cmd_filter(kind, &text),
        Commands::Format { kind, text, output } => cmd_format(kind, &text, output),
        Commands::Check {
            kind,
            text,
            live,
            year,
            output,
        } => cmd_check(kind, &text, live, window_for(year), output),
        Commands::Type {
            kind,
            text,
            required,
            label,
            year,
            output,
        } => cmd_type(kind, &text, required, label, window_for(year), output),
    }
}

fn window_for(year: Option<i32>) -> YearWindow {
    year.map_or_else(YearWindow::current, YearWindow::around)
}

fn cmd_kinds() {
    let samples = [
        FieldKind::FreeData,
        FieldKind::FixedLengthData { length: 10 },
        FieldKind::Name,
        FieldKind::Phrase,
        FieldKind::CreditCard,
        FieldKind::ExpirationDate,
        FieldKind::Cvv,
        FieldKind::Age { min: 65, max: 120 },
        FieldKind::Date,
        FieldKind::StreetNumber,
        FieldKind::StreetName,
    ];

    println!(
        "{:<17} {:<22} {:<21} {:<10} {}",
        "KIND", "LABEL", "TEMPLATE", "KEYBOARD", "PRIORITY"
    );
    for (syntax, kind) in FieldKind::NAMES.iter().zip(samples) {
        println!(
            "{:<17} {:<22} {:<21} {:<10} {:.1}",
            syntax,
            kind.label(),
            format!("\"{}\"", kind.template()),
            format!("{:?}", kind.keyboard()),
            kind.layout_priority()
        );
    }
}

fn cmd_filter(kind: FieldKind, text: &str) {
    println!("{}", filter(kind, text));
}

fn cmd_format(kind: FieldKind, text: &str, output: OutputFormat) {
    let data = filter(kind, text);
    let formatted = reconstruct(kind, &data);
    let network = match kind {
        FieldKind::CreditCard => detect_network(&data),
        _ => None,
    };

    match output {
        OutputFormat::Text => {
            println!("Data: {}", data);
            println!("Text: {}", formatted.text);
            println!("Template: \"{}\"", formatted.partial_template);
            if let Some(network) = network {
                println!("Network: {}", network);
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "kind": kind.to_string(),
                "data": data,
                "formatted": formatted,
                "network": network,
            });
            println!("{}", report);
        }
    }
}

fn cmd_check(kind: FieldKind, text: &str, live: bool, window: YearWindow, output: OutputFormat) {
    let formatted = reconstruct(kind, &filter(kind, text));
    let result = if live {
        validate_live_in(kind, &formatted.text, &window)
    } else if formatted.text.is_empty() {
        Ok(())
    } else {
        validate_result_in(kind, &formatted.text, &window)
    };

    match output {
        OutputFormat::Text => match &result {
            Ok(()) => {
                println!("Valid: yes");
                println!("Text: {}", formatted.text);
            }
            Err(e) => {
                println!("Valid: no");
                println!("Text: {}", formatted.text);
                println!("Error: {}", e);
            }
        },
        OutputFormat::Json => {
            let report = json!({
                "kind": kind.to_string(),
                "text": formatted.text,
                "valid": result.is_ok(),
                "error": result.as_ref().err().map(ToString::to_string),
            });
            println!("{}", report);
        }
    }

    std::process::exit(if result.is_ok() { 0 } else { 1 });
}

fn cmd_type(
    kind: FieldKind,
    text: &str,
    required: bool,
    label: Option<String>,
    window: YearWindow,
    output: OutputFormat,
) {
    let mut field = Field::new(kind).required(required).year_window(window);
    if let Some(label) = label {
        field = field.label(label);
    }

    if let OutputFormat::Text = output {
        println!("{} ({})", field.display_label(), kind);
    }

    field.set_focus(true);
    print_step(&field, "focus", output);

    let mut typed = String::new();
    for c in text.chars() {
        // Feed back the field's own text plus one keystroke, like a text box
        typed.clear();
        typed.push_str(field.text());
        typed.push(c);
        field.set_text(&typed);
        print_step(&field, &c.to_string(), output);
    }

    field.set_focus(false);
    print_step(&field, "blur", output);

    std::process::exit(if field.state().is_invalid() { 1 } else { 0 });
}

fn print_step(field: &Field, event: &str, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!(
                "{:<6} {:<20} {:<20} {}",
                event,
                format!("\"{}\"", field.text()),
                format!("\"{}\"", field.partial_template()),
                field.state()
            );
        }
        OutputFormat::Json => {
            let step = json!({
                "event": event,
                "text": field.text(),
                "partial_template": field.partial_template(),
                "state": field.state(),
                "message": field.state().message(),
            });
            println!("{}", step);
        }
    }
}
