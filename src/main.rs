use clap::Parser;
use quire::{Color, InvoiceDocument, InvoiceRendererBuilder, PipelineError, RenderConfig, TemplateStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Render a JSON invoice to a one-page A4 PDF.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about)]
struct Args {
    /// Invoice JSON file, or `-` to read standard input
    input: String,

    /// Where to write the PDF
    #[arg(short, long, required_unless_present = "data_uri")]
    output: Option<PathBuf>,

    /// Page template: modern or classic
    #[arg(short, long)]
    template: Option<TemplateStyle>,

    /// JSON settings file; flags given here take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the PDF as a data: URI on standard output
    #[arg(long)]
    data_uri: bool,

    /// Directory that relative image paths are resolved against
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Fetch http(s) thumbnails (needs the `remote` feature)
    #[arg(long)]
    remote_images: bool,

    /// Accent colour override, e.g. #0f766e
    #[arg(long)]
    accent: Option<Color>,

    /// Currency for invoices that do not name one
    #[arg(long)]
    currency: Option<String>,
}

fn read_input(input: &str) -> Result<String, PipelineError> {
    if input == "-" {
        return Ok(io::read_to_string(io::stdin())?);
    }
    fs::read_to_string(input).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read invoice from '{}': {}", input, e),
        ))
    })
}

fn run(args: Args) -> Result<(), PipelineError> {
    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    let mut builder = InvoiceRendererBuilder::new().with_config(config);
    if let Some(template) = args.template {
        builder = builder.with_template(template);
    }
    if let Some(dir) = args.assets {
        builder = builder.with_asset_dir(dir);
    }
    if args.remote_images {
        builder = builder.with_remote_images(true);
    }
    if let Some(color) = args.accent {
        builder = builder.with_accent_color(color);
    }
    if let Some(code) = args.currency {
        builder = builder.with_default_currency(code);
    }
    let renderer = builder.build()?;

    let doc: InvoiceDocument = serde_json::from_str(&read_input(&args.input)?)?;
    let rendered = match &args.output {
        Some(path) => renderer.render_to_file(&doc, path)?,
        None => renderer.render(&doc)?,
    };

    if args.data_uri {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", rendered.to_data_uri())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("quire: {}", e);
            ExitCode::FAILURE
        }
    }
}
