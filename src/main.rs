//! blockmail - email template renderer and importer

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use blockmail::export::{Exporter, HtmlConfig, HtmlExporter, JsonConfig, JsonExporter};
use blockmail::{Background, Document, ElementKind, Format, Template, parse_bytes};

#[derive(Parser)]
#[command(name = "blockmail")]
#[command(version, about = "Render and re-import block email templates", long_about = None)]
#[command(after_help = "EXAMPLES:
    blockmail render news.json -o news.html     Render a template to email HTML
    blockmail import news.html -o news.json     Rebuild a template from its HTML
    blockmail background 'linear-gradient(red, blue)'
    blockmail info news.html                    Summarize a template")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a JSON template to HTML
    Render {
        /// Template file
        #[arg(value_name = "TEMPLATE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Base URL of the social icon set
        #[arg(long, value_name = "URL")]
        icon_base: Option<String>,
    },

    /// Rebuild a JSON template from rendered HTML
    Import {
        /// HTML file
        #[arg(value_name = "HTML")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write JSON without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Validate and normalize a background value
    Background {
        /// A color or linear-gradient(...)
        value: String,
    },

    /// Show a summary of a template or rendered HTML file
    Info {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Render {
            input,
            output,
            title,
            icon_base,
        } => render(&input, output.as_deref(), title, icon_base),
        Command::Import {
            input,
            output,
            compact,
        } => import(&input, output.as_deref(), compact),
        Command::Background { value } => return background(&value),
        Command::Info { input } => show_info(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Run `write` against `output`, or stdout when no file is given.
fn write_output(
    output: Option<&Path>,
    write: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> blockmail::Result<()> {
    match output {
        Some(path) => {
            let mut file = io::BufWriter::new(fs::File::create(path)?);
            write(&mut file)?;
            file.flush()?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
        }
    }
    Ok(())
}

fn render(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    icon_base: Option<String>,
) -> blockmail::Result<()> {
    let doc = Template::load(input)?.into_document();

    let mut config = HtmlConfig::default();
    if let Some(title) = title {
        config = config.with_title(title);
    }
    if let Some(base) = icon_base {
        config = config.with_icon_base(base);
    }
    let exporter = HtmlExporter::with_config(config);

    write_output(output, |mut w| exporter.export(&doc, &mut w))
}

fn import(input: &Path, output: Option<&Path>, compact: bool) -> blockmail::Result<()> {
    let doc = parse_bytes(&fs::read(input)?);
    if doc.is_empty() {
        log::warn!(
            "{} has no rows; it may not have been rendered by blockmail",
            input.display()
        );
    }

    let exporter = JsonExporter::with_config(JsonConfig { pretty: !compact });
    write_output(output, |mut w| exporter.export(&doc, &mut w))
}

fn background(value: &str) -> ExitCode {
    match Background::decode(value) {
        Some(background) => {
            println!("{}", background.encode());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: not a color or linear gradient: {value:?}");
            println!("{}", Background::DEFAULT_COLOR);
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> blockmail::Result<Document> {
    match Format::from_path(path)? {
        Format::Json => Ok(Template::load(path)?.into_document()),
        Format::Html => Ok(parse_bytes(&fs::read(path)?)),
    }
}

fn show_info(path: &Path) -> blockmail::Result<()> {
    let doc = load(path)?;
    let styles = &doc.styles;

    println!("File: {}", path.display());
    println!("Width: {}px", styles.width);
    println!("Font: {} ({})", styles.font_family, styles.font_size);
    println!("Background: {}", styles.background);
    println!("Content background: {}", styles.content_background);
    println!("Rows: {}", doc.rows.len());
    println!("Columns: {}", doc.columns().count());

    let elements: Vec<_> = doc.elements().collect();
    println!("Elements: {}", elements.len());
    for kind in ElementKind::ALL {
        let count = elements.iter().filter(|e| e.kind() == kind).count();
        if count > 0 {
            println!("  {}: {count}", kind.label());
        }
    }

    let duplicates = doc.duplicate_ids();
    if !duplicates.is_empty() {
        println!("Duplicate ids: {}", duplicates.join(", "));
    }

    Ok(())
}
