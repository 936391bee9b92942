use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use line_flex::{html, FlexError, FlexResult, RenderConfig, Renderer};

#[derive(Parser, Debug)]
#[command(name = "flex-render", about = "Render LINE Flex Message JSON to HTML or Lf* markup")]
struct Args {
    /// Flex JSON files to render
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Page)]
    format: Format,

    /// Treat each input as a single component (box, text, ...) instead of a document
    #[arg(long)]
    component: bool,

    /// YAML render configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output here instead of stdout (single input only)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Standalone HTML page with generated CSS
    Page,
    /// Rendered HTML fragment only
    Fragment,
    /// Lf* component markup
    Jsx,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level(args.verbose), log_config, io::stderr());

    if args.out.is_some() && args.files.len() > 1 {
        eprintln!("--out accepts a single input file");
        process::exit(2);
    }

    let config = match &args.config {
        Some(path) => match RenderConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("✗ {}:", path.display());
                print_error(&err);
                process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };

    let mut exit_code = 0;
    for path in &args.files {
        match render_file(path, &args, &config) {
            Ok(output) => {
                if let Err(err) = emit(&output, args.out.as_deref()) {
                    eprintln!("✗ {} could not be written:", path.display());
                    print_error(&err);
                    exit_code = 1;
                    continue;
                }
                eprintln!("✓ {} rendered", path.display());
            }
            Err(err) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&err);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_file(path: &Path, args: &Args, config: &RenderConfig) -> FlexResult<String> {
    let json = fs::read_to_string(path)?;
    log::info!("rendering {} as {:?}", path.display(), args.format);

    if args.component {
        let component = line_flex::parse_component(&json)?;
        let output = match args.format {
            Format::Jsx => line_flex::generate_component_jsx(&component),
            Format::Fragment | Format::Page => {
                let fragment = Renderer::new(config)
                    .render_component(&component)
                    .map(|node| node.to_html())
                    .unwrap_or_default();
                match args.format {
                    Format::Page => html::wrap_page(&fragment, config),
                    _ => fragment,
                }
            }
        };
        return Ok(output);
    }

    let document = line_flex::parse(&json)?;
    Ok(match args.format {
        Format::Page => line_flex::render_html(&document, config),
        Format::Fragment => line_flex::render_with_config(&document, config).to_html(),
        Format::Jsx => line_flex::generate_jsx(&document),
    })
}

fn emit(output: &str, out: Option<&Path>) -> FlexResult<()> {
    match out {
        Some(path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn print_error(err: &FlexError) {
    match err {
        FlexError::Json {
            line,
            column,
            message,
        } => {
            eprintln!("  JSON error at {}:{}", line, column);
            eprintln!("    {}", message);
        }
        FlexError::InvalidContainer { kind } => {
            eprintln!("  Invalid container type: '{}'", kind);
            eprintln!("    Expected one of: flex, bubble, carousel");
        }
        FlexError::MissingType => {
            eprintln!("  Missing 'type' field at the top level");
        }
        FlexError::Config(message) => {
            eprintln!("  Config error: {}", message);
        }
        FlexError::Io(message) => {
            eprintln!("  I/O error: {}", message);
        }
    }
}
