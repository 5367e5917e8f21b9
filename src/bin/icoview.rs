use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use icoview::{ExportOptions, IconFile, IconSize, Selection};
use image::Rgb;
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  icoview list app.ico\n  icoview list app.ico --json\n  icoview export app.ico --size 32x32 --out app_32.png\n  icoview export app.ico --index 0 --out small.jpg --background '#000000' --quality 90\n  icoview validate app.ico\n  icoview completions zsh > _icoview";

#[derive(Debug, Parser)]
#[command(
    name = "icoview",
    version,
    about = "List, validate, and export the frames of Windows .ico files",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show debug logging output.
    #[arg(long)]
    verbose: bool,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the entries of an icon, smallest first.
    #[command(
        about = "List icon entries",
        visible_alias = "info",
        visible_alias = "probe",
        after_help = "Examples:\n  icoview list app.ico\n  icoview list app.ico --json"
    )]
    List {
        /// Input .ico path.
        input: PathBuf,

        /// Output the listing as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export one entry to PNG or JPEG.
    #[command(
        about = "Export one icon entry",
        after_help = "Examples:\n  icoview export app.ico --size 48x48 --out app_48.png\n  icoview export app.ico --index 2 --out app.jpg --quality 80"
    )]
    Export {
        /// Input .ico path.
        input: PathBuf,
        /// Output file; the extension (.png, .jpg, .jpeg) picks the format.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Entry to export by size (e.g. 32x32).
        #[arg(long, conflicts_with = "index")]
        size: Option<String>,
        /// Entry to export by position in the listing.
        #[arg(long)]
        index: Option<usize>,
        /// JPEG background colour as #RRGGBB.
        #[arg(long, default_value = "#ffffff")]
        background: String,
        /// JPEG quality (1-100).
        #[arg(long, default_value_t = icoview::DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },

    /// Validate an icon and print a report.
    #[command(about = "Validate icon file", after_help = "Examples:\n  icoview validate app.ico")]
    Validate {
        /// Input .ico path.
        input: PathBuf,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn parse_background(value: &str) -> Option<Rgb<u8>> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

fn init_logging(global: &GlobalOptions) {
    let default_level = if global.verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if global.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Refuse to replace an existing export unless `--overwrite` was given.
fn check_output_path(out: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !out.exists() {
        return Ok(());
    }
    if !overwrite {
        return Err(format!(
            "{} already exists; pass --overwrite to replace the exported frame",
            out.display()
        )
        .into());
    }
    eprintln!(
        "{} {}",
        "warning:".yellow().bold(),
        format!("replacing existing frame at {}", out.display()).yellow()
    );
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match cli.command {
        Commands::List { input, json } => {
            let icons = IconFile::open(&input)?.icon_set()?;
            if json {
                let payload: Vec<_> = icons
                    .iter()
                    .enumerate()
                    .map(|(index, image)| {
                        json!({
                            "index": index,
                            "label": image.label(),
                            "width": image.width(),
                            "height": image.height(),
                            "byte_length": image.byte_length(),
                            "source": image.source().as_str(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if icons.is_empty() {
                println!("{}", "no entries".yellow());
            } else {
                for (index, image) in icons.iter().enumerate() {
                    println!(
                        "{index:>3}  {:<9} {:>8} bytes  {}",
                        image.label(),
                        image.byte_length(),
                        image.source().as_str().dimmed()
                    );
                }
            }
        }
        Commands::Export {
            input,
            out,
            size,
            index,
            background,
            quality,
        } => {
            let background = parse_background(&background)
                .ok_or(format!("unsupported --background colour: {background}"))?;
            let options = ExportOptions::new()
                .with_background(background)
                .with_quality(quality);

            let mut selection = Selection::new();
            selection.open(&input)?;
            if let Some(size) = size {
                selection.select_size(size.parse::<IconSize>()?)?;
            } else if let Some(index) = index {
                selection.select(index)?;
            }

            let out = out.unwrap_or_else(|| {
                input
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(selection.suggested_file_name())
            });
            check_output_path(&out, cli.global.overwrite)?;
            selection.export_current(&out, &options)?;
            println!("{} {}", "saved".green().bold(), out.display());
        }
        Commands::Validate { input } => {
            let report = IconFile::open(&input)?.validate();
            print!("{report}");
            if !report.is_valid() {
                return Err(format!("{} has no frames to show", input.display()).into());
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "icoview", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
