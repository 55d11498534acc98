//! gridform CLI - fixed-layout grid form renderer

mod reference;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use gridform::{
    load_content, load_layout, load_theme, ContentMap, Document, DocumentSpec, JsonFormat,
    LayoutError, RenderOptions, Theme,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "gridform")]
#[command(version)]
#[command(about = "Render fixed-layout grid forms to HTML, Markdown, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the form comes from.
#[derive(Args, Default)]
struct InputArgs {
    /// Layout JSON file (built-in lesson plan if not specified)
    #[arg(short, long, value_name = "FILE", env = "GRIDFORM_LAYOUT")]
    layout: Option<PathBuf>,

    /// Content JSON file mapping keys to text
    #[arg(short, long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Theme JSON file overriding style tokens
    #[arg(short, long, value_name = "FILE", env = "GRIDFORM_THEME")]
    theme: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the form to all formats (HTML, Markdown, text, JSON)
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render the form to an HTML table
    Html {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap the table in a complete HTML page
        #[arg(short, long)]
        standalone: bool,
    },

    /// Render the form to Markdown
    #[command(alias = "md")]
    Markdown {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Table rendering mode
        #[arg(long, value_enum, default_value = "markdown")]
        table_mode: TableMode,
    },

    /// Render the form to plain text
    Text {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Serialize the built form to JSON
    Json {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show form statistics
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate a layout without rendering it
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the built-in lesson plan layout and content as JSON
    Sample {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// Standard Markdown tables
    Markdown,
    /// HTML tables for merged cells
    Html,
}

impl From<TableMode> for gridform::TableFallback {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Markdown => gridform::TableFallback::Markdown,
            TableMode::Html => gridform::TableFallback::Html,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            standalone,
        }) => cmd_html(&input, output.as_deref(), standalone),
        Some(Commands::Markdown {
            input,
            output,
            table_mode,
        }) => cmd_markdown(&input, output.as_deref(), table_mode),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Sample { output }) => cmd_sample(output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: gridform <COMMAND> [--layout FILE]".yellow());
            println!("       gridform --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Resolve the layout, content and theme named on the command line.
fn load_input(input: &InputArgs) -> CliResult<(DocumentSpec, ContentMap, Theme)> {
    let (spec, mut content) = match input.layout {
        Some(ref path) => (load_layout(path)?, ContentMap::new()),
        None => (reference::lesson_plan(), reference::lesson_content()),
    };

    if let Some(ref path) = input.content {
        content.merge(load_content(path)?);
    }

    let theme = match input.theme {
        Some(ref path) => load_theme(path)?,
        None => Theme::default(),
    };

    Ok((spec, content, theme))
}

fn build(input: &InputArgs) -> CliResult<(Document, RenderOptions)> {
    let (spec, content, theme) = load_input(input)?;
    let doc = spec.build(&content)?;
    Ok((doc, RenderOptions::new().with_theme(theme)))
}

fn emit(text: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn cmd_convert(input: &InputArgs, output: Option<&Path>) -> CliResult<()> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input
            .layout
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lesson_plan".to_string());
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Building form...");
    let (doc, options) = build(input)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let html = gridform::render::to_html(&doc, &options.clone().with_standalone(true))?;
    fs::write(output_dir.join("form.html"), &html)?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    let markdown = gridform::render::to_markdown(&doc, &options)?;
    fs::write(output_dir.join("form.md"), &markdown)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = gridform::render::to_text(&doc, &options)?;
    fs::write(output_dir.join("form.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = gridform::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("form.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{} {}", "Output files:".green().bold(), output_dir.display());
    println!("  {} form.html", "├─".dimmed());
    println!("  {} form.md", "├─".dimmed());
    println!("  {} form.txt", "├─".dimmed());
    println!("  {} form.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(input: &InputArgs, output: Option<&Path>, standalone: bool) -> CliResult<()> {
    let (doc, options) = build(input)?;
    let html = gridform::render::to_html(&doc, &options.with_standalone(standalone))?;
    emit(&html, output)
}

fn cmd_markdown(input: &InputArgs, output: Option<&Path>, table_mode: TableMode) -> CliResult<()> {
    let (doc, options) = build(input)?;
    let markdown =
        gridform::render::to_markdown(&doc, &options.with_table_fallback(table_mode.into()))?;
    emit(&markdown, output)
}

fn cmd_text(input: &InputArgs, output: Option<&Path>) -> CliResult<()> {
    let (doc, options) = build(input)?;
    let text = gridform::render::to_text(&doc, &options)?;
    emit(&text, output)
}

fn cmd_json(input: &InputArgs, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let (doc, _) = build(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = gridform::render::to_json(&doc, format)?;
    emit(&json, output)
}

fn cmd_info(input: &InputArgs) -> CliResult<()> {
    let (doc, _) = build(input)?;
    let stats = doc.stats();

    println!("{}", "Form Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    match input.layout {
        Some(ref path) => println!("{}: {}", "Layout".bold(), path.display()),
        None => println!("{}: built-in lesson plan", "Layout".bold()),
    }
    if let Some(ref banner) = doc.banner {
        println!("{}: {}", "Banner".bold(), banner);
    }
    println!("{}: {}", "Columns".bold(), stats.column_count);
    println!("{}: {}", "Sections".bold(), stats.section_count);

    println!();
    println!("{}", "Grid Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Rows".bold(), stats.row_count);
    println!("{}: {}", "Spacer rows".bold(), stats.spacer_row_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
    println!("{}: {}", "Merged cells".bold(), stats.merged_cell_count);
    println!("{}: {}", "Blank cells".bold(), stats.blank_cell_count);

    for (i, section) in doc.sections.iter().enumerate() {
        println!(
            "  {} {} ({} rows)",
            format!("[{}]", i).dimmed(),
            section.title.as_deref().unwrap_or("(untitled)"),
            section.row_count()
        );
    }

    Ok(())
}

fn cmd_check(input: &InputArgs) -> CliResult<()> {
    let (spec, content, theme) = load_input(input)?;
    theme.validate()?;

    match spec.build(&content) {
        Ok(doc) => {
            println!(
                "{} {} sections, {} rows, {} columns",
                "OK".green().bold(),
                doc.section_count(),
                doc.row_count(),
                doc.column_count
            );
            Ok(())
        }
        Err(gridform::Error::Layout(e)) => {
            print_layout_error(&e);
            Err(gridform::Error::Layout(e).into())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_layout_error(e: &LayoutError) {
    println!("{}", "Layout check failed".red().bold());
    println!("{}: {}", "Section".bold(), e.section());
    println!("{}: {}", "Row".bold(), e.row());
    if let Some(deficit) = e.deficit() {
        println!("{}: {} columns short", "Deficit".bold(), deficit);
    }
    if let Some(surplus) = e.surplus() {
        println!("{}: {} columns over", "Surplus".bold(), surplus);
    }
}

fn cmd_sample(output: Option<&Path>) -> CliResult<()> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let layout = reference::lesson_plan().to_json()?;
    fs::write(output_dir.join("layout.json"), layout)?;

    let content = serde_json::to_string_pretty(&reference::lesson_content())?;
    fs::write(output_dir.join("content.json"), content)?;

    println!("{} {}", "Wrote".green(), output_dir.join("layout.json").display());
    println!("{} {}", "Wrote".green(), output_dir.join("content.json").display());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "gridform".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Fixed-layout grid form renderer");
    println!();
    println!("License: MIT");
}
