//! Coursegraph CLI - prerequisite DAG validator and Mermaid generator

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use coursegraph::config::{Direction, RenderConfig};
use coursegraph::error::{FixSuggestion, GraphError};
use coursegraph::{write_diagram, CourseGraph, MermaidRenderer};

#[derive(Parser)]
#[command(name = "coursegraph")]
#[command(about = "Validate course prerequisites as a DAG and emit a Mermaid diagram")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/coursegraph/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Without a subcommand, prompts for a CSV file and renders it
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a prerequisite CSV and write its Mermaid diagram
    Render {
        /// Path to the CSV file (header row, then prereq,course rows)
        file: PathBuf,

        /// Output file (default: graph.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Diagram title
        #[arg(long)]
        title: Option<String>,

        /// Orientation: TD (top-down) or LR (left-right)
        #[arg(short, long)]
        direction: Option<Direction>,

        /// Print the diagram instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Validate a prerequisite CSV (no output file)
    Validate {
        /// Path to the CSV file
        file: PathBuf,
    },
}

fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the user-facing lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => {
            let stdin = io::stdin();
            let file = prompt_for_file(&mut stdin.lock(), &mut io::stdout())
                .context("Failed to read file name")?;
            match file {
                Some(file) => render(&file, &config, false),
                None => println!("{} No line found", "Validation Error:".red().bold()),
            }
        }
        Some(Commands::Render {
            file,
            output,
            title,
            direction,
            stdout,
        }) => {
            let mut config = config;
            if let Some(o) = output {
                config.output = o;
            }
            if let Some(t) = title {
                config.title = t;
            }
            if let Some(d) = direction {
                config.direction = d;
            }
            render(&file, &config, stdout);
        }
        Some(Commands::Validate { file }) => {
            if let Some(graph) = load_validated(&file) {
                println!("{} '{}' is a valid DAG", "✓".green(), file.display());
                println!("  Courses: {}", graph.len());
                println!("  Edges: {}", graph.edge_count());
            }
        }
    }

    Ok(())
}

/// Config file → environment, in increasing priority. CLI flags are applied by the caller.
fn load_config(path: Option<&Path>) -> anyhow::Result<RenderConfig> {
    let config = match path {
        Some(path) => RenderConfig::load_from(path)?,
        None => RenderConfig::load()?,
    };
    let config = config.with_env();
    debug!(?config, "render config");
    Ok(config)
}

/// Ask for a path until it names an existing regular file. `None` on end of input.
fn prompt_for_file<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<PathBuf>> {
    loop {
        write!(out, "Enter File Name: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let path = PathBuf::from(line.trim_end_matches(['\r', '\n']));
        if !path.exists() {
            writeln!(out, "Error: File does not exist.\n")?;
        } else if !path.is_file() {
            writeln!(out, "Error: Not a file.\n")?;
        } else {
            return Ok(Some(path));
        }
    }
}

/// Read and validate. Unreadable input is reported and then fails as an empty graph.
fn load_validated(file: &Path) -> Option<CourseGraph> {
    let graph = CourseGraph::read(file).unwrap_or_else(|e| {
        println!("File Error: {e}");
        CourseGraph::default()
    });

    match graph.validate(&file.display().to_string()) {
        Ok(()) => Some(graph),
        Err(e) => {
            report(&e);
            None
        }
    }
}

fn render(file: &Path, config: &RenderConfig, to_stdout: bool) {
    let Some(graph) = load_validated(file) else {
        return;
    };

    if to_stdout {
        print!("{}", MermaidRenderer::from_config(config).render(&graph));
        return;
    }

    match write_diagram(&graph, config) {
        Ok(()) => println!(
            "{} Valid DAG detected and Mermaid code saved to {}.",
            "Success:".green().bold(),
            config.output.display()
        ),
        Err(e) => report(&e),
    }
}

/// Stdout prefix for a failure that ends a run
fn error_label(err: &GraphError) -> &'static str {
    if err.is_validation() {
        "Validation Error:"
    } else {
        "Error saving file:"
    }
}

/// One user-facing line on stdout, hints on stderr
fn report(err: &GraphError) {
    println!("{} {}", error_label(err).red().bold(), err);
    if let GraphError::CycleDetected { cycle } = err {
        eprintln!("  {} {}", "Cycle:".yellow(), cycle);
    }
    if let Some(suggestion) = err.fix_suggestion() {
        eprintln!("  {} [{}] {}", "Fix:".yellow(), err.code(), suggestion);
    }
}
