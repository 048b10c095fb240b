use clap::{Parser, Subcommand};
use folio::{config, hydrate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for personal portfolio pages")]
#[command(long_about = "\
Static site generator for personal portfolio pages

Each page is a fixed shell whose sections are filled from a JSON content
document. A page whose document is missing or malformed is still written,
with its static placeholder content.

Site structure:

  site/
  ├── config.toml                      # Site config and the [[pages]] list
  ├── resume.json                      # Content for the portfolio page
  ├── glass_portfolio_content.json     # Content for the glass page
  └── assets/                          # Copied verbatim → dist/assets/
      └── resume.pdf

Page variants:
  portfolio   hero, projects, experience carousel, education, skills, resume
  glass       hero, involvements, experience timeline, education, skills

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every configured page into the output directory
    Build,
    /// Load config and content documents without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!(
                "==> Building {} → {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = hydrate::build(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            output::print_diagnostics(&report.pages);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let reports = hydrate::check(&cli.source)?;
            output::print_check_output(&reports);
            output::print_diagnostics(&reports);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
