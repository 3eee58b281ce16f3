// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cmd::commands::{self, NavFormat};
use diagnostics::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "starter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log every page and asset written (same as STARTER_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ConfigArgs {
    /// Site configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page, copy static assets and write manifest.json
    Build {
        /// Directory to write the site into
        output_dir: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
        /// Fail without writing anything if a navigation link is broken
        #[arg(long)]
        strict: bool,
    },
    /// Print the HTML of one page, e.g. `/docs`
    Render {
        path: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the docs navigation tree
    Nav {
        /// One line per item, as shown in the mobile grid
        #[arg(long, conflicts_with = "json")]
        flat: bool,
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify every navigation link points at an existing page section
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    diagnostics::init_with(cli.verbose.then_some(LogLevel::Debug));

    let print = |text: &str| print!("{}", text);

    match &cli.command {
        Commands::Build {
            output_dir,
            config,
            strict,
        } => commands::build_command(config.config.as_deref(), output_dir, *strict, print),
        Commands::Render { path, config } => {
            commands::render_command(config.config.as_deref(), path, print)
        }
        Commands::Nav { flat, json } => {
            let format = NavFormat::from_flags(*flat, *json);
            commands::nav_command(&sitegen::DOCS_NAVIGATION, format, print)
        }
        Commands::Check { config } => commands::check_command(
            config.config.as_deref(),
            &sitegen::DOCS_NAVIGATION,
            print,
        ),
    }
}
