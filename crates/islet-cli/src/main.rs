//! Islet CLI
//!
//! Command-line tool for working with component payloads.
//!
//! ## Usage
//!
//! ```bash
//! islet render dist/index.rsc.json
//! islet render dist/index.rsc.json --document --title Home
//! islet check dist/index.rsc.json
//! islet fetch http://localhost:8000/index.rsc.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use islet_conf::Settings;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "islet")]
#[command(about = "Islet payload utility", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// Path to an islet.toml settings file
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Render a payload file to static HTML
	Render {
		/// Payload JSON file
		#[arg(value_name = "PAYLOAD")]
		payload: PathBuf,

		/// Wrap the markup in a full HTML document
		#[arg(long)]
		document: bool,

		/// Document title (implies --document)
		#[arg(long, value_name = "TITLE")]
		title: Option<String>,
	},

	/// Validate a payload file
	Check {
		/// Payload JSON file
		#[arg(value_name = "PAYLOAD")]
		payload: PathBuf,
	},

	/// Retrieve a payload over HTTP and summarize it
	Fetch {
		/// Payload URL
		#[arg(value_name = "URL")]
		url: String,
	},
}

fn log_level(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

fn init_logging(verbosity: u8) {
	let subscriber = FmtSubscriber::builder()
		.with_max_level(log_level(verbosity))
		.with_writer(std::io::stderr)
		.without_time()
		.with_target(false)
		.finish();

	if tracing::subscriber::set_global_default(subscriber).is_err() {
		eprintln!("{}", "Warning: a log subscriber is already installed".yellow());
	}
}

async fn run(cli: Cli) -> anyhow::Result<String> {
	let settings = Settings::load(cli.config.as_deref())?;

	match cli.command {
		Commands::Render {
			payload,
			document,
			title,
		} => commands::render(&payload, document, title, &settings).await,
		Commands::Check { payload } => commands::check(&payload, &settings).await,
		Commands::Fetch { url } => commands::fetch(&url, &settings).await,
	}
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbosity);

	match run(cli).await {
		Ok(output) => println!("{}", output),
		Err(e) => {
			eprintln!("{} {:#}", "Error:".red().bold(), e);
			process::exit(1);
		}
	}
}
