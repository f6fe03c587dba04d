//! CEL frame-type table generator.
//!
//! Reads the MIN files of the configured levels from an extracted game
//! archive and generates the tables mapping every CEL frame number to the
//! algorithm that decodes it.
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate frame_types.rs for l1, l2, l3, l4 and town from diabdat/
//! cargo run --bin celgen -- generate
//!
//! # Pick levels and write JSON to stdout
//! cargo run --bin celgen -- generate -a extracted/ -l town -l l1 --format json --stdout
//!
//! # Use a settings file
//! cargo run --bin celgen -- generate --config celgen.toml
//!
//! # Dump the pieces of one level
//! cargo run --bin celgen -- inspect l4 --pieces
//! ```

mod settings;

use std::{
	fs,
	io::{self, Write},
	path::PathBuf,
};

use anyhow::{Context, Result};
use celmap_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::settings::{OutputFormat, Settings};

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_filter = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

	match cli.command {
		Command::Generate(args) => run_generate(args),
		Command::Inspect(args) => run_inspect(args),
	}
}

#[derive(Parser)]
#[command(name = "celgen")]
#[command(author = "celmap-rs project")]
#[command(version)]
#[command(about = "Generate CEL frame-type tables from level MIN files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,

	/// Show debug output
	#[arg(short, long, global = true, default_value_t = false)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Command {
	/// Generate the frame-type tables of all configured levels
	Generate(GenerateArgs),
	/// Show the pieces and frame types of a single level
	Inspect(InspectArgs),
}

#[derive(Args)]
struct GenerateArgs {
	/// Settings file (TOML)
	#[arg(short, long, value_name = "FILE", env = "CELGEN_CONFIG")]
	config: Option<PathBuf>,

	/// Extracted game archive directory
	#[arg(short, long, value_name = "DIR")]
	archive_dir: Option<PathBuf>,

	/// Level to process; repeat for several, output keeps this order
	#[arg(short, long = "level", value_name = "NAME")]
	levels: Vec<String>,

	/// Output format
	#[arg(short, long, value_enum)]
	format: Option<OutputFormat>,

	/// Output file
	#[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
	output: Option<PathBuf>,

	/// Write to stdout instead of a file
	#[arg(long, default_value_t = false)]
	stdout: bool,

	/// Assign this frame type (0-6) to undeclared frames instead of failing
	#[arg(long, value_name = "TYPE", value_parser = clap::value_parser!(u8).range(0..=6))]
	fill_holes: Option<u8>,

	/// Indent JSON output
	#[arg(long, default_value_t = false)]
	pretty: bool,
}

impl GenerateArgs {
	/// Overrides loaded settings with the flags given on the command line
	fn apply(&self, settings: &mut Settings) {
		if let Some(dir) = &self.archive_dir {
			settings.archive_dir = dir.clone();
		}
		if !self.levels.is_empty() {
			settings.levels = self.levels.clone();
		}
		if let Some(format) = self.format {
			settings.format = format;
		}
		if let Some(output) = &self.output {
			settings.output = output.clone();
		}
		if self.fill_holes.is_some() {
			settings.fill_holes = self.fill_holes;
		}
		settings.pretty |= self.pretty;
	}
}

#[derive(Args)]
struct InspectArgs {
	/// Level name, e.g. "l1" or "town"
	#[arg(value_name = "LEVEL")]
	level: String,

	/// Extracted game archive directory
	#[arg(short, long, value_name = "DIR", default_value = "diabdat")]
	archive_dir: PathBuf,

	/// Print every piece
	#[arg(short, long, default_value_t = false)]
	pieces: bool,
}

fn run_generate(args: GenerateArgs) -> Result<()> {
	let mut settings = Settings::load(args.config.as_deref())?;
	args.apply(&mut settings);

	let aggregator = Aggregator::new(DirLookup::new(&settings.archive_dir))
		.with_hole_policy(settings.hole_policy()?);
	let result = aggregator.aggregate(&settings.levels).with_context(|| {
		format!("Failed to generate frame types from {}", settings.archive_dir.display())
	})?;

	for mapping in &result {
		let counts = mapping.type_counts();
		info!("{:>6}: {:>5} frames, types {:?}", mapping.resource_name(), mapping.len(), counts);
	}

	// Render fully before touching the output so a failure leaves nothing behind
	let rendered = settings.format.emitter(settings.pretty).render(&result)?;

	if args.stdout {
		io::stdout().lock().write_all(&rendered).context("Failed to write to stdout")?;
	} else {
		fs::write(&settings.output, &rendered)
			.with_context(|| format!("Failed to write {}", settings.output.display()))?;
		info!("Wrote {} ({} bytes)", settings.output.display(), rendered.len());
	}

	Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let reader = MinReader::new(DirLookup::new(&args.archive_dir));
	let size = PieceSize::for_level(&args.level);
	let pieces = reader
		.read_with_size(&args.level, size)
		.with_context(|| format!("Failed to read level '{}'", args.level))?;

	let block_count: usize = pieces.iter().map(Piece::block_count).sum();
	println!("Level: {}", args.level);
	println!("Pieces: {} ({})", pieces.len(), size);
	println!("Blocks: {block_count}");

	if args.pieces {
		for (index, piece) in pieces.iter().enumerate() {
			println!("  #{index:04}: {piece}");
		}
	}

	match FrameTypeMapping::reduce(args.level.as_str(), &pieces) {
		Ok(mapping) => {
			println!("Frames: {}", mapping.len());
			for (frame_type, count) in FrameType::ALL.iter().zip(mapping.type_counts()) {
				println!("  {frame_type}: {count}");
			}
		}
		Err(err) => println!("Frame table: {err}"),
	}

	Ok(())
}
