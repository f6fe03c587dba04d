//! Layered settings for `celgen`: defaults, optional TOML file, `CELGEN_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use celmap_rs::prelude::*;
use clap::ValueEnum;
use config::{Config, Environment};
use serde::Deserialize;

/// Output format of the generated artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Rust module with one constant array per level
	#[default]
	Rust,
	/// JSON array of level tables
	Json,
}

impl OutputFormat {
	/// Returns the emitter for this format
	pub fn emitter(self, pretty: bool) -> Box<dyn Emitter> {
		match self {
			Self::Rust => Box::new(RustSourceEmitter::new()),
			Self::Json if pretty => Box::new(JsonEmitter::pretty()),
			Self::Json => Box::new(JsonEmitter::new()),
		}
	}
}

/// Resolved generator settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Extracted game archive directory
	pub archive_dir: PathBuf,
	/// Levels to process, in output order
	pub levels: Vec<String>,
	/// Output format
	pub format: OutputFormat,
	/// Output file
	pub output: PathBuf,
	/// Frame type assigned to undeclared frames; holes are rejected if unset
	pub fill_holes: Option<u8>,
	/// Indent JSON output
	pub pretty: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			archive_dir: PathBuf::from("diabdat"),
			levels: DEFAULT_LEVELS.iter().map(ToString::to_string).collect(),
			format: OutputFormat::Rust,
			output: PathBuf::from("frame_types.rs"),
			fill_holes: None,
			pretty: false,
		}
	}
}

impl Settings {
	/// Loads settings from an optional TOML file and the environment
	pub fn load(config_file: Option<&Path>) -> Result<Self> {
		let mut builder = Config::builder();
		if let Some(path) = config_file {
			builder = builder.add_source(config::File::from(path).required(true));
		}
		builder = builder.add_source(
			Environment::with_prefix("CELGEN")
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key("levels"),
		);

		let settings: Self = builder
			.build()
			.and_then(Config::try_deserialize)
			.context("Failed to load celgen settings")?;
		Ok(settings)
	}

	/// Returns the hole policy selected by `fill_holes`
	pub fn hole_policy(&self) -> Result<HolePolicy> {
		match self.fill_holes {
			None => Ok(HolePolicy::Reject),
			Some(value) => {
				let frame_type = FrameType::from_u8(value).context("Invalid `fill_holes` value")?;
				Ok(HolePolicy::Fill(frame_type))
			}
		}
	}
}
