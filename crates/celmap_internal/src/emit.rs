//! Emitters turning an [`AggregatedResult`] into a persisted artifact.
//!
//! Emitters only format; they never read resources. Output keeps the
//! resource order of the result.

use std::{collections::HashMap, io::Write};

use celmap_types::cel::{FrameType, FrameTypeMapping};

use crate::{aggregate::AggregatedResult, error::EmitError};

/// Number of frame types written per line of generated source
const VALUES_PER_LINE: usize = 16;

/// Writes an aggregated result in some output format.
pub trait Emitter {
	/// Writes `result` to `writer`
	fn emit(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<(), EmitError>;

	/// Renders `result` into a buffer
	fn render(&self, result: &AggregatedResult) -> Result<Vec<u8>, EmitError> {
		let mut buffer = Vec::new();
		self.emit(result, &mut buffer)?;
		Ok(buffer)
	}
}

/// Emits a Rust module with one `u8` constant array per resource.
///
/// ```text
/// pub const L1_FRAME_TYPES: [u8; 2] = [2, 0];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustSourceEmitter {
	generator: String,
}

impl RustSourceEmitter {
	/// Creates an emitter that names `celgen` as the generator
	pub fn new() -> Self {
		Self::with_generator("celgen")
	}

	/// Creates an emitter naming `generator` in the header comment
	pub fn with_generator(generator: impl Into<String>) -> Self {
		Self {
			generator: generator.into(),
		}
	}

	/// Returns the constant name used for a resource, e.g. `L1_FRAME_TYPES`
	pub fn const_name(resource_name: &str) -> String {
		let mut name: String = resource_name
			.chars()
			.map(|c| {
				if c.is_ascii_alphanumeric() {
					c.to_ascii_uppercase()
				} else {
					'_'
				}
			})
			.collect();
		if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
			name.insert(0, '_');
		}
		name.push_str("_FRAME_TYPES");
		name
	}

	/// Checks that every resource gets a distinct constant name
	fn check_identifiers(result: &AggregatedResult) -> Result<(), EmitError> {
		let mut seen: HashMap<String, &str> = HashMap::with_capacity(result.len());
		for resource_name in result.resource_names() {
			let name = Self::const_name(resource_name);
			if let Some(first) = seen.get(&name) {
				return Err(EmitError::DuplicateIdentifier {
					name,
					resources: ((*first).to_string(), resource_name.to_string()),
				});
			}
			seen.insert(name, resource_name);
		}
		Ok(())
	}

	fn write_mapping(
		&self,
		mapping: &FrameTypeMapping,
		writer: &mut dyn Write,
	) -> Result<(), EmitError> {
		let values = mapping.to_raw();
		writeln!(writer, "/// Frame types of `{}.cel`, indexed by frame number.", mapping.resource_name())?;
		write!(
			writer,
			"pub const {}: [u8; {}] = [",
			Self::const_name(mapping.resource_name()),
			values.len()
		)?;

		if values.len() <= VALUES_PER_LINE {
			let line: Vec<String> = values.iter().map(u8::to_string).collect();
			writeln!(writer, "{}];", line.join(", "))?;
			return Ok(());
		}

		writeln!(writer)?;
		for chunk in values.chunks(VALUES_PER_LINE) {
			let line: Vec<String> = chunk.iter().map(u8::to_string).collect();
			writeln!(writer, "\t{},", line.join(", "))?;
		}
		writeln!(writer, "];")?;
		Ok(())
	}
}

impl Default for RustSourceEmitter {
	fn default() -> Self {
		Self::new()
	}
}

impl Emitter for RustSourceEmitter {
	fn emit(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<(), EmitError> {
		Self::check_identifiers(result)?;

		writeln!(writer, "// Generated by {}; DO NOT EDIT.", self.generator)?;
		writeln!(writer, "//")?;
		writeln!(writer, "// Mappings from frame numbers to frame types for the level CEL files")?;
		let files: Vec<String> = result.resource_names().map(|name| format!("\"{name}.cel\"")).collect();
		writeln!(writer, "// {}.", files.join(", "))?;
		writeln!(writer, "//")?;
		writeln!(writer, "// Frame types select the decoder:")?;
		for frame_type in FrameType::ALL {
			writeln!(writer, "//   {}: {}", frame_type.to_u8(), frame_type.name())?;
		}

		for mapping in result {
			writeln!(writer)?;
			self.write_mapping(mapping, writer)?;
		}
		Ok(())
	}
}

/// Emits the result as a JSON array of `{ resource_name, frame_types }` objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEmitter {
	pretty: bool,
}

impl JsonEmitter {
	/// Creates an emitter writing compact JSON
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an emitter writing indented JSON
	pub fn pretty() -> Self {
		Self {
			pretty: true,
		}
	}
}

impl Emitter for JsonEmitter {
	fn emit(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<(), EmitError> {
		if self.pretty {
			serde_json::to_writer_pretty(&mut *writer, result)?;
		} else {
			serde_json::to_writer(&mut *writer, result)?;
		}
		writeln!(writer)?;
		Ok(())
	}
}
