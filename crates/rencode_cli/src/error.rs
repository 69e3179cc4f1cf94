use rencode::codec::RencodeError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decode or scan failure from the library.
	#[error(transparent)]
	Rencode(#[from] RencodeError),
	/// `--types` named a type the scanner does not know.
	#[error("unknown scan type: {name}")]
	UnknownType {
		/// Type name as given on the command line.
		name: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// JSON rendering failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
