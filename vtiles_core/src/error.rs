//! Typed failure kinds of a pyramid run.
//!
//! Every function returns `anyhow::Result`; the origin of a failure wraps one of the
//! [`PyramidError`] variants so that callers can still tell argument, I/O, rendering and
//! compression failures apart after context has been attached.

use std::path::PathBuf;
use thiserror::Error;

/// The error raised at the origin of a failed pyramid run.
#[derive(Debug, Error)]
pub enum PyramidError {
	/// A command line token is missing, malformed or out of bounds.
	#[error("{0}")]
	InvalidArgument(String),

	/// A directory or tile file could not be created or written.
	#[error("cannot write {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The renderer (stylesheet, plugins or tile encoding) failed.
	#[error("{0}")]
	Render(String),

	/// The deflate backend failed or compressed data could not be decoded.
	#[error("{0}")]
	Compression(String),
}

/// The kind of a [`PyramidError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	InvalidArgument,
	Io,
	Render,
	Compression,
}

impl PyramidError {
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		PyramidError::InvalidArgument(message.into())
	}

	pub fn render(message: impl Into<String>) -> Self {
		PyramidError::Render(message.into())
	}

	pub fn compression(message: impl Into<String>) -> Self {
		PyramidError::Compression(message.into())
	}

	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		PyramidError::Io {
			path: path.into(),
			source,
		}
	}

	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		match self {
			PyramidError::InvalidArgument(_) => ErrorKind::InvalidArgument,
			PyramidError::Io { .. } => ErrorKind::Io,
			PyramidError::Render(_) => ErrorKind::Render,
			PyramidError::Compression(_) => ErrorKind::Compression,
		}
	}

	/// Finds the first [`PyramidError`] in the chain of `error` and returns its kind.
	#[must_use]
	pub fn kind_of(error: &anyhow::Error) -> Option<ErrorKind> {
		error
			.chain()
			.find_map(|cause| cause.downcast_ref::<PyramidError>())
			.map(PyramidError::kind)
	}
}
