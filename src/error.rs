// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for hypergraph loading and search setup.
//!
//! Only driver-facing failures are represented here: unreadable files,
//! malformed edge lines, and worker-pool construction. Violations of the
//! search engines' internal preconditions are programmer errors and abort
//! with an assertion message instead.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by hypergraph I/O and `transversal`.
#[derive(Debug, Error)]
pub enum Error {
    /// The hypergraph file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An edge line contained a token that is not a nonnegative vertex index.
    #[error("line {line}: {token:?} is not a vertex index")]
    InvalidVertex { line: usize, token: String },

    /// The worker pool for a parallel search could not be built.
    #[error("could not build the worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
