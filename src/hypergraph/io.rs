// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ASCII edge-list file format.
//!
//! One edge per line, each a whitespace-separated list of nonnegative
//! vertex indices. The vertex count is inferred as one past the largest
//! index seen; blank lines are ignored. Output uses the identical grammar,
//! so a result file can be fed back in as an input.

use crate::bits::IndexSet;
use crate::error::{Error, Result};
use crate::hypergraph::Hypergraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

impl FromStr for Hypergraph {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut max_vert: Option<usize> = None;

        for (line_idx, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let v: usize = token.parse().map_err(|_| Error::InvalidVertex {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;
                max_vert = Some(max_vert.map_or(v, |m| m.max(v)));
                row.push(v);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let num_verts = max_vert.map_or(0, |m| m + 1);
        let mut h = Hypergraph::new(num_verts);
        for row in rows {
            h.add_edge(IndexSet::from_indices(num_verts, &row));
        }
        Ok(h)
    }
}

impl Hypergraph {
    /// Load a hypergraph from an edge-list file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        text.parse()
    }

    /// Write the edges to `out`, one line per edge, indices ascending.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        for edge in self.edges() {
            writeln!(out, "{}", edge)?;
        }
        Ok(())
    }

    /// Write the edges to a file in the edge-list format.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let map_err = |source| Error::Io {
            path: path.to_owned(),
            source,
        };
        let file = File::create(path).map_err(map_err)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out).map_err(map_err)?;
        out.flush().map_err(map_err)
    }
}
