//! A small library that prepares edge list files for graph benchmarks which
//! need weighted and/or temporal edges.
//!
//! An edge list contains one edge per line, typically `source target`
//! separated by whitespace. Lines starting with `#` are comments. The
//! annotator drops the comments, normalizes the remaining lines into
//! comma-separated records and appends a random weight, a sequential
//! timestamp, or both to every record.
//!
//! # What gets appended?
//!
//! The [`Mode`] decides which fields are appended and which suffix the
//! output file gets:
//!
//! | option | mode                             | fields              | suffix     |
//! |--------|----------------------------------|---------------------|------------|
//! | 1      | [`Mode::Weights`]                | weight              | `.w.txt`   |
//! | 2      | [`Mode::Timestamps`]             | timestamp           | `.t.txt`   |
//! | 3      | [`Mode::TimestampsAndWeights`]   | timestamp, weight   | `.t.w.csv` |
//! | other  | [`Mode::Both`]                   | timestamp, weight   | `.t.w.csv` |
//!
//! The timestamp of a record is its position among the non-comment lines of
//! the input, starting at `0`. Weights are drawn uniformly from
//! `[1, max_weight]`.
//!
//! # How to annotate a single line
//!
//! ```
//! use std::num::NonZeroU64;
//!
//! use edge_annotator::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let max_weight = NonZeroU64::new(10).unwrap();
//!
//! let (record, next) = annotate_line("1   2", Mode::Timestamps, max_weight, &mut rng, 7);
//!
//! assert_eq!(record.as_deref(), Some("1,2,7"));
//! assert_eq!(next, 8);
//!
//! let (record, next) = annotate_line("# comment", Mode::Timestamps, max_weight, &mut rng, 8);
//!
//! assert_eq!(record, None);
//! assert_eq!(next, 8);
//! ```
//!
//! # How to annotate a file
//!
//! The [`Annotator`] reads an input file and writes the annotated records to
//! a file next to it. The output name is the input name minus its last four
//! characters (the extension) followed by the suffix of the mode.
//!
//! ```no_run
//! use std::num::NonZeroU64;
//!
//! use edge_annotator::prelude::*;
//!
//! let annotated = Annotator::new(Mode::Weights, NonZeroU64::new(100).unwrap())
//!     .seed(42)
//!     .annotate("graphs/edges.txt")?;
//!
//! assert_eq!(annotated.output.to_str(), Some("graphs/edges.w.txt"));
//! # Ok::<(), edge_annotator::Error>(())
//! ```
//!
//! **Note**: Edge lines are not validated. Lines with an unexpected number of
//! fields or non-numeric node ids are annotated like any other line.

pub mod annotate;
pub mod line;
pub mod mode;
pub mod prelude;

pub use crate::annotate::annotate;
pub use crate::annotate::output_path;
pub use crate::annotate::Annotated;
pub use crate::annotate::Annotator;
pub use crate::line::annotate_line;
pub use crate::mode::Field;
pub use crate::mode::Mode;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input file name {path:?}: {reason}")]
    InvalidInputPath { path: PathBuf, reason: &'static str },
    #[error("error while reading input file {path:?}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error while writing output file {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
