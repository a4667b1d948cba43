use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    num::NonZeroU64,
    path::{Path, PathBuf},
    time::Instant,
};

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{line::annotate_line, mode::Mode, Error};

/// Number of characters stripped from the input file name.
const EXTENSION_LEN: usize = 4;

/// The result of annotating an edge list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// Path of the written file.
    pub output: PathBuf,
    /// Number of records written, one per non-comment input line.
    pub records: u64,
    /// Number of comment lines dropped.
    pub comments: u64,
}

/// Annotates edge list files with a fixed mode and maximum weight.
///
/// Each call to [`Annotator::annotate`] creates a fresh random number
/// generator, seeded from [`Annotator::seed`] if one is given and from
/// operating system entropy otherwise.
///
/// # Example
///
/// ```no_run
/// use std::num::NonZeroU64;
///
/// use edge_annotator::{Annotator, Mode};
///
/// let annotated = Annotator::new(Mode::from_option(2), NonZeroU64::new(10).unwrap())
///     .annotate("edges.txt")?;
///
/// assert_eq!(annotated.output.to_str(), Some("edges.t.txt"));
/// # Ok::<(), edge_annotator::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Annotator {
    mode: Mode,
    max_weight: NonZeroU64,
    seed: Option<u64>,
}

impl Annotator {
    pub fn new(mode: Mode, max_weight: NonZeroU64) -> Self {
        Self {
            mode,
            max_weight,
            seed: None,
        }
    }

    /// Makes the drawn weights reproducible.
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// The mode records are annotated with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn annotate<P: AsRef<Path>>(&self, path: P) -> Result<Annotated, Error> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        annotate(path, self.mode, self.max_weight, &mut rng)
    }
}

/// Derives the output path by replacing the last four characters of the
/// input file name with the suffix of the given mode.
///
/// Whatever the last four characters are, they are removed. An input named
/// `edges.el` therefore yields `edges.w.txt` for [`Mode::Weights`], while
/// `edges.json` yields `edges..w.txt`.
///
/// # Errors
///
/// Fails if the path is not valid UTF-8 or shorter than four characters.
pub fn output_path(input: &Path, mode: Mode) -> Result<PathBuf, Error> {
    let invalid = |reason| Error::InvalidInputPath {
        path: input.to_path_buf(),
        reason,
    };

    let name = input.to_str().ok_or_else(|| invalid("not valid UTF-8"))?;
    let keep = name
        .chars()
        .count()
        .checked_sub(EXTENSION_LEN)
        .ok_or_else(|| invalid("too short to strip a 4-character extension"))?;

    let mut output = name.chars().take(keep).collect::<String>();
    output.push_str(mode.suffix());

    Ok(PathBuf::from(output))
}

/// Reads the edge list at `path`, annotates every non-comment line and
/// writes the records to the path returned by [`output_path`].
///
/// The output file is created only after the input file has been opened.
/// An existing output file is overwritten. If reading or writing fails
/// midway, the partially written output is left in place.
pub fn annotate<P, R>(
    path: P,
    mode: Mode,
    max_weight: NonZeroU64,
    rng: &mut R,
) -> Result<Annotated, Error>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let input = path.as_ref();
    let output = output_path(input, mode)?;

    let input_error = |source| Error::Input {
        path: input.to_path_buf(),
        source,
    };
    let output_error = |source| Error::Output {
        path: output.clone(),
        source,
    };

    info!("Annotating {input:?} with {mode} (max weight = {max_weight})");
    debug!("Writing records to {output:?}");

    let reader = BufReader::new(File::open(input).map_err(input_error)?);
    let mut writer = BufWriter::new(File::create(&output).map_err(output_error)?);

    let mut timestamp = 0;
    let mut records = 0;
    let mut comments = 0;

    for line in reader.lines() {
        let line = line.map_err(input_error)?;
        let (record, next) = annotate_line(&line, mode, max_weight, rng, timestamp);
        timestamp = next;

        match record {
            Some(record) => {
                writeln!(writer, "{record}").map_err(output_error)?;
                records += 1;
            }
            None => comments += 1,
        }
    }

    writer.flush().map_err(output_error)?;

    info!(
        "Wrote {} records to {:?} in {:?} ({} comment lines dropped)",
        records,
        output,
        start.elapsed(),
        comments
    );

    Ok(Annotated {
        output,
        records,
        comments,
    })
}
