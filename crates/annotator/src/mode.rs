use std::fmt;

/// A value appended to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Position of the record among the non-comment lines, starting at `0`.
    Timestamp,
    /// Random integer in `[1, max_weight]`.
    Weight,
}

/// Selects which fields are appended to each record.
///
/// The mode is chosen once per run from the integer option given on the
/// command line, see [`Mode::from_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Option `1`.
    Weights,
    /// Option `2`.
    Timestamps,
    /// Option `3`.
    TimestampsAndWeights,
    /// Any other option.
    Both,
}

impl Mode {
    /// Maps a command line option to a mode. Every integer maps to a mode,
    /// everything except `1`, `2` and `3` falls back to [`Mode::Both`].
    pub fn from_option(option: i64) -> Self {
        match option {
            1 => Mode::Weights,
            2 => Mode::Timestamps,
            3 => Mode::TimestampsAndWeights,
            _ => Mode::Both,
        }
    }

    /// The fields appended to a record, in output order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Weights => &[Field::Weight],
            Mode::Timestamps => &[Field::Timestamp],
            Mode::TimestampsAndWeights | Mode::Both => &[Field::Timestamp, Field::Weight],
        }
    }

    /// Suffix that replaces the extension of the input file name.
    pub fn suffix(self) -> &'static str {
        match self {
            Mode::Weights => ".w.txt",
            Mode::Timestamps => ".t.txt",
            Mode::TimestampsAndWeights | Mode::Both => ".t.w.csv",
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            Mode::Weights => "Appending only weights to the graph",
            Mode::Timestamps => "Appending only timestamps to the graph",
            Mode::TimestampsAndWeights | Mode::Both => {
                "Appending both weights and timestamps to the graph"
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Weights => "weights",
            Mode::Timestamps => "timestamps",
            Mode::TimestampsAndWeights => "timestamps and weights",
            Mode::Both => "both",
        };
        f.write_str(name)
    }
}
