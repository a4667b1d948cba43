use std::num::NonZeroU64;

use itertools::Itertools;
use log::trace;
use rand::Rng;

use crate::mode::{Field, Mode};

/// Annotates a single line of an edge list.
///
/// `timestamp` is the current value of the sequence counter. The returned
/// tuple contains the annotated record, or `None` if the line is a comment,
/// and the counter value for the next line.
///
/// Any run of whitespace in the line becomes a single comma, so the record
/// is comma-separated regardless of the input delimiter. This includes
/// spaces within tokens, which cannot occur after splitting on whitespace.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU64;
///
/// use edge_annotator::{annotate_line, Mode};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let max_weight = NonZeroU64::new(1).unwrap();
///
/// let (record, next) = annotate_line("0\t1", Mode::Both, max_weight, &mut rng, 0);
///
/// assert_eq!(record.as_deref(), Some("0,1,0,1"));
/// assert_eq!(next, 1);
/// ```
pub fn annotate_line<R>(
    line: &str,
    mode: Mode,
    max_weight: NonZeroU64,
    rng: &mut R,
    timestamp: u64,
) -> (Option<String>, u64)
where
    R: Rng + ?Sized,
{
    if line.starts_with('#') {
        return (None, timestamp);
    }

    let mut record = line.split_whitespace().join(" ");

    for field in mode.fields() {
        let value = match field {
            Field::Timestamp => timestamp,
            Field::Weight => draw_weight(rng, max_weight),
        };
        record.push(',');
        record.push_str(&value.to_string());
    }

    let record = record.replace(' ', ",");

    trace!("record {timestamp}: {record}");

    (Some(record), timestamp + 1)
}

/// Draws a weight uniformly from `[1, max_weight]`.
pub(crate) fn draw_weight<R: Rng + ?Sized>(rng: &mut R, max_weight: NonZeroU64) -> u64 {
    rng.gen_range(1..=max_weight.get())
}
