use crate::record::Record;
use std::fmt;
use std::str::FromStr;

/// Upper limit for GC content, as a percentage
pub const MAX_GC: f64 = 100.0;
/// Default upper limit for read length, large enough to mean "unbounded"
pub const MAX_LENGTH: u64 = 1 << 32;

/// A numeric type that can be used as the endpoint of a [`Bounds`].
pub trait BoundValue: Copy + PartialOrd + Default + FromStr + fmt::Display {
    /// Value used when `inf` is given as a maximum
    const UNBOUNDED: Self;
}

impl BoundValue for f64 {
    const UNBOUNDED: f64 = f64::INFINITY;
}

impl BoundValue for u64 {
    const UNBOUNDED: u64 = u64::MAX;
}

/// A closed interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Bounds { min, max }
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, v: T) -> bool {
        (self.min <= v) && (v <= self.max)
    }
}

/// Bounds as they are given by a caller: either an explicit `(min, max)` pair, or a single
/// value which is shorthand for `(0, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundsArg<T> {
    Pair(T, T),
    Upper(T),
}

impl<T: BoundValue> BoundsArg<T> {
    /// Resolve into the canonical pair form.
    pub fn resolve(self) -> Bounds<T> {
        match self {
            BoundsArg::Pair(min, max) => Bounds { min, max },
            BoundsArg::Upper(max) => Bounds {
                min: T::default(),
                max,
            },
        }
    }
}

macro_rules! impl_bounds_arg_from {
    ($($t:ty),*) => {$(
        impl From<$t> for BoundsArg<$t> {
            fn from(max: $t) -> Self {
                BoundsArg::Upper(max)
            }
        }

        impl From<($t, $t)> for BoundsArg<$t> {
            fn from((min, max): ($t, $t)) -> Self {
                BoundsArg::Pair(min, max)
            }
        }
    )*};
}

impl_bounds_arg_from!(f64, u64);

impl<T> From<Bounds<T>> for BoundsArg<T> {
    fn from(b: Bounds<T>) -> Self {
        BoundsArg::Pair(b.min, b.max)
    }
}

impl<T: fmt::Display> fmt::Display for BoundsArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsArg::Pair(min, max) => write!(f, "{min},{max}"),
            BoundsArg::Upper(max) => write!(f, "{max}"),
        }
    }
}

/// Error type for parsing a bounds string.
#[derive(Debug)]
pub struct ParseBoundsErr(String);

impl fmt::Display for ParseBoundsErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid bounds: {}", self.0)
    }
}

impl std::error::Error for ParseBoundsErr {}

impl<T: BoundValue> FromStr for BoundsArg<T> {
    type Err = ParseBoundsErr;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let arg_lc = arg.to_lowercase();
        let parts: Vec<&str> = arg_lc.split(',').map(str::trim).collect();

        let parse = |s: &str| -> Result<T, ParseBoundsErr> {
            match s {
                "inf" => Ok(T::UNBOUNDED),
                s => s.parse::<T>().map_err(|_| {
                    ParseBoundsErr(format!("'{s}' is not a valid value (should be a number or `inf`)"))
                }),
            }
        };

        let bounds = match parts.as_slice() {
            [max] => BoundsArg::Upper(parse(*max)?),
            [min, max] => BoundsArg::Pair(parse(*min)?, parse(*max)?),
            _ => {
                return Err(ParseBoundsErr(indoc::formatdoc! {"
                expected '<max>' or '<min>,<max>', got '{arg}'. For example:
                  --len 150
                  --len 50,150
                  --len 50,inf
                "}))
            }
        };

        let Bounds { min, max } = bounds.resolve();
        // also rejects NaN
        if !(min <= max) {
            return Err(ParseBoundsErr(format!(
                "minimum {min} is larger than maximum {max}"
            )));
        }

        Ok(bounds)
    }
}

/// Parses GC bounds, which must lie within `[0, MAX_GC]`. `inf` is therefore not accepted.
pub fn parse_gc_bounds(arg: &str) -> Result<BoundsArg<f64>, ParseBoundsErr> {
    let bounds: BoundsArg<f64> = arg.parse()?;
    let Bounds { min, max } = bounds.resolve();
    if min < 0.0 || max > MAX_GC {
        return Err(ParseBoundsErr(format!(
            "GC bounds must lie within 0 and {MAX_GC}, got '{arg}'"
        )));
    }
    Ok(bounds)
}

/// Passes iff `min <= len(seq) <= max`.
pub fn length_filter(rec: &Record, bounds: &Bounds<u64>) -> bool {
    bounds.contains(rec.len() as u64)
}

/// Passes iff the GC percentage of the read lies within the bounds.
pub fn gc_filter(rec: &Record, bounds: &Bounds<f64>) -> bool {
    bounds.contains(rec.gc_content())
}

/// Passes iff the mean Phred quality is at least `threshold`.
pub fn quality_filter(rec: &Record, threshold: f64) -> bool {
    rec.phred_quality_avg() >= threshold
}

/// A predicate over single records, which can also be applied to a batch.
pub trait RecordFilter {
    fn matches(&self, rec: &Record) -> bool;

    /// Returns the headers of every record in `records` which passes the filter.
    fn select<'a, I>(&self, records: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a Record>,
        Self: Sized,
    {
        records
            .into_iter()
            .filter(|rec| self.matches(rec))
            .map(|rec| rec.header.as_str())
            .collect()
    }
}

pub struct LengthFilter(pub Bounds<u64>);
pub struct GcFilter(pub Bounds<f64>);
pub struct QualityFilter(pub f64);

impl RecordFilter for LengthFilter {
    fn matches(&self, rec: &Record) -> bool {
        length_filter(rec, &self.0)
    }
}

impl RecordFilter for GcFilter {
    fn matches(&self, rec: &Record) -> bool {
        gc_filter(rec, &self.0)
    }
}

impl RecordFilter for QualityFilter {
    fn matches(&self, rec: &Record) -> bool {
        quality_filter(rec, self.0)
    }
}

/// The combined length, GC and quality criteria of a filtering run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilterConfig {
    pub gc_bounds: Bounds<f64>,
    pub length_bounds: Bounds<u64>,
    pub quality_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            gc_bounds: Bounds::new(0.0, MAX_GC),
            length_bounds: Bounds::new(0, MAX_LENGTH),
            quality_threshold: 0.0,
        }
    }
}

impl FilterConfig {
    /// Scalar bounds are normalised to `(0, value)` here, so the predicates only ever see pairs.
    pub fn new(
        gc_bounds: impl Into<BoundsArg<f64>>,
        length_bounds: impl Into<BoundsArg<u64>>,
        quality_threshold: f64,
    ) -> Self {
        let gc_bounds: BoundsArg<f64> = gc_bounds.into();
        let length_bounds: BoundsArg<u64> = length_bounds.into();

        FilterConfig {
            gc_bounds: gc_bounds.resolve(),
            length_bounds: length_bounds.resolve(),
            quality_threshold,
        }
    }
}

impl RecordFilter for FilterConfig {
    fn matches(&self, rec: &Record) -> bool {
        length_filter(rec, &self.length_bounds)
            && gc_filter(rec, &self.gc_bounds)
            && quality_filter(rec, self.quality_threshold)
    }
}

/// Lazily keeps the records which pass every filter in `config`, in their original order.
///
/// Errors from the underlying stream are passed through untouched so that the consumer
/// can stop at the first one.
pub fn filter_fastq<I, E>(
    records: I,
    config: FilterConfig,
) -> impl Iterator<Item = Result<Record, E>>
where
    I: IntoIterator<Item = Result<Record, E>>,
{
    records.into_iter().filter(move |item| match item {
        Ok(rec) => config.matches(rec),
        Err(_) => true,
    })
}
