use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::{Float, ToPrimitive};
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use core::cmp::Ordering;

use crate::{
    Kbn, Statistic, Statistics,
    helper::{
        first_quartile_from_sorted_slice, median_from_sorted_slice,
        third_quartile_from_sorted_slice,
    },
};

/// A single-pass accumulator for configurable descriptive statistics.
///
/// The engine ingests a stream of numeric values (optionally interleaved
/// with missing or unparseable entries) and derives the requested set of
/// statistics in one ingestion pass plus a finalize step. The requested
/// [`Statistics`] set determines how much state is retained while values
/// stream in: running reductions (count, sum, min, max, first, last) are
/// always kept, while the full value history and the value-frequency table
/// are only kept when a requested statistic needs them.
///
/// Lifecycle: construct with a configuration, feed values with
/// [`add_value`](Self::add_value) / [`add_raw`](Self::add_raw), then call
/// [`finalize`](Self::finalize) once and read results. Adding further
/// values requires an explicit [`reset`](Self::reset) first.
/// [`calculate`](Self::calculate) bundles the whole cycle for the common
/// batch case.
///
/// # Examples
///
/// ```
/// use summary_statistics::{Statistic, Statistics, SummaryStatistics};
///
/// let mut summary = SummaryStatistics::new(Statistics::ALL);
/// summary.calculate([4.0, 2.0, 2.0, 9.0]);
///
/// assert_eq!(summary.statistic(Statistic::Mean), Some(4.25));
/// assert_eq!(summary.statistic(Statistic::Median), Some(3.0));
/// assert_eq!(summary.statistic(Statistic::Range), Some(7.0));
/// assert_eq!(summary.mode(), [2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct SummaryStatistics<T> {
    /// Requested statistics
    stats: Statistics,
    /// Number of valid values ingested
    count: usize,
    /// Number of missing inputs ingested
    missing: usize,
    /// Compensated running sum of values
    sum: Kbn<T>,
    /// Running minimum, sentinel-initialized to +inf
    min: T,
    /// Running maximum, sentinel-initialized to -inf
    max: T,
    /// First value ingested
    first: T,
    /// Last value ingested
    last: T,
    /// Full value history, kept only when a spread statistic was requested
    values: Vec<T>,
    /// Value-frequency table, kept only when a frequency statistic was requested
    frequency: HashMap<OrderedFloat<T>, usize, RandomState>,
    /// Arithmetic mean, derived at finalize
    mean: T,
    /// Median, derived at finalize
    median: T,
    /// Population standard deviation, derived at finalize
    stdev: T,
    /// Sample standard deviation, derived at finalize
    sample_stdev: T,
    /// First quartile, derived at finalize
    first_quartile: T,
    /// Third quartile, derived at finalize
    third_quartile: T,
    /// Least common value, derived at finalize
    minority: T,
    /// Most common value, derived at finalize
    majority: T,
    /// Values tied for the highest occurrence count, derived at finalize
    mode: Vec<T>,
    /// Whether the full value history is being retained
    needs_values: bool,
    /// Whether the value-frequency table is being retained
    needs_frequency: bool,
    /// Whether finalize has run since the last reset
    finalized: bool,
}

impl<T> SummaryStatistics<T>
where
    T: Float + PrimitiveFloat + Default,
{
    /// Creates a new engine computing the given set of statistics
    ///
    /// # Arguments
    ///
    /// * `stats` - The set of statistics to compute
    ///
    /// # Returns
    ///
    /// * `Self` - The engine, reset and ready for ingestion
    pub fn new(stats: Statistics) -> Self {
        let mut summary = Self {
            stats,
            count: 0,
            missing: 0,
            sum: Kbn::default(),
            min: <T as Float>::infinity(),
            max: <T as Float>::neg_infinity(),
            first: <T as Float>::nan(),
            last: <T as Float>::nan(),
            values: Vec::new(),
            frequency: HashMap::with_hasher(RandomState::default()),
            mean: T::zero(),
            median: T::zero(),
            stdev: T::zero(),
            sample_stdev: T::zero(),
            first_quartile: T::zero(),
            third_quartile: T::zero(),
            minority: T::zero(),
            majority: T::zero(),
            mode: Vec::new(),
            needs_values: false,
            needs_frequency: false,
            finalized: false,
        };
        summary.reset();
        summary
    }

    /// Returns the configured set of statistics
    ///
    /// # Returns
    ///
    /// * `Statistics` - The requested set
    pub const fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Reconfigures the set of statistics to compute.
    ///
    /// All accumulated state is discarded, exactly as by
    /// [`reset`](Self::reset).
    ///
    /// # Arguments
    ///
    /// * `stats` - The new set of statistics
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    pub fn set_statistics(&mut self, stats: Statistics) -> &mut Self {
        self.stats = stats;
        self.reset()
    }

    /// Resets all accumulated and derived state.
    ///
    /// Counters return to zero, extremes to their sentinels, the value
    /// history and frequency table are cleared, and the history/frequency
    /// gating flags are recomputed from the configured set. After a reset
    /// the engine accepts values again.
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    pub fn reset(&mut self) -> &mut Self {
        self.count = 0;
        self.missing = 0;
        self.sum = Kbn::default();
        self.min = <T as Float>::infinity();
        self.max = <T as Float>::neg_infinity();
        self.first = <T as Float>::nan();
        self.last = <T as Float>::nan();
        self.values.clear();
        self.frequency.clear();
        self.mean = T::zero();
        self.median = T::zero();
        self.stdev = T::zero();
        self.sample_stdev = T::zero();
        self.first_quartile = T::zero();
        self.third_quartile = T::zero();
        self.minority = T::zero();
        self.majority = T::zero();
        self.mode.clear();
        self.needs_values = self.stats.needs_values();
        self.needs_frequency = self.stats.needs_frequency();
        self.finalized = false;
        self
    }

    /// Ingests one valid numeric value.
    ///
    /// Updates the running reductions, and appends to the value history or
    /// bumps the frequency table when the configuration requires them. Must
    /// not be called on a finalized engine; call [`reset`](Self::reset)
    /// first.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to ingest
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    pub fn add_value(&mut self, value: T) -> &mut Self {
        debug_assert!(
            !self.finalized,
            "reset() is required before adding values to a finalized engine"
        );

        if self.count == 0 {
            self.first = value;
        }
        self.count += 1;
        self.sum += value;
        self.min = Float::min(self.min, value);
        self.max = Float::max(self.max, value);
        self.last = value;

        if self.needs_frequency {
            *self.frequency.entry(OrderedFloat(value)).or_insert(0) += 1;
        }

        if self.needs_values {
            self.values.push(value);
        }
        self
    }

    /// Ingests one raw input of any primitive numeric type.
    ///
    /// `None`, and values that cannot be converted to `T`, increment the
    /// missing count and leave every other reduction untouched, so that a
    /// heterogeneous input stream does not pollute the valid-value
    /// statistics. Everything else delegates to
    /// [`add_value`](Self::add_value).
    ///
    /// # Arguments
    ///
    /// * `value` - The raw input, if present
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_statistics::{Statistics, SummaryStatistics};
    ///
    /// let mut summary: SummaryStatistics<f64> = SummaryStatistics::new(Statistics::ALL);
    /// summary
    ///     .add_raw(Some(4_i32))
    ///     .add_raw(None::<i32>)
    ///     .add_raw(Some(6_u64))
    ///     .finalize();
    ///
    /// assert_eq!(summary.count(), 2);
    /// assert_eq!(summary.count_missing(), 1);
    /// assert_eq!(summary.mean(), Some(5.0));
    /// ```
    pub fn add_raw<V: ToPrimitive>(&mut self, value: Option<V>) -> &mut Self {
        match value.and_then(T::from) {
            Some(value) => self.add_value(value),
            None => {
                self.missing += 1;
                self
            }
        }
    }

    /// Ingests one raw textual input.
    ///
    /// `None`, and strings that do not parse as a number, increment the
    /// missing count; parseable strings delegate to
    /// [`add_value`](Self::add_value).
    ///
    /// # Arguments
    ///
    /// * `value` - The raw input, if present
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine
    pub fn add_str(&mut self, value: Option<&str>) -> &mut Self {
        match value
            .and_then(|s| s.trim().parse::<f64>().ok())
            .and_then(T::from)
        {
            Some(value) => self.add_value(value),
            None => {
                self.missing += 1;
                self
            }
        }
    }

    /// Computes statistics for an entire sequence in one call.
    ///
    /// Equivalent to [`reset`](Self::reset), then
    /// [`add_value`](Self::add_value) for every element, then
    /// [`finalize`](Self::finalize).
    ///
    /// # Arguments
    ///
    /// * `values` - The values to summarize
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine, finalized
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_statistics::{Statistic, SummaryStatistics};
    ///
    /// let mut summary = SummaryStatistics::new(Statistic::Min | Statistic::Max);
    /// summary.calculate([13.0, 15.0, 20.0, 36.0, 25.0]);
    ///
    /// assert_eq!(summary.min(), Some(13.0));
    /// assert_eq!(summary.max(), Some(36.0));
    /// ```
    pub fn calculate<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.reset();
        for value in values {
            self.add_value(value);
        }
        self.finalize()
    }

    /// Derives the requested statistics from the accumulated state.
    ///
    /// With no valid values ingested, every derived statistic (including
    /// the min/max/first/last views) becomes NaN and the mode set is
    /// empty, so that the internal sentinels are never reported. With a
    /// single value, the sample standard deviation is positive infinity;
    /// this divide-by-zero outcome is a deliberate behavioral contract.
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The engine, finalized
    pub fn finalize(&mut self) -> &mut Self {
        self.finalized = true;

        if self.count == 0 {
            self.first = <T as Float>::nan();
            self.last = <T as Float>::nan();
            self.min = <T as Float>::nan();
            self.max = <T as Float>::nan();
            self.mean = <T as Float>::nan();
            self.median = <T as Float>::nan();
            self.stdev = <T as Float>::nan();
            self.sample_stdev = <T as Float>::nan();
            self.minority = <T as Float>::nan();
            self.majority = <T as Float>::nan();
            self.first_quartile = <T as Float>::nan();
            self.third_quartile = <T as Float>::nan();
            self.mode.clear();
            return self;
        }

        let n = T::from(self.count).unwrap_or_else(<T as Float>::nan);
        self.mean = self.sum.total() / n;

        if self.stats.contains(Statistic::StDev) || self.stats.contains(Statistic::StDevSample) {
            let mut sum_squared = Kbn::default();
            for &value in &self.values {
                let diff = value - self.mean;
                sum_squared += diff * diff;
            }
            self.stdev = (sum_squared.total() / n).sqrt();
            self.sample_stdev = if self.count > 1 {
                (sum_squared.total() / (n - T::one())).sqrt()
            } else {
                <T as Float>::infinity()
            };
        }

        if self.stats.contains(Statistic::Median)
            || self.stats.contains(Statistic::FirstQuartile)
            || self.stats.contains(Statistic::ThirdQuartile)
            || self.stats.contains(Statistic::InterQuartileRange)
        {
            self.values
                .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            self.median = median_from_sorted_slice(&self.values);
            self.first_quartile = first_quartile_from_sorted_slice(&self.values);
            self.third_quartile = third_quartile_from_sorted_slice(&self.values);
        }

        if self.stats.contains(Statistic::Minority) {
            if let Some((&value, _)) = self.frequency.iter().min_by_key(|(_, count)| **count) {
                self.minority = value.into_inner();
            }
        }
        if self.stats.contains(Statistic::Majority) {
            if let Some((&value, _)) = self.frequency.iter().max_by_key(|(_, count)| **count) {
                self.majority = value.into_inner();
            }
        }

        if self.stats.contains(Statistic::Mode) {
            let mut max_occurrences = 0;
            for (&value, &occurrences) in &self.frequency {
                if occurrences > max_occurrences {
                    self.mode.clear();
                    max_occurrences = occurrences;
                } else if occurrences < max_occurrences {
                    continue;
                }
                self.mode.push(value.into_inner());
            }
        }

        self
    }

    /// Returns the scalar value of a statistic.
    ///
    /// Before [`finalize`](Self::finalize) every kind reads as `None`.
    /// After finalize, the scalar is returned; a kind that was not in the
    /// configured set reads as its resting value (zero, or NaN on empty
    /// input) rather than failing, so callers are responsible for querying
    /// only what they configured. [`Statistic::Mode`] is list-valued and
    /// reads as `Some(NaN)` here; use [`mode`](Self::mode) instead.
    ///
    /// # Arguments
    ///
    /// * `stat` - The statistic kind to read
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The scalar, or `None` before finalize
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_statistics::{Statistic, Statistics, SummaryStatistics};
    ///
    /// let mut summary = SummaryStatistics::new(Statistics::ALL);
    /// assert_eq!(summary.statistic(Statistic::Mean), None);
    ///
    /// summary.calculate([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(summary.statistic(Statistic::Mean), Some(2.5));
    /// assert_eq!(summary.statistic(Statistic::Median), Some(2.5));
    /// assert_eq!(summary.statistic(Statistic::Variety), Some(4.0));
    /// ```
    pub fn statistic(&self, stat: Statistic) -> Option<T> {
        if !self.finalized {
            return None;
        }
        match stat {
            Statistic::Count => T::from(self.count),
            Statistic::CountMissing => T::from(self.missing),
            Statistic::Sum => Some(self.sum.total()),
            Statistic::Mean => Some(self.mean),
            Statistic::Median => Some(self.median),
            Statistic::StDev => Some(self.stdev),
            Statistic::StDevSample => Some(self.sample_stdev),
            Statistic::Min => Some(self.min),
            Statistic::Max => Some(self.max),
            Statistic::Range => Some(self.max - self.min),
            Statistic::Minority => Some(self.minority),
            Statistic::Majority => Some(self.majority),
            Statistic::Variety => T::from(self.frequency.len()),
            Statistic::FirstQuartile => Some(self.first_quartile),
            Statistic::ThirdQuartile => Some(self.third_quartile),
            Statistic::InterQuartileRange => Some(self.third_quartile - self.first_quartile),
            Statistic::First => Some(self.first),
            Statistic::Last => Some(self.last),
            Statistic::Mode => Some(<T as Float>::nan()),
        }
    }

    /// Returns the number of valid values ingested
    ///
    /// # Returns
    ///
    /// * `usize` - The valid-value count
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of missing inputs ingested
    ///
    /// # Returns
    ///
    /// * `usize` - The missing-input count
    pub const fn count_missing(&self) -> usize {
        self.missing
    }

    /// Returns `true` if the engine has been finalized since the last reset
    ///
    /// # Returns
    ///
    /// * `bool` - The lifecycle state
    pub const fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Returns all values tied for the highest occurrence count.
    ///
    /// Empty before finalize, on empty input, and when
    /// [`Statistic::Mode`] was not configured. The order of tied values is
    /// unspecified.
    ///
    /// # Returns
    ///
    /// * `&[T]` - The modal values
    pub fn mode(&self) -> &[T] {
        &self.mode
    }

    #[inline]
    fn when_finalized(&self, value: T) -> Option<T> {
        self.finalized.then_some(value)
    }

    /// Returns the sum of values, or `None` before finalize
    pub fn sum(&self) -> Option<T> {
        self.when_finalized(self.sum.total())
    }

    /// Returns the arithmetic mean, or `None` before finalize
    pub fn mean(&self) -> Option<T> {
        self.when_finalized(self.mean)
    }

    /// Returns the median, or `None` before finalize
    pub fn median(&self) -> Option<T> {
        self.when_finalized(self.median)
    }

    /// Returns the minimum value, or `None` before finalize
    pub fn min(&self) -> Option<T> {
        self.when_finalized(self.min)
    }

    /// Returns the maximum value, or `None` before finalize
    pub fn max(&self) -> Option<T> {
        self.when_finalized(self.max)
    }

    /// Returns the range (maximum minus minimum), or `None` before finalize
    pub fn range(&self) -> Option<T> {
        self.when_finalized(self.max - self.min)
    }

    /// Returns the population standard deviation, or `None` before finalize
    pub fn stdev(&self) -> Option<T> {
        self.when_finalized(self.stdev)
    }

    /// Returns the sample standard deviation, or `None` before finalize.
    ///
    /// A single-value sample reads as positive infinity.
    pub fn sample_stdev(&self) -> Option<T> {
        self.when_finalized(self.sample_stdev)
    }

    /// Returns the first value ingested, or `None` before finalize
    pub fn first(&self) -> Option<T> {
        self.when_finalized(self.first)
    }

    /// Returns the last value ingested, or `None` before finalize
    pub fn last(&self) -> Option<T> {
        self.when_finalized(self.last)
    }

    /// Returns the first quartile, or `None` before finalize
    pub fn first_quartile(&self) -> Option<T> {
        self.when_finalized(self.first_quartile)
    }

    /// Returns the third quartile, or `None` before finalize
    pub fn third_quartile(&self) -> Option<T> {
        self.when_finalized(self.third_quartile)
    }

    /// Returns the interquartile range, or `None` before finalize
    pub fn inter_quartile_range(&self) -> Option<T> {
        self.when_finalized(self.third_quartile - self.first_quartile)
    }

    /// Returns the number of distinct values, or `None` before finalize.
    ///
    /// Only meaningful when a frequency statistic was configured.
    pub fn variety(&self) -> Option<usize> {
        self.finalized.then_some(self.frequency.len())
    }

    /// Returns the least common value, or `None` before finalize.
    ///
    /// Ties between equally rare values are broken arbitrarily.
    pub fn minority(&self) -> Option<T> {
        self.when_finalized(self.minority)
    }

    /// Returns the most common value, or `None` before finalize.
    ///
    /// Ties between equally common values are broken arbitrarily.
    pub fn majority(&self) -> Option<T> {
        self.when_finalized(self.majority)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn all_stats() -> SummaryStatistics<f64> {
        SummaryStatistics::new(Statistics::ALL)
    }

    #[test]
    fn running_reductions_work() {
        let mut summary = all_stats();
        summary.calculate([13.0, 15.0, 20.0, 36.0, 25.0]);

        assert_eq!(summary.count(), 5);
        assert_eq!(summary.sum(), Some(109.0));
        assert_eq!(summary.min(), Some(13.0));
        assert_eq!(summary.max(), Some(36.0));
        assert_eq!(summary.range(), Some(23.0));
        assert_eq!(summary.first(), Some(13.0));
        assert_eq!(summary.last(), Some(25.0));
        assert_approx_eq!(summary.mean().unwrap_or(f64::NAN), 21.8, 1e-9);
    }

    #[test]
    fn min_is_at_most_mean_is_at_most_max() {
        let mut summary = all_stats();
        summary.calculate([1.2, -0.7, 3.4, 2.1, -1.5, 0.0, 2.2]);

        let min = summary.statistic(Statistic::Min);
        let mean = summary.statistic(Statistic::Mean);
        let max = summary.statistic(Statistic::Max);
        assert!(min <= mean && mean <= max, "{min:?} {mean:?} {max:?}");
    }

    #[test]
    fn missing_inputs_are_counted_separately() {
        let mut summary = all_stats();
        summary
            .add_raw(Some(4.0))
            .add_raw(None::<f64>)
            .add_raw(Some(2.0))
            .add_raw(None::<f64>)
            .add_raw(Some(9.0))
            .finalize();

        assert_eq!(summary.count() + summary.count_missing(), 5);
        assert_eq!(summary.count(), 3);
        assert_eq!(summary.count_missing(), 2);
        assert_eq!(summary.sum(), Some(15.0));
        assert_eq!(summary.statistic(Statistic::Count), Some(3.0));
        assert_eq!(summary.statistic(Statistic::CountMissing), Some(2.0));
    }

    #[test]
    fn unparseable_strings_are_missing() {
        let mut summary = all_stats();
        summary
            .add_str(Some("20"))
            .add_str(Some("  81.5 "))
            .add_str(Some("test"))
            .add_str(None)
            .finalize();

        assert_eq!(summary.count(), 2);
        assert_eq!(summary.count_missing(), 2);
        assert_eq!(summary.sum(), Some(101.5));
    }

    #[test]
    fn empty_input_reports_nan_everywhere() {
        let mut summary = all_stats();
        summary.calculate(core::iter::empty());

        assert_eq!(summary.count(), 0);
        assert!(summary.mode().is_empty());
        assert_eq!(summary.sum(), Some(0.0));
        assert_eq!(summary.variety(), Some(0));

        for stat in [
            Statistic::Mean,
            Statistic::Median,
            Statistic::StDev,
            Statistic::StDevSample,
            Statistic::Min,
            Statistic::Max,
            Statistic::Range,
            Statistic::Minority,
            Statistic::Majority,
            Statistic::FirstQuartile,
            Statistic::ThirdQuartile,
            Statistic::InterQuartileRange,
            Statistic::First,
            Statistic::Last,
        ] {
            let value = summary.statistic(stat).unwrap_or(0.0);
            assert!(value.is_nan(), "{stat:?} reported {value}");
        }
    }

    #[test]
    fn single_value_sample_stdev_is_infinite() {
        let mut summary = all_stats();
        summary.calculate([5.0]);

        assert_eq!(summary.count(), 1);
        assert_eq!(summary.sum(), Some(5.0));
        assert_eq!(summary.mean(), Some(5.0));
        assert_eq!(summary.min(), Some(5.0));
        assert_eq!(summary.max(), Some(5.0));
        assert_eq!(summary.median(), Some(5.0));
        assert_eq!(summary.first(), Some(5.0));
        assert_eq!(summary.last(), Some(5.0));
        assert_eq!(summary.stdev(), Some(0.0));
        assert_eq!(summary.sample_stdev(), Some(f64::INFINITY));
    }

    #[test]
    fn stdev_flavors_differ_by_denominator() {
        let mut summary = all_stats();
        summary.calculate([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(summary.mean(), Some(5.0));
        assert_approx_eq!(summary.stdev().unwrap_or(f64::NAN), 2.0, 1e-9);
        assert_approx_eq!(
            summary.sample_stdev().unwrap_or(f64::NAN),
            (32.0_f64 / 7.0).sqrt(),
            1e-9
        );
    }

    #[test]
    fn median_even_and_odd_counts() {
        let mut summary = all_stats();
        summary.calculate([4.0, 2.0, 3.0, 1.0]);
        assert_eq!(summary.median(), Some(2.5));

        summary.calculate([3.0, 1.0, 2.0]);
        assert_eq!(summary.median(), Some(2.0));
    }

    #[test]
    fn quartiles_even_count() {
        let mut summary = all_stats();
        summary.calculate([8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);

        assert_eq!(summary.first_quartile(), Some(2.5));
        assert_eq!(summary.third_quartile(), Some(6.5));
        assert_eq!(summary.inter_quartile_range(), Some(4.0));
        assert_eq!(summary.statistic(Statistic::InterQuartileRange), Some(4.0));
    }

    #[test]
    fn quartiles_odd_count_use_overlapping_halves() {
        let mut summary = all_stats();
        summary.calculate([5.0, 3.0, 1.0, 4.0, 2.0]);

        assert_eq!(summary.first_quartile(), Some(2.0));
        assert_eq!(summary.third_quartile(), Some(4.0));
    }

    #[test]
    fn mode_collects_all_tied_values() {
        let mut summary = all_stats();
        summary.calculate([1.0, 1.0, 2.0, 2.0, 3.0]);

        let mut mode: Vec<f64> = summary.mode().to_vec();
        mode.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
        assert_eq!(mode, [1.0, 2.0]);

        // minority is the unique least-common value; majority is one of the tie
        assert_eq!(summary.minority(), Some(3.0));
        let majority = summary.majority().unwrap_or(f64::NAN);
        assert!(majority == 1.0 || majority == 2.0, "{majority}");
        assert_eq!(summary.variety(), Some(3));
    }

    #[test]
    fn mode_is_single_valued_without_ties() {
        let mut summary = all_stats();
        summary.calculate([4.0, 2.0, 2.0, 9.0]);
        assert_eq!(summary.mode(), [2.0]);
        assert!(
            summary
                .statistic(Statistic::Mode)
                .unwrap_or(0.0)
                .is_nan()
        );
    }

    #[test]
    fn permutation_only_changes_first_and_last() {
        let forward = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let backward = [2.0, 9.0, 5.0, 1.0, 4.0, 1.0, 3.0];

        let mut a = all_stats();
        let mut b = all_stats();
        a.calculate(forward);
        b.calculate(backward);

        for stat in Statistic::KINDS {
            // First/Last are order-dependent by definition; Mode is
            // list-valued; Minority tie-breaking is unspecified here (five
            // values share the lowest occurrence count); the deviation sums
            // behind the stdev flavors are compared approximately below.
            if matches!(
                stat,
                Statistic::First
                    | Statistic::Last
                    | Statistic::Mode
                    | Statistic::Minority
                    | Statistic::StDev
                    | Statistic::StDevSample
            ) {
                continue;
            }
            assert_eq!(a.statistic(stat), b.statistic(stat), "{stat:?}");
        }
        assert_approx_eq!(
            a.stdev().unwrap_or(f64::NAN),
            b.stdev().unwrap_or(f64::NAN),
            1e-12
        );
        assert_approx_eq!(
            a.sample_stdev().unwrap_or(f64::NAN),
            b.sample_stdev().unwrap_or(f64::NAN),
            1e-12
        );

        let sorted = |s: &SummaryStatistics<f64>| {
            let mut m = s.mode().to_vec();
            m.sort_by(|x, y| x.partial_cmp(y).unwrap_or(core::cmp::Ordering::Equal));
            m
        };
        assert_eq!(sorted(&a), sorted(&b));
        assert_ne!(a.first(), b.first());
    }

    #[test]
    fn reset_discards_prior_data() {
        let mut summary = all_stats();
        summary.calculate([100.0, 200.0, 300.0]);
        assert_eq!(summary.mean(), Some(200.0));

        summary.reset();
        assert_eq!(summary.mean(), None);
        assert_eq!(summary.count(), 0);

        summary.calculate([1.0, 3.0]);
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.mean(), Some(2.0));
        assert_eq!(summary.min(), Some(1.0));
        assert_eq!(summary.max(), Some(3.0));
        assert_eq!(summary.sum(), Some(4.0));
    }

    #[test]
    fn reconfiguration_resets_state() {
        let mut summary = SummaryStatistics::new(Statistics::from(Statistic::Mean));
        summary.calculate([10.0, 20.0]);
        assert_eq!(summary.mean(), Some(15.0));

        summary.set_statistics(Statistic::Median | Statistic::Variety);
        assert!(!summary.is_finalized());
        assert_eq!(summary.count(), 0);

        summary.calculate([7.0, 5.0, 9.0]);
        assert_eq!(summary.median(), Some(7.0));
        assert_eq!(summary.variety(), Some(3));
    }

    #[test]
    fn history_retained_only_when_needed() {
        let mut cheap = SummaryStatistics::new(Statistic::Mean | Statistic::Max);
        cheap.calculate([1.0, 2.0, 3.0]);
        assert!(cheap.values.is_empty());
        assert!(cheap.frequency.is_empty());

        let mut spread = SummaryStatistics::new(Statistics::from(Statistic::Median));
        spread.calculate([1.0, 2.0, 3.0]);
        assert_eq!(spread.values.len(), 3);
        assert!(spread.frequency.is_empty());

        let mut freq = SummaryStatistics::new(Statistics::from(Statistic::Majority));
        freq.calculate([1.0, 2.0, 2.0]);
        assert!(freq.values.is_empty());
        assert_eq!(freq.frequency.len(), 2);
    }

    #[test]
    fn queries_before_finalize_are_none() {
        let mut summary = all_stats();
        summary.add_value(1.0).add_value(2.0);

        assert!(!summary.is_finalized());
        for stat in Statistic::KINDS {
            assert_eq!(summary.statistic(stat), None, "{stat:?}");
        }
        assert_eq!(summary.mean(), None);
        assert!(summary.mode().is_empty());

        summary.finalize();
        assert_eq!(summary.mean(), Some(1.5));
    }

    #[test]
    fn unconfigured_statistics_read_as_resting_values() {
        let mut summary = SummaryStatistics::new(Statistics::from(Statistic::Mean));
        summary.calculate([2.0, 4.0]);

        assert_eq!(summary.statistic(Statistic::Mean), Some(3.0));
        // never computed, but not an error either
        assert_eq!(summary.statistic(Statistic::Median), Some(0.0));
        assert_eq!(summary.statistic(Statistic::StDev), Some(0.0));
    }

    #[test]
    fn works_with_f32_values() {
        let mut summary: SummaryStatistics<f32> = SummaryStatistics::new(Statistics::ALL);
        summary.calculate([1.0, 2.0, 3.0, 4.0]);

        assert_eq!(summary.mean(), Some(2.5));
        assert_eq!(summary.median(), Some(2.5));
        assert_eq!(summary.statistic(Statistic::Variety), Some(4.0));
    }
}
