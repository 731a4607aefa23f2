use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// One descriptive statistic kind computed by [`SummaryStatistics`](crate::SummaryStatistics).
///
/// Each kind carries a single flag bit so that a set of requested kinds can
/// be combined with `|` into a [`Statistics`] configuration:
///
/// ```
/// use summary_statistics::{Statistic, Statistics};
///
/// let stats: Statistics = Statistic::Mean | Statistic::Median | Statistic::Mode;
/// assert!(stats.contains(Statistic::Median));
/// assert!(!stats.contains(Statistic::Sum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Statistic {
    /// Number of valid (numeric) values ingested
    Count = 1,
    /// Number of missing (null or non-numeric) inputs ingested
    CountMissing = 1 << 1,
    /// Sum of values
    Sum = 1 << 2,
    /// Arithmetic mean of values
    Mean = 1 << 3,
    /// Median of values
    Median = 1 << 4,
    /// Population standard deviation of values
    StDev = 1 << 5,
    /// Sample standard deviation of values
    StDevSample = 1 << 6,
    /// Minimum of values
    Min = 1 << 7,
    /// Maximum of values
    Max = 1 << 8,
    /// Range of values (maximum minus minimum)
    Range = 1 << 9,
    /// Least commonly occurring value
    Minority = 1 << 10,
    /// Most commonly occurring value
    Majority = 1 << 11,
    /// Number of distinct values
    Variety = 1 << 12,
    /// First quartile of values
    FirstQuartile = 1 << 13,
    /// Third quartile of values
    ThirdQuartile = 1 << 14,
    /// Interquartile range of values (third quartile minus first quartile)
    InterQuartileRange = 1 << 15,
    /// First value ingested
    First = 1 << 16,
    /// Last value ingested
    Last = 1 << 17,
    /// Set of values tied for the highest occurrence count
    Mode = 1 << 18,
}

impl Statistic {
    /// All statistic kinds, in declaration order
    pub const KINDS: [Statistic; 19] = [
        Statistic::Count,
        Statistic::CountMissing,
        Statistic::Sum,
        Statistic::Mean,
        Statistic::Median,
        Statistic::StDev,
        Statistic::StDevSample,
        Statistic::Min,
        Statistic::Max,
        Statistic::Range,
        Statistic::Minority,
        Statistic::Majority,
        Statistic::Variety,
        Statistic::FirstQuartile,
        Statistic::ThirdQuartile,
        Statistic::InterQuartileRange,
        Statistic::First,
        Statistic::Last,
        Statistic::Mode,
    ];

    /// Returns the human-readable label of the statistic kind
    ///
    /// # Returns
    ///
    /// * `&'static str` - The display label, e.g. `"St dev (pop)"` for [`Statistic::StDev`]
    pub const fn display_name(self) -> &'static str {
        match self {
            Statistic::Count => "Count",
            Statistic::CountMissing => "Count (missing)",
            Statistic::Sum => "Sum",
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::StDev => "St dev (pop)",
            Statistic::StDevSample => "St dev (sample)",
            Statistic::Min => "Minimum",
            Statistic::Max => "Maximum",
            Statistic::Range => "Range",
            Statistic::Minority => "Minority",
            Statistic::Majority => "Majority",
            Statistic::Variety => "Variety",
            Statistic::FirstQuartile => "Q1",
            Statistic::ThirdQuartile => "Q3",
            Statistic::InterQuartileRange => "IQR",
            Statistic::First => "First",
            Statistic::Last => "Last",
            Statistic::Mode => "Mode",
        }
    }

    /// Returns the short machine-usable token of the statistic kind
    ///
    /// Short names are stable lowercase identifiers suitable for field names
    /// or expression syntax, and round-trip through
    /// [`Statistic::from_short_name`].
    ///
    /// # Returns
    ///
    /// * `&'static str` - The short token, e.g. `"stdev"` for [`Statistic::StDev`]
    pub const fn short_name(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::CountMissing => "countmissing",
            Statistic::Sum => "sum",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::StDev => "stdev",
            Statistic::StDevSample => "stdevsample",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Range => "range",
            Statistic::Minority => "minority",
            Statistic::Majority => "majority",
            Statistic::Variety => "variety",
            Statistic::FirstQuartile => "q1",
            Statistic::ThirdQuartile => "q3",
            Statistic::InterQuartileRange => "iqr",
            Statistic::First => "first",
            Statistic::Last => "last",
            Statistic::Mode => "mode",
        }
    }

    /// Looks up a statistic kind from its short token
    ///
    /// # Arguments
    ///
    /// * `name` - The short token, as returned by [`Statistic::short_name`]
    ///
    /// # Returns
    ///
    /// * `Option<Statistic>` - The matching kind, or `None` if the token is unknown
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_statistics::Statistic;
    ///
    /// assert_eq!(Statistic::from_short_name("q3"), Some(Statistic::ThirdQuartile));
    /// assert_eq!(Statistic::from_short_name("q5"), None);
    /// ```
    pub fn from_short_name(name: &str) -> Option<Statistic> {
        Self::KINDS.iter().copied().find(|s| s.short_name() == name)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl BitOr for Statistic {
    type Output = Statistics;

    fn bitor(self, rhs: Statistic) -> Statistics {
        Statistics(self as u32 | rhs as u32)
    }
}

impl BitOr<Statistics> for Statistic {
    type Output = Statistics;

    fn bitor(self, rhs: Statistics) -> Statistics {
        Statistics(self as u32 | rhs.0)
    }
}

/// An OR-combinable set of [`Statistic`] kinds.
///
/// The set configures which statistics a
/// [`SummaryStatistics`](crate::SummaryStatistics) engine computes, and
/// thereby how much intermediate state the engine retains during ingestion:
/// only spread measures force the full value history to be kept, and only
/// frequency measures force a value-count table to be kept.
///
/// ```
/// use summary_statistics::{Statistic, Statistics};
///
/// let spread = Statistic::Median | Statistic::InterQuartileRange;
/// let kinds: Vec<_> = spread.iter().collect();
/// assert_eq!(kinds, [Statistic::Median, Statistic::InterQuartileRange]);
///
/// assert_eq!(Statistics::ALL.iter().count(), Statistic::KINDS.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Statistics(u32);

impl Statistics {
    /// The empty set: no statistics requested
    pub const EMPTY: Statistics = Statistics(0);

    /// The full set: every statistic kind requested
    pub const ALL: Statistics = Statistics((1 << 19) - 1);

    /// Returns `true` if the set contains the given kind
    ///
    /// # Arguments
    ///
    /// * `stat` - The statistic kind to test
    ///
    /// # Returns
    ///
    /// * `bool` - True if the kind was requested
    pub const fn contains(self, stat: Statistic) -> bool {
        self.0 & stat as u32 != 0
    }

    /// Returns the set extended with the given kind
    ///
    /// # Arguments
    ///
    /// * `stat` - The statistic kind to add
    ///
    /// # Returns
    ///
    /// * `Statistics` - The extended set
    pub const fn with(self, stat: Statistic) -> Statistics {
        Statistics(self.0 | stat as u32)
    }

    /// Returns the union of two sets
    ///
    /// # Arguments
    ///
    /// * `other` - The set to merge with
    ///
    /// # Returns
    ///
    /// * `Statistics` - The union
    pub const fn union(self, other: Statistics) -> Statistics {
        Statistics(self.0 | other.0)
    }

    /// Returns `true` if no statistic kind is requested
    ///
    /// # Returns
    ///
    /// * `bool` - True if the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the kinds contained in the set,
    /// in declaration order
    ///
    /// # Returns
    ///
    /// * `impl Iterator<Item = Statistic>` - The contained kinds
    pub fn iter(self) -> impl Iterator<Item = Statistic> {
        Statistic::KINDS
            .iter()
            .copied()
            .filter(move |s| self.contains(*s))
    }

    /// True if any requested kind needs the full value history at finalize
    /// (standard deviations, median, quartiles, interquartile range)
    pub(crate) const fn needs_values(self) -> bool {
        self.contains(Statistic::StDev)
            || self.contains(Statistic::StDevSample)
            || self.contains(Statistic::Median)
            || self.contains(Statistic::FirstQuartile)
            || self.contains(Statistic::ThirdQuartile)
            || self.contains(Statistic::InterQuartileRange)
    }

    /// True if any requested kind needs the value-frequency table at finalize
    /// (majority, minority, variety, mode)
    pub(crate) const fn needs_frequency(self) -> bool {
        self.contains(Statistic::Majority)
            || self.contains(Statistic::Minority)
            || self.contains(Statistic::Variety)
            || self.contains(Statistic::Mode)
    }
}

impl From<Statistic> for Statistics {
    fn from(stat: Statistic) -> Statistics {
        Statistics(stat as u32)
    }
}

impl BitOr for Statistics {
    type Output = Statistics;

    fn bitor(self, rhs: Statistics) -> Statistics {
        self.union(rhs)
    }
}

impl BitOr<Statistic> for Statistics {
    type Output = Statistics;

    fn bitor(self, rhs: Statistic) -> Statistics {
        self.with(rhs)
    }
}

impl BitOrAssign for Statistics {
    fn bitor_assign(&mut self, rhs: Statistics) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Statistic> for Statistics {
    fn bitor_assign(&mut self, rhs: Statistic) {
        self.0 |= rhs as u32;
    }
}

impl FromIterator<Statistic> for Statistics {
    fn from_iter<I: IntoIterator<Item = Statistic>>(iter: I) -> Statistics {
        iter.into_iter()
            .fold(Statistics::EMPTY, |set, stat| set.with(stat))
    }
}
