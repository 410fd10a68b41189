//! Operation accounting and the final report of a run.

use {
    std::fmt,
    crate::disjoint_sets::Algorithm,
};

/// Separator placed between the members of a component when a report is displayed.
pub const GROUP_SEPARATOR: &str = "-";

/// The statistics of one run.
///
/// A `Counters` value is owned by the run and passed by exclusive reference into every
/// operation, which charges the array accesses it performs.
/// All fields only ever grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counters {
    /// Pairs read from the input.
    pub pairs_cnt: usize,
    /// Pairs that merged two distinct components.
    pub links_cnt: usize,
    /// Array accesses done to locate components.
    pub find_cnt: usize,
    /// Array accesses done to merge components.
    pub union_cnt: usize,
}

impl Counters {
    /// Returns the total amount of array accesses, `find_cnt + union_cnt`.
    #[inline]
    pub fn total_cnt(&self) -> usize {
        self.find_cnt + self.union_cnt
    }
}

/// What `union` did with a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The pair joined two distinct components.
    Linked,
    /// Both elements already shared a component.
    Discarded,
}

/// A single processed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub p: usize,
    pub q: usize,
    pub outcome: Outcome,
}

/// The structured result of running one algorithm over a pair stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// The size `N` of the universe.
    pub len: usize,
    pub pairs_cnt: usize,
    pub links_cnt: usize,
    pub find_cnt: usize,
    pub union_cnt: usize,
    /// Always `find_cnt + union_cnt`.
    pub total_cnt: usize,
    /// Every pair in input order together with its outcome.
    pub steps: Vec<Step>,
    /// The final components, exactly `len - links_cnt` of them.
    pub groups: Vec<Vec<usize>>,
}

impl RunReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        len: usize,
        counters: Counters,
        steps: Vec<Step>,
        groups: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            algorithm,
            len,
            pairs_cnt: counters.pairs_cnt,
            links_cnt: counters.links_cnt,
            find_cnt: counters.find_cnt,
            union_cnt: counters.union_cnt,
            total_cnt: counters.total_cnt(),
            steps,
            groups,
        }
    }

    /// Returns the number of components left after the run.
    ///
    /// Every link merges two components into one, starting from `len` singletons.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.len - self.links_cnt
    }

    /// Returns the pairs that were discarded because they were already connected.
    pub fn discarded(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.steps.iter()
            .filter(|step| step.outcome == Outcome::Discarded)
            .map(|step| (step.p, step.q))
    }

    /// Returns a value that displays the summary and the groups without the per pair trace.
    pub fn summary(&self) -> Summary<'_> {
        Summary { report: self }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for step in &self.steps {
            match step.outcome {
                Outcome::Linked => writeln!(formatter, " {} {}", step.p, step.q)?,
                Outcome::Discarded => writeln!(formatter, "\t{} {}", step.p, step.q)?,
            }
        }

        write!(formatter, "{}", self.summary())
    }
}

/// Displays a `RunReport` without its per pair trace.
///
/// This struct is created by the [`summary`] method on [`RunReport`].
///
/// [`summary`]: struct.RunReport.html#method.summary
/// [`RunReport`]: struct.RunReport.html
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a> {
    report: &'a RunReport,
}

impl<'a> fmt::Display for Summary<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;

        writeln!(
            formatter,
            "{}: The number of links performed is {} for {} input pairs.",
            report.algorithm, report.links_cnt, report.pairs_cnt,
        )?;
        writeln!(formatter, "Total number of table rw operations: {}", report.total_cnt)?;

        for group in &report.groups {
            let mut members = group.iter();

            if let Some(first) = members.next() {
                write!(formatter, "{}", first)?;
            }
            for member in members {
                write!(formatter, "{}{}", GROUP_SEPARATOR, member)?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}
