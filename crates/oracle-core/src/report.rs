//! Check results and the run-level verdict.
//!
//! Check routines return explicit `SectionReport` values and the harness
//! merges them; there are no global counters.

/// Outcome of a single vector check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Skip,
}

/// One line of the report.
#[derive(Debug, Clone)]
pub struct CheckRecord {
    pub label: String,
    pub status: CheckStatus,
    /// Failure detail or skip reason.
    pub detail: Option<String>,
}

/// All records for one document section.
#[derive(Debug, Clone)]
pub struct SectionReport {
    pub name: String,
    pub records: Vec<CheckRecord>,
}

impl SectionReport {
    pub fn new(name: impl Into<String>) -> SectionReport {
        SectionReport {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn pass(&mut self, label: impl Into<String>) {
        self.records.push(CheckRecord {
            label: label.into(),
            status: CheckStatus::Pass,
            detail: None,
        });
    }

    pub fn fail(&mut self, label: impl Into<String>, detail: impl Into<String>) {
        self.records.push(CheckRecord {
            label: label.into(),
            status: CheckStatus::Fail,
            detail: Some(detail.into()),
        });
    }

    pub fn skip(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        self.records.push(CheckRecord {
            label: label.into(),
            status: CheckStatus::Skip,
            detail: Some(reason.into()),
        });
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for record in &self.records {
            match record.status {
                CheckStatus::Pass => tally.passed += 1,
                CheckStatus::Fail => tally.failed += 1,
                CheckStatus::Skip => tally.skipped += 1,
            }
        }
        tally
    }
}

/// Pass/fail/skip counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn merge(&mut self, other: &Tally) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// The complete run, one section per present document category.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub sections: Vec<SectionReport>,
}

impl RunReport {
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for section in &self.sections {
            tally.merge(&section.tally());
        }
        tally
    }

    /// Pass iff no vector failed; skips do not count either way.
    pub fn verdict(&self) -> Verdict {
        if self.tally().failed == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}
