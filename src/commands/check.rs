//! Built-in self-check
//!
//! Runs a fixed set of known ladders and failures against the search engine.

use crate::core::ErrorKind;
use crate::ladder::{SearchConfig, WordLadder};

const BASIC: &[&str] = &["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"];
const WITH_TIP: &[&str] = &["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ", "ТИП"];

/// What a check case must produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Ladder(&'static [&'static str]),
    Error(ErrorKind),
}

/// A single self-check scenario
#[derive(Debug, Clone, Copy)]
pub struct CheckCase {
    pub name: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    pub words: &'static [&'static str],
    pub expected: Expected,
}

pub const CASES: &[CheckCase] = &[
    CheckCase {
        name: "two-step ladder",
        source: "КОТ",
        target: "ТОН",
        words: BASIC,
        expected: Expected::Ladder(&["КОТ", "ТОТ", "ТОН"]),
    },
    CheckCase {
        name: "one-step ladder",
        source: "КОТ",
        target: "ТОТ",
        words: BASIC,
        expected: Expected::Ladder(&["КОТ", "ТОТ"]),
    },
    CheckCase {
        name: "same words",
        source: "КОТ",
        target: "КОТ",
        words: BASIC,
        expected: Expected::Ladder(&["КОТ"]),
    },
    CheckCase {
        name: "words not in dictionary",
        source: "ЖМОТ",
        target: "КРОТ",
        words: WITH_TIP,
        expected: Expected::Error(ErrorKind::WordNotFound),
    },
    CheckCase {
        name: "no way between words",
        source: "КОТ",
        target: "ТИП",
        words: WITH_TIP,
        expected: Expected::Error(ErrorKind::NoPath),
    },
    CheckCase {
        name: "different word sizes",
        source: "КОТ",
        target: "РОТА",
        words: WITH_TIP,
        expected: Expected::Error(ErrorKind::InvalidInput),
    },
];

/// Outcome of one check case
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    /// What actually happened, for display
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run every case in [`CASES`]
#[must_use]
pub fn run_check(config: &SearchConfig) -> CheckReport {
    CheckReport {
        outcomes: CASES.iter().map(|case| run_case(case, config)).collect(),
    }
}

/// Run a single case
#[must_use]
pub fn run_case(case: &CheckCase, config: &SearchConfig) -> CheckOutcome {
    let result =
        WordLadder::new(case.source, case.target, case.words).and_then(|l| l.solve(config));

    let (passed, actual) = match (&result, case.expected) {
        (Ok(ladder), Expected::Ladder(words)) => {
            (ladder.texts() == words, ladder.texts().join(" → "))
        }
        (Ok(ladder), Expected::Error(_)) => (false, ladder.texts().join(" → ")),
        (Err(e), Expected::Error(kind)) => (e.kind() == kind, e.to_string()),
        (Err(e), Expected::Ladder(_)) => (false, e.to_string()),
    };

    if !passed {
        tracing::warn!(case = case.name, %actual, "self-check failed");
    }

    CheckOutcome {
        name: case.name,
        passed,
        actual,
    }
}
