//! Per-query outcomes and the final summary.

/// Outcome of one submission. Every submitted query produces exactly one,
/// in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub query_name: String,
    pub success: bool,
    pub error: Option<String>,
}

impl ImportOutcome {
    pub fn success(name: &str) -> Self {
        Self {
            query_name: name.to_string(),
            success: true,
            error: None,
        }
    }

    pub fn failure(name: &str, error: impl Into<String>) -> Self {
        Self {
            query_name: name.to_string(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// One failed import, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub name: String,
    pub error: String,
}

/// Aggregated result of a run. `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

/// Fold outcomes into a summary. Pure function over the outcome sequence.
pub fn aggregate(outcomes: &[ImportOutcome]) -> Summary {
    let mut summary = Summary::default();

    for outcome in outcomes {
        summary.total += 1;

        if outcome.success {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
            summary.failures.push(Failure {
                name: outcome.query_name.clone(),
                error: outcome.error.clone().unwrap_or_default(),
            });
        }
    }

    summary
}
