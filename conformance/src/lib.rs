//! RDF Data Cube integrity checking without a SPARQL engine.
//!
//! This crate normalizes a cube graph and evaluates the 21 integrity
//! constraints of the RDF Data Cube vocabulary over it, using a small set of
//! graph traversal primitives instead of a query processor.
//!
//! # Pipeline
//!
//! | Step | Module | Effect |
//! |------|--------|--------|
//! | Type and property closure | [`normalize`] | adds implied `rdf:type` and `qb:componentProperty` triples |
//! | Attachment push-down | [`normalize`] | copies data set and slice level values to observations |
//! | Constraint checks | [`validators`] | IC-1 to IC-21, read-only, order independent |
//!
//! Violations are data: every check returns a [`ViolationReport`], empty when
//! the constraint holds.
//!
//! # Entry Point
//!
//! ```
//! use qb_conformance::{normalize, validate_all, ConstraintId};
//! use qb_store::load_turtle;
//!
//! let mut graph = load_turtle(
//!     "@prefix qb: <http://purl.org/linked-data/cube#> .
//!      <http://example.org/o1> qb:dataSet <http://example.org/ds> .",
//! )
//! .expect("valid Turtle");
//! normalize(&mut graph);
//!
//! let reports = validate_all(&graph);
//! assert_eq!(reports.len(), 21);
//! // The data set declares no structure.
//! assert_eq!(reports[&ConstraintId::Ic2].len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod constraint;
pub mod error;
pub mod normalize;
pub mod path;
pub mod report;
mod terms;
pub mod tests;
pub mod validators;

use std::collections::BTreeMap;

use qb_store::Graph;
use rayon::prelude::*;
use tracing::{debug, info};

pub use constraint::ConstraintId;
pub use error::{Error, Result};
pub use normalize::{normalize, NormalizeStats};
pub use report::{ValidationSummary, ViolationDetail, ViolationReport};

/// Which constraints to run, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Constraints to evaluate. Duplicates are ignored.
    pub constraints: Vec<ConstraintId>,
    /// Evaluate constraints on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            constraints: ConstraintId::ALL.to_vec(),
            parallel: true,
        }
    }
}

/// Evaluates a single constraint.
///
/// The graph is expected to be normalized already.
#[must_use]
pub fn validate_one(graph: &Graph, id: ConstraintId) -> ViolationReport {
    let report = validators::run(graph, id);
    debug!(constraint = %id, violations = report.len(), "constraint evaluated");
    report
}

/// Evaluates a constraint named by a string such as `"IC-12"` or `"12"`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `name` does not denote one of the
/// 21 constraints.
pub fn validate_named(graph: &Graph, name: &str) -> Result<ViolationReport> {
    let id: ConstraintId = name.parse()?;
    Ok(validate_one(graph, id))
}

/// Evaluates all 21 constraints in parallel.
///
/// Returns one report per constraint, empty reports included.
#[must_use]
pub fn validate_all(graph: &Graph) -> BTreeMap<ConstraintId, ViolationReport> {
    validate_with(graph, &ValidateOptions::default()).reports
}

/// Evaluates the constraints selected by `options`.
#[must_use]
pub fn validate_with(graph: &Graph, options: &ValidateOptions) -> ValidationSummary {
    let mut ids = options.constraints.clone();
    ids.sort();
    ids.dedup();

    let reports: BTreeMap<ConstraintId, ViolationReport> = if options.parallel {
        ids.par_iter()
            .map(|&id| (id, validate_one(graph, id)))
            .collect()
    } else {
        ids.iter().map(|&id| (id, validate_one(graph, id))).collect()
    };

    let summary = ValidationSummary::new(reports);
    info!(
        constraints = summary.reports.len(),
        failed = summary.failure_count(),
        violations = summary.total_violations(),
        "validation complete"
    );
    summary
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use crate::tests::{cube, ex, fixtures, normalized};

    #[test]
    fn empty_graph_yields_21_empty_reports() {
        let reports = validate_all(&Graph::new());
        assert_eq!(reports.len(), 21);
        assert!(reports.values().all(ViolationReport::is_empty));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let mut g = cube(fixtures::ABBREVIATED_CUBE);
        g.insert(ex("o9"), ex("refPeriod"), ex("bogus"));
        g.insert(ex("o9"), terms::terms().data_set.clone(), ex("elsewhere"));
        normalize(&mut g);
        let parallel = validate_with(&g, &ValidateOptions::default());
        let sequential = validate_with(
            &g,
            &ValidateOptions {
                parallel: false,
                ..ValidateOptions::default()
            },
        );
        assert_eq!(parallel.reports, sequential.reports);
        assert!(!parallel.all_passed());
    }

    #[test]
    fn selected_constraints_only() {
        let g = normalized(fixtures::ABBREVIATED_CUBE);
        let summary = validate_with(
            &g,
            &ValidateOptions {
                constraints: vec![ConstraintId::Ic19, ConstraintId::Ic1, ConstraintId::Ic19],
                parallel: false,
            },
        );
        let ids: Vec<ConstraintId> = summary.reports.keys().copied().collect();
        assert_eq!(ids, vec![ConstraintId::Ic1, ConstraintId::Ic19]);
        assert!(summary.all_passed());
    }

    #[test]
    fn named_lookup() {
        let g = normalized(fixtures::ABBREVIATED_CUBE);
        assert_eq!(
            validate_named(&g, "ic-3").map(|r| r.constraint),
            Ok(ConstraintId::Ic3)
        );
        assert!(matches!(
            validate_named(&g, "IC-99"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
