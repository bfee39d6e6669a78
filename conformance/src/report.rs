//! Violation report types: per-node details, per-constraint reports, and
//! whole-run aggregation.

use std::collections::{BTreeMap, BTreeSet};

use qb_store::Node;
use serde::Serialize;

use crate::constraint::ConstraintId;

/// What a constraint found wrong with one offending node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViolationDetail {
    /// A set of related nodes: the actual object set of a property whose
    /// cardinality is wrong, the properties that are missing, or the code
    /// lists a value failed.
    Nodes(BTreeSet<Node>),
    /// A single related node: the missing predicate of a presence check, or
    /// the earlier observation a duplicate repeats.
    Node(Node),
    /// A count that differs from what the constraint requires.
    Count(usize),
}

impl ViolationDetail {
    /// Renders the detail with compacted IRIs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            ViolationDetail::Nodes(nodes) => {
                let items: Vec<String> = nodes.iter().map(Node::display_compact).collect();
                format!("{{{}}}", items.join(", "))
            }
            ViolationDetail::Node(node) => node.display_compact(),
            ViolationDetail::Count(n) => n.to_string(),
        }
    }
}

/// The outcome of one constraint: every offending node with its detail.
///
/// An empty report means the constraint is satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    /// The constraint that produced this report.
    pub constraint: ConstraintId,
    /// Offending nodes, ordered by node.
    pub violations: BTreeMap<Node, ViolationDetail>,
}

impl ViolationReport {
    /// Creates an empty (satisfied) report.
    #[must_use]
    pub fn new(constraint: ConstraintId) -> Self {
        Self {
            constraint,
            violations: BTreeMap::new(),
        }
    }

    /// Records a violation. A later record for the same node replaces the
    /// earlier one.
    pub fn flag(&mut self, node: Node, detail: ViolationDetail) {
        self.violations.insert(node, detail);
    }

    /// Records a violation whose detail is a node set, merging with any set
    /// already recorded for `node`.
    pub fn flag_nodes(&mut self, node: Node, nodes: impl IntoIterator<Item = Node>) {
        let entry = self
            .violations
            .entry(node)
            .or_insert_with(|| ViolationDetail::Nodes(BTreeSet::new()));
        match entry {
            ViolationDetail::Nodes(existing) => existing.extend(nodes),
            other => *other = ViolationDetail::Nodes(nodes.into_iter().collect()),
        }
    }

    /// True if no violation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of offending nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Detail recorded for `node`, if it is in the report.
    #[must_use]
    pub fn get(&self, node: &Node) -> Option<&ViolationDetail> {
        self.violations.get(node)
    }

    /// True if `node` is in the report.
    #[must_use]
    pub fn contains(&self, node: &Node) -> bool {
        self.violations.contains_key(node)
    }

    /// Iterates over offending nodes and details.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &ViolationDetail)> {
        self.violations.iter()
    }
}

/// Aggregated reports from a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    /// One report per constraint that was run.
    pub reports: BTreeMap<ConstraintId, ViolationReport>,
}

impl ValidationSummary {
    /// Wraps a set of reports.
    #[must_use]
    pub fn new(reports: BTreeMap<ConstraintId, ViolationReport>) -> Self {
        Self { reports }
    }

    /// Constraints that reported at least one violation.
    #[must_use]
    pub fn failed_constraints(&self) -> Vec<ConstraintId> {
        self.reports
            .values()
            .filter(|r| !r.is_empty())
            .map(|r| r.constraint)
            .collect()
    }

    /// Returns the count of failed constraints.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.reports.values().filter(|r| !r.is_empty()).count()
    }

    /// Total offending nodes across all constraints.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.reports.values().map(ViolationReport::len).sum()
    }

    /// Returns true if all constraints passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
