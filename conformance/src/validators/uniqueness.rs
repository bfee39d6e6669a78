//! Exact-cardinality checks: IC-1, IC-2 and IC-9.

use qb_store::{Graph, Node};

use crate::constraint::ConstraintId;
use crate::path::Join;
use crate::report::{ViolationDetail, ViolationReport};
use crate::terms::terms;

/// IC-1: every `qb:Observation` has exactly one `qb:dataSet`.
#[must_use]
pub fn unique_data_set(graph: &Graph) -> ViolationReport {
    let t = terms();
    exactly_one(graph, ConstraintId::Ic1, &t.observation_class, &t.data_set)
}

/// IC-2: every `qb:DataSet` has exactly one `qb:structure`.
#[must_use]
pub fn unique_structure(graph: &Graph) -> ViolationReport {
    let t = terms();
    exactly_one(graph, ConstraintId::Ic2, &t.data_set_class, &t.structure)
}

/// IC-9: every `qb:Slice` has exactly one `qb:sliceStructure`.
#[must_use]
pub fn unique_slice_structure(graph: &Graph) -> ViolationReport {
    let t = terms();
    exactly_one(graph, ConstraintId::Ic9, &t.slice_class, &t.slice_structure)
}

/// Flags instances of `class` whose `predicate` object set is not a
/// singleton. The detail is the actual set, empty when the link is missing.
fn exactly_one(graph: &Graph, id: ConstraintId, class: &Node, predicate: &Node) -> ViolationReport {
    let rows = Join::new()
        .require(terms().rdf_type.clone(), class.clone())
        .collect(predicate.clone())
        .run(graph, None);

    let mut report = ViolationReport::new(id);
    for (subject, mut collected) in rows {
        let values = collected.pop().unwrap_or_default();
        if values.len() != 1 {
            report.flag(subject, ViolationDetail::Nodes(values));
        }
    }
    report
}
