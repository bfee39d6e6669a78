//! Checks on the declared structure itself: IC-3 to IC-8.

use qb_store::Graph;

use crate::constraint::ConstraintId;
use crate::path::{connectivity, Join, NodeSet, PropertyPath};
use crate::report::{ViolationDetail, ViolationReport};
use crate::terms::terms;
use crate::validators::{components_of_type, instances, is_a};

/// IC-3: every DSD includes at least one measure property.
#[must_use]
pub fn structure_has_measure(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic3);
    for dsd in instances(graph, &t.dsd_class) {
        if components_of_type(graph, &dsd, &t.measure_property).is_empty() {
            report.flag(dsd, ViolationDetail::Count(0));
        }
    }
    report
}

/// IC-4: every dimension property declares an `rdfs:range`.
#[must_use]
pub fn dimensions_have_range(graph: &Graph) -> ViolationReport {
    let t = terms();
    let rows = Join::new()
        .require(t.rdf_type.clone(), t.dimension_property.clone())
        .collect(t.range.clone())
        .run(graph, None);

    let mut report = ViolationReport::new(ConstraintId::Ic4);
    for (dim, collected) in rows {
        if collected.iter().all(NodeSet::is_empty) {
            report.flag(dim, ViolationDetail::Node(t.range.clone()));
        }
    }
    report
}

/// IC-5: a dimension whose range is `skos:Concept` declares a `qb:codeList`.
#[must_use]
pub fn concept_dimensions_have_code_list(graph: &Graph) -> ViolationReport {
    let t = terms();
    let rows = Join::new()
        .require(t.rdf_type.clone(), t.dimension_property.clone())
        .require(t.range.clone(), t.concept.clone())
        .collect(t.code_list.clone())
        .run(graph, None);

    let mut report = ViolationReport::new(ConstraintId::Ic5);
    for (dim, collected) in rows {
        if collected.iter().all(NodeSet::is_empty) {
            report.flag(dim, ViolationDetail::Node(t.code_list.clone()));
        }
    }
    report
}

/// IC-6: only attribute components may carry `qb:componentRequired`.
///
/// Reports the offending component property, with the component
/// specification that declared it as detail.
#[must_use]
pub fn only_attributes_optional(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic6);
    for triple in graph.triples_with(None, Some(&t.component_required), None) {
        let spec = triple.subject;
        for property in graph.objects(&spec, &t.component_property) {
            if !is_a(graph, &property, &t.attribute_property) {
                report.flag(property, ViolationDetail::Node(spec.clone()));
            }
        }
    }
    report
}

/// IC-7: every slice key is attached to a DSD through `qb:sliceKey`.
#[must_use]
pub fn slice_keys_declared(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic7);
    for key in instances(graph, &t.slice_key_class) {
        let declared = graph
            .subjects(&t.slice_key, &key)
            .iter()
            .any(|dsd| is_a(graph, dsd, &t.dsd_class));
        if !declared {
            report.flag(key, ViolationDetail::Node(t.slice_key.clone()));
        }
    }
    report
}

/// IC-8: the properties of a DSD's slice keys are components of that DSD.
///
/// Keyed by DSD; the detail lists the slice key properties it lacks.
#[must_use]
pub fn slice_keys_consistent(graph: &Graph) -> ViolationReport {
    let t = terms();
    let declared = PropertyPath::of(&[&t.component, &t.component_property]);
    let mut report = ViolationReport::new(ConstraintId::Ic8);

    for triple in graph.triples_with(None, Some(&t.slice_key), None) {
        let (dsd, key) = (triple.subject, triple.object);
        if !is_a(graph, &key, &t.slice_key_class) {
            continue;
        }
        let missing: NodeSet = graph
            .objects(&key, &t.component_property)
            .into_iter()
            .filter(|p| !connectivity(graph, &dsd, &declared, p))
            .collect();
        if !missing.is_empty() {
            report.flag_nodes(dsd, missing);
        }
    }
    report
}
