//! Code list membership: IC-19, IC-20 and IC-21.
//!
//! All three walk each observation's coded dimensions and test the value
//! against the code lists its dimension declares. Reports are keyed by the
//! offending value, with the lists it failed as detail.

use std::collections::HashMap;

use qb_store::{Graph, Node};

use crate::constraint::ConstraintId;
use crate::path::{transitive_closure, transitive_connectivity, Direction, NodeSet, PropertyPath};
use crate::report::ViolationReport;
use crate::terms::terms;
use crate::validators::{is_a, observation_components};

/// A coded value found on an observation, with the lists of its dimension.
struct CodedValue {
    value: Node,
    lists: Vec<Node>,
}

/// Every `(value, code lists)` pair found on observations.
///
/// Only dimensions with at least one list accepted by `keep` are visited.
fn coded_values(graph: &Graph, keep: impl Fn(&Node) -> bool) -> Vec<CodedValue> {
    let t = terms();
    let mut found = Vec::new();
    for (obs, props) in observation_components(graph) {
        for dim in props.iter().filter(|p| is_a(graph, p, &t.dimension_property)) {
            let lists: Vec<Node> = graph
                .objects(dim, &t.code_list)
                .into_iter()
                .filter(|l| keep(l))
                .collect();
            if lists.is_empty() {
                continue;
            }
            for value in graph.objects(&obs, dim) {
                found.push(CodedValue {
                    value,
                    lists: lists.clone(),
                });
            }
        }
    }
    found
}

/// IC-19: a coded value is a `skos:Concept` drawn from its dimension's
/// concept scheme (`skos:inScheme`) or collection (`skos:member+`).
///
/// A value passes if it satisfies at least one applicable list.
#[must_use]
pub fn codes_from_code_list(graph: &Graph) -> ViolationReport {
    let t = terms();
    let member_of = PropertyPath::of(&[&t.member]);
    let applicable = |l: &Node| is_a(graph, l, &t.concept_scheme) || is_a(graph, l, &t.collection);
    let mut report = ViolationReport::new(ConstraintId::Ic19);

    for coded in coded_values(graph, applicable) {
        let is_concept = is_a(graph, &coded.value, &t.concept);
        let failing: NodeSet = coded
            .lists
            .iter()
            .filter(|list| {
                let member = if is_a(graph, list, &t.concept_scheme) {
                    graph.contains(&coded.value, &t.in_scheme, list)
                } else {
                    transitive_connectivity(
                        graph,
                        list,
                        &member_of,
                        &t.member,
                        &coded.value,
                        Direction::Forward,
                    )
                };
                !(is_concept && member)
            })
            .cloned()
            .collect();
        if failing.len() == coded.lists.len() {
            report.flag_nodes(coded.value, failing);
        }
    }
    report
}

/// IC-20: a value coded by a hierarchical code list is reachable from one of
/// its roots through every IRI `qb:parentChildProperty`, zero hops included.
///
/// A list without any parent-child property accepts only its roots.
#[must_use]
pub fn codes_from_hierarchy(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut hierarchy = Hierarchy::new(graph);
    let mut report = ViolationReport::new(ConstraintId::Ic20);

    for coded in coded_values(graph, |l| is_a(graph, l, &t.hierarchical_code_list)) {
        for list in &coded.lists {
            let declared = graph.objects(list, &t.parent_child_property);
            let reachable = if declared.is_empty() {
                graph.contains(list, &t.hierarchy_root, &coded.value)
            } else {
                declared
                    .iter()
                    .filter(|p| p.is_iri())
                    .all(|p| hierarchy.reaches(list, p, Direction::Forward, &coded.value))
            };
            if !reachable {
                report.flag_nodes(coded.value.clone(), [list.clone()]);
            }
        }
    }
    report
}

/// IC-21: like IC-20, for parent-child properties declared as a blank node
/// `[ owl:inverseOf p ]`. The hierarchy is walked from the root against the
/// direction of `p`.
#[must_use]
pub fn codes_from_inverse_hierarchy(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut hierarchy = Hierarchy::new(graph);
    let mut report = ViolationReport::new(ConstraintId::Ic21);

    for coded in coded_values(graph, |l| is_a(graph, l, &t.hierarchical_code_list)) {
        for list in &coded.lists {
            let inverses: Vec<Node> = graph
                .objects(list, &t.parent_child_property)
                .iter()
                .filter(|p| p.is_blank())
                .flat_map(|wrapper| graph.objects(wrapper, &t.inverse_of))
                .filter(Node::is_iri)
                .collect();
            let reachable = inverses
                .iter()
                .all(|p| hierarchy.reaches(list, p, Direction::Inverse, &coded.value));
            if !reachable {
                report.flag_nodes(coded.value.clone(), [list.clone()]);
            }
        }
    }
    report
}

/// Memoized hierarchy closures: one walk per `(list, property, direction)`
/// however many observations share the list.
struct Hierarchy<'g> {
    graph: &'g Graph,
    roots_of: PropertyPath,
    reached: HashMap<(Node, Node, Direction), NodeSet>,
}

impl<'g> Hierarchy<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            roots_of: PropertyPath::of(&[&terms().hierarchy_root]),
            reached: HashMap::new(),
        }
    }

    fn reaches(
        &mut self,
        list: &Node,
        property: &Node,
        direction: Direction,
        value: &Node,
    ) -> bool {
        let (graph, roots_of) = (self.graph, &self.roots_of);
        self.reached
            .entry((list.clone(), property.clone(), direction))
            .or_insert_with(|| {
                let roots = roots_of.reachable_from(graph, list);
                transitive_closure(graph, roots, property, direction)
            })
            .contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ViolationDetail;
    use crate::tests::{cube, ex, fixtures, normalized};

    const SCHEME_AND_COLLECTION: &str = r#"
        ex:dsd qb:component [ qb:dimension ex:area ] , [ qb:dimension ex:sex ] .
        ex:area rdfs:range skos:Concept ; qb:codeList ex:areas .
        ex:sex rdfs:range skos:Concept ; qb:codeList ex:sexes .
        ex:areas a skos:ConceptScheme .
        ex:uk a skos:Concept ; skos:inScheme ex:areas .
        ex:mars a skos:Concept .
        ex:sexes a skos:Collection ; skos:member ex:binary .
        ex:binary a skos:Collection ; skos:member ex:f , ex:m .
        ex:f a skos:Concept .
        ex:m a skos:Concept .
        ex:x a skos:Concept .
        ex:ds qb:structure ex:dsd .
    "#;

    #[test]
    fn scheme_and_collection_membership() {
        let g = normalized(&format!(
            "{}{}",
            SCHEME_AND_COLLECTION,
            r#"
            ex:o1 qb:dataSet ex:ds ; ex:area ex:uk ; ex:sex ex:f .
            ex:o2 qb:dataSet ex:ds ; ex:area ex:mars ; ex:sex ex:x .
            ex:o3 qb:dataSet ex:ds ; ex:area ex:nowhere ; ex:sex ex:m .
            "#
        ));
        let report = codes_from_code_list(&g);
        assert_eq!(report.len(), 3);
        assert_eq!(
            report.get(&ex("mars")),
            Some(&ViolationDetail::Nodes([ex("areas")].into()))
        );
        assert!(report.contains(&ex("x")));
        // Untyped values fail even when listed.
        assert!(report.contains(&ex("nowhere")));
        assert!(!report.contains(&ex("f")));
        assert!(!report.contains(&ex("m")));
    }

    #[test]
    fn value_passes_with_one_satisfied_list() {
        let g = normalized(
            r#"
            ex:dsd qb:component [ qb:dimension ex:area ] .
            ex:area qb:codeList ex:a , ex:b .
            ex:a a skos:ConceptScheme .
            ex:b a skos:ConceptScheme .
            ex:uk a skos:Concept ; skos:inScheme ex:b .
            ex:ds qb:structure ex:dsd .
            ex:o1 qb:dataSet ex:ds ; ex:area ex:uk .
            "#,
        );
        assert!(codes_from_code_list(&g).is_empty());
    }

    #[test]
    fn hierarchy_reachability_follows_edges() {
        let g = normalized(fixtures::HIERARCHY_CUBE);
        assert!(codes_from_hierarchy(&g).is_empty());
        assert!(codes_from_inverse_hierarchy(&g).is_empty());

        let mut g: Graph = cube(fixtures::HIERARCHY_CUBE)
            .iter()
            .filter(|t| !(t.subject == ex("world") && t.object == ex("europe")))
            .cloned()
            .collect();
        crate::normalize::normalize(&mut g);
        let report = codes_from_hierarchy(&g);
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.get(&ex("france")),
            Some(&ViolationDetail::Nodes([ex("regions")].into()))
        );
        assert!(report.contains(&ex("europe")));
    }

    #[test]
    fn inverse_hierarchy_flags_unreachable_value() {
        let mut g = cube(fixtures::HIERARCHY_CUBE);
        g.insert(ex("h3"), terms().data_set.clone(), ex("hds"));
        g.insert(ex("h3"), ex("sector"), ex("farming"));
        crate::normalize::normalize(&mut g);
        let report = codes_from_inverse_hierarchy(&g);
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.get(&ex("farming")),
            Some(&ViolationDetail::Nodes([ex("sectors")].into()))
        );
        assert!(codes_from_hierarchy(&g).is_empty());
    }

    #[test]
    fn list_without_edges_accepts_only_roots() {
        let g = normalized(
            r#"
            ex:dsd qb:component [ qb:dimension ex:area ] .
            ex:area qb:codeList ex:flat .
            ex:flat a qb:HierarchicalCodeList ; qb:hierarchyRoot ex:a , ex:b .
            ex:ds qb:structure ex:dsd .
            ex:o1 qb:dataSet ex:ds ; ex:area ex:a .
            ex:o2 qb:dataSet ex:ds ; ex:area ex:c .
            "#,
        );
        let report = codes_from_hierarchy(&g);
        assert_eq!(report.len(), 1);
        assert!(report.contains(&ex("c")));
    }

    #[test]
    fn cyclic_hierarchy_terminates() {
        let g = normalized(
            r#"
            ex:dsd qb:component [ qb:dimension ex:area ] .
            ex:area qb:codeList ex:loop .
            ex:loop a qb:HierarchicalCodeList ;
                qb:hierarchyRoot ex:a ;
                qb:parentChildProperty ex:narrower .
            ex:a ex:narrower ex:b . ex:b ex:narrower ex:a . ex:b ex:narrower ex:b .
            ex:ds qb:structure ex:dsd .
            ex:o1 qb:dataSet ex:ds ; ex:area ex:b .
            ex:o2 qb:dataSet ex:ds ; ex:area ex:z .
            "#,
        );
        let report = codes_from_hierarchy(&g);
        assert_eq!(report.len(), 1);
        assert!(report.contains(&ex("z")));
    }
}
