//! Vocabulary terms as ready-made [`Node`]s.
//!
//! Validators compare against these on every lookup, so they are built
//! once and shared.

use std::sync::OnceLock;

use qb_store::Node;
use qb_vocab::{owl, qb, rdf, rdfs, skos};

/// Every vocabulary node the normalizer and validators read.
#[derive(Debug)]
pub struct Terms {
    /// `rdf:type`.
    pub rdf_type: Node,
    /// `rdfs:range`.
    pub range: Node,
    /// `owl:inverseOf`.
    pub inverse_of: Node,

    /// `qb:Observation`.
    pub observation_class: Node,
    /// `qb:DataSet`.
    pub data_set_class: Node,
    /// `qb:Slice`.
    pub slice_class: Node,
    /// `qb:SliceKey`.
    pub slice_key_class: Node,
    /// `qb:DataStructureDefinition`.
    pub dsd_class: Node,
    /// `qb:DimensionProperty`.
    pub dimension_property: Node,
    /// `qb:MeasureProperty`.
    pub measure_property: Node,
    /// `qb:AttributeProperty`.
    pub attribute_property: Node,
    /// `qb:HierarchicalCodeList`.
    pub hierarchical_code_list: Node,

    /// `qb:observation`.
    pub observation: Node,
    /// `qb:dataSet`.
    pub data_set: Node,
    /// `qb:slice`.
    pub slice: Node,
    /// `qb:structure`.
    pub structure: Node,
    /// `qb:component`.
    pub component: Node,
    /// `qb:componentProperty`.
    pub component_property: Node,
    /// `qb:componentRequired`.
    pub component_required: Node,
    /// `qb:componentAttachment`.
    pub component_attachment: Node,
    /// `qb:dimension`.
    pub dimension: Node,
    /// `qb:measure`.
    pub measure: Node,
    /// `qb:attribute`.
    pub attribute: Node,
    /// `qb:measureType`.
    pub measure_type: Node,
    /// `qb:sliceStructure`.
    pub slice_structure: Node,
    /// `qb:sliceKey`.
    pub slice_key: Node,
    /// `qb:codeList`.
    pub code_list: Node,
    /// `qb:parentChildProperty`.
    pub parent_child_property: Node,
    /// `qb:hierarchyRoot`.
    pub hierarchy_root: Node,

    /// `skos:Concept`.
    pub concept: Node,
    /// `skos:ConceptScheme`.
    pub concept_scheme: Node,
    /// `skos:Collection`.
    pub collection: Node,
    /// `skos:inScheme`.
    pub in_scheme: Node,
    /// `skos:member`.
    pub member: Node,
}

/// Returns the shared term table.
pub fn terms() -> &'static Terms {
    static TERMS: OnceLock<Terms> = OnceLock::new();
    TERMS.get_or_init(|| Terms {
        rdf_type: Node::iri(rdf::TYPE),
        range: Node::iri(rdfs::RANGE),
        inverse_of: Node::iri(owl::INVERSE_OF),

        observation_class: Node::iri(qb::OBSERVATION),
        data_set_class: Node::iri(qb::DATA_SET),
        slice_class: Node::iri(qb::SLICE),
        slice_key_class: Node::iri(qb::SLICE_KEY),
        dsd_class: Node::iri(qb::DATA_STRUCTURE_DEFINITION),
        dimension_property: Node::iri(qb::DIMENSION_PROPERTY),
        measure_property: Node::iri(qb::MEASURE_PROPERTY),
        attribute_property: Node::iri(qb::ATTRIBUTE_PROPERTY),
        hierarchical_code_list: Node::iri(qb::HIERARCHICAL_CODE_LIST),

        observation: Node::iri(qb::OBSERVATION_PROP),
        data_set: Node::iri(qb::DATA_SET_PROP),
        slice: Node::iri(qb::SLICE_PROP),
        structure: Node::iri(qb::STRUCTURE),
        component: Node::iri(qb::COMPONENT),
        component_property: Node::iri(qb::COMPONENT_PROPERTY),
        component_required: Node::iri(qb::COMPONENT_REQUIRED),
        component_attachment: Node::iri(qb::COMPONENT_ATTACHMENT),
        dimension: Node::iri(qb::DIMENSION),
        measure: Node::iri(qb::MEASURE),
        attribute: Node::iri(qb::ATTRIBUTE),
        measure_type: Node::iri(qb::MEASURE_TYPE),
        slice_structure: Node::iri(qb::SLICE_STRUCTURE),
        slice_key: Node::iri(qb::SLICE_KEY_PROP),
        code_list: Node::iri(qb::CODE_LIST),
        parent_child_property: Node::iri(qb::PARENT_CHILD_PROPERTY),
        hierarchy_root: Node::iri(qb::HIERARCHY_ROOT),

        concept: Node::iri(skos::CONCEPT),
        concept_scheme: Node::iri(skos::CONCEPT_SCHEME),
        collection: Node::iri(skos::COLLECTION),
        in_scheme: Node::iri(skos::IN_SCHEME),
        member: Node::iri(skos::MEMBER),
    })
}
