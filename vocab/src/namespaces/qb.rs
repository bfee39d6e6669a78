//! `qb:` namespace: the RDF Data Cube vocabulary.
//!
//! Classes and properties that drive normalization and the integrity
//! constraints. `qb:DataSet` and `qb:Slice` double as the values of
//! `qb:componentAttachment`.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://purl.org/linked-data/cube#";

/// `qb:Observation`.
pub const OBSERVATION: &str = "http://purl.org/linked-data/cube#Observation";
/// `qb:DataSet`.
pub const DATA_SET: &str = "http://purl.org/linked-data/cube#DataSet";
/// `qb:Slice`.
pub const SLICE: &str = "http://purl.org/linked-data/cube#Slice";
/// `qb:SliceKey`.
pub const SLICE_KEY: &str = "http://purl.org/linked-data/cube#SliceKey";
/// `qb:DataStructureDefinition`.
pub const DATA_STRUCTURE_DEFINITION: &str =
    "http://purl.org/linked-data/cube#DataStructureDefinition";
/// `qb:ComponentSpecification`.
pub const COMPONENT_SPECIFICATION: &str =
    "http://purl.org/linked-data/cube#ComponentSpecification";
/// `qb:ComponentProperty`.
pub const COMPONENT_PROPERTY_CLASS: &str = "http://purl.org/linked-data/cube#ComponentProperty";
/// `qb:DimensionProperty`.
pub const DIMENSION_PROPERTY: &str = "http://purl.org/linked-data/cube#DimensionProperty";
/// `qb:MeasureProperty`.
pub const MEASURE_PROPERTY: &str = "http://purl.org/linked-data/cube#MeasureProperty";
/// `qb:AttributeProperty`.
pub const ATTRIBUTE_PROPERTY: &str = "http://purl.org/linked-data/cube#AttributeProperty";
/// `qb:CodedProperty`.
pub const CODED_PROPERTY: &str = "http://purl.org/linked-data/cube#CodedProperty";
/// `qb:HierarchicalCodeList`.
pub const HIERARCHICAL_CODE_LIST: &str = "http://purl.org/linked-data/cube#HierarchicalCodeList";

/// `qb:observation` (Slice → Observation).
pub const OBSERVATION_PROP: &str = "http://purl.org/linked-data/cube#observation";
/// `qb:dataSet` (Observation → DataSet).
pub const DATA_SET_PROP: &str = "http://purl.org/linked-data/cube#dataSet";
/// `qb:slice` (DataSet → Slice).
pub const SLICE_PROP: &str = "http://purl.org/linked-data/cube#slice";
/// `qb:structure` (DataSet → DSD).
pub const STRUCTURE: &str = "http://purl.org/linked-data/cube#structure";
/// `qb:component` (DSD → ComponentSpecification).
pub const COMPONENT: &str = "http://purl.org/linked-data/cube#component";
/// `qb:componentProperty` (ComponentSpecification|SliceKey → ComponentProperty).
pub const COMPONENT_PROPERTY: &str = "http://purl.org/linked-data/cube#componentProperty";
/// `qb:componentRequired` (ComponentSpecification → xsd:boolean).
pub const COMPONENT_REQUIRED: &str = "http://purl.org/linked-data/cube#componentRequired";
/// `qb:componentAttachment` (ComponentSpecification → qb:DataSet|qb:Slice).
pub const COMPONENT_ATTACHMENT: &str = "http://purl.org/linked-data/cube#componentAttachment";
/// `qb:dimension`.
pub const DIMENSION: &str = "http://purl.org/linked-data/cube#dimension";
/// `qb:measure`.
pub const MEASURE: &str = "http://purl.org/linked-data/cube#measure";
/// `qb:attribute`.
pub const ATTRIBUTE: &str = "http://purl.org/linked-data/cube#attribute";
/// `qb:measureType`, the distinguished measure dimension.
pub const MEASURE_TYPE: &str = "http://purl.org/linked-data/cube#measureType";
/// `qb:sliceStructure` (Slice → SliceKey).
pub const SLICE_STRUCTURE: &str = "http://purl.org/linked-data/cube#sliceStructure";
/// `qb:sliceKey` (DSD → SliceKey).
pub const SLICE_KEY_PROP: &str = "http://purl.org/linked-data/cube#sliceKey";
/// `qb:codeList` (CodedProperty → code list).
pub const CODE_LIST: &str = "http://purl.org/linked-data/cube#codeList";
/// `qb:parentChildProperty` (HierarchicalCodeList → Property | inverse wrapper).
pub const PARENT_CHILD_PROPERTY: &str = "http://purl.org/linked-data/cube#parentChildProperty";
/// `qb:hierarchyRoot` (HierarchicalCodeList → root code).
pub const HIERARCHY_ROOT: &str = "http://purl.org/linked-data/cube#hierarchyRoot";
/// `qb:concept` (ComponentProperty → skos:Concept).
pub const CONCEPT: &str = "http://purl.org/linked-data/cube#concept";

/// Returns the `qb:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "qb",
            iri: NS,
            label: "RDF Data Cube",
        },
        terms: vec![
            Term::class(OBSERVATION, "Observation"),
            Term::class(DATA_SET, "DataSet"),
            Term::class(SLICE, "Slice"),
            Term::class(SLICE_KEY, "SliceKey"),
            Term::class(DATA_STRUCTURE_DEFINITION, "DataStructureDefinition"),
            Term::class(COMPONENT_SPECIFICATION, "ComponentSpecification"),
            Term::class(COMPONENT_PROPERTY_CLASS, "ComponentProperty"),
            Term::class(DIMENSION_PROPERTY, "DimensionProperty"),
            Term::class(MEASURE_PROPERTY, "MeasureProperty"),
            Term::class(ATTRIBUTE_PROPERTY, "AttributeProperty"),
            Term::class(CODED_PROPERTY, "CodedProperty"),
            Term::class(HIERARCHICAL_CODE_LIST, "HierarchicalCodeList"),
            Term::property(OBSERVATION_PROP, "observation"),
            Term::property(DATA_SET_PROP, "dataSet"),
            Term::property(SLICE_PROP, "slice"),
            Term::property(STRUCTURE, "structure"),
            Term::property(COMPONENT, "component"),
            Term::property(COMPONENT_PROPERTY, "componentProperty"),
            Term::property(COMPONENT_REQUIRED, "componentRequired"),
            Term::property(COMPONENT_ATTACHMENT, "componentAttachment"),
            Term::property(DIMENSION, "dimension"),
            Term::property(MEASURE, "measure"),
            Term::property(ATTRIBUTE, "attribute"),
            Term::property(MEASURE_TYPE, "measureType"),
            Term::property(SLICE_STRUCTURE, "sliceStructure"),
            Term::property(SLICE_KEY_PROP, "sliceKey"),
            Term::property(CODE_LIST, "codeList"),
            Term::property(PARENT_CHILD_PROPERTY, "parentChildProperty"),
            Term::property(HIERARCHY_ROOT, "hierarchyRoot"),
            Term::property(CONCEPT, "concept"),
        ],
    }
}
