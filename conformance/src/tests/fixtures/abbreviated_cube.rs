//! A small cube written with every shortcut the normalizer expands.
//!
//! Component specs use `qb:dimension`/`qb:measure`/`qb:attribute`, the unit is
//! attached once at data set level, the status once per slice, and the
//! slice fixes `ex:refArea` for its members. Observations `o1` and `o2` only
//! become complete after normalization.

/// Abbreviated cube with a concept-scheme coded dimension and one slice.
pub const ABBREVIATED_CUBE: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix qb:   <http://purl.org/linked-data/cube#> .
@prefix ex:   <http://example.org/ns#> .

ex:dsd a qb:DataStructureDefinition ;
    qb:component
        [ qb:dimension ex:refArea ] ,
        [ qb:dimension ex:refPeriod ] ,
        [ qb:measure ex:value ] ,
        [ qb:attribute ex:unit ;
          qb:componentRequired true ;
          qb:componentAttachment qb:DataSet ] ,
        [ qb:attribute ex:status ;
          qb:componentAttachment qb:Slice ] ;
    qb:sliceKey ex:byArea .

ex:byArea a qb:SliceKey ;
    qb:componentProperty ex:refArea .

ex:refArea rdfs:range skos:Concept ;
    qb:codeList ex:areas .
ex:refPeriod rdfs:range xsd:gYear .
ex:value rdfs:range xsd:decimal .

ex:areas a skos:ConceptScheme .
ex:uk a skos:Concept ; skos:inScheme ex:areas .
ex:fr a skos:Concept ; skos:inScheme ex:areas .

ex:ds a qb:DataSet ;
    qb:structure ex:dsd ;
    ex:unit ex:euro ;
    qb:slice ex:sliceUK .

ex:sliceUK qb:sliceStructure ex:byArea ;
    ex:refArea ex:uk ;
    ex:status ex:final ;
    qb:observation ex:o1 , ex:o2 .

ex:o1 qb:dataSet ex:ds ;
    ex:refPeriod "2020"^^xsd:gYear ;
    ex:value 1.5 .

ex:o2 qb:dataSet ex:ds ;
    ex:refPeriod "2021"^^xsd:gYear ;
    ex:value 2.5 .

ex:o3 qb:dataSet ex:ds ;
    ex:refArea ex:fr ;
    ex:refPeriod "2020"^^xsd:gYear ;
    ex:value 3.5 .
"#;
