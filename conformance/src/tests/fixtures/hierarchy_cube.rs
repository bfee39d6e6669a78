//! Two hierarchical code lists: `ex:regions` walks `ex:narrower` down from
//! its root, `ex:sectors` declares its edges as the inverse of `ex:broader`.

/// Cube whose dimensions are coded by hierarchical code lists.
pub const HIERARCHY_CUBE: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix qb:   <http://purl.org/linked-data/cube#> .
@prefix ex:   <http://example.org/ns#> .

ex:hdsd a qb:DataStructureDefinition ;
    qb:component
        [ qb:dimension ex:region ] ,
        [ qb:dimension ex:sector ] ,
        [ qb:measure ex:count ] .

ex:region rdfs:range skos:Concept ; qb:codeList ex:regions .
ex:sector rdfs:range skos:Concept ; qb:codeList ex:sectors .

ex:regions a qb:HierarchicalCodeList ;
    qb:hierarchyRoot ex:world ;
    qb:parentChildProperty ex:narrower .
ex:world ex:narrower ex:europe .
ex:europe ex:narrower ex:france .

ex:sectors a qb:HierarchicalCodeList ;
    qb:hierarchyRoot ex:allSectors ;
    qb:parentChildProperty [ owl:inverseOf ex:broader ] .
ex:industry ex:broader ex:allSectors .
ex:mining ex:broader ex:industry .

ex:hds a qb:DataSet ;
    qb:structure ex:hdsd .

ex:h1 qb:dataSet ex:hds ; ex:region ex:france ; ex:sector ex:mining ; ex:count 1 .
ex:h2 qb:dataSet ex:hds ; ex:region ex:europe ; ex:sector ex:industry ; ex:count 2 .
"#;
