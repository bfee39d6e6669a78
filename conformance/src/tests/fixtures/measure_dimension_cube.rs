//! A cube that uses `qb:measureType`: one observation per measure per year.

/// Measure-dimension cube with two measures and two years.
pub const MEASURE_DIMENSION_CUBE: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix qb:   <http://purl.org/linked-data/cube#> .
@prefix ex:   <http://example.org/ns#> .

ex:mdsd a qb:DataStructureDefinition ;
    qb:component
        [ qb:dimension ex:year ] ,
        [ qb:dimension qb:measureType ] ,
        [ qb:measure ex:population ] ,
        [ qb:measure ex:gdp ] .

ex:year rdfs:range xsd:gYear .
qb:measureType rdfs:range qb:MeasureProperty .

ex:mds a qb:DataSet ;
    qb:structure ex:mdsd .

ex:m1 qb:dataSet ex:mds ; ex:year "2020"^^xsd:gYear ;
    qb:measureType ex:population ; ex:population 100 .
ex:m2 qb:dataSet ex:mds ; ex:year "2020"^^xsd:gYear ;
    qb:measureType ex:gdp ; ex:gdp 5.5 .
ex:m3 qb:dataSet ex:mds ; ex:year "2021"^^xsd:gYear ;
    qb:measureType ex:population ; ex:population 110 .
ex:m4 qb:dataSet ex:mds ; ex:year "2021"^^xsd:gYear ;
    qb:measureType ex:gdp ; ex:gdp 6.0 .
"#;
