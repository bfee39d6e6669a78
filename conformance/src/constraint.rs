//! Integrity constraint identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// One of the 21 RDF Data Cube integrity constraints.
///
/// Parses from `IC-N`, `ICN`, `icN` or a bare `N` (1..=21) and displays as
/// `IC-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintId {
    /// Every observation has exactly one `qb:dataSet`.
    Ic1,
    /// Every data set has exactly one `qb:structure`.
    Ic2,
    /// Every DSD includes at least one measure.
    Ic3,
    /// Every dimension declares an `rdfs:range`.
    Ic4,
    /// Dimensions ranging over `skos:Concept` declare a `qb:codeList`.
    Ic5,
    /// Only attributes may carry `qb:componentRequired`.
    Ic6,
    /// Every slice key is attached to a DSD.
    Ic7,
    /// Slice key properties are components of the DSD.
    Ic8,
    /// Every slice has exactly one `qb:sliceStructure`.
    Ic9,
    /// Slices fix a value for every slice-key dimension.
    Ic10,
    /// Observations carry a value for every dimension.
    Ic11,
    /// No two observations in a data set share all dimension values.
    Ic12,
    /// Observations carry every required attribute.
    Ic13,
    /// Observations carry every measure (no measure dimension).
    Ic14,
    /// The measure named by `qb:measureType` has exactly one value.
    Ic15,
    /// Measure-dimension observations carry no other measure.
    Ic16,
    /// A measure-dimension cube has one observation per measure.
    Ic17,
    /// Slice members belong to the slice's data set.
    Ic18,
    /// Coded values come from the dimension's concept scheme or collection.
    Ic19,
    /// Coded values are reachable in the hierarchy.
    Ic20,
    /// Coded values are reachable in the hierarchy through an inverse property.
    Ic21,
}

impl ConstraintId {
    /// All constraints in numeric order.
    pub const ALL: [ConstraintId; 21] = [
        ConstraintId::Ic1,
        ConstraintId::Ic2,
        ConstraintId::Ic3,
        ConstraintId::Ic4,
        ConstraintId::Ic5,
        ConstraintId::Ic6,
        ConstraintId::Ic7,
        ConstraintId::Ic8,
        ConstraintId::Ic9,
        ConstraintId::Ic10,
        ConstraintId::Ic11,
        ConstraintId::Ic12,
        ConstraintId::Ic13,
        ConstraintId::Ic14,
        ConstraintId::Ic15,
        ConstraintId::Ic16,
        ConstraintId::Ic17,
        ConstraintId::Ic18,
        ConstraintId::Ic19,
        ConstraintId::Ic20,
        ConstraintId::Ic21,
    ];

    /// The constraint number, 1..=21.
    #[must_use]
    pub fn number(self) -> u8 {
        // Declaration order matches numbering.
        self as u8 + 1
    }

    /// Looks a constraint up by number.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The short title used in the RDF Data Cube recommendation.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ConstraintId::Ic1 => "Unique DataSet",
            ConstraintId::Ic2 => "Unique DSD",
            ConstraintId::Ic3 => "DSD includes measure",
            ConstraintId::Ic4 => "Dimensions have range",
            ConstraintId::Ic5 => "Concept dimensions have code lists",
            ConstraintId::Ic6 => "Only attributes may be optional",
            ConstraintId::Ic7 => "Slice Keys must be declared",
            ConstraintId::Ic8 => "Slice Keys consistent with DSD",
            ConstraintId::Ic9 => "Unique slice structure",
            ConstraintId::Ic10 => "Slice dimensions complete",
            ConstraintId::Ic11 => "All dimensions required",
            ConstraintId::Ic12 => "No duplicate observations",
            ConstraintId::Ic13 => "Required attributes",
            ConstraintId::Ic14 => "All measures present",
            ConstraintId::Ic15 => "Measure dimension consistent",
            ConstraintId::Ic16 => "Single measure on measure dimension observation",
            ConstraintId::Ic17 => "All measures present in measures dimension cube",
            ConstraintId::Ic18 => "Consistent data set links",
            ConstraintId::Ic19 => "Codes from code list",
            ConstraintId::Ic20 => "Codes from hierarchy",
            ConstraintId::Ic21 => "Codes from hierarchy (inverse)",
        }
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IC-{}", self.number())
    }
}

impl FromStr for ConstraintId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ic") => {
                trimmed[2..].trim_start_matches('-')
            }
            _ => trimmed,
        };
        digits
            .parse::<u8>()
            .ok()
            .and_then(ConstraintId::from_number)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown constraint id: {:?}", s)))
    }
}

impl Serialize for ConstraintId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_matches_declaration_order() {
        for (i, id) in ConstraintId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.number()), i + 1);
            assert_eq!(ConstraintId::from_number(id.number()), Some(*id));
        }
        assert_eq!(ConstraintId::from_number(0), None);
        assert_eq!(ConstraintId::from_number(22), None);
    }

    #[test]
    fn parses_common_spellings() {
        for s in ["IC-12", "IC12", "ic12", "ic-12", "12", " IC-12 "] {
            assert_eq!(s.parse::<ConstraintId>(), Ok(ConstraintId::Ic12), "{}", s);
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        for s in ["IC-0", "IC-22", "IC", "", "foo", "IC-1a", "-3"] {
            assert!(
                matches!(s.parse::<ConstraintId>(), Err(Error::InvalidArgument(_))),
                "{} should not parse",
                s
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for id in ConstraintId::ALL {
            assert_eq!(id.to_string().parse::<ConstraintId>(), Ok(id));
        }
        assert_eq!(ConstraintId::Ic21.to_string(), "IC-21");
    }
}
