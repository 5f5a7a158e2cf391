//! Job demand types and the demand wire contract.
//!
//! The same `DemandVector` document is serialized by the registration
//! client and accepted by the accounting service's body variant, so both
//! sides of the wire agree on key names by construction.

use serde::{Deserialize, Serialize};

/// Header carrying a job's compute demand.
pub const COMPUTE_HEADER: &str = "Compute";
/// Header carrying a job's storage demand.
pub const STORAGE_HEADER: &str = "Storage";

/// Resource demand declared by a single job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobDemand {
    pub compute: u64,
    pub storage: u64,
}

impl JobDemand {
    /// Parse demand from raw field values. A missing or unparseable field
    /// contributes zero; demand is never negative and never rejected.
    pub fn from_fields(compute: Option<&str>, storage: Option<&str>) -> Self {
        Self {
            compute: parse_units(compute),
            storage: parse_units(storage),
        }
    }
}

impl From<DemandVector> for JobDemand {
    fn from(vector: DemandVector) -> Self {
        Self {
            compute: vector.compute,
            storage: vector.storage,
        }
    }
}

/// A demand vector as carried in a JSON body.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DemandVector {
    #[serde(rename = "Compute-Vector", default)]
    pub compute: u64,
    #[serde(rename = "Storage-Vector", default)]
    pub storage: u64,
}

fn parse_units(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let demand = JobDemand::from_fields(None, None);
        assert_eq!(demand, JobDemand::default());
    }

    #[test]
    fn test_unparseable_fields_default_to_zero() {
        // negative demand parses as a failure, not a negative number
        let demand = JobDemand::from_fields(Some("twenty"), Some("-5"));
        assert_eq!(demand.compute, 0);
        assert_eq!(demand.storage, 0);
    }

    #[test]
    fn test_parses_valid_fields() {
        let demand = JobDemand::from_fields(Some("20"), Some("5"));
        assert_eq!(demand.compute, 20);
        assert_eq!(demand.storage, 5);
    }

    #[test]
    fn test_one_field_absent() {
        let demand = JobDemand::from_fields(Some("10"), None);
        assert_eq!(demand.compute, 10);
        assert_eq!(demand.storage, 0);
    }

    #[test]
    fn test_vector_wire_keys() {
        let vector = DemandVector {
            compute: 40,
            storage: 70,
        };
        let value = serde_json::to_value(vector).unwrap();
        assert_eq!(value["Compute-Vector"], 40);
        assert_eq!(value["Storage-Vector"], 70);
    }

    #[test]
    fn test_vector_partial_body() {
        let vector: DemandVector = serde_json::from_str(r#"{"Compute-Vector": 30}"#).unwrap();
        assert_eq!(vector.compute, 30);
        assert_eq!(vector.storage, 0);
    }
}
