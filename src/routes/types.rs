//! Wire model for the standard routes payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a physical track circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CircuitId(pub i64);

impl From<i64> for CircuitId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CircuitId> for i64 {
    fn from(id: CircuitId) -> Self {
        id.0
    }
}

impl fmt::Display for CircuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level payload: `{"StandardRoutes": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRoutes {
    #[serde(rename = "StandardRoutes")]
    pub routes: Vec<StandardRoute>,

    /// Keys not modeled here, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The ordered circuits making up one line's track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRoute {
    /// Two-letter line code, e.g. "RD".
    #[serde(rename = "LineCode")]
    pub line_code: String,

    /// Track number within the line (1 or 2).
    #[serde(rename = "TrackNum")]
    pub track_num: i64,

    #[serde(rename = "TrackCircuits")]
    pub track_circuits: Vec<TrackCircuit>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A circuit reference within a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCircuit {
    #[serde(rename = "CircuitId")]
    pub circuit_id: CircuitId,

    /// Position of the circuit along the route.
    #[serde(rename = "SeqNum")]
    pub seq_num: i64,

    /// Station platform at this circuit, if any.
    #[serde(rename = "StationCode", default)]
    pub station_code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrackCircuit {
    pub fn new(circuit_id: i64, seq_num: i64) -> Self {
        Self {
            circuit_id: CircuitId(circuit_id),
            seq_num,
            station_code: None,
            extra: Map::new(),
        }
    }
}

impl StandardRoute {
    pub fn new(line_code: impl Into<String>, track_num: i64, track_circuits: Vec<TrackCircuit>) -> Self {
        Self {
            line_code: line_code.into(),
            track_num,
            track_circuits,
            extra: Map::new(),
        }
    }
}

impl StandardRoutes {
    pub fn new(routes: Vec<StandardRoute>) -> Self {
        Self {
            routes,
            extra: Map::new(),
        }
    }

    /// Total circuit references across all routes.
    pub fn circuit_count(&self) -> usize {
        self.routes.iter().map(|r| r.track_circuits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "StandardRoutes": [
            {
                "LineCode": "RD",
                "TrackNum": 1,
                "TrackCircuits": [
                    {"SeqNum": 0, "CircuitId": 1, "StationCode": null},
                    {"SeqNum": 1, "CircuitId": 2, "StationCode": "A15"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_wire_names() {
        let data: StandardRoutes = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(data.routes.len(), 1);

        let route = &data.routes[0];
        assert_eq!(route.line_code, "RD");
        assert_eq!(route.track_num, 1);
        assert_eq!(route.track_circuits[1].circuit_id, CircuitId(2));
        assert_eq!(route.track_circuits[1].station_code.as_deref(), Some("A15"));
        assert_eq!(data.circuit_count(), 2);
    }

    #[test]
    fn test_missing_station_code_defaults_to_none() {
        let circuit: TrackCircuit = serde_json::from_str(r#"{"CircuitId": 5, "SeqNum": 3}"#).unwrap();
        assert_eq!(circuit, TrackCircuit::new(5, 3));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let json = serde_json::to_value(TrackCircuit::new(7, 2)).unwrap();
        assert_eq!(json["CircuitId"], 7);
        assert_eq!(json["SeqNum"], 2);
        assert!(json["StationCode"].is_null());
    }

    #[test]
    fn test_unmodeled_keys_pass_through() {
        let json = r#"{
            "StandardRoutes": [
                {
                    "LineCode": "RD",
                    "TrackNum": 1,
                    "Direction": "N",
                    "TrackCircuits": [{"SeqNum": 0, "CircuitId": 1, "StationCode": null, "Extra": 1}]
                }
            ],
            "Meta": "v2"
        }"#;
        let data: StandardRoutes = serde_json::from_str(json).unwrap();
        assert_eq!(data.extra["Meta"], "v2");
        assert_eq!(data.routes[0].extra["Direction"], "N");
        assert_eq!(data.routes[0].track_circuits[0].extra["Extra"], 1);
        assert!(!data.routes[0].extra.contains_key("TrackCircuits"));

        let out = serde_json::to_value(&data).unwrap();
        assert_eq!(out["Meta"], "v2");
        assert_eq!(out["StandardRoutes"][0]["Direction"], "N");
        assert_eq!(out["StandardRoutes"][0]["TrackCircuits"][0]["Extra"], 1);
    }

    #[test]
    fn test_non_numeric_seq_num_is_rejected() {
        let result = serde_json::from_str::<TrackCircuit>(r#"{"CircuitId": 5, "SeqNum": "x"}"#);
        assert!(result.is_err());
    }
}
