//! Circuit ordering and duplicate detection.

use std::collections::BTreeMap;
use std::fmt;

use crate::routes::types::{CircuitId, StandardRoute, StandardRoutes};

/// A circuit ID referenced more than once within a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCircuit {
    pub line_code: String,
    pub track_num: i64,
    pub circuit_id: CircuitId,
    pub occurrences: usize,
}

impl fmt::Display for DuplicateCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate circuit ID in {} track {} configuration: circuit {} appears {} times",
            self.line_code, self.track_num, self.circuit_id, self.occurrences
        )
    }
}

/// Totals for one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSummary {
    pub routes: usize,
    pub circuits: usize,
    pub duplicates: Vec<DuplicateCircuit>,
}

/// Sort one route's circuits by SeqNum and report repeated circuit IDs.
///
/// Duplicates are left in place. Each repeated ID is reported once, in
/// ascending ID order, with its total count.
pub fn normalize_route(route: &mut StandardRoute) -> Vec<DuplicateCircuit> {
    let mut occurrences: BTreeMap<CircuitId, usize> = BTreeMap::new();
    for circuit in &route.track_circuits {
        *occurrences.entry(circuit.circuit_id).or_insert(0) += 1;
    }

    // stable: SeqNum ties keep received order
    route.track_circuits.sort_by_key(|c| c.seq_num);

    occurrences
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(circuit_id, count)| {
            let duplicate = DuplicateCircuit {
                line_code: route.line_code.clone(),
                track_num: route.track_num,
                circuit_id,
                occurrences: count,
            };
            tracing::warn!(
                line_code = %duplicate.line_code,
                track_num = duplicate.track_num,
                circuit_id = %duplicate.circuit_id,
                occurrences = duplicate.occurrences,
                "{}",
                duplicate
            );
            duplicate
        })
        .collect()
}

/// Normalize every route in array order.
pub fn normalize(data: &mut StandardRoutes) -> RouteSummary {
    let mut summary = RouteSummary {
        routes: data.routes.len(),
        circuits: data.circuit_count(),
        duplicates: Vec::new(),
    };

    for route in &mut data.routes {
        summary.duplicates.extend(normalize_route(route));
    }

    tracing::info!(
        routes = summary.routes,
        circuits = summary.circuits,
        duplicates = summary.duplicates.len(),
        "Standard routes normalized"
    );

    summary
}
