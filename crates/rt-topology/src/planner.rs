//! Shortest-travel-time path planning over the live graph.
//!
//! A standard `BinaryHeap<Reverse<..>>` Dijkstra relaxation, with the cost
//! function **node-weighted** rather than edge-weighted: entering a
//! Location costs that Location's own travel time at the planner's vehicle
//! max-speed.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use rt_core::LocationId;

use crate::topology::Topology;

/// Cost wrapper giving `f64` a total order for the heap. Travel times are
/// always finite and non-negative, so `partial_cmp` never returns `None` in
/// practice; the fallback keeps the heap from panicking if it ever did.
#[derive(Copy, Clone, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Compute the shortest-travel-time path from `source` to `target`, skipping
/// any `LocationId` in `blacklist`.
///
/// Returns a sequence that starts immediately after `source` and ends at
/// `target`. Empty if `source == target` or if `target` is unreachable;
/// the caller decides what an empty result means in context (already
/// adjacent, or give up).
pub fn plan(
    topology: &Topology,
    source: LocationId,
    target: LocationId,
    blacklist: &HashSet<LocationId>,
    vehicle_max_speed_kph: f64,
) -> Vec<LocationId> {
    if source == target {
        return Vec::new();
    }

    let n = topology.location_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<LocationId>> = vec![None; n];
    dist[source.index()] = 0.0;

    // Secondary key is strictly increasing insertion order, so equal-cost
    // entries pop in the order they were pushed.
    let mut seq: u64 = 0;
    let mut heap: BinaryHeap<Reverse<(Cost, u64, LocationId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), seq, source)));
    seq += 1;

    while let Some(Reverse((Cost(cost), _, node))) = heap.pop() {
        if node == target {
            return reconstruct(source, &prev, target);
        }
        if cost > dist[node.index()] {
            continue;
        }
        for &neighbour in topology.neighbours(node) {
            if blacklist.contains(&neighbour) {
                continue;
            }
            let step = topology.travel_time(neighbour, vehicle_max_speed_kph);
            let new_cost = cost + step;
            if new_cost < dist[neighbour.index()] {
                dist[neighbour.index()] = new_cost;
                prev[neighbour.index()] = Some(node);
                heap.push(Reverse((Cost(new_cost), seq, neighbour)));
                seq += 1;
            }
        }
    }

    Vec::new()
}

fn reconstruct(
    source: LocationId,
    prev: &[Option<LocationId>],
    target: LocationId,
) -> Vec<LocationId> {
    let mut path = vec![target];
    let mut cur = target;
    loop {
        cur = prev[cur.index()].expect("reachable node has a predecessor chain to source");
        if cur == source {
            break;
        }
        path.push(cur);
    }
    path.reverse();
    path
}
