//! Proximity connections between particles
//!
//! Connections are found once, at generation time, with an ordered pairwise
//! scan that stops as soon as the cap is reached. The result is the first
//! `cap` qualifying pairs in scan order, not the `cap` closest pairs.

use glam::Vec3;

/// Unordered pair of particle indices, stored with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub a: u32,
    pub b: u32,
}

impl Connection {
    pub fn new(i: usize, j: usize) -> Self {
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        Self {
            a: a as u32,
            b: b as u32,
        }
    }

    pub fn length(&self, positions: &[Vec3]) -> f32 {
        positions[self.a as usize].distance(positions[self.b as usize])
    }
}

/// Scans pairs `(i, j)`, `i < j`, in increasing `i` then `j` and emits every
/// pair closer than `threshold`. Pairs after the `cap`-th hit are never
/// evaluated.
pub fn find_connections(positions: &[Vec3], threshold: f32, cap: usize) -> Vec<Connection> {
    let mut connections = Vec::with_capacity(cap);
    if cap == 0 {
        return connections;
    }

    for (i, pi) in positions.iter().enumerate() {
        for (j, pj) in positions.iter().enumerate().skip(i + 1) {
            if pi.distance(*pj) < threshold {
                connections.push(Connection::new(i, j));
                if connections.len() == cap {
                    return connections;
                }
            }
        }
    }

    connections
}
