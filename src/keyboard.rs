use crate::error::GraphError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Undirected, unit-weight graph of physical key adjacencies.
///
/// Vertices are identified by their letter. Edges are unique per unordered
/// pair; adding `b-a` after `a-b` is rejected.
#[derive(Debug, Clone, Default)]
pub struct KeyboardGraph {
    vertices: Vec<char>,
    positions: HashMap<char, usize>,
    edges: HashSet<(usize, usize)>,
}

impl KeyboardGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, letter: char) -> Result<(), GraphError> {
        if self.positions.contains_key(&letter) {
            return Err(GraphError::VertexAlreadyExists(letter));
        }
        self.positions.insert(letter, self.vertices.len());
        self.vertices.push(letter);
        Ok(())
    }

    pub fn add_edge(&mut self, a: char, b: char) -> Result<(), GraphError> {
        let key = self.edge_key(a, b)?;
        if !self.edges.insert(key) {
            return Err(GraphError::EdgeAlreadyExists(a, b));
        }
        Ok(())
    }

    /// Fails unless `a` and `b` are adjacent, in either direction.
    pub fn edge(&self, a: char, b: char) -> Result<(), GraphError> {
        let key = self.edge_key(a, b)?;
        if self.edges.contains(&key) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound(a, b))
        }
    }

    pub fn has_edge(&self, a: char, b: char) -> bool {
        self.edge(a, b).is_ok()
    }

    /// Number of registered vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[char] {
        &self.vertices
    }

    fn edge_key(&self, a: char, b: char) -> Result<(usize, usize), GraphError> {
        let ia = *self
            .positions
            .get(&a)
            .ok_or(GraphError::VertexNotFound(a))?;
        let ib = *self
            .positions
            .get(&b)
            .ok_or(GraphError::VertexNotFound(b))?;
        Ok((ia.min(ib), ia.max(ib)))
    }

    /// Initial distances: 0 on the diagonal, 1 for adjacent keys, `cap` elsewhere.
    pub fn adjacency_with_cap(&self, cap: u32) -> DistanceMatrix {
        let n = self.order();
        let mut dist = vec![cap; n * n];
        for i in 0..n {
            dist[i * n + i] = 0;
        }
        for &(a, b) in &self.edges {
            if a != b {
                dist[a * n + b] = 1;
                dist[b * n + a] = 1;
            }
        }
        DistanceMatrix {
            letters: self.vertices.clone(),
            dist,
        }
    }

    /// Floyd-Warshall relaxation over all registered vertices.
    ///
    /// Unreachable pairs keep `cap`. The cap must exceed every true shortest
    /// path in the graph, otherwise paths routed through a capped pair come
    /// out too short.
    pub fn all_pairs_shortest_path(&self, cap: u32) -> Result<DistanceMatrix, GraphError> {
        if self.vertices.is_empty() {
            return Err(GraphError::NoVertices);
        }

        let mut matrix = self.adjacency_with_cap(cap);
        let n = self.order();
        let dist = &mut matrix.dist;

        for k in 0..n {
            for i in 0..n {
                let via_i = dist[i * n + k];
                for j in 0..n {
                    let through = via_i.saturating_add(dist[k * n + j]);
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                    }
                }
            }
        }

        debug!(
            "Relaxed {} vertices / {} edges (cap {})",
            n,
            self.edge_count(),
            cap
        );
        Ok(matrix)
    }
}

/// Dense K x K minimum hop counts between letters. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    letters: Vec<char>,
    dist: Vec<u32>,
}

impl DistanceMatrix {
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, a: char, b: char) -> Option<u32> {
        let n = self.letters.len();
        let ia = self.letters.iter().position(|&c| c == a)?;
        let ib = self.letters.iter().position(|&c| c == b)?;
        Some(self.dist[ia * n + ib])
    }

    /// All `(from, to, distance)` triples in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char, u32)> + '_ {
        let n = self.letters.len();
        self.dist
            .iter()
            .enumerate()
            .map(move |(idx, &d)| (self.letters[idx / n], self.letters[idx % n], d))
    }

    pub fn max_distance(&self) -> u32 {
        self.dist.iter().copied().max().unwrap_or(0)
    }
}
