// voronoi/sweep/src/dcel.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The doubly connected edge list the sweep grows its output into.
//!
//! Vertices and half-edges live in append-only arrays addressed by `u32`
//! index; records are never removed, only marked [`UNSET`]. Half-edges are
//! always allocated as twin pairs.

use euclid::default::Point2D;
use serde::{Deserialize, Serialize};

/// Sentinel index for "no record": an unset half-edge origin is a point at
/// infinity, an unset vertex incident edge marks a vertex discarded by the
/// clip pass.
pub const UNSET: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point2D<f64>,
    pub incident_edge: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HalfEdge {
    pub origin: u32,
    pub twin: u32,
    pub next: u32,
    pub prev: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dcel {
    pub vertices: Vec<Vertex>,
    pub half_edges: Vec<HalfEdge>,
}

impl Dcel {
    #[inline]
    pub fn new() -> Dcel {
        Dcel { vertices: vec![], half_edges: vec![] }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.half_edges.clear();
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn add_vertex(&mut self, position: Point2D<f64>, incident_edge: u32) -> u32 {
        self.vertices.push(Vertex { position, incident_edge });
        self.vertices.len() as u32 - 1
    }

    /// Allocates a fresh twin pair of half-edges with everything but the
    /// twin links unset, and returns their indices.
    pub fn add_edge_pair(&mut self) -> (u32, u32) {
        let first = self.half_edges.len() as u32;
        let second = first + 1;
        self.half_edges.push(HalfEdge { origin: UNSET, twin: second, next: UNSET, prev: UNSET });
        self.half_edges.push(HalfEdge { origin: UNSET, twin: first, next: UNSET, prev: UNSET });
        (first, second)
    }

    /// Chains `edge` before `next` around a shared face.
    #[inline]
    pub fn link(&mut self, edge: u32, next: u32) {
        self.half_edges[edge as usize].next = next;
        self.half_edges[next as usize].prev = edge;
    }

    #[inline]
    pub fn origin(&self, edge: u32) -> &Vertex {
        &self.vertices[self.half_edges[edge as usize].origin as usize]
    }

    #[inline]
    pub fn twin(&self, edge: u32) -> &HalfEdge {
        &self.half_edges[self.half_edges[edge as usize].twin as usize]
    }

    #[inline]
    pub fn next(&self, edge: u32) -> &HalfEdge {
        &self.half_edges[self.half_edges[edge as usize].next as usize]
    }

    #[inline]
    pub fn prev(&self, edge: u32) -> &HalfEdge {
        &self.half_edges[self.half_edges[edge as usize].prev as usize]
    }

    #[inline]
    pub fn incident_edge(&self, vertex: u32) -> &HalfEdge {
        &self.half_edges[self.vertices[vertex as usize].incident_edge as usize]
    }
}
