// voronoi/sweep/src/beachline.rs
//
// Copyright © 2019 The Voronoi Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The beachline: the sweep's evolving lower envelope of parabolic arcs.
//!
//! The envelope is stored as a strict binary tree whose leaves are the
//! arcs in left-to-right order and whose internal nodes are the
//! breakpoints between adjacent arcs. Leaves also chain into a doubly
//! linked list mirroring the in-order traversal, so an arc's neighbors are
//! always one hop away. The tree is height-balanced: every internal node
//! caches its subtree height and insertions/removals restore the AVL
//! condition with at most a couple of rotations along the updated path.
//!
//! All nodes live in one arena and reference each other by `u32` index;
//! removed slots go on a free list and are reused. Breakpoint positions
//! are never cached: they are recomputed from the site pair and the
//! sweep y every time they are needed, so the tree's ordering is always
//! consistent with the sweep position passed in.

use euclid::default::Point2D;
use voronoi_geometry::{parabola, POINT_EPSILON};

use crate::dcel::Dcel;
use crate::event::NO_EVENT;

/// Sentinel for "no node".
pub const NO_NODE: u32 = u32::MAX;

/// A breakpoint between two adjacent arcs.
#[derive(Clone, Copy, Debug)]
pub struct InternalNode {
    pub parent: u32,
    pub left: u32,
    pub right: u32,
    /// Cached subtree height; leaves count as height 0.
    pub height: u32,
    /// The (left arc's site, right arc's site) pair this breakpoint
    /// separates.
    pub pair: (u32, u32),
    /// The half of this breakpoint's twin pair whose origin is assigned at
    /// the vertex where the breakpoint terminates.
    pub edge: u32,
}

/// An arc: one site's visible stretch of parabola.
#[derive(Clone, Copy, Debug)]
pub struct Leaf {
    pub parent: u32,
    pub site: u32,
    pub prev: u32,
    pub next: u32,
    /// Pending circle event id, at most one live per arc.
    pub pending: u32,
}

#[derive(Clone, Copy, Debug)]
enum Node {
    Internal(InternalNode),
    Leaf(Leaf),
    Free { next_free: u32 },
}

pub struct Beachline {
    nodes: Vec<Node>,
    root: u32,
    first_free: u32,
}

impl Beachline {
    #[inline]
    pub fn new() -> Beachline {
        Beachline { nodes: vec![], root: NO_NODE, first_free: NO_NODE }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NO_NODE
    }

    #[inline]
    pub fn leaf(&self, index: u32) -> &Leaf {
        match self.nodes[index as usize] {
            Node::Leaf(ref leaf) => leaf,
            _ => panic!("node {} is not a leaf", index),
        }
    }

    #[inline]
    fn leaf_mut(&mut self, index: u32) -> &mut Leaf {
        match self.nodes[index as usize] {
            Node::Leaf(ref mut leaf) => leaf,
            _ => panic!("node {} is not a leaf", index),
        }
    }

    #[inline]
    pub fn internal(&self, index: u32) -> &InternalNode {
        match self.nodes[index as usize] {
            Node::Internal(ref node) => node,
            _ => panic!("node {} is not a breakpoint", index),
        }
    }

    #[inline]
    fn internal_mut(&mut self, index: u32) -> &mut InternalNode {
        match self.nodes[index as usize] {
            Node::Internal(ref mut node) => node,
            _ => panic!("node {} is not a breakpoint", index),
        }
    }

    #[inline]
    pub fn is_leaf(&self, index: u32) -> bool {
        match self.nodes[index as usize] {
            Node::Leaf(_) => true,
            _ => false,
        }
    }

    /// All live breakpoints, in arena order. The ones still present when
    /// the event queue drains are the diagram's unbounded edges.
    pub fn breakpoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().enumerate().filter_map(|(index, node)| {
            match node {
                Node::Internal(_) => Some(index as u32),
                _ => None,
            }
        })
    }

    /// Detaches and returns the arc's pending circle event id, if any.
    #[inline]
    pub fn take_pending(&mut self, arc: u32) -> u32 {
        let leaf = self.leaf_mut(arc);
        let pending = leaf.pending;
        leaf.pending = NO_EVENT;
        pending
    }

    #[inline]
    pub fn set_pending(&mut self, arc: u32, event: u32) {
        debug_assert_eq!(self.leaf(arc).pending, NO_EVENT);
        self.leaf_mut(arc).pending = event;
    }

    fn alloc(&mut self, node: Node) -> u32 {
        if self.first_free == NO_NODE {
            self.nodes.push(node);
            return self.nodes.len() as u32 - 1;
        }
        let index = self.first_free;
        self.first_free = match self.nodes[index as usize] {
            Node::Free { next_free } => next_free,
            _ => panic!("corrupt free list"),
        };
        self.nodes[index as usize] = node;
        index
    }

    fn free(&mut self, index: u32) {
        self.nodes[index as usize] = Node::Free { next_free: self.first_free };
        self.first_free = index;
    }

    #[inline]
    fn parent(&self, index: u32) -> u32 {
        match self.nodes[index as usize] {
            Node::Internal(ref node) => node.parent,
            Node::Leaf(ref leaf) => leaf.parent,
            Node::Free { .. } => panic!("free node {} has no parent", index),
        }
    }

    #[inline]
    fn set_parent(&mut self, index: u32, parent: u32) {
        match self.nodes[index as usize] {
            Node::Internal(ref mut node) => node.parent = parent,
            Node::Leaf(ref mut leaf) => leaf.parent = parent,
            Node::Free { .. } => panic!("free node {} has no parent", index),
        }
    }

    #[inline]
    fn height(&self, index: u32) -> u32 {
        match self.nodes[index as usize] {
            Node::Internal(ref node) => node.height,
            Node::Leaf(_) => 0,
            Node::Free { .. } => panic!("free node {} has no height", index),
        }
    }

    #[inline]
    fn balance(&self, index: u32) -> i32 {
        let node = self.internal(index);
        self.height(node.right) as i32 - self.height(node.left) as i32
    }

    #[inline]
    fn update_height(&mut self, index: u32) {
        let node = self.internal(index);
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.internal_mut(index).height = height;
    }

    /// Points the parent's (or the root's) child link at `new_child` where
    /// it used to point at `old_child`. Parent back-links are the caller's
    /// business.
    fn replace_child(&mut self, parent: u32, old_child: u32, new_child: u32) {
        if parent == NO_NODE {
            self.root = new_child;
            return;
        }
        let node = self.internal_mut(parent);
        if node.left == old_child {
            node.left = new_child;
        } else {
            debug_assert_eq!(node.right, old_child);
            node.right = new_child;
        }
    }

    /// The current position of a breakpoint, computed from its site pair
    /// and the sweep position.
    ///
    /// Of the two parabola intersections, the breakpoint between a left
    /// arc of the higher site and a right arc of the lower one is the
    /// smaller-x solution: the higher focus traces the wider parabola, and
    /// a wider parabola is the envelope's outer side on the left.
    pub fn breakpoint_position(&self,
                               index: u32,
                               sweep: f64,
                               sites: &[Point2D<f64>])
                               -> Point2D<f64> {
        let pair = self.internal(index).pair;
        let first = &sites[pair.0 as usize];
        let second = &sites[pair.1 as usize];
        let points = parabola::intersection_points(first, second, sweep);
        if points.len() == 1 {
            points[0]
        } else if first.y > second.y {
            points[0]
        } else {
            points[1]
        }
    }

    #[inline]
    pub fn breakpoint_x(&self, index: u32, sweep: f64, sites: &[Point2D<f64>]) -> f64 {
        self.breakpoint_position(index, sweep, sites).x
    }

    /// The arc vertically above `x` at the given sweep position, found by
    /// walking root to leaf and comparing `x` against each breakpoint.
    /// Returns [`NO_NODE`] on an empty beachline.
    pub fn find_arc(&self, x: f64, sweep: f64, sites: &[Point2D<f64>]) -> u32 {
        if self.root == NO_NODE {
            return NO_NODE;
        }
        let mut node = self.root;
        while !self.is_leaf(node) {
            node = if x < self.breakpoint_x(node, sweep, sites) {
                self.internal(node).left
            } else {
                self.internal(node).right
            };
        }
        node
    }

    /// Inserts the arc of a new site, splitting the arc currently above
    /// it into an `[old, new, old]` triple.
    ///
    /// If the located arc's own site still lies on the sweep line (a run
    /// of sites sharing the topmost y), that arc is a zero-width vertical
    /// ray and the new site sits beside it at the same height, so the
    /// split degenerates to appending `[old, new]` with a single
    /// breakpoint; sandwiching would plant a zero-width copy of the old
    /// arc that no circle event could ever squeeze out.
    ///
    /// Opens one twin pair of half-edges for the new breakpoint(s).
    /// Returns the new leaf together with the located arc's evicted
    /// pending circle event id ([`NO_EVENT`] if it had none); the caller
    /// must invalidate the evicted event, since the arc's neighborhood has
    /// changed.
    pub fn insert(&mut self,
                  site: u32,
                  sweep: f64,
                  sites: &[Point2D<f64>],
                  dcel: &mut Dcel)
                  -> (u32, u32) {
        let point = sites[site as usize];
        if self.root == NO_NODE {
            self.root = self.alloc(Node::Leaf(Leaf {
                parent: NO_NODE,
                site,
                prev: NO_NODE,
                next: NO_NODE,
                pending: NO_EVENT,
            }));
            return (self.root, NO_EVENT);
        }

        let old = self.find_arc(point.x, sweep, sites);
        let old_leaf = *self.leaf(old);
        let parent = old_leaf.parent;

        if (sites[old_leaf.site as usize].y - sweep).abs() < POINT_EPSILON {
            let (stored, _) = dcel.add_edge_pair();
            let new_arc = self.alloc(Node::Leaf(Leaf {
                parent: NO_NODE,
                site,
                prev: old,
                next: old_leaf.next,
                pending: NO_EVENT,
            }));
            let node = self.alloc(Node::Internal(InternalNode {
                parent,
                left: old,
                right: new_arc,
                height: 1,
                pair: (old_leaf.site, site),
                edge: stored,
            }));
            self.set_parent(old, node);
            self.set_parent(new_arc, node);
            self.leaf_mut(old).next = new_arc;
            if old_leaf.next != NO_NODE {
                self.leaf_mut(old_leaf.next).prev = new_arc;
            }
            self.replace_child(parent, old, node);
            if parent != NO_NODE {
                self.rebalance_upward(parent);
            }
            return (new_arc, self.take_pending(old));
        }

        // Both breakpoints of the split share one pair of twins; each new
        // internal node stores the half whose origin is set at the vertex
        // where that breakpoint eventually dies.
        let (upper_edge, lower_edge) = dcel.add_edge_pair();

        let left_copy = self.alloc(Node::Leaf(Leaf {
            parent: NO_NODE,
            site: old_leaf.site,
            prev: old_leaf.prev,
            next: NO_NODE,
            pending: NO_EVENT,
        }));
        let middle = self.alloc(Node::Leaf(Leaf {
            parent: NO_NODE,
            site,
            prev: left_copy,
            next: NO_NODE,
            pending: NO_EVENT,
        }));
        let right_copy = self.alloc(Node::Leaf(Leaf {
            parent: NO_NODE,
            site: old_leaf.site,
            prev: middle,
            next: old_leaf.next,
            pending: NO_EVENT,
        }));
        let lower = self.alloc(Node::Internal(InternalNode {
            parent: NO_NODE,
            left: middle,
            right: right_copy,
            height: 1,
            pair: (site, old_leaf.site),
            edge: lower_edge,
        }));
        let upper = self.alloc(Node::Internal(InternalNode {
            parent,
            left: left_copy,
            right: lower,
            height: 2,
            pair: (old_leaf.site, site),
            edge: upper_edge,
        }));

        self.set_parent(left_copy, upper);
        self.set_parent(lower, upper);
        self.set_parent(middle, lower);
        self.set_parent(right_copy, lower);

        self.leaf_mut(left_copy).next = middle;
        self.leaf_mut(middle).next = right_copy;
        if old_leaf.prev != NO_NODE {
            self.leaf_mut(old_leaf.prev).next = left_copy;
        }
        if old_leaf.next != NO_NODE {
            self.leaf_mut(old_leaf.next).prev = right_copy;
        }

        self.replace_child(parent, old, upper);
        self.free(old);
        if parent != NO_NODE {
            self.rebalance_upward(parent);
        }

        (middle, old_leaf.pending)
    }

    /// Removes the arc a circle event squeezed out, recording the new
    /// diagram vertex at `center`.
    ///
    /// The two breakpoints flanking the arc die and merge into one; their
    /// stored half-edges get the vertex as origin, a fresh twin pair is
    /// opened for the merged breakpoint, and the three half-edges leaving
    /// the vertex are chained around it. Returns the removed arc's
    /// predecessor, or `None` if the two breakpoints' recomputed positions
    /// disagree by more than `mismatch_tolerance`, which marks a
    /// numerically stale event the caller should treat as a false alarm.
    pub fn remove(&mut self,
                  arc: u32,
                  center: Point2D<f64>,
                  sweep: f64,
                  mismatch_tolerance: f64,
                  sites: &[Point2D<f64>],
                  dcel: &mut Dcel)
                  -> Option<u32> {
        let leaf = *self.leaf(arc);
        assert!(leaf.prev != NO_NODE && leaf.next != NO_NODE,
                "a squeezed arc must have neighbors on both sides");
        let parent = leaf.parent;
        assert!(parent != NO_NODE, "a squeezed arc cannot be the root");
        let arc_is_left = self.internal(parent).left == arc;

        // The other breakpoint adjacent to `arc`: the nearest ancestor the
        // path climbs into from the side opposite the arc's.
        let mut other = self.internal(parent).parent;
        let mut child = parent;
        while other != NO_NODE {
            let child_is_left = self.internal(other).left == child;
            if child_is_left != arc_is_left {
                break;
            }
            child = other;
            other = self.internal(other).parent;
        }
        assert!(other != NO_NODE, "an inner arc always has breakpoints on both sides");

        let parent_x = self.breakpoint_x(parent, sweep, sites);
        let other_x = self.breakpoint_x(other, sweep, sites);
        if (parent_x - other_x).abs() > mismatch_tolerance {
            debug!("breakpoints at x {} and {} have not met; false alarm", parent_x, other_x);
            return None;
        }

        let (left_breakpoint, right_breakpoint) = if arc_is_left {
            (other, parent)
        } else {
            (parent, other)
        };
        let left_edge = self.internal(left_breakpoint).edge;
        let right_edge = self.internal(right_breakpoint).edge;

        // Both dying breakpoints terminate here.
        let vertex = dcel.add_vertex(center, left_edge);
        dcel.half_edges[left_edge as usize].origin = vertex;
        dcel.half_edges[right_edge as usize].origin = vertex;

        // The merged breakpoint starts here: `outgoing` leaves the vertex
        // along its future trace, while its twin, stored on the surviving
        // node, is origin'd at whatever vertex ends that trace.
        let (stored, outgoing) = dcel.add_edge_pair();
        dcel.half_edges[outgoing as usize].origin = vertex;

        // Chain the triple around the vertex: each face's incoming edge
        // continues into the outgoing edge that is next clockwise.
        let left_twin = dcel.half_edges[left_edge as usize].twin;
        let right_twin = dcel.half_edges[right_edge as usize].twin;
        dcel.link(stored, left_edge);
        dcel.link(left_twin, right_edge);
        dcel.link(right_twin, outgoing);

        let prev_site = self.leaf(leaf.prev).site;
        let next_site = self.leaf(leaf.next).site;
        {
            let merged = self.internal_mut(other);
            merged.pair = (prev_site, next_site);
            merged.edge = stored;
        }

        // Splice: the sibling takes the dead parent's place.
        let sibling = if arc_is_left {
            self.internal(parent).right
        } else {
            self.internal(parent).left
        };
        let grandparent = self.internal(parent).parent;
        debug_assert!(grandparent != NO_NODE);
        self.replace_child(grandparent, parent, sibling);
        self.set_parent(sibling, grandparent);

        self.leaf_mut(leaf.prev).next = leaf.next;
        self.leaf_mut(leaf.next).prev = leaf.prev;

        self.free(arc);
        self.free(parent);

        self.rebalance_upward(grandparent);
        Some(leaf.prev)
    }

    /// One pass from `start` toward the root: recompute each cached
    /// height, rotate wherever a child pair differs in height by two, and
    /// stop at the first ancestor whose height comes out unchanged, since
    /// nothing above it can be affected.
    fn rebalance_upward(&mut self, start: u32) {
        let mut node = start;
        while node != NO_NODE {
            let old_height = self.internal(node).height;
            self.update_height(node);
            let subtree = if self.balance(node).abs() > 1 {
                self.rebalance_node(node)
            } else {
                node
            };
            if self.internal(subtree).height == old_height {
                break;
            }
            node = self.internal(subtree).parent;
        }
    }

    /// Restores the height invariant at a node whose children differ in
    /// height by two. The rotation direction follows the taller child's
    /// own balance: aligned or level means a single rotation, opposed
    /// means a double one. Returns the subtree's new root.
    fn rebalance_node(&mut self, node: u32) -> u32 {
        let balance = self.balance(node);
        if balance > 1 {
            let right = self.internal(node).right;
            if self.balance(right) < 0 {
                self.rotate_right(right);
            }
            self.rotate_left(node)
        } else {
            debug_assert!(balance < -1);
            let left = self.internal(node).left;
            if self.balance(left) > 0 {
                self.rotate_left(left);
            }
            self.rotate_right(node)
        }
    }

    fn rotate_left(&mut self, node: u32) -> u32 {
        let parent = self.internal(node).parent;
        let pivot = self.internal(node).right;
        let inner = self.internal(pivot).left;

        self.internal_mut(node).right = inner;
        self.set_parent(inner, node);
        self.internal_mut(pivot).left = node;
        self.set_parent(node, pivot);
        self.internal_mut(pivot).parent = parent;
        self.replace_child(parent, node, pivot);

        self.update_height(node);
        self.update_height(pivot);
        pivot
    }

    fn rotate_right(&mut self, node: u32) -> u32 {
        let parent = self.internal(node).parent;
        let pivot = self.internal(node).left;
        let inner = self.internal(pivot).right;

        self.internal_mut(node).left = inner;
        self.set_parent(inner, node);
        self.internal_mut(pivot).right = node;
        self.set_parent(node, pivot);
        self.internal_mut(pivot).parent = parent;
        self.replace_child(parent, node, pivot);

        self.update_height(node);
        self.update_height(pivot);
        pivot
    }
}

#[cfg(test)]
impl Beachline {
    /// Checks the balance invariant, the cached heights, the parent links,
    /// and that the in-order leaf sequence matches the prev/next chain.
    pub(crate) fn debug_check_invariants(&self) {
        if self.root == NO_NODE {
            return;
        }
        assert_eq!(self.parent(self.root), NO_NODE);

        let mut leaves = vec![];
        self.check_subtree(self.root, &mut leaves);

        let mut chain = vec![];
        let mut arc = leaves[0];
        assert_eq!(self.leaf(arc).prev, NO_NODE);
        while arc != NO_NODE {
            chain.push(arc);
            let next = self.leaf(arc).next;
            if next != NO_NODE {
                assert_eq!(self.leaf(next).prev, arc);
            }
            arc = next;
        }
        assert_eq!(leaves, chain);
    }

    fn check_subtree(&self, node: u32, leaves: &mut Vec<u32>) -> u32 {
        match self.nodes[node as usize] {
            Node::Leaf(_) => {
                leaves.push(node);
                0
            }
            Node::Internal(ref internal) => {
                assert_eq!(self.parent(internal.left), node);
                assert_eq!(self.parent(internal.right), node);
                let left_height = self.check_subtree(internal.left, leaves);
                let right_height = self.check_subtree(internal.right, leaves);
                assert_eq!(internal.height, 1 + left_height.max(right_height));
                assert!((left_height as i64 - right_height as i64).abs() <= 1,
                        "unbalanced breakpoint {}", node);
                internal.height
            }
            Node::Free { .. } => panic!("free node {} is reachable", node),
        }
    }

    pub(crate) fn arcs_left_to_right(&self) -> Vec<u32> {
        let mut sites = vec![];
        if self.root == NO_NODE {
            return sites;
        }
        let mut ordered = vec![];
        self.collect_leaves(self.root, &mut ordered);
        for leaf in ordered {
            sites.push(self.leaf(leaf).site);
        }
        sites
    }

    fn collect_leaves(&self, node: u32, ordered: &mut Vec<u32>) {
        match self.nodes[node as usize] {
            Node::Leaf(_) => ordered.push(node),
            Node::Internal(ref internal) => {
                self.collect_leaves(internal.left, ordered);
                self.collect_leaves(internal.right, ordered);
            }
            Node::Free { .. } => panic!("free node {} is reachable", node),
        }
    }
}

#[cfg(test)]
mod test {
    use euclid::default::Point2D;

    use crate::dcel::Dcel;
    use crate::event::NO_EVENT;
    use super::{Beachline, NO_NODE};

    #[test]
    fn test_first_site_becomes_the_root_arc() {
        let sites = vec![Point2D::new(1.0, 5.0)];
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        let (arc, evicted) = beachline.insert(0, 5.0, &sites, &mut dcel);
        assert_eq!(evicted, NO_EVENT);
        assert_eq!(beachline.leaf(arc).site, 0);
        assert_eq!(beachline.leaf(arc).prev, NO_NODE);
        assert_eq!(beachline.leaf(arc).next, NO_NODE);
        assert!(dcel.half_edges.is_empty());
        beachline.debug_check_invariants();
    }

    #[test]
    fn test_splitting_an_arc_yields_the_sandwich() {
        let sites = vec![Point2D::new(2.0, 6.0), Point2D::new(3.0, 2.0)];
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        beachline.insert(0, 6.0, &sites, &mut dcel);
        let (middle, evicted) = beachline.insert(1, 2.0, &sites, &mut dcel);
        assert_eq!(evicted, NO_EVENT);
        assert_eq!(beachline.arcs_left_to_right(), vec![0, 1, 0]);
        assert_eq!(beachline.leaf(middle).site, 1);
        // One twin pair for the two new breakpoints.
        assert_eq!(dcel.half_edges.len(), 2);
        beachline.debug_check_invariants();
    }

    #[test]
    fn test_same_height_sites_append_without_phantom_arcs() {
        // A run of sites sharing the topmost y: each insertion after the
        // first appends one arc, never a zero-width copy of the arc it
        // landed on.
        let sites = vec![
            Point2D::new(0.0, 10.0),
            Point2D::new(3.0, 10.0),
            Point2D::new(6.0, 10.0),
        ];
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        for site in 0..sites.len() as u32 {
            let (_, evicted) = beachline.insert(site, 10.0, &sites, &mut dcel);
            assert_eq!(evicted, NO_EVENT);
            beachline.debug_check_invariants();
        }
        assert_eq!(beachline.arcs_left_to_right(), vec![0, 1, 2]);
        // One twin pair per appended breakpoint.
        assert_eq!(dcel.half_edges.len(), 4);
    }

    #[test]
    fn test_repeated_right_splits_stay_balanced() {
        // Descending staircase: every site lands on the rightmost arc, so
        // the tree keeps growing down its right spine and must rotate.
        let sites: Vec<_> = (0..12)
            .map(|i| Point2D::new(i as f64 * 3.0, 40.0 - i as f64 * 3.0))
            .collect();
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        for (index, site) in sites.iter().enumerate() {
            beachline.insert(index as u32, site.y, &sites, &mut dcel);
            beachline.debug_check_invariants();
        }
        assert_eq!(beachline.arcs_left_to_right().len(), 2 * sites.len() - 1);
    }

    #[test]
    fn test_removal_merges_the_flanking_breakpoints() {
        // The three-site wedge: after all insertions the arcs read
        // [2, 0, 2, 1, 2]; squeezing the middle copy of 2 merges its
        // breakpoints into one and records the circumcenter vertex.
        let sites = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(2.0, 4.0),
        ];
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        beachline.insert(2, 4.0, &sites, &mut dcel);
        beachline.insert(0, 0.0, &sites, &mut dcel);
        let (_, evicted) = beachline.insert(1, 0.0, &sites, &mut dcel);
        assert_eq!(evicted, NO_EVENT);
        assert_eq!(beachline.arcs_left_to_right(), vec![2, 0, 2, 1, 2]);

        let ordered = {
            let mut arcs = vec![];
            let mut arc = {
                let mut node = beachline.root;
                while !beachline.is_leaf(node) {
                    node = beachline.internal(node).left;
                }
                node
            };
            while arc != NO_NODE {
                arcs.push(arc);
                arc = beachline.leaf(arc).next;
            }
            arcs
        };
        let squeezed = ordered[2];
        let center = Point2D::new(2.0, 1.5);
        let predecessor = beachline
            .remove(squeezed, center, -1.0, 1.0, &sites, &mut dcel)
            .expect("breakpoints meet at the circumcenter");
        assert_eq!(predecessor, ordered[1]);
        assert_eq!(beachline.arcs_left_to_right(), vec![2, 0, 1, 2]);
        beachline.debug_check_invariants();

        // Two split pairs plus the merged breakpoint's pair.
        assert_eq!(dcel.half_edges.len(), 6);
        assert_eq!(dcel.vertices.len(), 1);
        let at_vertex = dcel.half_edges.iter().filter(|e| e.origin == 0).count();
        assert_eq!(at_vertex, 3);
    }

    #[test]
    fn test_removal_rejects_breakpoints_that_have_not_met() {
        let sites = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(2.0, 4.0),
        ];
        let mut beachline = Beachline::new();
        let mut dcel = Dcel::new();
        beachline.insert(2, 4.0, &sites, &mut dcel);
        beachline.insert(0, 0.0, &sites, &mut dcel);
        beachline.insert(1, 0.0, &sites, &mut dcel);

        let ordered = beachline.arcs_left_to_right();
        assert_eq!(ordered, vec![2, 0, 2, 1, 2]);
        let mut arc = beachline.root;
        while !beachline.is_leaf(arc) {
            arc = beachline.internal(arc).left;
        }
        let squeezed = beachline.leaf(beachline.leaf(arc).next).next;

        // At sweep 0 the flanking breakpoints are still far apart, so a
        // tight tolerance must reject the removal.
        let rejected = beachline.remove(squeezed,
                                        Point2D::new(2.0, 1.5),
                                        0.0,
                                        1.0e-3,
                                        &sites,
                                        &mut dcel);
        assert!(rejected.is_none());
        assert_eq!(beachline.arcs_left_to_right(), vec![2, 0, 2, 1, 2]);
        beachline.debug_check_invariants();
    }
}
