//! R-tree spatial index over the scene's elements and free points.
//!
//! Normal-mode hit testing goes through this index instead of scanning every
//! item, keeping point queries at O(log n). The index is rebuilt wholesale
//! after scene mutations; entries are bounding boxes only, so query results
//! still get precedence-sorted by the caller.

use crate::geometry::{Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// What a spatial entry points back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// Index into the scene's element list
    Element(usize),
    /// Index into the scene's free point list
    Point(usize),
}

/// One indexed bounding box.
#[derive(Clone, Copy, Debug)]
pub struct SpatialEntry {
    pub target: HitTarget,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(target: HitTarget, rect: Rect) -> Self {
        Self {
            target,
            min_x: rect.left(),
            min_y: rect.top(),
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// The scene's hit-testing index.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    count: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            count: 0,
        }
    }

    /// Replaces the whole index.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (HitTarget, Rect)>,
    {
        let entries: Vec<SpatialEntry> = entries
            .into_iter()
            .map(|(target, rect)| SpatialEntry::new(target, rect))
            .collect();
        self.count = entries.len();
        self.tree = RTree::bulk_load(entries);
    }

    /// All targets whose bounding box contains `pos`, points before elements.
    pub fn query_point(&self, pos: Point) -> Vec<HitTarget> {
        let envelope = AABB::from_point([pos.x, pos.y]);
        let mut hits: Vec<HitTarget> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains(pos))
            .map(|entry| entry.target)
            .collect();
        hits.sort_by_key(|target| match target {
            HitTarget::Point(_) => 0,
            HitTarget::Element(_) => 1,
        });
        hits
    }

    /// All targets whose bounding box intersects `rect`.
    pub fn query_rect(&self, rect: Rect) -> Vec<HitTarget> {
        let envelope = AABB::from_corners(
            [rect.left(), rect.top()],
            [rect.right(), rect.bottom()],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.target)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.count = 0;
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
