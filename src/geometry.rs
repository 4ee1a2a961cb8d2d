//! Geometry primitives and the pure constraint helpers.
//!
//! Everything here is side-effect free. The interaction state machine builds
//! its containment guarantees out of these functions: pins are clamped into
//! their owning rect, rects are slid back inside the background, and resizes
//! are floored at the bounding box of the existing pins.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Normalized rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn from_center(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    pub fn contains_rect(&self, other: Rect) -> bool {
        self.contains(other.top_left()) && self.contains(other.bottom_right())
    }

    pub fn translated(&self, delta: Point) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Same size, repositioned so the top-left corner sits at `pos`.
    pub fn at_position(&self, pos: Point) -> Rect {
        Rect::new(pos.x, pos.y, self.width, self.height)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn united(&self, other: Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// Clamps each axis of `p` independently into `r`.
pub fn clamp_point_to_rect(p: Point, r: Rect) -> Point {
    Point::new(
        p.x.clamp(r.left(), r.right()),
        p.y.clamp(r.top(), r.bottom()),
    )
}

/// The smallest rectangle containing every point in `points`.
///
/// Precondition: `points` is non-empty; callers guard before calling.
pub fn bounding_rect_of(points: &[Point]) -> Rect {
    assert!(!points.is_empty(), "bounding_rect_of requires at least one point");
    let mut left = f32::INFINITY;
    let mut right = f32::NEG_INFINITY;
    let mut top = f32::INFINITY;
    let mut bottom = f32::NEG_INFINITY;
    for p in points {
        left = left.min(p.x);
        right = right.max(p.x);
        top = top.min(p.y);
        bottom = bottom.max(p.y);
    }
    Rect::new(left, top, right - left, bottom - top)
}

/// Repositions `point` so it sits relative to `new_ref` the same way it sat
/// relative to `old_ref`. Used to carry pins rigidly along with their rect.
pub fn translate_with_reference(point: Point, old_ref: Point, new_ref: Point) -> Point {
    point - old_ref + new_ref
}

/// Slides `after` back inside `background` on each axis it exceeds,
/// preserving `before`'s size on that axis. Axes are handled independently;
/// the rect ends up touching the edge it overran.
pub fn fit_rect_inside_background(before: Rect, after: Rect, background: Rect) -> Rect {
    let mut fitted = after;

    if fitted.left() < background.left() {
        fitted.width = before.width;
        fitted.x = background.left();
    } else if fitted.right() > background.right() {
        fitted.width = before.width;
        fitted.x = background.right() - fitted.width;
    }

    if fitted.top() < background.top() {
        fitted.height = before.height;
        fitted.y = background.top();
    } else if fitted.bottom() > background.bottom() {
        fitted.height = before.height;
        fitted.y = background.bottom() - fitted.height;
    }

    fitted
}

/// The smallest rectangle covering every rectangle in `rects`.
///
/// Precondition: `rects` is non-empty; callers guard before calling.
pub fn union_rect(rects: &[Rect]) -> Rect {
    assert!(!rects.is_empty(), "union_rect requires at least one rectangle");
    rects[1..]
        .iter()
        .fold(rects[0], |acc, r| acc.united(*r))
}
