//! Where the ship has been.

use euclid::default::{Point2D, Size2D};
use std::collections::VecDeque;

/// How many positions a trail remembers by default.
pub const TRAIL_LENGTH: usize = 500;

/// A fixed-size history of ship positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Point2D<f64>>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Remember a position, forgetting the oldest one if we're full.
    pub fn push(&mut self, pos: Point2D<f64>) {
        self.points.push_back(pos);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2D<f64>> + '_ {
        self.points.iter()
    }

    /// Split the trail into unbroken runs for drawing.
    /// In a wrap-around arena of size `wrap`, a jump of more than half the arena
    /// means the ship went off one edge and came back on the other.
    pub fn runs(&self, wrap: Option<Size2D<f64>>) -> Vec<Vec<Point2D<f64>>> {
        let mut runs: Vec<Vec<Point2D<f64>>> = Vec::new();
        let mut prev: Option<Point2D<f64>> = None;
        for &p in self.points.iter() {
            let wrapped = match (prev, wrap) {
                (Some(q), Some(bounds)) => {
                    (p.x - q.x).abs() > bounds.width / 2.0
                        || (p.y - q.y).abs() > bounds.height / 2.0
                }
                _ => false,
            };
            if wrapped || runs.is_empty() {
                runs.push(vec![p]);
            } else if let Some(run) = runs.last_mut() {
                run.push(p);
            }
            prev = Some(p);
        }
        runs
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail::new(TRAIL_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_first() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(Point2D::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn never_over_capacity() {
        let mut trail = Trail::default();
        for i in 0..(TRAIL_LENGTH * 3 + 7) {
            trail.push(Point2D::new(0.0, i as f64));
            assert!(trail.len() <= trail.capacity());
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
    }

    #[test]
    fn clear_empties() {
        let mut trail = Trail::new(10);
        trail.push(Point2D::zero());
        trail.push(Point2D::zero());
        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn runs_break_at_wraps() {
        let mut trail = Trail::new(10);
        for &(x, y) in &[(790.0, 10.0), (798.0, 10.0), (4.0, 10.0), (12.0, 590.0)] {
            trail.push(Point2D::new(x, y));
        }
        let runs = trail.runs(Some(Size2D::new(800.0, 600.0)));
        let lens: Vec<usize> = runs.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![2, 1, 1]);
        assert_eq!(trail.runs(None).len(), 1);
        assert!(Trail::new(5).runs(None).is_empty());
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut trail = Trail::new(0);
        trail.push(Point2D::zero());
        assert!(trail.is_empty());
    }
}
