//! Circuit path followed by emitted electrons
//!
//! A uniform Catmull-Rom spline from the impact point, up the left wire,
//! through the bulb, down the right wire and back to the impact point.
//! Electrons are placed by arc length so equal progress steps cover equal
//! distances along the wire.

use glam::Vec3;

use crate::params::SimulationConfig;

/// Samples used to build the arc-length table
const ARC_LENGTH_DIVISIONS: usize = 200;

#[derive(Clone, Debug)]
pub struct CircuitPath {
    points: Vec<Vec3>,
    /// Cumulative chord length at each of the `ARC_LENGTH_DIVISIONS + 1` samples
    arc_lengths: Vec<f32>,
}

impl CircuitPath {
    /// Spline through the given control points
    ///
    /// At least two points are required.
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 2, "a circuit path needs two or more points");
        let mut path = Self {
            points,
            arc_lengths: Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1),
        };
        path.arc_lengths = path.compute_arc_lengths();
        path
    }

    /// Closed loop from an impact at lateral position `x` through the bulb
    pub fn for_impact(x: f32, config: &SimulationConfig) -> Self {
        let start = Vec3::new(x, config.surface_height, config.circuit_depth);
        let [left, top, right] = config.circuit_waypoints;
        Self::new(vec![start, left, top, right, start])
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at spline parameter `t` in [0, 1]
    pub fn point(&self, t: f32) -> Vec3 {
        let last = self.points.len() - 1;
        let p = last as f32 * t.clamp(0.0, 1.0);
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;

        if index >= last {
            index = last - 1;
            weight = 1.0;
        }

        let p1 = self.points[index];
        let p2 = self.points[index + 1];
        let p0 = if index > 0 {
            self.points[index - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if index + 2 <= last {
            self.points[index + 2]
        } else {
            2.0 * p2 - p1
        };

        catmull_rom(p0, p1, p2, p3, weight)
    }

    /// Point at fraction `u` in [0, 1] of the path's arc length
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    fn u_to_t(&self, u: f32) -> f32 {
        let total = self.length();
        if total <= 0.0 {
            return u.clamp(0.0, 1.0);
        }

        let target = u.clamp(0.0, 1.0) * total;
        // First sample whose cumulative length reaches the target
        let upper = self
            .arc_lengths
            .partition_point(|&length| length < target)
            .min(ARC_LENGTH_DIVISIONS);

        if upper == 0 {
            return 0.0;
        }

        let lower = upper - 1;
        let before = self.arc_lengths[lower];
        let segment = self.arc_lengths[upper] - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };

        (lower as f32 + fraction) / ARC_LENGTH_DIVISIONS as f32
    }

    fn compute_arc_lengths(&self) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        let mut previous = self.point(0.0);
        let mut total = 0.0;
        lengths.push(0.0);

        for i in 1..=ARC_LENGTH_DIVISIONS {
            let current = self.point(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            total += current.distance(previous);
            lengths.push(total);
            previous = current;
        }

        lengths
    }
}

fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}
