// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Saff-Kuijlaars spiral for near-uniform sphere surface sampling.

use nalgebra::Point3;

/// Planar radius below which the longitude step is skipped.
pub const POLE_EPSILON: f64 = 1e-12;

/// Near-uniformly distributed points on a unit sphere, generated by a spiral
/// running from the north pole to the south pole.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralSphere {
    points: Vec<Point3<f64>>,
}

impl SpiralSphere {
    /// Generate `n` unit points. The sequence is deterministic for a given `n`;
    /// `n == 0` yields an empty sphere.
    ///
    /// The spiral starts at `z = 1 - dz/2` with `dz = 2/n` and advances the
    /// longitude by `3.6/sqrt(n) / r`, where `r` is the planar radius at the
    /// current height. Near a pole `r` can vanish; there the longitude is left
    /// unchanged rather than divided by (almost) zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize) -> Self {
        if n == 0 {
            return Self { points: Vec::new() };
        }

        let count = n as f64;
        let step = 3.6 / count.sqrt();
        let dz = 2.0 / count;
        let mut longitude: f64 = 0.0;
        let mut z = 1.0 - dz / 2.0;

        let mut points = Vec::with_capacity(n);
        for _ in 0..n {
            let r = z.mul_add(-z, 1.0).max(0.0).sqrt();
            points.push(Point3::new(longitude.cos() * r, longitude.sin() * r, z));
            z -= dz;
            if r > POLE_EPSILON {
                longitude += step / r;
            }
        }

        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unit points in generation order.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Iterate over the points scaled by `radius` and translated to `center`.
    pub fn points_on_sphere(
        &self,
        center: Point3<f64>,
        radius: f64,
    ) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.points.iter().map(move |v| {
            Point3::new(
                v.x.mul_add(radius, center.x),
                v.y.mul_add(radius, center.y),
                v.z.mul_add(radius, center.z),
            )
        })
    }
}
