//! Brute-force ray/mesh hit testing.
//!
//! Chart meshes are small (a few thousand triangles at most), so picking
//! simply tests every triangle and keeps the nearest accepted hit. No
//! spatial acceleration structure is involved.

use chartscope_core::mesh::ChartMesh;
use chartscope_core::pick::{Ray, RayHit};
use glam::Vec3;

const EPSILON: f32 = 1e-6;

/// Returns the nearest intersection of `ray` with `mesh` within
/// `max_distance`, or `None` if nothing is hit in range.
///
/// `t` is reported in units of the ray direction's length; pass a unit
/// direction to get world distances.
#[must_use]
pub fn pick(ray: &Ray, mesh: &ChartMesh, max_distance: f32) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;

    for (index, tri) in mesh.triangles().enumerate() {
        let Some(t) =
            intersect_triangle(ray, tri[0].position, tri[1].position, tri[2].position)
        else {
            continue;
        };
        if t > max_distance {
            continue;
        }
        if best.as_ref().map_or(true, |hit| t < hit.t) {
            best = Some(RayHit {
                triangle: index,
                position: ray.at(t),
                t,
            });
        }
    }

    best
}

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns the ray parameter of the hit, or `None` when the ray misses,
/// runs parallel to the triangle plane, or the triangle is degenerate.
#[must_use]
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < EPSILON {
        return None;
    }
    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}
