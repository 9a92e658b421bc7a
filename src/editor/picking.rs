//! Analytic ray casting against pick proxies.
//!
//! Scene meshes and widget handles each carry a [`PickShape`] describing a
//! cheap analytic volume in the entity's local space. Casting transforms the
//! pointer ray into each candidate's local frame, intersects the proxy there,
//! and orders the hits nearest-first in world space. Triangle-accurate mesh
//! picking is deliberately out of scope; the proxies are what clicks hit.

use bevy::prelude::*;

/// Analytic pick volume in the owning entity's local space.
#[derive(Component, Clone, Copy, Debug)]
pub enum PickShape {
    /// Axis-aligned box in local space (oriented in world by the transform)
    Obb { center: Vec3, half_extents: Vec3 },
    /// Sphere
    Sphere { center: Vec3, radius: f32 },
    /// Capsule around the segment from `start` to `end`, for arrow shafts
    Capsule { start: Vec3, end: Vec3, radius: f32 },
    /// Bounded parallelogram: `origin + a*u + b*v` for a, b in [-1, 1]
    Quad { origin: Vec3, u: Vec3, v: Vec3 },
    /// Flat annulus centered at the local origin, for rotation rings
    Ring { normal: Vec3, radius: f32, thickness: f32 },
}

/// One ray intersection, in world space.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

/// Cast `ray` against every candidate and return hits ordered nearest-first.
///
/// Ties keep the candidates' submission order (the sort is stable), so
/// callers control precedence among coincident shapes.
pub fn cast(
    ray: Ray3d,
    candidates: impl IntoIterator<Item = (Entity, GlobalTransform, PickShape)>,
) -> Vec<RayHit> {
    let mut hits = Vec::new();

    for (entity, transform, shape) in candidates {
        let inverse = transform.affine().inverse();
        let local_origin = inverse.transform_point3(ray.origin);
        let local_dir = inverse.transform_vector3(*ray.direction);

        if let Some(local_point) = intersect_local(local_origin, local_dir, shape) {
            let point = transform.transform_point(local_point);
            hits.push(RayHit {
                entity,
                point,
                distance: ray.origin.distance(point),
            });
        }
    }

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Intersect a local-space ray with a shape. The direction need not be
/// normalized (it usually is not, after an inverse-scale transform).
fn intersect_local(origin: Vec3, dir: Vec3, shape: PickShape) -> Option<Vec3> {
    match shape {
        PickShape::Obb {
            center,
            half_extents,
        } => intersect_box(origin, dir, center, half_extents),
        PickShape::Sphere { center, radius } => intersect_sphere(origin, dir, center, radius),
        PickShape::Capsule { start, end, radius } => {
            intersect_capsule(origin, dir, start, end, radius)
        }
        PickShape::Quad { origin: o, u, v } => intersect_quad(origin, dir, o, u, v),
        PickShape::Ring {
            normal,
            radius,
            thickness,
        } => intersect_ring(origin, dir, normal, radius, thickness),
    }
}

/// Slab test against the box `center ± half_extents`.
fn intersect_box(origin: Vec3, dir: Vec3, center: Vec3, half_extents: Vec3) -> Option<Vec3> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let mut t1 = (min[axis] - o) / d;
        let mut t2 = (max[axis] - o) / d;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    // Entry face if the ray starts outside, exit face if it starts inside
    let t = if t_min >= 0.0 { t_min } else { t_max };
    Some(origin + dir * t)
}

fn intersect_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<Vec3> {
    let oc = origin - center;
    let a = dir.dot(dir);
    if a < 1e-12 {
        return None;
    }
    let b = 2.0 * oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t_near = (-b - sqrt_d) / (2.0 * a);
    let t_far = (-b + sqrt_d) / (2.0 * a);
    let t = if t_near >= 0.0 {
        t_near
    } else if t_far >= 0.0 {
        t_far
    } else {
        return None;
    };
    Some(origin + dir * t)
}

/// Approximate capsule test: find the closest approach between the ray and
/// the core segment; a hit is the ray point of closest approach when that
/// distance is within the radius. Accurate enough for handle-sized shapes.
fn intersect_capsule(origin: Vec3, dir: Vec3, start: Vec3, end: Vec3, radius: f32) -> Option<Vec3> {
    let seg = end - start;
    let w = origin - start;

    let a = dir.dot(dir);
    let b = dir.dot(seg);
    let c = seg.dot(seg);
    let d = dir.dot(w);
    let e = seg.dot(w);

    let denom = a * c - b * b;
    // Ray parameter t >= 0, segment parameter s in [0, 1]
    let (t, s) = if denom.abs() < 1e-9 {
        // Parallel: pin to the segment start
        (((-d) / a).max(0.0), 0.0)
    } else {
        let s = ((a * e - b * d) / denom).clamp(0.0, 1.0);
        let t = ((b * s - d) / a).max(0.0);
        (t, s)
    };

    let ray_point = origin + dir * t;
    let seg_point = start + seg * s;
    if ray_point.distance_squared(seg_point) <= radius * radius {
        Some(ray_point)
    } else {
        None
    }
}

fn intersect_quad(origin: Vec3, dir: Vec3, quad_origin: Vec3, u: Vec3, v: Vec3) -> Option<Vec3> {
    let normal = u.cross(v);
    let point = intersect_plane(origin, dir, quad_origin, normal)?;

    let offset = point - quad_origin;
    let a = offset.dot(u) / u.length_squared();
    let b = offset.dot(v) / v.length_squared();
    if a.abs() <= 1.0 && b.abs() <= 1.0 {
        Some(point)
    } else {
        None
    }
}

fn intersect_ring(origin: Vec3, dir: Vec3, normal: Vec3, radius: f32, thickness: f32) -> Option<Vec3> {
    let point = intersect_plane(origin, dir, Vec3::ZERO, normal)?;
    let r = point.length();
    if (r - radius).abs() <= thickness {
        Some(point)
    } else {
        None
    }
}

fn intersect_plane(origin: Vec3, dir: Vec3, plane_origin: Vec3, normal: Vec3) -> Option<Vec3> {
    let denom = dir.dot(normal);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (plane_origin - origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    Some(origin + dir * t)
}
