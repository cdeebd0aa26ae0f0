use foundation::math::precision::stable_total_cmp_f64;
use foundation::math::Vec3;
use foundation::time::format_clock_12h;

use crate::store::EventStore;

/// A picking ray in globe-local space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    /// Index of the site in the store.
    pub index: usize,
    /// Distance along the (normalized) ray.
    pub distance: f64,
    pub point: Vec3,
}

/// Hover payload for the presentation layer.
///
/// `formatted_time` is derived from the event's original timestamp, never
/// from the playback cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub place: String,
    pub magnitude: f64,
    pub formatted_time: String,
}

/// Nearest visible hitbox along the ray.
///
/// Ordering contract:
/// - The closest intersection along the normalized ray wins.
/// - Equal distances resolve to the lower site index.
///
/// Hidden sites are never pickable; a miss is the normal no-hover case.
pub fn pick_ray(store: &EventStore, ray: Ray) -> Option<PickHit> {
    let dir = ray.dir.normalized()?;

    let mut best: Option<(f64, usize)> = None;
    for (index, site) in store.sites().iter().enumerate() {
        if !site.visual.visible {
            continue;
        }

        let Some(t) =
            ray_sphere_hit_t(ray.origin, dir, site.record.position, site.record.hitbox_radius)
        else {
            continue;
        };

        best = match best {
            None => Some((t, index)),
            Some((bt, bi)) => {
                let ord = stable_total_cmp_f64(t, bt).then_with(|| index.cmp(&bi));
                if ord.is_lt() {
                    Some((t, index))
                } else {
                    Some((bt, bi))
                }
            }
        };
    }

    let (distance, index) = best?;
    Some(PickHit {
        index,
        distance,
        point: ray.origin + dir.scaled(distance),
    })
}

/// Tooltip payload for a hit, resolved by shared identity with the store.
pub fn tooltip_for(store: &EventStore, hit: PickHit) -> Option<Tooltip> {
    let record = &store.sites().get(hit.index)?.record;
    Some(Tooltip {
        place: record.place.clone(),
        magnitude: record.magnitude,
        formatted_time: format_clock_12h(record.timestamp_ms as f64),
    })
}

/// Entry distance of a ray against a sphere, `None` on miss.
///
/// `dir` must be unit length. An origin inside the sphere reports the exit
/// distance, so hovering from within the hitbox still resolves.
fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = -b + sq;
    if t_far >= 0.0 {
        return Some(t_far);
    }
    None
}
