use super::Vec3;

/// Map geographic degrees onto a sphere of the given radius.
///
/// Convention: colatitude `phi = 90° - lat`, azimuth `theta = lon + 180°`,
/// so (lon 0°, lat 0°) lands on the +X face and latitude 90° on +Y. Marker
/// placement and picking geometry must both go through this function; the
/// azimuth offset and sign choices are load-bearing for hit-testing.
pub fn sphere_surface(lon_deg: f64, lat_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Rotate about the +X axis by `angle` radians.
pub fn rotate_x(v: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x, c * v.y - s * v.z, s * v.y + c * v.z)
}

/// Rotate about the +Y axis by `angle` radians.
pub fn rotate_y(v: Vec3, angle: f64) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * v.x + s * v.z, v.y, -s * v.x + c * v.z)
}
