/// Geometry of a circular arc, derived from its length and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcProfile {
    /// Angle subtended by the arc, in radians.
    pub angle: f64,
    /// Straight-line (chord) distance between the arc's endpoints.
    pub chord: f64,
    /// Sagitta: how far the arc's midpoint bows out from the chord.
    pub depth: f64,
}

/// Profile of an arc of length `arc_length` on a circle of radius `radius`.
///
/// `radius` must be positive; callers handle the flat (infinite radius)
/// case before reaching for arc geometry.
pub fn arc_profile(arc_length: f64, radius: f64) -> ArcProfile {
    let angle = arc_length / radius;
    ArcProfile {
        angle,
        chord: 2.0 * radius * (angle / 2.0).sin(),
        depth: radius * (1.0 - (angle / 2.0).cos()),
    }
}
