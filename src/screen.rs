use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::error::InvalidParameter;
use crate::math::arc_profile;

const MM_PER_INCH: f64 = 25.4;

/// Pixel resolution of a display, width then height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width-to-height aspect ratio.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// A physical display screen and the eye position in front of it.
///
/// Holds the five input parameters, validated once at construction; every
/// other quantity (physical size, pixel density, field of view, pixels per
/// degree) is recomputed from them on each accessor call. The value is
/// immutable, so repeated reads always agree.
///
/// Distances are millimeters, the diagonal is inches, angles in the public
/// API are degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Screen {
    diagonal: f64,
    resolution: Resolution,
    distance: f64,
    curvature: Option<f64>,
    scaling: f64,
}

impl Screen {
    /// Validates the parameters and builds an immutable `Screen`.
    ///
    /// * `diagonal` - screen diagonal in inches, > 0
    /// * `resolution` - pixel counts, both > 0
    /// * `distance` - eye-to-screen distance in millimeters, > 0
    /// * `curvature` - curvature radius in millimeters, `None` for flat;
    ///   a radius of 0 is accepted and behaves exactly like flat (the arc
    ///   formulas would otherwise divide by zero)
    /// * `scaling` - display scaling factor, > 0 (1.0 for no scaling)
    ///
    /// Checks run in a fixed order so the reported failure is deterministic
    /// when several parameters are bad at once.
    pub fn new(
        diagonal: f64,
        resolution: Resolution,
        distance: f64,
        curvature: Option<f64>,
        scaling: f64,
    ) -> Result<Self, InvalidParameter> {
        if diagonal <= 0.0 {
            return Err(InvalidParameter::new(
                "diagonal",
                "must be a positive number",
            ));
        }
        if resolution.width == 0 || resolution.height == 0 {
            return Err(InvalidParameter::new(
                "resolution",
                "width and height must both be positive",
            ));
        }
        if distance <= 0.0 {
            return Err(InvalidParameter::new(
                "distance",
                "must be a positive number",
            ));
        }
        if let Some(radius) = curvature {
            if radius < 0.0 {
                return Err(InvalidParameter::new(
                    "curvature",
                    "must be non-negative",
                ));
            }
        }
        if scaling <= 0.0 {
            return Err(InvalidParameter::new(
                "scaling",
                "must be a positive number",
            ));
        }

        Ok(Self {
            diagonal,
            resolution,
            distance,
            curvature,
            scaling,
        })
    }

    pub fn diagonal(&self) -> f64 {
        self.diagonal
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn curvature(&self) -> Option<f64> {
        self.curvature
    }

    pub fn scaling(&self) -> f64 {
        self.scaling
    }

    /// Curvature radius usable in arc formulas. A stored radius of 0 has no
    /// arc geometry and is folded into the flat case here, so the branch on
    /// this value can never divide by zero.
    fn curve_radius(&self) -> Option<f64> {
        match self.curvature {
            Some(radius) if radius > 0.0 => Some(radius),
            _ => None,
        }
    }

    /// Physical height of the panel in millimeters, from the diagonal and
    /// the aspect ratio.
    pub fn height(&self) -> f64 {
        let ratio = self.resolution.ratio();
        self.diagonal / (ratio * ratio + 1.0).sqrt() * MM_PER_INCH
    }

    /// Physical width of the panel in millimeters. For curved panels this is
    /// the arc length along the surface, not the chord.
    pub fn width(&self) -> f64 {
        self.resolution.ratio() * self.height()
    }

    /// Physical size in millimeters as (width, height).
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }

    /// Pixels per inch, rounded to the nearest integer.
    pub fn ppi(&self) -> u32 {
        let width_inches = self.width() / MM_PER_INCH;
        (self.resolution.width as f64 / width_inches).round() as u32
    }

    /// Effective pixels per inch after display scaling.
    pub fn ppi_scaled(&self) -> u32 {
        (self.ppi() as f64 / self.scaling).round() as u32
    }

    /// Physical size of one pixel in millimeters, derived from the rounded
    /// [`Screen::ppi`] rather than the raw density.
    pub fn pixel_size(&self) -> f64 {
        MM_PER_INCH / self.ppi() as f64
    }

    /// Effective logical resolution after display scaling, each axis rounded
    /// independently.
    pub fn resolution_scaled(&self) -> Resolution {
        Resolution {
            width: (self.resolution.width as f64 / self.scaling).round() as u32,
            height: (self.resolution.height as f64 / self.scaling).round() as u32,
        }
    }

    /// Horizontal field of view in degrees.
    ///
    /// Flat panels use the plain half-angle doubling. Curved panels bend the
    /// width along an arc: the chord of that arc spans the view while its
    /// depth pulls the panel center toward the eye (`distance` is measured
    /// to the plane of the panel's edges). Extreme curvature can place the
    /// arc center behind the eye, producing a negative angle; that angle is
    /// normalized into (0, 360) by adding a full turn.
    pub fn fov_horizontal(&self) -> f64 {
        match self.curve_radius() {
            None => (2.0 * (self.width() / 2.0 / self.distance).atan()).to_degrees(),
            Some(radius) => {
                let arc = arc_profile(self.width(), radius);
                let end_distance = self.distance - arc.depth;
                let angle = (2.0 * (arc.chord / 2.0 / end_distance).atan()).to_degrees();
                if angle >= 0.0 {
                    angle
                } else {
                    360.0 + angle
                }
            }
        }
    }

    /// Vertical field of view in degrees. Curvature bends the panel only
    /// horizontally, so it does not appear here.
    pub fn fov_vertical(&self) -> f64 {
        (2.0 * (self.height() / 2.0 / self.distance).atan()).to_degrees()
    }

    /// Pixels per degree at the center of the screen: the inverse of the
    /// angle one pixel subtends on the direct line of sight.
    pub fn ppd(&self) -> f64 {
        1.0 / (self.pixel_size() / self.distance).atan().to_degrees()
    }

    /// Pixels per degree at the screen edge, which sits farther from the eye
    /// than the center. Curved panels use the arc chord and depth to locate
    /// the edge.
    pub fn ppd_edge(&self) -> f64 {
        let edge_distance = match self.curve_radius() {
            None => (self.distance.powi(2) + (self.width() / 2.0).powi(2)).sqrt(),
            Some(radius) => {
                let arc = arc_profile(self.width(), radius);
                let end_distance = self.distance - arc.depth;
                (end_distance.powi(2) + (arc.chord / 2.0).powi(2)).sqrt()
            }
        };
        1.0 / (self.pixel_size() / edge_distance).atan().to_degrees()
    }

    /// All stored and derived fields as a JSON object, for machine-readable
    /// output.
    pub fn to_json(&self) -> serde_json::Value {
        let size = self.size();
        serde_json::json!({
            "diagonal": self.diagonal,
            "resolution": self.resolution,
            "distance": self.distance,
            "curvature": self.curvature,
            "scaling": self.scaling,
            "width": size.x,
            "height": size.y,
            "ppi": self.ppi(),
            "ppi_scaled": self.ppi_scaled(),
            "pixel_size": self.pixel_size(),
            "fov_horizontal": self.fov_horizontal(),
            "fov_vertical": self.fov_vertical(),
            "ppd": self.ppd(),
            "ppd_edge": self.ppd_edge(),
            "resolution_scaled": self.resolution_scaled(),
        })
    }
}

impl fmt::Display for Screen {
    /// Single-line summary of all stored and derived fields. Lengths and
    /// angles print with 2 decimals, pixel size with 4, densities as
    /// integers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let curvature = match self.curvature {
            Some(radius) => radius.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "Screen(diagonal={}, resolution={}, distance={}, curvature={}, scaling={}, \
             width={:.2}, height={:.2}, size=({:.2}, {:.2}), ppi={}, ppi_scaled={}, \
             pixel_size={:.4}, fov_horizontal={:.2}, fov_vertical={:.2}, ppd={:.2}, \
             ppd_edge={:.2}, resolution_scaled={})",
            self.diagonal,
            self.resolution,
            self.distance,
            curvature,
            self.scaling,
            size.x,
            size.y,
            size.x,
            size.y,
            self.ppi(),
            self.ppi_scaled(),
            self.pixel_size(),
            self.fov_horizontal(),
            self.fov_vertical(),
            self.ppd(),
            self.ppd_edge(),
            self.resolution_scaled(),
        )
    }
}
