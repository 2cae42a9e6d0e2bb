use screen_geometry::{Resolution, Screen};

#[cfg(test)]
mod fov_tests {
    use super::*;

    fn flat_27_inch_at(distance: f64) -> Screen {
        Screen::new(27.0, Resolution::new(1920, 1080), distance, None, 1.0).unwrap()
    }

    #[test]
    fn test_flat_fov_matches_half_angle_doubling() {
        let screen = flat_27_inch_at(600.0);
        let expected_h = (2.0 * (screen.width() / 2.0 / 600.0).atan()).to_degrees();
        let expected_v = (2.0 * (screen.height() / 2.0 / 600.0).atan()).to_degrees();
        assert!((screen.fov_horizontal() - expected_h).abs() < 1e-12);
        assert!((screen.fov_vertical() - expected_v).abs() < 1e-12);
    }

    #[test]
    fn test_fov_shrinks_as_distance_grows() {
        let distances = [200.0, 400.0, 600.0, 1200.0, 2400.0];
        let fovs: Vec<f64> = distances
            .iter()
            .map(|&d| flat_27_inch_at(d).fov_horizontal())
            .collect();
        for pair in fovs.windows(2) {
            assert!(pair[0] > pair[1], "fov must strictly decrease: {fovs:?}");
        }
    }

    #[test]
    fn test_fov_grows_with_screen_width() {
        // Same aspect ratio and distance, increasing diagonal, so increasing
        // physical width.
        let diagonals = [21.0, 24.0, 27.0, 32.0, 49.0];
        let fovs: Vec<f64> = diagonals
            .iter()
            .map(|&d| {
                Screen::new(d, Resolution::new(1920, 1080), 600.0, None, 1.0)
                    .unwrap()
                    .fov_horizontal()
            })
            .collect();
        for pair in fovs.windows(2) {
            assert!(pair[1] > pair[0], "fov must strictly increase: {fovs:?}");
        }
    }

    #[test]
    fn test_fov_boundaries_close_and_far() {
        assert!(flat_27_inch_at(50.0).fov_horizontal() > 90.0);
        assert!(flat_27_inch_at(5000.0).fov_horizontal() < 10.0);
    }

    #[test]
    fn test_curvature_does_not_change_vertical_fov() {
        let flat = Screen::new(45.0, Resolution::new(5120, 2160), 800.0, None, 1.0).unwrap();
        let curved =
            Screen::new(45.0, Resolution::new(5120, 2160), 800.0, Some(800.0), 1.0).unwrap();
        assert_eq!(
            flat.fov_vertical().to_bits(),
            curved.fov_vertical().to_bits()
        );
    }

    #[test]
    fn test_curved_panel_widens_horizontal_fov() {
        // The arc pulls the panel center toward the eye, so a curved panel of
        // the same surface width fills more of the view than a flat one.
        let flat = Screen::new(45.0, Resolution::new(5120, 2160), 800.0, None, 1.0).unwrap();
        let curved =
            Screen::new(45.0, Resolution::new(5120, 2160), 800.0, Some(800.0), 1.0).unwrap();
        assert!(curved.fov_horizontal() > flat.fov_horizontal());
    }

    #[test]
    fn test_curved_fov_matches_arc_chord_formula() {
        let screen =
            Screen::new(45.0, Resolution::new(5120, 2160), 800.0, Some(800.0), 1.0).unwrap();

        let arc_angle = screen.width() / 800.0;
        let arc_width = 2.0 * 800.0 * (arc_angle / 2.0).sin();
        let arc_depth = 800.0 * (1.0 - (arc_angle / 2.0).cos());
        let end_distance = 800.0 - arc_depth;
        let expected = (2.0 * (arc_width / 2.0 / end_distance).atan()).to_degrees();

        assert!((screen.fov_horizontal() - expected).abs() < 0.01);
    }

    #[test]
    fn test_extreme_curvature_normalizes_into_0_360() {
        // Tight radius and short distance put the arc center behind the eye;
        // the raw doubled angle is negative and gains a full turn.
        let screen =
            Screen::new(45.0, Resolution::new(5120, 2160), 200.0, Some(300.0), 1.0).unwrap();
        let fov = screen.fov_horizontal();
        assert!(fov > 180.0 && fov < 360.0, "got {fov}");
    }

    #[test]
    fn test_curved_ppd_edge_uses_arc_distance() {
        let screen =
            Screen::new(45.0, Resolution::new(5120, 2160), 800.0, Some(800.0), 1.0).unwrap();

        let arc_angle = screen.width() / 800.0;
        let arc_width = 2.0 * 800.0 * (arc_angle / 2.0).sin();
        let arc_depth = 800.0 * (1.0 - (arc_angle / 2.0).cos());
        let end_distance = 800.0 - arc_depth;
        let edge_distance = (end_distance.powi(2) + (arc_width / 2.0).powi(2)).sqrt();
        let expected = 1.0 / (screen.pixel_size() / edge_distance).atan().to_degrees();

        assert!((screen.ppd_edge() - expected).abs() < 1e-9);
    }
}
