use std::f32::consts::{FRAC_PI_2, PI};

use tui_raycaster::core::{OccupancyGrid, RayMarcher};
use tui_raycaster::types::{MAX_RAY_DISTANCE, RAY_STEP};

fn walled_room() -> OccupancyGrid {
    OccupancyGrid::bordered(64, 64)
}

#[test]
fn ray_from_centre_reaches_border() {
    let grid = walled_room();
    let marcher = RayMarcher::default();
    let tol = RAY_STEP + 1e-3;

    for angle in [0.0, FRAC_PI_2, PI, -FRAC_PI_2] {
        let d = marcher.cast(&grid, 32.0, 32.0, angle);
        assert!((d - 31.0).abs() <= tol, "angle {angle}: {d}");
    }
}

#[test]
fn diagonal_rays_stay_within_bounds() {
    let grid = walled_room();
    let marcher = RayMarcher::default();
    let mut angle = 0.0f32;
    while angle < 2.0 * PI {
        let d = marcher.cast(&grid, 32.0, 32.0, angle);
        assert!(d >= 0.0);
        assert!(d <= MAX_RAY_DISTANCE + RAY_STEP + 1e-3);
        // The nearest border is 31 away; the farthest corner about 44.
        assert!(d >= 31.0 - RAY_STEP, "angle {angle}: {d}");
        assert!(d <= 31.0 * 2f32.sqrt() + 2.0 * RAY_STEP, "angle {angle}: {d}");
        angle += 0.05;
    }
}

#[test]
fn growing_step_budget_never_shrinks_distance() {
    let grid = walled_room();
    let marcher = RayMarcher::default();
    for angle in [0.1f32, 1.3, 2.9, 4.4] {
        let mut prev = 0.0;
        for budget in 0..400 {
            let d = marcher.cast_limited(&grid, 12.0, 40.0, angle, budget);
            assert!(d >= prev);
            prev = d;
        }
    }
}

#[test]
fn open_field_is_cut_off_at_max_distance() {
    let grid = OccupancyGrid::new(512, 512);
    let marcher = RayMarcher::default();
    let d = marcher.cast(&grid, 256.0, 256.0, 0.3);
    assert!(d >= MAX_RAY_DISTANCE);
    assert!(d <= MAX_RAY_DISTANCE + RAY_STEP + 1e-3);
}
