use image::Rgb;

use orbsim::{
    clamp_color, generate_report, CenterObject, Event, NVec2, Palette, PointObject,
    SimulationOutput, StepPosition, Visualizer,
};

fn point_at(x: f64, y: f64) -> PointObject {
    PointObject::new(NVec2::new(x, y), 1.0, NVec2::zeros()).unwrap()
}

fn one_step() -> Vec<Vec<StepPosition>> {
    vec![vec![StepPosition::Active(NVec2::new(48.0, 48.0))]]
}

// ==================================================================================
// Raster tests
// ==================================================================================

#[test]
fn draw_default_palette() {
    let vis = Visualizer::new([101, 101], 1.0, Palette::default());
    let center = CenterObject::new(50.0, 1.0).unwrap();

    let img = vis.draw(&center, &[point_at(50.0, 50.0)], &one_step());

    assert_eq!(img.dimensions(), (101, 101));
    assert_eq!(*img.get_pixel(50, 50), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(98, 2), Rgb([0, 255, 0]));
    assert_eq!(*img.get_pixel(100, 0), Rgb([255, 0, 0]));
    assert_eq!(*img.get_pixel(0, 100), Rgb([0, 0, 0]));
}

#[test]
fn draw_custom_palette() {
    let palette = Palette {
        center: Rgb([128, 128, 128]),
        step: Rgb([1, 2, 3]),
        point: Rgb([255, 255, 255]),
    };
    let vis = Visualizer::new([101, 101], 1.0, palette);
    let center = CenterObject::new(50.0, 1.0).unwrap();

    let img = vis.draw(&center, &[point_at(50.0, 50.0)], &one_step());

    assert_eq!(*img.get_pixel(50, 50), Rgb([128, 128, 128]));
    assert_eq!(*img.get_pixel(98, 2), Rgb([1, 2, 3]));
    assert_eq!(*img.get_pixel(100, 0), Rgb([255, 255, 255]));
}

#[test]
fn draw_center_disc_radius() {
    let vis = Visualizer::new([64, 64], 2.0, Palette::default());
    // 20 m radius at 2 m per pixel -> 10 pixels
    let center = CenterObject::new(40.0, 1.0).unwrap();

    let img = vis.draw(&center, &[], &[]);

    assert_eq!(*img.get_pixel(42, 32), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(32, 22), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(43, 32), Rgb([0, 0, 0]));
}

#[test]
fn draw_skips_retired_and_out_of_frame() {
    let vis = Visualizer::new([20, 20], 1.0, Palette::default());
    let center = CenterObject::new(1.0, 1.0).unwrap();
    let steps = vec![
        vec![StepPosition::Active(NVec2::new(5.0, 0.0)), StepPosition::Active(NVec2::new(500.0, 0.0))],
        vec![StepPosition::Retired, StepPosition::Retired],
    ];

    let img = vis.draw(&center, &[], &steps);

    assert_eq!(*img.get_pixel(15, 10), Rgb([0, 255, 0]));
    assert_eq!(vis.pixel_of(NVec2::new(500.0, 0.0)), None);
    assert_eq!(vis.pixel_of(NVec2::new(-3.0, 4.0)), Some((7, 6)));
}

#[test]
fn draw_center_larger_than_frame() {
    let vis = Visualizer::new([16, 16], 1.0, Palette::default());
    let center = CenterObject::new(1.0e30, 1.0).unwrap();

    let img = vis.draw(&center, &[], &[]);

    assert!(img.pixels().all(|p| *p == Rgb([255, 255, 255])));
}

#[test]
fn pixel_of_far_away_position_is_outside() {
    let vis = Visualizer::new([16, 16], 1.0, Palette::default());

    assert_eq!(vis.pixel_of(NVec2::new(1.0e30, 0.0)), None);
    assert_eq!(vis.pixel_of(NVec2::new(0.0, -1.0e30)), None);
    assert_eq!(vis.pixel_of(NVec2::new(f64::NAN, 0.0)), None);
}

#[test]
fn colors_are_clamped() {
    assert_eq!(clamp_color([300, 300, 300]), Rgb([255, 255, 255]));
    assert_eq!(clamp_color([-1, -1, -1]), Rgb([0, 0, 0]));
    assert_eq!(clamp_color([10, 256, -7]), Rgb([10, 255, 0]));
}

// ==================================================================================
// Report tests
// ==================================================================================

#[test]
fn report_without_events() {
    let output = SimulationOutput {
        simulation_steps: one_step(),
        ..Default::default()
    };

    let report = generate_report(&output, &[point_at(50.0, 50.0)]);

    assert_eq!(
        report,
        "Objects:\nn=0, start position = (48.0, 48.0), end position = (50.0, 50.0)\n\nCollisions:\n"
    );
}

#[test]
fn report_with_collisions() {
    let output = SimulationOutput {
        simulation_steps: one_step(),
        collisions: vec![Event::new(1, [1, 2]), Event::new(2, [3])],
        close_calls: Vec::new(),
    };

    let report = generate_report(&output, &[point_at(50.0, 50.0)]);

    assert_eq!(
        report,
        "Objects:\nn=0, start position = (48.0, 48.0), end position = (50.0, 50.0)\n\n\
         Collisions:\nn=1, n=2 at k=1\nn=3 at k=2\n"
    );
}

#[test]
fn report_with_close_calls() {
    let output = SimulationOutput {
        simulation_steps: one_step(),
        collisions: Vec::new(),
        close_calls: vec![Event::new(0, [0, 4, 2])],
    };

    let report = generate_report(&output, &[point_at(-1.5, 0.0)]);

    assert!(report.ends_with("\nClose calls:\nn=0, n=2, n=4 at k=0\n"));
    assert!(report.contains("end position = (-1.5, 0.0)"));
}
