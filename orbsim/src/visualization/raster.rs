//! Raster image of a finished run.
//!
//! The center object sits in the middle of the image; every recorded
//! position becomes one pixel of the trail, and the final position of each
//! point object is drawn last on top. Simulation `y` grows upward, image
//! rows grow downward, so `y` is flipped.

use image::{Rgb, RgbImage};

use crate::simulation::collisions::{pixel_in_range, to_pixel};
use crate::simulation::states::{CenterObject, NVec2, PointObject, StepPosition};

/// Colors used for the three kinds of things drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub center: Rgb<u8>,
    pub step: Rgb<u8>,
    pub point: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            center: Rgb([255, 255, 255]),
            step: Rgb([0, 255, 0]),
            point: Rgb([255, 0, 0]),
        }
    }
}

/// Color from arbitrary integer components, each clamped into 0..=255
pub fn clamp_color(c: [i64; 3]) -> Rgb<u8> {
    Rgb(c.map(|v| v.clamp(0, 255) as u8))
}

pub struct Visualizer {
    resolution: [u32; 2],
    meters_per_pixel: f64,
    palette: Palette,
}

impl Visualizer {
    pub fn new(resolution: [u32; 2], meters_per_pixel: f64, palette: Palette) -> Self {
        Self {
            resolution,
            meters_per_pixel,
            palette,
        }
    }

    fn image_center(&self) -> (i64, i64) {
        ((self.resolution[0] / 2) as i64, (self.resolution[1] / 2) as i64)
    }

    /// Image pixel for a simulation position, `None` if it falls outside
    pub fn pixel_of(&self, position: NVec2) -> Option<(u32, u32)> {
        let flipped = NVec2::new(position.x, -position.y);
        if !pixel_in_range(flipped, self.meters_per_pixel) {
            return None;
        }
        let (cx, cy) = self.image_center();
        let (px, py) = to_pixel(flipped, self.meters_per_pixel);
        let (x, y) = (cx + px, cy + py);

        let inside = (0..self.resolution[0] as i64).contains(&x)
            && (0..self.resolution[1] as i64).contains(&y);
        inside.then_some((x as u32, y as u32))
    }

    pub fn draw(
        &self,
        center: &CenterObject,
        points: &[PointObject],
        simulation_steps: &[Vec<StepPosition>],
    ) -> RgbImage {
        let [w, h] = self.resolution;
        let mut img = RgbImage::new(w, h);

        // Center disc
        let (cx, cy) = self.image_center();
        // A disc wider than the frame diagonal covers every pixel anyway
        let r = ((center.radius() / self.meters_per_pixel).round() as i64).min(w as i64 + h as i64);
        for y in (cy - r).max(0)..=(cy + r).min(h as i64 - 1) {
            for x in (cx - r).max(0)..=(cx + r).min(w as i64 - 1) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    img.put_pixel(x as u32, y as u32, self.palette.center);
                }
            }
        }

        // Trails
        for step in simulation_steps {
            for pos in step.iter().filter_map(StepPosition::active) {
                if let Some((x, y)) = self.pixel_of(pos) {
                    img.put_pixel(x, y, self.palette.step);
                }
            }
        }

        // Final states
        for point in points {
            if let Some((x, y)) = self.pixel_of(point.position()) {
                img.put_pixel(x, y, self.palette.point);
            }
        }

        img
    }
}
