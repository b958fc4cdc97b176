//! 3D scene drawn as projected egui shapes
//!
//! Draw order is back to front by entity kind: surface, circuit, bulb,
//! photons, electrons, flashes.

use egui::{Color32, Pos2, Rect, Shape, Stroke};
use glam::{Mat4, Vec3};
use photoelectric_physics::BulbGlow;
use photoelectric_simulation::SimulationState;

use crate::camera::Camera;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x1e);
const WIRE_COLOR: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);
const BULB_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.933);
const ELECTRON_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const FLASH_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);

pub const SURFACE_SIZE: Vec3 = Vec3::new(20.0, 0.5, 10.0);
pub const BULB_CENTER: Vec3 = Vec3::new(0.0, 20.0, -5.0);
const BULB_RADIUS: f32 = 1.0;
const FILAMENT_RADIUS: f32 = 0.3;
const ELECTRON_RADIUS: f32 = 0.1;
const FLASH_RADIUS: f32 = 0.25;

/// Wavy stroke drawn for each photon, relative to its position
const PHOTON_SHAPE: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.1, 0.2, 0.0),
    Vec3::new(-0.1, 0.4, 0.0),
    Vec3::new(0.0, 0.6, 0.0),
];

/// Straight wire segments of the circuit
pub const WIRES: [(Vec3, Vec3); 3] = [
    (Vec3::new(-20.0, 10.0, -5.0), Vec3::new(0.0, 10.0, -5.0)),
    (Vec3::new(0.0, 10.0, -5.0), Vec3::new(20.0, 10.0, -5.0)),
    (Vec3::new(0.0, 10.0, -5.0), Vec3::new(0.0, 30.0, -5.0)),
];

/// The twelve edges of an axis-aligned box
pub fn box_edges(center: Vec3, size: Vec3) -> [(Vec3, Vec3); 12] {
    let h = size * 0.5;
    let corner = |x: f32, y: f32, z: f32| center + Vec3::new(x * h.x, y * h.y, z * h.z);

    let mut edges = [(Vec3::ZERO, Vec3::ZERO); 12];
    let mut i = 0;
    for a in [-1.0, 1.0] {
        for b in [-1.0, 1.0] {
            edges[i] = (corner(-1.0, a, b), corner(1.0, a, b));
            edges[i + 1] = (corner(a, -1.0, b), corner(a, 1.0, b));
            edges[i + 2] = (corner(a, b, -1.0), corner(a, b, 1.0));
            i += 3;
        }
    }
    edges
}

/// HSL to linear RGB, all components in [0, 1]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };

    Vec3::new(
        channel(hue + 1.0 / 3.0),
        channel(hue),
        channel(hue - 1.0 / 3.0),
    )
}

pub fn to_color32(rgb: Vec3, alpha: f32) -> Color32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c(rgb.x), c(rgb.y), c(rgb.z), c(alpha))
}

pub fn filament_color(glow: &BulbGlow) -> Vec3 {
    hsl_to_rgb(BulbGlow::FILAMENT_HUE, 1.0, glow.filament_lightness)
}

/// Bulb body tinted from its base colour towards white by the glow
pub fn bulb_color(glow: &BulbGlow) -> Vec3 {
    let base = BULB_COLOR * 0.35;
    base.lerp(BULB_COLOR, glow.emissive_intensity)
}

struct Projector<'a> {
    camera: &'a Camera,
    view_proj: Mat4,
    viewport: Rect,
}

impl Projector<'_> {
    fn point(&self, world: Vec3) -> Option<Pos2> {
        self.camera
            .project_with(&self.view_proj, world, self.viewport)
            .map(|p| p.pos)
    }

    fn segment(&self, from: Vec3, to: Vec3, stroke: Stroke) -> Option<Shape> {
        Some(Shape::line_segment([self.point(from)?, self.point(to)?], stroke))
    }

    fn sphere(&self, center: Vec3, radius: f32, color: Color32) -> Option<Shape> {
        let projected = self
            .camera
            .project_with(&self.view_proj, center, self.viewport)?;
        let pixels = radius
            * self
                .camera
                .pixels_per_unit(projected.depth, self.viewport.height());
        Some(Shape::circle_filled(projected.pos, pixels.max(1.5), color))
    }
}

/// Build every shape of the scene for the given viewport
pub fn scene_shapes(camera: &Camera, viewport: Rect, state: &SimulationState) -> Vec<Shape> {
    let projector = Projector {
        camera,
        view_proj: camera.build_view_projection_matrix(),
        viewport,
    };
    let readout = state.readout();
    let lifecycle = state.lifecycle();

    let mut shapes = vec![Shape::rect_filled(viewport, 0.0, BACKGROUND)];

    let metal = to_color32(state.params().metal.properties().rgb(), 1.0);
    let top = SURFACE_SIZE.y * 0.5;
    let face: Option<Vec<Pos2>> = [
        Vec3::new(-10.0, top, -5.0),
        Vec3::new(10.0, top, -5.0),
        Vec3::new(10.0, top, 5.0),
        Vec3::new(-10.0, top, 5.0),
    ]
    .into_iter()
    .map(|corner| projector.point(corner))
    .collect();
    if let Some(face) = face {
        shapes.push(Shape::convex_polygon(face, metal.gamma_multiply(0.6), Stroke::NONE));
    }
    shapes.extend(
        box_edges(Vec3::ZERO, SURFACE_SIZE)
            .into_iter()
            .filter_map(|(a, b)| projector.segment(a, b, Stroke::new(1.5, metal))),
    );

    shapes.extend(
        WIRES
            .into_iter()
            .filter_map(|(a, b)| projector.segment(a, b, Stroke::new(2.0, WIRE_COLOR))),
    );

    shapes.extend(projector.sphere(
        BULB_CENTER,
        BULB_RADIUS,
        to_color32(bulb_color(&readout.bulb), 1.0),
    ));
    shapes.extend(projector.sphere(
        BULB_CENTER,
        FILAMENT_RADIUS,
        to_color32(filament_color(&readout.bulb), 1.0),
    ));

    for photon in lifecycle.photons() {
        let points: Option<Vec<Pos2>> = PHOTON_SHAPE
            .iter()
            .map(|offset| projector.point(photon.position + *offset))
            .collect();
        if let Some(points) = points {
            shapes.push(Shape::line(
                points,
                Stroke::new(1.5, to_color32(photon.color, 1.0)),
            ));
        }
    }

    for electron in lifecycle.electrons() {
        shapes.extend(projector.sphere(
            electron.position,
            ELECTRON_RADIUS,
            to_color32(ELECTRON_COLOR, electron.opacity),
        ));
    }

    for effect in lifecycle.effects() {
        shapes.extend(projector.sphere(
            effect.position,
            FLASH_RADIUS,
            to_color32(FLASH_COLOR, effect.opacity()),
        ));
    }

    shapes
}

/// Paint the scene into `rect` of the painter's layer
pub fn paint_scene(
    painter: &egui::Painter,
    camera: &mut Camera,
    rect: Rect,
    state: &SimulationState,
) {
    camera.resize(rect.width(), rect.height());
    painter.extend(scene_shapes(camera, rect, state));
}
