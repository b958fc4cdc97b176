/// RGBA color with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// From a 0xRRGGBB value
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Channels scaled to 0-255
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }
}

/// Text anchored at the left end of its baseline
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub position: [f32; 2],
    pub text: String,
    pub color: Color,
    /// Font height in pixels
    pub size: f32,
    /// Clockwise rotation in radians about `position`
    pub angle: f32,
}

/// Shapes that can be drawn on a diagram canvas
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    FilledRect { rect: Rect, color: Color },
    Polyline { points: Vec<[f32; 2]>, stroke: Stroke },
    Text(Label),
}

/// Fixed-size drawing surface holding a display list
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Canvas {
    /// Default text height, matching a 10px canvas font
    pub const FONT_SIZE: f32 = 10.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.shapes.push(Shape::FilledRect { rect, color });
    }

    pub fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke) {
        self.polyline(vec![from, to], stroke);
    }

    pub fn polyline(&mut self, points: Vec<[f32; 2]>, stroke: Stroke) {
        if points.len() >= 2 {
            self.shapes.push(Shape::Polyline { points, stroke });
        }
    }

    pub fn text(&mut self, position: [f32; 2], text: impl Into<String>, color: Color) {
        self.rotated_text(position, text, color, 0.0);
    }

    pub fn rotated_text(
        &mut self,
        position: [f32; 2],
        text: impl Into<String>,
        color: Color,
        angle: f32,
    ) {
        self.shapes.push(Shape::Text(Label {
            position,
            text: text.into(),
            color,
            size: Self::FONT_SIZE,
            angle,
        }));
    }

    /// All text labels in draw order
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(label) => Some(label),
            _ => None,
        })
    }

    pub fn find_label(&self, text: &str) -> Option<&Label> {
        self.labels().find(|label| label.text == text)
    }
}
