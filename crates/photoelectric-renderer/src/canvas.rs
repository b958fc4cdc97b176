//! Translation of diagram display lists into egui shapes

use egui::{epaint::TextShape, Color32, FontId, Pos2, Rect, Shape, Stroke};
use photoelectric_diagrams::{Canvas, Color, Label, Shape as CanvasShape};

pub const CANVAS_BORDER: Color32 = Color32::WHITE;

pub fn color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn offset(origin: Pos2, point: [f32; 2]) -> Pos2 {
    Pos2::new(origin.x + point[0], origin.y + point[1])
}

/// Geometry shapes of a canvas placed at `origin`; text is skipped
pub fn geometry_shape(origin: Pos2, shape: &CanvasShape) -> Option<Shape> {
    match shape {
        CanvasShape::FilledRect { rect, color } => Some(Shape::rect_filled(
            Rect::from_min_max(offset(origin, rect.min), offset(origin, rect.max)),
            0.0,
            color32(*color),
        )),
        CanvasShape::Polyline { points, stroke } => Some(Shape::line(
            points.iter().map(|p| offset(origin, *p)).collect(),
            Stroke::new(stroke.width, color32(stroke.color)),
        )),
        CanvasShape::Text(_) => None,
    }
}

fn text_shape(painter: &egui::Painter, origin: Pos2, label: &Label) -> Shape {
    let color = color32(label.color);
    let galley = painter.layout_no_wrap(label.text.clone(), FontId::proportional(label.size), color);
    // Labels anchor on the baseline; galleys on their top-left corner
    let (sin, cos) = label.angle.sin_cos();
    let ascent = galley.size().y * 0.8;
    let anchor = offset(origin, label.position) + egui::vec2(ascent * sin, -ascent * cos);

    Shape::Text(TextShape::new(anchor, galley, color).with_angle(label.angle))
}

/// Paint a canvas with its top-left corner at `origin`, clipped to its bounds
pub fn paint_canvas(painter: &egui::Painter, canvas: &Canvas, origin: Pos2) -> Rect {
    let bounds = Rect::from_min_size(origin, egui::vec2(canvas.width, canvas.height));
    let painter = painter.with_clip_rect(bounds);

    for shape in &canvas.shapes {
        match shape {
            CanvasShape::Text(label) => {
                painter.add(text_shape(&painter, origin, label));
            }
            other => {
                if let Some(shape) = geometry_shape(origin, other) {
                    painter.add(shape);
                }
            }
        }
    }
    painter.rect_stroke(
        bounds,
        0.0,
        Stroke::new(1.0, CANVAS_BORDER),
        egui::StrokeKind::Inside,
    );

    bounds
}

/// Reserve space in a ui and paint the canvas into it
pub fn show_canvas(ui: &mut egui::Ui, canvas: &Canvas) -> egui::Response {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(canvas.width, canvas.height), egui::Sense::hover());
    paint_canvas(&painter, canvas, response.rect.min);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoelectric_diagrams::{Rect as CanvasRect, Stroke as CanvasStroke};

    #[test]
    fn test_color_conversion() {
        assert_eq!(color32(Color::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(
            color32(Color::WHITE.with_alpha(0.0)),
            Color32::from_rgba_unmultiplied(255, 255, 255, 0)
        );
    }

    #[test]
    fn test_rect_is_offset() {
        let shape = CanvasShape::FilledRect {
            rect: CanvasRect::from_min_size([50.0, 180.0], [200.0, 2.0]),
            color: Color::WHITE,
        };
        let Some(Shape::Rect(rect)) = geometry_shape(Pos2::new(10.0, 20.0), &shape) else {
            panic!("expected a rect");
        };
        assert_eq!(rect.rect.min, Pos2::new(60.0, 200.0));
        assert_eq!(rect.rect.max, Pos2::new(260.0, 202.0));
    }

    #[test]
    fn test_polyline_becomes_path() {
        let shape = CanvasShape::Polyline {
            points: vec![[0.0, 0.0], [5.0, 5.0], [10.0, 0.0]],
            stroke: CanvasStroke::new(1.0, Color::GREEN),
        };
        let Some(Shape::Path(path)) = geometry_shape(Pos2::ZERO, &shape) else {
            panic!("expected a path");
        };
        assert_eq!(path.points.len(), 3);
        assert!(!path.closed);
    }

    #[test]
    fn test_text_is_not_geometry() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.text([0.0, 5.0], "f₀", Color::RED);
        assert!(geometry_shape(Pos2::ZERO, &canvas.shapes[0]).is_none());
    }
}
