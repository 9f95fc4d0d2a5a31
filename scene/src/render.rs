//! Rendering: projects the scene into backend-neutral draw primitives.
//!
//! [`project`] is a pure function of the shape list, the selection id and the
//! id of the shape being moved. It reads nothing but each shape's own fields,
//! so the host can call it after every [`crate::engine::Action::RenderNeeded`]
//! and paint the result with whatever surface it owns (SVG, canvas, terminal).
//!
//! Primitive coordinates are canvas-local and untransformed; each [`DrawItem`]
//! carries the rotation the host applies around its pivot before painting.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{
    BODY_CORNER_RADIUS, DEFAULT_FONT_SIZE, HANDICAP_ICON_TILT_DEG, ICON_INSET, PARKING_ICON_TILT_DEG,
    PARKING_SPOT_TILT_DEG, ROAD_BADGE_RADIUS, ROAD_STOP_LINE, ROTATE_HANDLE_OFFSET,
};
use crate::doc::{
    Anchor, ParkingSpotTemplate, PlacedShape, RoadTemplate, ShapeId, ShapeKind, ShapeTemplate, SpotNumberTemplate,
    WasteBinTemplate,
};
use crate::geometry::Point;

/// Fill for shapes whose template declares no color.
const DEFAULT_FILL: &str = "#ccc";
/// Fill for roads whose template declares no color.
const ROAD_FILL: &str = "#808080";
const TEXT_FILL: &str = "black";
const LABEL_FILL: &str = "white";
const STOP_LINE_FILL: &str = "red";
/// Stroke width of the spot-number bracket.
const BRACKET_WIDTH: f64 = 2.0;

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Shrink by `inset` on every side.
    #[must_use]
    pub fn inset(&self, inset: f64) -> Self {
        Self::new(
            self.x + inset,
            self.y + inset,
            (self.width - 2.0 * inset).max(0.0),
            (self.height - 2.0 * inset).max(0.0),
        )
    }
}

/// Horizontal alignment of a text run relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Start,
    Center,
}

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Primitive {
    Rect {
        bounds: Bounds,
        corner_radius: f64,
        fill: String,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        fill: String,
    },
    Polygon {
        points: Vec<Point>,
        fill: String,
    },
    /// Open stroked path.
    Polyline {
        points: Vec<Point>,
        stroke: String,
        width: f64,
    },
    Text {
        at: Point,
        text: String,
        font_size: f64,
        font_weight: String,
        fill: String,
        align: TextAlign,
    },
    /// Named icon drawn by the host into `bounds`, turned by `rotation_deg` around its center.
    Icon {
        name: String,
        bounds: Bounds,
        rotation_deg: f64,
    },
}

/// Rotation applied to every primitive of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub rotation_deg: f64,
    pub pivot: Point,
}

/// Everything drawn for one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub transform: Transform,
    pub primitives: Vec<Primitive>,
}

/// Selection chrome for the selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOverlay {
    pub id: ShapeId,
    pub bounds: Bounds,
    pub transform: Transform,
    /// Drag target for resizing, at the bottom-right corner.
    pub resize_handle: Point,
    /// Drag target for rotating, centered above the top edge.
    pub rotate_handle: Point,
}

/// One complete frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SceneFrame {
    /// Bottom first.
    pub items: Vec<DrawItem>,
    pub selection: Option<SelectionOverlay>,
}

/// Project shapes (in z-order) into a frame.
///
/// `raised` is drawn last regardless of its position in `shapes`; the slice
/// itself is never reordered.
#[must_use]
pub fn project(shapes: &[PlacedShape], selected: Option<ShapeId>, raised: Option<ShapeId>) -> SceneFrame {
    let mut items: Vec<DrawItem> = shapes
        .iter()
        .filter(|s| Some(s.id()) != raised)
        .map(draw_item)
        .collect();
    items.extend(shapes.iter().filter(|s| Some(s.id()) == raised).map(draw_item));

    let selection = selected
        .and_then(|id| shapes.iter().find(|s| s.id() == id))
        .map(selection_overlay);

    SceneFrame { items, selection }
}

/// Bounding box of a shape, honoring its kind's anchor and waste-bin margins.
#[must_use]
pub fn bounds(shape: &PlacedShape) -> Bounds {
    let w = shape.width_or_default();
    let h = shape.height_or_default();
    let nudge = shape.margin_top.unwrap_or(0.0) - shape.margin_bottom.unwrap_or(0.0);
    match shape.kind().anchor() {
        Anchor::Center => Bounds::new(shape.x - w / 2.0, shape.y - h / 2.0 + nudge, w, h),
        Anchor::TopLeft => Bounds::new(shape.x, shape.y, w, h),
        Anchor::Baseline => Bounds::new(shape.x, shape.y - h, w, h),
    }
}

fn transform(shape: &PlacedShape, bounds: &Bounds) -> Transform {
    let tilt = match shape.kind() {
        ShapeKind::ParkingSpot if shape.flipped() => -PARKING_SPOT_TILT_DEG,
        ShapeKind::ParkingSpot => PARKING_SPOT_TILT_DEG,
        _ => 0.0,
    };
    Transform { rotation_deg: shape.rotation_or_default() + tilt, pivot: bounds.center() }
}

fn selection_overlay(shape: &PlacedShape) -> SelectionOverlay {
    let b = bounds(shape);
    SelectionOverlay {
        id: shape.id(),
        bounds: b,
        transform: transform(shape, &b),
        resize_handle: b.bottom_right(),
        rotate_handle: Point::new(b.center().x, b.y - ROTATE_HANDLE_OFFSET),
    }
}

// =============================================================
// Per-kind dispatch
// =============================================================

fn draw_item(shape: &PlacedShape) -> DrawItem {
    let b = bounds(shape);
    let primitives = match shape.template() {
        ShapeTemplate::Circle(t) => vec![Primitive::Ellipse {
            center: b.center(),
            rx: b.width / 2.0,
            ry: b.height / 2.0,
            fill: fill(t.color.as_deref(), DEFAULT_FILL),
        }],
        ShapeTemplate::Rectangle(t) => vec![Primitive::Rect {
            bounds: b,
            corner_radius: shape.border_radius.unwrap_or(0.0),
            fill: fill(t.color.as_deref(), DEFAULT_FILL),
        }],
        ShapeTemplate::Triangle(t) => vec![Primitive::Polygon {
            points: vec![
                Point::new(b.x + b.width / 2.0, b.y),
                b.bottom_right(),
                Point::new(b.x, b.y + b.height),
            ],
            fill: fill(t.color.as_deref(), DEFAULT_FILL),
        }],
        ShapeTemplate::Text(_) => vec![text_run(shape)],
        ShapeTemplate::ParkingSpot(t) => parking_spot(shape, t, &b),
        ShapeTemplate::WasteBin(t) => waste_bin(shape, t, &b),
        ShapeTemplate::Road(t) => road(t, &b),
        ShapeTemplate::SpotNumber(t) => spot_number(shape, t, &b),
    };
    DrawItem { id: shape.id(), kind: shape.kind(), transform: transform(shape, &b), primitives }
}

fn fill(color: Option<&str>, default: &str) -> String {
    color.unwrap_or(default).to_owned()
}

// =============================================================
// Shape renderers
// =============================================================

fn text_run(shape: &PlacedShape) -> Primitive {
    Primitive::Text {
        at: shape.position(),
        text: shape.text.clone().unwrap_or_default(),
        font_size: shape.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        font_weight: shape.font_weight.clone().unwrap_or_else(|| "normal".to_owned()),
        fill: fill(shape.text_color.as_deref(), TEXT_FILL),
        align: TextAlign::Start,
    }
}

fn parking_spot(shape: &PlacedShape, t: &ParkingSpotTemplate, b: &Bounds) -> Vec<Primitive> {
    let mut out = vec![Primitive::Rect {
        bounds: *b,
        corner_radius: shape.border_radius.unwrap_or(BODY_CORNER_RADIUS),
        fill: fill(t.color.as_deref(), DEFAULT_FILL),
    }];
    if let Some(icon) = &t.icon {
        // Counter-rotate so the icon reads upright on the tilted body.
        let tilt = if t.is_handicap() { HANDICAP_ICON_TILT_DEG } else { PARKING_ICON_TILT_DEG };
        out.push(Primitive::Icon {
            name: icon.clone(),
            bounds: b.inset(ICON_INSET),
            rotation_deg: if shape.flipped() { tilt } else { -tilt },
        });
    }
    out
}

fn waste_bin(shape: &PlacedShape, t: &WasteBinTemplate, b: &Bounds) -> Vec<Primitive> {
    let mut out = vec![Primitive::Rect {
        bounds: *b,
        corner_radius: shape.border_radius.unwrap_or(BODY_CORNER_RADIUS),
        fill: fill(t.color.as_deref(), DEFAULT_FILL),
    }];
    let inner = b.inset(ICON_INSET);
    let assigned = t.is_assigned();

    if let Some(icon) = &t.icon {
        let side = inner.height;
        let x = if assigned { inner.x } else { inner.center().x - side / 2.0 };
        out.push(Primitive::Icon {
            name: icon.clone(),
            bounds: Bounds::new(x, inner.y, side, side),
            rotation_deg: 0.0,
        });
    }
    if assigned {
        if let Some(name) = &t.name {
            out.push(Primitive::Text {
                at: Point::new(inner.x + inner.height + ICON_INSET, inner.center().y),
                text: name.clone(),
                font_size: 14.0,
                font_weight: "600".to_owned(),
                fill: LABEL_FILL.to_owned(),
                align: TextAlign::Start,
            });
        }
    }
    out
}

fn road(t: &RoadTemplate, b: &Bounds) -> Vec<Primitive> {
    let body = fill(t.color.as_deref(), ROAD_FILL);
    let cx = b.center().x;
    let mut out = vec![
        Primitive::Rect { bounds: *b, corner_radius: 0.0, fill: body.clone() },
        Primitive::Rect {
            bounds: Bounds::new(b.x, b.y, b.width, ROAD_STOP_LINE),
            corner_radius: 0.0,
            fill: STOP_LINE_FILL.to_owned(),
        },
    ];

    if let Some(end) = &t.end_text {
        out.push(label(Point::new(cx, b.y + ROAD_STOP_LINE + 14.0), end, 14.0));
    }

    // Three speed badges spread along the road, each followed by the direction icons.
    for quarter in 1..=3 {
        let cy = b.y + b.height * f64::from(quarter) / 4.0;
        if let Some(speed) = t.speed {
            out.push(Primitive::Ellipse {
                center: Point::new(cx, cy),
                rx: ROAD_BADGE_RADIUS,
                ry: ROAD_BADGE_RADIUS,
                fill: LABEL_FILL.to_owned(),
            });
            out.push(Primitive::Text {
                at: Point::new(cx, cy),
                text: format!("{speed}"),
                font_size: 20.0,
                font_weight: "700".to_owned(),
                fill: body.clone(),
                align: TextAlign::Center,
            });
            out.push(Primitive::Text {
                at: Point::new(cx, cy + 12.0),
                text: t.speed_unit.unwrap_or_default().label().to_owned(),
                font_size: 11.0,
                font_weight: "600".to_owned(),
                fill: body.clone(),
                align: TextAlign::Center,
            });
        }
        let size = b.width / 2.0;
        let mut offset = ROAD_BADGE_RADIUS + ICON_INSET;
        for icon in &t.icons {
            out.push(Primitive::Icon {
                name: icon.icon.clone(),
                bounds: Bounds::new(cx - size / 2.0, cy + offset, size, size),
                rotation_deg: 0.0,
            });
            offset += size;
        }
    }

    if let Some(start) = &t.start_text {
        out.push(label(Point::new(cx, b.y + b.height - 40.0), start, 12.0));
    }
    out.push(Primitive::Ellipse {
        center: Point::new(cx, b.y + b.height - 20.0),
        rx: 10.0,
        ry: 10.0,
        fill: LABEL_FILL.to_owned(),
    });
    out
}

fn label(at: Point, text: &str, font_size: f64) -> Primitive {
    Primitive::Text {
        at,
        text: text.to_owned(),
        font_size,
        font_weight: "bold".to_owned(),
        fill: LABEL_FILL.to_owned(),
        align: TextAlign::Center,
    }
}

fn spot_number(shape: &PlacedShape, t: &SpotNumberTemplate, b: &Bounds) -> Vec<Primitive> {
    // Bracket open towards the spots: right side closed unless flipped.
    let (closed, open) = if shape.flipped() { (b.x, b.x + b.width) } else { (b.x + b.width, b.x) };
    let bottom = b.y + b.height;
    let mut out = vec![Primitive::Polyline {
        points: vec![
            Point::new(open, b.y),
            Point::new(closed, b.y),
            Point::new(closed, bottom),
            Point::new(open, bottom),
        ],
        stroke: fill(t.color.as_deref(), TEXT_FILL),
        width: BRACKET_WIDTH,
    }];
    if let Some(n) = t.spot_number {
        out.push(Primitive::Text {
            at: b.center(),
            text: n.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: "normal".to_owned(),
            fill: fill(t.color.as_deref(), TEXT_FILL),
            align: TextAlign::Center,
        });
    }
    out
}
