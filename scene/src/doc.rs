//! Document model: shape kinds, palette templates, placed shapes and the scene store.
//!
//! This module defines the closed set of element kinds (`ShapeKind`), the
//! immutable descriptor a palette hands over on drop (`ShapeTemplate`), the
//! mutable unit of the scene (`PlacedShape`) and the runtime store that owns
//! the ordered shape list plus the current selection (`SceneStore`).
//!
//! Templates arrive as JSON from the palette; placed shapes only ever live in
//! memory. The projector reads the store in insertion order, which doubles as
//! z-order: later entries draw on top.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

/// Unique identifier for a placed shape.
pub type ShapeId = Uuid;

/// The kind of a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    /// Plain circle.
    Circle,
    /// Plain rectangle, optionally with rounded corners.
    Rectangle,
    /// Isosceles triangle inscribed in its bounding box.
    Triangle,
    /// Free text label.
    Text,
    /// Single parking bay, drawn tilted.
    ParkingSpot,
    /// Waste-bin station with a category icon and label.
    WasteBin,
    /// Road segment with speed markings.
    Road,
    /// Numbered bracket marking a row of spots.
    SpotNumber,
}

/// Which point of a shape its `(x, y)` position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the center of the bounding box.
    Center,
    /// Position is the top-left corner of the bounding box.
    TopLeft,
    /// Position is the left end of the text baseline.
    Baseline,
}

impl ShapeKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 8] = [
        Self::Circle,
        Self::Rectangle,
        Self::Triangle,
        Self::Text,
        Self::ParkingSpot,
        Self::WasteBin,
        Self::Road,
        Self::SpotNumber,
    ];

    /// Size used when a shape carries no width/height override.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Circle => (60.0, 60.0),
            Self::Rectangle => (80.0, 80.0),
            Self::Triangle => (70.0, 70.0),
            Self::Text => (120.0, 20.0),
            Self::ParkingSpot => (50.0, 30.0),
            Self::WasteBin => (130.0, 50.0),
            Self::Road => (65.0, 700.0),
            Self::SpotNumber => (30.0, 40.0),
        }
    }

    /// The anchor convention for this kind's position.
    #[must_use]
    pub fn anchor(self) -> Anchor {
        match self {
            Self::Circle | Self::ParkingSpot | Self::WasteBin => Anchor::Center,
            Self::Rectangle | Self::Triangle | Self::Road | Self::SpotNumber => Anchor::TopLeft,
            Self::Text => Anchor::Baseline,
        }
    }

    /// Whether shapes of this kind carry a mirrored orientation.
    #[must_use]
    pub fn is_flippable(self) -> bool {
        matches!(self, Self::ParkingSpot | Self::SpotNumber)
    }
}

/// Template fields shared by the plain geometric kinds and text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Palette descriptor for a parking spot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParkingSpotTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Bay type, e.g. `"handicap"`; anything else is a regular bay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking_type: Option<String>,
}

impl ParkingSpotTemplate {
    #[must_use]
    pub fn is_handicap(&self) -> bool {
        self.parking_type.as_deref() == Some("handicap")
    }
}

/// Palette descriptor for a waste-bin station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteBinTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Waste category; `"notAssigned"` hides the label.
    #[serde(rename = "wasteBinCategorie", alias = "category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl WasteBinTemplate {
    /// Whether the bin has a category and therefore shows its name label.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.category.as_deref() != Some("notAssigned")
    }
}

/// Unit shown under a road's speed limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "KMH")]
    Kmh,
    #[serde(rename = "MPH")]
    Mph,
}

impl SpeedUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kmh => "KMH",
            Self::Mph => "MPH",
        }
    }
}

/// A direction marker painted on a road.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadIcon {
    pub icon: String,
}

/// Palette descriptor for a road segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<SpeedUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<RoadIcon>,
}

/// Palette descriptor for a spot-number marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotNumberTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_number: Option<i64>,
}

/// Immutable descriptor of a placeable element, as serialized by the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeTemplate {
    #[serde(alias = "Circle")]
    Circle(BasicTemplate),
    #[serde(alias = "Rectangle")]
    Rectangle(BasicTemplate),
    #[serde(alias = "Triangle")]
    Triangle(BasicTemplate),
    #[serde(alias = "Text")]
    Text(BasicTemplate),
    ParkingSpot(ParkingSpotTemplate),
    WasteBin(WasteBinTemplate),
    Road(RoadTemplate),
    SpotNumber(SpotNumberTemplate),
}

impl ShapeTemplate {
    /// Parse a palette drop payload.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the payload is malformed or names an unknown kind.
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Text(_) => ShapeKind::Text,
            Self::ParkingSpot(_) => ShapeKind::ParkingSpot,
            Self::WasteBin(_) => ShapeKind::WasteBin,
            Self::Road(_) => ShapeKind::Road,
            Self::SpotNumber(_) => ShapeKind::SpotNumber,
        }
    }

    /// Fill color declared by the template, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Circle(t) | Self::Rectangle(t) | Self::Triangle(t) | Self::Text(t) => t.color.as_deref(),
            Self::ParkingSpot(t) => t.color.as_deref(),
            Self::WasteBin(t) => t.color.as_deref(),
            Self::Road(t) => t.color.as_deref(),
            Self::SpotNumber(t) => t.color.as_deref(),
        }
    }

    /// A blank text template.
    #[must_use]
    pub fn text() -> Self {
        Self::Text(BasicTemplate::default())
    }
}

/// A placed shape: one concrete element on the canvas.
///
/// `id` and `template` are fixed at creation; everything else is editable.
/// Optional numeric fields fall back to the kind's defaults when absent.
/// Serializes for inspection only; there is no load path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedShape {
    pub(crate) id: ShapeId,
    pub(crate) template: ShapeTemplate,
    /// Anchor x in canvas coordinates (see [`ShapeKind::anchor`]).
    pub x: f64,
    /// Anchor y in canvas coordinates.
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Rotation in degrees, clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Mirrored orientation (parking spots and spot numbers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flipped: Option<bool>,
    /// Downward nudge of a waste bin, independent of its position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    /// Upward nudge of a waste bin, independent of its position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl PlacedShape {
    /// Create a shape from a template with a fresh id.
    #[must_use]
    pub fn new(template: ShapeTemplate, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            template,
            x,
            y,
            width: None,
            height: None,
            rotation: None,
            border_radius: None,
            is_flipped: None,
            margin_top: None,
            margin_bottom: None,
            text: None,
            font_size: None,
            font_weight: None,
            text_color: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.template.kind()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width override or the kind default.
    #[must_use]
    pub fn width_or_default(&self) -> f64 {
        self.width.unwrap_or_else(|| self.kind().default_size().0)
    }

    /// Height override or the kind default.
    #[must_use]
    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or_else(|| self.kind().default_size().1)
    }

    #[must_use]
    pub fn rotation_or_default(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    #[must_use]
    pub fn flipped(&self) -> bool {
        self.is_flipped.unwrap_or(false)
    }

    /// Pivot used by rotation gestures: position plus half the size.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.position()
            .offset(self.width_or_default() / 2.0, self.height_or_default() / 2.0)
    }

    /// Copy this shape under a fresh id, shifted by `(dx, dy)`.
    #[must_use]
    pub fn duplicate(&self, dx: f64, dy: f64) -> Self {
        Self { id: Uuid::new_v4(), x: self.x + dx, y: self.y + dy, ..self.clone() }
    }
}

/// In-memory scene: shapes in insertion (z) order plus the current selection.
#[derive(Debug, Default)]
pub struct SceneStore {
    shapes: Vec<PlacedShape>,
    selected: Option<ShapeId>,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape. A shape whose id is already present replaces that entry in place.
    pub fn add_shape(&mut self, shape: PlacedShape) {
        if let Some(slot) = self.shapes.iter_mut().find(|s| s.id == shape.id) {
            *slot = shape;
        } else {
            self.shapes.push(shape);
        }
    }

    /// Replace the entry with the same id, keeping its position in the order.
    /// Returns false if no such entry exists.
    pub fn replace(&mut self, shape: PlacedShape) -> bool {
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id == shape.id) else {
            return false;
        };
        *slot = shape;
        true
    }

    /// Install a whole new scene and drop a selection that no longer resolves.
    pub fn replace_all(&mut self, shapes: Vec<PlacedShape>) {
        self.shapes = shapes;
        self.revalidate_selection();
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Option<PlacedShape> {
        let index = self.shapes.iter().position(|s| s.id == *id)?;
        let removed = self.shapes.remove(index);
        self.revalidate_selection();
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&PlacedShape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// All shapes in z-order (bottom first).
    #[must_use]
    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    /// The most recently added shape.
    #[must_use]
    pub fn last(&self) -> Option<&PlacedShape> {
        self.shapes.last()
    }

    /// Deep copy of the current shapes, for history.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PlacedShape> {
        self.shapes.clone()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected shape as it currently stands in the scene.
    #[must_use]
    pub fn selected(&self) -> Option<&PlacedShape> {
        self.selected.and_then(|id| self.get(&id))
    }

    /// Select a shape. Selecting an absent id clears the selection and returns false.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.contains(&id) {
            self.selected = Some(id);
            true
        } else {
            self.selected = None;
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn revalidate_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.contains(&id) {
                self.selected = None;
            }
        }
    }
}
