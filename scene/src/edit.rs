//! Attribute mutators: the closed set of single-field edits a property panel
//! may issue against one shape.
//!
//! An edit never touches the scene itself. [`AttributeEdit::apply`] returns a
//! patched copy of the shape, which the engine installs in place of the
//! original entry.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use serde::{Deserialize, Serialize};

use crate::doc::{PlacedShape, ShapeKind, ShapeTemplate, SpeedUnit};
use crate::error::EditorError;

/// One field edit, as a panel sends it: `{"field": "height", "value": 120}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum AttributeEdit {
    Width(f64),
    Height(f64),
    BorderRadius(f64),
    MarginTop(f64),
    MarginBottom(f64),
    #[serde(rename = "isFlipped")]
    Flipped(bool),
    Text(String),
    FontSize(f64),
    FontWeight(String),
    TextColor(String),
    #[serde(rename = "speed")]
    RoadSpeed(f64),
    #[serde(rename = "speedUnit")]
    RoadSpeedUnit(SpeedUnit),
    SpotNumber(i64),
}

impl AttributeEdit {
    /// Name of the edited field, as the panel labels it.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::BorderRadius(_) => "borderRadius",
            Self::MarginTop(_) => "marginTop",
            Self::MarginBottom(_) => "marginBottom",
            Self::Flipped(_) => "isFlipped",
            Self::Text(_) => "text",
            Self::FontSize(_) => "fontSize",
            Self::FontWeight(_) => "fontWeight",
            Self::TextColor(_) => "textColor",
            Self::RoadSpeed(_) => "speed",
            Self::RoadSpeedUnit(_) => "speedUnit",
            Self::SpotNumber(_) => "spotNumber",
        }
    }

    /// Whether shapes of `kind` carry this field.
    #[must_use]
    pub fn applies_to(&self, kind: ShapeKind) -> bool {
        match self {
            Self::Width(_) | Self::Height(_) => true,
            Self::BorderRadius(_) => matches!(
                kind,
                ShapeKind::Rectangle | ShapeKind::ParkingSpot | ShapeKind::WasteBin
            ),
            Self::MarginTop(_) | Self::MarginBottom(_) => kind == ShapeKind::WasteBin,
            Self::Flipped(_) => kind.is_flippable(),
            Self::Text(_) | Self::FontSize(_) | Self::FontWeight(_) | Self::TextColor(_) => kind == ShapeKind::Text,
            Self::RoadSpeed(_) | Self::RoadSpeedUnit(_) => kind == ShapeKind::Road,
            Self::SpotNumber(_) => kind == ShapeKind::SpotNumber,
        }
    }

    fn numeric_value(&self) -> Option<f64> {
        match self {
            Self::Width(v)
            | Self::Height(v)
            | Self::BorderRadius(v)
            | Self::MarginTop(v)
            | Self::MarginBottom(v)
            | Self::FontSize(v)
            | Self::RoadSpeed(v) => Some(*v),
            Self::Flipped(_)
            | Self::Text(_)
            | Self::FontWeight(_)
            | Self::TextColor(_)
            | Self::RoadSpeedUnit(_)
            | Self::SpotNumber(_) => None,
        }
    }

    /// Produce a patched copy of `shape`.
    ///
    /// # Errors
    ///
    /// `NonFiniteValue` for a NaN or infinite number, `NotApplicable` when the
    /// shape's kind does not carry the field.
    pub fn apply(&self, shape: &PlacedShape) -> Result<PlacedShape, EditorError> {
        let field = self.field();
        if self.numeric_value().is_some_and(|v| !v.is_finite()) {
            return Err(EditorError::NonFiniteValue { field });
        }
        let kind = shape.kind();
        if !self.applies_to(kind) {
            return Err(EditorError::NotApplicable { field, kind });
        }

        let mut patched = shape.clone();
        match self {
            Self::Width(v) => patched.width = Some(*v),
            Self::Height(v) => patched.height = Some(*v),
            Self::BorderRadius(v) => patched.border_radius = Some(*v),
            Self::MarginTop(v) => patched.margin_top = Some(*v),
            Self::MarginBottom(v) => patched.margin_bottom = Some(*v),
            Self::Flipped(v) => patched.is_flipped = Some(*v),
            Self::Text(v) => patched.text = Some(v.clone()),
            Self::FontSize(v) => patched.font_size = Some(*v),
            Self::FontWeight(v) => patched.font_weight = Some(v.clone()),
            Self::TextColor(v) => patched.text_color = Some(v.clone()),
            Self::RoadSpeed(v) => {
                if let ShapeTemplate::Road(road) = &mut patched.template {
                    road.speed = Some(*v);
                }
            }
            Self::RoadSpeedUnit(unit) => {
                if let ShapeTemplate::Road(road) = &mut patched.template {
                    road.speed_unit = Some(*unit);
                }
            }
            Self::SpotNumber(n) => {
                if let ShapeTemplate::SpotNumber(marker) = &mut patched.template {
                    marker.spot_number = Some(*n);
                }
            }
        }
        Ok(patched)
    }
}
