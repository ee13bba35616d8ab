//! Gradient tool state

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Conic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

/// Radial center. `Custom` reads `radialX` / `radialY` percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    Custom,
}

impl RadialPosition {
    /// The CSS position keyword, `None` for `Custom`.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Center => Some("center"),
            Self::Top => Some("top"),
            Self::Bottom => Some("bottom"),
            Self::Left => Some("left"),
            Self::Right => Some("right"),
            Self::Custom => None,
        }
    }
}

/// How the gradient is wrapped into declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    #[default]
    Background,
    BackgroundImage,
    CssVariable,
    WithFallback,
}

impl FromStr for OutputMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(Self::Background),
            "background-image" => Ok(Self::BackgroundImage),
            "css-variable" => Ok(Self::CssVariable),
            "with-fallback" => Ok(Self::WithFallback),
            other => Err(UnknownName::new(
                "output mode",
                other,
                ["background", "background-image", "css-variable", "with-fallback"],
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationEasing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Display for AnimationEasing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        })
    }
}

/// One color stop. `position` and `opacity` are percentages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: String,
    pub color: String,
    pub position: f64,
    pub opacity: f64,
}

impl ColorStop {
    pub fn new(id: impl Into<String>, color: impl Into<String>, position: f64) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            position,
            opacity: 100.0,
        }
    }
}

/// Complete state of the gradient tool.
///
/// Missing fields decode to their defaults, so a partial blob merges over
/// [`GradientState::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientState {
    #[serde(rename = "type")]
    pub kind: GradientType,
    pub angle: f64,
    pub radial_shape: RadialShape,
    pub radial_position: RadialPosition,
    pub radial_x: f64,
    pub radial_y: f64,
    pub conic_x: f64,
    pub conic_y: f64,
    pub stops: Vec<ColorStop>,
    pub output_mode: OutputMode,
    pub show_checkerboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<AnimationEasing>,
    pub selected_stop_id: Option<String>,
}

impl Default for GradientState {
    fn default() -> Self {
        Self {
            kind: GradientType::Linear,
            angle: 90.0,
            radial_shape: RadialShape::Circle,
            radial_position: RadialPosition::Center,
            radial_x: 50.0,
            radial_y: 50.0,
            conic_x: 50.0,
            conic_y: 50.0,
            stops: vec![
                ColorStop::new("stop-1", "#667eea", 0.0),
                ColorStop::new("stop-2", "#764ba2", 100.0),
            ],
            output_mode: OutputMode::Background,
            show_checkerboard: false,
            apply_to_background: None,
            animate: None,
            animation_speed: None,
            animation_easing: None,
            selected_stop_id: None,
        }
    }
}
