//! Fluid typography state
//!
//! The aggregate root is [`ClampTypographyState`]. Its JSON form uses
//! camelCase field names and is the blob persisted by `fetools_store`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownName;

/// Browser width bounds, in pixels, over which sizes interpolate.
///
/// `max <= min` is accepted and produces a constant clamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportRange {
    pub min: f64,
    pub max: f64,
}

impl ViewportRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when interpolation would divide by a zero or negative span.
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

impl Default for ViewportRange {
    fn default() -> Self {
        Self::new(320.0, 1440.0)
    }
}

/// Body size bounds in pixels. `base` is informational only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
    pub base: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64, base: f64) -> Self {
        Self { min, max, base }
    }

    /// Scale all three bounds by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.min * factor, self.max * factor, self.base * factor)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::new(14.0, 18.0, 16.0)
    }
}

/// Output unit. Only formatting depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    #[default]
    Rem,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(Self::Px),
            "rem" => Ok(Self::Rem),
            other => Err(UnknownName::new("unit", other, ["px", "rem"])),
        }
    }
}

/// Geometric type-scale ratio.
///
/// Serialized as the bare ratio number, or as the string `"custom"` for
/// [`ScaleRatio::Custom`], whose value lives in the state's `customRatio`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleRatio {
    /// 1.125
    MinorSecond,
    /// 1.2
    MinorThird,
    /// 1.25
    #[default]
    MajorThird,
    /// 1.333
    PerfectFourth,
    /// 1.414
    AugmentedFourth,
    Custom,
}

impl ScaleRatio {
    pub const MIN_CUSTOM: f64 = 1.05;
    pub const MAX_CUSTOM: f64 = 2.0;

    /// Every ratio, fixed ones first.
    pub fn all() -> &'static [ScaleRatio] {
        const RATIOS: [ScaleRatio; 6] = [
            ScaleRatio::MinorSecond,
            ScaleRatio::MinorThird,
            ScaleRatio::MajorThird,
            ScaleRatio::PerfectFourth,
            ScaleRatio::AugmentedFourth,
            ScaleRatio::Custom,
        ];
        &RATIOS
    }

    /// The fixed ratio value, `None` for [`ScaleRatio::Custom`].
    pub fn fixed_value(self) -> Option<f64> {
        match self {
            Self::MinorSecond => Some(1.125),
            Self::MinorThird => Some(1.2),
            Self::MajorThird => Some(1.25),
            Self::PerfectFourth => Some(1.333),
            Self::AugmentedFourth => Some(1.414),
            Self::Custom => None,
        }
    }

    /// Find the fixed ratio with exactly this value.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|ratio| ratio.fixed_value() == Some(value))
    }

    /// Stable id used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::MinorSecond => "minor-second",
            Self::MinorThird => "minor-third",
            Self::MajorThird => "major-third",
            Self::PerfectFourth => "perfect-fourth",
            Self::AugmentedFourth => "augmented-fourth",
            Self::Custom => "custom",
        }
    }

    /// Resolve to a concrete ratio, clamping `custom_ratio` into
    /// `[1.05, 2]` when this is [`ScaleRatio::Custom`].
    pub fn resolve(self, custom_ratio: f64) -> f64 {
        match self.fixed_value() {
            Some(value) => value,
            None => custom_ratio.clamp(Self::MIN_CUSTOM, Self::MAX_CUSTOM),
        }
    }
}

impl Display for ScaleRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.fixed_value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("custom"),
        }
    }
}

impl FromStr for ScaleRatio {
    type Err = UnknownName;

    /// Accepts an id (`major-third`), the ratio value (`1.25`) or `custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ratio) = Self::all().iter().copied().find(|r| r.id() == s) {
            return Ok(ratio);
        }
        s.parse::<f64>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| {
                UnknownName::new(
                    "scale ratio",
                    s,
                    ["1.125", "1.2", "1.25", "1.333", "1.414", "custom"],
                )
            })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatioRepr {
    Fixed(f64),
    Marker(String),
}

impl Serialize for ScaleRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.fixed_value() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str("custom"),
        }
    }
}

impl<'de> Deserialize<'de> for ScaleRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RatioRepr::deserialize(deserializer)? {
            RatioRepr::Fixed(value) => Self::from_value(value)
                .ok_or_else(|| D::Error::custom(format!("unsupported scale ratio {value}"))),
            RatioRepr::Marker(marker) if marker == "custom" => Ok(Self::Custom),
            RatioRepr::Marker(marker) => Err(D::Error::custom(format!(
                "unsupported scale ratio `{marker}`"
            ))),
        }
    }
}

/// Tag of one entry in a generated type scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body,
    Small,
}

impl Level {
    /// Heading levels, largest first.
    pub const HEADINGS: [Level; 6] = [
        Level::H1,
        Level::H2,
        Level::H3,
        Level::H4,
        Level::H5,
        Level::H6,
    ];

    /// The CSS selector and custom-property suffix for this level.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Body => "body",
            Self::Small => "small",
        }
    }

    fn all() -> [Level; 8] {
        [
            Level::H1,
            Level::H2,
            Level::H3,
            Level::H4,
            Level::H5,
            Level::H6,
            Level::Body,
            Level::Small,
        ]
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|level| level.tag() == s)
            .ok_or_else(|| UnknownName::new("level", s, Self::all().map(Level::tag)))
    }
}

/// One derived entry of a type scale. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypographyLevel {
    pub level: Level,
    pub min: f64,
    pub max: f64,
}

/// Named typography presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    Body,
    Small,
    H1,
    H2,
    H3,
    Spacing,
}

impl PresetName {
    pub fn id(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Small => "small",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Spacing => "spacing",
        }
    }

    pub fn all() -> &'static [PresetName] {
        const PRESETS: [PresetName; 6] = [
            PresetName::Body,
            PresetName::Small,
            PresetName::H1,
            PresetName::H2,
            PresetName::H3,
            PresetName::Spacing,
        ];
        &PRESETS
    }
}

impl Display for PresetName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PresetName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == s)
            .ok_or_else(|| {
                UnknownName::new("preset", s, Self::all().iter().map(|p| p.id()))
            })
    }
}

/// Whether the tool is producing font sizes or spacing tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Typography,
    Spacing,
}

impl FromStr for Mode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typography" => Ok(Self::Typography),
            "spacing" => Ok(Self::Spacing),
            other => Err(UnknownName::new("mode", other, ["typography", "spacing"])),
        }
    }
}

/// Which property the spacing preview applies the token to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingTarget {
    #[default]
    Gap,
    Padding,
}

/// Complete state of the fluid typography tool.
///
/// `preset`, `mode`, `show_scale_table` and `spacing_apply_to` are UI fields
/// the builders never read; they are kept so a stored blob round-trips
/// unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClampTypographyState {
    pub viewport: ViewportRange,
    pub typography: SizeRange,
    pub unit: Unit,
    pub preset: Option<PresetName>,
    pub mode: Mode,
    pub show_scale_table: bool,
    pub scale_ratio: ScaleRatio,
    pub custom_ratio: f64,
    pub include_small: bool,
    pub spacing_apply_to: SpacingTarget,
}

impl Default for ClampTypographyState {
    fn default() -> Self {
        Self {
            viewport: ViewportRange::default(),
            typography: SizeRange::default(),
            unit: Unit::Rem,
            preset: Some(PresetName::Body),
            mode: Mode::Typography,
            show_scale_table: false,
            scale_ratio: ScaleRatio::MajorThird,
            custom_ratio: 1.25,
            include_small: true,
            spacing_apply_to: SpacingTarget::Gap,
        }
    }
}

impl ClampTypographyState {
    /// The ratio the scale is generated with.
    pub fn ratio_value(&self) -> f64 {
        self.scale_ratio.resolve(self.custom_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_ratio_serializes_as_number_or_marker() {
        assert_eq!(
            serde_json::to_string(&ScaleRatio::PerfectFourth).unwrap(),
            "1.333"
        );
        assert_eq!(
            serde_json::to_string(&ScaleRatio::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn scale_ratio_rejects_unknown_values() {
        assert!(serde_json::from_str::<ScaleRatio>("1.3").is_err());
        assert!(serde_json::from_str::<ScaleRatio>("\"golden\"").is_err());
        assert_eq!(
            serde_json::from_str::<ScaleRatio>("1.414").unwrap(),
            ScaleRatio::AugmentedFourth
        );
    }

    #[test]
    fn scale_ratio_parses_ids_and_values() {
        assert_eq!("1.2".parse::<ScaleRatio>().unwrap(), ScaleRatio::MinorThird);
        assert_eq!(
            "minor-second".parse::<ScaleRatio>().unwrap(),
            ScaleRatio::MinorSecond
        );
        assert_eq!("custom".parse::<ScaleRatio>().unwrap(), ScaleRatio::Custom);
        assert!("1.7".parse::<ScaleRatio>().is_err());
    }

    #[test]
    fn custom_ratio_is_clamped() {
        assert_eq!(ScaleRatio::Custom.resolve(0.5), 1.05);
        assert_eq!(ScaleRatio::Custom.resolve(10.0), 2.0);
        assert_eq!(ScaleRatio::Custom.resolve(1.3), 1.3);
        assert_eq!(ScaleRatio::Custom.resolve(1.05), 1.05);
        assert_eq!(ScaleRatio::Custom.resolve(2.0), 2.0);
    }

    #[test]
    fn nan_custom_ratio_is_not_clamped() {
        assert!(ScaleRatio::Custom.resolve(f64::NAN).is_nan());
    }

    #[test]
    fn fixed_ratio_ignores_custom_field() {
        assert_eq!(ScaleRatio::MinorSecond.resolve(1.9), 1.125);
    }

    #[test]
    fn state_round_trips_ui_fields() {
        let state = ClampTypographyState {
            preset: None,
            mode: Mode::Spacing,
            show_scale_table: true,
            spacing_apply_to: SpacingTarget::Padding,
            scale_ratio: ScaleRatio::Custom,
            custom_ratio: 1.6,
            ..Default::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"showScaleTable\":true"));
        assert!(json.contains("\"spacingApplyTo\":\"padding\""));
        assert!(json.contains("\"preset\":null"));

        let back: ClampTypographyState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn level_parses_its_tag() {
        assert_eq!("small".parse::<Level>().unwrap(), Level::Small);
        assert!("h7".parse::<Level>().is_err());
    }
}
