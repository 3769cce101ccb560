use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Point, Rgba8},
    error::{RadarError, RadarResult},
};

/// One spoke of the chart. Its index in the parameter list defines its angular slot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// Display name.
    pub name: String,
}

impl Parameter {
    /// Create a parameter with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// How the interior of a serie polygon is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Outline only.
    #[default]
    None,
    /// Solid color fill.
    Solid(Rgba8),
}

/// Marker glyph drawn at every vertex of a serie.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    /// Axis-aligned square; payload is the side length.
    Square(f64),
    /// Circle; payload is the radius.
    Circle(f64),
    /// Square rotated by 45 degrees; payload is the diagonal.
    Diamond(f64),
}

impl Decoration {
    /// Glyph size payload.
    pub fn size(self) -> f64 {
        match self {
            Self::Square(s) | Self::Circle(s) | Self::Diamond(s) => s,
        }
    }
}

/// One dataset plotted as a closed polygon, one percentage value per parameter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Serie {
    #[serde(default)]
    pub name: String,
    /// Values in `[0, 1]`, aligned by parameter index. Missing entries count as 0.
    #[serde(default)]
    pub percentage_values: Vec<f64>,
    #[serde(default)]
    pub stroke_color: Option<Rgba8>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub fill_mode: FillMode,
    #[serde(default)]
    pub decoration: Option<Decoration>,

    /// Vertices derived by the last successful path generation.
    #[serde(skip)]
    pub vertices: Vec<Point>,
}

fn default_stroke_width() -> f64 {
    1.0
}

impl Default for Serie {
    fn default() -> Self {
        Self {
            name: String::new(),
            percentage_values: Vec::new(),
            stroke_color: None,
            stroke_width: default_stroke_width(),
            fill_mode: FillMode::None,
            decoration: None,
            vertices: Vec::new(),
        }
    }
}

impl Serie {
    /// Percentage value for `index`, or 0 when the serie has fewer values than parameters.
    pub fn value_at(&self, index: usize) -> f64 {
        self.percentage_values.get(index).copied().unwrap_or(0.0)
    }
}

/// Animation style used to reveal the series. Durations are seconds per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesAnimation {
    /// Static, fully drawn series.
    #[default]
    None,
    /// Every serie grows from the center at the same time.
    ScaleAll(f64),
    /// Series grow from the center one after another, in chain order.
    ScaleOneByOne(f64),
    /// Vertices of one serie appear one by one before the next serie starts.
    ParameterByParameter(f64),
}

impl SeriesAnimation {
    /// Per-step duration in seconds, `None` for [`SeriesAnimation::None`].
    pub fn step_duration(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::ScaleAll(d) | Self::ScaleOneByOne(d) | Self::ParameterByParameter(d) => Some(d),
        }
    }
}

/// Parameters plus series, the data a host hands to the chart.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartModel {
    pub parameters: Vec<Parameter>,
    pub series: Vec<Serie>,
}

impl ChartModel {
    /// Parse a model from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> RadarResult<Self> {
        let model: Self = serde_json::from_str(s)
            .map_err(|e| RadarError::serde(format!("parse chart model JSON: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    /// Read a model from a JSON file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> RadarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RadarError::validation(format!("open chart model JSON '{}': {e}", path.display()))
        })?;
        let model: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            RadarError::serde(format!(
                "parse chart model JSON '{}': {e}",
                path.display()
            ))
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Pretty JSON representation.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::serde(format!("serialize chart model: {e}")))
    }

    /// Reject data that cannot be drawn meaningfully.
    ///
    /// Out-of-range percentages are accepted; only non-finite numbers are refused.
    pub fn validate(&self) -> RadarResult<()> {
        for (i, serie) in self.series.iter().enumerate() {
            if let Some(v) = serie.percentage_values.iter().find(|v| !v.is_finite()) {
                return Err(RadarError::validation(format!(
                    "serie {i} ('{}') has non-finite percentage value {v}",
                    serie.name
                )));
            }
            if !serie.stroke_width.is_finite() || serie.stroke_width < 0.0 {
                return Err(RadarError::validation(format!(
                    "serie {i} ('{}') stroke_width must be finite and >= 0",
                    serie.name
                )));
            }
            if let Some(deco) = serie.decoration {
                let size = deco.size();
                if !size.is_finite() || size <= 0.0 {
                    return Err(RadarError::validation(format!(
                        "serie {i} ('{}') decoration size must be finite and > 0",
                        serie.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
