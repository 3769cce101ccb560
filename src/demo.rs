//! Ready-made chart models: the fixed showcase model and a seeded random generator.

use rand::{
    Rng,
    distr::{Alphanumeric, Distribution},
    seq::SliceRandom,
};

use crate::{
    foundation::core::Rgba8,
    model::{ChartModel, Decoration, FillMode, Parameter, Serie, SeriesAnimation},
};

/// Step duration of the demo animations, in seconds.
pub const DEFAULT_STEP_DURATION: f64 = 0.4;

const STROKE_WIDTH: f64 = 4.0;
const FILL_ALPHA: f64 = 0.7;

/// Colors the random generator draws from; each serie gets a distinct one.
pub const PALETTE: [Rgba8; 10] = [
    Rgba8::rgb(255, 0, 0),
    Rgba8::rgb(0, 0, 0),
    Rgba8::rgb(0, 0, 255),
    Rgba8::rgb(128, 0, 128),
    Rgba8::rgb(0, 255, 255),
    Rgba8::rgb(255, 255, 0),
    Rgba8::rgb(255, 128, 0),
    Rgba8::rgb(0, 255, 0),
    Rgba8::rgb(255, 0, 255),
    Rgba8::rgb(153, 102, 51),
];

const DECORATIONS: [Decoration; 3] = [
    Decoration::Square(8.0),
    Decoration::Circle(6.0),
    Decoration::Diamond(8.0),
];

/// The three animations offered by the demo, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPick {
    ScaleAll,
    ScaleOneByOne,
    ParameterByParameter,
}

impl AnimationPick {
    pub const ALL: [AnimationPick; 3] = [
        AnimationPick::ScaleAll,
        AnimationPick::ScaleOneByOne,
        AnimationPick::ParameterByParameter,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::ScaleAll => "Scale all",
            Self::ScaleOneByOne => "Scale one by one",
            Self::ParameterByParameter => "Parameter one by one",
        }
    }

    pub fn series_animation(self, step_duration: f64) -> SeriesAnimation {
        match self {
            Self::ScaleAll => SeriesAnimation::ScaleAll(step_duration),
            Self::ScaleOneByOne => SeriesAnimation::ScaleOneByOne(step_duration),
            Self::ParameterByParameter => SeriesAnimation::ParameterByParameter(step_duration),
        }
    }
}

fn serie(
    name: &str,
    values: &[f64],
    stroke: Rgba8,
    fill: Rgba8,
    decoration: Decoration,
) -> Serie {
    Serie {
        name: name.to_owned(),
        percentage_values: values.to_vec(),
        stroke_color: Some(stroke),
        stroke_width: STROKE_WIDTH,
        fill_mode: FillMode::Solid(fill),
        decoration: Some(decoration),
        ..Serie::default()
    }
}

impl ChartModel {
    /// Five RPG-style stats with a blue, a green and a red serie.
    pub fn default_model() -> Self {
        let parameters = ["HP", "MP", "STR", "DF", "MGC"]
            .into_iter()
            .map(Parameter::new)
            .collect();
        let series = vec![
            serie(
                "blue",
                &[0.9, 0.5, 0.6, 0.2, 0.9],
                Rgba8::rgb(0, 0, 255),
                Rgba8::from_unit(0.1, 0.1, 0.7, FILL_ALPHA),
                Decoration::Square(8.0),
            ),
            serie(
                "green",
                &[0.9, 0.1, 0.2, 0.9, 0.3],
                Rgba8::rgb(0, 255, 0),
                Rgba8::from_unit(0.1, 0.7, 0.1, FILL_ALPHA),
                Decoration::Circle(6.0),
            ),
            serie(
                "red",
                &[0.5, 0.9, 0.5, 0.5, 0.6],
                Rgba8::rgb(255, 0, 0),
                Rgba8::from_unit(0.7, 0.1, 0.1, FILL_ALPHA),
                Decoration::Diamond(8.0),
            ),
        ];
        Self { parameters, series }
    }

    /// Random model: 3 to 12 parameters and 1 to 10 series with distinct palette colors.
    ///
    /// Output depends only on `rng`; seed it for reproducible charts.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let parameter_count = rng.random_range(3..=12usize);
        let parameters = (0..parameter_count)
            .map(|_| Parameter::new(random_name(rng)))
            .collect();

        let mut colors = PALETTE.to_vec();
        colors.shuffle(rng);
        let serie_count = rng.random_range(1..=colors.len());

        let series = (0..serie_count)
            .map_while(|i| {
                let color = colors.pop()?;
                let values: Vec<f64> = (0..parameter_count)
                    .map(|_| f64::from(rng.random_range(0..100u32)) / 100.0)
                    .collect();
                let decoration = DECORATIONS[rng.random_range(0..DECORATIONS.len())];
                Some(serie(
                    &format!("serie {}", i + 1),
                    &values,
                    color,
                    color.with_alpha(FILL_ALPHA),
                    decoration,
                ))
            })
            .collect();

        Self { parameters, series }
    }
}

fn random_name<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(1..=8usize);
    (0..len)
        .map(|_| char::from(Alphanumeric.sample(rng)))
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/demo.rs"]
mod tests;
