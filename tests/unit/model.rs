use super::*;

fn one_serie_model() -> ChartModel {
    ChartModel {
        parameters: ["HP", "MP", "STR"].into_iter().map(Parameter::new).collect(),
        series: vec![Serie {
            name: "blue".to_owned(),
            percentage_values: vec![0.9, 0.5, 0.6],
            stroke_color: Some(Rgba8::rgb(0, 0, 255)),
            stroke_width: 4.0,
            fill_mode: FillMode::Solid(Rgba8::rgba(25, 25, 179, 179)),
            decoration: Some(Decoration::Square(8.0)),
            vertices: vec![Point::new(1.0, 1.0)],
        }],
    }
}

#[test]
fn json_roundtrip_skips_vertex_cache() {
    let model = one_serie_model();
    let s = model.to_json_pretty().unwrap();
    assert!(!s.contains("vertices"));
    let de = ChartModel::from_json_str(&s).unwrap();
    assert_eq!(de.parameters, model.parameters);
    assert_eq!(de.series[0].percentage_values, vec![0.9, 0.5, 0.6]);
    assert_eq!(de.series[0].decoration, Some(Decoration::Square(8.0)));
    assert!(de.series[0].vertices.is_empty());
}

#[test]
fn serie_fields_default_when_absent() {
    let de = ChartModel::from_json_str(r#"{"parameters":[{"name":"a"}],"series":[{}]}"#).unwrap();
    let serie = &de.series[0];
    assert_eq!(serie.stroke_width, 1.0);
    assert_eq!(serie.fill_mode, FillMode::None);
    assert!(serie.decoration.is_none());
    assert!(serie.stroke_color.is_none());
}

#[test]
fn variants_use_snake_case_tags() {
    let json = serde_json::to_string(&SeriesAnimation::ParameterByParameter(0.4)).unwrap();
    assert_eq!(json, r#"{"parameter_by_parameter":0.4}"#);
    let deco: Decoration = serde_json::from_str(r#"{"diamond":8.0}"#).unwrap();
    assert_eq!(deco, Decoration::Diamond(8.0));
}

#[test]
fn missing_values_read_as_zero() {
    let serie = Serie {
        percentage_values: vec![0.3],
        ..Serie::default()
    };
    assert_eq!(serie.value_at(0), 0.3);
    assert_eq!(serie.value_at(4), 0.0);
}

#[test]
fn validate_accepts_out_of_range_but_rejects_bad_numbers() {
    let mut model = one_serie_model();
    model.series[0].percentage_values = vec![1.5, -0.2, 0.0];
    assert!(model.validate().is_ok());

    model.series[0].stroke_width = -1.0;
    assert!(model.validate().is_err());

    let mut model = one_serie_model();
    model.series[0].decoration = Some(Decoration::Circle(0.0));
    assert!(model.validate().is_err());
}

#[test]
fn invalid_json_maps_to_serde_error() {
    let err = ChartModel::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn step_duration_by_variant() {
    assert_eq!(SeriesAnimation::None.step_duration(), None);
    assert_eq!(SeriesAnimation::ScaleAll(0.4).step_duration(), Some(0.4));
}
