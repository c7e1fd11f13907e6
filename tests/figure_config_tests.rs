use pixplot::api::{AxisStyle, FIGURE_CONFIG_JSON_SCHEMA_V1};
use pixplot::core::{AutoScaleTuning, TickPolicy};
use pixplot::render::Color;
use pixplot::{Figure, FigureConfig, PlotError};

#[test]
fn json_contract_round_trip_preserves_config() {
    let config = FigureConfig::new(640, 480)
        .with_margin(32)
        .with_background(Color::rgb(250, 250, 240))
        .with_axis_style(
            AxisStyle::default()
                .with_tick_policy(TickPolicy::Count { ticks: 4 })
                .with_grid(false),
        )
        .with_legend_capacity(3);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {FIGURE_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = FigureConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_object_fills_missing_fields_with_defaults() {
    let parsed =
        FigureConfig::from_json_str(r#"{"width": 320, "autoscale": {"margin_ratio": 0.1}}"#)
            .expect("parse");

    assert_eq!(parsed.width, 320);
    assert_eq!(parsed.height, 600);
    assert_eq!(parsed.background, Color::WHITE);
    assert_eq!(parsed.axis, AxisStyle::default());
    assert_eq!(
        parsed.autoscale,
        AutoScaleTuning {
            margin_ratio: 0.1,
            fallback_margin: 1.0,
        }
    );
}

#[test]
fn tick_policy_is_tagged_in_json() {
    let parsed = FigureConfig::from_json_str(
        r#"{"axis": {"tick_policy": {"kind": "fixed_stride", "step": 2.0}}}"#,
    )
    .expect("parse");

    assert_eq!(parsed.axis.tick_policy, TickPolicy::FixedStride { step: 2.0 });
    assert!(parsed.axis.show_grid);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let err = FigureConfig::from_json_str(r#"{"schema_version": 2, "config": {}}"#)
        .expect_err("version 2 must fail");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = FigureConfig::from_json_str("{ width: 3").expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn zero_sized_figures_are_rejected() {
    let err = FigureConfig::from_json_str(r#"{"width": 0}"#).expect_err("must fail");
    assert!(matches!(err, PlotError::InvalidConfig(_)));

    assert!(Figure::new(FigureConfig::new(10, 0)).is_err());
}

#[test]
fn non_positive_fallback_margin_is_rejected() {
    let config = FigureConfig::default().with_autoscale_tuning(AutoScaleTuning {
        margin_ratio: 0.05,
        fallback_margin: 0.0,
    });
    assert!(matches!(config.validate(), Err(PlotError::InvalidConfig(_))));
}

#[test]
fn figure_uses_configured_background_and_margin() {
    let config = FigureConfig::new(100, 80)
        .with_margin(10)
        .with_background(Color::BLACK);
    let figure = Figure::new(config).expect("figure");

    assert_eq!(figure.canvas().pixel(0, 0), Some(Color::BLACK));
    let area = figure.area();
    assert_eq!((area.x0, area.y0, area.x1, area.y1), (10, 10, 89, 69));
}

#[test]
fn unbounded_tick_counts_are_rejected() {
    for ticks in ["0", "1001", "18446744073709551615"] {
        let json = format!(r#"{{"axis": {{"tick_policy": {{"kind": "count", "ticks": {ticks}}}}}}}"#);
        let err = FigureConfig::from_json_str(&json).expect_err("must fail");
        assert!(matches!(err, PlotError::InvalidConfig(_)), "ticks={ticks}");
    }

    let accepted =
        FigureConfig::from_json_str(r#"{"axis": {"tick_policy": {"kind": "count", "ticks": 1000}}}"#)
            .expect("parse");
    assert_eq!(accepted.axis.tick_policy, TickPolicy::Count { ticks: 1000 });
}

#[test]
fn non_positive_tick_step_is_rejected() {
    let config = FigureConfig::default().with_axis_style(
        AxisStyle::default().with_tick_policy(TickPolicy::FixedStride { step: -0.5 }),
    );
    assert!(matches!(config.validate(), Err(PlotError::InvalidConfig(_))));
}
