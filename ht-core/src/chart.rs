//! Chart specifications handed to the JS charting collaborator.
//!
//! A [`ChartSpec`] is a complete, self-contained description of one chart:
//! axes, series (already converted to the collaborator's epoch unit), legend
//! and interaction modifiers. The collaborator builds a fresh surface from it
//! on every render; nothing is updated incrementally.

use crate::climate::ClimateData;
use crate::error::Result;
use crate::forecast::ForecastPayload;
use crate::timestamp::{to_epoch, EpochUnit};
use serde::Serialize;

const SLATE_LABEL: &str = "#64748b";
const GRID: &str = "#e2e8f0";
const SKY: &str = "#0ea5e9";
const ROSE: &str = "#f43f5e";

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Forecast,
    Climate,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum AxisAlignment {
    Left,
    Right,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStyle {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dash_array: Option<Vec<f64>>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Date axes read x-values as epoch timestamps in `time_unit`
    pub is_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AxisAlignment>,
    pub label_color: &'static str,
    pub grid: GridStyle,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
    Column,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub name: &'static str,
    pub kind: SeriesKind,
    pub y_axis_id: &'static str,
    pub stroke: &'static str,
    pub stroke_thickness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dash_array: Option<Vec<f64>>,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    /// Series visibility can be toggled from the legend
    pub show_checkboxes: bool,
    pub show_series_markers: bool,
    pub placement: &'static str,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub zoom_pan: bool,
    pub mouse_wheel_zoom: bool,
    pub rollover_tooltip: bool,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub time_unit: &'static str,
    pub x_axis: AxisSpec,
    pub y_axes: Vec<AxisSpec>,
    pub series: Vec<SeriesSpec>,
    pub legend: LegendSpec,
    pub interaction: Interaction,
}

impl ChartSpec {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.x_values.len()).sum()
    }
}

/// Builds chart specs for the forecast and climate regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderer {
    time_unit: EpochUnit,
}

impl ChartRenderer {
    pub fn new(time_unit: EpochUnit) -> Self {
        Self { time_unit }
    }

    fn unit_name(&self) -> &'static str {
        match self.time_unit {
            EpochUnit::Seconds => "s",
            EpochUnit::Milliseconds => "ms",
        }
    }

    fn date_axis(&self, id: &'static str) -> AxisSpec {
        AxisSpec {
            id,
            title: "Date",
            is_date: true,
            alignment: None,
            label_color: SLATE_LABEL,
            grid: GridStyle {
                color: GRID,
                stroke_dash_array: None,
            },
        }
    }

    /// Historical (solid) and forecast (dashed) case lines on one value axis.
    pub fn forecast_chart(&self, payload: &ForecastPayload) -> Result<ChartSpec> {
        let historical_x = to_epoch(&payload.historical_dates, self.time_unit)?;
        let forecast_x = to_epoch(&payload.forecast_dates, self.time_unit)?;

        Ok(ChartSpec {
            kind: ChartKind::Forecast,
            time_unit: self.unit_name(),
            x_axis: self.date_axis("dateAxis"),
            y_axes: vec![AxisSpec {
                id: "casesAxis",
                title: "Predicted Cases",
                is_date: false,
                alignment: Some(AxisAlignment::Left),
                label_color: SLATE_LABEL,
                grid: GridStyle {
                    color: GRID,
                    stroke_dash_array: None,
                },
            }],
            series: vec![
                SeriesSpec {
                    name: "Historical Cases",
                    kind: SeriesKind::Line,
                    y_axis_id: "casesAxis",
                    stroke: SKY,
                    stroke_thickness: 3.0,
                    fill: None,
                    stroke_dash_array: None,
                    x_values: historical_x,
                    y_values: payload.historical_cases.clone(),
                },
                SeriesSpec {
                    name: "Forecast",
                    kind: SeriesKind::Line,
                    y_axis_id: "casesAxis",
                    stroke: ROSE,
                    stroke_thickness: 3.0,
                    fill: None,
                    stroke_dash_array: Some(vec![5.0, 5.0]),
                    x_values: forecast_x,
                    y_values: payload.predicted_cases.clone(),
                },
            ],
            legend: LegendSpec {
                show_checkboxes: true,
                show_series_markers: true,
                placement: "TopLeft",
            },
            interaction: Interaction {
                zoom_pan: true,
                mouse_wheel_zoom: true,
                rollover_tooltip: true,
            },
        })
    }

    /// Temperature line on the left axis, rainfall columns on the right.
    pub fn climate_chart(&self, data: &ClimateData) -> Result<ChartSpec> {
        let x = to_epoch(&data.dates, self.time_unit)?;

        Ok(ChartSpec {
            kind: ChartKind::Climate,
            time_unit: self.unit_name(),
            x_axis: self.date_axis("dateAxis"),
            y_axes: vec![
                AxisSpec {
                    id: "tempAxis",
                    title: "Temp (°C)",
                    is_date: false,
                    alignment: Some(AxisAlignment::Left),
                    label_color: ROSE,
                    grid: GridStyle {
                        color: GRID,
                        stroke_dash_array: None,
                    },
                },
                AxisSpec {
                    id: "rainAxis",
                    title: "Rain (mm)",
                    is_date: false,
                    alignment: Some(AxisAlignment::Right),
                    label_color: SKY,
                    grid: GridStyle {
                        color: GRID,
                        stroke_dash_array: Some(vec![2.0, 2.0]),
                    },
                },
            ],
            series: vec![
                SeriesSpec {
                    name: "Temperature",
                    kind: SeriesKind::Line,
                    y_axis_id: "tempAxis",
                    stroke: ROSE,
                    stroke_thickness: 2.0,
                    fill: None,
                    stroke_dash_array: None,
                    x_values: x.clone(),
                    y_values: data.temperature.clone(),
                },
                SeriesSpec {
                    name: "Rainfall",
                    kind: SeriesKind::Column,
                    y_axis_id: "rainAxis",
                    stroke: SKY,
                    stroke_thickness: 1.0,
                    fill: Some("rgba(14, 165, 233, 0.5)"),
                    stroke_dash_array: None,
                    x_values: x,
                    y_values: data.rainfall.clone(),
                },
            ],
            legend: LegendSpec {
                show_checkboxes: false,
                show_series_markers: true,
                placement: "TopLeft",
            },
            interaction: Interaction::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::fixtures::payload;

    #[test]
    fn forecast_chart_uses_seconds_for_the_collaborator() {
        let p = payload("Dengue", &["2024-01-01", "2024-01-02"], &[5.0, 7.0]);
        let spec = ChartRenderer::default().forecast_chart(&p).unwrap();
        assert_eq!(spec.time_unit, "s");
        let forecast = &spec.series[1];
        assert_eq!(forecast.x_values, vec![1_704_067_200.0, 1_704_153_600.0]);
        assert_eq!(forecast.y_values, vec![5.0, 7.0]);
        assert_eq!(forecast.stroke_dash_array, Some(vec![5.0, 5.0]));
        assert!(spec.series[0].stroke_dash_array.is_none());
        assert_ne!(spec.series[0].stroke, forecast.stroke);
        assert!(spec.legend.show_checkboxes);
        assert!(spec.interaction.zoom_pan && spec.interaction.rollover_tooltip);
        assert_eq!(spec.y_axes[0].title, "Predicted Cases");
    }

    #[test]
    fn climate_chart_has_two_value_axes_and_fixed_legend() {
        let data = ClimateData {
            dates: vec!["2024-01-01".to_string()],
            temperature: vec![27.0],
            rainfall: vec![3.5],
            humidity: None,
        };
        let spec = ChartRenderer::new(EpochUnit::Milliseconds)
            .climate_chart(&data)
            .unwrap();
        assert_eq!(spec.time_unit, "ms");
        assert_eq!(spec.y_axes.len(), 2);
        assert_eq!(spec.y_axes[0].alignment, Some(AxisAlignment::Left));
        assert_eq!(spec.y_axes[1].alignment, Some(AxisAlignment::Right));
        assert!(spec.y_axes[1].grid.stroke_dash_array.is_some());
        assert_eq!(spec.series[0].kind, SeriesKind::Line);
        assert_eq!(spec.series[1].kind, SeriesKind::Column);
        assert_eq!(spec.series[1].y_axis_id, "rainAxis");
        assert!(!spec.legend.show_checkboxes);
        assert!(spec.legend.show_series_markers);
        assert_eq!(spec.point_count(), 2);
    }

    #[test]
    fn bad_date_fails_the_whole_chart() {
        let p = payload("Dengue", &["not-a-date"], &[5.0]);
        assert!(ChartRenderer::default().forecast_chart(&p).is_err());
    }

    #[test]
    fn spec_serializes_in_camel_case() {
        let p = payload("Dengue", &["2024-01-01"], &[5.0]);
        let json = ChartRenderer::default().forecast_chart(&p).unwrap().to_json().unwrap();
        assert!(json.contains("\"yAxes\""));
        assert!(json.contains("\"strokeDashArray\":[5.0,5.0]"));
        assert!(json.contains("\"kind\":\"forecast\""));
    }
}
