//! ApexCharts widgets.
//!
//! A chart renders as a `<div>` container followed by a `<script>` that
//! instantiates the chart on it. Rendering a chart registers
//! [`Dependency::ApexChartsJs`] on whatever registry is at hand; without one,
//! the markup is the same and the page author must include the library.
//!
//! ```ignore
//! let mut chart = LineChart::new().id("latency").name("p99");
//! chart.add(12.0);
//! chart.add(17.5);
//! page.add(chart.node()?)?;
//! ```

use crate::error::ChartError;
use chrono::{DateTime, Utc};
use htmlgen_core::{Dependency, DependencyRegistry, Element, Node, RenderContext, TagKind, Widget};
use htmlgen_tags::builders::{Div, Script};
use serde_json::{Value, json};

pub const DEFAULT_ID: &str = "chart";
pub const DEFAULT_SERIES_NAME: &str = "data";
pub const DEFAULT_HEIGHT: &str = "350";
pub const DEFAULT_COLOR: &str = "#3498db";

/// Settings shared by every chart type.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub id: String,
    pub name: String,
    pub height: String,
    pub color: String,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            name: DEFAULT_SERIES_NAME.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl ChartFrame {
    /// The height as a JSON number when it is numeric, else as given.
    fn height_value(&self) -> Value {
        if let Ok(n) = self.height.parse::<u64>() {
            return Value::from(n);
        }
        self.height
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(self.height.clone()))
    }

    fn chart_block(&self, chart_type: &str) -> Value {
        json!({
            "type": chart_type,
            "height": self.height_value(),
            "toolbar": { "show": false }
        })
    }
}

/// Common behavior of the chart widgets.
pub trait Chart {
    /// Name used in error messages.
    const KIND: &'static str;

    fn frame(&self) -> &ChartFrame;

    fn frame_mut(&mut self) -> &mut ChartFrame;

    /// Number of data points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ApexCharts options object.
    fn options(&self) -> Value;

    /// Builds the chart's markup as a node.
    ///
    /// # Errors
    ///
    /// [`ChartError::NoData`] when no point has been added.
    fn node(&self) -> Result<ChartNode, ChartError> {
        if self.is_empty() {
            return Err(ChartError::NoData { chart: Self::KIND });
        }
        let frame = self.frame();
        let options = serde_json::to_string_pretty(&self.options())?;
        let var = js_identifier(&frame.id);
        let script = format!(
            "var options_{var} = {options};\n\
             var chart_{var} = new ApexCharts(document.querySelector(\"#{id}\"), options_{var});\n\
             chart_{var}.render();",
            id = frame.id,
        );
        log::debug!("Built {} '{}' with {} points", Self::KIND, frame.id, self.len());
        ChartNode::new(&frame.id, script)
    }

    /// Renders the chart, registering its script dependency when a
    /// registry is supplied.
    fn render(&self, registry: Option<&mut DependencyRegistry>) -> Result<String, ChartError> {
        let node = self.node()?;
        let mut ctx = match registry {
            Some(registry) => RenderContext::new(registry),
            None => RenderContext::detached(),
        };
        let mut out = String::new();
        node.write_html(&mut out, &mut ctx);
        Ok(out)
    }

    // --- Frame setters ---

    fn id(mut self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.frame_mut().id = id.into();
        self
    }

    /// Sets the series name.
    fn name(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.frame_mut().name = name.into();
        self
    }

    fn height(mut self, height: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.frame_mut().height = height.into();
        self
    }

    fn color(mut self, color: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.frame_mut().color = color.into();
        self
    }
}

/// Chart ids may contain characters that are not valid in a JS identifier.
fn js_identifier(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// The rendered form of a chart: container and script.
///
/// Writes no tag of its own. Requires the charting library from the page it
/// is rendered into.
#[derive(Debug, Clone)]
pub struct ChartNode {
    element: Element,
}

impl ChartNode {
    fn new(id: &str, script: String) -> Result<Self, ChartError> {
        let mut element = Element::new(TagKind::Undefined);
        element
            .add(Div::new().id(id))?
            .add(Script::new().code(script))?;
        Ok(Self { element })
    }
}

impl Node for ChartNode {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn write_html(&self, out: &mut String, ctx: &mut RenderContext<'_>) {
        ctx.require(Dependency::ApexChartsJs);
        self.element.write_tree(out, ctx);
    }
}

/// A line over evenly spaced values.
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    frame: ChartFrame,
    values: Vec<f64>,
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Chart for LineChart {
    const KIND: &'static str = "line_chart";

    fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut ChartFrame {
        &mut self.frame
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn options(&self) -> Value {
        json!({
            "chart": self.frame.chart_block("line"),
            "series": [{ "name": self.frame.name, "data": self.values }],
            "colors": [self.frame.color],
            "stroke": { "curve": "smooth", "width": 2 },
            "grid": { "show": true },
            "xaxis": { "labels": { "show": false } },
            "yaxis": { "labels": { "show": true } }
        })
    }
}

/// A line over timestamped values.
#[derive(Debug, Clone, Default)]
pub struct TimeseriesLineChart {
    frame: ChartFrame,
    points: Vec<(DateTime<Utc>, f64)>,
}

impl TimeseriesLineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, timestamp: DateTime<Utc>, value: f64) {
        self.points.push((timestamp, value));
    }

    pub fn points(&self) -> &[(DateTime<Utc>, f64)] {
        &self.points
    }
}

impl Chart for TimeseriesLineChart {
    const KIND: &'static str = "timeseries_line_chart";

    fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut ChartFrame {
        &mut self.frame
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn options(&self) -> Value {
        let data: Vec<Value> = self
            .points
            .iter()
            .map(|(ts, y)| json!({ "x": ts.timestamp_millis(), "y": y }))
            .collect();
        json!({
            "chart": self.frame.chart_block("line"),
            "series": [{ "name": self.frame.name, "data": data }],
            "colors": [self.frame.color],
            "stroke": { "curve": "smooth", "width": 2 },
            "grid": { "show": true },
            "xaxis": { "type": "datetime", "labels": { "datetimeUTC": false } },
            "yaxis": { "labels": { "show": true } },
            "tooltip": { "x": { "format": "yyyy-MM-dd HH:mm:ss" } }
        })
    }
}

/// Vertical bars, one per category.
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    frame: ChartFrame,
    categories: Vec<String>,
    values: Vec<f64>,
}

impl BarChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: impl Into<String>, value: f64) {
        self.categories.push(category.into());
        self.values.push(value);
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Chart for BarChart {
    const KIND: &'static str = "bar_chart";

    fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut ChartFrame {
        &mut self.frame
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn options(&self) -> Value {
        json!({
            "chart": self.frame.chart_block("bar"),
            "series": [{ "name": self.frame.name, "data": self.values }],
            "colors": [self.frame.color],
            "plotOptions": { "bar": { "borderRadius": 4, "horizontal": false } },
            "grid": { "show": true },
            "xaxis": { "categories": self.categories, "labels": { "rotate": -45 } },
            "yaxis": { "labels": { "show": true } }
        })
    }
}
