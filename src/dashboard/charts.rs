//! Chart generation for the category breakdown.
//!
//! The chart is generated as JSON configuration for the ECharts library. The
//! page renders a container for it and an initialization script that hands
//! segment clicks back to the host as segment indices.

use charming::{
    Chart,
    component::Legend,
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{ChartType, dashboard::view::ChartModel};

/// The HTML element ID of the category chart.
pub const CHART_ELEMENT_ID: &str = "expense-chart";

/// The category chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

impl ChartOptions {
    /// Build the ECharts configuration for `model`.
    pub fn new(model: &ChartModel, chart_type: ChartType, currency_symbol: &str) -> Self {
        Self {
            id: CHART_ELEMENT_ID,
            options: expense_chart(model, chart_type, currency_symbol).to_string(),
        }
    }
}

/// Create a pie (or doughnut) chart with one segment per category.
///
/// Segments keep the order of `model`, so the index reported by a click is
/// the position in `model.labels`.
pub fn expense_chart(model: &ChartModel, chart_type: ChartType, currency_symbol: &str) -> Chart {
    let radius = match chart_type {
        ChartType::Pie => vec!["0%", "70%"],
        ChartType::Doughnut => vec!["40%", "70%"],
    };

    let data: Vec<(f64, &str)> = model
        .values
        .iter()
        .copied()
        .zip(model.labels.iter().map(String::as_str))
        .collect();

    let tooltip_format = format!("{{b}}: {currency_symbol}{{c}}");

    Chart::new()
        .color(
            model
                .colors
                .iter()
                .map(|colour| Color::from(colour.as_str()))
                .collect(),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter(tooltip_format.as_str()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(Pie::new().name("Expenses").radius(radius).data(data))
}

/// Renders the HTML container for the chart.
pub fn chart_view(chart: &ChartOptions) -> Markup {
    html!(
        section id="chart" class="w-full mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[380px] rounded"
            {}
        }
    )
}

/// Generates the JavaScript that initializes the chart.
///
/// `on_segment_click` is the name of a global JavaScript function that is
/// called with the index of the clicked segment.
pub fn chart_script(chart: &ChartOptions, on_segment_click: &str) -> Markup {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chartDom = document.getElementById("{id}");
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            chart.on('click', (params) => {on_segment_click}(params.dataIndex));
            chart.on('mouseover', () => {{ chartDom.style.cursor = 'pointer'; }});
            chart.on('mouseout', () => {{ chartDom.style.cursor = 'default'; }});
            window.addEventListener('resize', chart.resize);
        }});"#,
        id = chart.id,
        options = chart.options,
    );

    html!(script { (PreEscaped(script)) })
}
