use crate::common::*;

use crate::enums::{baseline::*, chart_kind::*, color_rule::*, orientation::*, value_format::*};

use crate::model::benchmark::benchmark_data::*;

use crate::model::chart::{
    bar_panel::*, chart_spec::*, legend_entry::*, line_panel::*, scaling_curve::*, series::*,
};

use crate::traits::service_traits::chart_job_service::*;

use crate::utils_modules::format_utils::*;

pub const ORDERBOOK_CHART_FILE: &str = "orderbook_performance.png";
pub const INDICATORS_CHART_FILE: &str = "indicators_performance.png";
pub const LANGUAGE_CHART_FILE: &str = "language_comparison.png";
pub const MEMORY_CHART_FILE: &str = "memory_usage.png";

#[doc = "The four documentation charts built from the compiled-in benchmark results"]
#[derive(Debug, Clone, Default, new)]
pub struct BenchmarkChartJobServiceImpl;

impl BenchmarkChartJobServiceImpl {
    #[doc = "Order book operation latency, write operations and read operations in two colors"]
    fn orderbook_latency_job(&self) -> anyhow::Result<ChartSpec> {
        let panel: BarPanel = BarPanel::new(
            "Order Book Operations - Ultra-Low Latency Performance".to_string(),
            Series::from_table(&ORDERBOOK_OPERATIONS, &ORDERBOOK_LATENCY_NS)?,
            Orientation::Vertical,
            ColorRule::Split {
                boundary: ORDERBOOK_WRITE_OPERATIONS,
                head: WRITE_OPERATION_COLOR,
                tail: READ_OPERATION_COLOR,
            },
            ValueFormat::Nanoseconds,
            "Latency (nanoseconds)".to_string(),
        )
        .with_legend(vec![
            LegendEntry::new("Write Operations".to_string(), WRITE_OPERATION_COLOR),
            LegendEntry::new("Read Operations".to_string(), READ_OPERATION_COLOR),
        ]);

        ChartSpec::new(
            ChartKind::BarVertical,
            vec![Panel::Bars(panel)],
            (12.0, 6.0),
            ORDERBOOK_CHART_FILE,
        )
    }

    #[doc = "Indicator latency and throughput side by side, sharing order and colors"]
    fn indicators_job(&self) -> anyhow::Result<ChartSpec> {
        let colors: ColorRule = ColorRule::Viridis {
            start: 0.2,
            end: 0.8,
        };

        let latency: BarPanel = BarPanel::new(
            "Technical Indicators - Update Latency".to_string(),
            Series::from_table(&INDICATORS, &INDICATOR_UPDATE_NS)?,
            Orientation::Vertical,
            colors.clone(),
            ValueFormat::Nanoseconds,
            "Update Time (nanoseconds)".to_string(),
        );

        let throughput: BarPanel = BarPanel::new(
            "Technical Indicators - Throughput".to_string(),
            Series::from_table(&INDICATORS, &INDICATOR_THROUGHPUT_OPS)?,
            Orientation::Vertical,
            colors,
            ValueFormat::MillionsPerSecond,
            "Throughput (Million ops/sec)".to_string(),
        );

        ChartSpec::new(
            ChartKind::DualPanel,
            vec![Panel::Bars(latency), Panel::Bars(throughput)],
            (14.0, 5.0),
            INDICATORS_CHART_FILE,
        )
    }

    #[doc = "Throughput per language as horizontal bars, with slowdown against Rust"]
    fn language_comparison_job(&self) -> anyhow::Result<ChartSpec> {
        let panel: BarPanel = BarPanel::new(
            "Order Book Throughput: Rust vs Other Languages".to_string(),
            Series::from_table(&LANGUAGES, &LANGUAGE_THROUGHPUT_MOPS)?,
            Orientation::Horizontal,
            ColorRule::Palette(LANGUAGE_COLORS.to_vec()),
            ValueFormat::MillionOpsPerSecond,
            "Throughput (Million operations/second)".to_string(),
        )
        .with_label_offset(0.5)
        .with_comparison(Baseline::Label(LANGUAGE_BASELINE.to_string()));

        ChartSpec::new(
            ChartKind::BarHorizontal,
            vec![Panel::Bars(panel)],
            (10.0, 6.0),
            LANGUAGE_CHART_FILE,
        )
    }

    #[doc = "Memory footprint against book depth on log-log axes"]
    fn memory_scaling_job(&self) -> anyhow::Result<ChartSpec> {
        let panel: LinePanel = LinePanel::new(
            "Memory Efficiency - Order Book Scaling".to_string(),
            ScalingCurve::from_raw(&BOOK_LEVELS, &BOOK_MEMORY_KB, BINARY_UNIT_RATIO)?,
            MEMORY_LINE_COLOR,
            ValueFormat::Megabytes,
            "Number of Order Book Levels".to_string(),
            "Memory Usage (MB)".to_string(),
            "Memory Usage".to_string(),
        );

        ChartSpec::new(
            ChartKind::LogLogLine,
            vec![Panel::Line(panel)],
            (10.0, 6.0),
            MEMORY_CHART_FILE,
        )
    }
}

impl ChartJobService for BenchmarkChartJobServiceImpl {
    fn chart_jobs(&self) -> anyhow::Result<Vec<ChartSpec>> {
        Ok(vec![
            self.orderbook_latency_job()?,
            self.indicators_job()?,
            self.language_comparison_job()?,
            self.memory_scaling_job()?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::chart::annotation::*;
    use crate::model::chart::chart_color::*;
    use crate::utils_modules::annotation_utils::*;

    fn jobs() -> Vec<ChartSpec> {
        BenchmarkChartJobServiceImpl::new().chart_jobs().unwrap()
    }

    fn bars(spec: &ChartSpec, idx: usize) -> &BarPanel {
        match &spec.panels()[idx] {
            Panel::Bars(bars) => bars,
            Panel::Line(_) => panic!("expected a bar panel"),
        }
    }

    #[test]
    fn four_jobs_in_fixed_order() {
        let specs: Vec<ChartSpec> = jobs();

        let files: Vec<&str> = specs.iter().map(|spec| spec.file_name().as_str()).collect();
        assert_eq!(
            files,
            vec![
                ORDERBOOK_CHART_FILE,
                INDICATORS_CHART_FILE,
                LANGUAGE_CHART_FILE,
                MEMORY_CHART_FILE
            ]
        );

        let kinds: Vec<ChartKind> = specs.iter().map(|spec| *spec.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::BarVertical,
                ChartKind::DualPanel,
                ChartKind::BarHorizontal,
                ChartKind::LogLogLine
            ]
        );
    }

    #[test]
    fn orderbook_colors_split_writes_from_reads() {
        let specs: Vec<ChartSpec> = jobs();
        let panel: &BarPanel = bars(&specs[0], 0);

        let colors: Vec<ChartColor> = panel.color_rule().colors(panel.series().len());
        assert!(colors[..4].iter().all(|c| *c == WRITE_OPERATION_COLOR));
        assert!(colors[4..].iter().all(|c| *c == READ_OPERATION_COLOR));

        let labels: Vec<Annotation> = bar_value_annotations(panel);
        assert_eq!(labels[0].text(), "850ns");
        assert_eq!(labels[7].text(), "35ns");
    }

    #[test]
    fn indicator_panels_line_up_element_for_element() {
        let specs: Vec<ChartSpec> = jobs();
        let latency: &BarPanel = bars(&specs[1], 0);
        let throughput: &BarPanel = bars(&specs[1], 1);

        assert_eq!(latency.series().labels(), throughput.series().labels());
        assert_eq!(latency.color_rule(), throughput.color_rule());

        let texts: Vec<String> = bar_value_annotations(throughput)
            .into_iter()
            .map(|a| a.text().clone())
            .collect();
        assert_eq!(texts, vec!["8.3M", "6.9M", "5.6M", "4.5M", "4.0M"]);
    }

    #[test]
    fn language_badges_compare_against_rust() {
        let specs: Vec<ChartSpec> = jobs();
        let panel: &BarPanel = bars(&specs[2], 0);

        let badges: Vec<String> = ratio_annotations(panel)
            .unwrap()
            .into_iter()
            .map(|a| a.text().clone())
            .collect();

        assert_eq!(
            badges,
            vec!["1.2x slower", "2.6x slower", "3.6x slower", "26.5x slower"]
        );
    }

    #[test]
    fn memory_curve_is_in_megabytes() {
        let specs: Vec<ChartSpec> = jobs();
        let Panel::Line(line) = &specs[3].panels()[0] else {
            panic!("expected a line panel");
        };

        let callouts: Vec<String> = point_callouts(line)
            .into_iter()
            .map(|a| a.text().clone())
            .collect();

        assert_eq!(
            callouts,
            vec!["0.00 MB", "0.00 MB", "0.02 MB", "0.16 MB", "1.54 MB"]
        );
    }
}
