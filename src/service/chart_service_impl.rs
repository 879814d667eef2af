use crate::common::*;

use crate::dto::chart::{annotation::*, rendered_artifact::*};

use crate::enums::{chart_kind::*, orientation::*};

use crate::model::chart::{bar_panel::*, chart_color::*, chart_spec::*, line_panel::*};

use crate::model::configs::render_config::*;

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::{annotation_utils::*, format_utils::*, image_utils::*, layout_utils::*};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

/* plotters::prelude also exports a `Path` element */
use std::path::Path;

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/* typographic sizes in points, scaled to pixels by dpi / 72 */
const TITLE_PT: f64 = 14.0;
const PANEL_TITLE_PT: f64 = 12.0;
const AXIS_DESC_PT: f64 = 12.0;
const TICK_PT: f64 = 10.0;
const VALUE_LABEL_PT: f64 = 10.0;
const BADGE_PT: f64 = 9.0;
const CALLOUT_PT: f64 = 9.0;
const LEGEND_PT: f64 = 10.0;
const LEGEND_AREA_PT: f64 = 25.0;
const LEGEND_LINE_PT: f64 = 20.0;
const MARGIN_PT: f64 = 12.0;
const TEXT_GAP_PT: f64 = 4.0;
const BOX_PAD_PT: f64 = 3.0;
const EDGE_PT: f64 = 1.5;
const LINE_PT: f64 = 3.0;
const MARKER_PT: f64 = 5.0;
const CALLOUT_OFFSET_PT: f64 = 10.0;

const BAR_ALPHA: f64 = 0.8;
const GRID_ALPHA: f64 = 0.3;
const FILL_ALPHA: f64 = 0.3;
const BADGE_ALPHA: f64 = 0.7;

const BACKGROUND: ChartColor = ChartColor::WHITE;

fn to_rgb(color: ChartColor) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    render_config: RenderConfig,
}

impl ChartServiceImpl {
    fn px(&self, points: f64) -> f64 {
        self.render_config.pt_to_px(points)
    }

    fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }

    fn px_i32(&self, points: f64) -> i32 {
        self.px(points).round().max(1.0) as i32
    }

    fn font(&self, points: f64, style: FontStyle) -> FontDesc<'_> {
        FontDesc::new(
            FontFamily::from(self.render_config.font_family().as_str()),
            self.px(points),
            style,
        )
    }

    #[doc = "Width reserved in front of each legend label for its swatch"]
    fn legend_area(&self) -> i32 {
        self.px_i32(LEGEND_AREA_PT)
    }

    fn legend_swatch_half(&self) -> i32 {
        self.px_i32(LEGEND_PT / 2.0)
    }

    fn legend_line_len(&self) -> i32 {
        self.px_i32(LEGEND_LINE_PT)
    }

    #[doc = "Draws one annotated categorical bar panel and returns the annotations placed on it"]
    fn draw_bar_panel(
        &self,
        root: &Canvas<'_>,
        area: &Canvas<'_>,
        panel: &BarPanel,
        title_pt: f64,
    ) -> anyhow::Result<Vec<Annotation>> {
        let orientation: Orientation = *panel.orientation();
        let labels: &Vec<String> = panel.series().labels();
        let count: usize = labels.len();
        let plotted: Vec<f64> = panel.plotted_values();
        let colors: Vec<RGBColor> = panel
            .color_rule()
            .colors(count)
            .into_iter()
            .map(to_rgb)
            .collect();

        let value_labels: Vec<Annotation> = bar_value_annotations(panel);
        let badges: Vec<Annotation> = ratio_annotations(panel)?;

        /* horizontal value labels sit past the bar end and need more room */
        let headroom: f64 = match orientation {
            Orientation::Vertical => 0.1,
            Orientation::Horizontal => 0.3,
        };
        let value_range: Range<f64> = value_axis_range(&plotted, headroom)?;
        let category_range: Range<f64> = category_axis_range(count);

        let tick_style: TextStyle = self.font(TICK_PT, FontStyle::Normal).color(&BLACK);
        let line_step: i32 = self.px_i32(TICK_PT * 1.25);
        let text_gap: i32 = self.px_i32(TEXT_GAP_PT);
        let max_lines: usize = labels
            .iter()
            .map(|label| label.lines().count())
            .max()
            .unwrap_or(1);

        let mut widest_line: u32 = 0;
        for line in labels.iter().flat_map(|label| label.lines()) {
            let (width, _) = root.estimate_text_size(line, &tick_style)?;
            widest_line = widest_line.max(width);
        }

        let value_tick_area: u32 = self.px_u32(TICK_PT * 4.0 + AXIS_DESC_PT * 2.0);
        let (x_area, y_area) = match orientation {
            Orientation::Vertical => (
                (line_step * max_lines as i32 + text_gap * 2) as u32,
                value_tick_area,
            ),
            Orientation::Horizontal => (value_tick_area, widest_line + (text_gap * 2) as u32),
        };

        let (x_range, y_range) = match orientation {
            Orientation::Vertical => (category_range.clone(), value_range.clone()),
            Orientation::Horizontal => (value_range.clone(), category_range.clone()),
        };

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title(), self.font(title_pt, FontStyle::Bold))
            .margin(self.px_u32(MARGIN_PT))
            .x_label_area_size(x_area)
            .y_label_area_size(y_area)
            .build_cartesian_2d(x_range, y_range)?;

        /* category names are drawn by hand below, since they may span several lines */
        let blank = |_: &f64| String::new();
        let tick_formatter: Option<fn(f64) -> String> = panel.value_format().tick_formatter();
        let value_ticks = move |value: &f64| tick_formatter.map(|f| f(*value)).unwrap_or_default();
        let value_desc: String = panel.value_axis_desc().clone();

        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(WHITE.mix(0.0))
            .bold_line_style(BLACK.mix(GRID_ALPHA))
            .axis_style(BLACK.stroke_width(1))
            .label_style(self.font(TICK_PT, FontStyle::Normal))
            .axis_desc_style(self.font(AXIS_DESC_PT, FontStyle::Bold));

        match orientation {
            Orientation::Vertical => {
                mesh.disable_x_mesh()
                    .x_label_formatter(&blank)
                    .y_desc(value_desc);
                if tick_formatter.is_some() {
                    mesh.y_label_formatter(&value_ticks);
                }
            }
            Orientation::Horizontal => {
                mesh.disable_y_mesh()
                    .y_label_formatter(&blank)
                    .x_desc(value_desc);
                if tick_formatter.is_some() {
                    mesh.x_label_formatter(&value_ticks);
                }
            }
        }
        mesh.draw()?;

        let edge_width: u32 = self.px_u32(EDGE_PT);

        for (idx, value) in plotted.iter().enumerate() {
            let (start, end) = bar_extent(idx);
            let corners: [(f64, f64); 2] = match orientation {
                Orientation::Vertical => [(start, 0.0), (end, *value)],
                Orientation::Horizontal => [(0.0, start), (*value, end)],
            };

            chart.draw_series(std::iter::once(Rectangle::new(
                corners,
                colors[idx].mix(BAR_ALPHA).filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                corners,
                BLACK.stroke_width(edge_width),
            )))?;
        }

        let value_style: TextStyle = self
            .font(VALUE_LABEL_PT, FontStyle::Bold)
            .color(&BLACK)
            .pos(match orientation {
                Orientation::Vertical => Pos::new(HPos::Center, VPos::Bottom),
                Orientation::Horizontal => Pos::new(HPos::Left, VPos::Center),
            });

        for annotation in &value_labels {
            chart.draw_series(std::iter::once(Text::new(
                annotation.text().clone(),
                *annotation.position(),
                value_style.clone(),
            )))?;
        }

        let badge_style: TextStyle = self
            .font(BADGE_PT, FontStyle::Bold)
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let box_pad: i32 = self.px_i32(BOX_PAD_PT);

        /* a badge longer than its bar is moved past the bar's value label */
        for badge in &badges {
            let (width, height) = root.estimate_text_size(badge.text(), &badge_style)?;
            let half_w: i32 = width as i32 / 2 + box_pad;
            let half_h: i32 = height as i32 / 2 + box_pad;

            let slot: f64 = match orientation {
                Orientation::Vertical => badge.position().0,
                Orientation::Horizontal => badge.position().1,
            };
            let idx: usize = slot_index(slot);
            let (value, value_label) = plotted.get(idx).zip(value_labels.get(idx)).ok_or_else(|| {
                anyhow!(
                    "[ChartServiceImpl->draw_bar_panel] no bar under badge {:?}",
                    badge.text()
                )
            })?;
            let (label_w, label_h) = root.estimate_text_size(value_label.text(), &value_style)?;
            let (label_x, label_y) = chart.backend_coord(value_label.position());

            let center: (i32, i32) = match orientation {
                Orientation::Vertical => {
                    let (x, base) = chart.backend_coord(&(slot, 0.0));
                    let (_, end) = chart.backend_coord(&(slot, *value));
                    let label_end: i32 = base - label_y + label_h as i32;
                    (x, base - badge_offset(base - end, half_h, label_end, text_gap))
                }
                Orientation::Horizontal => {
                    let (base, y) = chart.backend_coord(&(0.0, slot));
                    let (end, _) = chart.backend_coord(&(*value, slot));
                    let label_end: i32 = label_x - base + label_w as i32;
                    (base + badge_offset(end - base, half_w, label_end, text_gap), y)
                }
            };

            root.draw(
                &(EmptyElement::at(center)
                    + Rectangle::new(
                        [(-half_w, -half_h), (half_w, half_h)],
                        BLACK.mix(BADGE_ALPHA).filled(),
                    )
                    + Text::new(badge.text().clone(), (0, 0), badge_style.clone())),
            )?;
        }

        /* multi-line category labels, one row per line */
        for (idx, label) in labels.iter().enumerate() {
            let lines: Vec<&str> = label.lines().collect();

            match orientation {
                Orientation::Vertical => {
                    let (x, y) = chart.backend_coord(&(slot_center(idx), value_range.start));
                    let style: TextStyle = tick_style.pos(Pos::new(HPos::Center, VPos::Top));

                    for (row, line) in lines.iter().enumerate() {
                        root.draw(&Text::new(
                            line.to_string(),
                            (x, y + text_gap + line_step * row as i32),
                            style.clone(),
                        ))?;
                    }
                }
                Orientation::Horizontal => {
                    let (x, y) = chart.backend_coord(&(value_range.start, slot_center(idx)));
                    let style: TextStyle = tick_style.pos(Pos::new(HPos::Right, VPos::Center));
                    let first_row: i32 = y - line_step * (lines.len() as i32 - 1) / 2;

                    for (row, line) in lines.iter().enumerate() {
                        root.draw(&Text::new(
                            line.to_string(),
                            (x - text_gap, first_row + line_step * row as i32),
                            style.clone(),
                        ))?;
                    }
                }
            }
        }

        if !panel.legend().is_empty() {
            let swatch: i32 = self.legend_swatch_half();

            for entry in panel.legend() {
                let color: RGBColor = to_rgb(*entry.color());

                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(0.0, 0.0), (0.0, 0.0)],
                        color.mix(BAR_ALPHA).filled(),
                    )))?
                    .label(entry.label().clone())
                    .legend(move |(x, y)| {
                        Rectangle::new(
                            [(x, y - swatch), (x + swatch * 2, y + swatch)],
                            color.mix(BAR_ALPHA).filled(),
                        )
                    });
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .legend_area_size(self.legend_area())
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(self.font(LEGEND_PT, FontStyle::Normal))
                .draw()?;
        }

        let mut annotations: Vec<Annotation> = value_labels;
        annotations.extend(badges);

        Ok(annotations)
    }

    #[doc = "Draws the log-log scaling panel (line, area fill, markers, callouts)"]
    fn draw_line_panel(
        &self,
        area: &Canvas<'_>,
        panel: &LinePanel,
        title_pt: f64,
    ) -> anyhow::Result<Vec<Annotation>> {
        let points: Vec<(f64, f64)> = panel.curve().points();
        let x_range: Range<f64> = log_axis_range(panel.curve().xs(), 2.0)?;
        let y_range: Range<f64> = log_axis_range(panel.curve().ys(), 3.0)?;
        let floor: f64 = y_range.start;
        let color: RGBColor = to_rgb(*panel.color());

        let callouts: Vec<Annotation> = point_callouts(panel);

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title(), self.font(title_pt, FontStyle::Bold))
            .margin(self.px_u32(MARGIN_PT))
            .x_label_area_size(self.px_u32(TICK_PT * 2.0 + AXIS_DESC_PT * 2.0))
            .y_label_area_size(self.px_u32(TICK_PT * 4.0 + AXIS_DESC_PT * 2.0))
            .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

        chart
            .configure_mesh()
            .light_line_style(BLACK.mix(0.1))
            .bold_line_style(BLACK.mix(GRID_ALPHA))
            .axis_style(BLACK.stroke_width(1))
            .x_labels(20)
            .y_labels(20)
            .x_label_formatter(&|x| format_power_of_ten(*x))
            .y_label_formatter(&|y| format_power_of_ten(*y))
            .x_desc(panel.x_axis_desc().clone())
            .y_desc(panel.y_axis_desc().clone())
            .label_style(self.font(TICK_PT, FontStyle::Normal))
            .axis_desc_style(self.font(AXIS_DESC_PT, FontStyle::Bold))
            .draw()?;

        chart.draw_series(AreaSeries::new(
            points.iter().copied(),
            floor,
            color.mix(FILL_ALPHA).filled(),
        ))?;

        let line_width: u32 = self.px_u32(LINE_PT);
        let legend_line: i32 = self.legend_line_len();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(line_width),
            ))?
            .label(panel.legend_label().clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_line, y)], color.stroke_width(line_width))
            });

        chart.draw_series(PointSeries::of_element(
            points.iter().copied(),
            self.px_u32(MARKER_PT),
            color.filled(),
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?;

        let callout_style: TextStyle = self
            .font(CALLOUT_PT, FontStyle::Normal)
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        let offset: i32 = self.px_i32(CALLOUT_OFFSET_PT);
        let box_pad: i32 = self.px_i32(BOX_PAD_PT);

        for callout in &callouts {
            let (width, height) = area.estimate_text_size(callout.text(), &callout_style)?;
            let corners: [(i32, i32); 2] = [
                (offset - box_pad, -offset - height as i32 - box_pad),
                (offset + width as i32 + box_pad, -offset + box_pad),
            ];

            chart.draw_series(std::iter::once(
                EmptyElement::at(*callout.position())
                    + Rectangle::new(corners, WHITE.mix(0.8).filled())
                    + Rectangle::new(corners, BLACK.mix(0.5).stroke_width(1))
                    + Text::new(callout.text().clone(), (offset, -offset), callout_style.clone()),
            ))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .legend_area_size(self.legend_area())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(self.font(LEGEND_PT, FontStyle::Normal))
            .draw()?;

        Ok(callouts)
    }
}

impl ChartService for ChartServiceImpl {
    fn render_chart(
        &self,
        spec: &ChartSpec,
        output_dir: &Path,
    ) -> anyhow::Result<RenderedArtifact> {
        let (width_in, height_in) = *spec.figure_size();
        let width: u32 = self.render_config.inch_to_px(width_in).max(1);
        let height: u32 = self.render_config.inch_to_px(height_in).max(1);
        let output_path: PathBuf = output_dir.join(spec.file_name());

        let title_pt: f64 = match spec.kind() {
            ChartKind::DualPanel => PANEL_TITLE_PT,
            _ => TITLE_PT,
        };

        let mut canvas: Vec<u8> = vec![0; width as usize * height as usize * 3];
        let mut annotations: Vec<Annotation> = Vec::new();

        /* the drawing context borrows the canvas only inside this scope */
        {
            let root: Canvas = BitMapBackend::with_buffer(&mut canvas, (width, height))
                .into_drawing_area();
            root.fill(&to_rgb(BACKGROUND))?;

            let areas: Vec<Canvas> = root.split_evenly((1, spec.panels().len()));

            for (area, panel) in areas.iter().zip(spec.panels()) {
                let drawn: Vec<Annotation> = match panel {
                    Panel::Bars(bars) => self.draw_bar_panel(&root, area, bars, title_pt),
                    Panel::Line(line) => self.draw_line_panel(area, line, title_pt),
                }
                .with_context(|| {
                    format!(
                        "[ChartServiceImpl->render_chart] drawing panel {:?} failed",
                        panel.title()
                    )
                })?;

                annotations.extend(drawn);
            }

            root.present()?;
        }

        let pad: u32 = self.render_config.inch_to_px(*self.render_config.pad_inches());
        let (cropped_w, cropped_h) =
            save_tight_png(canvas, width, height, BACKGROUND.rgb(), pad, &output_path)?;

        info!(
            "{} chart generated successfully: {:?} ({}x{})",
            spec.kind().tag(),
            output_path,
            cropped_w,
            cropped_h
        );

        Ok(RenderedArtifact::new(
            output_path,
            cropped_w,
            cropped_h,
            annotations,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dpi: u32) -> ChartServiceImpl {
        ChartServiceImpl::new(RenderConfig::new(dpi, "sans-serif".to_string(), 0.1))
    }

    #[test]
    fn legend_swatches_leave_room_for_their_labels() {
        for dpi in [40, 72, 150, 300, 600] {
            let chart_service: ChartServiceImpl = service(dpi);
            let area: i32 = chart_service.legend_area();

            assert!(chart_service.legend_swatch_half() * 2 < area, "swatch at {} dpi", dpi);
            assert!(chart_service.legend_line_len() < area, "line at {} dpi", dpi);
        }
    }

    #[test]
    fn legend_grows_with_resolution() {
        assert!(service(300).legend_area() > 30);
        assert_eq!(service(300).legend_line_len(), 83);
        assert_eq!(service(72).legend_area(), 25);
    }
}
