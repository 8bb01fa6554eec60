// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, EmptyElement, PathElement, Polygon, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH, AXIS_LABEL_AREA_PX, CHART_MARGIN_PX, COLOR_TARGET,
    LINE_WIDTH_LEGEND, LINE_WIDTH_MARKER, LINE_WIDTH_PLOT, LINE_WIDTH_TARGET, MARKER_SIZE_END,
    MARKER_SIZE_START, MARKER_SIZE_TARGET, PLOT_HEIGHT, PLOT_WIDTH, TARGET_LABEL_OFFSET,
    TITLE_BAND_PX,
};
use crate::font_config::{
    FONT_TUPLE_ANNOTATION, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
};
use crate::types::{Position, UavId};

/// Picks the color for entry `index` of `count` from the 10-color categorical palette.
///
/// The palette is resampled to `count` entries spread over its full width, so a small
/// number of tracks still gets well separated hues. More than ten tracks reuse colors.
pub fn categorical_color(index: usize, count: usize) -> RGBColor {
    let palette = colorous::CATEGORY10;
    let slots = palette.len();
    let slot = if count <= 1 {
        0
    } else {
        let t = index as f64 / (count - 1) as f64;
        ((t * slots as f64) as usize).min(slots - 1)
    };
    let color = palette[slot];
    RGBColor(color.r, color.g, color.b)
}

/// Heading arrow anchored at a sample position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingArrow {
    pub origin: Position,
    pub delta: (f64, f64),
}

impl HeadingArrow {
    /// Arrow of `length` pointing along `azimuth_deg` (counter-clockwise from +X).
    pub fn from_azimuth(origin: Position, azimuth_deg: f64, length: f64) -> Self {
        let angle = azimuth_deg.to_radians();
        HeadingArrow {
            origin,
            delta: (angle.cos() * length, angle.sin() * length),
        }
    }

    /// End of the shaft, where the head starts.
    pub fn tip(&self) -> Position {
        (self.origin.0 + self.delta.0, self.origin.1 + self.delta.1)
    }

    /// Triangle of the arrow head: base corners on either side of the tip and the apex
    /// `head_length` beyond it.
    pub fn head(&self, head_width: f64, head_length: f64) -> [Position; 3] {
        let tip = self.tip();
        let length = self.delta.0.hypot(self.delta.1);
        let (ux, uy) = if length > f64::EPSILON {
            (self.delta.0 / length, self.delta.1 / length)
        } else {
            (1.0, 0.0)
        };
        let (nx, ny) = (-uy * head_width / 2.0, ux * head_width / 2.0);
        [
            (tip.0 + nx, tip.1 + ny),
            (tip.0 + ux * head_length, tip.1 + uy * head_length),
            (tip.0 - nx, tip.1 - ny),
        ]
    }
}

/// Everything drawn for one UAV.
#[derive(Clone)]
pub struct TrackSeries {
    pub uav_id: UavId,
    pub label: String,
    pub color: RGBColor,
    pub path: Vec<Position>,
    pub arrows: Vec<HeadingArrow>,
    pub target: Option<Position>,
}

impl TrackSeries {
    pub fn start(&self) -> Option<Position> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

#[derive(Clone)]
pub struct FlightPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub x_label: String,
    pub y_label: String,
    pub tracks: Vec<TrackSeries>,
}

fn annotation_style(color: &RGBColor, h_pos: HPos, v_pos: VPos) -> plotters::style::TextStyle<'static> {
    FONT_TUPLE_ANNOTATION
        .into_font()
        .color(color)
        .pos(Pos::new(h_pos, v_pos))
}

/// Draws the flight path chart (mesh, tracks, markers, legend) into `area`.
pub fn draw_flight_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &FlightPlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(CHART_MARGIN_PX)
        .x_label_area_size(AXIS_LABEL_AREA_PX)
        .y_label_area_size(AXIS_LABEL_AREA_PX)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_labels(15)
        .y_labels(15)
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for track in &config.tracks {
        let color = track.color;

        chart
            .draw_series(LineSeries::new(
                track.path.iter().copied(),
                color.stroke_width(LINE_WIDTH_PLOT),
            ))?
            .label(track.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });

        // Heading arrows: shaft then filled head
        chart.draw_series(track.arrows.iter().map(|arrow| {
            PathElement::new(
                vec![arrow.origin, arrow.tip()],
                color.stroke_width(LINE_WIDTH_MARKER),
            )
        }))?;
        chart.draw_series(track.arrows.iter().map(|arrow| {
            Polygon::new(
                arrow.head(ARROW_HEAD_WIDTH, ARROW_HEAD_LENGTH).to_vec(),
                color.filled(),
            )
        }))?;

        if let Some(start) = track.start() {
            chart.draw_series(std::iter::once(Circle::new(
                start,
                MARKER_SIZE_START,
                color.filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("Start {}", track.uav_id),
                start,
                annotation_style(&BLACK, HPos::Right, VPos::Bottom),
            )))?;
        }

        if let Some(end) = track.end() {
            chart.draw_series(std::iter::once(Cross::new(
                end,
                MARKER_SIZE_END,
                color.stroke_width(LINE_WIDTH_MARKER),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("End {}", track.uav_id),
                end,
                annotation_style(&BLACK, HPos::Left, VPos::Top),
            )))?;
        }

        if let Some((tx, ty)) = track.target {
            let plus_style = COLOR_TARGET.stroke_width(LINE_WIDTH_TARGET);
            let s = MARKER_SIZE_TARGET;
            chart.draw_series(std::iter::once(
                EmptyElement::at((tx, ty))
                    + PathElement::new(vec![(-s, 0), (s, 0)], plus_style)
                    + PathElement::new(vec![(0, -s), (0, s)], plus_style),
            ))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("Target {}", track.uav_id),
                (tx, ty - TARGET_LABEL_OFFSET),
                annotation_style(COLOR_TARGET, HPos::Center, VPos::Center),
            )))?;
        }
    }

    if !config.tracks.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Fills `root`, draws the title band and the chart below it, and presents the result.
pub fn draw_flight_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &FlightPlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (title_area, chart_area) = root.split_vertically(TITLE_BAND_PX as i32);
    let (title_w, title_h) = title_area.dim_in_pixel();
    title_area.draw(&Text::new(
        config.title.as_str(),
        ((title_w / 2) as i32, (title_h / 2) as i32),
        FONT_TUPLE_MAIN_TITLE
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;
    draw_flight_chart(&chart_area, config)?;
    root.present()?;
    Ok(())
}

/// Renders the figure to `output_path`. A `.svg` extension selects the SVG backend,
/// anything else is written as a bitmap (PNG).
pub fn draw_flight_plot(output_path: &Path, config: &FlightPlotConfig) -> Result<(), Box<dyn Error>> {
    if is_svg_path(output_path) {
        let root = SVGBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        draw_flight_figure(&root, config)
    } else {
        let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        draw_flight_figure(&root, config)
    }
}

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}


// src/plot_framework.rs
