//! Simple XY line charts drawn with the generator's free drawing methods.

use crate::LayoutError;
use crate::generator::ReportGenerator;
use crate::page::LineType;
use simple_report_types::{Point, RectCorner};

const TICK_LENGTH_MM: f64 = 1.5;
const LABEL_GAP_MM: f64 = 0.5;

/// A line chart occupying the box `(x0, y0, width, height)` in
/// millimeters on the current page. Data values are mapped linearly onto
/// the box; the y axis grows upwards.
#[derive(Debug, Clone)]
pub struct LineChart {
    x0: f64,
    y0: f64,
    width: f64,
    height: f64,
    traces: Vec<Vec<(f64, f64)>>,
    x_labels: Vec<(f64, String)>,
    y_labels: Vec<(f64, String)>,
}

impl LineChart {
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidChartGeometry`] if the origin is
    /// negative or the box is smaller than 1 mm in either direction.
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Result<Self, LayoutError> {
        let valid = x0 >= 0.0 && y0 >= 0.0 && width >= 1.0 && height >= 1.0;
        if !valid || ![x0, y0, width, height].iter().all(|v| v.is_finite()) {
            return Err(LayoutError::InvalidChartGeometry { x0, y0, width, height });
        }
        Ok(Self {
            x0,
            y0,
            width,
            height,
            traces: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
        })
    }

    /// Adds a polyline. Empty traces are ignored.
    pub fn add_trace(&mut self, points: Vec<(f64, f64)>) {
        if points.is_empty() {
            return;
        }
        self.traces.push(points);
    }

    pub fn add_label_x(&mut self, x: f64, text: &str) {
        self.x_labels.push((x, text.to_string()));
    }

    pub fn add_label_y(&mut self, y: f64, text: &str) {
        self.y_labels.push((y, text.to_string()));
    }

    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    /// `(xmin, xmax, ymin, ymax)` over all traces, or `None` without data.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.traces.iter().flatten();
        let &(x, y) = points.next()?;
        Some(points.fold((x, x, y, y), |(xmin, xmax, ymin, ymax), &(x, y)| {
            (xmin.min(x), xmax.max(x), ymin.min(y), ymax.max(y))
        }))
    }

    /// Renders with the value range taken from the data.
    pub fn render(&self, report: &mut ReportGenerator) -> Result<(), LayoutError> {
        match self.data_bounds() {
            Some((xmin, xmax, ymin, ymax)) => self.render_with_bounds(report, xmin, xmax, ymin, ymax),
            None => Ok(()),
        }
    }

    /// Renders mapping `[xmin, xmax] × [ymin, ymax]` onto the chart box.
    /// A chart without traces draws nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DegenerateChartRange`] if either range is
    /// empty.
    pub fn render_with_bounds(
        &self,
        report: &mut ReportGenerator,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Result<(), LayoutError> {
        if self.traces.is_empty() {
            return Ok(());
        }
        let span_x = xmax - xmin;
        let span_y = ymax - ymin;
        if !(span_x.is_finite() && span_x != 0.0) {
            return Err(LayoutError::DegenerateChartRange { axis: 'x', min: xmin, max: xmax });
        }
        if !(span_y.is_finite() && span_y != 0.0) {
            return Err(LayoutError::DegenerateChartRange { axis: 'y', min: ymin, max: ymax });
        }
        if report.current_page_index().is_none() {
            log::debug!("Line chart skipped: no page to draw on");
            return Ok(());
        }

        let fac_x = self.width / span_x;
        let fac_y = self.height / span_y;
        let map_x = |x: f64| (x - xmin) * fac_x + self.x0;
        let map_y = |y: f64| (self.y0 + self.height) - (y - ymin) * fac_y;
        let bottom = self.y0 + self.height;

        report.draw_vert_line(self.x0, self.y0, self.height, LineType::Thick);
        report.draw_hor_line(self.x0, bottom, self.width, LineType::Thick);

        for trace in &self.traces {
            let mut previous: Option<(f64, f64)> = None;
            for &(x, y) in trace {
                let point = (map_x(x), map_y(y));
                let (px, py) = previous.unwrap_or(point);
                report.draw_line(px, py, point.0, point.1, LineType::Medium);
                previous = Some(point);
            }
        }

        let root = report.root_style();
        for (x, text) in &self.x_labels {
            let x = map_x(*x);
            report.draw_vert_line(x, bottom, TICK_LENGTH_MM, LineType::Thin);
            report.draw_text(
                Point::new(x, bottom + TICK_LENGTH_MM + LABEL_GAP_MM),
                RectCorner::TopCenter,
                text,
                root,
            );
        }
        for (y, text) in &self.y_labels {
            let y = map_y(*y);
            report.draw_hor_line(self.x0, y, -TICK_LENGTH_MM, LineType::Thin);
            report.draw_text(
                Point::new(self.x0 - TICK_LENGTH_MM - LABEL_GAP_MM, y),
                RectCorner::MidRight,
                text,
                root,
            );
        }
        log::trace!("Rendered line chart with {} traces", self.traces.len());
        Ok(())
    }
}
