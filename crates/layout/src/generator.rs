//! The pagination engine.
//!
//! [`ReportGenerator`] keeps a vertical write cursor on the current page and
//! flows lines, rules and tables down the page, starting a new page whenever
//! the next block would cross the bottom of the content area. Free drawing
//! methods place primitives at absolute positions and never touch the
//! cursor.
//!
//! The public API works in millimeters; everything stored on a [`Page`] is
//! in internal units.

use crate::algorithms::pagination::{advance_clamped, check_fit};
use crate::builder::ReportBuilder;
use crate::config::ReportConfig;
use crate::fonts::{ApproxMeasurer, font_spec};
use crate::header_footer::{HeaderFooterText, TokenContext, substitute_tokens};
use crate::page::{LineItem, LineType, Page, PageItem, RectItem, SvgItem, TextItem};
use crate::svg::svg_target_size;
use crate::tabs::{TabDef, TabJustification, TabSet, split_columns};
use crate::LayoutError;
use chrono::NaiveDateTime;
use simple_report_style::{StyleError, StyleId, TextAlign, TextStyleLib};
use simple_report_traits::{FontSpec, TextMeasurer};
use simple_report_types::{ACCURACY_FAC, Color, Point, Rect, RectCorner, Size, internal_to_mm, mm_to_internal};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub const H1_STYLE: &str = "H1";
pub const H2_STYLE: &str = "H2";
/// Style used for header and footer texts.
pub const HEADER_STYLE: &str = "Header";

/// Relative skips only ever move down.
fn skip_to_internal(mm: f64) -> f64 {
    if mm.is_finite() && mm > 0.0 { mm_to_internal(mm) } else { 0.0 }
}

fn mm_rect(rect: Rect) -> Rect {
    rect.scaled(1.0 / ACCURACY_FAC)
}

pub struct ReportGenerator {
    width: f64,
    height: f64,
    margin: f64,
    config: ReportConfig,
    measurer: Arc<dyn TextMeasurer>,
    styles: TextStyleLib,

    pages: Vec<Page>,
    current: Option<usize>,
    cur_y: f64,
    max_y: f64,
    content_top: f64,

    tabs: TabSet,
    tab_stack: Vec<TabSet>,

    header_footer: HeaderFooterText,
    page_headers: HashMap<usize, [String; 3]>,
    page_footers: HashMap<usize, [String; 3]>,
    timestamp: NaiveDateTime,
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("page_width_mm", &self.page_width_mm())
            .field("page_height_mm", &self.page_height_mm())
            .field("margin_mm", &self.margin_mm())
            .field("pages", &self.pages.len())
            .field("current", &self.current)
            .field("measurer", &self.measurer.name())
            .finish()
    }
}

impl ReportGenerator {
    /// Creates a generator for pages of `width_mm × height_mm` with the same
    /// margin on all four sides. No page exists until the first write.
    ///
    /// # Errors
    ///
    /// Fails if a dimension is not a positive number, the margin is negative,
    /// or the margins leave no content area.
    pub fn new(width_mm: f64, height_mm: f64, margin_mm: f64) -> Result<Self, LayoutError> {
        Self::from_parts(
            width_mm,
            height_mm,
            margin_mm,
            ReportConfig::default(),
            Arc::new(ApproxMeasurer::default()),
            chrono::Local::now().naive_local(),
        )
    }

    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    pub(crate) fn from_parts(
        width_mm: f64,
        height_mm: f64,
        margin_mm: f64,
        config: ReportConfig,
        measurer: Arc<dyn TextMeasurer>,
        timestamp: NaiveDateTime,
    ) -> Result<Self, LayoutError> {
        validate_page(width_mm, height_mm, margin_mm)?;
        let config = config.sanitized();
        let styles = seed_styles(&config)?;

        let margin = mm_to_internal(margin_mm);
        let height = mm_to_internal(height_mm);
        log::debug!(
            "New report generator: {}x{} mm, margin {} mm, measurer {}",
            width_mm,
            height_mm,
            margin_mm,
            measurer.name()
        );
        Ok(Self {
            width: mm_to_internal(width_mm),
            height,
            margin,
            config,
            measurer,
            styles,
            pages: Vec::new(),
            current: None,
            cur_y: margin,
            max_y: height - margin,
            content_top: margin,
            tabs: TabSet::new(),
            tab_stack: Vec::new(),
            header_footer: HeaderFooterText::new(),
            page_headers: HashMap::new(),
            page_footers: HashMap::new(),
            timestamp,
        })
    }

    // ---------------------------------------------------------------------
    // Pages
    // ---------------------------------------------------------------------

    /// Appends a new page, makes it current and returns its 0-based index.
    ///
    /// The cursor moves to the top margin and then below the header band;
    /// the bottom of the content area moves above the footer band. Both
    /// bands are reserved whether or not header/footer text is set yet,
    /// since the text is only drawn by
    /// [`insert_header_and_footer`](Self::insert_header_and_footer).
    pub fn start_next_page(&mut self) -> usize {
        let index = self.pages.len();
        let band = self.band_height() + mm_to_internal(self.config.header_footer_skip_mm);
        self.pages.push(Page::new(self.width, self.height, band));
        self.current = Some(index);
        self.cur_y = self.margin + band;
        self.max_y = self.height - self.margin - band;
        self.content_top = self.cur_y;

        log::debug!(
            "Started page {} (content {:.2}..{:.2} mm)",
            index + 1,
            internal_to_mm(self.cur_y),
            internal_to_mm(self.max_y)
        );
        index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page_index(&self) -> Option<usize> {
        self.current
    }

    /// Drops every page and the per-page header/footer overrides. The next
    /// write starts again at page 0.
    pub fn delete_all_pages(&mut self) {
        log::debug!("Deleting {} pages", self.pages.len());
        self.pages.clear();
        self.page_headers.clear();
        self.page_footers.clear();
        self.current = None;
        self.cur_y = self.margin;
        self.max_y = self.height - self.margin;
        self.content_top = self.margin;
    }

    // ---------------------------------------------------------------------
    // Flowed text
    // ---------------------------------------------------------------------

    /// Writes one line at the cursor, breaking the page first if it does
    /// not fit. Tab characters separate the columns of the current tab set.
    pub fn write_line(&mut self, text: &str, style: StyleId, skip_after_mm: f64, skip_before_mm: f64) {
        let style = self.checked_style(style);
        if self.current.is_none() || !self.has_space_for_another_line(style, skip_before_mm) {
            self.start_next_page();
            if !self.has_space_for_another_line(style, 0.0) {
                log::warn!(
                    "Line '{}' is taller than the content area of a page; placing it anyway",
                    text
                );
            }
        } else {
            self.cur_y += skip_to_internal(skip_before_mm);
        }

        let (font, color) = self.font_for(style);
        let mut line_height = self.measurer.line_height(&font);
        let y = self.cur_y;

        if self.tabs.is_empty() {
            if !text.is_empty() {
                let item = self.make_text(self.margin, y, TextAlign::Left, text, &font, color);
                line_height = line_height.max(item.extent.height);
                self.push_item(PageItem::Text(item));
            }
        } else {
            let stops: Vec<TabDef> = self.tabs.iter().copied().collect();
            let fragments = split_columns(text, stops.len());
            for (fragment, tab) in fragments.iter().zip(stops) {
                if fragment.is_empty() {
                    continue;
                }
                let x = self.margin + mm_to_internal(tab.position);
                let item = self.make_text(x, y, tab.justification.into(), fragment, &font, color);
                line_height = line_height.max(item.extent.height);
                self.push_item(PageItem::Text(item));
            }
        }
        log::trace!("Placed line at {:.2} mm: '{}'", internal_to_mm(y), text);

        self.cur_y += line_height * self.config.line_skip_factor;
        self.cur_y = advance_clamped(self.cur_y, skip_to_internal(skip_after_mm), self.content_top, self.max_y);
    }

    /// Like [`write_line`](Self::write_line) with the style looked up by
    /// name; an unknown or empty name selects the root style.
    pub fn write_line_named(&mut self, text: &str, style_name: &str, skip_after_mm: f64, skip_before_mm: f64) {
        let style = self.style_or_root(style_name);
        self.write_line(text, style, skip_after_mm, skip_before_mm);
    }

    /// Whether a line in `style` preceded by `skip_before_mm` still fits on
    /// the current page. Always `false` before the first page exists.
    pub fn has_space_for_another_line(&self, style: StyleId, skip_before_mm: f64) -> bool {
        if self.current.is_none() {
            return false;
        }
        let (font, _) = self.font_for(self.checked_style(style));
        let needed = skip_to_internal(skip_before_mm) + self.measurer.line_height(&font) * self.config.line_skip_factor;
        !check_fit(self.cur_y, needed, self.max_y).should_break
    }

    // ---------------------------------------------------------------------
    // Rules and cursor
    // ---------------------------------------------------------------------

    fn line_width(&self, line_type: LineType) -> f64 {
        mm_to_internal(line_type.width_mm(&self.config))
    }

    /// Draws a margin-to-margin rule at the cursor, breaking the page first
    /// if the rule does not fit.
    pub fn add_hor_line(&mut self, line_type: LineType, skip_after_mm: f64, skip_before_mm: f64) {
        if !self.has_space_for_hor_line(line_type, skip_before_mm) {
            self.start_next_page();
        } else {
            self.cur_y += skip_to_internal(skip_before_mm);
        }
        let width = self.line_width(line_type);
        let half_skip = width * self.config.line_skip_factor;

        self.cur_y += half_skip;
        let y = self.cur_y;
        self.push_item(PageItem::Line(LineItem {
            from: Point::new(self.margin, y),
            to: Point::new(self.width - self.margin, y),
            width,
            color: Color::BLACK,
        }));
        self.cur_y += half_skip;
        self.cur_y = advance_clamped(self.cur_y, skip_to_internal(skip_after_mm), self.content_top, self.max_y);
    }

    pub fn has_space_for_hor_line(&self, line_type: LineType, skip_before_mm: f64) -> bool {
        if self.current.is_none() {
            return false;
        }
        let needed = skip_to_internal(skip_before_mm) + 2.0 * self.line_width(line_type) * self.config.line_skip_factor;
        !check_fit(self.cur_y, needed, self.max_y).should_break
    }

    /// Draws a margin-to-margin rule at the absolute position `y_mm`
    /// without moving the cursor.
    pub fn add_hor_line_abs_pos(&mut self, y_mm: f64, line_type: LineType) -> bool {
        let left = internal_to_mm(self.margin);
        let length = self.content_width_mm();
        self.draw_hor_line(left, y_mm, length, line_type)
    }

    /// Moves the cursor by `amount_mm`, clamped to the content area.
    pub fn skip(&mut self, amount_mm: f64) {
        if self.current.is_none() {
            return;
        }
        let delta = if amount_mm.is_finite() { mm_to_internal(amount_mm) } else { 0.0 };
        self.cur_y = advance_clamped(self.cur_y, delta, self.content_top, self.max_y);
    }

    /// Moves the cursor to the absolute position `y_mm`. Positions outside
    /// the content area are rejected.
    pub fn warp_to(&mut self, y_mm: f64) -> bool {
        if self.current.is_none() || !y_mm.is_finite() {
            return false;
        }
        let y = mm_to_internal(y_mm);
        if y < self.content_top || y > self.max_y {
            log::debug!("Rejecting warp to {:.2} mm outside the content area", y_mm);
            return false;
        }
        self.cur_y = y;
        true
    }

    pub fn cursor_y_mm(&self) -> f64 {
        internal_to_mm(self.cur_y)
    }

    pub fn max_y_mm(&self) -> f64 {
        internal_to_mm(self.max_y)
    }

    pub fn content_top_mm(&self) -> f64 {
        internal_to_mm(self.content_top)
    }

    pub fn page_width_mm(&self) -> f64 {
        internal_to_mm(self.width)
    }

    pub fn page_height_mm(&self) -> f64 {
        internal_to_mm(self.height)
    }

    pub fn margin_mm(&self) -> f64 {
        internal_to_mm(self.margin)
    }

    pub fn content_width_mm(&self) -> f64 {
        internal_to_mm(self.width - 2.0 * self.margin)
    }

    // ---------------------------------------------------------------------
    // Free drawing
    // ---------------------------------------------------------------------

    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, line_type: LineType) -> bool {
        if self.current.is_none() || ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return false;
        }
        let width = self.line_width(line_type);
        self.push_item(PageItem::Line(LineItem {
            from: Point::new(x0, y0).scaled(ACCURACY_FAC),
            to: Point::new(x1, y1).scaled(ACCURACY_FAC),
            width,
            color: Color::BLACK,
        }));
        true
    }

    /// A negative `length` draws to the left of `x0`.
    pub fn draw_hor_line(&mut self, x0: f64, y0: f64, length: f64, line_type: LineType) -> bool {
        self.draw_line(x0, y0, x0 + length, y0, line_type)
    }

    /// A negative `length` draws upwards from `y0`.
    pub fn draw_vert_line(&mut self, x0: f64, y0: f64, length: f64, line_type: LineType) -> bool {
        self.draw_line(x0, y0, x0, y0 + length, line_type)
    }

    /// Draws a rectangle outline, optionally filled. Negative sizes extend
    /// the rectangle left of / above the given corner.
    pub fn draw_rect(
        &mut self,
        x0: f64,
        y0: f64,
        width: f64,
        height: f64,
        line_type: LineType,
        fill: Option<Color>,
    ) -> bool {
        if self.current.is_none() || ![x0, y0, width, height].iter().all(|v| v.is_finite()) {
            return false;
        }
        let rect = Rect::new(
            x0.min(x0 + width),
            y0.min(y0 + height),
            width.abs(),
            height.abs(),
        );
        let line_width = self.line_width(line_type);
        self.push_item(PageItem::Rect(RectItem {
            rect: rect.scaled(ACCURACY_FAC),
            line_width,
            stroke: Color::BLACK,
            fill,
        }));
        true
    }

    /// Places a single line of text so that its `corner` sits on `point`
    /// and returns the box it occupies, in millimeters.
    pub fn draw_text(&mut self, point: Point, corner: RectCorner, text: &str, style: StyleId) -> Rect {
        if self.current.is_none() {
            return Rect::empty();
        }
        let (font, color) = self.font_for(self.checked_style(style));
        let extent = self.measurer.measure(text, &font);
        let size = Size::new(internal_to_mm(extent.width), internal_to_mm(extent.height));
        let rect = Rect::anchored(point, corner, size);
        if !text.is_empty() {
            self.push_item(PageItem::Text(TextItem {
                origin: rect.origin().scaled(ACCURACY_FAC),
                extent: Size::new(extent.width, extent.height),
                text: text.to_string(),
                font,
                color,
            }));
        }
        rect
    }

    /// Places a block of `'\n'`-separated lines as a unit. Lines are aligned
    /// within the block by `align`; consecutive lines are `line_spacing_mm`
    /// apart.
    pub fn draw_multiline_text(
        &mut self,
        point: Point,
        corner: RectCorner,
        text: &str,
        style: StyleId,
        align: TextAlign,
        line_spacing_mm: f64,
    ) -> Rect {
        if self.current.is_none() {
            return Rect::empty();
        }
        let (font, color) = self.font_for(self.checked_style(style));
        let spacing = skip_to_internal(line_spacing_mm);
        let lines: Vec<(&str, f64, f64)> = text
            .split('\n')
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                let extent = self.measurer.measure(line, &font);
                (line, extent.width, extent.height)
            })
            .collect();

        let block_width = lines.iter().map(|(_, w, _)| *w).fold(0.0, f64::max);
        let block_height =
            lines.iter().map(|(_, _, h)| *h).sum::<f64>() + spacing * lines.len().saturating_sub(1) as f64;
        let block = Rect::anchored(
            point.scaled(ACCURACY_FAC),
            corner,
            Size::new(block_width, block_height),
        );
        let reference_x = match align {
            TextAlign::Left => block.left(),
            TextAlign::Center => block.center().x,
            TextAlign::Right => block.right(),
        };

        let mut y = block.top();
        for (line, width, height) in lines {
            if !line.is_empty() {
                self.push_item(PageItem::Text(TextItem {
                    origin: Point::new(align.left_edge(reference_x, width), y),
                    extent: Size::new(width, height),
                    text: line.to_string(),
                    font: font.clone(),
                    color,
                }));
            }
            y += height + spacing;
        }
        mm_rect(block)
    }

    /// Places an SVG document. A non-positive `width_mm`/`height_mm` is
    /// derived from the document. Returns an empty rectangle, and inserts
    /// nothing, if the data is not a usable SVG document.
    pub fn add_svg(&mut self, point: Point, corner: RectCorner, data: &str, width_mm: f64, height_mm: f64) -> Rect {
        if self.current.is_none() {
            return Rect::empty();
        }
        let size = match svg_target_size(data, width_mm, height_mm) {
            Ok(size) => size,
            Err(e) => {
                log::warn!("Skipping SVG image: {}", e);
                return Rect::empty();
            }
        };
        let rect = Rect::anchored(point, corner, size);
        self.push_item(PageItem::Svg(SvgItem {
            rect: rect.scaled(ACCURACY_FAC),
            data: data.to_string(),
        }));
        rect
    }

    pub fn add_svg_file(
        &mut self,
        point: Point,
        corner: RectCorner,
        path: impl AsRef<Path>,
        width_mm: f64,
        height_mm: f64,
    ) -> Rect {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(data) => self.add_svg(point, corner, &data, width_mm, height_mm),
            Err(e) => {
                log::warn!("Could not read SVG file '{}': {}", path.display(), e);
                Rect::empty()
            }
        }
    }

    // ---------------------------------------------------------------------
    // Tabs
    // ---------------------------------------------------------------------

    pub fn add_tab(&mut self, position_mm: f64, justification: TabJustification) {
        self.tabs.add_tab(position_mm, justification);
    }

    pub fn remove_tab(&mut self, position_mm: f64) {
        self.tabs.remove_tab(position_mm);
    }

    pub fn clear_all_tabs(&mut self) {
        self.tabs.clear_all_tabs();
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Installs `tabs`, saving the current set for [`pop_tabs`](Self::pop_tabs).
    pub fn push_tabs(&mut self, tabs: TabSet) {
        let previous = std::mem::replace(&mut self.tabs, tabs);
        self.tab_stack.push(previous);
    }

    /// Restores the set saved by the matching `push_tabs`. Returns `false`
    /// if nothing was pushed.
    pub fn pop_tabs(&mut self) -> bool {
        match self.tab_stack.pop() {
            Some(previous) => {
                self.tabs = previous;
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------------
    // Styles
    // ---------------------------------------------------------------------

    pub fn text_style(&self, name: &str) -> Option<StyleId> {
        self.styles.get_style(name)
    }

    pub fn root_style(&self) -> StyleId {
        self.styles.root()
    }

    pub fn style_or_root(&self, name: &str) -> StyleId {
        self.styles.get_style(name).unwrap_or_else(|| {
            log::warn!("Unknown text style '{}', using the root style", name);
            StyleId::ROOT
        })
    }

    pub fn create_child_text_style(&mut self, name: &str, parent_name: &str) -> Result<StyleId, StyleError> {
        self.styles.create_child_style(name, parent_name)
    }

    pub fn style_lib(&self) -> &TextStyleLib {
        &self.styles
    }

    pub fn style_lib_mut(&mut self) -> &mut TextStyleLib {
        &mut self.styles
    }

    /// Ids handed out by another generator's library fall back to the root.
    fn checked_style(&self, style: StyleId) -> StyleId {
        if self.styles.contains(style) {
            style
        } else {
            log::warn!("Style {:?} does not belong to this report, using the root style", style);
            StyleId::ROOT
        }
    }

    fn font_for(&self, style: StyleId) -> (FontSpec, Color) {
        let resolved = self.styles.resolve(style);
        (font_spec(&resolved), resolved.color)
    }

    // ---------------------------------------------------------------------
    // Header and footer
    // ---------------------------------------------------------------------

    /// Sets the header of every page without a page-specific header.
    pub fn set_header(&mut self, left: &str, center: &str, right: &str) {
        self.header_footer.set_header(left, center, right);
    }

    /// Sets the footer of every page without a page-specific footer.
    pub fn set_footer(&mut self, left: &str, center: &str, right: &str) {
        self.header_footer.set_footer(left, center, right);
    }

    pub fn set_header_for_page(&mut self, page_index: usize, left: &str, center: &str, right: &str) {
        let mut hf = HeaderFooterText::new();
        hf.set_header(left, center, right);
        self.page_headers.insert(page_index, hf.header);
    }

    pub fn set_footer_for_page(&mut self, page_index: usize, left: &str, center: &str, right: &str) {
        let mut hf = HeaderFooterText::new();
        hf.set_footer(left, center, right);
        self.page_footers.insert(page_index, hf.footer);
    }

    pub fn clear_page_header_footer(&mut self, page_index: usize) {
        self.page_headers.remove(&page_index);
        self.page_footers.remove(&page_index);
    }

    /// The header/footer texts that apply to `page_index`, tokens unresolved.
    pub fn header_footer_for(&self, page_index: usize) -> HeaderFooterText {
        let mut hf = self.header_footer.clone();
        if let Some(header) = self.page_headers.get(&page_index) {
            hf.header = header.clone();
        }
        if let Some(footer) = self.page_footers.get(&page_index) {
            hf.footer = footer.clone();
        }
        hf
    }

    /// Renders the header and footer of every page, replacing whatever an
    /// earlier call produced. Call it once all content is written so that
    /// the page count token is final.
    pub fn insert_header_and_footer(&mut self) {
        let style = self.styles.get_style(HEADER_STYLE).unwrap_or(StyleId::ROOT);
        let (font, color) = self.font_for(style);
        let columns = [
            (self.margin, TextAlign::Left),
            (self.width / 2.0, TextAlign::Center),
            (self.width - self.margin, TextAlign::Right),
        ];
        let footer_y = self.height - self.margin;

        let needed = self.measurer.line_height(&font);
        for index in 0..self.pages.len() {
            let hf = self.header_footer_for(index);
            if !hf.is_empty() && needed > self.pages[index].band_height() {
                log::warn!(
                    "Header/footer text on page {} is taller than the {:.2} mm band reserved for it",
                    index + 1,
                    internal_to_mm(self.pages[index].band_height())
                );
            }
            let mut items = Vec::new();
            for (slot, (x, align)) in hf.header.iter().zip(columns) {
                if slot.is_empty() {
                    continue;
                }
                let text = self.resolve_tokens(slot, index);
                items.push(PageItem::Text(self.make_text(x, self.margin, align, &text, &font, color)));
            }
            for (slot, (x, align)) in hf.footer.iter().zip(columns) {
                if slot.is_empty() {
                    continue;
                }
                let text = self.resolve_tokens(slot, index);
                let mut item = self.make_text(x, footer_y, align, &text, &font, color);
                item.origin.y -= item.extent.height;
                items.push(PageItem::Text(item));
            }
            self.pages[index].set_header_footer(items);
        }
        log::debug!("Inserted header and footer on {} pages", self.pages.len());
    }

    /// Substitutes the page, date and time tokens in `text` as they would
    /// appear on `page_index`.
    pub fn resolve_tokens(&self, text: &str, page_index: usize) -> String {
        let ctx = TokenContext {
            page_number: page_index + 1,
            page_count: self.pages.len(),
            timestamp: self.timestamp,
            date_format: &self.config.date_format,
            time_format: &self.config.time_format,
        };
        substitute_tokens(text, &ctx)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: NaiveDateTime) {
        self.timestamp = timestamp;
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn measurer(&self) -> &Arc<dyn TextMeasurer> {
        &self.measurer
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn band_height(&self) -> f64 {
        let style = self.styles.get_style(HEADER_STYLE).unwrap_or(StyleId::ROOT);
        let (font, _) = self.font_for(style);
        self.measurer.line_height(&font) * self.config.line_skip_factor
    }

    fn make_text(&self, x: f64, y: f64, align: TextAlign, text: &str, font: &FontSpec, color: Color) -> TextItem {
        let extent = self.measurer.measure(text, font);
        TextItem {
            origin: Point::new(align.left_edge(x, extent.width), y),
            extent: Size::new(extent.width, extent.height),
            text: text.to_string(),
            font: font.clone(),
            color,
        }
    }

    fn push_item(&mut self, item: PageItem) {
        if let Some(page) = self.current.and_then(|i| self.pages.get_mut(i)) {
            page.push(item);
        }
    }
}

fn validate_page(width_mm: f64, height_mm: f64, margin_mm: f64) -> Result<(), LayoutError> {
    if !(width_mm.is_finite() && width_mm > 0.0) {
        return Err(LayoutError::InvalidPageWidth(width_mm));
    }
    if !(height_mm.is_finite() && height_mm > 0.0) {
        return Err(LayoutError::InvalidPageHeight(height_mm));
    }
    if !(margin_mm.is_finite() && margin_mm >= 0.0) {
        return Err(LayoutError::InvalidMargin(margin_mm));
    }
    for dimension in [width_mm, height_mm] {
        if 2.0 * margin_mm >= dimension {
            return Err(LayoutError::MarginTooLarge {
                margin: margin_mm,
                dimension,
            });
        }
    }
    Ok(())
}

fn seed_styles(config: &ReportConfig) -> Result<TextStyleLib, LayoutError> {
    let mut lib = TextStyleLib::new();
    if let Some(root) = lib.style_mut(StyleId::ROOT) {
        root.set_font_name(Some(config.default_font_name.as_str()))
            .set_font_size_mm(Some(config.paragraph_font_size_mm));
    }

    let seeded = [
        (H1_STYLE, config.h1_font_size_mm, Some(true), None),
        (H2_STYLE, config.h2_font_size_mm, Some(true), None),
        (HEADER_STYLE, 0.8 * config.paragraph_font_size_mm, None, Some(true)),
    ];
    for (name, size, bold, italic) in seeded {
        let id = lib.create_child_style(name, "")?;
        if let Some(style) = lib.style_mut(id) {
            style.set_font_size_mm(Some(size)).set_bold(bold).set_italic(italic);
        }
    }
    lib.apply_definitions(&config.styles)?;
    Ok(lib)
}
