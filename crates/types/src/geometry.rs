use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangle; `(x, y)` is the top-left corner and the y axis
/// points down the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Places a rectangle of `size` so that its `corner` sits on `anchor`.
    pub fn anchored(anchor: Point, corner: RectCorner, size: Size) -> Self {
        let (dx, dy) = corner.offset(size);
        Self::new(anchor.x - dx, anchor.y - dy, size.width, size.height)
    }

    /// A rectangle with no area. Used as the "nothing was placed" result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// The smallest rectangle covering both. A degenerate rectangle still
    /// contributes its position.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// One of the nine reference points of a bounding box.
///
/// Free-positioned content is anchored by naming which of its own corners
/// (or edge midpoints, or center) should land on the given coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RectCorner {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl RectCorner {
    pub const ALL: [RectCorner; 9] = [
        RectCorner::TopLeft,
        RectCorner::TopCenter,
        RectCorner::TopRight,
        RectCorner::MidLeft,
        RectCorner::Center,
        RectCorner::MidRight,
        RectCorner::BottomLeft,
        RectCorner::BottomCenter,
        RectCorner::BottomRight,
    ];

    /// Offset of this reference point from the top-left corner of a box of `size`.
    pub fn offset(self, size: Size) -> (f64, f64) {
        let (w, h) = (size.width, size.height);
        match self {
            RectCorner::TopLeft => (0.0, 0.0),
            RectCorner::TopCenter => (w / 2.0, 0.0),
            RectCorner::TopRight => (w, 0.0),
            RectCorner::MidLeft => (0.0, h / 2.0),
            RectCorner::Center => (w / 2.0, h / 2.0),
            RectCorner::MidRight => (w, h / 2.0),
            RectCorner::BottomLeft => (0.0, h),
            RectCorner::BottomCenter => (w / 2.0, h),
            RectCorner::BottomRight => (w, h),
        }
    }
}
