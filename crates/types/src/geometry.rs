//! Page-space geometry. All values are millimetres with the origin at the
//! top-left corner of the page and y growing downwards.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A square anchored at its top-left corner.
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, side, side)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns a rectangle of the given size sharing this rectangle's center.
    pub fn centered_square(&self, side: f32) -> Rect {
        let (cx, cy) = self.center();
        Rect::square(cx - side / 2.0, cy - side / 2.0, side)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Fixed page formats supported by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    /// ISO A4 portrait, 210 x 297 mm.
    #[default]
    A4,
}

impl PageSize {
    pub fn size(self) -> Size {
        match self {
            PageSize::A4 => Size::new(210.0, 297.0),
        }
    }
}
