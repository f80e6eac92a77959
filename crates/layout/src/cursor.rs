/// The next free vertical position on the page, in millimetres from the top.
///
/// Owned by a single render call and only ever moved by the strategy drawing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: f32,
}

impl Cursor {
    pub fn at(y: f32) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Moves down by `dy` and returns the new position.
    pub fn advance(&mut self, dy: f32) -> f32 {
        self.y += dy;
        self.y
    }

    pub fn move_to(&mut self, y: f32) {
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        let mut cursor = Cursor::at(75.0);
        assert_eq!(cursor.advance(8.0), 83.0);
        cursor.move_to(120.0);
        assert_eq!(cursor.y(), 120.0);
    }
}
