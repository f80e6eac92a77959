use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// The x position a run of `width` must start at to honour this alignment.
    pub fn start_x(self, anchor_x: f32, width: f32) -> f32 {
        match self {
            TextAlign::Left => anchor_x,
            TextAlign::Right => anchor_x - width,
            TextAlign::Center => anchor_x - width / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_x() {
        assert_eq!(TextAlign::Left.start_x(100.0, 20.0), 100.0);
        assert_eq!(TextAlign::Right.start_x(100.0, 20.0), 80.0);
        assert_eq!(TextAlign::Center.start_x(100.0, 20.0), 90.0);
    }
}
