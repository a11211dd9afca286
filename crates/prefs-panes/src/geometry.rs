//! Window geometry
//!
//! Screen coordinates follow the native convention of the desktop toolkits
//! this targets: the origin is the bottom-left corner of the frame and `y`
//! grows upwards. Keeping the title bar in place while a window grows
//! therefore means moving the origin down by the height gained.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Difference `self - other`, component-wise
    pub fn delta_from(&self, other: Size) -> Size {
        Size {
            width: self.width - other.width,
            height: self.height - other.height,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Y coordinate of the top edge
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Grow (or shrink) the frame by `delta` while keeping the top-left
    /// corner where it is. Dimensions never go negative.
    pub fn resized_by(&self, delta: Size) -> Frame {
        let width = (self.size.width + delta.width).max(0.0);
        let height = (self.size.height + delta.height).max(0.0);

        Frame {
            origin: Point::new(self.origin.x, self.max_y() - height),
            size: Size::new(width, height),
        }
    }

    /// Frame of the given size centered inside `bounds`
    pub fn centered_in(bounds: Frame, size: Size) -> Frame {
        Frame {
            origin: Point::new(
                bounds.origin.x + (bounds.size.width - size.width) / 2.0,
                bounds.origin.y + (bounds.size.height - size.height) / 2.0,
            ),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_keeps_top_left_anchor() {
        let frame = Frame::new(100.0, 500.0, 400.0, 300.0);
        let grown = frame.resized_by(Size::new(100.0, 200.0));

        assert_eq!(grown.size, Size::new(500.0, 500.0));
        assert_eq!(grown.origin.x, 100.0);
        assert_eq!(grown.max_y(), frame.max_y());
        assert_eq!(grown.origin.y, 300.0);

        let shrunk = grown.resized_by(Size::new(-300.0, -450.0));
        assert_eq!(shrunk.size, Size::new(200.0, 50.0));
        assert_eq!(shrunk.max_y(), frame.max_y());
    }

    #[test]
    fn test_resize_never_negative() {
        let frame = Frame::new(0.0, 0.0, 10.0, 10.0);
        let collapsed = frame.resized_by(Size::new(-50.0, -50.0));
        assert_eq!(collapsed.size, Size::ZERO);
        assert_eq!(collapsed.max_y(), 10.0);
    }

    #[test]
    fn test_delta() {
        let a = Size::new(500.0, 400.0);
        let b = Size::new(500.0, 250.0);
        assert_eq!(a.delta_from(b), Size::new(0.0, 150.0));
        assert!(a.delta_from(a).is_zero());
    }

    #[test]
    fn test_centered_in() {
        let screen = Frame::new(0.0, 0.0, 1000.0, 800.0);
        let frame = Frame::centered_in(screen, Size::new(200.0, 100.0));
        assert_eq!(frame, Frame::new(400.0, 350.0, 200.0, 100.0));
    }

    #[test]
    fn test_frame_serializes() {
        let frame = Frame::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&frame).unwrap();
        let parsed: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }
}
