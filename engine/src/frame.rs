//! CPU-side draw list handed to [`crate::Game::draw`].

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized components, still in sRGB space.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Axis-aligned rectangle in logical pixels, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    background: Color,
    rects: Vec<Rect>,
}

impl Frame {
    /// An empty frame over a logical screen of `width` x `height`. Starts
    /// out black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::BLACK,
            rects: Vec::new(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Paint the whole screen, discarding anything drawn so far.
    pub fn fill(&mut self, color: Color) {
        self.background = color;
        self.rects.clear();
    }

    pub fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.rects.push(Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Rectangles in draw order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_black_and_empty() {
        let frame = Frame::new(640, 480);
        assert_eq!(frame.size(), (640, 480));
        assert_eq!(frame.background(), Color::BLACK);
        assert!(frame.rects().is_empty());
    }

    #[test]
    fn rects_keep_draw_order() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(0.0, 0.0, 20.0, 20.0, Color::RED);
        frame.draw_rect(5.0, 5.0, 1.0, 1.0, Color::BLACK);

        let rects = frame.rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].color, Color::RED);
        assert_eq!(rects[1].x, 5.0);
    }

    #[test]
    fn fill_discards_previous_rects() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(0.0, 0.0, 20.0, 20.0, Color::RED);

        frame.fill(Color::rgba(10, 20, 30, 255));

        assert!(frame.rects().is_empty());
        assert_eq!(frame.background(), Color::rgba(10, 20, 30, 255));
    }

    #[test]
    fn color_normalizes_to_unit_range() {
        assert_eq!(Color::RED.to_f32(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::BLACK.to_f32(), [0.0, 0.0, 0.0, 1.0]);
    }
}
