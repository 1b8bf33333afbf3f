use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::frame::{Color, Frame, Rect};
use crate::viewport::Viewport;

/// Clip-space position and flat color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// sRGB-encoded channel to linear, for surfaces that encode on write.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn color_for_surface(color: Color, linear: bool) -> [f32; 4] {
    let [r, g, b, a] = color.to_f32();
    if linear {
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    } else {
        [r, g, b, a]
    }
}

/// Part of `rect` inside the logical screen `[0, width] x [0, height]`,
/// or `None` when nothing of it is visible.
pub fn clip_to_screen(rect: &Rect, width: f32, height: f32) -> Option<Rect> {
    let left = rect.x.min(rect.x + rect.width).max(0.0);
    let top = rect.y.min(rect.y + rect.height).max(0.0);
    let right = rect.x.max(rect.x + rect.width).min(width);
    let bottom = rect.y.max(rect.y + rect.height).min(height);

    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
        color: rect.color,
    })
}

fn push_quad(out: &mut Vec<Vertex>, viewport: &Viewport, rect: &Rect, linear: bool) {
    let color = color_for_surface(rect.color, linear);
    let tl = viewport.to_ndc(Vec2::new(rect.x, rect.y)).to_array();
    let br = viewport
        .to_ndc(Vec2::new(rect.x + rect.width, rect.y + rect.height))
        .to_array();
    let tr = [br[0], tl[1]];
    let bl = [tl[0], br[1]];

    for position in [tl, bl, br, tl, br, tr] {
        out.push(Vertex { position, color });
    }
}

/// Triangle list for a frame: the logical screen's background first, then
/// each rectangle in draw order, clipped to the logical screen so nothing
/// spills into the letterbox bars.
pub fn build_vertices(frame: &Frame, viewport: &Viewport, linear: bool) -> Vec<Vertex> {
    let (width, height) = frame.size();
    let background = Rect {
        x: 0.0,
        y: 0.0,
        width: width as f32,
        height: height as f32,
        color: frame.background(),
    };

    let mut vertices = Vec::with_capacity((frame.rects().len() + 1) * 6);
    push_quad(&mut vertices, viewport, &background, linear);
    for rect in frame.rects() {
        if let Some(visible) = clip_to_screen(rect, background.width, background.height) {
            push_quad(&mut vertices, viewport, &visible, linear);
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_quad_per_rect_plus_background() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(0.0, 0.0, 20.0, 20.0, Color::RED);
        let viewport = Viewport::fit((640, 480), (640, 480));

        let vertices = build_vertices(&frame, &viewport, false);
        assert_eq!(vertices.len(), 12);
    }

    #[test]
    fn rect_at_origin_maps_to_top_left_corner() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(0.0, 0.0, 320.0, 240.0, Color::RED);
        let viewport = Viewport::fit((640, 480), (640, 480));

        let vertices = build_vertices(&frame, &viewport, false);
        let square = &vertices[6..];
        assert_eq!(square[0].position, [-1.0, 1.0]);
        assert_eq!(square[2].position, [0.0, 0.0]);
        assert_eq!(square[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rect_outside_the_screen_draws_nothing_in_the_bars() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(-20.0, 0.0, 20.0, 20.0, Color::RED);
        frame.draw_rect(640.0, 100.0, 20.0, 20.0, Color::RED);
        frame.draw_rect(0.0, -40.0, 20.0, 20.0, Color::RED);
        // 16:9 window, side bars left of x = 160 and right of x = 1120
        let viewport = Viewport::fit((640, 480), (1280, 720));

        let vertices = build_vertices(&frame, &viewport, false);
        assert_eq!(vertices.len(), 6, "only the background quad remains");
    }

    #[test]
    fn partly_visible_rect_stops_at_the_screen_edge() {
        let mut frame = Frame::new(640, 480);
        frame.draw_rect(-10.0, 470.0, 20.0, 20.0, Color::RED);
        let viewport = Viewport::fit((640, 480), (1280, 720));
        let left_edge = viewport.to_ndc(Vec2::ZERO).x;
        let bottom_edge = viewport.to_ndc(Vec2::new(0.0, 480.0)).y;

        let vertices = build_vertices(&frame, &viewport, false);
        let square = &vertices[6..];
        assert_eq!(square.len(), 6);
        for vertex in square {
            assert!(vertex.position[0] >= left_edge);
            assert!(vertex.position[1] >= bottom_edge);
        }
    }

    #[test]
    fn clip_keeps_the_inside_part() {
        let rect = Rect {
            x: -10.0,
            y: 5.0,
            width: 20.0,
            height: 20.0,
            color: Color::RED,
        };
        let clipped = clip_to_screen(&rect, 640.0, 480.0).unwrap();
        assert_eq!((clipped.x, clipped.y), (0.0, 5.0));
        assert_eq!((clipped.width, clipped.height), (10.0, 20.0));

        let touching = Rect { x: -20.0, ..rect };
        assert!(clip_to_screen(&touching, 640.0, 480.0).is_none());
    }

    #[test]
    fn pure_colors_survive_linear_conversion() {
        assert_eq!(color_for_surface(Color::RED, true), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(color_for_surface(Color::BLACK, true), [0.0, 0.0, 0.0, 1.0]);
    }
}
