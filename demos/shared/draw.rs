use glam::DVec2;
use macroquad::color::Color;

use physics::{Body, Shape};

pub fn draw_vec_line(from: DVec2, to: DVec2, thickness: f32, color: Color) {
    use macroquad::shapes::draw_line;
    let from = from.as_vec2();
    let to = to.as_vec2();
    draw_line(from.x, from.y, to.x, to.y, thickness, color)
}

pub trait Draw {
    fn draw(&self);
}

impl Draw for Body {
    fn draw(&self) {
        use macroquad::color::{GRAY, WHITE};
        use macroquad::shapes::{draw_circle_lines, draw_line};
        let color = if self.is_static { GRAY } else { WHITE };
        match &self.shape {
            Shape::Circle { radius } => {
                let pos = self.pos.as_vec2();
                draw_circle_lines(pos.x, pos.y, *radius as f32, 1.0, color);
                let x = *radius * self.rot * DVec2::X;
                let y = *radius * self.rot * DVec2::Y;
                draw_vec_line(self.pos + x, self.pos - x, 1.0, color);
                draw_vec_line(self.pos + y, self.pos - y, 1.0, color);
            }
            Shape::Polygon { vertices, .. } => {
                let n = vertices.len();
                for i in 0..n {
                    let a = (self.pos + self.rot * vertices[i]).as_vec2();
                    let b = (self.pos + self.rot * vertices[(i + 1) % n]).as_vec2();
                    draw_line(a.x, a.y, b.x, b.y, 1.0, color);
                }
            }
        }
    }
}
