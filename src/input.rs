use backdrop_core::Rect;
use glam::Vec2;
use web_sys as web;

/// Pointer position in viewport CSS pixels; the scene works in the same space.
#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn dom_rect(rect: &web::DomRect) -> Rect {
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
