use std::future::Future;

use macroquad::prelude::*;

use super::Surface;
use crate::application::Ticker;

/// The macroquad window as a drawing surface
#[derive(Debug, Default)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn resize(&mut self, width: u32, height: u32) {
        request_new_screen_size(width as f32, height as f32);
    }

    fn fill(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }
}

/// Ticks once per display refresh by awaiting macroquad's `next_frame`
#[derive(Debug, Default)]
pub struct MacroquadTicker;

impl Ticker for MacroquadTicker {
    fn tick(&mut self) -> impl Future<Output = bool> {
        async {
            next_frame().await;
            true
        }
    }
}
