use macroquad::prelude::*;

use crate::app::Platform;
use crate::audio::EatCue;

pub struct MacroquadPlatform {
    eat: EatCue,
}

impl MacroquadPlatform {
    pub fn new(eat: EatCue) -> Self {
        Self { eat }
    }
}

impl Platform for MacroquadPlatform {
    fn set_fullscreen(&mut self, fullscreen: bool, windowed_size: (u32, u32)) {
        macroquad::window::set_fullscreen(fullscreen);
        if !fullscreen {
            request_new_screen_size(windowed_size.0 as f32, windowed_size.1 as f32);
        }
    }

    fn resize_window(&mut self, width: u32, height: u32) {
        request_new_screen_size(width as f32, height as f32);
    }

    fn play_eat(&mut self) {
        self.eat.play();
    }
}
