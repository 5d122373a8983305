use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::app::{Renderer, View};
use crate::constants::{CELL_SIZE, MAX_NAME_LENGTH};
use crate::grid::{GridPosition, GridSize};
use crate::high_scores::HighScoreEntry;

const BACKGROUND: Color = Color::new(0.08, 0.08, 0.08, 1.0);
const GRID_LINE: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const SNAKE_BODY: Color = Color::new(0.16, 0.78, 0.16, 1.0);
const SNAKE_HEAD: Color = Color::new(0.08, 0.63, 0.08, 1.0);
const FOOD: Color = Color::new(0.86, 0.24, 0.24, 1.0);
const TEXT: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const ACCENT: Color = Color::new(0.39, 0.71, 1.0, 1.0);
const SELECTED: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const DIM_TEXT: Color = Color::new(0.7, 0.7, 0.7, 1.0);

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, font_size as f32, color);
}

fn draw_options(options: &[&str], selected: usize, top: f32) {
    for (i, option) in options.iter().enumerate() {
        let color = if i == selected { SELECTED } else { TEXT };
        draw_centered(option, top + i as f32 * 40.0, 28, color);
    }
}

fn cell_rect(cell: GridPosition) -> Rect {
    let size = CELL_SIZE as f32;
    Rect::new(cell.col as f32 * size, cell.row as f32 * size, size, size)
}

/// Draws every screen with macroquad's immediate-mode primitives.
#[derive(Default)]
pub struct MacroquadRenderer;

impl MacroquadRenderer {
    fn draw_menu(&self, options: &[&str], selected: usize) {
        draw_centered("simple snake", 100.0, 48, ACCENT);
        draw_options(options, selected, 190.0);
        let sh = screen_height();
        draw_centered("use [up] and [down] arrow keys to navigate.", sh - 50.0, 18, DIM_TEXT);
        draw_centered("use [Enter] key to select. use [esc] key to quit", sh - 22.0, 18, DIM_TEXT);
    }

    fn draw_speed(&self, speed: u8) {
        draw_centered("Adjust Snake Speed", 110.0, 36, ACCENT);
        draw_centered(&format!("Speed: {speed}"), 180.0, 32, TEXT);
        let sh = screen_height();
        draw_centered("use [Left] and [Right] arrow keys to change snake speed (1-10).", sh - 50.0, 18, DIM_TEXT);
        draw_centered("press [Enter] or [Esc] key to return", sh - 22.0, 18, DIM_TEXT);
    }

    fn draw_game(&self, grid: GridSize, snake: &VecDeque<GridPosition>, food: GridPosition, score: u32, speed: u8) {
        let (sw, sh) = (screen_width(), screen_height());
        let size = CELL_SIZE as f32;
        for col in 0..=grid.width {
            let x = col as f32 * size;
            draw_line(x, 0.0, x, sh, 1.0, GRID_LINE);
        }
        for row in 0..=grid.height {
            let y = row as f32 * size;
            draw_line(0.0, y, sw, y, 1.0, GRID_LINE);
        }

        for (i, cell) in snake.iter().enumerate() {
            let r = cell_rect(*cell);
            let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
            draw_rectangle(r.x, r.y, r.w, r.h, color);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, BACKGROUND);
        }

        let r = cell_rect(food);
        draw_rectangle(r.x, r.y, r.w, r.h, FOOD);

        // HUD
        draw_text(&format!("Score: {score}"), 10.0, 24.0, 20.0, TEXT);
        let speed_label = format!("Speed: {speed}");
        let m = measure_text(&speed_label, None, 20, 1.0);
        draw_text(&speed_label, sw - 10.0 - m.width, 24.0, 20.0, TEXT);
    }

    fn draw_game_over(&self, score: u32, options: &[&str], selected: usize) {
        draw_centered("Game Over", 130.0, 48, ACCENT);
        draw_centered(&format!("Score: {score}"), 190.0, 32, TEXT);
        draw_options(options, selected, 260.0);
        draw_centered("Up/Down to choose, Enter to confirm", screen_height() - 30.0, 18, DIM_TEXT);
    }

    fn draw_name_entry(&self, name: &str) {
        draw_centered("Enter your name", 150.0, 36, ACCENT);
        draw_centered(&format!("(letters only, max {MAX_NAME_LENGTH})"), 190.0, 20, DIM_TEXT);
        draw_centered(if name.is_empty() { "_" } else { name }, 240.0, 32, TEXT);
        draw_centered("Enter to save, Esc to cancel", screen_height() - 30.0, 18, DIM_TEXT);
    }

    fn draw_high_scores(&self, entries: &[HighScoreEntry]) {
        draw_centered("High Scores", 90.0, 36, ACCENT);
        if entries.is_empty() {
            draw_centered("No scores yet.", 160.0, 24, TEXT);
        }
        for (i, entry) in entries.iter().enumerate() {
            let line = format!("{}. {} - {}", i + 1, entry.name, entry.score);
            draw_centered(&line, 160.0 + i as f32 * 32.0, 24, TEXT);
        }
        draw_centered("Esc to return", screen_height() - 30.0, 18, DIM_TEXT);
    }
}

impl Renderer for MacroquadRenderer {
    fn draw(&mut self, view: &View<'_>) {
        clear_background(BACKGROUND);
        match view {
            View::Menu { options, selected } => self.draw_menu(options, *selected),
            View::SpeedAdjust { speed } => self.draw_speed(*speed),
            View::Playing { grid, snake, food, score, speed } => self.draw_game(*grid, snake, *food, *score, *speed),
            View::GameOver { score, options, selected } => self.draw_game_over(*score, options, *selected),
            View::NameEntry { name } => self.draw_name_entry(name),
            View::HighScores { entries } => self.draw_high_scores(entries),
        }
    }
}
