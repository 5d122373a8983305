use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;

use crate::constants::MENU_FRAME_RATE;
use crate::engine::{Engine, TickResult};
use crate::grid::{GridPosition, GridSize};
use crate::high_scores::{HighScoreEntry, HighScoreStore};
use crate::input::InputEvent;
use crate::screen::{Command, GameOverAction, MenuAction, Screen, ScreenMachine};
use crate::settings::{Settings, SettingsStore, clamp_window_size};

/// Display and audio services the controller drives.
pub trait Platform {
    /// Switches display mode. `windowed_size` is the size to restore when leaving fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool, windowed_size: (u32, u32));
    fn resize_window(&mut self, width: u32, height: u32);
    /// Fire-and-forget; failures stay inside the platform.
    fn play_eat(&mut self);
}

pub trait Renderer {
    fn draw(&mut self, view: &View<'_>);
}

/// Everything a renderer needs to draw the current screen.
#[derive(Debug)]
pub enum View<'a> {
    Menu {
        options: [&'static str; 5],
        selected: usize,
    },
    SpeedAdjust {
        speed: u8,
    },
    Playing {
        grid: GridSize,
        snake: &'a VecDeque<GridPosition>,
        food: GridPosition,
        score: u32,
        speed: u8,
    },
    GameOver {
        score: u32,
        options: [&'static str; 2],
        selected: usize,
    },
    NameEntry {
        name: &'a str,
    },
    HighScores {
        entries: &'a [HighScoreEntry],
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<P> {
    engine: Engine<StdRng>,
    screens: ScreenMachine,
    settings: Settings,
    settings_store: SettingsStore,
    high_score_store: HighScoreStore,
    high_scores: Vec<HighScoreEntry>,
    viewport: (u32, u32),
    platform: P,
}

impl<P: Platform> App<P> {
    pub fn new(
        settings_store: SettingsStore,
        high_score_store: HighScoreStore,
        platform: P,
        rng: StdRng,
        viewport: (u32, u32),
    ) -> Self {
        let settings = settings_store.load();
        let high_scores = high_score_store.load();
        let grid = GridSize::from_viewport(viewport.0, viewport.1);
        tracing::info!(?settings, ?grid, scores = high_scores.len(), "game initialised");

        Self {
            engine: Engine::new(grid, rng),
            screens: ScreenMachine::new(),
            settings,
            settings_store,
            high_score_store,
            high_scores,
            viewport,
            platform,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screens.screen()
    }

    pub fn engine(&self) -> &Engine<StdRng> {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_scores(&self) -> &[HighScoreEntry] {
        &self.high_scores
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn grid(&self) -> GridSize {
        GridSize::from_viewport(self.viewport.0, self.viewport.1)
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::QuitRequested => self.quit(),
            InputEvent::WindowResized(width, height) => {
                self.resize(width, height);
                Flow::Continue
            }
            event => {
                let before = self.screens.screen();
                let flow = match self.screens.handle(&event) {
                    Some(command) => self.apply(command),
                    None => Flow::Continue,
                };
                let after = self.screens.screen();
                if before != after {
                    tracing::info!(from = ?before, to = ?after, "screen changed");
                }
                flow
            }
        }
    }

    /// Advances the simulation by one tick while a game is running.
    pub fn update(&mut self) -> Option<TickResult> {
        if self.screens.screen() != Screen::Playing {
            return None;
        }

        let result = self.engine.tick();
        match result {
            TickResult::AteFood => {
                tracing::debug!(score = self.engine.score(), "food eaten");
                self.platform.play_eat();
            }
            TickResult::Collided => {
                tracing::info!(score = self.engine.score(), len = self.engine.snake().len(), "game over");
            }
            TickResult::Continue => {}
        }
        self.screens.on_tick(result);
        Some(result)
    }

    pub fn frame_rate(&self) -> u32 {
        if self.screens.screen() == Screen::Playing {
            self.settings.speed_level.ticks_per_second()
        } else {
            MENU_FRAME_RATE
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate() as f64)
    }

    pub fn view(&self) -> View<'_> {
        match self.screens.screen() {
            Screen::Menu => View::Menu {
                options: MenuAction::ALL.map(|action| action.label(self.settings.fullscreen)),
                selected: self.screens.menu_index(),
            },
            Screen::SpeedAdjust => View::SpeedAdjust { speed: self.settings.speed_level.get() },
            Screen::Playing => View::Playing {
                grid: self.engine.grid(),
                snake: self.engine.snake(),
                food: self.engine.food(),
                score: self.engine.score(),
                speed: self.settings.speed_level.get(),
            },
            Screen::GameOver => View::GameOver {
                score: self.engine.score(),
                options: GameOverAction::ALL.map(GameOverAction::label),
                selected: self.screens.game_over_index(),
            },
            Screen::NameEntry => View::NameEntry { name: self.screens.name() },
            Screen::HighScores => View::HighScores { entries: &self.high_scores },
        }
    }

    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::ResetGame => {
                self.engine.reset(self.grid());
                tracing::info!(grid = ?self.engine.grid(), "new game");
            }
            Command::SetDirection(direction) => self.engine.set_pending_direction(direction),
            Command::ToggleFullscreen => {
                self.settings.fullscreen = !self.settings.fullscreen;
                self.platform.set_fullscreen(self.settings.fullscreen, self.settings.window_size);
                self.settings_store.save(&self.settings);
                tracing::info!(fullscreen = self.settings.fullscreen, "display mode toggled");
            }
            Command::AdjustSpeed(delta) => {
                self.settings.speed_level = self.settings.speed_level.step(delta);
                self.settings_store.save(&self.settings);
            }
            Command::ShowHighScores => self.high_scores = self.high_score_store.load(),
            Command::CommitHighScore(name) => {
                if let Err(err) = self.high_score_store.save(&name, self.engine.score()) {
                    tracing::warn!("{err}");
                }
                self.high_scores = self.high_score_store.load();
            }
            Command::Quit => return self.quit(),
        }
        Flow::Continue
    }

    fn resize(&mut self, width: u32, height: u32) {
        let size = if self.settings.fullscreen {
            (width, height)
        } else {
            let clamped = clamp_window_size(width, height);
            if clamped != (width, height) {
                self.platform.resize_window(clamped.0, clamped.1);
            }
            clamped
        };

        self.viewport = size;
        self.engine.resize(self.grid());

        if !self.settings.fullscreen {
            self.settings.window_size = size;
            self.settings_store.save(&self.settings);
        }
        tracing::debug!(?size, grid = ?self.grid(), "viewport resized");
    }

    fn quit(&mut self) -> Flow {
        self.settings_store.save(&self.settings);
        tracing::info!("quitting");
        Flow::Quit
    }
}
