//! Grid snake with a menu, adjustable speed, a persisted high-score table and
//! persisted display settings. The simulation and screen logic are plain Rust;
//! macroquad is confined to `input`, `render`, `audio` and `platform`.

pub mod app;
pub mod audio;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod high_scores;
pub mod input;
pub mod platform;
pub mod render;
pub mod screen;
pub mod settings;

pub use app::{App, Flow, Platform, Renderer, View};
pub use engine::{Engine, TickResult};
pub use error::StoreError;
pub use grid::{Direction, GridPosition, GridSize};
pub use high_scores::{HighScoreEntry, HighScoreStore};
pub use input::InputEvent;
pub use screen::{Command, GameOverAction, MenuAction, Screen, ScreenMachine};
pub use settings::{Settings, SettingsStore, SpeedLevel};
