// Game constants
pub const CELL_SIZE: u32 = 20;
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = DEFAULT_WINDOW_WIDTH;
pub const MIN_WINDOW_HEIGHT: u32 = DEFAULT_WINDOW_HEIGHT;

pub const FOOD_SCORE: u32 = 10;
pub const MAX_NAME_LENGTH: usize = 10;
pub const MAX_HIGH_SCORES: usize = 10;
pub const FALLBACK_PLAYER_NAME: &str = "Player";

pub const MIN_SPEED_LEVEL: u8 = 1;
pub const MAX_SPEED_LEVEL: u8 = 10;
pub const DEFAULT_SPEED_LEVEL: u8 = 5;

/// Frame rate of every screen except active play.
pub const MENU_FRAME_RATE: u32 = 60;

pub const SETTINGS_FILE: &str = "settings.json";
pub const HIGH_SCORE_FILE: &str = "highscores.txt";
