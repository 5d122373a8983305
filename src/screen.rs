use crate::constants::{FALLBACK_PLAYER_NAME, MAX_NAME_LENGTH};
use crate::engine::TickResult;
use crate::grid::Direction;
use crate::input::InputEvent;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    SpeedAdjust,
    Playing,
    GameOver,
    NameEntry,
    HighScores,
}

/// Main menu entries, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleFullscreen,
    AdjustSpeed,
    HighScores,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::StartGame,
        MenuAction::ToggleFullscreen,
        MenuAction::AdjustSpeed,
        MenuAction::HighScores,
        MenuAction::Quit,
    ];

    pub fn label(self, fullscreen: bool) -> &'static str {
        match self {
            MenuAction::StartGame => "Start Game",
            MenuAction::ToggleFullscreen if fullscreen => "Fullscreen: On",
            MenuAction::ToggleFullscreen => "Fullscreen: Off",
            MenuAction::AdjustSpeed => "Adjust Snake Speed",
            MenuAction::HighScores => "High Scores",
            MenuAction::Quit => "Quit",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverAction {
    StartAgain,
    BackToMenu,
}

impl GameOverAction {
    pub const ALL: [GameOverAction; 2] = [GameOverAction::StartAgain, GameOverAction::BackToMenu];

    pub fn label(self) -> &'static str {
        match self {
            GameOverAction::StartAgain => "Start Again",
            GameOverAction::BackToMenu => "Back to Menu",
        }
    }
}

/// Side effects requested by a screen transition. The controller applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ResetGame,
    SetDirection(Direction),
    ToggleFullscreen,
    AdjustSpeed(i8),
    ShowHighScores,
    CommitHighScore(String),
    Quit,
}

#[derive(Debug)]
pub struct ScreenMachine {
    screen: Screen,
    menu_index: usize,
    game_over_index: usize,
    name: String,
}

impl Default for ScreenMachine {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_step(index: usize, len: usize, forward: bool) -> usize {
    if forward { (index + 1) % len } else { (index + len - 1) % len }
}

impl ScreenMachine {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            game_over_index: 0,
            name: String::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn game_over_index(&self) -> usize {
        self.game_over_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routes a screen-level event. Window events are the controller's business
    /// and are ignored here.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Command> {
        match self.screen {
            Screen::Menu => self.handle_menu(event),
            Screen::SpeedAdjust => self.handle_speed(event),
            Screen::HighScores => {
                if *event == InputEvent::Cancel {
                    self.screen = Screen::Menu;
                }
                None
            }
            Screen::Playing => self.handle_playing(event),
            Screen::GameOver => self.handle_game_over(event),
            Screen::NameEntry => self.handle_name_entry(event),
        }
    }

    /// Feeds a simulation outcome back; only a collision changes the screen.
    pub fn on_tick(&mut self, result: TickResult) {
        if self.screen == Screen::Playing && result == TickResult::Collided {
            self.screen = Screen::GameOver;
            self.game_over_index = 0;
        }
    }

    fn handle_menu(&mut self, event: &InputEvent) -> Option<Command> {
        let len = MenuAction::ALL.len();
        match event {
            InputEvent::ArrowUp => self.menu_index = wrap_step(self.menu_index, len, false),
            InputEvent::ArrowDown => self.menu_index = wrap_step(self.menu_index, len, true),
            InputEvent::Confirm => {
                return match MenuAction::ALL[self.menu_index] {
                    MenuAction::StartGame => {
                        self.screen = Screen::Playing;
                        Some(Command::ResetGame)
                    }
                    MenuAction::ToggleFullscreen => Some(Command::ToggleFullscreen),
                    MenuAction::AdjustSpeed => {
                        self.screen = Screen::SpeedAdjust;
                        None
                    }
                    MenuAction::HighScores => {
                        self.screen = Screen::HighScores;
                        Some(Command::ShowHighScores)
                    }
                    MenuAction::Quit => Some(Command::Quit),
                };
            }
            InputEvent::Cancel => return Some(Command::Quit),
            _ => {}
        }
        None
    }

    fn handle_speed(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::ArrowLeft => Some(Command::AdjustSpeed(-1)),
            InputEvent::ArrowRight => Some(Command::AdjustSpeed(1)),
            InputEvent::Confirm | InputEvent::Cancel => {
                self.screen = Screen::Menu;
                None
            }
            _ => None,
        }
    }

    fn handle_playing(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::ArrowUp => Some(Command::SetDirection(Direction::Up)),
            InputEvent::ArrowDown => Some(Command::SetDirection(Direction::Down)),
            InputEvent::ArrowLeft => Some(Command::SetDirection(Direction::Left)),
            InputEvent::ArrowRight => Some(Command::SetDirection(Direction::Right)),
            InputEvent::Cancel => {
                self.screen = Screen::Menu;
                None
            }
            _ => None,
        }
    }

    fn handle_game_over(&mut self, event: &InputEvent) -> Option<Command> {
        let len = GameOverAction::ALL.len();
        match event {
            InputEvent::ArrowUp => self.game_over_index = wrap_step(self.game_over_index, len, false),
            InputEvent::ArrowDown => self.game_over_index = wrap_step(self.game_over_index, len, true),
            InputEvent::Confirm => match GameOverAction::ALL[self.game_over_index] {
                GameOverAction::StartAgain => {
                    self.screen = Screen::Playing;
                    return Some(Command::ResetGame);
                }
                GameOverAction::BackToMenu => self.begin_name_entry(),
            },
            InputEvent::Cancel => self.begin_name_entry(),
            _ => {}
        }
        None
    }

    fn begin_name_entry(&mut self) {
        self.name.clear();
        self.screen = Screen::NameEntry;
    }

    fn handle_name_entry(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::CharacterTyped(ch) => {
                if ch.is_alphabetic() && self.name.chars().count() < MAX_NAME_LENGTH {
                    self.name.push(*ch);
                }
                None
            }
            InputEvent::Backspace => {
                self.name.pop();
                None
            }
            InputEvent::Confirm | InputEvent::Cancel => {
                let name = if self.name.is_empty() {
                    FALLBACK_PLAYER_NAME.to_string()
                } else {
                    std::mem::take(&mut self.name)
                };
                self.screen = Screen::Menu;
                Some(Command::CommitHighScore(name))
            }
            _ => None,
        }
    }
}
