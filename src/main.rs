use macroquad::input::prevent_quit;
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame, screen_height, screen_width};
use rand::SeedableRng;
use rand::rngs::StdRng;

use simple_snake::audio::EatCue;
use simple_snake::constants::{HIGH_SCORE_FILE, SETTINGS_FILE};
use simple_snake::input::InputSource;
use simple_snake::platform::MacroquadPlatform;
use simple_snake::render::MacroquadRenderer;
use simple_snake::{App, Flow, HighScoreStore, Renderer, Screen, SettingsStore};

fn window_conf() -> Conf {
    let settings = SettingsStore::new(SETTINGS_FILE).load();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: settings.window_size.0 as i32,
        window_height: settings.window_size.1 as i32,
        fullscreen: settings.fullscreen,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Window close goes through the normal quit path so settings get saved.
    prevent_quit();

    let viewport = (screen_width() as u32, screen_height() as u32);
    let platform = MacroquadPlatform::new(EatCue::load().await);
    let mut app = App::new(
        SettingsStore::new(SETTINGS_FILE),
        HighScoreStore::new(HIGH_SCORE_FILE),
        platform,
        StdRng::from_entropy(),
        viewport,
    );
    let mut input = InputSource::new(viewport);
    let mut renderer = MacroquadRenderer;
    let mut last_tick = get_time();

    loop {
        for event in input.poll() {
            if app.handle_event(event) == Flow::Quit {
                return;
            }
        }

        // The simulation only advances once per tick interval; other screens just redraw.
        if app.screen() == Screen::Playing {
            let now = get_time();
            if now - last_tick >= app.frame_interval().as_secs_f64() {
                last_tick = now;
                app.update();
            }
        } else {
            last_tick = get_time();
        }

        renderer.draw(&app.view());
        next_frame().await;
    }
}
