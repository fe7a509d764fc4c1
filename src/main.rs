mod audio;
mod difficulty;
mod food;
mod game;
mod grid;
mod highscores;
mod input;
mod render;
mod settings;
mod snake;

use std::path::Path;

use anyhow::Result;
use macroquad::prelude::*;
use tracing::{error, info, warn};

use crate::audio::SoundCues;
use crate::game::Game;
use crate::grid::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::highscores::HighScoreFile;
use crate::render::Renderer;
use crate::settings::{SETTINGS_FILE, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Game".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    if let Err(err) = run().await {
        error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let settings_path = Path::new(SETTINGS_FILE);
    let mut settings = Settings::load(settings_path);
    info!(?settings, "settings loaded");

    let sounds = SoundCues::load(settings.sound_volume).await?;
    let renderer = Renderer::load(&settings.font_file).await;
    let store = HighScoreFile::new(&settings.high_score_file);
    info!(path = %store.path().display(), "using high score file");
    let mut game = Game::new(settings.difficulty, store);

    loop {
        if input::quit_requested() {
            break;
        }

        for event in input::poll() {
            game.handle_input(event);
        }

        if game.difficulty() != settings.difficulty {
            settings.difficulty = game.difficulty();
            if let Err(err) = settings.save(settings_path) {
                warn!("{err:#}");
            }
        }

        if let Some(outcome) = game.update(get_frame_time()) {
            sounds.play(outcome);
        }

        renderer.draw(&game);
        next_frame().await;
    }

    Ok(())
}
