use macroquad::prelude::*;
use life_canvas::{Conway, LifeConfig, MacroquadSurface, MacroquadTicker};

fn window_conf() -> Conf {
    let config = LifeConfig::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut game = Conway::new(LifeConfig::default());
    if let Err(err) = game.config().validate() {
        log::warn!("running with degenerate configuration: {}", err);
    }

    let mut surface = MacroquadSurface;
    let mut ticker = MacroquadTicker;

    game.setup(&mut surface)
        .start(&mut surface, &mut ticker)
        .await;
}
