//! Window configuration for the desktop app.

use app::APP_NAME;
use dungeon_core::ScreenSize;
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    let ScreenSize { width, height } = ScreenSize::default();
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}
