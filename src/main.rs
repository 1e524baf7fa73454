mod content;
mod core;
mod input;
mod level;
mod movement;
mod sprites;
#[cfg(feature = "dev-tools")]
mod tuning;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Feel Lab".to_string(),
            resolution: (1280_u32, 720_u32).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::InputPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(tuning::TuningPlugin);

    app.run();
}
