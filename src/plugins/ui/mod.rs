//! HUD (render-only): score, lives and the game-over banner.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Scoreboard;

#[derive(Component, Debug, Clone, Copy)]
pub struct HudText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Running), spawn_hud)
        .add_systems(OnEnter(GameState::GameOver), spawn_banner)
        .add_systems(Update, refresh_hud);
}

pub fn hud_line(board: &Scoreboard) -> String {
    format!("Score: {}   Lives: {}", board.score, board.lives)
}

fn spawn_hud(mut commands: Commands, board: Res<Scoreboard>) {
    commands.spawn((
        Name::new("Hud"),
        HudText,
        Text::new(hud_line(&board)),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

fn spawn_banner(mut commands: Commands) {
    commands.spawn((
        Name::new("GameOverBanner"),
        Text::new("GAME OVER"),
        TextColor(Color::srgb(0.95, 0.3, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(46.0),
            left: Val::Percent(44.0),
            ..default()
        },
    ));
}

fn refresh_hud(board: Res<Scoreboard>, mut q: Query<&mut Text, With<HudText>>) {
    if !board.is_changed() {
        return;
    }
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    text.0 = hud_line(&board);
}
