use bevy::prelude::AppExit;

fn main() -> AppExit {
    combat_dodge::game::run()
}
