pub mod prefabs;
pub mod test_scene;

pub use prefabs::{spawn_player, spawn_static_box, PlayerSpawn};
pub use test_scene::{load_tower_scene, player_start, TOWER_HALF_WIDTH};
