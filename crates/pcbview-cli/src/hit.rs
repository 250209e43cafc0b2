// Imports
use pcbview_engine::Scene;

pub(crate) fn run_hit(scene: &mut Scene, pos: na::Vector2<f64>) {
    match scene.registry_mut().hit_test(pos) {
        Some(id) => println!("hit shape {id} at ({}, {})", pos[0], pos[1]),
        None => println!("nothing hit at ({}, {})", pos[0], pos[1]),
    }
}
