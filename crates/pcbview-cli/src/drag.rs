// Imports
use pcbview_engine::{PointerEvent, Scene};

pub(crate) fn run_drag(
    scene: &mut Scene,
    from: na::Vector2<f64>,
    to: na::Vector2<f64>,
    steps: u32,
) -> anyhow::Result<()> {
    scene.handle_pointer(PointerEvent::Pressed { pos: from })?;
    let Some(id) = scene.dragged() else {
        println!("nothing to drag at ({}, {})", from[0], from[1]);
        return Ok(());
    };
    let old_offset = scene.shape(id)?.offset;

    let steps = steps.max(1);
    for i in 1..=steps {
        let pos = from.lerp(&to, f64::from(i) / f64::from(steps));
        scene.handle_pointer(PointerEvent::Pressed { pos })?;
    }
    scene.handle_pointer(PointerEvent::Released)?;

    let new_offset = scene.shape(id)?.offset;
    println!(
        "dragged shape {id} from offset ({}, {}) to ({}, {})",
        old_offset[0], old_offset[1], new_offset[0], new_offset[1]
    );
    match scene.registry_mut().hit_test(to) {
        Some(hit) => println!("hit shape {hit} at ({}, {})", to[0], to[1]),
        None => println!("nothing hit at ({}, {})", to[0], to[1]),
    }
    Ok(())
}
