// Imports
use pcbview_compose::{CapStyle, JoinStyle};
use pcbview_engine::{Scene, ShapeId};

pub(crate) fn run_thicken(
    scene: &mut Scene,
    shape: ShapeId,
    radius: f64,
    cap: CapStyle,
    join: JoinStyle,
    resolution: u32,
) -> anyhow::Result<()> {
    let path = scene.shape(shape)?.path;
    let registry = scene.registry_mut();
    let strip = registry.create_strip(path, radius, cap, join, resolution)?;

    println!(
        "path of shape {shape} has {} points, thickened with radius {radius}, cap {cap} and join {join} into {} vertices",
        registry.path(path)?.len(),
        registry.strip(strip)?.len()
    );
    Ok(())
}
