// Imports
use pcbview_engine::Scene;

pub(crate) fn run_inspect(scene: &Scene) -> anyhow::Result<()> {
    let config = scene.registry().config();
    let grid = scene.registry().grid();
    println!(
        "canvas {}x{}, grid {}x{} cells, {} collidable segments",
        config.width,
        config.height,
        grid.cols(),
        grid.rows(),
        grid.len()
    );

    for item in scene.draw_list()? {
        let [r, g, b, _] = item.color.as_rgba_f32();
        println!(
            "shape {id}: offset ({x}, {y}), color ({r:.1}, {g:.1}, {b:.1}), outline {n_outline} points, fill {n_fill} vertices",
            id = item.id,
            x = item.offset[0],
            y = item.offset[1],
            n_outline = item.outline.len(),
            n_fill = item.fill.len(),
        );
    }
    Ok(())
}
