//! Surface chart demo: mesh a synthetic height grid and poke at it.
//!
//! Run with: cargo run --example surface_chart_demo

use chartscope::*;

fn main() -> Result<()> {
    init()?;

    // Synthetic terrain: crossed sine ridges on a 32x32 grid.
    let (width, height) = (32u32, 32u32);
    let mut samples = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for col in 0..width {
            let x = f64::from(col) / f64::from(width - 1) * std::f64::consts::TAU;
            let z = f64::from(row) / f64::from(height - 1) * std::f64::consts::TAU;
            let level = (x.sin() + z.cos() + 2.0) / 4.0 * 255.0;
            samples.push(level as u8);
        }
    }

    let chart = SurfaceChart::new(width, height, samples, Rgba::new(16, 16, 24, 255));
    let layout = SceneLayout::for_chart(Some(&chart), &options());
    println!(
        "scene: clear color {:?}, plane scale {:?}",
        layout.clear_color, layout.plane_scale
    );

    set_chart(chart)?;
    process_frame()?;

    let mesh = current_mesh().expect("mesh committed");
    println!(
        "mesh: {} triangles, {} bytes of vertex data",
        mesh.triangle_count(),
        mesh.as_bytes().len()
    );

    // Drop a pick ray through the middle of the surface.
    let ray = Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
    match pick(&ray) {
        Some(hit) => println!(
            "pick hit triangle {} at {:?} (t = {:.2})",
            hit.triangle, hit.position, hit.t
        ),
        None => println!("pick missed the surface"),
    }

    // Nudge the chart the way a short drag would.
    rotate_chart(Vec2::new(30.0, 12.0));
    println!("rotation after drag: {:?}", chart_rotation());

    shutdown();
    Ok(())
}
