use floorplan::{
    export::{DirectorySink, SvgDecoder},
    image::RenderingOpts,
    FloorPlanView, PlanConfig,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlanConfig::default();
    config.validate()?;
    log::info!("Scale: 1 ft = {}px", config.scale.px_per_foot());

    let mut view = FloorPlanView::new(config, RenderingOpts::default());
    view.render();

    // Write both files next to wherever we were run from
    let mut sink = DirectorySink::new(".");
    view.download_svg(&mut sink)?;
    view.download_png(&SvgDecoder::with_system_fonts(), &mut sink)?;
    Ok(())
}
