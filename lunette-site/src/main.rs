mod app;
mod components;
mod config;
mod model;
mod pages;

use app::Root;
use config::MotionOptions;
use lunette_core::Application;

fn main() -> anyhow::Result<()> {
    let _ = lunette_core::telemetry::init_tracing();

    let options = MotionOptions::load();
    Application::new().run(move |cx| {
        cx.set_root(Root::new(cx, options))?;
        Ok(())
    })
}
