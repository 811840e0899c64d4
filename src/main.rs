use anyhow::Context;
use orbitdeck::nav::{self, NavModel, RoutePath};
use orbitdeck::orbit::FeatureRegistry;
use orbitdeck::session::{DashboardSession, LogCommandHandler, LogRouter};
use orbitdeck::{config, sys};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // first run: give the user a config file to edit
    if let Ok(path) = config::get_config_path()
        && !path.exists()
    {
        if let Err(e) = config::write_default_config() {
            log::warn!("Could not write default config: {}", e);
        }
    }

    let config = config::load_or_default();
    let registry = FeatureRegistry::from_config(&config).context("invalid ring configuration")?;
    let nav = NavModel::new(nav::default_entries(), RoutePath::new("/host"));

    // identity collaborator stub: display name from the environment
    let display_name = std::env::var("ORBITDECK_HOST_NAME").ok();

    let (tx, rx) = async_channel::bounded(32);
    sys::runtime::start_background_services(tx.clone());

    let session = DashboardSession::new(registry, nav, LogRouter, LogCommandHandler, display_name);
    log::info!("orbitdeck up as {}", session.avatar_label());

    let rt = tokio::runtime::Runtime::new().context("failed to create runtime")?;
    rt.block_on(session.run(rx));
    Ok(())
}
