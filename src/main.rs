mod backend;
mod frontend;

use crate::backend::auth::AuthConfig;
use crate::frontend::app::AppRoot;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use env_logger::Env;

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(Env::default().default_filter_or("warn,hyper=warn,h2=warn"))
        .init();

    let config = AuthConfig::from_env();

    // CLI mode
    if std::env::args().nth(1).as_deref() == Some("whoami") {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to create runtime")?;
        return rt.block_on(backend::cli::whoami(&config));
    }

    let size = LogicalSize::new(960.0, 640.0);

    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Dream Account")
                .with_inner_size(size)
                .with_min_inner_size(size),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .launch(AppRoot);

    Ok(())
}
