pub mod config;

use config::FixtureConfig;
use config_rs::{Config, File};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixture=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        warn!("only one parameter, the config file, is expected.");
        warn!("got {}", args.join(","));
    } else if let Some(cfg_name) = args.get(1).map(|o| o.as_str()) {
        let config_res = Config::builder()
            .add_source(File::with_name(cfg_name))
            .build()
            .and_then(|config| config.try_deserialize::<FixtureConfig>());

        match config_res {
            Ok(config) => {
                info!("fixture bring-up check starting!");
                if let Some(ref name) = config.metadata.name {
                    info!("name: {name}")
                }
                if let Some(ref descrip) = config.metadata.description {
                    info!("description: {descrip}")
                }
                match config.run_check() {
                    Ok(_) => info!("bring-up check done!"),
                    Err(err) => error!("bring-up check exited with an error: {:?}", err),
                }
            }
            Err(err) => {
                error!(
                    "Error starting bring-up check. Failed to parse config: {:?}",
                    err
                );
            }
        }
    }
}
