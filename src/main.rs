use mimalloc::MiMalloc;
use name_loader::{
    Config,
    config::DEFAULT_LOGLEVEL,
    service::Sources,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_tracing(loglevel: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env();
    init_tracing(
        cfg.as_ref()
            .map(|c| c.loglevel.as_str())
            .unwrap_or(DEFAULT_LOGLEVEL),
    );

    let result = match cfg {
        Ok(cfg) => name_loader::run(&cfg, &Sources::default()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            info!(
                schema = ?report.schema,
                first_names = report.first_names.inserted,
                last_names = report.last_names.inserted,
                "load complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "load failed");
            ExitCode::FAILURE
        }
    }
}
