use pipelinenotifier::{config, logger};

fn main() {
    logger::init_tracing();

    let webhook_config = match config::load() {
        Ok(webhook_config) => webhook_config,
        Err(e) => {
            tracing::error!(variable = e.variable(), "Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        pipeline_name = webhook_config.pipeline_name(),
        pipeline_url = %webhook_config.pipeline_url(),
        "Loaded webhook configuration"
    );
}
