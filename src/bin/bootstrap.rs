// Lambda bootstrap entry point for the summarization worker

use lambda_runtime::{Error, run, service_fn};

use docsum::core::config::AppConfig;
use docsum::worker::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    docsum::setup_logging();

    // Config is read once at startup; every invocation borrows it.
    let config = AppConfig::from_env().map_err(Error::from)?;
    let config = &config;

    run(service_fn(move |event| async move {
        function_handler(config, event).await
    }))
    .await?;

    Ok(())
}
