use hello_responder::configuration::get_configuration;
use hello_responder::startup::build;
use hello_responder::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("hello-responder".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
