//! tests/api/helpers.rs

use hello_responder::configuration::{get_configuration, Settings};
use hello_responder::startup::build;
use hello_responder::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::time::Duration;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub address: String,
    pub port: u16,
    pub config: Settings,
    client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::Response {
        self.client
            .request(method, &format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn test_configuration() -> Settings {
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    let mut config = test_configuration();

    // Launch the server
    let app = build(config.clone()).expect("Failed to build server.");
    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);
    config.application.port = port;

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client.");

    Test {
        address,
        port,
        config,
        client,
    }
}
