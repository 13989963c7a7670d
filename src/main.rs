use customer_crud::{
    config::{LogFormat, Settings},
    http,
    store::DynamoStore,
};

use lambda_http::{Error, run, service_fn};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match settings.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::load()?;
    init_logging(&settings);

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);
    let store = DynamoStore::new(client, settings.customers_table_name);
    tracing::info!("customer service ready");

    run(service_fn(|request| http::route(&store, request))).await
}
