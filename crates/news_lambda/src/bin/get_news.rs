use lambda_runtime::{service_fn, Error, LambdaEvent};
use news_lambda::adapters::dynamodb::DynamoDbNewsStore;
use news_lambda::config::NewsTableConfig;
use news_lambda::handlers::get_news::handle_get_news;
use news_lambda::handlers::response::ApiGatewayResponse;
use news_lambda::telemetry::init_logging;
use serde_json::Value;
use tracing::info;

async fn handle_request(
    store: &DynamoDbNewsStore,
    _event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_get_news(store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = NewsTableConfig::from_env();
    let store = DynamoDbNewsStore::connect(&config).await;
    info!(
        component = "get_news",
        event = "cold_start",
        table = %config.table_name,
        region = %config.region
    );

    lambda_runtime::run(service_fn(|event| handle_request(&store, event))).await
}
