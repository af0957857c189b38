use lambda_runtime::{service_fn, Error, LambdaEvent};
use news_core::ids::{NewsIdGenerator, SystemClock};
use news_lambda::adapters::dynamodb::DynamoDbNewsStore;
use news_lambda::config::NewsTableConfig;
use news_lambda::handlers::post_news::handle_post_news;
use news_lambda::handlers::response::ApiGatewayResponse;
use news_lambda::telemetry::init_logging;
use serde_json::Value;
use tracing::info;

struct RuntimeDependencies {
    store: DynamoDbNewsStore,
    ids: NewsIdGenerator<SystemClock>,
}

async fn handle_request(
    deps: &RuntimeDependencies,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_post_news(&event.payload, &deps.store, &deps.ids))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = NewsTableConfig::from_env();
    let deps = RuntimeDependencies {
        store: DynamoDbNewsStore::connect(&config).await,
        ids: NewsIdGenerator::new(SystemClock),
    };
    info!(
        component = "post_news",
        event = "cold_start",
        table = %config.table_name,
        region = %config.region
    );

    lambda_runtime::run(service_fn(|event| handle_request(&deps, event))).await
}
