use news_core::ordering::sort_newest_first;
use tracing::{error, info};

use crate::adapters::news_store::NewsStore;
use crate::handlers::response::{ApiGatewayResponse, READ_METHODS};

/// Lists every stored entry, newest first.
///
/// The request itself carries nothing the listing depends on. Records are
/// returned in their stored attribute shape.
pub fn handle_get_news(store: &impl NewsStore) -> ApiGatewayResponse {
    let mut records = match store.scan_all() {
        Ok(records) => records,
        Err(error) => {
            error!(
                component = "get_news",
                event = "scan_failed",
                error = %error,
                "failed to scan news table"
            );
            return ApiGatewayResponse::with_cors(
                500,
                READ_METHODS,
                format!("Error scanning DynamoDB: {error}"),
            );
        }
    };

    if records.is_empty() {
        info!(component = "get_news", event = "news_listed", count = 0);
        return ApiGatewayResponse::with_cors(200, READ_METHODS, "[]");
    }

    sort_newest_first(&mut records);

    match serde_json::to_string(&records) {
        Ok(body) => {
            info!(
                component = "get_news",
                event = "news_listed",
                count = records.len()
            );
            ApiGatewayResponse::with_cors(200, READ_METHODS, body)
        }
        Err(error) => {
            error!(
                component = "get_news",
                event = "serialization_failed",
                error = %error,
                "failed to serialize news items"
            );
            ApiGatewayResponse::with_cors(
                500,
                READ_METHODS,
                format!("Error marshaling news items: {error}"),
            )
        }
    }
}
