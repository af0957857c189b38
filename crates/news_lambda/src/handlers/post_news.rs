use news_core::contract::{parse_post_request, NewsEntry, RequestError};
use news_core::ids::{NanosClock, NewsIdGenerator};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::adapters::news_store::NewsStore;
use crate::handlers::response::{ApiGatewayResponse, MALFORMED_WRITE_METHODS, WRITE_METHODS};

pub const POSTED_MESSAGE: &str = "News posted successfully";
pub const POST_FAILED_MESSAGE: &str = "Failed to post news";

/// Validates a proxy event and stores one new entry.
///
/// Every call that passes validation inserts a fresh record, so a retried
/// request produces a second entry with its own id.
pub fn handle_post_news<C: NanosClock>(
    event: &Value,
    store: &impl NewsStore,
    ids: &NewsIdGenerator<C>,
) -> ApiGatewayResponse {
    let body = request_body(event);
    info!(component = "post_news", event = "request_received", body = %body);

    let text = match parse_post_request(&body) {
        Ok(text) => text,
        Err(rejection) => return rejection_response(rejection),
    };

    let entry = match NewsEntry::create(text, ids) {
        Ok(entry) => entry,
        Err(clock_error) => {
            error!(
                component = "post_news",
                event = "id_generation_failed",
                error = %clock_error,
                "failed to generate news id"
            );
            return ApiGatewayResponse::with_cors(500, WRITE_METHODS, POST_FAILED_MESSAGE);
        }
    };

    if let Err(store_error) = store.put_item(&entry.to_record()) {
        error!(
            component = "post_news",
            event = "put_failed",
            news_id = %entry.news_id,
            error = %store_error,
            "failed to add news item"
        );
        return ApiGatewayResponse::with_cors(500, WRITE_METHODS, POST_FAILED_MESSAGE);
    }

    info!(
        component = "post_news",
        event = "news_posted",
        news_id = %entry.news_id
    );
    ApiGatewayResponse::with_cors(200, WRITE_METHODS, POSTED_MESSAGE)
}

/// Body text of a proxy event. A missing or null body reads as empty.
fn request_body(event: &Value) -> String {
    match event.get("body") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn rejection_response(rejection: RequestError) -> ApiGatewayResponse {
    match &rejection {
        RequestError::InvalidFormat(source) => {
            warn!(
                component = "post_news",
                event = "invalid_request",
                error = %source,
                "failed to parse request body"
            );
            ApiGatewayResponse::with_cors(400, MALFORMED_WRITE_METHODS, rejection.to_string())
        }
        RequestError::MissingNews => {
            warn!(
                component = "post_news",
                event = "missing_news",
                "request body has no news field"
            );
            ApiGatewayResponse::with_cors(400, WRITE_METHODS, rejection.to_string())
        }
    }
}
