pub mod dynamodb;
pub mod news_store;
