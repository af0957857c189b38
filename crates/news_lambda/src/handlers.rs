pub mod get_news;
pub mod post_news;
pub mod response;
