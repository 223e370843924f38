pub mod api;
pub mod pages;

pub use api::{linked_video_seek, video_search_url};
pub use pages::{home, metaverse, not_found, video_search};
