pub mod adapter;
pub mod article;
pub mod layout;
pub mod logging;
pub mod tally;
pub mod timeline;

pub const TARGET_LAYOUT: &str = "pin_layout";
pub const TARGET_TALLY: &str = "vote_tally";
pub const TARGET_ADAPTER: &str = "feed_adapter";
