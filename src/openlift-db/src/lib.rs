mod db;
pub use db::DatabaseHandler;

mod algo_impl;
mod type_impl;

pub use type_impl::sessions::SearchSessions;
