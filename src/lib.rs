pub mod api;
pub mod db;
pub mod echo;
pub mod paths;
