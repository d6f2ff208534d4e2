pub mod awards;
pub mod db;
pub mod ingest;
pub mod models;
pub mod web;
