pub mod client;

pub use client::*;

pub async fn health() -> &'static str {
    "OK"
}
