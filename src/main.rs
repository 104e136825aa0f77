mod allocator;
mod app;
mod charset;
mod config;
mod encoder;
mod file;
mod processor;
mod stream;
mod types;
mod ui;

use crate::app::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    App::init()?.execute().await
}
