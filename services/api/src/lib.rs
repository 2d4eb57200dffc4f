mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use market_clarity::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
