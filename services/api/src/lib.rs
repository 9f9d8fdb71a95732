mod cli;
mod infra;
mod report;
mod routes;
mod server;

use resilience_index::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
