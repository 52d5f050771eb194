mod cli;
mod infra;
mod routes;
mod server;
mod summary;

use hr_analytics::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
