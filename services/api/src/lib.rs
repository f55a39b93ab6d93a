mod aptitude;
mod cli;
mod infra;
mod routes;
mod server;

use atomik::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
