mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use dhara::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
