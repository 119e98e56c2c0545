mod cli;
mod directory;
mod infra;
mod routes;
mod server;

use direct_title_loans::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
