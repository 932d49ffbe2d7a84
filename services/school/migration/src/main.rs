use sea_orm_migration::prelude::*;

use campus_school_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
