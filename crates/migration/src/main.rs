use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match migration::db::load_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    };

    // Safe: set before the runtime spawns any other task
    unsafe {
        std::env::set_var("DATABASE_URL", config.build_connection_string());
    }
    cli::run_cli(migration::Migrator).await;
}
