use anyhow::Context;
use clap::{Parser, Subcommand};
use order_status_service::config::Settings;
use order_status_service::db::check_connection;
use order_status_service::infrastructure::order_repo::DieselOrderRepository;
use order_status_service::{create_pool, run_migrations, OrderService, OrderStatus};

#[derive(Debug, Parser)]
#[command(name = "order-status", version, about = "Inspect and update order statuses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Set the status of an existing order
    SetStatus {
        order_id: String,
        /// One of PENDING, CONFIRMED, PROCESSING, SHIPPED, DELIVERED, CANCELLED
        status: OrderStatus,
    },
    /// Print an order as JSON
    Show { order_id: String },
    /// Apply pending database migrations
    Migrate,
    /// Check database connectivity
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(&settings.log_filter));

    let pool = create_pool(&settings.database_url, settings.pool_size)
        .context("Failed to create database connection pool")?;

    match cli.command {
        Command::Migrate => {
            let applied = run_migrations(&pool)?;
            log::info!("Applied {} migration(s)", applied);
        }
        Command::Ping => {
            check_connection(&pool)
                .await
                .context("Database connectivity check failed")?;
            println!("{}", OrderService::<DieselOrderRepository>::health_message());
        }
        Command::Show { order_id } => {
            let service = OrderService::new(DieselOrderRepository::new(pool));
            match service.get_order(&order_id).await? {
                Some(order) => println!("{}", serde_json::to_string_pretty(&order)?),
                None => anyhow::bail!("Order {} not found", order_id),
            }
        }
        Command::SetStatus { order_id, status } => {
            let service = OrderService::new(DieselOrderRepository::new(pool));
            service.update_status(&order_id, status).await?;
            println!("Order {} is now {}", order_id, status);
        }
    }

    Ok(())
}
