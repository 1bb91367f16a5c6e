//! Out-of-band admin provisioning. There is no HTTP route for this.
//!
//!   admin-cli add <name> <email>     (password read from ADMIN_PASSWORD)
//!   admin-cli remove <email>

use account_auth::config::EnvConfig;
use account_auth::db::postgres_service::PostgresService;
use account_auth::utils::password::CredentialHasher;
use account_auth::AppState;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

const USAGE: &str = "usage: admin-cli add <name> <email> | admin-cli remove <email>";

enum Command {
    Add { name: String, email: String },
    Remove { email: String },
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [cmd, name, email] if cmd == "add" => Some(Command::Add { name: name.clone(), email: email.clone() }),
        [cmd, email] if cmd == "remove" => Some(Command::Remove { email: email.clone() }),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = EnvConfig::from_env()?;
    let store = PostgresService::new(&config.database).await?;
    let hasher = CredentialHasher::new(&config.hashing)?;
    let state = AppState::new(Arc::new(store), hasher, config.store_timeout);

    match command {
        Command::Add { name, email } => {
            let password = env::var("ADMIN_PASSWORD").map_err(|_| "ADMIN_PASSWORD not set")?;
            let admin = state.provisioning.create_admin(&name, &email, &password).await?;
            println!("Admin {} ({}) provisioned.", admin.email, admin.id);
        }
        Command::Remove { email } => {
            state.provisioning.deactivate_admin(&email).await?;
            println!("Admin {email} deactivated.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
