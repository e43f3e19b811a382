use config::Config;
use generator::generate_claim_pairs;
use logger::init_default_logger;
use utils::prompt_salt;

mod config;
mod constants;
mod deriver;
mod error;
mod generator;
mod logger;
mod utils;
mod validator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let _guard = init_default_logger();

    let config = Config::read_default().await?;
    let salt = prompt_salt().await?;

    generate_claim_pairs(&config, &salt).await?;

    Ok(())
}
