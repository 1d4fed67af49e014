use std::error::Error;
use subnet_calc::cmd::CommandLine;
use subnet_calc::config::{init_logging, Config};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let cli = CommandLine::parse_args();
    subnet_calc::run(cli, &config)?;

    Ok(())
}
