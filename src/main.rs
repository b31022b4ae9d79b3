use clap::Parser;
use jp_prev_bizday::utils::{logger, validation::Validate};
use jp_prev_bizday::{app, CliConfig, Result};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // ログ初期化
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.debug);
    }
    tracing::debug!("CLI config: {:?}", config);

    match execute(&config).await {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("エラー: {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

async fn execute(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let base = config.base_date()?;
    let settings = config.settings()?;
    tracing::debug!("Settings: {:?}", settings);

    app::run(&settings, base, config.verbose).await
}
