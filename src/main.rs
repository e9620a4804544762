use clap::Parser;
use navigation_page::adapters::{EventDispatcher, LoggingSubscriber};
use navigation_page::utils::{logger, validation::Validate};
use navigation_page::{CliConfig, NavigationPageLoader, StorefrontConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting navigation-page CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = StorefrontConfig::from_file(&cli.config)?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let loader = NavigationPageLoader::new(
        config.page_loader()?,
        config.cms_page_repository(),
        config.slot_data_resolver()?,
        EventDispatcher::new().with_subscriber(Box::new(LoggingSubscriber)),
    );

    match loader.load(&cli.request(), &config.context).await {
        Ok(page) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&page)?
            } else {
                serde_json::to_string(&page)?
            };
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Page assembly failed: {}", e);
            eprintln!("❌ {}", e);

            // not-found 與其他錯誤使用不同的退出碼
            let exit_code = if e.is_not_found() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
