use clap::Parser;
use portfolio_site::utils::error::ErrorSeverity;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{run_oneshot, serve, AppState, LogFormat, PortfolioError, ServerConfig};

fn exit_with(e: &PortfolioError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting portfolio-site");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置: 沒有密鑰就不啟動
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let state = match AppState::bootstrap(&config) {
        Ok(state) => state,
        Err(e) => exit_with(&e),
    };

    match run_oneshot(&config, &state).await {
        Ok(Some(output)) => {
            println!("{}", output);
            return Ok(());
        }
        Ok(None) => {}
        Err(e) => exit_with(&e),
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve(listener, state).await
}
