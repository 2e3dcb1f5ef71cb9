use anyhow::Context;
use clap::Parser;
use group_outcomes::utils::{logger, validation::Validate};
use group_outcomes::{CliConfig, DataDirectory, OutcomeEngine, OutcomeError, Settings};
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 合併設定檔與命令列參數
    let settings = match Settings::from_cli(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Settings: {:?}", settings);

    if !settings.colour {
        colored::control::set_override(false);
    }
    tracing::debug!(
        "Colour output: {}",
        settings.colour && colored::control::SHOULD_COLORIZE.should_colorize()
    );

    let source = DataDirectory::new(settings.dataset_dir());
    tracing::info!("📁 Reading dataset from: {}", source.path().display());
    let engine = OutcomeEngine::new(source);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match engine.run(&settings, &mut out) {
        Ok(summary) => {
            tracing::info!(
                "✅ Printed {} outcomes for {} groups",
                summary.snapshots,
                summary.groups
            );
        }
        Err(e) => exit_with(e),
    }
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

fn exit_with(e: OutcomeError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
