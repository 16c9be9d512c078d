use clap::Parser;
use ean_scan::utils::{logger, validation::Validate};
use ean_scan::{ean, CliConfig, LineSource, ScanEngine, ScanOptions, Validation, WedgeSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ean-scan CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let options = match config.resolve() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("❌ Failed to resolve scan options: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.codes.is_empty() {
        scan_stream(&options).await
    } else {
        validate_batch(&config.codes, &options)
    }
}

/// Validate codes given on the command line; exit 1 if any is rejected.
fn validate_batch(codes: &[String], options: &ScanOptions) -> anyhow::Result<()> {
    let mut all_valid = true;

    if options.emit_json {
        let results: Vec<serde_json::Value> = codes
            .iter()
            .map(|code| {
                let outcome = ean::classify(code);
                all_valid &= outcome.is_valid();
                serde_json::json!({ "code": code, "result": outcome })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for code in codes {
            match ean::classify(code) {
                Validation::Valid { symbology } => println!("✅ {} ({})", code, symbology),
                outcome => {
                    all_valid = false;
                    println!("❌ {} ({:?})", code, outcome);
                }
            }
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Read candidates from stdin until the first valid one.
async fn scan_stream(options: &ScanOptions) -> anyhow::Result<()> {
    let report = if options.wedge {
        tracing::info!("Scanning stdin in keyboard-wedge mode");
        let source = WedgeSource::new(tokio::io::stdin());
        ScanEngine::from_config(source, options).run().await?
    } else {
        tracing::info!("Scanning stdin, one candidate per line");
        let source = LineSource::stdin();
        ScanEngine::from_config(source, options).run().await?
    };

    match report {
        Some(report) => {
            if options.emit_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("✅ {} ({})", report.code, report.symbology);
                if report.rejected > 0 {
                    println!("   rejected {} candidate(s) before the match", report.rejected);
                }
            }
            Ok(())
        }
        None => {
            tracing::warn!("No valid candidate found before the stream ended");
            eprintln!("❌ No valid EAN code found");
            std::process::exit(1);
        }
    }
}
