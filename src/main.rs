use clap::Parser;
use sinhala_translit::utils::{logger, validation::Validate};
use sinhala_translit::{transliterate_to_sinhala, CliConfig, ErrorCategory, TranslitError};
use std::io::Write;

fn exit_code(e: &TranslitError) -> i32 {
    match e.category() {
        ErrorCategory::Configuration => 1,
        ErrorCategory::Transport => 2,
        ErrorCategory::DataShape => 3,
    }
}

// One stderr report per failure.
fn fail(e: TranslitError) -> ! {
    tracing::debug!("Failure category: {:?}", e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // The file may carry logging settings, so it is read before the logger exists.
    let toml = match cli.load_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    let json_logs = cli.json_logs || toml.as_ref().is_some_and(|t| t.json_logs());
    if json_logs {
        let level = if cli.verbose {
            "debug"
        } else {
            toml.as_ref().map_or("info", |t| t.log_level())
        };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = cli.translator_config(toml);
    tracing::debug!("Translator config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let texts = cli.read_texts(std::io::stdin().lock()).unwrap_or_else(|e| fail(e));
    tracing::info!("Transliterating {} text(s)", texts.len());

    match transliterate_to_sinhala(&config, &texts).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            for line in output {
                writeln!(stdout, "{}", line)?;
            }
        }
        Err(e) => fail(e),
    }

    Ok(())
}
