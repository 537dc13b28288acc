// Main entry point
use clap::Parser;
use colored::Colorize;
use smart_translate::application::session::{self, SessionOutcome, SessionRequest};
use smart_translate::domain::model::AUTO_DETECT;
use smart_translate::infrastructure::config::{self, load_config};
use smart_translate::infrastructure::logging::init_logging;
use smart_translate::infrastructure::storage::db::init_database;
use smart_translate::interfaces::api::TranslateReply;
use smart_translate::interfaces::cli::Cli;
use smart_translate::interfaces::http::{self, ServerState};
use smart_translate::presentation::render;
use smart_translate::presentation::theme::Theme;
use smart_translate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let config_path_clone = config_path.clone();
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path_clone)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    // Setup database path (history and offline cache)
    let db_path = config::get_database_path(&config);
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_conn = init_database(&db_path).await?;
    let state = AppState::new(db_conn, config.clone())?;

    if cli.serve {
        let bind = cli.bind.clone().unwrap_or_else(|| config.server.bind.clone());
        let server_state = ServerState {
            orchestrator: state.orchestrator.clone(),
            model_name: state.model.name(),
        };
        http::serve(server_state, &bind, shutdown_signal()).await?;
        return Ok(());
    }
    if cli.status {
        print_status(&state).await?;
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.clear_history {
        state.history.clear().await?;
        println!("Translation history cleared.");
        return Ok(());
    }
    if cli.history {
        let entries = state.history.entries().await?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            print!("{}", render::format_history(&entries, &theme));
        }
        return Ok(());
    }

    // Handle text
    if cli.text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let request = SessionRequest {
        source_lang: cli.from.clone(),
        target_lang: cli.to.clone().unwrap_or_else(|| config.default_target.clone()),
        text: cli.text.join(" "),
        offline: cli.offline,
        record: !cli.nocache,
    };
    let outcome = session::translate(&state, &request).await?;

    if config.clear_screen {
        clear_screen();
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&render::outcome_json(&outcome))?
        );
    } else {
        print!(
            "{}",
            render::format_outcome(
                &outcome,
                &request.source_lang,
                &request.target_lang,
                &theme,
                config.enable_emoji,
            )
        );
    }

    // 失败时返回非零退出码
    let failed = matches!(
        outcome,
        SessionOutcome::NotCached
            | SessionOutcome::Reply(TranslateReply::Error { .. })
            | SessionOutcome::Reply(TranslateReply::Invalid { .. })
    );
    if failed {
        std::process::exit(1);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for shutdown signal: {}", e);
    } else {
        eprintln!("\nShutting down...");
    }
}

/// Clear the terminal screen
fn clear_screen() {
    // ANSI escape sequence: clear screen and move cursor to top-left
    print!("\x1B[2J\x1B[1;1H");
    std::io::Write::flush(&mut std::io::stdout()).ok();
}

async fn print_status(state: &AppState) -> anyhow::Result<()> {
    println!("{}", "smart-translate Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = state.config.read().await;
    let db_path = config::get_database_path(&config);

    let history = state.history.entries().await?;
    println!(
        "Database: {} ({}/{} history entries, {} cached translations)",
        db_path.display(),
        history.len(),
        state.history.capacity(),
        state.offline.count().await?
    );

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    println!("Model: {}", state.model.name());
    println!(
        "Confidence threshold: {}",
        state.orchestrator.threshold()
    );
    println!(
        "Default languages: {} → {}",
        AUTO_DETECT, config.default_target
    );
    if config.model.api_key.is_some() {
        println!("Model API key: Configured");
    } else {
        println!("Model API key: Not configured");
    }

    Ok(())
}
