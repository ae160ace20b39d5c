mod api;
mod cli;
mod commands;
mod config;
mod domain;
mod error_severity;
mod presentation;

use crate::api::error::ApiError;
use crate::config::error::ConfigError;
use crate::config::APP_CONFIG;
use crate::domain::error::DomainError;
use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let (machine_output, args) = extract_machine_flag(args);

    match run(&args).await {
        Ok(Some(result)) => {
            if let Err(e) = presentation::output::output_result(&result, machine_output) {
                handle_error(e, machine_output);
            }
        }
        Ok(None) => {}
        Err(e) => handle_error(e, machine_output),
    }
}

/// ログ出力を初期化する
///
/// RUST_LOGが設定されていればそれを優先し、
/// 無ければ埋め込み設定のログレベルを使う。ログはstderrへ。
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&APP_CONFIG.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// グローバルフラグ --machine を引数列から抜き出す
fn extract_machine_flag(args: Vec<String>) -> (bool, Vec<String>) {
    let machine = args.iter().any(|arg| arg == "--machine");
    let rest = args.into_iter().filter(|arg| arg != "--machine").collect();
    (machine, rest)
}

/// アプリケーションのメイン処理
async fn run(args: &[String]) -> Result<Option<commands::CommandResult>> {
    cli::parse_args(args).await
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    if machine_output {
        let json = serde_json::json!({
            "success": false,
            "error": format!("{:#}", error),
            "exit_code": exit_code,
            "hint": hint,
        });
        // 機械可読エラーはstdoutへ（成功時と同じチャネル）
        println!("{}", json);
    } else {
        eprintln!("Error: {}", error);

        // エラーチェーンを辿って詳細を表示
        let chain: Vec<_> = error.chain().skip(1).collect();
        if !chain.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in chain.iter().enumerate() {
                eprintln!("  {}: {}", i + 1, cause);
            }
        }

        if let Some(hint) = hint {
            eprintln!("\nHint: {}", hint);
        }
    }

    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            return domain_err.severity().exit_code();
        }

        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            return api_err.severity().exit_code();
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 不明なエラーの場合はデフォルトの終了コード
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            if let Some(hint) = domain_err.hint() {
                return Some(hint.to_string());
            }
        }

        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            if let Some(hint) = api_err.hint() {
                return Some(hint.to_string());
            }
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            if let Some(hint) = config_err.hint() {
                return Some(hint.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_machine_flag() {
        let (machine, rest) = extract_machine_flag(vec![
            "--machine".to_string(),
            "status".to_string(),
        ]);
        assert!(machine);
        assert_eq!(rest, vec!["status".to_string()]);

        let (machine, rest) = extract_machine_flag(vec!["status".to_string()]);
        assert!(!machine);
        assert_eq!(rest, vec!["status".to_string()]);
    }

    #[test]
    fn test_exit_code_from_domain_error() {
        let error = anyhow::Error::new(DomainError::user_not_found("ghost"))
            .context("Ownership transfer failed");
        assert_eq!(determine_exit_code(&error), 1);
    }

    #[test]
    fn test_exit_code_from_api_error() {
        let error = anyhow::Error::new(ApiError::network("connection refused"));
        assert_eq!(determine_exit_code(&error), 3);
    }

    #[test]
    fn test_exit_code_from_config_error() {
        let error = anyhow::Error::new(ConfigError::validation_error("bad partner id"));
        assert_eq!(determine_exit_code(&error), 2);
    }

    #[test]
    fn test_hint_surfaces_through_context_chain() {
        let error = anyhow::Error::new(DomainError::owner_not_found("0_abc", "ghost"))
            .context("Ownership transfer failed");
        let hint = get_error_hint(&error);
        assert!(hint.unwrap().contains("user-add"));
    }
}
