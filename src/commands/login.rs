/// ログインコマンド
///
/// Kalturaのパートナー認証情報（partner ID + admin secret + 実行ユーザーID）
/// を対話的に受け取り、管理者セッションの確立で検証してから
/// config.tomlに保存します。
use crate::api::KalturaClient;
use crate::commands::result::{CommandResult, LoginResult};
use crate::config::user::{AuthConfig, UserConfig};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// ログインコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    eprintln!("Logging in to Kaltura...\n");
    eprintln!("Please enter your partner credentials.");
    eprintln!("You can find them in the KMC under Settings > Integration Settings.\n");

    let partner_id_raw = prompt("Partner ID: ")?;
    let partner_id: i32 = partner_id_raw
        .parse()
        .with_context(|| format!("Partner ID must be a number, got '{}'", partner_id_raw))?;

    let admin_secret = prompt("Admin Secret: ")?;
    if admin_secret.is_empty() {
        anyhow::bail!("Admin Secret cannot be empty.");
    }

    let user_id = prompt("API User ID [admin]: ")?;
    let user_id = if user_id.is_empty() {
        "admin".to_string()
    } else {
        user_id
    };

    let auth = AuthConfig {
        partner_id,
        admin_secret,
        user_id,
    };

    // セッションを張って認証情報を検証
    eprintln!("\nVerifying credentials...");
    KalturaClient::connect(&auth)
        .await
        .context("Authentication failed. Please verify your partner id and admin secret.")?;

    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_auth();

    config.set_auth(auth.partner_id, auth.admin_secret, auth.user_id);
    config.save().context("Failed to save configuration file")?;

    Ok(CommandResult::Login(LoginResult {
        was_logged_in,
        partner_id,
    }))
}

/// 1行分の入力を読み取る
fn prompt(label: &str) -> Result<String> {
    eprint!("{}", label);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label.trim_end_matches(": ")))?;

    Ok(line.trim().to_string())
}
