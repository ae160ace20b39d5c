/// ログアウトコマンド
///
/// 保存されているパートナー認証情報をconfig.tomlから削除します。
use crate::commands::result::{CommandResult, LogoutResult};
use crate::config::UserConfig;
use anyhow::{Context, Result};

/// ログアウトコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let mut config = UserConfig::load().context("Failed to load configuration file")?;

    let was_logged_in = config.has_auth();
    if was_logged_in {
        config.clear_auth();
        config.save().context("Failed to save configuration file")?;
    }

    Ok(CommandResult::Logout(LogoutResult { was_logged_in }))
}
