/// ステータスコマンド
///
/// 保存されている認証情報で実際にセッションを張り、
/// 認証が通るかどうかを確認します。
use crate::api::KalturaClient;
use crate::commands::result::{CommandResult, StatusResult};
use crate::config::UserConfig;
use anyhow::{Context, Result};

/// ステータスコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let config = UserConfig::load().context("Failed to load configuration file")?;

    let Ok(auth) = config.get_auth() else {
        return Ok(CommandResult::Status(StatusResult {
            is_authenticated: false,
            partner_id: None,
            user_id: None,
        }));
    };

    // 実際にセッションを張って検証する。失敗は「未認証」であって
    // コマンドの失敗ではない。
    let result = match KalturaClient::connect(auth).await {
        Ok(client) => {
            let session = client.session();
            StatusResult {
                is_authenticated: true,
                partner_id: Some(session.partner_id()),
                user_id: Some(session.user_id().to_string()),
            }
        }
        Err(_) => StatusResult {
            is_authenticated: false,
            partner_id: Some(auth.partner_id),
            user_id: Some(auth.user_id.clone()),
        },
    };

    Ok(CommandResult::Status(result))
}
