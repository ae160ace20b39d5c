/// 動画所有者表示コマンド
///
/// エントリの所有者ユーザーIDを取得します。
/// エントリが存在しない場合はエラーになります（番兵値は返さない）。
use crate::commands;
use crate::commands::result::{CommandResult, VideoOwnerResult};
use anyhow::{Context, Result};

/// 動画所有者表示コマンドを実行
///
/// # 引数
/// * `entry_id` - 対象のエントリID
pub async fn execute(entry_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let owner_id = client
        .video_owner_id(entry_id)
        .await
        .with_context(|| format!("Failed to resolve the owner of '{}'", entry_id))?;

    Ok(CommandResult::VideoOwner(VideoOwnerResult {
        entry_id: entry_id.to_string(),
        owner_id,
    }))
}
