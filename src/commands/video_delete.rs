/// 動画削除コマンド
///
/// 削除の失敗はそのままエラーとして伝播します。
use crate::commands;
use crate::commands::result::{CommandResult, VideoDeleteResult};
use anyhow::{Context, Result};

/// 動画削除コマンドを実行
///
/// # 引数
/// * `entry_id` - 削除するエントリID
pub async fn execute(entry_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    client
        .delete_video(entry_id)
        .await
        .with_context(|| format!("Failed to delete entry '{}'", entry_id))?;

    Ok(CommandResult::VideoDelete(VideoDeleteResult {
        entry_id: entry_id.to_string(),
    }))
}
