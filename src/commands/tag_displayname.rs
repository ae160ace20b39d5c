/// 表示名タグ付与コマンド
///
/// 動画の所有者から `displayname_<owner>` タグを生成して付与します。
/// 既に付与済みの場合は変更なしとして成功終了します（冪等）。
use crate::commands;
use crate::commands::result::{CommandResult, TagDisplayNameResult};
use anyhow::{Context, Result};

/// 表示名タグ付与コマンドを実行
///
/// # 引数
/// * `entry_id` - 対象のエントリID
pub async fn execute(entry_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let outcome = client
        .tag_video_with_display_name(entry_id)
        .await
        .with_context(|| format!("Failed to tag entry '{}'", entry_id))?;

    Ok(CommandResult::TagDisplayName(TagDisplayNameResult {
        entry_id: entry_id.to_string(),
        outcome,
    }))
}
