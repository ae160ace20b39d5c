/// 更新日時変更コマンド
///
/// 指定タイムスタンプが保存値より厳密に新しい場合のみ更新します。
/// 新しくない場合は「更新せず」を成功として報告します。
use crate::commands;
use crate::commands::result::{CommandResult, TouchResult};
use crate::domain::formatter::parse_timestamp_arg;
use anyhow::{Context, Result};

/// 更新日時変更コマンドを実行
///
/// # 引数
/// * `entry_id` - 対象のエントリID
/// * `timestamp_arg` - 新しい更新日時（UNIX秒またはYYYY-MM-DD）
pub async fn execute(entry_id: &str, timestamp_arg: &str) -> Result<CommandResult> {
    let timestamp = parse_timestamp_arg(timestamp_arg)?;

    let client = commands::connect().await?;

    let outcome = client
        .touch_video_updated_at(entry_id, timestamp)
        .await
        .with_context(|| format!("Failed to update timestamp of '{}'", entry_id))?;

    Ok(CommandResult::Touch(TouchResult {
        entry_id: entry_id.to_string(),
        timestamp,
        outcome,
    }))
}
