/// 所有者変更コマンド
///
/// 変更先ユーザーが存在しない場合は何も変更せず、ユーザーエラーとして
/// 終了します。
use crate::commands;
use crate::commands::result::{ChownResult, CommandResult};
use crate::api::kaltura::{Mutation, SkipReason};
use crate::domain::error::DomainError;
use anyhow::{Context, Result};

/// 所有者変更コマンドを実行
///
/// # 引数
/// * `entry_id` - 対象のエントリID
/// * `new_owner` - 新しい所有者のユーザーID
pub async fn execute(entry_id: &str, new_owner: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let outcome = client
        .set_video_owner(entry_id, new_owner)
        .await
        .with_context(|| format!("Failed to transfer ownership of '{}'", entry_id))?;

    // 変更先不在は検証エラーとして報告する（変更は送信されていない）
    if outcome == Mutation::Skipped(SkipReason::OwnerMissing) {
        return Err(DomainError::owner_not_found(entry_id, new_owner).into());
    }

    Ok(CommandResult::Chown(ChownResult {
        entry_id: entry_id.to_string(),
        new_owner: new_owner.to_string(),
        outcome,
    }))
}
