/// ユーザー削除コマンド
///
/// 存在しない・削除済みのIDは変更なしとして成功終了します。
use crate::commands;
use crate::commands::result::{CommandResult, UserMutationResult};
use anyhow::{Context, Result};

/// ユーザー削除コマンドを実行
///
/// # 引数
/// * `user_id` - 削除するユーザーの識別子
pub async fn execute(user_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let outcome = client
        .delete_user(user_id)
        .await
        .with_context(|| format!("Failed to delete user '{}'", user_id))?;

    Ok(CommandResult::UserDelete(UserMutationResult {
        user_id: user_id.to_string(),
        outcome,
    }))
}
