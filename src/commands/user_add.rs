/// ユーザー追加コマンド
///
/// 指定した識別子からアクティブユーザーを作成します。
/// 既に存在する場合は変更なしとして成功終了します。
use crate::commands;
use crate::commands::result::{CommandResult, UserMutationResult};
use anyhow::{Context, Result};

/// ユーザー追加コマンドを実行
///
/// # 引数
/// * `user_id` - 作成するユーザーの識別子
pub async fn execute(user_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let outcome = client
        .add_user(user_id)
        .await
        .with_context(|| format!("Failed to add user '{}'", user_id))?;

    Ok(CommandResult::UserAdd(UserMutationResult {
        user_id: user_id.to_string(),
        outcome,
    }))
}
