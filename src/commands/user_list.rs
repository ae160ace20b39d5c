/// ユーザー一覧コマンド
///
/// アクティブユーザーをID昇順で全件取得します。
use crate::commands;
use crate::commands::result::{CommandResult, UserListResult};
use anyhow::{Context, Result};

/// ユーザー一覧コマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let client = commands::connect().await?;

    let users = client
        .list_active_users()
        .await
        .context("Failed to list active users")?;

    let total_count = users.len();

    Ok(CommandResult::UserList(UserListResult {
        users,
        total_count,
    }))
}
