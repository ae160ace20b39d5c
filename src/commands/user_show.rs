/// ユーザー表示コマンド
///
/// 不在のユーザーIDはエラーとして伝播します
/// （追加・削除と違い、静かに成功にはしない）。
use crate::commands;
use crate::commands::result::{CommandResult, UserShowResult};
use crate::domain::error::DomainError;
use anyhow::{Context, Result};

/// ユーザー表示コマンドを実行
///
/// # 引数
/// * `user_id` - 表示するユーザーの識別子
pub async fn execute(user_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let user = match client.get_user(user_id).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => {
            return Err(DomainError::user_not_found(user_id).into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to fetch user '{}'", user_id));
        }
    };

    Ok(CommandResult::UserShow(UserShowResult { user }))
}
