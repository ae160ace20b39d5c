/// フレーバー削除コマンド
///
/// 指定フレーバーIDに紐づくフレーバーアセットを動画群から削除します。
/// エントリIDを省略すると全動画が対象です。
use crate::commands;
use crate::commands::result::{CommandResult, FlavorPruneResult};
use crate::domain::validator::parse_flavor_id_list;
use anyhow::{Context, Result};

/// フレーバー削除コマンドを実行
///
/// # 引数
/// * `flavor_ids_arg` - 削除対象のフレーバーID（カンマ区切り）
/// * `entry_ids` - 対象のエントリID（空なら全動画）
pub async fn execute(flavor_ids_arg: &str, entry_ids: &[String]) -> Result<CommandResult> {
    let flavor_ids = parse_flavor_id_list(flavor_ids_arg)?;

    let client = commands::connect().await?;
    let videos = commands::resolve_entries(&client, entry_ids).await?;

    let removed = client
        .remove_flavors_by_ids(&flavor_ids, videos.as_deref())
        .await
        .context("Failed to remove flavor assets")?;

    Ok(CommandResult::FlavorPrune(FlavorPruneResult {
        flavor_ids,
        removed,
    }))
}
