/// フレーバー適用コマンド
///
/// 指定フレーバーを動画群に適用（変換要求）します。エントリIDを
/// 省略すると全動画が対象です。既に関連付いている動画はスキップします。
use crate::commands;
use crate::commands::result::{CommandResult, FlavorApplyResult};
use crate::domain::validator::parse_flavor_id;
use anyhow::{Context, Result};

/// フレーバー適用コマンドを実行
///
/// # 引数
/// * `flavor_id_arg` - 適用するフレーバーID
/// * `entry_ids` - 対象のエントリID（空なら全動画）
pub async fn execute(flavor_id_arg: &str, entry_ids: &[String]) -> Result<CommandResult> {
    let flavor_id = parse_flavor_id(flavor_id_arg)?;

    let client = commands::connect().await?;
    let videos = commands::resolve_entries(&client, entry_ids).await?;

    let report = client
        .apply_flavor_to_videos(flavor_id, videos.as_deref())
        .await
        .with_context(|| format!("Failed to apply flavor {}", flavor_id))?;

    Ok(CommandResult::FlavorApply(FlavorApplyResult {
        flavor_id,
        report,
    }))
}
