/// アップロード（URL取り込み）コマンド
///
/// Kalturaが取得できるURLを指定して動画を取り込みます。
/// 所有者が存在しない場合はファサードが先に作成します。
use crate::commands;
use crate::commands::result::{CommandResult, UploadResult};
use crate::domain::validator::validate_ingest_request;
use anyhow::{Context, Result};

/// アップロードコマンドを実行
///
/// # 引数
/// * `source_url` - 取り込み元のURL（http/https）
/// * `name` - エントリ名
/// * `owner_id` - 所有者のユーザーID
/// * `description` / `tags` / `categories` - 任意のメタデータ
pub async fn execute(
    source_url: &str,
    name: &str,
    owner_id: &str,
    description: &str,
    tags: &str,
    categories: &str,
) -> Result<CommandResult> {
    // リモートに投げる前にローカルで検証する
    let request =
        validate_ingest_request(source_url, name, description, tags, categories, owner_id)?;

    let client = commands::connect().await?;

    let entry_id = client
        .add_video(&request)
        .await
        .with_context(|| format!("Failed to ingest '{}' from {}", request.name, request.source_url))?;

    Ok(CommandResult::Upload(UploadResult {
        entry_id,
        name: request.name,
        owner_id: request.owner_id,
        source_url: request.source_url,
    }))
}
