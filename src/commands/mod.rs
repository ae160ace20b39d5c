/// コマンド層
///
/// CLIコマンドごとに1モジュール。各executeはanyhow::Resultで
/// 設定・認証・API層のエラーを集約し、CommandResultを返す。
use crate::api::types::MediaEntry;
use crate::api::KalturaClient;
use crate::config::UserConfig;
use crate::domain::error::DomainError;
use anyhow::{Context, Result};

pub mod captions;
pub mod chown;
pub mod flavor_apply;
pub mod flavor_clone;
pub mod flavor_prune;
pub mod help;
pub mod login;
pub mod logout;
pub mod result;
pub mod status;
pub mod tag_displayname;
pub mod touch;
pub mod upload;
pub mod user_add;
pub mod user_delete;
pub mod user_list;
pub mod user_show;
pub mod video_delete;
pub mod video_list;
pub mod video_owner;
pub mod video_show;

pub use result::CommandResult;

/// 設定を読み込み、認証済みのKalturaクライアントを生成する
///
/// ほぼ全てのコマンドが最初に行う共通処理。
pub async fn connect() -> Result<KalturaClient> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let auth = user_config
        .get_auth()
        .context("Partner credentials not found. Please run 'kaltool login' first.")?
        .clone();

    KalturaClient::connect(&auth)
        .await
        .context("Failed to establish a Kaltura session")
}

/// エントリID引数を動画のリストに解決する
///
/// IDが与えられなければNone（呼び出し先で「全動画」扱い）。
/// 1件でも見つからないIDがあればエラーにする。
pub async fn resolve_entries(
    client: &KalturaClient,
    entry_ids: &[String],
) -> Result<Option<Vec<MediaEntry>>> {
    if entry_ids.is_empty() {
        return Ok(None);
    }

    let mut videos = Vec::with_capacity(entry_ids.len());
    for entry_id in entry_ids {
        let mut matches = client
            .get_video(entry_id)
            .await
            .with_context(|| format!("Failed to look up entry '{}'", entry_id))?;
        if matches.is_empty() {
            return Err(DomainError::media_not_found(entry_id).into());
        }
        videos.push(matches.swap_remove(0));
    }

    Ok(Some(videos))
}
