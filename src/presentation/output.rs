/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読、stderr）または
/// 機械向け（JSON、stdout）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
use crate::api::kaltura::Mutation;
use crate::commands::result::{CommandResult, VideoInfo};
use crate::config::UserConfig;
use crate::domain::formatter::format_unix;
use anyhow::Result;
use serde_json::Value;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "kaltool
Manage a Kaltura media library from the command line

Usage:
  kaltool [--machine] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Session:
  login            - Store partner credentials (verified with a live session)
  logout           - Remove stored partner credentials
  status           - Check whether the stored credentials still authenticate

Users:
  users                     - List active users (ascending by id)
  user-add <id>             - Create an active user from an identifier
  user-del <id>             - Delete a user
  user-show <id>            - Show a user (errors if the user does not exist)

Videos:
  videos                    - List all ready videos
  videos --user <id>        - List ready videos owned by a user
  videos --since <ts|date>  - List entries updated since a unix timestamp
                              or a YYYY-MM-DD date (not limited to ready videos)
  video-show <entry>        - Look up an entry by id (the result may be empty)
  video-owner <entry>       - Show the owner of an entry
  video-rm <entry>          - Delete an entry
  upload <url> <name> <owner> [description] [tags] [categories]
                            - Ingest a video from an http(s) URL
  chown <entry> <user>      - Transfer ownership (the user must exist)
  touch <entry> <ts|date>   - Advance the updated-at timestamp; only strictly
                              newer timestamps are written
  tag-displayname <entry>   - Tag the entry with displayname_<owner> (idempotent)

Flavors:
  flavor-clone <id> [key=value...]
                            - Create a new flavor from an existing one,
                              overriding only fields the template already has
  flavor-apply <id> [entry...]
                            - Request conversion to a flavor for the given
                              entries, or for every video when omitted
  flavor-prune <id,id,...> [entry...]
                            - Delete flavor assets matching the given flavor
                              ids, for the given entries or every video

Reports:
  captions                  - List videos that carry caption metadata

  help                      - Display this help message";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        output_machine_readable(result)?;
    } else {
        output_human_readable(result);
    }

    Ok(())
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// すべての出力はstderrに送られ、stdoutはパイプライン用に予約されます。
fn output_human_readable(result: &CommandResult) {
    // タイムゾーンオフセットは1回だけ読み込む
    let tz_offset = UserConfig::load()
        .map(|config| config.timezone_offset_seconds)
        .unwrap_or(0);

    match result {
        CommandResult::Login(r) => {
            eprintln!();
            if r.was_logged_in {
                eprintln!("✓ Partner credentials updated (partner {}).", r.partner_id);
            } else {
                eprintln!("✓ Login successful (partner {}).", r.partner_id);
            }
            eprintln!("Credentials have been saved.");
        }
        CommandResult::Logout(r) => {
            if r.was_logged_in {
                eprintln!("Logged out successfully.");
                eprintln!("Partner credentials have been removed.");
            } else {
                eprintln!("Already logged out.");
            }
        }
        CommandResult::Status(r) => {
            eprintln!();
            if r.is_authenticated {
                eprintln!("Authenticated");
                if let Some(partner_id) = r.partner_id {
                    eprintln!("Partner ID: {}", partner_id);
                }
                if let Some(user_id) = &r.user_id {
                    eprintln!("API User:   {}", user_id);
                }
            } else if r.partner_id.is_some() {
                eprintln!("✗ Authentication failed");
                eprintln!("Your credentials may be invalid or revoked.");
                eprintln!("Please run 'kaltool login' to update them.");
            } else {
                eprintln!("Not logged in");
                eprintln!("Please run 'kaltool login' to authenticate.");
            }
        }
        CommandResult::UserAdd(r) => match r.outcome {
            Mutation::Applied => eprintln!("✓ User '{}' created.", r.user_id),
            Mutation::Skipped(reason) => {
                eprintln!("User '{}' not created: {}.", r.user_id, reason)
            }
        },
        CommandResult::UserDelete(r) => match r.outcome {
            Mutation::Applied => eprintln!("✓ User '{}' deleted.", r.user_id),
            Mutation::Skipped(reason) => {
                eprintln!("User '{}' not deleted: {}.", r.user_id, reason)
            }
        },
        CommandResult::UserShow(r) => {
            eprintln!();
            eprintln!("User ID:     {}", r.user.id);
            if let Some(screen_name) = &r.user.screen_name {
                eprintln!("Screen Name: {}", screen_name);
            }
            if let Some(full_name) = &r.user.full_name {
                eprintln!("Full Name:   {}", full_name);
            }
            if let Some(created_at) = r.user.created_at {
                eprintln!("Created:     {}", format_unix(created_at, tz_offset));
            }
        }
        CommandResult::UserList(r) => {
            eprintln!();
            if r.total_count == 0 {
                eprintln!("No active users found.");
            } else {
                eprintln!("Found {} active user(s):", r.total_count);
                for user in &r.users {
                    match &user.screen_name {
                        Some(screen_name) if *screen_name != user.id => {
                            eprintln!("  {} ({})", user.id, screen_name)
                        }
                        _ => eprintln!("  {}", user.id),
                    }
                }
            }
        }
        CommandResult::VideoList(r) => {
            eprintln!();
            if r.total_count == 0 {
                eprintln!("No videos found.");
            } else {
                eprintln!("Found {} video(s):", r.total_count);
                eprintln!();
                for video in &r.videos {
                    print_video(video, tz_offset);
                }
            }
        }
        CommandResult::VideoShow(r) => {
            eprintln!();
            if r.matches.is_empty() {
                eprintln!("No entry matched id '{}'.", r.entry_id);
            } else {
                for video in &r.matches {
                    print_video(video, tz_offset);
                }
            }
        }
        CommandResult::VideoOwner(r) => {
            eprintln!();
            eprintln!("Entry ID: {}", r.entry_id);
            eprintln!("Owner:    {}", r.owner_id);
        }
        CommandResult::VideoDelete(r) => {
            eprintln!();
            eprintln!("✓ Entry deleted.");
            eprintln!("Entry ID: {}", r.entry_id);
        }
        CommandResult::Upload(r) => {
            eprintln!();
            eprintln!("✓ Ingest requested.");
            eprintln!("Entry ID: {}", r.entry_id);
            eprintln!("Name:     {}", r.name);
            eprintln!("Owner:    {}", r.owner_id);
            eprintln!("Source:   {}", r.source_url);
            eprintln!();
            eprintln!("Kaltura is downloading and converting the source in the background.");
        }
        CommandResult::Chown(r) => match r.outcome {
            Mutation::Applied => eprintln!(
                "✓ Entry '{}' is now owned by '{}'.",
                r.entry_id, r.new_owner
            ),
            Mutation::Skipped(reason) => {
                eprintln!("Ownership of '{}' unchanged: {}.", r.entry_id, reason)
            }
        },
        CommandResult::Touch(r) => match r.outcome {
            Mutation::Applied => eprintln!(
                "✓ Entry '{}' updated-at set to {}.",
                r.entry_id,
                format_unix(r.timestamp, tz_offset)
            ),
            Mutation::Skipped(reason) => {
                eprintln!("Entry '{}' not touched: {}.", r.entry_id, reason)
            }
        },
        CommandResult::TagDisplayName(r) => match r.outcome {
            Mutation::Applied => eprintln!("✓ Display-name tag added to '{}'.", r.entry_id),
            Mutation::Skipped(reason) => {
                eprintln!("Entry '{}' not tagged: {}.", r.entry_id, reason)
            }
        },
        CommandResult::FlavorClone(r) => {
            eprintln!();
            eprintln!("✓ Flavor cloned from {}.", r.source_flavor_id);
            eprintln!("New Flavor ID: {}", r.flavor.id);
            if let Some(name) = &r.flavor.name {
                eprintln!("Name:          {}", name);
            }
            if let (Some(width), Some(height)) = (r.flavor.width, r.flavor.height) {
                eprintln!("Resolution:    {}x{}", width, height);
            }
            if let Some(bitrate) = r.flavor.video_bitrate {
                eprintln!("Bitrate:       {} kbps", bitrate);
            }
        }
        CommandResult::FlavorApply(r) => {
            eprintln!();
            eprintln!(
                "Flavor {}: conversion requested for {} video(s), {} already had it.",
                r.flavor_id,
                r.report.converted.len(),
                r.report.skipped.len()
            );
            for entry_id in &r.report.converted {
                eprintln!("  converting {}", entry_id);
            }
        }
        CommandResult::FlavorPrune(r) => {
            eprintln!();
            if r.removed.is_empty() {
                eprintln!("No flavor assets matched.");
            } else {
                eprintln!("Removed {} flavor asset(s):", r.removed.len());
                for removed in &r.removed {
                    eprintln!(
                        "  entry {}  asset {}  (flavor {})",
                        removed.entry_id, removed.asset_id, removed.flavor_params_id
                    );
                }
            }
        }
        CommandResult::Captions(r) => {
            eprintln!();
            if r.rows.is_empty() {
                eprintln!("No captioned videos found.");
            } else {
                eprintln!("Found {} captioned video(s):", r.rows.len());
                eprintln!();
                for row in &r.rows {
                    eprintln!("---");
                    eprintln!("Entry ID: {}", row.object_id);
                    eprintln!("Title:    {}", row.title);
                    eprintln!("Captions: {}", row.xml);
                }
                eprintln!("---");
            }
        }
        CommandResult::Help => {
            eprintln!("{}", HELP_TEXT);
        }
    }
}

/// 動画1件分を表示する
fn print_video(video: &VideoInfo, tz_offset: i32) {
    eprintln!("---");
    eprintln!("Entry ID: {}", video.entry_id);
    if let Some(name) = &video.name {
        eprintln!("Name:     {}", name);
    }
    if let Some(owner_id) = &video.owner_id {
        eprintln!("Owner:    {}", owner_id);
    }
    if let Some(tags) = &video.tags
        && !tags.is_empty()
    {
        eprintln!("Tags:     {}", tags);
    }
    if let Some(duration) = video.duration_seconds {
        eprintln!("Duration: {}:{:02}", duration / 60, duration % 60);
    }
    if let Some(created_at) = video.created_at {
        eprintln!("Created:  {}", format_unix(created_at, tz_offset));
    }
    if let Some(updated_at) = video.updated_at {
        eprintln!("Updated:  {}", format_unix(updated_at, tz_offset));
    }
    eprintln!();
}

/// 機械可読JSONを出力（stdout）
///
/// スクリプトやパイプライン処理のために、
/// コマンド結果を構造化されたJSON形式で出力します。
fn output_machine_readable(result: &CommandResult) -> Result<()> {
    let mut json = serde_json::to_value(result)?;
    if let Value::Object(map) = &mut json {
        map.insert("success".to_string(), Value::Bool(true));
    }

    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::result::{
        LoginResult, StatusResult, UserListResult, UserMutationResult, VideoListResult,
    };

    #[test]
    fn test_output_machine_readable_login() {
        let result = CommandResult::Login(LoginResult {
            was_logged_in: false,
            partner_id: 391241,
        });

        // JSON出力が正しく生成されることを確認
        let output = output_machine_readable(&result);
        assert!(output.is_ok());
    }

    #[test]
    fn test_machine_output_carries_success_flag() {
        let result = CommandResult::Status(StatusResult {
            is_authenticated: true,
            partner_id: Some(391241),
            user_id: Some("admin".to_string()),
        });

        let mut json = serde_json::to_value(&result).unwrap();
        if let Value::Object(map) = &mut json {
            map.insert("success".to_string(), Value::Bool(true));
        }
        assert_eq!(json.get("success").unwrap(), &Value::Bool(true));
        assert_eq!(json.get("command").unwrap(), "status");
    }

    #[test]
    fn test_output_human_readable_runs_for_outcomes() {
        use crate::api::kaltura::{Mutation, SkipReason};

        // 人間向け出力がエラーなく実行されることを確認
        output_human_readable(&CommandResult::UserAdd(UserMutationResult {
            user_id: "huddlesh".to_string(),
            outcome: Mutation::Skipped(SkipReason::AlreadyExists),
        }));

        output_human_readable(&CommandResult::UserList(UserListResult {
            users: vec![],
            total_count: 0,
        }));

        output_human_readable(&CommandResult::VideoList(VideoListResult {
            videos: vec![],
            total_count: 0,
        }));
    }

    #[test]
    fn test_output_result_both_modes() {
        let result = CommandResult::Help;
        assert!(output_result(&result, true).is_ok());
        assert!(output_result(&result, false).is_ok());
    }
}
