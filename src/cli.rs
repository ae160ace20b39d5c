use crate::commands;
use crate::commands::video_list::ListSelector;
use crate::commands::CommandResult;
use crate::presentation::output;
use anyhow::{Context, Result, bail};

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// `args` はコマンド名以降の引数（--machineフラグは除去済み）。
pub async fn parse_args(args: &[String]) -> Result<Option<CommandResult>> {
    let Some(command) = args.first() else {
        output::print_usage();
        return Ok(None);
    };

    let rest = &args[1..];

    let result = match command.as_str() {
        "login" => commands::login::execute()
            .await
            .context("Login command failed")?,
        "logout" => commands::logout::execute()
            .await
            .context("Logout command failed")?,
        "status" => commands::status::execute()
            .await
            .context("Status command failed")?,
        "users" => commands::user_list::execute()
            .await
            .context("User listing failed")?,
        "user-add" => {
            let user_id = required(rest, 0, "user-add", "a user id")?;
            commands::user_add::execute(user_id)
                .await
                .context("User creation failed")?
        }
        "user-del" => {
            let user_id = required(rest, 0, "user-del", "a user id")?;
            commands::user_delete::execute(user_id)
                .await
                .context("User deletion failed")?
        }
        "user-show" => {
            let user_id = required(rest, 0, "user-show", "a user id")?;
            commands::user_show::execute(user_id)
                .await
                .context("User lookup failed")?
        }
        "videos" => {
            let selector = parse_list_selector(rest)?;
            commands::video_list::execute(&selector)
                .await
                .context("Video listing failed")?
        }
        "video-show" => {
            let entry_id = required(rest, 0, "video-show", "an entry id")?;
            commands::video_show::execute(entry_id)
                .await
                .context("Video lookup failed")?
        }
        "video-owner" => {
            let entry_id = required(rest, 0, "video-owner", "an entry id")?;
            commands::video_owner::execute(entry_id)
                .await
                .context("Owner lookup failed")?
        }
        "video-rm" => {
            let entry_id = required(rest, 0, "video-rm", "an entry id")?;
            commands::video_delete::execute(entry_id)
                .await
                .context("Video deletion failed")?
        }
        "upload" => {
            let source_url = required(rest, 0, "upload", "a source url")?;
            let name = required(rest, 1, "upload", "an entry name")?;
            let owner_id = required(rest, 2, "upload", "an owner user id")?;
            let description = optional(rest, 3);
            let tags = optional(rest, 4);
            let categories = optional(rest, 5);
            commands::upload::execute(source_url, name, owner_id, description, tags, categories)
                .await
                .context("Upload command failed")?
        }
        "chown" => {
            let entry_id = required(rest, 0, "chown", "an entry id")?;
            let new_owner = required(rest, 1, "chown", "a user id")?;
            commands::chown::execute(entry_id, new_owner)
                .await
                .context("Ownership transfer failed")?
        }
        "touch" => {
            let entry_id = required(rest, 0, "touch", "an entry id")?;
            let timestamp = required(rest, 1, "touch", "a timestamp")?;
            commands::touch::execute(entry_id, timestamp)
                .await
                .context("Timestamp update failed")?
        }
        "tag-displayname" => {
            let entry_id = required(rest, 0, "tag-displayname", "an entry id")?;
            commands::tag_displayname::execute(entry_id)
                .await
                .context("Display-name tagging failed")?
        }
        "flavor-clone" => {
            let source_id = required(rest, 0, "flavor-clone", "a flavor id")?;
            commands::flavor_clone::execute(source_id, &rest[1..])
                .await
                .context("Flavor cloning failed")?
        }
        "flavor-apply" => {
            let flavor_id = required(rest, 0, "flavor-apply", "a flavor id")?;
            commands::flavor_apply::execute(flavor_id, &rest[1..])
                .await
                .context("Flavor application failed")?
        }
        "flavor-prune" => {
            let flavor_ids = required(rest, 0, "flavor-prune", "a flavor id list")?;
            commands::flavor_prune::execute(flavor_ids, &rest[1..])
                .await
                .context("Flavor removal failed")?
        }
        "captions" => commands::captions::execute()
            .await
            .context("Caption report failed")?,
        "help" => commands::help::execute(),
        _ => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            command
        ),
    };

    Ok(Some(result))
}

/// 必須の位置引数を取り出す
fn required<'a>(
    args: &'a [String],
    index: usize,
    command: &str,
    what: &str,
) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Please specify {} for the {} command", what, command))
}

/// 任意の位置引数を取り出す（無ければ空文字列）
fn optional(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or("")
}

/// `videos` コマンドのフラグを解析する
fn parse_list_selector(args: &[String]) -> Result<ListSelector> {
    let mut selector = ListSelector::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--user" => {
                let owner = iter
                    .next()
                    .context("--user requires a user id argument")?;
                selector.owner = Some(owner.clone());
            }
            "--since" => {
                let since = iter
                    .next()
                    .context("--since requires a timestamp or date argument")?;
                selector.since = Some(since.clone());
            }
            other => bail!("Unknown flag for videos: '{}'", other),
        }
    }

    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_selector_flags() {
        let args = vec!["--user".to_string(), "huddlesh".to_string()];
        let selector = parse_list_selector(&args).unwrap();
        assert_eq!(selector.owner.as_deref(), Some("huddlesh"));
        assert!(selector.since.is_none());

        let args = vec!["--since".to_string(), "2024-06-30".to_string()];
        let selector = parse_list_selector(&args).unwrap();
        assert_eq!(selector.since.as_deref(), Some("2024-06-30"));
    }

    #[test]
    fn test_parse_list_selector_rejects_unknown_flag() {
        let args = vec!["--owner".to_string()];
        assert!(parse_list_selector(&args).is_err());
    }

    #[test]
    fn test_parse_list_selector_requires_flag_values() {
        let args = vec!["--user".to_string()];
        assert!(parse_list_selector(&args).is_err());
    }

    #[test]
    fn test_required_and_optional_arguments() {
        let args = vec!["0_abc".to_string()];
        assert_eq!(required(&args, 0, "video-show", "an entry id").unwrap(), "0_abc");
        assert!(required(&args, 1, "chown", "a user id").is_err());
        assert_eq!(optional(&args, 1), "");
    }
}
