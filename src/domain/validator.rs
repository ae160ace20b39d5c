/// ドメインサービス: 取り込みリクエストの検証
///
/// アップロード（URL取り込み）に渡すパラメータを検証する。
/// Kalturaへ無効なリクエストを送る前にローカルで弾きます。
use crate::domain::error::DomainError;

/// 検証済みの取り込みリクエスト
#[derive(Debug, Clone)]
pub struct IngestRequest {
    pub source_url: String,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub categories: String,
    pub owner_id: String,
}

/// 取り込みリクエストを検証する
///
/// # エラー
/// - 取り込み元がhttp(s) URLでない
/// - エントリ名が空
pub fn validate_ingest_request(
    source_url: &str,
    name: &str,
    description: &str,
    tags: &str,
    categories: &str,
    owner_id: &str,
) -> Result<IngestRequest, DomainError> {
    let source_url = source_url.trim();
    if !source_url.starts_with("http://") && !source_url.starts_with("https://") {
        return Err(DomainError::InvalidSourceUrl {
            url: source_url.to_string(),
            reason: "only http:// and https:// sources are supported".to_string(),
        });
    }
    // スキームだけのURLも弾く
    let rest = source_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    if rest.is_empty() {
        return Err(DomainError::InvalidSourceUrl {
            url: source_url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidEntryName {
            reason: "name is empty".to_string(),
        });
    }

    let owner_id = owner_id.trim();
    if owner_id.is_empty() {
        return Err(DomainError::InvalidEntryName {
            reason: "owner id is empty".to_string(),
        });
    }

    Ok(IngestRequest {
        source_url: source_url.to_string(),
        name: name.to_string(),
        description: description.trim().to_string(),
        tags: tags.trim().to_string(),
        categories: categories.trim().to_string(),
        owner_id: owner_id.to_string(),
    })
}

/// フレーバーID引数をパースする
pub fn parse_flavor_id(input: &str) -> Result<i32, DomainError> {
    let input = input.trim();
    input
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DomainError::InvalidFlavorId {
            input: input.to_string(),
        })
}

/// カンマ区切りのフレーバーIDリストをパースする
pub fn parse_flavor_id_list(input: &str) -> Result<Vec<i32>, DomainError> {
    let mut ids = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        ids.push(parse_flavor_id(token)?);
    }
    if ids.is_empty() {
        return Err(DomainError::InvalidFlavorId {
            input: input.to_string(),
        });
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_source() {
        let result = validate_ingest_request(
            "https://video.example.edu/xwksn-std.mp4",
            "Final performance part 2",
            "Second half of the final concert",
            "SC,choir,conducting",
            "Other",
            "huddlesh",
        );
        let request = result.expect("valid request should pass");
        assert_eq!(request.owner_id, "huddlesh");
        assert_eq!(request.name, "Final performance part 2");
    }

    #[test]
    fn test_rejects_non_http_source() {
        let result =
            validate_ingest_request("ftp://example.com/a.mp4", "name", "", "", "", "owner");
        assert!(matches!(result, Err(DomainError::InvalidSourceUrl { .. })));
    }

    #[test]
    fn test_rejects_scheme_only_source() {
        let result = validate_ingest_request("https://", "name", "", "", "", "owner");
        assert!(matches!(result, Err(DomainError::InvalidSourceUrl { .. })));
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = validate_ingest_request(
            "https://example.com/a.mp4",
            "   ",
            "",
            "",
            "",
            "owner",
        );
        assert!(matches!(result, Err(DomainError::InvalidEntryName { .. })));
    }

    #[test]
    fn test_rejects_empty_owner() {
        let result =
            validate_ingest_request("https://example.com/a.mp4", "name", "", "", "", " ");
        assert!(matches!(result, Err(DomainError::InvalidEntryName { .. })));
    }

    #[test]
    fn test_parse_flavor_id() {
        assert_eq!(parse_flavor_id(" 487041 ").unwrap(), 487041);
        assert!(parse_flavor_id("0").is_err());
        assert!(parse_flavor_id("-3").is_err());
        assert!(parse_flavor_id("hd").is_err());
    }

    #[test]
    fn test_parse_flavor_id_list() {
        assert_eq!(parse_flavor_id_list("7, 8,9").unwrap(), vec![7, 8, 9]);
        assert!(parse_flavor_id_list("").is_err());
        assert!(parse_flavor_id_list("7,x").is_err());
    }
}
