/// タグ集合のドメインロジック
///
/// Kalturaはエントリのタグを1本のカンマ区切り文字列で持ちます。
/// 文字列連結でタグを足すと区切り文字の重複や余分な空白が混入するため、
/// パース・追加・結合のルールをこの型に集約します。
use std::fmt;

/// 表示名タグのマーカー接頭辞
pub const DISPLAY_NAME_MARKER: &str = "displayname_";

/// 順序を保持するタグトークンの集合
///
/// 追加時に大文字小文字を無視した重複排除を行います。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// カンマ区切りのタグ文字列をパースする
    ///
    /// 各トークンは前後の空白を除去し、空トークンは捨てます。
    /// 先に現れたトークンが優先されます（重複は大文字小文字を無視して排除）。
    pub fn parse(raw: &str) -> Self {
        let mut set = Self::default();
        for token in raw.split(',') {
            let token = token.trim();
            if !token.is_empty() {
                set.push(token);
            }
        }
        set
    }

    /// タグを末尾に追加する
    ///
    /// 既に同じタグが含まれている場合（大文字小文字を無視）は何もせず、
    /// 追加されたかどうかを返します。
    pub fn push(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// タグが含まれているかを大文字小文字を無視して判定する
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// いずれかのタグが指定の部分文字列を含むかを判定する
    ///
    /// 大文字小文字を無視します。表示名マーカーの検出に使用します。
    pub fn any_contains(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        self.tags
            .iter()
            .any(|t| t.to_ascii_lowercase().contains(&needle))
    }

    /// Kalturaのワイヤ形式（カンマ区切り）に結合する
    pub fn join(&self) -> String {
        self.tags.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

/// 所有者IDから表示名タグを生成する
pub fn display_name_tag(owner_id: &str) -> String {
    format!("{}{}", DISPLAY_NAME_MARKER, owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        let set = TagSet::parse(" choir , SC,, conducting ,");
        let tags: Vec<&str> = set.iter().collect();
        assert_eq!(tags, vec!["choir", "SC", "conducting"]);
    }

    #[test]
    fn test_parse_empty_string() {
        let set = TagSet::parse("");
        assert!(set.is_empty());
        assert_eq!(set.join(), "");
    }

    #[test]
    fn test_push_appends_without_double_delimiters() {
        let mut set = TagSet::parse("SC, choir");
        assert!(set.push("displayname_huddlesh"));
        assert_eq!(set.join(), "SC, choir, displayname_huddlesh");
    }

    #[test]
    fn test_push_dedupes_case_insensitively() {
        let mut set = TagSet::parse("Choir");
        assert!(!set.push("choir"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_push_rejects_blank() {
        let mut set = TagSet::default();
        assert!(!set.push("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn test_any_contains_is_case_insensitive() {
        let set = TagSet::parse("SC, DisplayName_huddlesh");
        assert!(set.any_contains("displayname_"));
        assert!(!set.any_contains("providername_"));
    }

    #[test]
    fn test_parse_join_roundtrip_is_stable() {
        // 一度正規化された文字列は再パースしても変わらない
        let set = TagSet::parse("a,  b ,c");
        let joined = set.join();
        assert_eq!(TagSet::parse(&joined).join(), joined);
    }

    #[test]
    fn test_display_name_tag() {
        assert_eq!(display_name_tag("huddlesh"), "displayname_huddlesh");
    }
}
