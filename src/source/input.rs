use std::sync::LazyLock;

use regex::Regex;

use super::SourceError;

static CHANNEL_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"channel/([a-zA-Z0-9_-]+)").expect("channel path pattern is valid")
});

static HANDLE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([a-zA-Z0-9_-]+)").expect("handle pattern is valid"));

/// What the user typed, classified into something the data source can look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelInput {
    /// A raw channel id such as `UC...`
    ChannelId(String),
    /// A handle including its leading `@`
    Handle(String),
}

impl ChannelInput {
    /// Accepts `@handle`, a raw id, or a youtube.com URL.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(SourceError::InvalidInput(
                "チャンネルIDまたはハンドル名が必要です".to_string(),
            ));
        }

        if input.starts_with('@') {
            return Ok(ChannelInput::Handle(input.to_string()));
        }

        if input.contains("youtube.com") {
            if let Some(caps) = CHANNEL_PATH_RE.captures(input) {
                return Ok(ChannelInput::ChannelId(caps[1].to_string()));
            }
            if let Some(caps) = HANDLE_PATH_RE.captures(input) {
                return Ok(ChannelInput::Handle(format!("@{}", &caps[1])));
            }
        }

        Ok(ChannelInput::ChannelId(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle() {
        assert_eq!(
            ChannelInput::parse("  @rustlang ").unwrap(),
            ChannelInput::Handle("@rustlang".to_string())
        );
    }

    #[test]
    fn test_parse_raw_id() {
        assert_eq!(
            ChannelInput::parse("UC_x5XG1OV2P6uZZ5FSM9Ttw").unwrap(),
            ChannelInput::ChannelId("UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string())
        );
    }

    #[test]
    fn test_parse_channel_url() {
        assert_eq!(
            ChannelInput::parse("https://www.youtube.com/channel/UCabc-123_x/videos").unwrap(),
            ChannelInput::ChannelId("UCabc-123_x".to_string())
        );
    }

    #[test]
    fn test_parse_handle_url() {
        assert_eq!(
            ChannelInput::parse("https://youtube.com/@some_creator/featured").unwrap(),
            ChannelInput::Handle("@some_creator".to_string())
        );
    }

    #[test]
    fn test_parse_other_url_kept_verbatim() {
        let url = "https://www.youtube.com/c/legacyname";
        assert_eq!(
            ChannelInput::parse(url).unwrap(),
            ChannelInput::ChannelId(url.to_string())
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            ChannelInput::parse("   "),
            Err(SourceError::InvalidInput(_))
        ));
    }
}
