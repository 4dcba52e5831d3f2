//! Title keyword, hashtag and title-shape mining

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{
    HashtagItem, KeywordAnalysis, KeywordItem, KeywordPerformance, TitlePattern, VideoInfo,
};

const TOP_KEYWORDS: usize = 10;
const TOP_HASHTAGS: usize = 10;

const HIGH_PERFORMANCE_FACTOR: f64 = 1.2;
const LOW_PERFORMANCE_FACTOR: f64 = 0.8;

/// Effectiveness reported when one side of the split is empty
const NEUTRAL_EFFECTIVENESS: f64 = 50.0;

/// Runs of 2+ kana/kanji or 3+ Latin letters
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]{2,}|[a-zA-Z]{3,}")
        .expect("token pattern is valid")
});

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#[A-Za-z0-9_\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}]+")
        .expect("hashtag pattern is valid")
});

/// A fixed title-shape check reported in [`TitlePattern`]s
struct PatternRule {
    label: &'static str,
    description: &'static str,
    matches: fn(&str) -> bool,
}

const PATTERN_RULES: [PatternRule; 4] = [
    PatternRule {
        label: "数字を含むタイトル",
        description: "「5つの方法」「10分で分かる」など",
        matches: has_digit,
    },
    PatternRule {
        label: "疑問形タイトル",
        description: "「なぜ？」「どうすれば？」など",
        matches: has_question,
    },
    PatternRule {
        label: "括弧を使用",
        description: "【重要】[解説]など強調表現",
        matches: has_bracket,
    },
    PatternRule {
        label: "絵文字を使用",
        description: "タイトルに絵文字で視覚的アピール",
        matches: has_emoji,
    },
];

pub fn has_digit(title: &str) -> bool {
    title.chars().any(|c| c.is_ascii_digit())
}

pub fn has_question(title: &str) -> bool {
    title.contains(['?', '？'])
}

pub fn has_bracket(title: &str) -> bool {
    title.contains(['[', ']', '【', '】'])
}

pub fn has_emoji(title: &str) -> bool {
    title
        .chars()
        .any(|c| ('\u{1F300}'..='\u{1F9FF}').contains(&c))
}

#[derive(Default)]
struct TokenStats {
    count: u32,
    total_views: f64,
}

/// Mine the window for keywords, hashtags and title patterns
pub fn analyze_keywords(videos: &[VideoInfo]) -> KeywordAnalysis {
    KeywordAnalysis {
        top_keywords: top_keywords(videos),
        title_patterns: title_patterns(videos),
        hashtag_usage: hashtag_usage(videos),
    }
}

/// Lowercased title tokens, in order of appearance
pub fn tokenize(title: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN_RE.find_iter(title).map(|m| m.as_str().to_lowercase())
}

fn top_keywords(videos: &[VideoInfo]) -> Vec<KeywordItem> {
    // First-seen order is kept so the stable sort below breaks ties by encounter.
    let mut order: Vec<String> = Vec::new();
    let mut stats: HashMap<String, TokenStats> = HashMap::new();

    for video in videos {
        for token in tokenize(&video.title) {
            let entry = stats.entry(token.clone()).or_insert_with(|| {
                order.push(token);
                TokenStats::default()
            });
            entry.count += 1;
            entry.total_views += video.view_count as f64;
        }
    }

    if order.is_empty() {
        return Vec::new();
    }

    let overall_avg = mean_views(videos.iter());

    let mut items: Vec<KeywordItem> = order
        .into_iter()
        .filter_map(|word| {
            let s = stats.remove(&word)?;
            let avg = s.total_views / s.count as f64;
            Some(KeywordItem {
                word,
                count: s.count,
                avg_views: avg.round() as u64,
                performance: classify(avg, overall_avg),
            })
        })
        .collect();

    items.sort_by(|a, b| b.count.cmp(&a.count));
    items.truncate(TOP_KEYWORDS);
    items
}

fn classify(avg_views: f64, overall_avg: f64) -> KeywordPerformance {
    if avg_views > overall_avg * HIGH_PERFORMANCE_FACTOR {
        KeywordPerformance::High
    } else if avg_views < overall_avg * LOW_PERFORMANCE_FACTOR {
        KeywordPerformance::Low
    } else {
        KeywordPerformance::Medium
    }
}

fn hashtag_usage(videos: &[VideoInfo]) -> Vec<HashtagItem> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for video in videos {
        for m in HASHTAG_RE.find_iter(&video.description) {
            let tag = m.as_str();
            match counts.get_mut(tag) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(tag.to_string(), 1);
                    order.push(tag.to_string());
                }
            }
        }
    }

    let mut tags: Vec<HashtagItem> = order
        .into_iter()
        .map(|tag| {
            let count = counts.get(&tag).copied().unwrap_or_default();
            HashtagItem { tag, count }
        })
        .collect();

    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags.truncate(TOP_HASHTAGS);
    tags
}

fn title_patterns(videos: &[VideoInfo]) -> Vec<TitlePattern> {
    PATTERN_RULES
        .iter()
        .filter_map(|rule| {
            let count = videos.iter().filter(|v| (rule.matches)(&v.title)).count();
            if count == 0 {
                return None;
            }
            Some(TitlePattern {
                pattern: rule.label.to_string(),
                description: rule.description.to_string(),
                count: count as u32,
                effectiveness: pattern_effectiveness(videos, |v| (rule.matches)(&v.title)),
            })
        })
        .collect()
}

/// Score a predicate by the view ratio of matching vs non-matching videos.
///
/// Equal performance maps to 50 and a 2x advantage to 100; the result is
/// clamped to 0..=100.
pub fn pattern_effectiveness<F>(videos: &[VideoInfo], predicate: F) -> f64
where
    F: Fn(&VideoInfo) -> bool,
{
    let (matching, rest): (Vec<&VideoInfo>, Vec<&VideoInfo>) =
        videos.iter().partition(|v| predicate(v));

    if matching.is_empty() || rest.is_empty() {
        return NEUTRAL_EFFECTIVENESS;
    }

    let avg_matching = mean_views(matching.into_iter());
    let avg_rest = mean_views(rest.into_iter());

    if avg_rest == 0.0 {
        return if avg_matching > 0.0 {
            100.0
        } else {
            NEUTRAL_EFFECTIVENESS
        };
    }

    (avg_matching / avg_rest * 50.0).clamp(0.0, 100.0)
}

fn mean_views<'a>(videos: impl Iterator<Item = &'a VideoInfo>) -> f64 {
    let (sum, n) = videos.fold((0.0, 0usize), |(sum, n), v| {
        (sum + v.view_count as f64, n + 1)
    });
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
