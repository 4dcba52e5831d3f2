//! Benchmark-driven observations about a channel snapshot
//!
//! Insights come out in a fixed order: engagement level, engagement trend,
//! title numerals, title brackets, upload frequency, description length,
//! thumbnail advisory, subscriber growth.

use crate::analysis::benchmarks::{average_days_between, mean_engagement, TierBenchmark};
use crate::analysis::keywords::{has_bracket, has_digit};
use crate::models::{
    AnalysisInsight, ChannelInfo, EngagementTrend, InsightCategory, InsightMetric,
    InsightStatus, PerformanceMetrics, VideoInfo,
};

const ENGAGEMENT_GOOD_RATIO: f64 = 1.2;
const ENGAGEMENT_WARNING_RATIO: f64 = 0.8;

const NUMERAL_TITLE_SHARE: f64 = 0.4;
const BRACKET_TITLE_SHARE: f64 = 0.3;

const FREQUENCY_GOOD_FACTOR: f64 = 0.7;
const FREQUENCY_WARNING_FACTOR: f64 = 1.5;

const MIN_DESCRIPTION_CHARS: f64 = 200.0;

const GROWTH_GOOD_SUBS_PER_VIDEO: f64 = 100.0;
const GROWTH_WARNING_SUBS_PER_VIDEO: f64 = 30.0;

pub fn generate_insights(
    channel: &ChannelInfo,
    videos: &[VideoInfo],
    metrics: &PerformanceMetrics,
) -> Vec<AnalysisInsight> {
    let benchmark = TierBenchmark::for_subscribers(channel.subscriber_count);

    let mut insights = vec![engagement_insight(videos, benchmark)];
    insights.extend(trend_insight(metrics.engagement_trend));
    insights.push(numeral_title_insight(videos));
    insights.extend(bracket_title_insight(videos));
    insights.extend(frequency_insight(videos, benchmark));
    insights.push(description_insight(videos));
    insights.push(thumbnail_insight());
    insights.push(growth_insight(channel));
    insights
}

fn insight(
    id: &str,
    category: InsightCategory,
    status: InsightStatus,
    title: &str,
    description: String,
) -> AnalysisInsight {
    AnalysisInsight {
        id: id.to_string(),
        category,
        status,
        title: title.to_string(),
        description,
        recommendation: None,
        metric: None,
    }
}

impl AnalysisInsight {
    fn with_recommendation(mut self, text: &str) -> Self {
        self.recommendation = Some(text.to_string());
        self
    }

    fn with_metric(mut self, current: f64, benchmark: f64, unit: &str) -> Self {
        self.metric = Some(InsightMetric {
            current,
            benchmark,
            unit: unit.to_string(),
        });
        self
    }
}

fn engagement_insight(videos: &[VideoInfo], benchmark: &TierBenchmark) -> AnalysisInsight {
    let avg = mean_engagement(videos);
    let expected = benchmark.avg_engagement;
    let ratio = avg / expected;

    let built = if ratio >= ENGAGEMENT_GOOD_RATIO {
        insight(
            "engagement-1",
            InsightCategory::Engagement,
            InsightStatus::Good,
            "優秀なエンゲージメント率",
            format!(
                "平均エンゲージメント率{avg:.2}%は、同規模チャンネル（{}）の平均{expected}%を上回っています。",
                benchmark.tier
            ),
        )
        .with_recommendation("この調子を維持してください！視聴者との良好な関係が築けています。")
    } else if ratio >= ENGAGEMENT_WARNING_RATIO {
        insight(
            "engagement-1",
            InsightCategory::Engagement,
            InsightStatus::Warning,
            "エンゲージメント率は標準的",
            format!(
                "平均エンゲージメント率{avg:.2}%は、同規模チャンネルの平均{expected}%とほぼ同等です。"
            ),
        )
        .with_recommendation("コメント返信やコミュニティ投稿で視聴者との対話を増やしましょう。")
    } else {
        insight(
            "engagement-1",
            InsightCategory::Engagement,
            InsightStatus::Critical,
            "エンゲージメント率が低め",
            format!(
                "平均エンゲージメント率{avg:.2}%は、同規模チャンネルの平均{expected}%を下回っています。"
            ),
        )
        .with_recommendation(
            "動画内でCTA（いいね・コメントの促し）を明確にし、視聴者参加型のコンテンツを検討してください。",
        )
    };

    built.with_metric(avg, expected, "%")
}

fn trend_insight(trend: EngagementTrend) -> Option<AnalysisInsight> {
    match trend {
        EngagementTrend::Up => Some(
            insight(
                "engagement-trend",
                InsightCategory::Engagement,
                InsightStatus::Good,
                "エンゲージメントが上昇傾向",
                "直近の動画は過去の動画と比べてエンゲージメント率が向上しています。".to_string(),
            )
            .with_recommendation("現在の戦略が効果的です。成功要因を分析して継続しましょう。"),
        ),
        EngagementTrend::Down => Some(
            insight(
                "engagement-trend",
                InsightCategory::Engagement,
                InsightStatus::Warning,
                "エンゲージメントが下降傾向",
                "直近の動画のエンゲージメント率が低下しています。".to_string(),
            )
            .with_recommendation("コンテンツの方向性や視聴者のニーズを再確認しましょう。"),
        ),
        EngagementTrend::Stable => None,
    }
}

fn titles_matching(videos: &[VideoInfo], predicate: fn(&str) -> bool) -> usize {
    videos.iter().filter(|v| predicate(&v.title)).count()
}

/// `count >= len * share`; an empty window meets every threshold.
fn meets_share(count: usize, len: usize, share: f64) -> bool {
    count as f64 >= len as f64 * share
}

fn numeral_title_insight(videos: &[VideoInfo]) -> AnalysisInsight {
    let count = titles_matching(videos, has_digit);

    if meets_share(count, videos.len(), NUMERAL_TITLE_SHARE) {
        let percent = if videos.is_empty() {
            0.0
        } else {
            (count as f64 / videos.len() as f64 * 100.0).round()
        };
        insight(
            "title-numbers",
            InsightCategory::Title,
            InsightStatus::Good,
            "数字を効果的に活用",
            format!(
                "{percent}%のタイトルに具体的な数字が含まれています。"
            ),
        )
        .with_recommendation("数字はクリック率を高める効果があります。引き続き活用しましょう。")
    } else {
        insight(
            "title-numbers",
            InsightCategory::Title,
            InsightStatus::Warning,
            "タイトルに数字を増やす余地",
            "タイトルに具体的な数字を含めることでクリック率が向上する可能性があります。"
                .to_string(),
        )
        .with_recommendation("「〇〇の5つの方法」「10分で分かる」など、数字を活用してみましょう。")
    }
}

fn bracket_title_insight(videos: &[VideoInfo]) -> Option<AnalysisInsight> {
    let count = titles_matching(videos, has_bracket);
    if !meets_share(count, videos.len(), BRACKET_TITLE_SHARE) {
        return None;
    }
    Some(insight(
        "title-brackets",
        InsightCategory::Title,
        InsightStatus::Good,
        "強調表現を活用",
        "【】や[]を使った強調表現が効果的に使用されています。".to_string(),
    ))
}

fn frequency_insight(videos: &[VideoInfo], benchmark: &TierBenchmark) -> Option<AnalysisInsight> {
    let days = average_days_between(videos)?;
    let expected = benchmark.upload_interval_days;

    let built = if days <= expected * FREQUENCY_GOOD_FACTOR {
        insight(
            "frequency-1",
            InsightCategory::Frequency,
            InsightStatus::Good,
            "安定した投稿頻度",
            format!("平均{days:.1}日ごとに動画を投稿しており、アルゴリズムに好まれる頻度です。"),
        )
        .with_recommendation("一貫した投稿スケジュールを維持してください。")
    } else if days <= expected * FREQUENCY_WARNING_FACTOR {
        insight(
            "frequency-1",
            InsightCategory::Frequency,
            InsightStatus::Warning,
            "投稿頻度を上げることを検討",
            format!("平均{days:.1}日ごとの投稿です。"),
        )
        .with_recommendation("可能であれば投稿頻度を上げることで、視聴者の定着率が向上します。")
    } else {
        insight(
            "frequency-1",
            InsightCategory::Frequency,
            InsightStatus::Critical,
            "投稿頻度が低い",
            format!("平均{days:.1}日ごとの投稿で、頻度が低めです。"),
        )
        .with_recommendation(
            "定期的な投稿はアルゴリズムに好まれます。コンテンツカレンダーを作成しましょう。",
        )
    };

    Some(built.with_metric(days, expected, "日"))
}

fn description_insight(videos: &[VideoInfo]) -> AnalysisInsight {
    // No average exists for an empty window, which never counts as short.
    let avg_len = (!videos.is_empty()).then(|| {
        videos
            .iter()
            .map(|v| v.description.chars().count())
            .sum::<usize>() as f64
            / videos.len() as f64
    });

    if let Some(avg_len) = avg_len.filter(|len| *len < MIN_DESCRIPTION_CHARS) {
        insight(
            "seo-desc",
            InsightCategory::Seo,
            InsightStatus::Warning,
            "説明文が短め",
            format!(
                "平均説明文は{}文字です。より詳細な説明でSEOを改善できます。",
                avg_len.round()
            ),
        )
        .with_recommendation("説明文に関連キーワード、タイムスタンプ、関連リンクを追加しましょう。")
    } else {
        insight(
            "seo-desc",
            InsightCategory::Seo,
            InsightStatus::Good,
            "説明文が充実",
            format!(
                "平均{}文字の説明文でSEOに効果的です。",
                avg_len.unwrap_or(0.0).round()
            ),
        )
    }
}

/// Static advisory; image analysis is left to the LLM relay.
fn thumbnail_insight() -> AnalysisInsight {
    insight(
        "thumbnail-1",
        InsightCategory::Thumbnail,
        InsightStatus::Warning,
        "サムネイル最適化の機会",
        "サムネイルの視認性はクリック率に大きく影響します。".to_string(),
    )
    .with_recommendation(
        "大きく読みやすいテキスト（3-5語）、人の顔、コントラストの高い色を使用することを推奨します。",
    )
}

fn growth_insight(channel: &ChannelInfo) -> AnalysisInsight {
    let subs_per_video = if channel.video_count > 0 {
        channel.subscriber_count as f64 / channel.video_count as f64
    } else {
        0.0
    };

    if subs_per_video >= GROWTH_GOOD_SUBS_PER_VIDEO {
        insight(
            "growth-1",
            InsightCategory::Growth,
            InsightStatus::Good,
            "効率的な登録者獲得",
            format!(
                "動画1本あたり平均{}人の登録者を獲得しています。",
                subs_per_video.round()
            ),
        )
    } else if subs_per_video >= GROWTH_WARNING_SUBS_PER_VIDEO {
        insight(
            "growth-1",
            InsightCategory::Growth,
            InsightStatus::Warning,
            "登録者獲得に改善の余地",
            format!(
                "動画1本あたり{}人の登録者を獲得しています。",
                subs_per_video.round()
            ),
        )
        .with_recommendation("動画の冒頭と終わりに登録を促すCTAを追加しましょう。")
    } else {
        insight(
            "growth-1",
            InsightCategory::Growth,
            InsightStatus::Critical,
            "登録者獲得率が低め",
            "視聴者を登録者に転換する施策が必要です。".to_string(),
        )
        .with_recommendation(
            "チャンネル登録のメリットを明確にし、シリーズコンテンツで視聴者を引き付けましょう。",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::performance::calculate_performance_metrics;
    use crate::analysis::test_support::{channel, video};

    fn run(channel: &ChannelInfo, videos: &[VideoInfo]) -> Vec<AnalysisInsight> {
        let metrics = calculate_performance_metrics(channel, videos);
        generate_insights(channel, videos, &metrics)
    }

    fn find<'a>(insights: &'a [AnalysisInsight], id: &str) -> Option<&'a AnalysisInsight> {
        insights.iter().find(|i| i.id == id)
    }

    #[test]
    fn test_engagement_status_against_tier() {
        // micro tier, 10% average against an 8% benchmark
        let videos = vec![video("a", 1000, 90, 10, 0), video("b", 1000, 100, 0, 3)];
        let insights = run(&channel(5_000, 100_000, 50), &videos);

        let engagement = find(&insights, "engagement-1").unwrap();
        assert_eq!(engagement.status, InsightStatus::Good);
        let metric = engagement.metric.as_ref().unwrap();
        assert_eq!(metric.current, 10.0);
        assert_eq!(metric.benchmark, 8.0);
        assert_eq!(metric.unit, "%");
        assert!(engagement.description.contains("（micro）"));

        // same window on a medium channel, 3% benchmark
        let insights = run(&channel(500_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "engagement-1").unwrap().status, InsightStatus::Good);

        // 7% on micro: ratio 0.875
        let videos = vec![video("a", 1000, 70, 0, 0)];
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "engagement-1").unwrap().status, InsightStatus::Warning);

        // 2% on micro: ratio 0.25
        let videos = vec![video("a", 1000, 20, 0, 0)];
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "engagement-1").unwrap().status, InsightStatus::Critical);
    }

    #[test]
    fn test_trend_insight_only_when_moving() {
        let mut videos: Vec<VideoInfo> = (0..3).map(|i| video("new", 100, 10, 0, i)).collect();
        videos.extend((3..6).map(|i| video("old", 100, 5, 0, i)));
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "engagement-trend").unwrap().status, InsightStatus::Good);

        videos.reverse();
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        assert_eq!(
            find(&insights, "engagement-trend").unwrap().status,
            InsightStatus::Warning
        );

        let flat: Vec<VideoInfo> = (0..6).map(|i| video("flat", 100, 5, 0, i)).collect();
        let insights = run(&channel(5_000, 100_000, 50), &flat);
        assert!(find(&insights, "engagement-trend").is_none());
    }

    #[test]
    fn test_title_checks() {
        let videos = vec![
            video("【解説】5分でわかる", 100, 1, 0, 0),
            video("Top 10", 100, 1, 0, 1),
            video("plain", 100, 1, 0, 2),
            video("plain again", 100, 1, 0, 3),
            video("plain still", 100, 1, 0, 4),
        ];
        let insights = run(&channel(5_000, 100_000, 50), &videos);

        // 2 of 5 have digits: exactly 40%
        let numbers = find(&insights, "title-numbers").unwrap();
        assert_eq!(numbers.status, InsightStatus::Good);
        assert!(numbers.description.starts_with("40%"));

        // 1 of 5 has brackets: 20% < 30%, no insight
        assert!(find(&insights, "title-brackets").is_none());

        let videos = vec![video("[LIVE] now", 100, 1, 0, 0), video("plain", 100, 1, 0, 1)];
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "title-numbers").unwrap().status, InsightStatus::Warning);
        assert_eq!(find(&insights, "title-brackets").unwrap().status, InsightStatus::Good);
    }

    #[test]
    fn test_frequency_against_tier_benchmark() {
        // 5 videos, 3 days apart, micro tier (14 day benchmark)
        let videos: Vec<VideoInfo> = (0..5).map(|i| video("v", 100, 1, 0, i * 3)).collect();
        let insights = run(&channel(5_000, 100_000, 50), &videos);
        let frequency = find(&insights, "frequency-1").unwrap();
        assert_eq!(frequency.status, InsightStatus::Good);
        let metric = frequency.metric.as_ref().unwrap();
        assert_eq!(metric.current, 3.0);
        assert_eq!(metric.benchmark, 14.0);
        assert_eq!(metric.unit, "日");

        // 10 days apart on a medium channel (7 day benchmark): 10 <= 10.5
        let videos: Vec<VideoInfo> = (0..3).map(|i| video("v", 100, 1, 0, i * 10)).collect();
        let insights = run(&channel(500_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "frequency-1").unwrap().status, InsightStatus::Warning);

        let videos: Vec<VideoInfo> = (0..3).map(|i| video("v", 100, 1, 0, i * 30)).collect();
        let insights = run(&channel(500_000, 100_000, 50), &videos);
        assert_eq!(find(&insights, "frequency-1").unwrap().status, InsightStatus::Critical);
    }

    #[test]
    fn test_frequency_requires_two_videos() {
        let insights = run(&channel(5_000, 100_000, 50), &[video("v", 100, 1, 0, 0)]);
        assert!(find(&insights, "frequency-1").is_none());
    }

    #[test]
    fn test_description_length_counts_characters() {
        let mut long = video("v", 100, 1, 0, 0);
        long.description = "あ".repeat(200);
        let insights = run(&channel(5_000, 100_000, 50), &[long]);
        assert_eq!(find(&insights, "seo-desc").unwrap().status, InsightStatus::Good);

        let mut short = video("v", 100, 1, 0, 0);
        short.description = "あ".repeat(199);
        let insights = run(&channel(5_000, 100_000, 50), &[short]);
        let seo = find(&insights, "seo-desc").unwrap();
        assert_eq!(seo.status, InsightStatus::Warning);
        assert!(seo.description.contains("199文字"));
    }

    #[test]
    fn test_growth_bands() {
        let status = |subs, count| {
            let insights = run(&channel(subs, 0, count), &[]);
            find(&insights, "growth-1").unwrap().status
        };
        assert_eq!(status(10_000, 100), InsightStatus::Good);
        assert_eq!(status(3_000, 100), InsightStatus::Warning);
        assert_eq!(status(2_999, 100), InsightStatus::Critical);
        assert_eq!(status(50_000, 0), InsightStatus::Critical);
    }

    #[test]
    fn test_generation_order() {
        let mut videos: Vec<VideoInfo> = (0..3)
            .map(|i| video("【速報】Top 3", 100, 10, 0, i))
            .collect();
        videos.extend((3..6).map(|i| video("【解説】5選", 100, 5, 0, i)));

        let ids: Vec<String> = run(&channel(5_000, 100_000, 10), &videos)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "engagement-1",
                "engagement-trend",
                "title-numbers",
                "title-brackets",
                "frequency-1",
                "seo-desc",
                "thumbnail-1",
                "growth-1",
            ]
        );
    }

    #[test]
    fn test_empty_window_degrades() {
        let insights = run(&channel(5_000, 100_000, 10), &[]);
        let statuses: Vec<(&str, InsightStatus)> =
            insights.iter().map(|i| (i.id.as_str(), i.status)).collect();

        // 0 >= 0 * share holds, and an empty window has no short descriptions
        assert_eq!(
            statuses,
            vec![
                ("engagement-1", InsightStatus::Critical),
                ("title-numbers", InsightStatus::Good),
                ("title-brackets", InsightStatus::Good),
                ("seo-desc", InsightStatus::Good),
                ("thumbnail-1", InsightStatus::Warning),
                ("growth-1", InsightStatus::Critical),
            ]
        );
        assert_eq!(insights[0].metric.as_ref().unwrap().current, 0.0);
        assert!(insights[1].description.starts_with("0%"));
    }
}
