//! Prioritized action plans derived from insights and keyword findings

use crate::models::{
    AnalysisInsight, InsightCategory, InsightStatus, KeywordAnalysis, KeywordPerformance,
    Priority, Recommendation,
};

/// Title patterns scoring above this are recommended for reuse
const EFFECTIVE_PATTERN_THRESHOLD: f64 = 60.0;
const MAX_NAMED_KEYWORDS: usize = 3;

fn recommendation(
    id: &str,
    priority: Priority,
    category: &str,
    title: &str,
    description: String,
    action_items: Vec<String>,
    expected_impact: &str,
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        priority,
        category: category.to_string(),
        title: title.to_string(),
        description,
        action_items,
        expected_impact: expected_impact.to_string(),
    }
}

fn items(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn any_insight(
    insights: &[AnalysisInsight],
    category: InsightCategory,
    statuses: &[InsightStatus],
) -> bool {
    insights
        .iter()
        .any(|i| i.category == category && statuses.contains(&i.status))
}

/// Build the recommendation list, ordered by priority (stable within a level)
pub fn generate_recommendations(
    insights: &[AnalysisInsight],
    keywords: &KeywordAnalysis,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if any_insight(insights, InsightCategory::Engagement, &[InsightStatus::Critical]) {
        recommendations.push(recommendation(
            "rec-engagement",
            Priority::High,
            "エンゲージメント改善",
            "視聴者との対話を強化",
            "エンゲージメント率を改善するための包括的な戦略が必要です。".to_string(),
            items(&[
                "動画内で視聴者に質問を投げかける",
                "コメント欄で積極的に返信する",
                "コミュニティ投稿で視聴者アンケートを実施",
                "ライブ配信でリアルタイム交流を行う",
            ]),
            "エンゲージメント率20-50%向上",
        ));
    }

    if any_insight(
        insights,
        InsightCategory::Frequency,
        &[InsightStatus::Critical, InsightStatus::Warning],
    ) {
        recommendations.push(recommendation(
            "rec-frequency",
            Priority::High,
            "投稿頻度改善",
            "コンテンツカレンダーの作成",
            "定期的な投稿でチャンネルの成長を加速させましょう。".to_string(),
            items(&[
                "月間の投稿スケジュールを事前に計画",
                "動画をバッチ制作して効率化",
                "ショート動画で投稿頻度を補完",
                "撮影・編集のテンプレート化",
            ]),
            "視聴者定着率15-30%向上",
        ));
    }

    let high_keywords: Vec<&str> = keywords
        .top_keywords
        .iter()
        .filter(|k| k.performance == KeywordPerformance::High)
        .take(MAX_NAMED_KEYWORDS)
        .map(|k| k.word.as_str())
        .collect();

    if !high_keywords.is_empty() {
        recommendations.push(recommendation(
            "rec-keywords",
            Priority::Medium,
            "コンテンツ戦略",
            "高パフォーマンスキーワードの活用",
            format!(
                "「{}」などのキーワードが高い再生数を獲得しています。",
                high_keywords.join("」「")
            ),
            items(&[
                "これらのキーワードを含む新しい動画を企画",
                "関連するシリーズコンテンツを作成",
                "タイトルと説明文にキーワードを自然に含める",
            ]),
            "再生数10-25%向上の可能性",
        ));
    }

    let pattern_items: Vec<String> = keywords
        .title_patterns
        .iter()
        .filter(|p| p.effectiveness > EFFECTIVE_PATTERN_THRESHOLD)
        .map(|p| format!("{}（効果: {}%）を活用", p.pattern, p.effectiveness.round()))
        .collect();

    if !pattern_items.is_empty() {
        recommendations.push(recommendation(
            "rec-titles",
            Priority::Medium,
            "タイトル最適化",
            "効果的なタイトルパターンの活用",
            "分析結果から効果的なタイトルパターンが判明しています。".to_string(),
            pattern_items,
            "クリック率5-15%向上",
        ));
    }

    recommendations.push(recommendation(
        "rec-thumbnail",
        Priority::Medium,
        "サムネイル改善",
        "サムネイルのA/Bテスト",
        "サムネイルはクリック率に最も影響する要素の一つです。".to_string(),
        items(&[
            "3-5語以内の大きく読みやすいテキスト",
            "人の顔や感情を表現する画像の使用",
            "ブランドカラーの一貫した使用",
            "複数のサムネイルを作成してテスト",
        ]),
        "クリック率10-30%向上",
    ));

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}
