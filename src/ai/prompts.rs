//! Prompt text for each analysis kind

use super::request::AnalysisRequest;

const DESCRIPTION_LIMIT: usize = 2000;
const CHANNEL_DESCRIPTION_LIMIT: usize = 500;
const RECENT_TITLE_LIMIT: usize = 5;

/// Which model tier a prompt needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Text,
    Vision,
}

/// A single-message chat prompt, optionally carrying an image
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub model: ModelKind,
    pub text: String,
    pub image_url: Option<String>,
}

impl Prompt {
    fn text(text: String) -> Self {
        Self {
            model: ModelKind::Text,
            text,
            image_url: None,
        }
    }
}

pub fn build_prompt(request: &AnalysisRequest) -> Prompt {
    match request {
        AnalysisRequest::Thumbnail { thumbnail_url } => Prompt {
            model: ModelKind::Vision,
            text: THUMBNAIL_PROMPT.to_string(),
            image_url: Some(thumbnail_url.clone()),
        },
        AnalysisRequest::Title {
            title,
            channel_niche,
        } => Prompt::text(title_prompt(title, channel_niche)),
        AnalysisRequest::Description { description, title } => {
            Prompt::text(description_prompt(description, title))
        }
        AnalysisRequest::Themes {
            channel_title,
            recent_titles,
            top_keywords,
            avg_views,
        } => Prompt::text(themes_prompt(
            channel_title,
            recent_titles,
            top_keywords,
            *avg_views,
        )),
        AnalysisRequest::Swot {
            channel_title,
            channel_description,
            recent_titles,
        } => Prompt::text(swot_prompt(
            channel_title,
            channel_description,
            recent_titles,
        )),
    }
}

fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn numbered_titles(titles: &[String]) -> String {
    titles
        .iter()
        .take(RECENT_TITLE_LIMIT)
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1234567.0` -> `"1,234,567"`
fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = (rounded.abs() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const THUMBNAIL_PROMPT: &str = r#"あなたはYouTubeサムネイルの専門アナリストです。以下のサムネイル画像を分析し、以下の観点から評価してください。

各項目を0-100のスコアで評価し、日本語で詳細なフィードバックを提供してください。

1. テキストの視認性（読みやすさ、フォントサイズ、コントラスト）
2. 構図（視線誘導、焦点、バランス）
3. 色彩（カラースキーム、コントラスト、目を引く色使い）
4. 感情的インパクト（表情、感情を誘発する要素）
5. クリック誘発要因（好奇心、緊急性、価値提案）

JSON形式で以下の構造で回答してください：
{
  "overallScore": 数値,
  "textVisibility": {
    "score": 数値,
    "feedback": "フィードバック",
    "suggestions": ["改善案1", "改善案2"]
  },
  "composition": {
    "score": 数値,
    "feedback": "フィードバック",
    "suggestions": ["改善案1", "改善案2"]
  },
  "colorScheme": {
    "score": 数値,
    "feedback": "フィードバック",
    "dominantColors": ["色1", "色2"],
    "suggestions": ["改善案1", "改善案2"]
  },
  "emotionalImpact": {
    "score": 数値,
    "feedback": "フィードバック",
    "detectedEmotions": ["感情1", "感情2"]
  },
  "clickabilityFactors": ["要因1", "要因2"],
  "improvements": ["総合的な改善案1", "改善案2", "改善案3"]
}"#;

fn title_prompt(title: &str, niche: &str) -> String {
    format!(
        r#"あなたはYouTube SEOの専門家です。以下の動画タイトルを分析してください。

タイトル: "{title}"
チャンネルジャンル: {niche}

以下の観点から0-100のスコアで評価し、日本語で詳細なフィードバックを提供してください：

1. キーワード最適化（検索されやすいキーワードの使用）
2. クリックトリガー（好奇心、数字、感情的な言葉）
3. 長さの分析（最適な文字数か）
4. 感情的アピール（視聴者の感情に訴えかけるか）

JSON形式で回答してください：
{{
  "overallScore": 数値,
  "keywordOptimization": {{
    "score": 数値,
    "detectedKeywords": ["キーワード1", "キーワード2"],
    "missingKeywords": ["推奨キーワード1", "推奨キーワード2"],
    "feedback": "フィードバック"
  }},
  "clickTriggers": {{
    "score": 数値,
    "detected": ["検出されたトリガー1", "トリガー2"],
    "suggestions": ["追加すべきトリガー1", "トリガー2"]
  }},
  "lengthAnalysis": {{
    "score": 数値,
    "currentLength": 文字数,
    "optimalRange": "40-60文字",
    "feedback": "フィードバック"
  }},
  "emotionalAppeal": {{
    "score": 数値,
    "feedback": "フィードバック"
  }},
  "improvements": ["改善されたタイトル案1", "タイトル案2", "タイトル案3"]
}}"#
    )
}

fn description_prompt(description: &str, title: &str) -> String {
    let description = truncate_chars(description, DESCRIPTION_LIMIT);
    format!(
        r#"あなたはYouTube動画の説明文最適化の専門家です。以下の説明文を分析してください。

動画タイトル: "{title}"
説明文: """
{description}
"""

以下の観点から0-100のスコアで評価し、日本語でフィードバックを提供してください：

1. SEO最適化（キーワード、検索性）
2. CTA分析（行動喚起、登録促進など）
3. 構造（タイムスタンプ、リンク、ハッシュタグ）

そして、改善された説明文の例を提供してください。

JSON形式で回答してください：
{{
  "overallScore": 数値,
  "seoOptimization": {{
    "score": 数値,
    "keywordsFound": ["キーワード1", "キーワード2"],
    "suggestions": ["SEO改善案1", "改善案2"]
  }},
  "ctaAnalysis": {{
    "score": 数値,
    "detectedCTAs": ["検出されたCTA1", "CTA2"],
    "missingSuggestions": ["追加すべきCTA1", "CTA2"]
  }},
  "structure": {{
    "score": 数値,
    "hasTimestamps": boolean,
    "hasLinks": boolean,
    "hasHashtags": boolean,
    "suggestions": ["構造改善案1", "改善案2"]
  }},
  "improvedDescription": "改善された説明文の例（500文字程度）"
}}"#
    )
}

fn themes_prompt(
    channel_title: &str,
    recent_titles: &[String],
    top_keywords: &[String],
    avg_views: f64,
) -> String {
    let titles = numbered_titles(recent_titles);
    let keywords = top_keywords.join(", ");
    let views = group_thousands(avg_views);
    format!(
        r#"あなたはYouTubeコンテンツ戦略の専門家です。以下のチャンネル情報に基づいて、次に作成すべき動画のテーマを5つ提案してください。

チャンネル名: {channel_title}
最近の動画タイトル:
{titles}

よく使われるキーワード: {keywords}
平均再生数: {views}回

以下の観点を考慮してください：
- チャンネルの方向性との一貫性
- 視聴者のニーズとトレンド
- エンゲージメントを高める要素
- 検索されやすいテーマ

JSON形式で5つの提案を返してください：
[
  {{
    "id": "1",
    "title": "提案するタイトル",
    "description": "この動画の概要と狙い",
    "expectedPerformance": "high" | "medium" | "low",
    "reasoning": "なぜこのテーマを提案するか",
    "keyPoints": ["動画で扱うべきポイント1", "ポイント2", "ポイント3"],
    "suggestedTags": ["タグ1", "タグ2", "タグ3"],
    "trendRelevance": 0-100の数値
  }}
]"#
    )
}

fn swot_prompt(channel_title: &str, channel_description: &str, recent_titles: &[String]) -> String {
    let description = truncate_chars(channel_description, CHANNEL_DESCRIPTION_LIMIT);
    let titles = numbered_titles(recent_titles);
    format!(
        r#"あなたはYouTubeマーケティングの専門家です。以下のチャンネル情報に基づいて、SWOT分析を行ってください。

チャンネル名: {channel_title}
チャンネル説明: {description}
最近の動画タイトル:
{titles}

一般的なYouTube市場のトレンドと比較して、このチャンネルのSWOT分析を行ってください。

JSON形式で回答してください：
{{
  "strengths": ["強み1", "強み2", "強み3"],
  "weaknesses": ["弱み1", "弱み2", "弱み3"],
  "opportunities": ["機会1", "機会2", "機会3"],
  "threats": ["脅威1", "脅威2", "脅威3"]
}}"#
    )
}
