//! Built-in seed library, used when nothing usable is stored on disk.

use quizforge_domain::{Category, Question, QuestionType, SubQuestion};

/// The fallback dataset: a small library covering the free-text and
/// 4-choice category kinds.
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new(
            "日本史",
            "building.columns",
            vec![
                Question::new(
                    vec![SubQuestion::new(
                        "1192年に鎌倉幕府を開いた人物は？",
                        "鎌倉幕府の初代将軍である源氏の武将。",
                    )],
                    "源頼朝",
                    "日本史",
                ),
                Question::new(
                    vec![SubQuestion::new(
                        "1603年に江戸幕府を開いた人物は？",
                        "徳川家が約260年の江戸時代を築いた。",
                    )],
                    "徳川家康",
                    "日本史",
                ),
                Question::new(
                    vec![SubQuestion::new(
                        "794年に平安京に都を移した天皇は？",
                        "長岡京から平安京へ遷都した。",
                    )],
                    "桓武天皇",
                    "日本史",
                ),
            ],
            QuestionType::FreeText,
        ),
        Category::new(
            "日本史（4択）",
            "building.columns",
            vec![Question::new(
                vec![SubQuestion::with_choices(
                    "1192年に鎌倉幕府を開いた人物は？",
                    vec![
                        "源頼朝".to_string(),
                        "足利尊氏".to_string(),
                        "北条政子".to_string(),
                        "平清盛".to_string(),
                    ],
                    "正解は源頼朝。鎌倉幕府初代将軍。",
                )],
                "源頼朝",
                "日本史（4択）",
            )],
            QuestionType::MultipleChoice,
        ),
        Category::new(
            "地理",
            "map",
            vec![
                Question::new(
                    vec![SubQuestion::new(
                        "日本で最も高い山は？",
                        "標高3776m。静岡県と山梨県に跨る。",
                    )],
                    "富士山",
                    "地理",
                ),
                Question::new(
                    vec![SubQuestion::new(
                        "オーストラリアの首都は？",
                        "シドニーやメルボルンではなくキャンベラ。",
                    )],
                    "キャンベラ",
                    "地理",
                ),
            ],
            QuestionType::FreeText,
        ),
        Category::new(
            "英単語",
            "textbook",
            vec![
                Question::new(
                    vec![SubQuestion::new(
                        "「美しい」を英語で言うと？",
                        "形容詞。例: a beautiful day",
                    )],
                    "beautiful",
                    "英単語",
                ),
                Question::new(
                    vec![SubQuestion::new(
                        "「重要な」を英語で言うと？",
                        "形容詞。例: an important notice",
                    )],
                    "important",
                    "英単語",
                ),
            ],
            QuestionType::FreeText,
        ),
    ]
}
