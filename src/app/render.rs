use crate::core::composer::number_or_mark;
use crate::domain::model::{FortuneResult, Period};
use crate::utils::error::Result;

pub fn render_card(name: &str, fortune: &FortuneResult) -> String {
    [
        format!("{} さんの{}の運勢", name, fortune.period_label),
        fortune.level.label().to_string(),
        format!("Keyword：{}", fortune.keyword),
        format!("星座：{}（テーマ：{}）", fortune.zodiac, fortune.zodiac_keyword),
        format!(
            "ライフパスナンバー：{}（{}）",
            number_or_mark(fortune.life_path_number),
            fortune.life_path_keyword
        ),
        format!(
            "名前の画数エネルギー：{}（{}）",
            number_or_mark(fortune.name_energy_number),
            fortune.name_energy_keyword
        ),
        fortune.message.clone(),
    ]
    .join("\n")
}

pub fn render_placeholder() -> String {
    [
        "まだ結果はひみつです。",
        "お名前と生年月日を入力して、「今の運勢をみる」を押してください。",
    ]
    .join("\n")
}

pub fn render_json(fortune: &FortuneResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(fortune)?)
}

pub fn render_period_options() -> String {
    Period::ALL
        .iter()
        .map(|p| format!("{:<9} {}  {}", p.as_str(), p.label(), p.subtitle()))
        .collect::<Vec<_>>()
        .join("\n")
}
