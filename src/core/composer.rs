use crate::core::numerology::{life_path_number, name_energy_number};
use crate::core::seed::seed_from_input;
use crate::core::tables::{life_path_trait, name_energy_trait, EARLY_YEAR_MESSAGE, FORTUNE_TABLE};
use crate::core::zodiac::zodiac_from_birth_date;
use crate::domain::model::{FortuneResult, Period};

/// 番号がないときの表示
pub const MISSING_NUMBER_MARK: &str = "―";

/// 「今年」を年の前半（1〜5月）に読むかどうか
pub fn is_early_year(period: Period, current_month: u32) -> bool {
    period == Period::ThisYear && (1..=5).contains(&current_month)
}

/// 名前・生年月日・期間から占い結果を組み立てる。
///
/// 名前が空白だけ・生年月日が空・星座が決まらない場合は `None`（まだ結果なし）。
/// `current_month` は「今年」補正にだけ使う現在の月で、入力からは取らない。
pub fn compose_fortune(
    name: &str,
    birth_date: &str,
    period: Period,
    current_month: u32,
) -> Option<FortuneResult> {
    if name.trim().is_empty() || birth_date.is_empty() {
        return None;
    }

    let zodiac = zodiac_from_birth_date(birth_date)?;

    let seed = seed_from_input(name, birth_date, period);
    let base = &FORTUNE_TABLE[(seed % FORTUNE_TABLE.len() as u32) as usize];

    let life_path = life_path_number(birth_date);
    let name_energy = name_energy_number(name);
    let life_trait = life_path_trait(life_path);
    let name_trait = name_energy_trait(name_energy);

    // 名前の画数エネルギーはキーワードに含めない
    let keyword = format!(
        "{} × {} × {}",
        base.keyword,
        zodiac.keyword(),
        life_trait.keyword
    );

    let early_year = is_early_year(period, current_month);
    let level = if early_year {
        base.level.demoted_for_early_year()
    } else {
        base.level
    };

    // 空の断片も join に含めるので、補正なしのときは空白が2つ続く
    let message = [
        format!(
            "{}の{}のあなたは、「{}」の流れが少し強まりやすいタイミングです。",
            period.label(),
            zodiac.name(),
            zodiac.keyword()
        ),
        format!(
            "生年月日からみたライフパスナンバーは「{}」。{}",
            number_or_mark(life_path),
            life_trait.message
        ),
        format!(
            "お名前の画数エネルギー番号は「{}」。{}",
            number_or_mark(name_energy),
            name_trait.message
        ),
        if early_year {
            EARLY_YEAR_MESSAGE.to_string()
        } else {
            String::new()
        },
        base.message.to_string(),
    ]
    .join(" ");

    Some(FortuneResult {
        level,
        message,
        color: base.color.to_string(),
        keyword,
        zodiac,
        zodiac_keyword: zodiac.keyword().to_string(),
        period_label: period.label().to_string(),
        life_path_number: life_path,
        life_path_keyword: life_trait.keyword.to_string(),
        name_energy_number: name_energy,
        name_energy_keyword: name_trait.keyword.to_string(),
    })
}

pub fn number_or_mark(number: Option<u32>) -> String {
    number
        .map(|n| n.to_string())
        .unwrap_or_else(|| MISSING_NUMBER_MARK.to_string())
}
