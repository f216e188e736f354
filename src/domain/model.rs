use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 占う期間
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    #[default]
    Today,
    Tomorrow,
    ThisYear,
    NextYear,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Today,
        Period::Tomorrow,
        Period::ThisYear,
        Period::NextYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Tomorrow => "tomorrow",
            Period::ThisYear => "thisYear",
            Period::NextYear => "nextYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "今日",
            Period::Tomorrow => "明日",
            Period::ThisYear => "今年",
            Period::NextYear => "来年",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Period::Today => "いま、この瞬間の流れ",
            Period::Tomorrow => "一歩先のヒント",
            Period::ThisYear => "1年を通したテーマ",
            Period::NextYear => "次のステージの予感",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError(pub String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown period '{}' (expected today, tomorrow, thisYear or nextYear)",
            self.0
        )
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Period::Today),
            "tomorrow" => Ok(Period::Tomorrow),
            "thisYear" => Ok(Period::ThisYear),
            "nextYear" => Ok(Period::NextYear),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "地")]
    Earth,
    #[serde(rename = "風")]
    Air,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    pub fn label(&self) -> &'static str {
        match self {
            Element::Fire => "火",
            Element::Earth => "地",
            Element::Air => "風",
            Element::Water => "水",
        }
    }
}

/// 西洋12星座。シリアライズ時は日本語名になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "牡羊座")]
    Aries,
    #[serde(rename = "牡牛座")]
    Taurus,
    #[serde(rename = "双子座")]
    Gemini,
    #[serde(rename = "蟹座")]
    Cancer,
    #[serde(rename = "獅子座")]
    Leo,
    #[serde(rename = "乙女座")]
    Virgo,
    #[serde(rename = "天秤座")]
    Libra,
    #[serde(rename = "蠍座")]
    Scorpio,
    #[serde(rename = "射手座")]
    Sagittarius,
    #[serde(rename = "山羊座")]
    Capricorn,
    #[serde(rename = "水瓶座")]
    Aquarius,
    #[serde(rename = "魚座")]
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "牡羊座",
            ZodiacSign::Taurus => "牡牛座",
            ZodiacSign::Gemini => "双子座",
            ZodiacSign::Cancer => "蟹座",
            ZodiacSign::Leo => "獅子座",
            ZodiacSign::Virgo => "乙女座",
            ZodiacSign::Libra => "天秤座",
            ZodiacSign::Scorpio => "蠍座",
            ZodiacSign::Sagittarius => "射手座",
            ZodiacSign::Capricorn => "山羊座",
            ZodiacSign::Aquarius => "水瓶座",
            ZodiacSign::Pisces => "魚座",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "はじまり・直感",
            ZodiacSign::Taurus => "安心・豊かさ",
            ZodiacSign::Gemini => "会話・好奇心",
            ZodiacSign::Cancer => "共感・ぬくもり",
            ZodiacSign::Leo => "自己表現・情熱",
            ZodiacSign::Virgo => "整える力・誠実さ",
            ZodiacSign::Libra => "調和・バランス",
            ZodiacSign::Scorpio => "深いつながり・集中",
            ZodiacSign::Sagittarius => "冒険・学び",
            ZodiacSign::Capricorn => "目標・責任感",
            ZodiacSign::Aquarius => "ひらめき・自由",
            ZodiacSign::Pisces => "やさしさ・想像力",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 運勢のランク。宣言順が良い順（大吉が最上位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FortuneLevel {
    #[serde(rename = "大吉")]
    Daikichi,
    #[serde(rename = "吉")]
    Kichi,
    #[serde(rename = "中吉")]
    Chukichi,
    #[serde(rename = "小吉")]
    Shokichi,
    #[serde(rename = "凶")]
    Kyo,
}

impl FortuneLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FortuneLevel::Daikichi => "大吉",
            FortuneLevel::Kichi => "吉",
            FortuneLevel::Chukichi => "中吉",
            FortuneLevel::Shokichi => "小吉",
            FortuneLevel::Kyo => "凶",
        }
    }

    /// 年の前半（1〜5月）に「今年」を読むときの控えめな補正
    pub fn demoted_for_early_year(self) -> Self {
        match self {
            FortuneLevel::Daikichi => FortuneLevel::Chukichi,
            FortuneLevel::Kichi => FortuneLevel::Shokichi,
            other => other,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FortuneLevel::Daikichi => 4,
            FortuneLevel::Kichi => 3,
            FortuneLevel::Chukichi => 2,
            FortuneLevel::Shokichi => 1,
            FortuneLevel::Kyo => 0,
        }
    }
}

impl PartialOrd for FortuneLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FortuneLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for FortuneLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFortune {
    pub level: FortuneLevel,
    pub keyword: &'static str,
    pub color: &'static str,
    pub message: &'static str,
}

/// ライフパスナンバー・画数エネルギー番号ごとの性質
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberTrait {
    pub keyword: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub level: FortuneLevel,
    pub message: String,
    pub color: String,
    pub keyword: String,
    pub zodiac: ZodiacSign,
    pub zodiac_keyword: String,
    pub period_label: String,
    pub life_path_number: Option<u32>,
    pub life_path_keyword: String,
    pub name_energy_number: Option<u32>,
    pub name_energy_keyword: String,
}

/// バッチ処理の1件分の入力
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub name: String,
    pub birth_date: String,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub request: ReadingRequest,
    pub result: Option<FortuneResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_round_trip_names() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert!("ThisYear".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_serializes_as_wire_name() {
        assert_eq!(
            serde_json::to_string(&Period::ThisYear).unwrap(),
            "\"thisYear\""
        );
        assert_eq!(Period::NextYear.label(), "来年");
    }

    #[test]
    fn test_level_ordering() {
        assert!(FortuneLevel::Daikichi > FortuneLevel::Kichi);
        assert!(FortuneLevel::Kichi > FortuneLevel::Chukichi);
        assert!(FortuneLevel::Chukichi > FortuneLevel::Shokichi);
        assert!(FortuneLevel::Shokichi > FortuneLevel::Kyo);
    }

    #[test]
    fn test_early_year_demotion() {
        assert_eq!(
            FortuneLevel::Daikichi.demoted_for_early_year(),
            FortuneLevel::Chukichi
        );
        assert_eq!(
            FortuneLevel::Kichi.demoted_for_early_year(),
            FortuneLevel::Shokichi
        );
        assert_eq!(
            FortuneLevel::Chukichi.demoted_for_early_year(),
            FortuneLevel::Chukichi
        );
        assert_eq!(FortuneLevel::Kyo.demoted_for_early_year(), FortuneLevel::Kyo);
    }

    #[test]
    fn test_zodiac_elements_cover_three_signs_each() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.element() == element)
                .count();
            assert_eq!(count, 3, "element {}", element.label());
        }
    }

    #[test]
    fn test_result_serializes_camel_case_labels() {
        let result = FortuneResult {
            level: FortuneLevel::Chukichi,
            message: "m".to_string(),
            color: "#22c55e".to_string(),
            keyword: "k".to_string(),
            zodiac: ZodiacSign::Taurus,
            zodiac_keyword: "安心・豊かさ".to_string(),
            period_label: "今日".to_string(),
            life_path_number: Some(7),
            life_path_keyword: "探求・内省".to_string(),
            name_energy_number: None,
            name_energy_keyword: "柔軟さ".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["level"], "中吉");
        assert_eq!(json["zodiac"], "牡牛座");
        assert_eq!(json["lifePathNumber"], 7);
        assert!(json["nameEnergyNumber"].is_null());
        assert_eq!(json["periodLabel"], "今日");
    }
}
