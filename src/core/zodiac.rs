use crate::domain::model::ZodiacSign;
use chrono::{Datelike, NaiveDate};

/// 月日を `month * 100 + day` で表した両端を含む範囲。start > end なら年をまたぐ。
#[derive(Debug, Clone, Copy)]
struct ZodiacRange {
    sign: ZodiacSign,
    start: u32,
    end: u32,
}

impl ZodiacRange {
    const fn new(sign: ZodiacSign, start: u32, end: u32) -> Self {
        Self { sign, start, end }
    }

    fn contains(&self, key: u32) -> bool {
        if self.start <= self.end {
            self.start <= key && key <= self.end
        } else {
            key >= self.start || key <= self.end
        }
    }
}

// 日本で一般的な区切り。毎年同じ月日で判定する
const ZODIAC_RANGES: [ZodiacRange; 12] = [
    ZodiacRange::new(ZodiacSign::Aries, 321, 419),
    ZodiacRange::new(ZodiacSign::Taurus, 420, 520),
    ZodiacRange::new(ZodiacSign::Gemini, 521, 621),
    ZodiacRange::new(ZodiacSign::Cancer, 622, 722),
    ZodiacRange::new(ZodiacSign::Leo, 723, 822),
    ZodiacRange::new(ZodiacSign::Virgo, 823, 922),
    ZodiacRange::new(ZodiacSign::Libra, 923, 1023),
    ZodiacRange::new(ZodiacSign::Scorpio, 1024, 1122),
    ZodiacRange::new(ZodiacSign::Sagittarius, 1123, 1221),
    ZodiacRange::new(ZodiacSign::Capricorn, 1222, 119),
    ZodiacRange::new(ZodiacSign::Aquarius, 120, 218),
    ZodiacRange::new(ZodiacSign::Pisces, 219, 320),
];

pub fn zodiac_for_month_day(month: u32, day: u32) -> Option<ZodiacSign> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let key = month * 100 + day;
    ZODIAC_RANGES
        .iter()
        .find(|range| range.contains(key))
        .map(|range| range.sign)
}

/// `YYYY-MM-DD` の生年月日から星座を求める。空・解釈できない日付は `None`。
pub fn zodiac_from_birth_date(birth_date: &str) -> Option<ZodiacSign> {
    if birth_date.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").ok()?;
    zodiac_for_month_day(date.month(), date.day())
}
