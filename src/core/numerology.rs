//! 数秘術っぽい数値化。本物の数秘術・画数計算ではなく、入力から安定して 1〜9 を得るための簡易モデル。

/// 各桁の和を1桁になるまで繰り返す。0 は 1 として扱う。
pub fn digit_root(value: u64) -> u32 {
    let mut n = value;
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    if n == 0 {
        1
    } else {
        n as u32
    }
}

/// 生年月日の文字列からライフパスナンバーを出す。数字以外は無視する。
pub fn life_path_number(birth_date: &str) -> Option<u32> {
    if birth_date.is_empty() {
        return None;
    }

    let digits: Vec<u64> = birth_date
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .collect();

    if digits.is_empty() {
        return None;
    }
    Some(digit_root(digits.iter().sum()))
}

/// 名前の「画数エネルギー番号」。実際の画数ではなく文字コードの合計から出す。
pub fn name_energy_number(name: &str) -> Option<u32> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let total: u64 = trimmed.chars().map(|c| u64::from(u32::from(c))).sum();
    Some(digit_root(total))
}
