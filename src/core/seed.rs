use crate::domain::model::Period;

/// 名前・生年月日・期間から、毎回同じになる数値を作る。
///
/// `"{trimmed name}|{birth date}|{period}"` の各コードポイントについて
/// `hash = hash * 31 + code_point` を 32 ビットの折り返し演算で畳み込み、
/// 結果を符号付き 32 ビット整数として読んだ絶対値を返す。
/// 暗号学的な強さは不要で、プラットフォームや実行をまたいで安定していればよい。
pub fn seed_from_input(name: &str, birth_date: &str, period: Period) -> u32 {
    let base = format!("{}|{}|{}", name.trim(), birth_date, period.as_str());
    let hash = base
        .chars()
        .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(u32::from(c)));
    signed_abs(hash)
}

/// 最上位ビットが立っていれば負数とみなして絶対値を取る。`i32::MIN` は 2^31
fn signed_abs(hash: u32) -> u32 {
    (hash as i32).unsigned_abs()
}
