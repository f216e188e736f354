use crate::domain::model::{BaseFortune, FortuneLevel, NumberTrait};

/// 見つからないときに使う番号
pub const FALLBACK_TRAIT_NUMBER: u32 = 5;

pub static FORTUNE_TABLE: [BaseFortune; 5] = [
    BaseFortune {
        level: FortuneLevel::Daikichi,
        keyword: "はじまり",
        color: "#f97373",
        message: "新しいことを始めるのにぴったりな一日。小さな一歩が、思わぬチャンスにつながりそう。",
    },
    BaseFortune {
        level: FortuneLevel::Kichi,
        keyword: "調和",
        color: "#fb923c",
        message: "あなたの優しさが周りにひろがる日。人とのつながりを大切にすると、運気がふんわり上昇。",
    },
    BaseFortune {
        level: FortuneLevel::Chukichi,
        keyword: "集中",
        color: "#22c55e",
        message: "やるべきことに静かに集中できそう。丁寧に積み重ねた時間が、自信を育ててくれます。",
    },
    BaseFortune {
        level: FortuneLevel::Shokichi,
        keyword: "余白",
        color: "#38bdf8",
        message: "少しゆっくりめのリズムが心地よい日。がんばりすぎず、自分を甘やかす時間も大切に。",
    },
    BaseFortune {
        level: FortuneLevel::Kyo,
        keyword: "リセット",
        color: "#a855f7",
        message: "うまくいかないことがあっても、今日は「リセットの日」。深呼吸をして、心のスペースを空けてみて。",
    },
];

pub static LIFE_PATH_TRAITS: [NumberTrait; 9] = [
    NumberTrait {
        keyword: "はじまり・リーダー気質",
        message: "自ら決めて一歩踏み出すことで運が開ける数字です。迷うよりも、まずは小さく動いてみることが鍵になります。",
    },
    NumberTrait {
        keyword: "調和・サポート",
        message: "人との関わりの中で力を発揮する数字です。ひとりで抱え込まず、信頼できる人と気持ちを分かち合うことで流れが整います。",
    },
    NumberTrait {
        keyword: "表現・楽しさ",
        message: "アイデアや感性を外に出すほど運が巡りやすい数字です。好きなこと・楽しいことを遠慮せず取り入れてみましょう。",
    },
    NumberTrait {
        keyword: "安定・基盤づくり",
        message: "土台を固めることに向いた数字です。生活リズムや環境を整えるほど、安心して次のステップに進めるタイミングになります。",
    },
    NumberTrait {
        keyword: "変化・自由",
        message: "環境の変化や新しい出会いを通じて成長する数字です。同じ場所にとどまるよりも、小さな冒険を受け入れてみると良さそうです。",
    },
    NumberTrait {
        keyword: "愛情・ケア",
        message: "身近な人や自分自身を大切にすると運が整う数字です。完璧でなくてよいので、「ほどよい優しさ」を意識してみてください。",
    },
    NumberTrait {
        keyword: "探求・内省",
        message: "ひとりの時間の中で答えを見つけやすい数字です。情報を追いかけすぎず、静かな時間に自分の本音を聞いてみましょう。",
    },
    NumberTrait {
        keyword: "結果・達成",
        message: "これまでの行動が現実の形になりやすい数字です。数字や成果を意識しつつも、長期的なバランスも忘れずに進めていきましょう。",
    },
    NumberTrait {
        keyword: "完了・手放し",
        message: "一区切りつけることで新しい流れが入りやすい数字です。抱えすぎているものがあれば、「いま手放せるものはどれか」を見直してみてください。",
    },
];

pub static NAME_ENERGY_TRAITS: [NumberTrait; 9] = [
    NumberTrait {
        keyword: "切り開く力",
        message: "自分の意志を通す場面で強さが出やすい名前です。遠慮しすぎず、必要な場面でははっきり伝えることが吉となります。",
    },
    NumberTrait {
        keyword: "受けとめる力",
        message: "相手の気持ちを汲み取る感性を持つ名前です。ただし抱え込みすぎには注意。境界線を引く意識も大切になります。",
    },
    NumberTrait {
        keyword: "華やかさ",
        message: "場の空気を明るくする性質を帯びた名前です。少しだけ自分を表に出すことで、良縁を引き寄せやすくなります。",
    },
    NumberTrait {
        keyword: "粘り強さ",
        message: "コツコツ継続する力が宿りやすい名前です。すぐに結果を求めすぎず、小さな積み重ねを大事にすると安定していきます。",
    },
    NumberTrait {
        keyword: "柔軟さ",
        message: "変化にしなやかに対応できる名前です。予定通りにいかないときこそ、「別の選択肢もあり」と視野を広げてみてください。",
    },
    NumberTrait {
        keyword: "面倒見の良さ",
        message: "人のために動くことで運を受け取りやすい名前です。ただし自己犠牲にならないよう、自分のケアも同じくらい大切に。",
    },
    NumberTrait {
        keyword: "洞察力",
        message: "物事の本質を見抜こうとする力が宿る名前です。ひとり静かに考える時間を確保すると、直感が冴えやすくなります。",
    },
    NumberTrait {
        keyword: "現実を動かす力",
        message: "行動力と成果を結びつけやすい名前です。具体的な目標や数字を決めることで、運の流れが読みやすくなります。",
    },
    NumberTrait {
        keyword: "包み込む力",
        message: "広い受容性を持つ名前です。人や状況を丸ごと受けとめやすい一方で、自分の限界もきちんと知っておくと、心が軽くなります。",
    },
];

pub const EARLY_YEAR_MESSAGE: &str = "特に1〜5月ごろまでは、無理にスピードを上げるよりも、足元を整える意識を持つと流れが安定しやすいタイミングです。前半は「準備と調整」、後半に向けてじっくり整えていくつもりで動いてみてください。";

/// 1〜9 の番号に対応する性質。番号がない・範囲外なら 5 の性質を返す。
pub fn number_trait(table: &'static [NumberTrait; 9], number: Option<u32>) -> &'static NumberTrait {
    let number = match number {
        Some(n @ 1..=9) => n,
        _ => FALLBACK_TRAIT_NUMBER,
    };
    &table[(number - 1) as usize]
}

pub fn life_path_trait(number: Option<u32>) -> &'static NumberTrait {
    number_trait(&LIFE_PATH_TRAITS, number)
}

pub fn name_energy_trait(number: Option<u32>) -> &'static NumberTrait {
    number_trait(&NAME_ENERGY_TRAITS, number)
}
