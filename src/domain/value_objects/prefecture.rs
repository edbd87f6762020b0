//! Prefecture value object - the 47 Japanese prefectures, closed set

use std::fmt;

use crate::error::{ShipctlError, ShipctlResult};

/// The 47 valid prefecture names, in JIS X 0401 order.
const PREFECTURES: [&str; 47] = [
    "北海道",
    "青森県",
    "岩手県",
    "宮城県",
    "秋田県",
    "山形県",
    "福島県",
    "茨城県",
    "栃木県",
    "群馬県",
    "埼玉県",
    "千葉県",
    "東京都",
    "神奈川県",
    "新潟県",
    "富山県",
    "石川県",
    "福井県",
    "山梨県",
    "長野県",
    "岐阜県",
    "静岡県",
    "愛知県",
    "三重県",
    "滋賀県",
    "京都府",
    "大阪府",
    "兵庫県",
    "奈良県",
    "和歌山県",
    "鳥取県",
    "島根県",
    "岡山県",
    "広島県",
    "山口県",
    "徳島県",
    "香川県",
    "愛媛県",
    "高知県",
    "福岡県",
    "佐賀県",
    "長崎県",
    "熊本県",
    "大分県",
    "宮崎県",
    "鹿児島県",
    "沖縄県",
];

/// A validated Japanese prefecture.
///
/// The inner value is always one of the 47 entries in [`PREFECTURES`], so
/// the set is closed: no instance outside the table can be constructed.
/// The suffix (都/道/府/県) classifies the prefecture for downstream
/// address formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefecture {
    value: &'static str,
}

impl Prefecture {
    /// Look up a prefecture by name.
    pub fn from(input: &str) -> ShipctlResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ShipctlError::validation("prefecture", "empty string"));
        }

        PREFECTURES
            .iter()
            .find(|&&p| p == trimmed)
            .map(|&p| Self { value: p })
            .ok_or_else(|| {
                ShipctlError::validation(
                    "prefecture",
                    format!("{trimmed} is not a valid Japanese prefecture"),
                )
            })
    }

    /// 都 - Tokyo only
    pub fn is_to(&self) -> bool {
        self.value.ends_with('都')
    }

    /// 道 - Hokkaido only
    pub fn is_do(&self) -> bool {
        self.value.ends_with('道')
    }

    /// 府 - Kyoto and Osaka
    pub fn is_fu(&self) -> bool {
        self.value.ends_with('府')
    }

    /// 県 - the remaining 43
    pub fn is_ken(&self) -> bool {
        self.value.ends_with('県')
    }

    pub fn as_str(&self) -> &'static str {
        self.value
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
