use crate::models::{LineItem, Receipt};
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};

const START_HOUR: u32 = 14;
const END_HOUR: u32 = 16;
const POINTS_FOR_TIME: i64 = 10;
const POINTS_FOR_ITEM_PAIR: i64 = 5;
const POINTS_FOR_QUARTER_MULTIPLE: i64 = 25;
const POINTS_FOR_NO_CENTS: i64 = 50;
const POINTS_FOR_ODD_DAY: i64 = 6;

/// 金额整数部分最多 15 位，超出按无效金额处理
const MAX_PRICE_INTEGER_DIGITS: usize = 15;
const MAX_PRICE_FRACTION_DIGITS: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// 评分错误：只有购买时间解析失败会中止整个评分
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid purchase time {value:?}, expected HH:MM")]
    InvalidTimeFormat { value: String },
}

/// 各规则的得分明细
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub retailer: i64,
    pub item_pairs: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        [
            self.retailer,
            self.item_pairs,
            self.round_dollar,
            self.quarter_multiple,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
    }
}

/// 计算小票总积分
pub fn score(receipt: &Receipt) -> Result<i64, ScoreError> {
    score_breakdown(receipt).map(|b| b.total())
}

/// 计算小票积分并返回每条规则的贡献
///
/// 日期或金额无法解析时对应规则记 0 分并打印告警；
/// 时间无法解析时返回 [`ScoreError::InvalidTimeFormat`]。
pub fn score_breakdown(receipt: &Receipt) -> Result<ScoreBreakdown, ScoreError> {
    let mut breakdown = ScoreBreakdown::default();

    let mut items_total = BigDecimal::zero();
    for item in &receipt.items {
        let price = parse_price(item);
        breakdown.descriptions = breakdown
            .descriptions
            .saturating_add(description_points(&item.short_description, &price));
        items_total += &price;
    }

    breakdown.retailer = retailer_points(&receipt.retailer);
    breakdown.item_pairs = i64::try_from(receipt.items.len() / 2)
        .unwrap_or(i64::MAX)
        .saturating_mul(POINTS_FOR_ITEM_PAIR);

    if is_whole(&(&items_total * BigDecimal::from(4))) {
        breakdown.quarter_multiple = POINTS_FOR_QUARTER_MULTIPLE;
    }
    if is_whole(&items_total) {
        breakdown.round_dollar = POINTS_FOR_NO_CENTS;
    }

    breakdown.odd_day = date_points(&receipt.purchase_date);

    let time = NaiveTime::parse_from_str(&receipt.purchase_time, TIME_FORMAT).map_err(|e| {
        tracing::warn!(
            "Failed to parse purchase time {:?}: {}",
            receipt.purchase_time, e
        );
        ScoreError::InvalidTimeFormat {
            value: receipt.purchase_time.clone(),
        }
    })?;
    breakdown.afternoon = time_points(time.hour(), time.minute());

    Ok(breakdown)
}

/// 零售商名称中的字母 (L*) 和十进制数字 (Nd) 个数
fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as i64
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// 去除首尾空白后长度为 3 的倍数（含 0）时，得分为 ceil(price * 0.2)
fn description_points(description: &str, price: &BigDecimal) -> i64 {
    if description.trim().len() % 3 != 0 {
        return 0;
    }
    let multiplier = BigDecimal::new(2.into(), 1);
    ceil_to_i64(&(price * multiplier))
}

fn date_points(date: &str) -> i64 {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) if d.day() % 2 == 1 => POINTS_FOR_ODD_DAY,
        Ok(_) => 0,
        Err(e) => {
            tracing::warn!("Failed to parse purchase date {:?}: {}, no date points", date, e);
            0
        }
    }
}

/// 14:00 至 16:00（闭区间）
fn time_points(hour: u32, minute: u32) -> i64 {
    if (hour > START_HOUR && hour < END_HOUR)
        || hour == START_HOUR
        || (hour == END_HOUR && minute == 0)
    {
        POINTS_FOR_TIME
    } else {
        0
    }
}

/// 金额解析失败或为负数时按 0 处理
///
/// 只接受普通小数写法 (如 `12.25`)，科学计数法和超长金额视为无效。
fn parse_price(item: &LineItem) -> BigDecimal {
    if !is_plain_decimal(&item.price) {
        tracing::warn!(
            "Malformed price {:?} for item {:?}, treated as 0",
            item.price, item.short_description
        );
        return BigDecimal::zero();
    }
    match BigDecimal::from_str(&item.price) {
        Ok(price) if price >= BigDecimal::zero() => price,
        Ok(price) => {
            tracing::warn!(
                "Negative price {} for item {:?}, treated as 0",
                price, item.short_description
            );
            BigDecimal::zero()
        }
        Err(e) => {
            tracing::warn!(
                "Malformed price {:?} for item {:?}: {}, treated as 0",
                item.price, item.short_description, e
            );
            BigDecimal::zero()
        }
    }
}

/// 普通小数写法，位数有上限
pub(crate) fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    !integer.is_empty()
        && integer.len() <= MAX_PRICE_INTEGER_DIGITS
        && digits(integer)
        && fraction.map_or(true, |f| {
            !f.is_empty() && f.len() <= MAX_PRICE_FRACTION_DIGITS && digits(f)
        })
}

fn is_whole(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

/// 向正无穷取整，入参非负
fn ceil_to_i64(value: &BigDecimal) -> i64 {
    let truncated = value.with_scale(0);
    let ceiled = if truncated < *value {
        truncated + BigDecimal::from(1)
    } else {
        truncated
    };
    ceiled.to_i64().unwrap_or(i64::MAX)
}
