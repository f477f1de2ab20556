// 展示用的格式化工具
// 数字和日期按 en-IN 习惯输出

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::models::SessionUser;

/// 数字最多保留的小数位
const MAX_FRACTION_DIGITS: usize = 3;

/// 日期输出格式，例如 `19 Oct 2026, 02:30 pm`
const DATE_DISPLAY_FORMAT: &str = "%-d %b %Y, %I:%M %P";

/// 按印度数字分组格式化：末三位一组，其余两位一组
///
/// `1234567.891` → `12,34,567.891`，多余的小数四舍五入到三位并去掉末尾的 0。
pub fn format_number(num: f64) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        let symbol = if num > 0.0 { "∞" } else { "-∞" };
        return symbol.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 8);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if num < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// 格式化服务端返回的时间串
///
/// 支持 RFC 3339、RFC 2822（Flask 默认的日期输出）、`YYYY-MM-DD HH:MM:SS`
/// 和纯日期。按时间串自身的时区输出；无法解析时返回 `Invalid Date`。
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(datetime) => datetime.format(DATE_DISPLAY_FORMAT).to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// 用户名缩写：每个空格分隔的词取首字母，大写后取前两个
///
/// 没有用户或没有姓名时返回 `U`。
pub fn user_initials(user: Option<&SessionUser>) -> String {
    let Some(name) = user.and_then(SessionUser::display_name) else {
        return "U".to_string();
    };

    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}
