use chrono::{DateTime, NaiveDate};

pub const FREE_LABEL: &str = "Free";
pub const COMING_SOON_LABEL: &str = "Coming soon";

/// Price as an en-US dollar amount. Missing prices and prices that round
/// to zero cents read "Free".
pub fn format_price(price: Option<f64>) -> String {
    let value = match price {
        Some(p) if p.is_finite() => p,
        _ => return FREE_LABEL.to_string(),
    };

    let cents = (value.abs() * 100.0).round() as u64;
    if cents == 0 {
        return FREE_LABEL.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Long-form date such as "March 15, 2024". Values that are neither a
/// calendar date nor RFC 3339 are shown as given.
pub fn format_date(date: Option<&str>) -> String {
    let raw = match date.map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => return COMING_SOON_LABEL.to_string(),
    };

    match parse_date(raw) {
        Some(day) => day.format("%B %-d, %Y").to_string(),
        None => {
            tracing::warn!("unrecognised batch date {:?}", raw);
            raw.to_string()
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}
