//! 展示用的格式化工具

/// 文件大小格式化
///
/// 以 1024 为底，单位 `Bytes / KB / MB / GB`，最多保留两位小数并去掉末尾的 0。
/// 超过 GB 的值仍以 GB 表示。
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exp = 0;
    let mut scale = 1u64;
    while exp + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        exp += 1;
    }

    let value = bytes as f64 / scale as f64;
    format!("{} {}", trim_decimals(value), UNITS[exp])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// 印尼盾金额格式：`Rp 5.000.000`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

/// 状态徽章的样式类
pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "active" | "completed" | "paid" => "bg-green-100 text-green-800",
        "pending" => "bg-yellow-100 text-yellow-800",
        "in_progress" | "assigned" => "bg-blue-100 text-blue-800",
        "cancelled" | "inactive" | "failed" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// 状态标签：`in_progress` -> `IN PROGRESS`
pub fn status_label(status: &str) -> String {
    status.replacen('_', " ", 1).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_known_values() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 123_456), "5.12 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_size_caps_at_gigabytes() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(5_000_000), "Rp 5.000.000");
        assert_eq!(format_rupiah(2_500_000), "Rp 2.500.000");
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge_class("pending"), "bg-yellow-100 text-yellow-800");
        assert_eq!(status_badge_class("in_progress"), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class("completed"), "bg-green-100 text-green-800");
        assert_eq!(status_badge_class("cancelled"), "bg-red-100 text-red-800");
        assert_eq!(status_badge_class("archived"), "bg-gray-100 text-gray-800");
        assert_eq!(status_label("in_progress"), "IN PROGRESS");
    }
}
