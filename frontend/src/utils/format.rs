/// 1247 -> "1,247"
pub fn group_thousands(value: i64) -> String {
  group_digits(&value.to_string())
}

/// Comma-groups a plain integer string, keeping a leading minus sign.
/// Used for `Decimal` amounts that do not fit an `i64`.
pub fn group_digits(digits: &str) -> String {
  let (sign, digits) = match digits.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", digits),
  };
  let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
  grouped.push_str(sign);
  for (idx, ch) in digits.chars().enumerate() {
    if idx > 0 && (digits.len() - idx) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  grouped
}
