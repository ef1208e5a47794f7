use std::str::FromStr;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::format::group_digits;

pub const SAVINGS_PER_CLIENT: Decimal = dec!(150);
pub const PLAN_PRICE: Decimal = dec!(1499);

/// Lenient integer read of the clients field: optional sign and leading digits,
/// anything else is zero. "12abc" reads as 12. Counts past what `Decimal` holds
/// saturate at `Decimal::MAX`.
pub fn parse_clients(raw: &str) -> Decimal {
  let trimmed = raw.trim_start();
  let (negative, rest) = match trimmed.as_bytes().first() {
    Some(b'-') => (true, &trimmed[1..]),
    Some(b'+') => (false, &trimmed[1..]),
    _ => (false, trimmed),
  };
  let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
  if digits.is_empty() {
    return Decimal::ZERO;
  }
  let value = Decimal::from_str(&digits).unwrap_or(Decimal::MAX);
  if negative { -value } else { value }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoiEstimate {
  pub clients: Decimal,
  pub yearly_savings: Decimal,
  pub roi_percent: Decimal,
}

impl RoiEstimate {
  pub fn yearly_savings(clients: Decimal) -> Decimal {
    let per_client = SAVINGS_PER_CLIENT * dec!(12);
    clients.checked_mul(per_client).unwrap_or(if clients.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
  }

  /// `None` when there is nothing saved, the ROI panel stays hidden then.
  pub fn from_clients(raw: &str) -> Option<Self> {
    let clients = parse_clients(raw);
    let yearly_savings = Self::yearly_savings(clients);
    if yearly_savings <= Decimal::ZERO {
      return None;
    }
    let roi_percent = ((yearly_savings / dec!(12) / PLAN_PRICE - Decimal::ONE) * dec!(100))
      .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some(RoiEstimate { clients, yearly_savings, roi_percent })
  }

  pub fn savings_label(&self) -> String {
    format!("€{}", group_digits(&self.yearly_savings.trunc().normalize().to_string()))
  }

  pub fn roi_label(&self) -> String {
    format!("{}%", group_digits(&self.roi_percent.normalize().to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_like_a_lenient_integer_field() {
    assert_eq!(parse_clients("100"), dec!(100));
    assert_eq!(parse_clients("  42"), dec!(42));
    assert_eq!(parse_clients("12abc"), dec!(12));
    assert_eq!(parse_clients("-5"), dec!(-5));
    assert_eq!(parse_clients(""), Decimal::ZERO);
    assert_eq!(parse_clients("abc"), Decimal::ZERO);
    assert_eq!(parse_clients("1.9"), dec!(1));
  }

  #[test]
  fn hundred_clients() {
    let estimate = RoiEstimate::from_clients("100").expect("estimate for 100 clients");
    assert_eq!(estimate.yearly_savings, dec!(180000));
    // 180000 / 12 / 1499 = 10.0066..., minus one, times 100
    assert_eq!(estimate.roi_percent, dec!(901));
    assert_eq!(estimate.savings_label(), "€180,000");
    assert_eq!(estimate.roi_label(), "901%");
  }

  #[test]
  fn small_client_base_gives_negative_roi() {
    let estimate = RoiEstimate::from_clients("1").expect("estimate for 1 client");
    assert_eq!(estimate.yearly_savings, dec!(1800));
    assert_eq!(estimate.roi_label(), "-90%");
  }

  #[test]
  fn empty_or_garbage_hides_the_panel() {
    assert_eq!(RoiEstimate::from_clients(""), None);
    assert_eq!(RoiEstimate::from_clients("muchos"), None);
    assert_eq!(RoiEstimate::from_clients("0"), None);
    assert_eq!(RoiEstimate::from_clients("-20"), None);
    assert_eq!(RoiEstimate::yearly_savings(parse_clients("abc")), Decimal::ZERO);
  }

  #[test]
  fn large_counts_keep_their_exact_savings() {
    let estimate = RoiEstimate::from_clients("9000000000000000").expect("estimate for a huge client base");
    assert_eq!(estimate.yearly_savings, dec!(16200000000000000000));
    assert_eq!(estimate.savings_label(), "€16,200,000,000,000,000,000");
  }

  #[test]
  fn counts_past_i64_still_show_the_panel() {
    let estimate = RoiEstimate::from_clients("100000000000000000000").expect("estimate past i64");
    assert_eq!(estimate.clients, dec!(100000000000000000000));
    assert_eq!(estimate.savings_label(), "€180,000,000,000,000,000,000,000");
  }

  #[test]
  fn absurd_counts_saturate_instead_of_panicking() {
    let digits = "9".repeat(40);
    let estimate = RoiEstimate::from_clients(&digits).expect("saturated estimate");
    assert_eq!(estimate.yearly_savings, Decimal::MAX);
    assert!(estimate.savings_label().starts_with("€79,228,162,514"));
    assert_eq!(RoiEstimate::from_clients(&format!("-{}", digits)), None);
  }
}
