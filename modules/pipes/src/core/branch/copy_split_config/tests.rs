use crate::core::branch::CopySplitConfig;

#[test]
fn default_warns_after_a_thousand_buffered_elements() {
  assert_eq!(CopySplitConfig::default().lag_warning_threshold(), Some(1024));
}

#[test]
fn with_lag_warning_threshold_overrides_value() {
  let config = CopySplitConfig::default().with_lag_warning_threshold(None);
  assert_eq!(config, CopySplitConfig::new(None));
}
