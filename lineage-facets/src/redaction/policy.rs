//! Redaction policies for text leaves.
//!
//! Policies are pure string transformations. Deciding *which* fields are
//! redacted is the job of the exemption set, not the policy.

use std::borrow::Cow;

/// Placeholder written in place of redacted text by the default policy.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Keeps a prefix and/or suffix visible and masks everything in between.
///
/// Lengths count Unicode scalar values. When the visible spans cover the whole
/// value, nothing is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeepConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    mask_char: char,
}

impl KeepConfig {
    /// Keeps the first `visible_prefix` characters.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self::both(visible_prefix, 0)
    }

    /// Keeps the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self::both(0, visible_suffix)
    }

    /// Keeps both ends visible.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: '*',
        }
    }

    /// Uses `mask_char` instead of `*`.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    fn apply_to(&self, value: &str) -> String {
        let total = value.chars().count();
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return value.to_owned();
        }
        let masked_until = total - self.visible_suffix;
        value
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                if index < self.visible_prefix || index >= masked_until {
                    ch
                } else {
                    self.mask_char
                }
            })
            .collect()
    }
}

/// A redaction strategy for text values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextRedactionPolicy {
    /// Replace the whole value with a fixed placeholder.
    Full {
        /// The placeholder text.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured segments visible, mask the rest.
    Keep(KeepConfig),
}

impl TextRedactionPolicy {
    /// Full redaction with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn default_full() -> Self {
        Self::Full {
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// Full redaction with a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keeps only the first `visible_prefix` characters in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::Keep(KeepConfig::first(visible_prefix))
    }

    /// Keeps only the last `visible_suffix` characters in clear text.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Keep(KeepConfig::last(visible_suffix))
    }

    /// Applies the policy. Total: never fails.
    ///
    /// Every policy is idempotent: applying it to its own output returns that
    /// output unchanged.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            Self::Full { placeholder } => placeholder.clone().into_owned(),
            Self::Keep(config) => config.apply_to(value),
        }
    }
}

impl Default for TextRedactionPolicy {
    fn default() -> Self {
        Self::default_full()
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, TextRedactionPolicy, REDACTED_PLACEHOLDER};

    #[test]
    fn full_policy_uses_default_placeholder() {
        let policy = TextRedactionPolicy::default();
        assert_eq!(policy.apply_to("s3cr3t"), REDACTED_PLACEHOLDER);
        assert_eq!(policy.apply_to(""), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn full_policy_uses_custom_placeholder() {
        let policy = TextRedactionPolicy::full_with("***");
        assert_eq!(policy.apply_to("postgres://user:pw@db"), "***");
    }

    #[test]
    fn keep_policy_masks_the_middle() {
        let policy = TextRedactionPolicy::Keep(KeepConfig::both(2, 2));
        assert_eq!(policy.apply_to("abcdef"), "ab**ef");
        assert_eq!(TextRedactionPolicy::keep_last(4).apply_to("token-1234"), "******1234");
        assert_eq!(TextRedactionPolicy::keep_first(3).apply_to("abcdef"), "abc***");
    }

    #[test]
    fn keep_policy_leaves_short_values_visible() {
        let policy = TextRedactionPolicy::Keep(KeepConfig::both(2, 2));
        assert_eq!(policy.apply_to("abcd"), "abcd");
        assert_eq!(policy.apply_to(""), "");
    }

    #[test]
    fn keep_policy_with_huge_spans_keeps_everything() {
        let policy = TextRedactionPolicy::Keep(KeepConfig::both(usize::MAX, 1));
        assert_eq!(policy.apply_to("ALL_SUCCESS"), "ALL_SUCCESS");
        let policy = TextRedactionPolicy::Keep(KeepConfig::both(usize::MAX, usize::MAX));
        assert_eq!(policy.apply_to(""), "");
    }

    #[test]
    fn keep_policy_counts_scalar_values() {
        let policy = TextRedactionPolicy::keep_first(2);
        assert_eq!(policy.apply_to("秘密数据"), "秘密**");
    }

    #[test]
    fn keep_policy_respects_mask_char() {
        let policy = TextRedactionPolicy::Keep(KeepConfig::last(1).with_mask_char('#'));
        assert_eq!(policy.apply_to("abcd"), "###d");
    }

    #[test]
    fn policies_are_idempotent() {
        for policy in [
            TextRedactionPolicy::default_full(),
            TextRedactionPolicy::keep_last(4),
            TextRedactionPolicy::keep_first(2),
        ] {
            let once = policy.apply_to("ALL_SUCCESS");
            assert_eq!(policy.apply_to(&once), once);
        }
    }
}
