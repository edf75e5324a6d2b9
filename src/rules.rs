//! Deprecated color-API substitution rules.
//!
//! The ordered table of pattern -> replacement rules applied to every widget
//! source. Order is significant: rules run sequentially over the same buffer,
//! so later rules see text produced by earlier ones. Each rule is applied
//! globally (all non-overlapping matches in the buffer).

use regex::Regex;
use std::sync::LazyLock;

/// One pattern-to-replacement mapping applied globally across a file's text.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Regex matched against the buffer.
    pub pattern: Regex,
    /// Replacement template; `${n}` refers to capture groups in `pattern`.
    pub replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

/// The fixed substitution table, in application order.
///
/// The `AppColors.surface` rule precedes `AppColors.surfaceVariant` and
/// consumes its prefix, so `AppColors.surfaceVariant` actually becomes
/// `context.surfaceColorVariant` and the dedicated rule below never fires.
/// `AppColors.textTertiary` maps onto the secondary accessor; there is no
/// tertiary accessor on the theme extension.
pub fn rule_set() -> &'static [RewriteRule] {
    static RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
        vec![
            RewriteRule::new(r"AppColors\.textPrimary", "context.textColor"),
            RewriteRule::new(r"AppColors\.textSecondary", "context.textSecondaryColor"),
            RewriteRule::new(r"AppColors\.surface", "context.surfaceColor"),
            RewriteRule::new(r"AppColors\.background", "context.backgroundColor"),
            RewriteRule::new(r"AppColors\.border", "context.borderColor"),
            RewriteRule::new(r"AppColors\.surfaceVariant", "context.surfaceVariantColor"),
            RewriteRule::new(r"AppColors\.textTertiary", "context.textSecondaryColor"),
            // The capture stops at the first `)`, so arguments containing a
            // close-parenthesis are only matched up to it. Known limitation.
            RewriteRule::new(r"\.withOpacity\(([^)]+)\)", ".withValues(alpha: ${1})"),
        ]
    });
    &RULES
}

/// Runs every rule in order against `content`, returning the new buffer.
///
/// No rule's output matches any rule's input pattern, so applying the table
/// to already-transformed text is a no-op.
pub fn apply_rules(content: &str) -> String {
    let mut buffer = content.to_string();
    for rule in rule_set() {
        buffer = rule.pattern.replace_all(&buffer, rule.replacement).into_owned();
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_text_primary() {
        let result = apply_rules("color: AppColors.textPrimary,");
        assert_eq!(result, "color: context.textColor,");
    }

    #[test]
    fn renames_text_secondary() {
        let result = apply_rules("color: AppColors.textSecondary,");
        assert_eq!(result, "color: context.textSecondaryColor,");
    }

    #[test]
    fn renames_surface_background_border() {
        let result = apply_rules(
            "a: AppColors.surface, b: AppColors.background, c: AppColors.border,",
        );
        assert_eq!(
            result,
            "a: context.surfaceColor, b: context.backgroundColor, c: context.borderColor,"
        );
    }

    #[test]
    fn collapses_tertiary_onto_secondary() {
        let result = apply_rules("color: AppColors.textTertiary,");
        assert_eq!(result, "color: context.textSecondaryColor,");
    }

    #[test]
    fn surface_rule_shadows_surface_variant() {
        // The surface rule runs first and eats the prefix; this pins the
        // actual behavior of the ordered table.
        let result = apply_rules("color: AppColors.surfaceVariant,");
        assert_eq!(result, "color: context.surfaceColorVariant,");
    }

    #[test]
    fn rewrites_opacity_call() {
        insta::assert_snapshot!(
            apply_rules("color: widget.withOpacity(0.5),"),
            @"color: widget.withValues(alpha: 0.5),"
        );
    }

    #[test]
    fn rewrites_opacity_with_expression_argument() {
        let result = apply_rules(".withOpacity(isActive ? 1.0 : 0.4)");
        assert_eq!(result, ".withValues(alpha: isActive ? 1.0 : 0.4)");
    }

    #[test]
    fn opacity_capture_stops_at_first_close_paren() {
        // Nested calls are matched only up to the first `)`; the remainder
        // of the argument is left behind. Documented limitation.
        let result = apply_rules(".withOpacity(value.clamp(0.0, 1.0))");
        assert_eq!(result, ".withValues(alpha: value.clamp(0.0, 1.0))");
    }

    #[test]
    fn rename_then_opacity_on_same_expression() {
        insta::assert_snapshot!(
            apply_rules("color: AppColors.border.withOpacity(0.2),"),
            @"color: context.borderColor.withValues(alpha: 0.2),"
        );
    }

    #[test]
    fn applies_globally_within_a_buffer() {
        let src = "AppColors.textPrimary AppColors.textPrimary AppColors.textPrimary";
        let result = apply_rules(src);
        assert_eq!(result.matches("context.textColor").count(), 3);
        assert!(!result.contains("AppColors."));
    }

    #[test]
    fn leaves_unrelated_text_alone() {
        let src = "final color = Theme.of(context).colorScheme.primary;";
        assert_eq!(apply_rules(src), src);
    }

    #[test]
    fn rule_set_is_idempotent() {
        let src = "\
            Container(\n\
              color: AppColors.surface,\n\
              child: Text('x', style: TextStyle(color: AppColors.textTertiary)),\n\
              foregroundColor: AppColors.border.withOpacity(0.12),\n\
            )\n";
        let once = apply_rules(src);
        let twice = apply_rules(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn every_rule_output_escapes_every_rule_input() {
        // Stronger form of idempotence: no replacement text is itself
        // matched by any pattern in the table.
        for rule in rule_set() {
            for other in rule_set() {
                assert!(
                    !other.pattern.is_match(rule.replacement),
                    "{} matches replacement {}",
                    other.pattern.as_str(),
                    rule.replacement
                );
            }
        }
    }
}
