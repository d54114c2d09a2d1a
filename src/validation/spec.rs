use serde::{Deserialize, Serialize};

use super::rule::ValidationRule;

/// Serializable description of a built-in rule, as written in config files.
///
/// ```toml
/// rules = [
///     { kind = "required", message = "Email is required" },
///     { kind = "min_length", min = 6, message = "Too short" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    Required { message: String },
    Email { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
}

impl RuleSpec {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    pub fn to_rule(&self) -> ValidationRule {
        match self {
            Self::Required { message } => ValidationRule::required(message.as_str()),
            Self::Email { message } => ValidationRule::email(message.as_str()),
            Self::MinLength { min, message } => ValidationRule::min_length(*min, message.as_str()),
            Self::MaxLength { max, message } => ValidationRule::max_length(*max, message.as_str()),
        }
    }
}

impl From<&RuleSpec> for ValidationRule {
    fn from(spec: &RuleSpec) -> Self {
        spec.to_rule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        rules: Vec<RuleSpec>,
    }

    #[test]
    fn parses_tagged_rules_from_toml() {
        let wrapper: Wrapper = toml::from_str(
            r#"
            rules = [
                { kind = "required", message = "Password is required" },
                { kind = "min_length", min = 6, message = "Too short" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(
            wrapper.rules,
            vec![
                RuleSpec::required("Password is required"),
                RuleSpec::min_length(6, "Too short"),
            ]
        );
    }

    #[test]
    fn converted_rule_keeps_message_and_semantics() {
        let rule = RuleSpec::min_length(6, "Too short").to_rule();
        assert_eq!(rule.message(), "Too short");
        assert!(!rule.check("abc"));
        assert!(rule.check("abcdef"));
    }
}
