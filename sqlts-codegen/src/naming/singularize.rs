//! Ordered regex rule engine for singularizing table names.

use eyre::{Result, WrapErr};
use regex::Regex;
use sqlts_config::{SingularRule, Singularize};
use sqlts_core::{regex_source, replacement_template};

use super::rules::DEFAULT_RULES;

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

impl CompiledRule {
    fn compile(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(&regex_source(pattern))
            .wrap_err_with(|| format!("invalid singularization rule '{}'", pattern))?;
        Ok(Self {
            regex,
            replacement: replacement_template(replacement),
        })
    }
}

/// Applies an ordered list of `pattern -> replacement` rules.
///
/// Every rule is tested against the whole name and the first match wins.
/// Rule order, never pattern specificity, decides the outcome.
#[derive(Debug, Clone)]
pub struct Singularizer {
    rules: Vec<CompiledRule>,
}

impl Singularizer {
    /// Build from user rules, optionally followed by the built-in English rules.
    pub fn new(user_rules: &[SingularRule], include_defaults: bool) -> Result<Self> {
        let mut rules = Vec::with_capacity(user_rules.len() + DEFAULT_RULES.len());
        for rule in user_rules {
            rules.push(CompiledRule::compile(&rule.pattern, &rule.replacement)?);
        }
        if include_defaults {
            for (pattern, replacement) in DEFAULT_RULES {
                rules.push(CompiledRule::compile(pattern, replacement)?);
            }
        }
        Ok(Self { rules })
    }

    /// The built-in English rules only.
    pub fn english() -> Result<Self> {
        Self::new(&[], true)
    }

    /// Build from the configured setting; `None` when singularization is off.
    pub fn from_setting(setting: &Singularize) -> Result<Option<Self>> {
        match setting {
            Singularize::Disabled => Ok(None),
            Singularize::Default => Self::english().map(Some),
            Singularize::Rules(rules) => Self::new(rules, true).map(Some),
        }
    }

    pub fn singularize(&self, word: &str) -> String {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(word))
            .map(|rule| {
                rule.regex
                    .replace(word, rule.replacement.as_str())
                    .into_owned()
            })
            .unwrap_or_else(|| word.to_string())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
