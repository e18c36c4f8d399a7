//! Validator configuration.

/// Functions the validator treats as always defined.
pub const DEFAULT_BUILTINS: &[&str] = &[
    "sin", "cos", "tan", "dot", "fract", "ftransform", "max", "min", "mix", "normalize", "pow",
    "reflect", "step", "vec2", "vec3", "vec4", "if",
];

/// Names that are shader outputs and must be plain value bindings.
pub const DEFAULT_OUTPUTS: &[&str] = &["gl_Position", "gl_FragColor"];

/// Configuration for [`crate::validate::validate_definitions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateConfig {
    /// Callee names accepted in addition to [`DEFAULT_BUILTINS`].
    pub extra_builtins: Vec<String>,
    /// Any callee starting with one of these prefixes is a built-in.
    pub builtin_prefixes: Vec<String>,
    /// Definitions that may not declare parameters.
    pub output_names: Vec<String>,
    /// Report callees that resolve nowhere.
    pub warn_unresolved: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            extra_builtins: Vec::new(),
            builtin_prefixes: vec!["gl_".to_string()],
            output_names: DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            warn_unresolved: true,
        }
    }
}

impl ValidateConfig {
    pub fn with_builtin(mut self, name: impl Into<String>) -> Self {
        self.extra_builtins.push(name.into());
        self
    }

    pub fn with_builtins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_builtins.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn warn_unresolved(mut self, enabled: bool) -> Self {
        self.warn_unresolved = enabled;
        self
    }

    /// Whether `name` is a built-in function under this configuration.
    pub fn is_builtin(&self, name: &str) -> bool {
        DEFAULT_BUILTINS.contains(&name)
            || self.extra_builtins.iter().any(|b| b == name)
            || self.builtin_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    pub fn is_output(&self, name: &str) -> bool {
        self.output_names.iter().any(|o| o == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builtins_and_prefixes() {
        let cfg = ValidateConfig::default();
        assert!(cfg.is_builtin("sin"));
        assert!(cfg.is_builtin("gl_ModelViewProjection"));
        assert!(!cfg.is_builtin("mult"));
        assert!(cfg.is_output("gl_Position"));
        assert!(cfg.warn_unresolved);
    }

    #[test]
    fn extra_builtins_extend_the_table() {
        let cfg = ValidateConfig::default()
            .with_builtin("texture2D")
            .with_builtins(["clamp", "mod"]);
        assert!(cfg.is_builtin("texture2D"));
        assert!(cfg.is_builtin("clamp"));
        assert!(cfg.is_builtin("mod"));
    }
}
