use axum::http::Method;

use super::security::AccessDecision;
use super::security::SecurityContext;
use crate::domain::user::models::Role;

/// What a matched rule demands of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    PermitAll,
    Role(Role),
}

/// Path pattern in ant style.
///
/// * `/a/b` matches exactly
/// * `/a/**` matches `/a` and everything below it
/// * `**x**` matches any path containing `x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Subtree(String),
    Contains(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        if let Some(base) = pattern.strip_suffix("/**") {
            return PathPattern::Subtree(base.to_string());
        }

        let needle = pattern.trim_matches('*');
        if pattern.starts_with("**") && pattern.ends_with("**") && !needle.is_empty() {
            return PathPattern::Contains(needle.to_string());
        }

        PathPattern::Exact(pattern.to_string())
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => path == expected,
            PathPattern::Subtree(base) => path
                .strip_prefix(base.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            PathPattern::Contains(needle) => path.contains(needle.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// `None` matches every method
    method: Option<Method>,
    patterns: Vec<PathPattern>,
    requirement: Requirement,
}

impl AccessRule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        self.method.as_ref().map_or(true, |m| m == method)
            && self.patterns.iter().any(|p| p.matches(path))
    }
}

/// Ordered URL authorization table. The first matching rule wins; requests
/// matching no rule fall through to the default requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
    fallback: Requirement,
}

impl AccessPolicy {
    pub fn new(fallback: Requirement) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn rule(mut self, method: Option<Method>, patterns: &[&str], requirement: Requirement) -> Self {
        self.rules.push(AccessRule {
            method,
            patterns: patterns.iter().map(|p| PathPattern::parse(p)).collect(),
            requirement,
        });
        self
    }

    /// Table used by the service:
    ///
    /// 1. sign-up, sign-in and API docs are public
    /// 2. `GET /product/**` is public
    /// 3. paths containing `exception` are public
    /// 4. everything else needs ADMIN
    pub fn standard() -> Self {
        Self::new(Requirement::Role(Role::Admin))
            .rule(
                None,
                &[
                    "/sign-api/sign-up",
                    "/sign-api/sign-in",
                    "/swagger",
                    "/swagger-ui.html",
                    "/swagger-ui/**",
                    "/api-docs",
                    "/api-docs/**",
                    "/v3/api-docs/**",
                ],
                Requirement::PermitAll,
            )
            .rule(Some(Method::GET), &["/product/**"], Requirement::PermitAll)
            .rule(None, &["**exception**"], Requirement::PermitAll)
    }

    pub fn requirement_for(&self, method: &Method, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map_or(self.fallback, |rule| rule.requirement)
    }

    pub fn decide(&self, method: &Method, path: &str, context: &SecurityContext) -> AccessDecision {
        match self.requirement_for(method, path) {
            Requirement::PermitAll => AccessDecision::Granted,
            Requirement::Role(role) => context.check(role),
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
