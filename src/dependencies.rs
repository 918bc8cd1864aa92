//! Packages installed into every new project.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Runtime,
    Development,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Runtime => f.write_str("dependencies"),
            Tier::Development => f.write_str("dev dependencies"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: &'static str,
    pub tier: Tier,
}

const fn runtime(name: &'static str) -> DependencySpec {
    DependencySpec {
        name,
        tier: Tier::Runtime,
    }
}

const fn dev(name: &'static str) -> DependencySpec {
    DependencySpec {
        name,
        tier: Tier::Development,
    }
}

/// The Preact template's dependency table.
pub const PREACT_TEMPLATE: &[DependencySpec] = &[
    // UI framework, compat shim, styling engine and its integration, router
    runtime("preact"),
    runtime("preact-compat"),
    runtime("preact-emotion"),
    runtime("preact-router"),
    runtime("emotion"),
    // Build pipeline
    dev("@babel/cli"),
    dev("@babel/core"),
    dev("@pika/web"),
    dev("babel-plugin-import-pika-web"),
    dev("copyfiles"),
    // Lint and format
    dev("@typescript-eslint/eslint-plugin"),
    dev("@typescript-eslint/parser"),
    dev("prettier"),
    dev("eslint"),
    dev("eslint-config-airbnb-typescript"),
    dev("eslint-config-prettier"),
    dev("eslint-plugin-import"),
    dev("eslint-plugin-jsx-a11y"),
    dev("eslint-plugin-prettier"),
    dev("eslint-plugin-react"),
    // Serve and typecheck
    dev("serve"),
    dev("typescript"),
];

/// Names of every package in `table` belonging to `tier`, in table order.
pub fn names(table: &[DependencySpec], tier: Tier) -> Vec<&'static str> {
    table
        .iter()
        .filter(|spec| spec.tier == tier)
        .map(|spec| spec.name)
        .collect()
}
