// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in abbreviation table.
//!
//! Long words and phrases that have a shorter accepted spelling in commit
//! titles. Consulted only when a title is over the length limit. Keys are
//! lowercase; order is the order suggestions are printed in.

/// Disallowed word or phrase, and its suggested replacement.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("administrator", "admin"),
    ("alternative", "alt"),
    ("application", "app"),
    ("applications", "apps"),
    ("argument", "arg"),
    ("arguments", "args"),
    ("asynchronous", "async"),
    ("authentication", "auth"),
    ("authorization", "authz"),
    ("benchmark", "bench"),
    ("binary", "bin"),
    ("calculation", "calc"),
    ("certificate", "cert"),
    ("command", "cmd"),
    ("compatibility", "compat"),
    ("configuration", "config"),
    ("configurations", "configs"),
    ("context", "ctx"),
    ("database", "DB"),
    ("debugging", "debug"),
    ("declaration", "decl"),
    ("definition", "def"),
    ("dependency", "dep"),
    ("dependencies", "deps"),
    ("description", "desc"),
    ("destination", "dest"),
    ("development", "dev"),
    ("dictionary", "dict"),
    ("directory", "dir"),
    ("directories", "dirs"),
    ("distribution", "distro"),
    ("document", "doc"),
    ("documentation", "docs"),
    ("environment", "env"),
    ("environments", "envs"),
    ("example", "ex"),
    ("for example", "e.g."),
    ("executable", "exe"),
    ("expression", "expr"),
    ("extension", "ext"),
    ("function", "func"),
    ("functions", "funcs"),
    ("generation", "gen"),
    ("identifier", "ID"),
    ("implementation", "impl"),
    ("information", "info"),
    ("initialization", "init"),
    ("initialize", "init"),
    ("javascript", "JS"),
    ("library", "lib"),
    ("libraries", "libs"),
    ("maximum", "max"),
    ("message", "msg"),
    ("messages", "msgs"),
    ("minimum", "min"),
    ("miscellaneous", "misc"),
    ("number", "num"),
    ("operating system", "OS"),
    ("optimization", "opt"),
    ("package", "pkg"),
    ("packages", "pkgs"),
    ("parameter", "param"),
    ("parameters", "params"),
    ("performance", "perf"),
    ("production", "prod"),
    ("properties", "props"),
    ("property", "prop"),
    ("reference", "ref"),
    ("references", "refs"),
    ("regular expression", "regex"),
    ("repository", "repo"),
    ("repositories", "repos"),
    ("request", "req"),
    ("response", "resp"),
    ("source", "src"),
    ("specification", "spec"),
    ("statistics", "stats"),
    ("synchronization", "sync"),
    ("synchronize", "sync"),
    ("temporary", "temp"),
    ("typescript", "TS"),
    ("utilities", "utils"),
    ("utility", "util"),
    ("variable", "var"),
    ("variables", "vars"),
    ("version", "ver"),
    ("with", "w/"),
    ("without", "w/o"),
];
