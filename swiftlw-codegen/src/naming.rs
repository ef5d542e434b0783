//! Identifier legalization.
//!
//! The variable rule chain is an explicit, ordered table of named rules
//! evaluated until one claims the candidate. A rule may instead rewrite the
//! candidate in place and decline (the pascal-like rule does); the final
//! word-join rule always claims, so legalization is total.

use swiftlw_core::{camelize, sanitize_name, words_to_identifier};

use crate::diagnostic::Diagnostic;
use crate::error::{Error, Result};
use crate::language::LanguageConfig;

/// Separators recognized by the catch-all word-join rule.
const WORD_SEPARATORS: &[char] = &['-', '_', ' ', ':', '(', ')'];

/// Fallback identifier for raw names that legalize to nothing.
const EMPTY_FALLBACK: &str = "empty";

/// A name candidate threaded through the rule chain.
#[derive(Debug)]
struct Candidate<'a> {
    /// Working text; starts as the raw name.
    text: String,
    /// Resolved target datatype of the holder, for the numeric rule.
    datatype: &'a str,
    /// Set once the pascal-like rule has camel-cased the text.
    camelized: bool,
}

type Rule = fn(&LanguageConfig, &mut Candidate<'_>) -> Option<String>;

/// Variable/enum-case rules, in precedence order. First claim wins.
const VARIABLE_RULES: &[(&str, Rule)] = &[
    ("empty", rule_empty),
    ("leading-digits", rule_leading_digits),
    ("symbol", rule_symbol),
    ("pascal-like", rule_pascal_like),
    ("reserved", rule_reserved),
    ("numeric-prefix", rule_numeric_prefix),
    ("camelized", rule_camelized),
    ("word-join", rule_word_join),
];

/// Legalize a raw schema name into a variable or enum-case identifier.
///
/// `datatype` is the already-resolved target type of the declaring
/// property; it participates only in the numeric-prefix rule. The raw name
/// is never mutated — callers keep it alongside the result so the renderer
/// can detect divergence.
pub fn legalize_variable_name(config: &LanguageConfig, raw: &str, datatype: &str) -> String {
    let mut candidate = Candidate {
        text: raw.to_string(),
        datatype,
        camelized: false,
    };
    for (_, rule) in VARIABLE_RULES {
        if let Some(name) = rule(config, &mut candidate) {
            return name;
        }
    }
    unreachable!("the word-join rule claims every candidate")
}

fn rule_empty(_config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    candidate
        .text
        .is_empty()
        .then(|| EMPTY_FALLBACK.to_string())
}

/// Digit-leading names keep their digit run behind an underscore and
/// camel-case the remainder. Terminal: the numeric-prefix substitutions
/// never see digit-leading names, even ones containing `+`, `-`, or `.`.
fn rule_leading_digits(_config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    let digits: String = candidate
        .text
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let rest = &candidate.text[digits.len()..];
    Some(format!("_{digits}{}", camelize(rest, true)))
}

/// Whole-string symbol tokens (e.g. `$`, `#`) become their word form.
fn rule_symbol(config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    let word = config.symbol_name(&candidate.text)?;
    Some(camelize(&words_to_identifier(word, &[' ']), true))
}

/// A single already-PascalCase-like token is camel-cased here and
/// remembered; a token that is already camelCase-shaped is remembered
/// as-is. Later rules still get a chance to claim the candidate. Counting
/// lowercase-start tokens as camelized keeps re-legalization the identity
/// on every name this chain can produce.
fn rule_pascal_like(_config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    if is_pascal_like(&candidate.text) {
        candidate.text = camelize(&candidate.text, true);
        candidate.camelized = true;
    } else if is_camel_like(&candidate.text) {
        candidate.camelized = true;
    }
    None
}

fn rule_reserved(config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    let lowercased = candidate.text.to_lowercase();
    config
        .is_reserved(&lowercased)
        .then(|| escape_reserved(&lowercased))
}

/// Numeric-typed raw names get a "number" prefix, then the literal
/// substitutions `-`→minus, `+`→plus, `.`→dot, in that order.
fn rule_numeric_prefix(config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    if !config.is_numeric_type(candidate.datatype) || candidate.camelized {
        return None;
    }
    let name = format!("number{}", camelize(&candidate.text, false));
    Some(
        name.replace('-', "minus")
            .replace('+', "plus")
            .replace('.', "dot"),
    )
}

fn rule_camelized(_config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    candidate.camelized.then(|| candidate.text.clone())
}

/// Catch-all: lowercase, capitalize words split on the separator set,
/// strip the separators, camel-case. The joined result is then held to the
/// identifier invariant: never empty, never digit-leading, never reserved.
fn rule_word_join(config: &LanguageConfig, candidate: &mut Candidate<'_>) -> Option<String> {
    let joined = camelize(&words_to_identifier(&candidate.text, WORD_SEPARATORS), true);
    if joined.is_empty() {
        return Some(EMPTY_FALLBACK.to_string());
    }
    if joined.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(format!("_{joined}"));
    }
    if config.is_reserved(&joined) {
        return Some(escape_reserved(&joined));
    }
    Some(joined)
}

/// Matches the shape `[A-Z][a-z0-9]+[a-zA-Z0-9]*`: one capital, a run of
/// lowercase or digits, then anything alphanumeric.
fn is_pascal_like(name: &str) -> bool {
    let mut chars = name.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_uppercase()) {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    let run = rest
        .iter()
        .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .count();
    run > 0 && rest[run..].iter().all(|c| c.is_ascii_alphanumeric())
}

/// Matches the shape `[a-z][a-zA-Z0-9]*`: an already-legal camelCase (or
/// plain lowercase) token.
fn is_camel_like(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Legalize a schema type name into a target model/type name.
pub fn legalize_model_name(name: &str) -> String {
    camelize(name, false)
}

/// Legalize an operation id into a callable method name.
///
/// An operation without a usable name is a fatal configuration error. A
/// reserved-word collision is rewritten to a `call`-prefixed form and
/// reported as a warning; generation continues.
pub fn legalize_method_name(
    config: &LanguageConfig,
    raw: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<String> {
    let candidate = camelize(&sanitize_name(raw), true);
    if candidate.is_empty() {
        return Err(Error::EmptyOperationId {
            operation_id: raw.to_string(),
        });
    }
    if config.is_reserved(&candidate) {
        let renamed = camelize(&format!("call_{raw}"), true);
        diagnostics.push(Diagnostic::warning(
            "naming",
            format!(
                "'{candidate}' (reserved word) cannot be used as method name, renamed to '{renamed}'"
            ),
        ));
        return Ok(renamed);
    }
    if candidate.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(format!("_{candidate}"));
    }
    Ok(candidate)
}

/// Escape a reserved word with an underscore prefix.
pub fn escape_reserved(name: &str) -> String {
    format!("_{name}")
}

/// Strip double quotes so raw schema text cannot break out of a generated
/// string literal.
pub fn escape_quote(input: &str) -> String {
    input.replace('"', "")
}

/// Neutralize comment delimiters so raw schema text cannot close a
/// generated block comment early.
pub fn escape_comment(input: &str) -> String {
    input.replace("*/", "*_/").replace("/*", "/_*")
}
