//! Build script for verdict-i18n
//!
//! Validates every embedded Fluent locale file before the crate compiles:
//! - Fluent syntax is valid
//! - All locales carry the same message keys as the reference locale (en)
//! - Each message references the same parameter names in every locale

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

const REFERENCE_LOCALE: &str = "en";

/// Extract message keys and their parameter names from a Fluent file
fn extract_messages_and_params(content: &str) -> Result<BTreeMap<String, BTreeSet<String>>, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut messages = BTreeMap::new();

    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let mut params = BTreeSet::new();
            if let Some(Pattern { elements }) = message.value {
                collect_params_from_pattern(&elements, &mut params);
            }
            messages.insert(message.id.name.to_string(), params);
        }
    }

    Ok(messages)
}

fn collect_params_from_pattern<S>(elements: &[PatternElement<S>], params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            collect_params_from_expression(expression, params);
        }
    }
}

fn collect_params_from_expression<S>(expression: &Expression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        Expression::Select { selector, variants } => {
            collect_params_from_inline(selector, params);
            for variant in variants {
                collect_params_from_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => collect_params_from_inline(inline, params),
    }
}

fn collect_params_from_inline<S>(expression: &InlineExpression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for argument in &arguments.positional {
                collect_params_from_inline(argument, params);
            }
            for argument in &arguments.named {
                collect_params_from_inline(&argument.value, params);
            }
        }
        InlineExpression::Placeable { expression } => {
            collect_params_from_expression(expression, params);
        }
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

fn validate_locale_file(path: &Path) -> Result<BTreeMap<String, BTreeSet<String>>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    extract_messages_and_params(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn find_locale_files() -> Result<BTreeMap<String, PathBuf>, String> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set".to_string())?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut locale_files = BTreeMap::new();

    for entry in fs::read_dir(&locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {e}"))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        let path = entry.path();

        if path.is_dir() {
            let locale_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

            let main_ftl = path.join("main.ftl");
            if main_ftl.exists() {
                locale_files.insert(locale_name.to_string(), main_ftl);
            }
        }
    }

    if !locale_files.contains_key(REFERENCE_LOCALE) {
        return Err(format!(
            "Reference locale '{REFERENCE_LOCALE}' not found under {}",
            locales_dir.display()
        ));
    }

    Ok(locale_files)
}

fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let locale_files = find_locale_files()?;

    let mut all_messages: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();
    let mut errors = Vec::new();

    for (locale, path) in &locale_files {
        match validate_locale_file(path) {
            Ok(messages) => {
                println!("{locale}: {} messages", messages.len());
                all_messages.insert(locale.clone(), messages);
            }
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        return Err(format!("Validation errors:\n{}", errors.join("\n")));
    }

    let reference_messages = &all_messages[REFERENCE_LOCALE];

    for (locale, messages) in &all_messages {
        if locale == REFERENCE_LOCALE {
            continue;
        }

        for key in reference_messages.keys() {
            if !messages.contains_key(key) {
                errors.push(format!("{locale}: missing message key '{key}'"));
            }
        }
        for key in messages.keys() {
            if !reference_messages.contains_key(key) {
                errors.push(format!("{locale}: extra message key '{key}'"));
            }
        }
        for (key, reference_params) in reference_messages {
            if let Some(locale_params) = messages.get(key) {
                if reference_params != locale_params {
                    errors.push(format!(
                        "{locale}: parameter mismatch for '{key}'. Expected: {reference_params:?}, Found: {locale_params:?}"
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("Consistency errors:\n{}", errors.join("\n")))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
