//! Placeholder substitution for provider URL templates.
//!
//! Templates carry `${name}` tokens (whitespace inside the braces is allowed,
//! e.g. `${ owner }`). Rendering is a single left-to-right pass: each named
//! placeholder is replaced at its first occurrence only, and substituted
//! values are copied verbatim without being scanned again.

/// Renders `template`, replacing the first occurrence of each `${name}` listed
/// in `substitutions` with its value.
///
/// Placeholders that are not listed, or that already had their first
/// occurrence replaced, are left in the output unchanged.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut used = vec![false; substitutions.len()];
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let token = &rest[start..];

        let replaced = token[2..].find('}').and_then(|end| {
            let name = token[2..2 + end].trim();
            let idx = substitutions
                .iter()
                .position(|(key, _)| *key == name)
                .filter(|&i| !used[i])?;
            used[idx] = true;
            Some((idx, 2 + end + 1))
        });

        match replaced {
            Some((idx, token_len)) => {
                out.push_str(substitutions[idx].1);
                rest = &token[token_len..];
            }
            None => {
                // Not a known placeholder: emit the `$` and keep scanning so a
                // real token nested after it is still found.
                out.push('$');
                rest = &token[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
