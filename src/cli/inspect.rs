// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `inspect` report: one box per map, bindings first, then the verdict.

use keyed::{all_violations, Binding, KeyMap, Violation};

use super::display::{
    hash_hex, key_text, pad_right, row, section_bot, section_mid, section_top, themed, type_name,
    verdict_badge, violation_label, DIM, GRAY,
};

const KEY_COLUMN: usize = 18;
const HASH_COLUMN: usize = 20;

/// ` pos  key  hash  type`
pub fn binding_line(position: usize, binding: &Binding) -> String {
    let key = binding.key();
    format!(
        " {}  {}{}{}",
        themed(GRAY, &[DIM], &format!("{:>3}", position)),
        pad_right(&key_text(key.text()), KEY_COLUMN),
        pad_right(&hash_hex(key.stable_hash()), HASH_COLUMN),
        type_name(binding.ty().name())
    )
}

/// ` kind  "a" (#i) and "b" (#j)`
pub fn violation_line(map: &KeyMap, violation: &Violation) -> String {
    let text_at = |position: usize| match map.bindings().get(position) {
        Some(binding) => key_text(binding.key().text()),
        None => themed(GRAY, &[DIM], "<out of range>"),
    };
    format!(
        " {}  {} (#{}) and {} (#{})",
        violation_label(violation.kind),
        text_at(violation.first),
        violation.first,
        text_at(violation.second),
        violation.second
    )
}

/// Print `map` and return how many violating pairs it has.
pub fn print_map(map: &KeyMap) -> usize {
    let violations = all_violations(map.bindings());

    section_top(map.name());
    for (position, binding) in map.bindings().iter().enumerate() {
        row(&binding_line(position, binding));
    }
    section_mid(&verdict_badge(violations.is_empty()));
    if violations.is_empty() {
        row(&format!(" {} bindings, all keys unique", map.len()));
    }
    for violation in &violations {
        row(&violation_line(map, violation));
    }
    section_bot();

    violations.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyed::demo::{CompileTimeMap, NON_UNIQUE_MAP};
    use keyed::ViolationKind;

    #[test]
    fn binding_line_shows_every_column() {
        let binding = CompileTimeMap::KEY_MAP.bindings()[2];
        let line = binding_line(2, &binding);
        assert!(line.contains("  2"));
        assert!(line.contains("\"is\""));
        assert!(line.contains(&format!("{:#018x}", keyed::key_hash("is"))));
        assert!(line.contains("f64"));
    }

    #[test]
    fn violation_line_names_both_positions() {
        let violation = Violation {
            kind: ViolationKind::DuplicateKey,
            first: 0,
            second: 1,
        };
        let line = violation_line(&NON_UNIQUE_MAP, &violation);
        assert!(line.contains("duplicate key"));
        assert!(line.contains("(#0)"));
        assert!(line.contains("(#1)"));
    }

    #[test]
    fn violation_line_tolerates_positions_past_the_end() {
        let violation = Violation {
            kind: ViolationKind::HashCollision,
            first: 1,
            second: 9,
        };
        let line = violation_line(&NON_UNIQUE_MAP, &violation);
        assert!(line.contains("\"world\""));
        assert!(line.contains("<out of range>"));
        assert!(line.contains("(#9)"));
    }
}
