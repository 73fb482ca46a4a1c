use std::collections::HashSet;

use ducktype_parser::{keywords::SCALAR_GROUPS, parse_type};

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Every alias in every group parses to that group's target type.
#[test]
fn every_alias_parses_to_its_group_target() {
    for (aliases, kind) in SCALAR_GROUPS {
        for &alias in *aliases {
            let parsed = parse_type(alias).unwrap();
            assert_eq!(parsed, kind.data_type(), "alias {alias:?}");
        }
    }
}

/// The declared-order contract: when one group's alias extends another
/// group's alias across a word boundary (`"timestamp with time zone"` vs
/// `"timestamp"`), the longer group must be declared first, or the shorter
/// alias would win and strand the rest of the keyword.
#[test]
fn alias_table_orders_word_prefix_groups_longest_first() {
    for (short_idx, (short_aliases, _)) in SCALAR_GROUPS.iter().enumerate() {
        for &short in *short_aliases {
            for (long_idx, (long_aliases, _)) in SCALAR_GROUPS.iter().enumerate() {
                if long_idx == short_idx {
                    continue;
                }
                for &long in *long_aliases {
                    let extends = long.strip_prefix(short).is_some_and(|tail| {
                        !tail.is_empty() && !tail.chars().next().is_some_and(is_ident_continue)
                    });
                    if extends {
                        assert!(
                            long_idx < short_idx,
                            "{long:?} must be declared before {short:?}"
                        );
                    }
                }
            }
        }
    }
}

/// No alias is claimed by two groups.
#[test]
fn alias_table_has_no_duplicate_aliases() {
    let mut seen = HashSet::new();
    for (aliases, _) in SCALAR_GROUPS {
        for &alias in *aliases {
            assert!(seen.insert(alias), "duplicate alias {alias:?}");
        }
    }
}

/// An alias followed by an identifier character is not a keyword match.
#[test]
fn alias_never_matches_identifier_prefix() {
    assert!(parse_type("intx").is_err());
    assert!(parse_type("json_blob").is_err());
    assert!(parse_type("timestampz").is_err());
}
