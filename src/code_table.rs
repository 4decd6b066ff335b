//! Code table generation from a coding tree.

use std::collections::HashMap;

use crate::tree::Node;

/// Walk the tree and assign each leaf character its bit-string code:
/// `'0'` per left descent, `'1'` per right descent.
///
/// Codes from distinct leaves of a full binary tree are mutually
/// prefix-free. A tree that is a single leaf produces one entry with the
/// empty string as its code.
pub fn build_code_table(root: &Node) -> HashMap<char, String> {
    let mut table = HashMap::new();
    assign_codes(root, String::new(), &mut table);
    table
}

fn assign_codes(node: &Node, prefix: String, table: &mut HashMap<char, String>) {
    match node {
        Node::Leaf { ch, .. } => {
            table.insert(*ch, prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            assign_codes(left, left_prefix, table);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            assign_codes(right, right_prefix, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::frequency_table;
    use crate::tree::build_tree;

    fn codes_for(text: &str) -> HashMap<char, String> {
        let tree = build_tree(&frequency_table(text)).expect("non-empty input");
        build_code_table(&tree)
    }

    fn is_prefix_free(table: &HashMap<char, String>) -> bool {
        let codes: Vec<&String> = table.values().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j && b.starts_with(a.as_str()) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_every_character_gets_a_code() {
        let table = codes_for("aaabbcdf");
        assert_eq!(table.len(), 5);
        for ch in ['a', 'b', 'c', 'd', 'f'] {
            assert!(table.contains_key(&ch), "missing code for '{ch}'");
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        assert!(is_prefix_free(&codes_for("aaabbcdf")));
        assert!(is_prefix_free(&codes_for("the quick brown fox, jumped")));
    }

    #[test]
    fn test_codes_are_binary_strings() {
        for code in codes_for("mississippi river").values() {
            assert!(code.chars().all(|c| c == '0' || c == '1'));
            assert!(!code.is_empty());
        }
    }

    #[test]
    fn test_two_characters_get_single_bits() {
        let table = codes_for("aab");
        let mut codes: Vec<&str> = table.values().map(String::as_str).collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["0", "1"]);
    }

    #[test]
    fn test_lone_leaf_gets_empty_code() {
        let table = codes_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(&String::new()));
    }
}
