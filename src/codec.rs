//! The public encode/decode facade.

use std::collections::HashMap;

use crate::code_table::build_code_table;
use crate::frequency::frequency_table;
use crate::tree::{build_tree, Node};

/// A prefix-code codec fitted to one source text.
///
/// Construction runs the whole pipeline eagerly: frequency analysis over
/// the allowed alphabet, tree construction, code assignment. The tree and
/// code table are immutable for the codec's lifetime.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: Option<Node>,
    codes: HashMap<char, String>,
}

impl Codec {
    /// Fit a codec to `source`.
    ///
    /// A source that filters down to nothing produces a codec with an
    /// empty code table: it encodes everything to `""` and decodes
    /// everything to `""`.
    pub fn new(source: &str) -> Self {
        let frequencies = frequency_table(source);
        let tree = build_tree(&frequencies);
        let codes = tree.as_ref().map(build_code_table).unwrap_or_default();
        Codec { tree, codes }
    }

    /// Encode `text` into a string of `'0'`/`'1'` characters.
    ///
    /// Characters without a table entry contribute nothing. When the tree
    /// is a lone leaf its code is the empty string, which would erase the
    /// message, so each encodable character is emitted as a single `'0'`
    /// bit instead; [`decode`](Self::decode) mirrors this.
    pub fn encode(&self, text: &str) -> String {
        if matches!(&self.tree, Some(root) if root.is_leaf()) {
            return text
                .chars()
                .filter(|ch| self.codes.contains_key(ch))
                .map(|_| '0')
                .collect();
        }
        let mut bits = String::new();
        for ch in text.chars() {
            match self.codes.get(&ch) {
                Some(code) => bits.push_str(code),
                None => log::debug!("no code for {ch:?}, skipping"),
            }
        }
        bits
    }

    /// Decode a string of bits back into text.
    ///
    /// A `'0'` walks left, any other character walks right; reaching a
    /// leaf emits its character and resets the walk to the root. Trailing
    /// bits that never reach a leaf are dropped.
    pub fn decode(&self, bits: &str) -> String {
        let Some(root) = self.tree.as_ref() else {
            return String::new();
        };
        // A lone-leaf tree decodes every bit to its one character.
        if let Node::Leaf { ch, .. } = root {
            return bits.chars().map(|_| *ch).collect();
        }

        let mut text = String::new();
        let mut current = root;
        for bit in bits.chars() {
            if let Node::Internal { left, right, .. } = current {
                current = if bit == '0' { left } else { right };
            }
            if let Node::Leaf { ch, .. } = current {
                text.push(*ch);
                current = root;
            }
        }
        if !std::ptr::eq(current, root) {
            log::debug!("dropping trailing bits that do not reach a leaf");
        }
        text
    }

    /// The fitted character-to-code mapping.
    pub fn code_table(&self) -> &HashMap<char, String> {
        &self.codes
    }

    /// Root of the fitted coding tree, if the source had any characters.
    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_scenario_round_trip() {
        let codec = Codec::new("aaabbcdf");
        assert_eq!(codec.code_table().len(), 5);
        let bits = codec.encode("aaabbcdf");
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
        assert_eq!(codec.decode(&bits), "aaabbcdf");
    }

    #[test]
    fn test_round_trip_with_commas_and_spaces() {
        let source = "the quick brown fox, the lazy dog";
        let codec = Codec::new(source);
        assert_eq!(codec.decode(&codec.encode(source)), source);
    }

    #[test]
    fn test_encode_ignores_characters_outside_the_table() {
        let codec = Codec::new("abcabc");
        assert_eq!(codec.encode("a1b2c3!"), codec.encode("abc"));
        assert_eq!(codec.decode(&codec.encode("a1b2c3!")), "abc");
    }

    #[test]
    fn test_encode_depends_only_on_filtered_subsequence() {
        let codec = Codec::new("hello, world");
        assert_eq!(codec.encode("he7ll-o"), codec.encode("hello"));
    }

    #[test]
    fn test_empty_input_encodes_to_empty() {
        let codec = Codec::new("some text");
        assert_eq!(codec.encode(""), "");
        assert_eq!(codec.decode(""), "");
    }

    #[test]
    fn test_empty_table_codec() {
        for source in ["", "1234!?"] {
            let codec = Codec::new(source);
            assert!(codec.code_table().is_empty());
            assert!(codec.tree().is_none());
            assert_eq!(codec.encode("anything"), "");
            assert_eq!(codec.decode("0101"), "");
        }
    }

    #[test]
    fn test_degenerate_single_character_round_trip() {
        let codec = Codec::new("aaaaaa");
        assert_eq!(codec.code_table().len(), 1);
        assert_eq!(codec.code_table().get(&'a'), Some(&String::new()));
        let bits = codec.encode("aaaa");
        assert_eq!(bits, "0000");
        assert_eq!(codec.decode(&bits), "aaaa");
    }

    #[test]
    fn test_two_symbol_codes_follow_merge_order() {
        // 'a' outranks 'b', so it is extracted first and lands on the left.
        let codec = Codec::new("aab");
        assert_eq!(codec.code_table().get(&'a'), Some(&"0".to_string()));
        assert_eq!(codec.code_table().get(&'b'), Some(&"1".to_string()));
        assert_eq!(codec.decode("001"), "aab");
    }

    #[test]
    fn test_malformed_trailing_bits_are_dropped() {
        let codec = Codec::new("aabc");
        // 'a' sits two levels deep, so a single bit cannot reach a leaf.
        assert_eq!(codec.code_table().get(&'a'), Some(&"00".to_string()));
        assert_eq!(codec.decode("0"), "");
        let mut bits = codec.encode("aabc");
        bits.push('0');
        assert_eq!(codec.decode(&bits), "aabc");
    }
}
