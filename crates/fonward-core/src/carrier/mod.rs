use crate::error::CoreError;

/// Number of decimal digits; each node keys its children by digit value.
const RADIX: usize = 10;

#[derive(Debug, Default)]
struct CarrierNode {
    children: [Option<Box<CarrierNode>>; RADIX],
    carrier: Option<String>,
}

/// Digit-keyed prefix tree mapping dial prefixes to carrier names.
///
/// The trie is built once from the configured prefix table and never
/// mutated afterwards; `&self` lookups from any number of threads are safe
/// once construction has been published.
#[derive(Debug, Default)]
pub struct CarrierTrie {
    root: CarrierNode,
}

/// Result of a longest-prefix walk. `carrier` is `None` when no inserted
/// prefix matched; `prefix` is then the first three (or fewer) characters
/// of the input, a generic area-code display value for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierMatch {
    pub carrier: Option<String>,
    pub prefix: String,
}

impl CarrierTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from `(prefix, carrier)` pairs; later duplicates of a
    /// prefix overwrite earlier ones.
    pub fn from_table<I, P, C>(table: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let mut trie = Self::new();
        for (prefix, carrier) in table {
            trie.insert(prefix.as_ref(), carrier.as_ref())?;
        }
        Ok(trie)
    }

    /// Inserts or overwrites `carrier` at the node reached by walking
    /// `prefix` digit by digit, creating intermediate nodes as needed.
    pub fn insert(&mut self, prefix: &str, carrier: &str) -> Result<(), CoreError> {
        let mut node = &mut self.root;
        for ch in prefix.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| CoreError::InvalidPrefix(prefix.to_string()))?;
            let child = node.children[digit as usize].get_or_insert_with(Default::default);
            node = &mut **child;
        }
        node.carrier = Some(carrier.to_string());
        Ok(())
    }

    /// Walks `number` digit by digit and returns the deepest carrier seen
    /// along the way together with the prefix consumed up to it. Longer
    /// inserted prefixes always win over shorter ones that lead to them.
    ///
    /// The walk stops at the end of the input, at the first digit with no
    /// child, or at the first non-digit character.
    pub fn longest_prefix(&self, number: &str) -> CarrierMatch {
        let mut node = &self.root;
        let mut best: Option<(String, usize)> = node
            .carrier
            .as_deref()
            .map(|carrier| (carrier.to_string(), 0));

        for (idx, ch) in number.char_indices() {
            let Some(digit) = ch.to_digit(10) else {
                break;
            };
            let Some(child) = node.children[digit as usize].as_deref() else {
                break;
            };
            node = child;
            if let Some(carrier) = node.carrier.as_deref() {
                best = Some((carrier.to_string(), idx + ch.len_utf8()));
            }
        }

        match best {
            Some((carrier, end)) => CarrierMatch {
                carrier: Some(carrier),
                prefix: number[..end].to_string(),
            },
            None => CarrierMatch {
                carrier: None,
                prefix: number.chars().take(3).collect(),
            },
        }
    }
}
