//! Prefix dictionary over the letters A-Z.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]; traversal goes
//! through [`PrefixTrie::child`] one letter at a time.

const FANOUT: usize = 26;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(u32);

#[derive(Clone, Debug, Default)]
struct Node {
    children: [Option<NodeId>; FANOUT],
    terminal: bool,
}

#[derive(Clone, Debug)]
pub struct PrefixTrie {
    nodes: Vec<Node>,
    words: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        PrefixTrie { nodes: vec![Node::default()], words: 0 }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = PrefixTrie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Adds `word`. Words containing anything but A-Z are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        let slots: Option<Vec<usize>> = word.chars().map(slot).collect();
        let slots = match slots {
            Some(slots) if !slots.is_empty() => slots,
            _ => return false,
        };

        let mut node = self.root();
        for idx in slots {
            node = match self.nodes[node.0 as usize].children[idx] {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[node.0 as usize].children[idx] = Some(next);
                    next
                }
            };
        }

        let leaf = &mut self.nodes[node.0 as usize];
        if !leaf.terminal {
            leaf.terminal = true;
            self.words += 1;
        }
        true
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        let idx = slot(ch)?;
        self.nodes.get(node.0 as usize)?.children[idx]
    }

    /// Follows `prefix` from the root, `None` as soon as a letter has no child.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(self.root(), |node, ch| self.child(node, ch))
    }

    /// Whether `prefix` followed by `next` still begins some word.
    pub fn accepts(&self, prefix: &str, next: char) -> bool {
        self.walk(prefix)
            .and_then(|node| self.child(node, next))
            .is_some()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word)
            .map(|node| self.nodes[node.0 as usize].terminal)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        PrefixTrie::new()
    }
}

fn slot(ch: char) -> Option<usize> {
    if ch.is_ascii_uppercase() {
        Some((ch as u8 - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrefixTrie {
        PrefixTrie::from_words(["CRANE", "CRANK", "CRISP", "BLOAT"])
    }

    #[test]
    fn empty_prefix_accepts_first_letters_only() {
        let trie = sample();
        assert!(trie.accepts("", 'C'));
        assert!(trie.accepts("", 'B'));
        assert!(!trie.accepts("", 'Z'));
    }

    #[test]
    fn walks_shared_prefixes() {
        let trie = sample();
        assert!(trie.accepts("CRAN", 'E'));
        assert!(trie.accepts("CRAN", 'K'));
        assert!(trie.accepts("CR", 'I'));
        assert!(!trie.accepts("CRAN", 'X'));
    }

    #[test]
    fn broken_prefix_rejects_everything() {
        let trie = sample();
        assert_eq!(trie.walk("CX"), None);
        assert!(!trie.accepts("CX", 'A'));
        assert!(!trie.accepts("CRANE", 'S'));
    }

    #[test]
    fn child_steps_one_letter() {
        let trie = sample();
        let c = trie.child(trie.root(), 'C').unwrap();
        assert!(trie.child(c, 'R').is_some());
        assert!(trie.child(c, 'A').is_none());
        assert!(trie.child(c, 'r').is_none());
    }

    #[test]
    fn tracks_whole_words() {
        let mut trie = sample();
        assert_eq!(trie.len(), 4);
        assert!(trie.contains_word("CRANE"));
        assert!(!trie.contains_word("CRAN"));
        assert!(!trie.insert("cr4ne"));
        assert!(trie.insert("CRANE"));
        assert_eq!(trie.len(), 4);
    }
}
