use super::{PortSet, PortToken};

impl PortSet {
    /// Whether `port`, in the packet's original text form, is in the set.
    pub fn lookup(&self, port: &str) -> bool {
        // `*` anywhere in the list means all ports
        if self.any {
            return true;
        }

        self.tokens
            .iter()
            .any(|token| matches!(token, PortToken::Exact(p) if p == port))
    }
}
