//! Sizing for SPL account-compression concurrent merkle tree accounts.
//!
//! The tree account is allocated client side and handed to Bubblegum's
//! `CreateTreeConfig`, so the byte math here has to match the on-chain layout
//! exactly: a v1 header, the tree body (sequence counters, a changelog ring
//! buffer, the rightmost path), and an optional canopy cache of upper nodes.

/// Discriminator + header-version bytes followed by the v1 header struct
/// (max_buffer_size u32, max_depth u32, authority 32, creation_slot u64,
/// 6 bytes padding).
const HEADER_SIZE_V1: u64 = 2 + 54;

/// One 32-byte node.
const NODE_SIZE: u64 = 32;

/// Depth the demo trees use by default; holds 2^14 = 16,384 leaves.
pub const DEFAULT_MAX_DEPTH: u32 = 14;

/// Changelog ring-buffer size the demo trees use by default.
pub const DEFAULT_MAX_BUFFER_SIZE: u32 = 64;

/// Levels the canopy leaves off the proof path relative to the full depth.
const CANOPY_DEPTH_OFFSET: u32 = 5;

/// Size parameters for a concurrent merkle tree account.
///
/// The canopy depth is always derived from the max depth rather than chosen
/// independently: caching all but the last five proof levels on chain keeps
/// mint/transfer proofs small enough for a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSpec {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: u32,
}

impl TreeSpec {
    pub fn new(max_depth: u32, max_buffer_size: u32) -> Self {
        Self {
            max_depth,
            max_buffer_size,
            canopy_depth: max_depth.saturating_sub(CANOPY_DEPTH_OFFSET),
        }
    }

    /// Maximum number of leaves (compressed NFTs) the tree can hold.
    pub fn capacity(&self) -> u64 {
        1u64 << self.max_depth
    }

    /// Total on-chain account size in bytes.
    ///
    /// Header, then the tree body: three u64 counters, `max_buffer_size`
    /// changelog entries and one rightmost-path record (both are
    /// `32 * depth + 40` bytes), then the canopy nodes.
    pub fn account_size(&self) -> u64 {
        let depth = self.max_depth as u64;
        let buffer = self.max_buffer_size as u64;

        let record = NODE_SIZE * depth + NODE_SIZE + 4 + 4;
        let tree_body = 3 * 8 + buffer * record + record;

        HEADER_SIZE_V1 + tree_body + self.canopy_size()
    }

    /// Bytes occupied by the canopy: every node of the cached upper levels.
    pub fn canopy_size(&self) -> u64 {
        if self.canopy_depth == 0 {
            return 0;
        }
        ((1u64 << (self.canopy_depth + 1)) - 2) * NODE_SIZE
    }
}

impl Default for TreeSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_BUFFER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canopy_is_depth_minus_five() {
        let spec = TreeSpec::new(14, 64);
        assert_eq!(spec.canopy_depth, 9);

        let shallow = TreeSpec::new(3, 8);
        assert_eq!(shallow.canopy_depth, 0);
    }

    #[test]
    fn default_spec_matches_demo_parameters() {
        let spec = TreeSpec::default();
        assert_eq!(spec.max_depth, 14);
        assert_eq!(spec.max_buffer_size, 64);
        assert_eq!(spec.canopy_depth, 9);
        assert_eq!(spec.capacity(), 16_384);
    }

    #[test]
    fn account_size_matches_onchain_layout() {
        // Known value for depth 14, buffer 64, canopy 9:
        // 56 + (24 + 65 * 488) + 1022 * 32 = 64_504.
        let spec = TreeSpec::new(14, 64);
        assert_eq!(spec.account_size(), 64_504);
    }

    #[test]
    fn canopy_free_tree_has_no_canopy_bytes() {
        let spec = TreeSpec::new(5, 8);
        assert_eq!(spec.canopy_size(), 0);
        // 56 + 24 + 9 * (32 * 5 + 40)
        assert_eq!(spec.account_size(), 56 + 24 + 9 * 200);
    }
}
