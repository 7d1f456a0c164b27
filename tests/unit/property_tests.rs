//! Property-based tests for content addressing and deletion scoping.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use stevedore::domain::artifact::{content_address, is_within, nix_base32_encode};

proptest! {
    #[test]
    fn content_address_is_stable_and_well_formed(content in ".{0,256}") {
        let first = content_address(&content);
        let second = content_address(&content);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 52);
        prop_assert!(
            first
                .chars()
                .all(|c| "0123456789abcdfghijklmnpqrsvwxyz".contains(c))
        );
    }

    #[test]
    fn distinct_content_gets_distinct_addresses(a in ".{0,64}", b in ".{0,64}") {
        prop_assume!(a != b);
        prop_assert_ne!(content_address(&a), content_address(&b));
    }

    #[test]
    fn encode_length_matches_bit_count(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(nix_base32_encode(&bytes).len(), (bytes.len() * 8).div_ceil(5));
    }

    #[test]
    fn containment_accepts_children_and_rejects_everything_else(name in "[a-z0-9]{1,12}") {
        let root = Path::new("/run/stevedore");
        prop_assert!(is_within(&root.join(&name), root));
        prop_assert!(!is_within(&PathBuf::from(&name), root));
        prop_assert!(!is_within(&Path::new("/etc").join(&name), root));
    }
}
