use crate::selector::parser::SelectorDeclaration;
use alloy_primitives::keccak256;

/// The 4-byte method identifier.
pub type Selector = [u8; 4];

/// Keccak-256 of the exact signature text, truncated to 4 bytes.
///
/// The text must already be canonical (no whitespace, exact comma
/// separation, original casing); any deviation changes the hash.
pub fn selector_of(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Selector of a declaration's canonical rendering.
pub fn selector(decl: &SelectorDeclaration) -> Selector {
    selector_of(&decl.canonical_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::parser::parse;
    use proptest::prelude::*;

    #[test]
    fn known_selectors() {
        assert_eq!(hex::encode(selector_of("transfer(address,uint256)")), "a9059cbb");
        assert_eq!(hex::encode(selector_of("balanceOf(address)")), "70a08231");
        assert_eq!(hex::encode(selector_of("approve(address,uint256)")), "095ea7b3");
        assert_eq!(
            hex::encode(selector_of("transferFrom(address,address,uint256)")),
            "23b872dd"
        );
        assert_eq!(hex::encode(selector_of("totalSupply()")), "18160ddd");
        assert_eq!(hex::encode(selector_of("withdraw(uint256)")), "2e1a7d4d");
        assert_eq!(hex::encode(selector_of("baz(uint32,bool)")), "cdcd77c0");
        assert_eq!(
            hex::encode(selector_of(
                "swapExactETHForTokens(uint256,address[],address,uint256)"
            )),
            "7ff36ab5"
        );
    }

    #[test]
    fn declaration_hash_matches_text_hash() {
        let decl = parse("transfer(address,uint256)").unwrap();
        assert_eq!(selector(&decl), selector_of("transfer(address,uint256)"));
    }

    #[test]
    fn casing_changes_the_hash() {
        assert_ne!(
            selector_of("transfer(address,uint256)"),
            selector_of("Transfer(address,uint256)")
        );
    }

    proptest! {
        /// Parsing a canonical signature and hashing its declaration must
        /// match hashing the raw text directly.
        #[test]
        fn parse_then_hash_equals_direct_hash(
            name in "[A-Za-z][A-Za-z0-9]{0,11}",
            args in prop::collection::vec(
                prop::sample::select(vec![
                    "uint256", "address", "bool", "bytes", "bytes32",
                    "string", "uint8", "int128", "address[]", "uint256[4]",
                ]),
                0..6,
            ),
        ) {
            let text = format!("{}({})", name, args.join(","));
            let decl = parse(&text).unwrap();
            prop_assert_eq!(selector(&decl), selector_of(&text));
            prop_assert_eq!(decl.canonical_text(), text);
        }
    }
}
