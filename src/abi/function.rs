use crate::abi::param_type::ParamType;
use crate::errors::AbiError;
use crate::selector::hasher::{selector_of, Selector};
use crate::selector::parser::SelectorDeclaration;

/// A function declaration accepted by the structural type checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub inputs: Vec<ParamType>,
}

impl Function {
    /// Accept a lexically-parsed declaration only if every argument token is
    /// a recognized ABI type.
    pub fn from_declaration(decl: &SelectorDeclaration) -> Result<Self, AbiError> {
        let inputs = decl
            .arguments
            .iter()
            .map(|token| ParamType::parse(token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: decl.name.clone(),
            inputs,
        })
    }

    /// Canonical signature text, re-rendered from the structural form.
    ///
    /// This is what the round-trip check compares against the raw input;
    /// aliased inputs (`uint` for `uint256`) come back expanded here.
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(ToString::to_string).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    /// Method identifier derived from the canonical rendering.
    pub fn selector(&self) -> Selector {
        selector_of(&self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_valid_declaration() {
        let decl = parse("baz(uint32,bool)").unwrap();
        let function = Function::from_declaration(&decl).unwrap();
        assert_eq!(function.signature(), "baz(uint32,bool)");
        assert_eq!(hex::encode(function.selector()), "cdcd77c0");
    }

    #[test]
    fn accepts_zero_argument_declaration() {
        let decl = parse("totalSupply()").unwrap();
        let function = Function::from_declaration(&decl).unwrap();
        assert_eq!(function.signature(), "totalSupply()");
        assert_eq!(hex::encode(function.selector()), "18160ddd");
    }

    #[test]
    fn rejects_unknown_argument_type() {
        let decl = parse("frob(notatype)").unwrap();
        assert!(Function::from_declaration(&decl).is_err());
    }

    #[test]
    fn expands_aliases_in_rendering() {
        let decl = parse("transfer(address,uint)").unwrap();
        let function = Function::from_declaration(&decl).unwrap();
        assert_eq!(function.signature(), "transfer(address,uint256)");
    }
}
