//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// The first string of each arm is the canonical form used by `Display`.
/// Additional strings after `|` are accepted by `FromStr` as aliases.
/// Parsing is case-insensitive and ignores surrounding whitespace.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::ListViewError;
///
/// enum_display_fromstr!(
///     MyEnum,
///     ListViewError::invalid_my_enum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variant2" | "v2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_ctor:path,
        { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::ListViewError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok($enum_name::$variant),)+
                    _ => Err($error_ctor(s.to_string())),
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use crate::error::ListViewError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestEnum {
        A,
        B,
    }

    enum_display_fromstr!(TestEnum, ListViewError::Other, { A => "a" | "alpha", B => "b" });

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(TestEnum::A.to_string(), "a");
        assert_eq!(TestEnum::B.to_string(), "b");
    }

    #[test]
    fn test_from_str_accepts_aliases_case_insensitively() {
        assert_eq!(TestEnum::from_str("ALPHA").unwrap(), TestEnum::A);
        assert_eq!(TestEnum::from_str(" b ").unwrap(), TestEnum::B);
        assert!(TestEnum::from_str("c").is_err());
    }
}
