// crates/wirebin-cli/src/io/hex.rs
//
// Loose hex input ("0a 0b", "0x0a0b", "0a:0b") and canonical hex output.

use anyhow::Context;

pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = text
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .map(|tok| {
            tok.strip_prefix("0x")
                .or_else(|| tok.strip_prefix("0X"))
                .unwrap_or(tok)
        })
        .collect();
    ::hex::decode(&digits).with_context(|| format!("invalid hex {text:?}"))
}

/// Lowercase, space separated.
pub fn format_hex(bytes: &[u8]) -> String {
    let digits = ::hex::encode(bytes);
    digits
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        assert_eq!(parse_hex("0a 0B").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(parse_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(parse_hex("0a:0b,ff").unwrap(), vec![0x0a, 0x0b, 0xff]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hex("0g").is_err());
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("0x").unwrap().is_empty());
        let err = parse_hex("0a zz").unwrap_err();
        assert!(format!("{err:#}").contains("invalid hex"), "{err:#}");
    }

    #[test]
    fn formats_lowercase() {
        assert_eq!(format_hex(&[0x80, 0x01]), "80 01");
        assert_eq!(format_hex(&[]), "");
        assert_eq!(format_hex(&[0xde, 0xad, 0x0f]), "de ad 0f");
    }
}
