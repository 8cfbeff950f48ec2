use std::fmt;

const MAX_NAME_LEN: usize = 100;

/// Names under this prefix are written only by payment submission.
pub const SCREENSHOT_PREFIX: &str = "payment-screenshot-";

/// Lookup key of a stored asset: 1 to 100 characters of `[a-z0-9_-]`.
///
/// The character set keeps names safe to join onto a directory path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid asset name `{0}`")]
pub struct InvalidAssetName(pub String);

impl AssetName {
    pub fn parse(raw: &str) -> Result<Self, InvalidAssetName> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_NAME_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidAssetName(raw.to_string()))
        }
    }

    pub fn is_screenshot(&self) -> bool {
        self.0.starts_with(SCREENSHOT_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Candidate file stems for the bundled fallback, in lookup order.
    pub fn file_stems(&self) -> Vec<String> {
        let dashed = self.0.replace('_', "-");
        if dashed == self.0 {
            vec![self.0.clone()]
        } else {
            vec![self.0.clone(), dashed]
        }
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: AssetName,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_digits_dash_and_underscore() {
        for name in ["logo", "hero_banner", "team-photo-2", "a", &"x".repeat(100)] {
            assert!(AssetName::parse(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_traversal_and_odd_characters() {
        for name in ["", "../etc/passwd", "Logo", "logo.png", "a b", "ünï", &"x".repeat(101)] {
            assert!(AssetName::parse(name).is_err(), "{name}");
        }
    }

    #[test]
    fn underscore_names_also_try_dashed_stem() {
        let name = AssetName::parse("hero_banner").unwrap();
        assert_eq!(name.file_stems(), vec!["hero_banner", "hero-banner"]);

        let plain = AssetName::parse("logo").unwrap();
        assert_eq!(plain.file_stems(), vec!["logo"]);
    }

    #[test]
    fn screenshot_names_are_recognised() {
        assert!(AssetName::parse("payment-screenshot-1f2e").unwrap().is_screenshot());
        assert!(!AssetName::parse("payment-qr").unwrap().is_screenshot());
    }

    #[test]
    fn debug_omits_payload() {
        let asset = Asset {
            name: AssetName::parse("logo").unwrap(),
            mime_type: "image/png".into(),
            data: vec![0; 2048],
        };
        let debug = format!("{:?}", asset);
        assert!(debug.contains("2048"));
        assert!(!debug.contains("[0, 0"));
    }
}
