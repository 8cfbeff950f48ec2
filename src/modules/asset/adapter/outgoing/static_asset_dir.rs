use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};

use crate::modules::asset::application::{
    domain::entities::{Asset, AssetName},
    ports::outgoing::{BundledAssetError, BundledAssets},
};

const EXTENSIONS: [(&str, &str); 5] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

/// Images shipped in a directory next to the binary (`STATIC_ASSETS_DIR`).
#[derive(Debug, Clone)]
pub struct StaticAssetDir {
    root: PathBuf,
}

impl StaticAssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BundledAssets for StaticAssetDir {
    async fn find_bundled(&self, name: &AssetName) -> Result<Option<Asset>, BundledAssetError> {
        for stem in name.file_stems() {
            for (ext, mime_type) in EXTENSIONS {
                let path = self.root.join(format!("{stem}.{ext}"));

                match tokio::fs::read(&path).await {
                    Ok(data) => {
                        return Ok(Some(Asset {
                            name: name.clone(),
                            mime_type: mime_type.to_string(),
                            data,
                        }))
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => continue,
                    Err(e) => {
                        return Err(BundledAssetError::Io(format!("{}: {}", path.display(), e)))
                    }
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(label: &str) -> Self {
            let path = std::env::temp_dir().join(format!("devspark-assets-{label}-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn name(raw: &str) -> AssetName {
        AssetName::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn reads_file_and_infers_mime_from_extension() {
        let dir = TempDir::new("mime");
        std::fs::write(dir.0.join("logo.webp"), [7, 7]).unwrap();

        let asset = StaticAssetDir::new(&dir.0)
            .find_bundled(&name("logo"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(asset.mime_type, "image/webp");
        assert_eq!(asset.data, vec![7, 7]);
    }

    #[tokio::test]
    async fn underscore_name_matches_dashed_file() {
        let dir = TempDir::new("dash");
        std::fs::write(dir.0.join("hero-banner.jpg"), [1]).unwrap();

        let asset = StaticAssetDir::new(&dir.0)
            .find_bundled(&name("hero_banner"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(asset.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn png_is_preferred_over_other_extensions() {
        let dir = TempDir::new("order");
        std::fs::write(dir.0.join("team.gif"), [1]).unwrap();
        std::fs::write(dir.0.join("team.png"), [2]).unwrap();

        let asset = StaticAssetDir::new(&dir.0)
            .find_bundled(&name("team"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(asset.data, vec![2]);
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = TempDir::new("none");

        let found = StaticAssetDir::new(&dir.0)
            .find_bundled(&name("ghost"))
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
