use anyhow::{Context, Result};
use base::entities::cart::BasicCartItemProperties;
use base::entities::product::ProductId;
use base::entities::Item;
use std::fs;
use std::path::PathBuf;

/// Storage key the cart snapshot is persisted under between sessions.
pub const CART_STORAGE_KEY: &str = "cart-storage";

pub type CartSnapshot = Vec<Item<ProductId, BasicCartItemProperties>>;

pub trait CartStorage {
    fn save(&self, items: &[Item<ProductId, BasicCartItemProperties>]) -> Result<()>;

    fn load(&self) -> Result<CartSnapshot>;
}

pub struct JsonFileCartStorage {
    directory: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn snapshot_file_path(&self) -> PathBuf {
        self.directory.join(format!("{}.json", CART_STORAGE_KEY))
    }
}

impl CartStorage for JsonFileCartStorage {
    fn save(&self, items: &[Item<ProductId, BasicCartItemProperties>]) -> Result<()> {
        fs::create_dir_all(&self.directory)
            .context("an error occurred on creating the cart storage directory")?;

        let snapshot = serde_json::to_string(items)
            .context("an error occurred on serializing the cart snapshot")?;

        fs::write(self.snapshot_file_path(), snapshot)
            .context("an error occurred on writing the cart snapshot file")
    }

    fn load(&self) -> Result<CartSnapshot> {
        let snapshot_file_path = self.snapshot_file_path();

        if !snapshot_file_path.exists() {
            return Ok(CartSnapshot::new());
        }

        let snapshot = fs::read_to_string(&snapshot_file_path)
            .context("an error occurred on reading the cart snapshot file")?;

        serde_json::from_str(&snapshot)
            .context("an error occurred on deserializing the cart snapshot")
    }
}
