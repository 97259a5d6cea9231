//! # satchel-store: The Persisted Cart Slot
//!
//! One durable key-value slot holding the serialized cart, so the cart
//! survives process restarts.
//!
//! ## Slot Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Slot Contract                                │
//! │                                                                         │
//! │  load()   absent file          ──► empty cart                           │
//! │           undecodable content  ──► empty cart (recovery, warn!)         │
//! │           well-formed content  ──► that cart                            │
//! │           NEVER returns an error                                        │
//! │                                                                         │
//! │  save()   serialize whole cart ──► temp file ──► rename over slot       │
//! │           subsequent load() returns exactly this cart                   │
//! │                                                                         │
//! │  clear()  remove the file; a missing file is already success            │
//! │           subsequent load() returns the empty cart                      │
//! │                                                                         │
//! │  Callers do load → mutate → save with no interleaving protection.       │
//! │  Two writers race; the last save wins. That race is accepted.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## On-Disk Format
//! A JSON array of cart line items. A slot value, not a database:
//! ```json
//! [{"productId":1,"name":"Tote","unitPriceCents":10100,"quantity":2}]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use satchel_core::{Cart, CartItem};

pub mod error;

pub use error::{StoreError, StoreResult};

/// Environment variable overriding the slot location.
pub const CART_PATH_ENV: &str = "SATCHEL_CART_PATH";

/// File name of the slot inside the app data directory.
const SLOT_FILE: &str = "cart.json";

// =============================================================================
// Cart Store
// =============================================================================

/// The persisted cart store: read/write/clear one durable slot.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Creates a store over an explicit slot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CartStore { path: path.into() }
    }

    /// Creates a store over the default slot.
    ///
    /// ## Resolution Order
    /// 1. `SATCHEL_CART_PATH` environment variable
    /// 2. Platform app-data directory + `cart.json`:
    ///    - Linux: `~/.local/share/satchel/cart.json`
    ///    - macOS: `~/Library/Application Support/za.satchel.satchel/cart.json`
    ///    - Windows: `%APPDATA%\satchel\satchel\data\cart.json`
    pub fn open_default() -> StoreResult<Self> {
        if let Ok(path) = std::env::var(CART_PATH_ENV) {
            debug!(path = %path, "cart slot path from environment");
            return Ok(CartStore::new(path));
        }

        let dirs = ProjectDirs::from("za", "satchel", "satchel").ok_or(StoreError::NoDataDir)?;
        Ok(CartStore::new(dirs.data_dir().join(SLOT_FILE)))
    }

    /// Returns the slot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cart from the slot.
    ///
    /// This is the **named empty-cart fallback**: an absent slot, an
    /// unreadable file, or undecodable content all load as the empty cart.
    /// A corrupted slot must never stop the storefront from starting, so
    /// `load` has no error path.
    pub fn load(&self) -> Cart {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "cart slot absent, starting empty");
                return Cart::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "cart slot unreadable, recovering empty cart");
                return Cart::new();
            }
        };

        match serde_json::from_slice::<Vec<CartItem>>(&bytes) {
            Ok(items) => Cart::from_items(items),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "cart slot undecodable, recovering empty cart");
                Cart::new()
            }
        }
    }

    /// Writes the full cart to the slot, replacing any prior value.
    ///
    /// The write goes to a sibling temp file first and is renamed over the
    /// slot, so a crash mid-save leaves the previous value intact.
    pub fn save(&self, cart: &Cart) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec(&cart.items)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), lines = cart.item_count(), "cart slot saved");
        Ok(())
    }

    /// Removes the stored value entirely.
    ///
    /// Equivalent to every future `load` returning the empty cart. A slot
    /// that is already absent counts as success.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cart slot cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
