//! Mock shopping cart used by the cart screen

use thiserror::Error;
use uuid::Uuid;

/// A line in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Number of units
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart line with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
        }
    }
}

/// Errors from cart operations
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CartError {
    /// The item was removed or never existed
    #[error("item {0} is no longer in the cart")]
    NotFound(Uuid),
}

/// In-memory cart contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a cart holding the given items
    #[must_use]
    pub const fn with_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Cart pre-filled with mock products
    #[must_use]
    pub fn sample() -> Self {
        Self::with_items(vec![
            CartItem::new("Canvas tote bag", 1),
            CartItem::new("Ceramic pour-over set", 1),
            CartItem::new("Merino crew socks", 3),
            CartItem::new("Linen apron", 2),
        ])
    }

    /// All items in display order
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Item at a display index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Number of lines in the cart
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Remove an item by id
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotFound` if no item has this id
    pub fn remove(&mut self, id: Uuid) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Remove every item, returning how many lines were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }
}
