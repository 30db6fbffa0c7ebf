use uuid::Uuid;

use crate::cart::Cart;

#[derive(Debug, Clone)]
struct Shopper {
    id: Uuid,
    cart: Cart,
}

/// Latest cart of every connected shopper, in the order they joined.
#[derive(Debug, Default)]
pub struct Roster {
    shoppers: Vec<Shopper>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shopper with an empty cart. Joining twice is a no-op.
    pub fn join(&mut self, id: Uuid) {
        if self.position(id).is_none() {
            self.shoppers.push(Shopper {
                id,
                cart: Cart::new(),
            });
        }
    }

    /// Replaces a shopper's cart. Returns false for unknown shoppers.
    pub fn update(&mut self, id: Uuid, cart: Cart) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.shoppers[idx].cart = cart;
                true
            }
            None => false,
        }
    }

    pub fn leave(&mut self, id: Uuid) {
        self.shoppers.retain(|shopper| shopper.id != id);
    }

    /// Everybody's cart except `id`'s, in join order.
    pub fn others(&self, id: Uuid) -> Vec<Cart> {
        self.shoppers
            .iter()
            .filter(|shopper| shopper.id != id)
            .map(|shopper| shopper.cart.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shoppers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoppers.is_empty()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.shoppers.iter().position(|shopper| shopper.id == id)
    }
}
