use serde::{Deserialize, Serialize};

/// One inventory record. All fields are text: `id` is a string of digits
/// compared textually, `price` is a fixed two-decimal string like `"3.50"`.
///
/// Field order matters: it is the column order of the CSV store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub aisle: String,
    pub department: String,
    pub price: String,
}

/// The full in-memory record collection for one session.
///
/// Insertion order is preserved (it mirrors file order; there is no sort
/// step). Ids are unique after every successful operation; lookups are
/// first-match-wins if that invariant is ever violated by hand-edited data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// First product with the given id, if any.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Every product with the given id, in collection order.
    pub fn find_all(&self, id: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.id == id).collect()
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes and returns the first product with the given id.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let pos = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(pos))
    }

    /// The id a newly created product receives: one past the highest numeric
    /// id in the collection. An empty collection starts at `"1"`; ids that do
    /// not parse as numbers are skipped rather than treated as fatal.
    pub fn next_id(&self) -> String {
        let max = self
            .products
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
