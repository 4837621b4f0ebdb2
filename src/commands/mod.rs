use crate::model::Product;

pub mod create;
pub mod destroy;
pub mod list;
pub mod show;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What one operation produced. `listed_products` is the compact id/name
/// view (List); `affected_products` are shown in full (Show, Create, Update).
/// The library never prints; the CLI decides how to render this.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }
}

/// The four operator-supplied fields of a new or replacement product.
/// `price` must already be in accepted `x.xx` form; the command re-validates.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub aisle: String,
    pub department: String,
    pub price: String,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        aisle: impl Into<String>,
        department: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aisle: aisle.into(),
            department: department.into(),
            price: price.into(),
        }
    }
}
