//! Resource definitions: table, columns, and the client-facing messages for each entity.
//! Identifiers here are the only ones that ever reach SQL text.

/// JSON/SQL kind of a mutable column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Float,
    Integer,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Text => "a string",
            ColumnKind::Float => "a number",
            ColumnKind::Integer => "an integer",
        }
    }
}

#[derive(Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: ColumnKind) -> ColumnDef {
    ColumnDef { name, kind, required: true }
}

const fn optional(name: &'static str, kind: ColumnKind) -> ColumnDef {
    ColumnDef { name, kind, required: false }
}

/// Static description of one table exposed over HTTP. The id column is always `id`,
/// assigned by the store and never part of `columns`.
#[derive(Debug)]
pub struct ResourceDef {
    pub table: &'static str,
    /// Capitalized singular, e.g. "User".
    pub label: &'static str,
    /// Lowercase plural used in list failures, e.g. "users".
    pub plural: &'static str,
    /// Key carrying the generated id in the create response.
    pub id_key: &'static str,
    pub missing_fields: &'static str,
    /// Mutable columns in bind order.
    pub columns: &'static [ColumnDef],
}

pub const ID_COLUMN: &str = "id";

impl ResourceDef {
    pub fn not_found(&self) -> String {
        format!("{} not found", self.label)
    }

    pub fn fetch_failed(&self) -> String {
        format!("Failed to fetch {}", self.plural)
    }

    pub fn added(&self) -> String {
        format!("{} added successfully!", self.label)
    }

    pub fn add_failed(&self) -> String {
        format!("Failed to add {}", self.label.to_lowercase())
    }

    pub fn updated(&self) -> String {
        format!("{} updated successfully", self.label)
    }

    pub fn update_failed(&self) -> String {
        format!("Failed to update {}", self.label.to_lowercase())
    }

    pub fn deleted(&self) -> String {
        format!("{} deleted successfully", self.label)
    }

    pub fn delete_failed(&self) -> String {
        format!("Failed to delete {}", self.label.to_lowercase())
    }
}

pub const USERS: ResourceDef = ResourceDef {
    table: "users",
    label: "User",
    plural: "users",
    id_key: "userId",
    missing_fields: "Username and password are required",
    columns: &[
        required("username", ColumnKind::Text),
        // Stored verbatim; no hashing at this layer.
        required("password", ColumnKind::Text),
    ],
};

pub const PRODUCTS: ResourceDef = ResourceDef {
    table: "products",
    label: "Product",
    plural: "products",
    id_key: "productId",
    missing_fields: "Name, category, price, and quantity are required",
    columns: &[
        required("name", ColumnKind::Text),
        optional("description", ColumnKind::Text),
        required("category", ColumnKind::Text),
        required("price", ColumnKind::Float),
        required("quantity", ColumnKind::Integer),
    ],
};

/// Marker type selecting a [`ResourceDef`] for the generic handlers.
pub trait Resource: Send + Sync + 'static {
    const DEF: &'static ResourceDef;
}

pub struct Users;
pub struct Products;

impl Resource for Users {
    const DEF: &'static ResourceDef = &USERS;
}

impl Resource for Products {
    const DEF: &'static ResourceDef = &PRODUCTS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(USERS.added(), "User added successfully!");
        assert_eq!(USERS.add_failed(), "Failed to add user");
        assert_eq!(USERS.fetch_failed(), "Failed to fetch users");
        assert_eq!(PRODUCTS.not_found(), "Product not found");
        assert_eq!(PRODUCTS.updated(), "Product updated successfully");
        assert_eq!(PRODUCTS.delete_failed(), "Failed to delete product");
    }

    #[test]
    fn only_description_is_optional() {
        let optional: Vec<_> = PRODUCTS
            .columns
            .iter()
            .filter(|c| !c.required)
            .map(|c| c.name)
            .collect();
        assert_eq!(optional, vec!["description"]);
        assert!(USERS.columns.iter().all(|c| c.required));
    }
}
