use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque product key, taken from the route segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Product category. The backend stores these as `categoria_id` integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    HealthCare,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Food, Category::HealthCare]
    }

    pub fn id(self) -> u32 {
        match self {
            Category::Food => 1,
            Category::HealthCare => 2,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }

    /// Parse the raw value of the category `<select>`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::from_id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Alimentos",
            Category::HealthCare => "Cuidados com a saúde",
        }
    }
}

/// A product record as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Base64 data URL (`data:image/png;base64,...`).
    #[serde(rename = "imagem")]
    pub image: String,
    #[serde(rename = "categoria_id")]
    pub category_id: u32,
}

// Numeric columns come back as JSON strings from some backends ("12.50").
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {s:?}: {e}"))),
    }
}

/// Editable copy of a product, holding the raw form input.
///
/// Price and category stay as text until validation so that empty or
/// malformed input reaches the validator instead of being lost on parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".into(),
            description: String::new(),
            category: Category::Food.id().to_string(),
            image: String::new(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category_id.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Body of a successful update response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReceipt {
    #[serde(rename = "mensagem")]
    pub message: String,
}
