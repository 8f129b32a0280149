//! Domain models for the bakery API.
//!
//! The listing structs map to the `products`, `team` and `testimonials`
//! tables. Each one also carries the fixed demo payload served when the
//! database cannot be reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::FromRow;

// ============================================================================
// Listings
// ============================================================================

/// A read-only table exposed as a JSON array.
///
/// `QUERY` must return the columns the implementing struct decodes, ordered
/// by ascending id.
pub trait Listing: for<'r> FromRow<'r, MySqlRow> + Serialize + Send + Unpin + Sized {
    /// Short name used in logs.
    const KIND: &'static str;
    const QUERY: &'static str;

    /// Payload served in place of live rows when any database step fails.
    fn fallback() -> Vec<Self>;
}

/// A product on sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

/// A member of the bakery team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub image: String,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub text: String,
}

/// Price with two decimal places, e.g. `cents(4999)` is 49.99.
const fn cents(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

const FALLBACK_PRODUCTS: [(i64, &str, Decimal, &str); 6] = [
    (1, "Cake", cents(4999), "/img/product-1.jpg"),
    (2, "Bread", cents(1499), "/img/product-2.jpg"),
    (3, "Cookies", cents(2449), "/img/product-3.jpg"),
    (4, "Pastry", cents(1500), "/img/product-1.jpg"),
    (5, "Donuts", cents(1000), "/img/product-2.jpg"),
    (6, "Croissants", cents(1200), "/img/product-3.jpg"),
];

const FALLBACK_TEAM: [(i64, &str, &str, &str); 4] = [
    (1, "ganesh jadhav", "Master Chef", "/img/team-1.jpg"),
    (2, "akshay malviya", "Bakery Specialist", "/img/team-2.jpg"),
    (3, "krushna kharat", "Cake Decorator", "/img/team-3.jpg"),
    (4, "rushikesh yadhav", "Pastry Expert", "/img/team-4.jpg"),
];

const FALLBACK_TESTIMONIALS: [(i64, &str, &str); 3] = [
    (1, "John", "Best bakery in town"),
    (2, "Emma", "Amazing croissants"),
    (3, "Liam", "Great service and coffee"),
];

// NULL text columns come back as "" and a NULL price as 0. Ids are read as
// signed 64-bit so unsigned INT columns decode too.
impl Listing for Product {
    const KIND: &'static str = "products";
    const QUERY: &'static str = r#"
        SELECT CAST(id AS SIGNED) AS id, COALESCE(name, '') AS name,
               CAST(COALESCE(price, 0) AS DECIMAL(10, 2)) AS price,
               COALESCE(image, '') AS image
        FROM products
        ORDER BY id ASC
    "#;

    fn fallback() -> Vec<Self> {
        FALLBACK_PRODUCTS
            .iter()
            .map(|&(id, name, price, image)| Product {
                id,
                name: name.to_string(),
                price,
                image: image.to_string(),
            })
            .collect()
    }
}

impl Listing for TeamMember {
    const KIND: &'static str = "team";
    const QUERY: &'static str = r#"
        SELECT CAST(id AS SIGNED) AS id, COALESCE(name, '') AS name,
               COALESCE(role, '') AS role, COALESCE(image, '') AS image
        FROM team
        ORDER BY id ASC
    "#;

    fn fallback() -> Vec<Self> {
        FALLBACK_TEAM
            .iter()
            .map(|&(id, name, role, image)| TeamMember {
                id,
                name: name.to_string(),
                role: role.to_string(),
                image: image.to_string(),
            })
            .collect()
    }
}

impl Listing for Testimonial {
    const KIND: &'static str = "testimonials";
    const QUERY: &'static str = r#"
        SELECT CAST(id AS SIGNED) AS id, COALESCE(name, '') AS name, COALESCE(text, '') AS text
        FROM testimonials
        ORDER BY id ASC
    "#;

    fn fallback() -> Vec<Self> {
        FALLBACK_TESTIMONIALS
            .iter()
            .map(|&(id, name, text)| Testimonial {
                id,
                name: name.to_string(),
                text: text.to_string(),
            })
            .collect()
    }
}

// ============================================================================
// Response Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Ok,
    Error,
}

/// Result of a contact-form submission. Always sent with HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: ContactStatus,
    pub message: String,
}

impl ContactResponse {
    pub fn saved() -> Self {
        Self {
            status: ContactStatus::Ok,
            message: "saved to database".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ContactStatus::Error,
            message: message.into(),
        }
    }
}

/// Body of a 405 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn method_not_allowed() -> Self {
        Self {
            error: "method not allowed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_product_fallback_matches_demo_catalog() {
        let products = Product::fallback();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            names,
            vec!["Cake", "Bread", "Cookies", "Pastry", "Donuts", "Croissants"]
        );
        assert_eq!(products[0].price.to_string(), "49.99");
        assert_eq!(products[3].price.to_string(), "15.00");
    }

    #[test]
    fn test_price_serializes_as_json_number() {
        let value = serde_json::to_value(&Product::fallback()[0]).unwrap();
        let price = value["price"].as_f64().expect("price should be a number");
        assert!((price - 49.99).abs() < 1e-9);
        assert_eq!(value["image"], "/img/product-1.jpg");
    }

    #[test]
    fn test_team_and_testimonial_fallbacks() {
        let team = TeamMember::fallback();
        assert_eq!(team.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(team[0].role, "Master Chef");

        let testimonials = Testimonial::fallback();
        assert_eq!(
            testimonials.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(testimonials[1].text, "Amazing croissants");
    }

    #[test]
    fn test_quotes_and_backslashes_survive_serialization() {
        let original = Testimonial {
            id: 7,
            name: r#"Ann "the baker" O\Brien"#.to_string(),
            text: "path C:\\oven\\tray and a \"quote\"\nnewline".to_string(),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Testimonial = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);

        let raw: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(raw["name"], original.name.as_str());
    }

    #[test]
    fn test_contact_response_shapes() {
        assert_eq!(
            serde_json::to_value(ContactResponse::saved()).unwrap(),
            json!({"status": "ok", "message": "saved to database"})
        );
        assert_eq!(
            serde_json::to_value(ContactResponse::failed("boom")).unwrap(),
            json!({"status": "error", "message": "boom"})
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::method_not_allowed()).unwrap(),
            json!({"error": "method not allowed"})
        );
    }

    #[test]
    fn test_queries_order_by_id() {
        for query in [Product::QUERY, TeamMember::QUERY, Testimonial::QUERY] {
            assert!(query.contains("ORDER BY id ASC"));
        }
    }

    #[test]
    fn test_queries_never_select_a_bare_nullable_column() {
        let cases = [
            (Product::QUERY, &["name", "price", "image"][..]),
            (TeamMember::QUERY, &["name", "role", "image"][..]),
            (Testimonial::QUERY, &["name", "text"][..]),
        ];

        for (query, columns) in cases {
            assert!(query.contains("CAST(id AS SIGNED) AS id"));
            for column in columns {
                assert!(
                    query.contains(&format!("COALESCE({column}, ")),
                    "{column} must be NULL-safe in {query}"
                );
            }
        }
    }
}
