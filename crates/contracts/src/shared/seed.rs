//! Process-resident mock data.
//!
//! There is no server and no persistence; both collections are seeded
//! here. Generation is deterministic (fixed-seed xorshift and a fixed
//! base date) so list and dashboard tests are reproducible run to run.

use crate::domain::w001_inventory_item::{InventoryItem, InventoryItemDraft};
use crate::domain::w002_order::{Order, OrderDraft, OrderLine};
use crate::enums::OrderStatus;
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;

/// (name, category, base unit price)
const PRODUCTS: &[(&str, &str, f64)] = &[
    ("Laptop", "Electronics", 1200.0),
    ("Mouse", "Accessories", 25.0),
    ("Keyboard", "Accessories", 60.0),
    ("Monitor", "Electronics", 350.0),
    ("Desk Chair", "Furniture", 240.0),
    ("Headphones", "Electronics", 150.0),
    ("Smartphone", "Electronics", 800.0),
    ("Charger", "Accessories", 20.0),
];

const COMPANY_NAMES: &[&str] = &[
    "Teva Pharmaceutical",
    "Check Point Software",
    "Amdocs",
    "NICE Systems",
    "Elbit Systems",
    "Bank Leumi",
    "Bank Hapoalim",
    "Israel Aerospace Industries",
    "Mobileye",
    "Wix",
    "Monday.com",
    "Fiverr",
    "Taboola",
    "IronSource",
    "Playtika",
    "Tower Semiconductor",
    "Strauss Group",
    "El Al",
    "ZIM Shipping",
    "ICL Group",
];

pub const SEED_INVENTORY_COUNT: usize = 30;
pub const SEED_ORDER_COUNT: usize = 50;

/// All seed dates hang off this day instead of "today"
fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid base date")
}

/// xorshift64*; good enough to shuffle mock data, not a real RNG
struct SeedRng(u64);

impl SeedRng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }
}

pub static SEED_INVENTORY: Lazy<Vec<InventoryItem>> = Lazy::new(seed_inventory);
pub static SEED_ORDERS: Lazy<Vec<Order>> = Lazy::new(seed_orders);

pub fn seed_inventory() -> Vec<InventoryItem> {
    let mut rng = SeedRng::new(0x5eed_1001);
    let base = base_date();

    (0..SEED_INVENTORY_COUNT)
        .map(|i| {
            let (name, category, base_price) = PRODUCTS[i % PRODUCTS.len()];
            // +/-20% jitter around the base price
            let jitter = 0.8 + (rng.below(400) as f64) / 1000.0;
            let draft = InventoryItemDraft {
                name: name.to_string(),
                category: category.to_string(),
                quantity: rng.below(120) as u32,
                unit_price: (base_price * jitter * 100.0).round() / 100.0,
                supplier: rng.pick(COMPANY_NAMES).to_string(),
                last_updated: base - Duration::days(rng.below(365) as i64),
            };
            InventoryItem::new_for_insert(format!("ITM-{:03}", i + 1), draft)
        })
        .collect()
}

pub fn seed_orders() -> Vec<Order> {
    let mut rng = SeedRng::new(0x5eed_2002);
    let base = base_date();
    let statuses = OrderStatus::all();

    (0..SEED_ORDER_COUNT)
        .map(|i| {
            let created = base - Duration::days(rng.below(180) as i64);
            let line_count = 1 + rng.below(3) as usize;
            let items: Vec<OrderLine> = (0..line_count)
                .map(|_| OrderLine {
                    name: rng.pick(PRODUCTS).0.to_string(),
                    quantity: 1 + rng.below(5) as u32,
                })
                .collect();
            let draft = OrderDraft {
                customer_name: rng.pick(COMPANY_NAMES).to_string(),
                status: *rng.pick(&statuses),
                items,
                total_price: 50.0 + (rng.below(100_000) as f64) / 100.0,
                shipping_date: created + Duration::days(1 + rng.below(14) as i64),
                notes: if rng.below(2) == 0 {
                    Some("Special delivery instructions".to_string())
                } else {
                    None
                },
            };
            let mut order =
                Order::new_for_insert(format!("ORD-{:03}", i + 1), created, draft);
            order.updated_at = created + Duration::days(rng.below(10) as i64);
            order
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Record;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_inventory()[0].code, seed_inventory()[0].code);
        let a = seed_orders();
        let b = seed_orders();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.customer_name, y.customer_name);
            assert_eq!(x.total_price, y.total_price);
            assert_eq!(x.created_at, y.created_at);
        }
    }

    #[test]
    fn test_seed_codes_are_unique() {
        let items = seed_inventory();
        assert_eq!(items.len(), SEED_INVENTORY_COUNT);
        let mut codes: Vec<&str> = items.iter().map(|i| i.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), SEED_INVENTORY_COUNT);

        let orders = seed_orders();
        assert_eq!(orders.len(), SEED_ORDER_COUNT);
        let mut codes: Vec<&str> = orders.iter().map(|o| o.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), SEED_ORDER_COUNT);
    }

    #[test]
    fn test_seed_values_are_sane() {
        for item in seed_inventory() {
            assert!(item.unit_price > 0.0);
            assert!(item.quantity < 120);
            assert!(!item.supplier.is_empty());
        }
        for order in seed_orders() {
            assert!(order.total_price >= 50.0);
            assert!(!order.items.is_empty());
            assert!(order.shipping_date > order.created_at);
            assert!(order.updated_at >= order.created_at);
        }
    }
}
