//! Seeded featured deals and category tabs.

use super::{Category, CategoryIcon, Deal, DiscountKind};
use crate::ids::DealId;

#[allow(clippy::too_many_arguments)]
fn deal(
    id: u32,
    brand: &str,
    title: &str,
    code: &str,
    description: &str,
    discount: u32,
    kind: DiscountKind,
    category: &str,
    expires_in: &str,
    rating: f32,
    uses: u32,
) -> Deal {
    Deal {
        id: DealId::from(id),
        brand: brand.to_string(),
        title: title.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        discount,
        kind,
        category: category.to_string(),
        expires_in: expires_in.to_string(),
        rating,
        uses,
        verified: true,
    }
}

pub(super) fn featured_deals() -> Vec<Deal> {
    vec![
        deal(
            1,
            "Amazon",
            "30% Off Electronics",
            "SAVE30TECH",
            "Get 30% off on all electronics including phones, laptops, and accessories",
            30,
            DiscountKind::Percentage,
            "Electronics",
            "2 days",
            4.8,
            1245,
        ),
        deal(
            2,
            "Nike",
            "Free Shipping + 25% Off",
            "NIKESAVE25",
            "Free shipping on all orders plus 25% off athletic wear and shoes",
            25,
            DiscountKind::Percentage,
            "Fashion",
            "5 days",
            4.9,
            892,
        ),
        deal(
            3,
            "Spotify",
            "3 Months Premium Free",
            "MUSIC3FREE",
            "Get 3 months of Spotify Premium completely free for new users",
            0,
            DiscountKind::Free,
            "Entertainment",
            "10 days",
            4.7,
            567,
        ),
        deal(
            4,
            "Uber Eats",
            "$20 Off First Order",
            "WELCOME20",
            "Save $20 on your first food delivery order, minimum $25 purchase",
            20,
            DiscountKind::FixedAmount,
            "Food",
            "1 day",
            4.6,
            2341,
        ),
    ]
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new("All", CategoryIcon::TrendingUp, 156),
        Category::new("Electronics", CategoryIcon::ShoppingBag, 42),
        Category::new("Fashion", CategoryIcon::Sparkles, 38),
        Category::new("Food", CategoryIcon::Tag, 29),
        Category::new("Entertainment", CategoryIcon::Star, 25),
        Category::new("Travel", CategoryIcon::Percent, 22),
    ]
}
