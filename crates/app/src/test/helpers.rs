//! Test Helpers

use jiff::civil::{Date, date};
use promodesk::promotions::{Promotion, PromotionId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::gateway::MockPromotionsGateway;

pub(crate) fn promotion(
    id: u64,
    name: &str,
    (start_date, end_date): (Date, Date),
    budget: Decimal,
    sales_impact: Option<Decimal>,
) -> Promotion {
    Promotion {
        id: PromotionId::Number(id),
        name: name.to_string(),
        start_date,
        end_date,
        budget,
        sales_impact,
    }
}

pub(crate) fn spring_sale() -> Promotion {
    promotion(
        1,
        "Spring Sale",
        (date(2024, 3, 1), date(2024, 3, 31)),
        dec!(1000),
        Some(dec!(200)),
    )
}

pub(crate) fn winter_sale() -> Promotion {
    promotion(
        2,
        "Winter Sale",
        (date(2024, 12, 1), date(2024, 12, 24)),
        dec!(500),
        None,
    )
}

/// A gateway mock that fails the test on any call.
pub(crate) fn strict_gateway_mock() -> MockPromotionsGateway {
    let mut gateway = MockPromotionsGateway::new();

    gateway.expect_list_promotions().never();
    gateway.expect_create_promotion().never();
    gateway.expect_update_promotion().never();
    gateway.expect_delete_promotion().never();

    gateway
}
