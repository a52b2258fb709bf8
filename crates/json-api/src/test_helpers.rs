//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog::{Product, ProductUuid};
use catalog_app::domain::products::MockProductsService;

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Pen".to_owned(),
        price: Decimal::from(2),
    }
}

pub(crate) fn items_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(products)))))
            .push(route),
    )
}
