//! App Router

use salvo::Router;

use crate::items;

pub(crate) fn app_router() -> Router {
    Router::with_path("items")
        .get(items::index::handler)
        .post(items::create::handler)
        .push(
            Router::with_path("{id}")
                .get(items::get::handler)
                .put(items::update::handler)
                .delete(items::delete::handler),
        )
}
