//! Leptos Catalog Application

use std::rc::Rc;

use leptos::{prelude::*, task::spawn_local};

use catalog::Product;
use catalog_web::{Catalog, CatalogState, HttpItemsApi};

type AppCatalog = Rc<Catalog<HttpItemsApi>>;

/// Main catalog app shell.
#[component]
fn App() -> impl IntoView {
    let catalog: AppCatalog = Rc::new(Catalog::new(HttpItemsApi::default()));
    let state = catalog.state();
    let catalog = StoredValue::new_local(catalog);

    run(catalog, |catalog| async move {
        _ = catalog.load().await;
    });

    view! {
        <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
            <div class="mx-auto mb-6 max-w-3xl">
                <h1 class="text-2xl font-semibold tracking-tight">"Product Catalog"</h1>
            </div>
            <div class="mx-auto max-w-3xl space-y-6">
                <ErrorBanner state=state />
                <DraftForm state=state catalog=catalog />
                <ProductsTable state=state catalog=catalog />
            </div>
            <footer class="mx-auto mt-8 max-w-3xl text-sm text-slate-500">
                "Catalog · items are served from the JSON API"
            </footer>
        </main>
    }
}

/// Spawn an action on the browser event loop.
fn run<F, Fut>(catalog: StoredValue<AppCatalog, LocalStorage>, action: F)
where
    F: FnOnce(AppCatalog) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    if let Some(catalog) = catalog.try_get_value() {
        spawn_local(action(catalog));
    }
}

#[component]
fn ErrorBanner(state: RwSignal<CatalogState>) -> impl IntoView {
    move || {
        state.with(|state| state.error().map(str::to_owned)).map(|message| {
            view! {
                <div class="rounded-lg border border-red-200 bg-red-50 p-4" role="alert">
                    <p class="text-sm text-red-700">{message}</p>
                </div>
            }
        })
    }
}

#[component]
fn DraftForm(
    state: RwSignal<CatalogState>,
    catalog: StoredValue<AppCatalog, LocalStorage>,
) -> impl IntoView {
    view! {
        <form
            class="flex gap-2"
            on:submit=move |event| {
                event.prevent_default();
                run(catalog, |catalog| async move {
                    _ = catalog.add().await;
                });
            }
        >
            <input
                type="text"
                placeholder="Name"
                aria-label="Product name"
                prop:value=move || state.with(|state| state.draft().name.clone())
                on:input=move |event| {
                    let value = event_target_value(&event);
                    state.update(|state| state.draft_mut().name = value);
                }
            />
            <input
                type="text"
                inputmode="decimal"
                placeholder="Price"
                aria-label="Product price"
                prop:value=move || state.with(|state| state.draft().price.clone())
                on:input=move |event| {
                    let value = event_target_value(&event);
                    state.update(|state| state.draft_mut().price = value);
                }
            />
            <button type="submit" class="icon-button icon-button-primary">
                "Add Product"
            </button>
        </form>
    }
}

#[component]
fn ProductRow(product: Product, catalog: StoredValue<AppCatalog, LocalStorage>) -> impl IntoView {
    let id = product.uuid;
    let remove_label = format!("Delete {}", product.name);

    view! {
        <tr>
            <td>{product.name}</td>
            <td class="text-right">{product.price.to_string()}</td>
            <td>
                <button
                    type="button"
                    aria-label=remove_label
                    on:click=move |_| {
                        run(catalog, move |catalog| async move {
                            _ = catalog.remove(id).await;
                        });
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn ProductsTable(
    state: RwSignal<CatalogState>,
    catalog: StoredValue<AppCatalog, LocalStorage>,
) -> impl IntoView {
    let status = move || {
        state.with(CatalogState::status_message).map(|message| {
            view! { <tr><td colspan="3" aria-live="polite">{message}</td></tr> }
        })
    };

    let rows = move || {
        state
            .with(|state| state.products().to_vec())
            .into_iter()
            .map(|product| view! { <ProductRow product=product catalog=catalog /> })
            .collect_view()
    };

    view! {
        <table class="w-full">
            <thead>
                <tr>
                    <th class="text-left">"Name"</th>
                    <th class="text-right">"Price"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{status}{rows}</tbody>
        </table>
    }
}

/// Main client entry point
fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = catalog_web::logging::init() {
        leptos::logging::warn!("tracing subscriber not installed: {error}");
    }

    leptos::mount::mount_to_body(App);
}
