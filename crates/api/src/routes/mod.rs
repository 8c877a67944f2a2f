pub mod admin;
pub mod configurator;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /public/config                                   full catalog snapshot (GET)
/// /public/head-variants                            list head variants (GET)
/// /public/shank-variants                           list shank variants (GET)
/// /public/metal-colors                             list active metal colors (GET)
/// /public/pricing                                  pricing configuration (GET)
///
/// /public/configurator/session                     start a fresh session (POST)
/// /public/configurator/transition                  apply a selection action (POST)
/// /public/configurator/quote                       price a selection (POST)
///
/// /admin/diamond-shapes                            list, create
/// /admin/diamond-shapes/{id}                       get, update, delete
/// /admin/setting-styles                            list, create
/// /admin/setting-styles/{id}                       get, update, delete
/// /admin/carat-weights                             list, create
/// /admin/carat-weights/{id}                        get, update, delete
/// /admin/shank-categories                          list, create
/// /admin/shank-categories/{id}                     get, update, delete
/// /admin/shank-variants                            list, create
/// /admin/shank-variants/{id}                       get, update, delete
/// /admin/metal-colors                              list, create
/// /admin/metal-colors/{id}                         get, update, delete
/// /admin/head-variants                             list, create
/// /admin/head-variants/{id}                        get, update, delete
///
/// /admin/pricing                                   get-or-create, update (GET, PUT)
/// /admin/pricing/shank-modifiers/{id}              set, remove (PUT, DELETE)
/// /admin/pricing/carat-modifiers/{id}              set, remove (PUT, DELETE)
/// /admin/pricing/matching-band-modifiers/{id}      set, remove (PUT, DELETE)
/// /admin/pricing/metal-color-modifiers/{id}        set, remove (PUT, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/public", public::router())
        .nest("/public/configurator", configurator::router())
        .nest("/admin", admin::router())
}
