/*
 * Responsibility
 * - The URL layout, split into three gate classes:
 *   - public:   no gate
 *   - identity: bearer token (middleware::auth::access)
 *   - admin:    bearer token, then admin role (middleware::auth::admin)
 * - Ownership checks are per handler (see AuthCtx::ensure_owner)
 */
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::handlers::{
    bookings::{create_booking, get_booking, list_user_bookings},
    categories::{list_categories, list_category_products},
    health::{health, root},
    payments::{create_payment, create_payment_intent},
    products::{
        advertise_product, create_product, delete_product, delete_reported, list_advertised,
        list_reported, list_seller_products, report_product,
    },
    token::issue_token,
    users::{
        admin_status, create_account, delete_account, list_buyers, list_sellers, seller_status,
        update_role, verify_seller,
    },
};
use crate::middleware::auth::{access, admin};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    public_routes()
        .merge(identity_routes(state.clone()))
        .merge(admin_routes(state))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/jwt", get(issue_token))
        .route("/users", post(create_account))
        .route("/users/admin/{email}", get(admin_status))
        .route("/users/seller/{email}", get(seller_status))
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/products", get(list_category_products))
        .route("/products/advertised", get(list_advertised))
}

fn identity_routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/products", post(create_product))
        .route("/products/seller/{email}", get(list_seller_products))
        .route("/products/{product_id}", delete(delete_product))
        .route("/products/{product_id}/advertise", put(advertise_product))
        .route("/products/{product_id}/report", put(report_product))
        .route("/bookings", post(create_booking))
        .route("/bookings/{booking_id}", get(get_booking))
        .route("/user/bookings/{email}", get(list_user_bookings))
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", post(create_payment));

    access::protect(router, state)
}

fn admin_routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/users/sellers", get(list_sellers))
        .route("/users/buyers", get(list_buyers))
        .route("/users/{account_id}", delete(delete_account))
        .route("/users/{account_id}/verify", put(verify_seller))
        .route("/users/{account_id}/role", put(update_role))
        .route("/products/reported", get(list_reported))
        .route("/products/reported/{product_id}", delete(delete_reported));

    admin::protect(router, state)
}
