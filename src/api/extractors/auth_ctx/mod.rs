/*!
 * Authentication context extractor
 *
 * - types: the AuthCtx contract (plus the ownership check)
 * - core: the axum FromRequestParts glue
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
