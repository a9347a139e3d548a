/*
 * Responsibility
 * - Public surface of the middleware layer
 * - auth: access (bearer token) and admin (role) gates
 * - cors / http / security_headers: router-wide concerns
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
