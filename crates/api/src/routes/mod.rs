pub mod blogs;
pub mod health;
pub mod session;
pub mod wishes;

use axum::middleware::from_extractor_with_state;
use axum::Router;

use crate::middleware::auth::SessionUser;
use crate::state::AppState;

/// How a route group is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No session needed.
    Public,
    /// A valid `token` cookie is required (401 otherwise).
    Session,
}

/// Build the application route tree.
///
/// Every route belongs to exactly one group, and each group's access is
/// declared here:
///
/// ```text
/// group       routes                                             access
/// ---------   ------------------------------------------------   ----------------------------
/// health      GET /, GET /health                                 public
/// session     POST /jwt, GET /logout                             public
/// reads       GET /blogs, /blogs/{id}, /view/{id}, /all-blogs,   public
///             /blogs-count, /wish/{id}, /wish-find/{id}
/// writes      POST /blog, POST /wish-create, DELETE /wishes/{id} public, or session when
///                                                                REQUIRE_AUTH_FOR_WRITES=true
/// protected   GET /session                                       session
/// ```
pub fn app_routes(state: &AppState) -> Router<AppState> {
    let writes_access = if state.config.require_auth_for_writes {
        Access::Session
    } else {
        Access::Public
    };

    let reads = blogs::public().merge(wishes::public());
    let writes = blogs::writes().merge(wishes::writes());

    Router::new()
        .merge(health::router())
        .merge(session::public())
        .merge(gate(reads, Access::Public, state))
        .merge(gate(writes, writes_access, state))
        .merge(gate(session::protected(), Access::Session, state))
}

/// Apply `access` to every route already registered on `routes`.
fn gate(routes: Router<AppState>, access: Access, state: &AppState) -> Router<AppState> {
    match access {
        Access::Public => routes,
        Access::Session => {
            routes.route_layer(from_extractor_with_state::<SessionUser, AppState>(state.clone()))
        }
    }
}
