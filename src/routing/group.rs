//! Route groups sharing a common base path.

use axum::routing::MethodRouter;
use axum::Router;

use crate::routing::path::compose;

/// A set of routes registered under one base path.
///
/// The base path must start with `/` (checked by config validation); axum
/// rejects routes that do not.
#[derive(Debug)]
pub struct RouteGroup<S = ()> {
    base_path: String,
    router: Router<S>,
}

impl<S> RouteGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an empty group rooted at `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            router: Router::new(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Full path a route registered as `relative` would be served at.
    pub fn absolute_path(&self, relative: &str) -> String {
        compose(&self.base_path, relative)
    }

    /// Create a child group nested under `relative`.
    ///
    /// The child starts with no routes; fold it back with [`RouteGroup::merge`].
    pub fn group(&self, relative: &str) -> Self {
        Self::new(self.absolute_path(relative))
    }

    /// Register `method_router` at the composed path.
    pub fn route(mut self, relative: &str, method_router: MethodRouter<S>) -> Self {
        let path = self.absolute_path(relative);
        tracing::debug!(path = %path, base_path = %self.base_path, "Registering route");
        self.router = self.router.route(&path, method_router);
        self
    }

    /// Absorb the routes of a child group.
    pub fn merge(mut self, child: RouteGroup<S>) -> Self {
        self.router = self.router.merge(child.router);
        self
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    #[test]
    fn test_absolute_path() {
        let group: RouteGroup = RouteGroup::new("/api");
        assert_eq!(group.absolute_path(""), "/api");
        assert_eq!(group.absolute_path("users/"), "/api/users/");

        let v2 = group.group("../v2");
        assert_eq!(v2.base_path(), "/v2");
    }

    #[test]
    fn test_nested_groups_compose() {
        let api: RouteGroup = RouteGroup::new("/api");
        let admin = api.group("admin/").group("users");
        assert_eq!(admin.base_path(), "/api/admin/users");
    }

    #[tokio::test]
    async fn test_routes_served_at_composed_paths() {
        let api: RouteGroup = RouteGroup::new("/api");
        let admin = api.group("admin").route("stats/", get(|| async { "stats" }));
        let router = api
            .route("ping", get(|| async { "pong" }))
            .merge(admin)
            .into_router();

        let res = router
            .clone()
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = router
            .clone()
            .oneshot(Request::get("/api/admin/stats/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        // trailing slash is part of the route
        let res = router
            .oneshot(Request::get("/api/admin/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
