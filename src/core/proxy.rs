use serde::Serialize;

/// Forwards dev-server requests under `context` to `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub context: String,
    pub target: String,
    pub change_origin: bool,
}

impl ProxyRule {
    /// Proxy to a local upstream. The port is embedded as given.
    pub fn local(context: impl Into<String>, port: &str) -> Self {
        Self {
            context: context.into(),
            target: format!("http://localhost:{}", port),
            change_origin: true,
        }
    }

    /// Dev-server context matching: a trailing `/*` is dropped and the rest
    /// is a plain pathname prefix, so `/api/*` claims `/api`, `/api/users`
    /// and `/apiary` alike. A bare `*` claims everything. Query strings are
    /// ignored.
    pub fn matches(&self, request_path: &str) -> bool {
        if self.context == "*" {
            return true;
        }
        let path = request_path.split('?').next().unwrap_or_default();
        let prefix = self.context.strip_suffix("/*").unwrap_or(&self.context);
        path.starts_with(prefix)
    }

    pub fn forward_url(&self, request_path: &str) -> String {
        format!("{}{}", self.target.trim_end_matches('/'), request_path)
    }
}
