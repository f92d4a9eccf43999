use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{Result, SiteError};

/// What the anchor observer needs from the host document.
pub trait AnchorDom {
    /// Whether an element with this id is currently rendered.
    fn contains(&self, id: &str) -> impl Future<Output = Result<bool>>;

    /// Smooth, top-aligned scroll to the element with this id.
    ///
    /// Resolves to `false` when no such element exists.
    fn scroll_into_view(&self, id: &str) -> impl Future<Output = Result<bool>>;

    fn wait(&self, delay: Duration) -> impl Future<Output = Result<()>>;
}

/// Browser document reached through `document::eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalDom;

impl AnchorDom for EvalDom {
    fn contains(&self, id: &str) -> impl Future<Output = Result<bool>> {
        let script = js_string(id)
            .map(|id| format!("return document.getElementById({id}) !== null;"));
        async move { run(script?).await }
    }

    fn scroll_into_view(&self, id: &str) -> impl Future<Output = Result<bool>> {
        let script = js_string(id).map(|id| {
            format!(
                r#"const el = document.getElementById({id});
if (!el) {{ return false; }}
el.scrollIntoView({{ behavior: "smooth", block: "start" }});
return true;"#
            )
        });
        async move { run(script?).await }
    }

    fn wait(&self, delay: Duration) -> impl Future<Output = Result<()>> {
        let script = format!(
            "await new Promise((resolve) => setTimeout(resolve, {})); return null;",
            delay.as_millis()
        );
        async move { run(script).await }
    }
}

/// Encodes `value` as a JavaScript string literal.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

async fn run<T: DeserializeOwned>(script: String) -> Result<T> {
    dioxus::document::eval(&script)
        .join::<T>()
        .await
        .map_err(|err| SiteError::Eval(err.to_string()))
}
